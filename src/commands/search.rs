//! `search`: re-sort by the requested key, binary-search, report the record.

use std::io::{BufRead, Write};

use super::{micros, prompt, timed};
use crate::catalog::Catalog;
use crate::error::AppError;
use crate::key::SortKey;

pub(super) fn execute<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let selector = prompt(input, output, "Search by? (id, name, price): ")?;
    let (key, value_prompt) = match selector.trim() {
        "id" => (SortKey::ById, "Enter the ID: "),
        "name" => (SortKey::ByName, "Enter the name: "),
        "price" => (SortKey::ByPrice, "Enter the price: "),
        other => return Err(AppError::InvalidField(other.to_string())),
    };

    let raw = prompt(input, output, value_prompt)?;

    let (_, sort_elapsed) = timed(|| catalog.sort_by(key));
    writeln!(output, "Sort Time: {} microseconds", micros(sort_elapsed))?;

    let (found, search_elapsed) = timed(|| catalog.search_by(key, &raw));
    writeln!(output, "Search Time: {} microseconds", micros(search_elapsed))?;

    match found? {
        Some(index) => {
            writeln!(output, "Product found:")?;
            // Report a copy of the record; no borrow survives the command.
            let record = catalog.records()[index].clone();
            writeln!(output, "{record}")?;
        }
        None => writeln!(output, "Product not found.")?,
    }
    Ok(())
}
