//! `update`: locate a record by id, then mutate exactly one field.

use std::io::{BufRead, Write};

use super::{micros, prompt, timed};
use crate::catalog::{Catalog, FieldEdit};
use crate::error::AppError;
use crate::key::{SortKey, parse_price};

pub(super) fn execute<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let raw_id = prompt(input, output, "Enter the ID: ")?;

    let (_, sort_elapsed) = timed(|| catalog.sort_by(SortKey::ById));
    writeln!(output, "Sort Time: {} microseconds", micros(sort_elapsed))?;

    let (found, search_elapsed) = timed(|| catalog.search_by(SortKey::ById, &raw_id));
    writeln!(output, "Search Time: {} microseconds", micros(search_elapsed))?;

    let Some(index) = found? else {
        writeln!(output, "Product not found.")?;
        return Ok(());
    };

    let field = prompt(input, output, "What to change? (id, name, price, category): ")?;
    let edit = match field.trim() {
        "id" => {
            let value = prompt(input, output, "Enter the new ID: ")?;
            FieldEdit::Id(
                value
                    .trim()
                    .parse()
                    .map_err(|_| AppError::parse(value.as_str(), "an integer id"))?,
            )
        }
        "name" => FieldEdit::Name(prompt(input, output, "Enter the new name: ")?),
        "price" => {
            let value = prompt(input, output, "Enter the new price: ")?;
            FieldEdit::Price(parse_price(&value)?)
        }
        "category" => FieldEdit::Category(prompt(input, output, "Enter the new category: ")?),
        other => return Err(AppError::InvalidField(other.to_string())),
    };

    let (updated, elapsed) = timed(|| catalog.update_field(index, edit));
    if updated {
        writeln!(output, "Update Time: {} microseconds", micros(elapsed))?;
    } else {
        writeln!(output, "Product not found.")?;
    }
    Ok(())
}
