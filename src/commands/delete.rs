//! `delete`: confirm a record exists by id, then remove it.

use std::io::{BufRead, Write};

use super::{micros, prompt, timed};
use crate::catalog::Catalog;
use crate::error::AppError;

pub(super) fn execute<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let raw_id = prompt(input, output, "Enter the ID of the product you want to delete: ")?;

    let (deleted, elapsed) = timed(|| catalog.delete_by_id(&raw_id));
    if deleted? {
        writeln!(output, "Product deleted successfully.")?;
    } else {
        writeln!(output, "Product not found.")?;
    }
    writeln!(output, "Time: {} microseconds", micros(elapsed))?;
    Ok(())
}
