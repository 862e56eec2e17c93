//! `print`: every record in current order, then the count.

use std::io::Write;

use crate::catalog::Catalog;
use crate::error::AppError;

pub(super) fn execute<W: Write>(catalog: &Catalog, output: &mut W) -> Result<(), AppError> {
    for record in catalog.records() {
        writeln!(output, "{record}")?;
    }
    writeln!(output, "{} products.", catalog.len())?;
    Ok(())
}
