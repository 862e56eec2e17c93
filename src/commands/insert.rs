//! `insert`: prompt the four fields and append a record.

use std::io::{BufRead, Write};

use super::{micros, prompt, timed};
use crate::catalog::Catalog;
use crate::error::AppError;
use crate::key::parse_price;
use crate::record::Record;

pub(super) fn execute<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let id = prompt(input, output, "Enter the ID: ")?;
    let id = id
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::parse(id.as_str(), "an integer id"))?;
    let name = prompt(input, output, "Enter the name: ")?;
    let price = prompt(input, output, "Enter the price: ")?;
    let price = parse_price(&price)?;
    let category = prompt(input, output, "Enter the category: ")?;

    let (_, elapsed) = timed(|| catalog.insert(Record::new(id, name, price, category)));
    writeln!(output, "Time: {} microseconds", micros(elapsed))?;
    Ok(())
}
