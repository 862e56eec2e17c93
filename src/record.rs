//! The catalog record and its flat-text line format.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::AppError;
use crate::key::parse_price;

/// One catalog entry. Passive data; ordering and search live elsewhere.
///
/// Identifiers are not required to be unique — a search over duplicates
/// returns whichever match its probe sequence reaches first.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl Record {
    pub fn new(id: i64, name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self { id, name: name.into(), price, category: category.into() }
    }
}

impl FromStr for Record {
    type Err = AppError;

    /// Parse one data-file line: `id, name, price, category`, comma + space
    /// separated, exactly four fields.
    fn from_str(line: &str) -> Result<Self, AppError> {
        let fields: Vec<&str> = line.split(", ").collect();
        if fields.len() != 4 {
            return Err(AppError::parse(line, "a 4-field record"));
        }

        let id = fields[0]
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::parse(fields[0], "an integer id"))?;
        let price = parse_price(fields[2])?;

        Ok(Record { id, name: fields[1].to_string(), price, category: fields[3].to_string() })
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} Name: {} Price: {} Category: {}",
            self.id, self.name, self.price, self.category
        )
    }
}
