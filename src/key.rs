//! Key selection: which record field governs ordering and search, and how
//! query text is parsed into that field's comparison domain.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::error::AppError;
use crate::record::Record;

/// The record field a sort or search is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    ById,
    ByName,
    ByPrice,
}

/// Name comparison policy.
///
/// `FirstChar` reproduces the reference behavior: ordering and search probe
/// movement look only at the first character of the name, while the search
/// found-check compares the whole string. When several names share a first
/// letter, binary search's precondition (a total order consistent with the
/// probe comparison) no longer holds and a present record can be missed.
/// `Full` is the corrected policy: full lexicographic comparison throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameOrdering {
    #[default]
    FirstChar,
    Full,
}

fn first_char(name: &str) -> char {
    name.chars().next().unwrap_or('\0')
}

fn price_cmp(a: f64, b: f64) -> Ordering {
    // Prices are validated finite at every entry point, so NaN never
    // reaches a comparison.
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Parse a price, rejecting non-finite values: a NaN key compares Equal to
/// everything, which scrambles sort order and search movement alike.
pub(crate) fn parse_price(raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| AppError::parse(raw, "a decimal price"))
}

impl SortKey {
    /// Resolve the comparison for this key once; sort and search thread the
    /// returned function through instead of re-branching per element.
    pub fn comparator(self, names: NameOrdering) -> fn(&Record, &Record) -> Ordering {
        match (self, names) {
            (SortKey::ById, _) => |a, b| a.id.cmp(&b.id),
            (SortKey::ByName, NameOrdering::FirstChar) => {
                |a, b| first_char(&a.name).cmp(&first_char(&b.name))
            }
            (SortKey::ByName, NameOrdering::Full) => |a, b| a.name.cmp(&b.name),
            (SortKey::ByPrice, _) => |a, b| price_cmp(a.price, b.price),
        }
    }

    /// Parse raw query text into this key's comparison domain.
    ///
    /// Name queries take the text as-is; id and price queries fail with
    /// [`AppError::Parse`] on non-numeric input.
    pub fn parse_query(self, raw: &str, names: NameOrdering) -> Result<Query, AppError> {
        match self {
            SortKey::ById => raw
                .trim()
                .parse::<i64>()
                .map(Query::Id)
                .map_err(|_| AppError::parse(raw, "an integer id")),
            SortKey::ByName => Ok(Query::Name { raw: raw.to_string(), names }),
            SortKey::ByPrice => parse_price(raw).map(Query::Price),
        }
    }
}

/// A search query parsed into the key domain of its selector.
#[derive(Debug, Clone)]
pub enum Query {
    Id(i64),
    Name { raw: String, names: NameOrdering },
    Price(f64),
}

impl Query {
    /// How `record` orders relative to the query; drives probe movement.
    pub fn direction(&self, record: &Record) -> Ordering {
        match self {
            Query::Id(id) => record.id.cmp(id),
            Query::Name { raw, names } => match names {
                NameOrdering::FirstChar => first_char(&record.name).cmp(&first_char(raw)),
                NameOrdering::Full => record.name.as_str().cmp(raw.as_str()),
            },
            Query::Price(price) => price_cmp(record.price, *price),
        }
    }

    /// Whether `record` counts as found.
    ///
    /// Under first-character name ordering this is whole-string equality even
    /// though [`Query::direction`] moves by first character only — the
    /// asymmetry is preserved reference behavior.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Query::Name { raw, .. } => record.name == *raw,
            _ => self.direction(record) == Ordering::Equal,
        }
    }
}
