//! The owning record collection and the operations the command loop drives.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::AppError;
use crate::key::{NameOrdering, Query, SortKey};
use crate::record::Record;
use crate::search::search;
use crate::sort::sort;

/// One field edit applied by the update command. Field-name recognition and
/// value parsing happen at the command boundary, not here.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Id(i64),
    Name(String),
    Price(f64),
    Category(String),
}

/// Owns the record collection. Sort and search borrow the records for the
/// duration of one operation and hold nothing afterwards; the collection is
/// only ever in a valid search order for the key it was last sorted by.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<Record>,
    names: NameOrdering,
}

impl Catalog {
    pub fn new(names: NameOrdering) -> Self {
        Self { records: Vec::new(), names }
    }

    pub fn from_records(records: Vec<Record>, names: NameOrdering) -> Self {
        Self { records, names }
    }

    /// Load from flat text: one `id, name, price, category` record per line.
    ///
    /// Any malformed line fails the whole load with the 1-based line number;
    /// blank lines are skipped.
    pub fn load(path: &Path, names: NameOrdering) -> Result<Self, AppError> {
        let text = fs::read_to_string(path)?;
        let mut records = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = Record::from_str(line).map_err(|err| AppError::MalformedRecord {
                line: index + 1,
                reason: err.to_string(),
            })?;
            records.push(record);
        }
        Ok(Self { records, names })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn name_ordering(&self) -> NameOrdering {
        self.names
    }

    /// Append a record; the collection becomes unsorted relative to every key
    /// until the next [`Catalog::sort_by`].
    pub fn insert(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Quicksort the collection in place by `key`.
    pub fn sort_by(&mut self, key: SortKey) {
        sort(&mut self.records, key, self.names);
    }

    /// Binary-search for `raw` parsed into `key`'s domain.
    ///
    /// Precondition: the collection was last sorted by the same `key`.
    /// `Ok(None)` is not-found; `Err` only for unparseable queries.
    pub fn search_by(&self, key: SortKey, raw: &str) -> Result<Option<usize>, AppError> {
        let query = key.parse_query(raw, self.names)?;
        Ok(search(&self.records, &query))
    }

    /// Sort by `key`, then search: the one-call form for callers that do not
    /// time the phases separately.
    pub fn find(&mut self, key: SortKey, raw: &str) -> Result<Option<usize>, AppError> {
        self.sort_by(key);
        self.search_by(key, raw)
    }

    /// Apply one field edit to the record at `index`.
    ///
    /// Returns `false` without touching anything when `index` is stale or out
    /// of range.
    pub fn update_field(&mut self, index: usize, edit: FieldEdit) -> bool {
        let Some(record) = self.records.get_mut(index) else {
            return false;
        };
        match edit {
            FieldEdit::Id(id) => record.id = id,
            FieldEdit::Name(name) => record.name = name,
            FieldEdit::Price(price) => record.price = price,
            FieldEdit::Category(category) => record.category = category,
        }
        true
    }

    /// Two-phase delete: sort by id, binary-search to confirm the id exists,
    /// then re-derive the erase index with a separate linear scan. The
    /// confirming search's position is deliberately not reused; the scan
    /// keeps the externally observable confirm-then-remove sequence of the
    /// reference design.
    ///
    /// Returns whether a record was removed; `Err` only for an unparseable id.
    pub fn delete_by_id(&mut self, raw: &str) -> Result<bool, AppError> {
        let id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::parse(raw, "an integer id"))?;

        self.sort_by(SortKey::ById);
        if search(&self.records, &Query::Id(id)).is_none() {
            return Ok(false);
        }

        if let Some(index) = self.records.iter().position(|record| record.id == id) {
            self.records.remove(index);
        }
        Ok(true)
    }
}
