//! prodex: an interactive product catalog over a key-selectable quicksort and
//! binary search.
//!
//! Records load from flat text at startup (`id, name, price, category` per
//! line) into an in-memory [`Catalog`]. A line-oriented command loop then
//! supports insert, update, delete, search, and print. Ordering and lookup
//! are keyed by a caller-chosen field — numeric id, name, or price — via
//! [`SortKey`]; the catalog re-sorts with the key it is about to search by,
//! since one sort order is never valid for another key.
//!
//! The name key's comparison policy is selectable with [`NameOrdering`]:
//! the default reproduces the reference first-character ordering (including
//! its lookup blind spot when names share a first letter), and `Full` is the
//! corrected whole-string policy.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod key;
pub mod record;
pub mod search;
pub mod sort;

use std::io::{BufRead, Write};

pub use catalog::{Catalog, FieldEdit};
pub use config::Config;
pub use error::AppError;
pub use key::{NameOrdering, Query, SortKey};
pub use record::Record;

use commands::{micros, timed};

/// Load the catalog named by `config`, report load and initial-sort timings,
/// and run the interactive loop until `exit` or end of input.
///
/// Load failures (missing file, malformed record) are fatal and returned to
/// the caller; command-time errors are reported inside the loop.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let (loaded, elapsed) = timed(|| Catalog::load(&config.data, config.name_ordering));
    let mut catalog = loaded?;
    writeln!(output, "{} products loaded.", catalog.len())?;
    writeln!(output, "Time: {} microseconds", micros(elapsed))?;

    writeln!(output, "Sorting products by ID...")?;
    let (_, elapsed) = timed(|| catalog.sort_by(SortKey::ById));
    writeln!(output, "Sorting Complete! ({} microseconds)", micros(elapsed))?;

    commands::run(&mut catalog, input, output)
}
