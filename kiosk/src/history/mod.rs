//! Order history
//!
//! # Flow
//!
//! ```text
//! checkout ──append──▶ history.txt ──read_all──▶ parse_all ──┬─▶ CustomerIndex::build
//!                      (one line per line-item)              └─▶ sort_chronologically
//! ```
//!
//! The index and the sorted view are rebuilt from the file on every
//! history-view invocation; nothing is cached between invocations.

pub mod index;
pub mod parser;
pub mod sorter;
pub mod store;

use std::path::PathBuf;

use shared::{OrderRecord, ValidationError};
use thiserror::Error;

pub use index::CustomerIndex;
pub use parser::{ParseError, parse_all, parse_record, to_line};
pub use sorter::{merge_sort_by_key, sort_chronologically};
pub use store::{RecordStore, stamp_records};

/// History store errors
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Backing file cannot be opened, read or written
    #[error("History store unavailable ({}): {source}", path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Refused to write a record that could not be read back
    #[error("Invalid record: {0}")]
    Invalid(#[from] ValidationError),
}

pub type HistoryResult<T> = Result<T, HistoryError>;

/// Parsed contents of the history store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLoad {
    /// Valid records in file order
    pub records: Vec<OrderRecord>,
    /// Number of malformed lines that were skipped
    pub skipped: usize,
}

impl HistoryLoad {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
