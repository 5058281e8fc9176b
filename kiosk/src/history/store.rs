//! Append-only order history file
//!
//! One line per line-item, written at checkout and never rewritten.
//! The file is opened and closed inside each call; no handle is kept.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use shared::{DineOption, LineItem, OrderRecord, ValidationError};

use super::parser::{parse_all, to_line};
use super::{HistoryError, HistoryLoad, HistoryResult};
use crate::utils::time::format_ctime;

/// Order history backed by a flat text file
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: std::io::Error) -> HistoryError {
        HistoryError::StoreUnavailable {
            path: self.path.clone(),
            source,
        }
    }

    /// Append one line per item, all stamped with the same `at`
    ///
    /// Returns the records as they were written. Nothing is written when
    /// `items` is empty.
    pub fn append(
        &self,
        customer_name: &str,
        dine_option: DineOption,
        items: &[LineItem],
        at: DateTime<Local>,
    ) -> HistoryResult<Vec<OrderRecord>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        ValidationError::check_field("customer name", customer_name)?;

        let records = stamp_records(customer_name, dine_option, items, at);

        let mut buf = String::new();
        for record in &records {
            buf.push_str(&to_line(record));
            buf.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.unavailable(e))?;
        file.write_all(buf.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| self.unavailable(e))?;

        tracing::info!(
            customer = customer_name,
            lines = records.len(),
            "Order recorded"
        );
        Ok(records)
    }

    /// All raw lines in file order
    pub fn read_all(&self) -> HistoryResult<Vec<String>> {
        let file = File::open(&self.path).map_err(|e| self.unavailable(e))?;
        BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| self.unavailable(e))
    }

    /// Read and parse the whole store, skipping malformed lines
    pub fn load(&self) -> HistoryResult<HistoryLoad> {
        let lines = self.read_all()?;
        let load = parse_all(&lines);
        if load.skipped > 0 {
            tracing::warn!(
                path = %self.path.display(),
                skipped = load.skipped,
                "History store contains malformed lines"
            );
        }
        Ok(load)
    }
}

/// One record per item, all sharing the `at` timestamp
pub fn stamp_records(
    customer_name: &str,
    dine_option: DineOption,
    items: &[LineItem],
    at: DateTime<Local>,
) -> Vec<OrderRecord> {
    let order_time_raw = format_ctime(at);
    items
        .iter()
        .map(|item| {
            OrderRecord::from_line_item(
                customer_name,
                dine_option,
                item,
                order_time_raw.clone(),
                at.timestamp(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{Clock, FixedClock};
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn item(name: &str, quantity: u32, cents: i64) -> LineItem {
        LineItem::new(name, quantity, Decimal::new(cents, 2)).unwrap()
    }

    fn noon() -> DateTime<Local> {
        FixedClock::at(2024, 10, 3, 12, 0, 0).unwrap().now()
    }

    #[test]
    fn test_append_writes_one_line_per_item() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("history.txt"));

        let written = store
            .append(
                "Alice",
                DineOption::DineIn,
                &[item("Burger", 2, 500), item("Tea", 1, 200)],
                noon(),
            )
            .unwrap();
        assert_eq!(written.len(), 2);

        let lines = store.read_all().unwrap();
        assert_eq!(
            lines,
            vec![
                "Alice,d,Burger,2,5,Thu Oct  3 12:00:00 2024".to_string(),
                "Alice,d,Tea,1,2,Thu Oct  3 12:00:00 2024".to_string(),
            ]
        );
    }

    #[test]
    fn test_append_is_append_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.txt");
        std::fs::write(&path, "Old,t,Cake,1,4,Wed Oct  2 08:00:00 2024\n").unwrap();
        let store = RecordStore::new(&path);

        store
            .append("Bob", DineOption::TakeAway, &[item("Pizza", 1, 1200)], noon())
            .unwrap();

        let lines = store.read_all().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Old,t,Cake,1,4,Wed Oct  2 08:00:00 2024");
        assert_eq!(lines[1], "Bob,t,Pizza,1,12,Thu Oct  3 12:00:00 2024");
    }

    #[test]
    fn test_append_empty_cart_does_not_create_file() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("history.txt"));

        assert!(store.append("Alice", DineOption::DineIn, &[], noon()).unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_append_rejects_unreadable_customer_name() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("history.txt"));

        let err = store
            .append("Smith, J", DineOption::DineIn, &[item("Burger", 1, 500)], noon())
            .unwrap_err();
        assert!(matches!(err, HistoryError::Invalid(_)));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_missing_store_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("missing.txt"));

        assert!(matches!(
            store.read_all(),
            Err(HistoryError::StoreUnavailable { .. })
        ));
        assert!(matches!(
            store.load(),
            Err(HistoryError::StoreUnavailable { .. })
        ));
    }

    #[test]
    fn test_append_to_unopenable_path_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("no-such-dir").join("history.txt"));

        let err = store
            .append("Alice", DineOption::DineIn, &[item("Burger", 1, 500)], noon())
            .unwrap_err();
        assert!(matches!(err, HistoryError::StoreUnavailable { .. }));
    }

    #[test]
    fn test_load_recomputes_totals() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("history.txt"));
        store
            .append("Alice", DineOption::DineIn, &[item("Burger", 3, 250)], noon())
            .unwrap();

        let load = store.load().unwrap();
        assert_eq!(load.skipped, 0);
        assert_eq!(load.records.len(), 1);
        assert_eq!(load.records[0].total_price(), Decimal::new(750, 2));
        assert_eq!(load.records[0].order_time, noon().timestamp());
    }
}
