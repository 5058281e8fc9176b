//! Cart, beverage add-ons and checkout

pub mod beverage;
pub mod cart;

use std::fs;

use shared::{DineOption, OrderRecord};

use crate::core::Session;
use crate::history::{HistoryError, stamp_records};
use crate::printing::ReceiptRenderer;

pub use beverage::{BEVERAGES, Beverage, find_beverage};
pub use cart::Cart;

/// Result of one checkout
#[derive(Debug)]
pub struct Checkout {
    /// On-screen receipt
    pub receipt: String,
    /// Records stamped for this order, one per line-item
    pub records: Vec<OrderRecord>,
    /// Set when the receipt file could not be written
    pub receipt_error: Option<std::io::Error>,
    /// Set when the order could not be appended to the history store
    pub history_error: Option<HistoryError>,
}

/// Close the current cart
///
/// Renders the receipt, overwrites the receipt file, appends the order to the
/// history store and moves the records into the session history. File
/// failures are logged and returned; the cart is cleared either way and the
/// records stay in the session history.
pub fn checkout(session: &mut Session, customer_name: &str, dine_option: DineOption) -> Checkout {
    let at = session.clock.now();
    let items = session.cart.items();
    let renderer = ReceiptRenderer::new(items);
    let receipt = renderer.render_screen();

    let receipt_path = session.config.receipt_path();
    let receipt_error = fs::write(&receipt_path, renderer.render_file(at)).err();
    if let Some(e) = &receipt_error {
        tracing::warn!(path = %receipt_path.display(), error = %e, "Failed to save receipt");
    }

    let (records, history_error) = match session.history.append(customer_name, dine_option, items, at) {
        Ok(records) => (records, None),
        Err(e) => {
            tracing::error!(customer = customer_name, error = %e, "Failed to record order");
            (stamp_records(customer_name, dine_option, items, at), Some(e))
        }
    };

    session.session_orders.extend(records.iter().cloned());
    session.cart.clear();

    Checkout {
        receipt,
        records,
        receipt_error,
        history_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::menu::MenuCatalog;
    use crate::utils::FixedClock;
    use rust_decimal::Decimal;
    use shared::LineItem;
    use tempfile::TempDir;

    fn session(dir: &TempDir) -> Session {
        let config = Config::with_data_dir(dir.path());
        let clock = FixedClock::at(2024, 10, 3, 12, 0, 0).unwrap();
        Session::new(config, MenuCatalog::new(dir.path().join("menu.txt")), Box::new(clock))
    }

    #[test]
    fn test_checkout_writes_receipt_and_history() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);
        session
            .cart
            .add(LineItem::new("Burger", 2, Decimal::new(5, 0)).unwrap())
            .unwrap();
        session
            .cart
            .add(LineItem::new("Tea", 1, Decimal::new(2, 0)).unwrap())
            .unwrap();

        let done = checkout(&mut session, "Alice", DineOption::TakeAway);

        assert!(done.receipt_error.is_none());
        assert!(done.history_error.is_none());
        assert_eq!(done.records.len(), 2);
        assert!(done.receipt.contains("Total Price: \t\t\tRM 12.00"));
        assert!(session.cart.is_empty());
        assert_eq!(session.session_orders, done.records);

        let receipt = fs::read_to_string(dir.path().join("receipt.txt")).unwrap();
        assert!(receipt.starts_with("Date: 2024-10-3 12:0:0\n"));

        let history = fs::read_to_string(dir.path().join("history.txt")).unwrap();
        assert_eq!(
            history,
            "Alice,t,Burger,2,5,Thu Oct  3 12:00:00 2024\nAlice,t,Tea,1,2,Thu Oct  3 12:00:00 2024\n"
        );
    }

    #[test]
    fn test_checkout_keeps_records_when_store_fails() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);
        session.config.history_file = "missing-dir/history.txt".into();
        session.history = crate::history::RecordStore::new(session.config.history_path());
        session
            .cart
            .add(LineItem::new("Pizza", 1, Decimal::new(12, 0)).unwrap())
            .unwrap();

        let done = checkout(&mut session, "Bob", DineOption::DineIn);

        assert!(matches!(
            done.history_error,
            Some(HistoryError::StoreUnavailable { .. })
        ));
        assert_eq!(done.records.len(), 1);
        assert_eq!(session.session_orders.len(), 1);
        assert!(done.receipt.contains("Pizza"));
    }
}
