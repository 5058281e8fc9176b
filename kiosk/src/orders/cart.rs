//! Customer cart

use rust_decimal::Decimal;
use shared::{LineItem, ValidationError, ValidationResult};

/// Line-items in the order they were confirmed
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line-item, refusing one that would overflow the total
    pub fn add(&mut self, item: LineItem) -> ValidationResult<()> {
        if self.total().checked_add(item.line_total()).is_none() {
            return Err(ValidationError::CartTotalOverflow);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of all line totals
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.line_total()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
