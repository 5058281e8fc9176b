//! Order Model
//!
//! [`LineItem`] is what the cart holds; [`OrderRecord`] is one persisted
//! history entry (one per line-item, written at checkout).

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// 服务类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DineOption {
    /// 堂食
    #[default]
    DineIn,
    /// 外带
    TakeAway,
}

impl DineOption {
    /// Parse the customer's answer to "D = Dine in  T = Take away"
    ///
    /// Only `d`/`D`/`t`/`T` are accepted; the caller re-prompts on `None`.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "d" | "D" => Some(Self::DineIn),
            "t" | "T" => Some(Self::TakeAway),
            _ => None,
        }
    }

    /// Decode the stored code. Anything other than `t` reads as dine-in.
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("t") {
            Self::TakeAway
        } else {
            Self::DineIn
        }
    }

    /// Single-letter code written to the history file
    pub fn code(self) -> char {
        match self {
            Self::DineIn => 'd',
            Self::TakeAway => 't',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DineIn => "Dine in",
            Self::TakeAway => "Take away",
        }
    }
}

impl fmt::Display for DineOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One ordered product instance in a cart
///
/// Validated on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    item_name: String,
    quantity: u32,
    unit_price: Decimal,
}

impl LineItem {
    pub fn new(
        item_name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> ValidationResult<Self> {
        let item_name = item_name.into();
        ValidationError::check_field("item name", &item_name)?;
        if quantity == 0 {
            return Err(ValidationError::Quantity(quantity));
        }
        if unit_price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice(unit_price));
        }
        if unit_price.checked_mul(Decimal::from(quantity)).is_none() {
            return Err(ValidationError::LineTotalOverflow {
                quantity,
                unit_price,
            });
        }
        Ok(Self {
            item_name,
            quantity,
            unit_price,
        })
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// quantity × unit price (checked in [`LineItem::new`])
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// One persisted order-history entry
///
/// `order_time` is never written to disk; it is re-derived from
/// `order_time_raw` whenever the record is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub customer_name: String,
    pub dine_option: DineOption,
    /// Item name
    pub food_details: String,
    pub quantity: u32,
    /// Unit price
    pub price: Decimal,
    /// Human-readable capture time, trailing newline stripped
    pub order_time_raw: String,
    /// Seconds since the Unix epoch, used for sorting
    pub order_time: i64,
}

impl OrderRecord {
    /// Build the record for one line-item at checkout
    pub fn from_line_item(
        customer_name: impl Into<String>,
        dine_option: DineOption,
        item: &LineItem,
        order_time_raw: impl Into<String>,
        order_time: i64,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            dine_option,
            food_details: item.item_name().to_string(),
            quantity: item.quantity(),
            price: item.unit_price(),
            order_time_raw: order_time_raw.into(),
            order_time,
        }
    }

    /// quantity × price, always recomputed
    ///
    /// Parsed records are rejected when this would overflow; hand-built ones
    /// saturate at `Decimal::MAX`.
    pub fn total_price(&self) -> Decimal {
        self.checked_total_price().unwrap_or(Decimal::MAX)
    }

    pub fn checked_total_price(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dine_option_input() {
        assert_eq!(DineOption::from_input("d"), Some(DineOption::DineIn));
        assert_eq!(DineOption::from_input("D"), Some(DineOption::DineIn));
        assert_eq!(DineOption::from_input("t"), Some(DineOption::TakeAway));
        assert_eq!(DineOption::from_input(" T "), Some(DineOption::TakeAway));
        assert_eq!(DineOption::from_input("x"), None);
        assert_eq!(DineOption::from_input("dine"), None);
    }

    #[test]
    fn test_dine_option_stored_code() {
        assert_eq!(DineOption::from_code("t"), DineOption::TakeAway);
        assert_eq!(DineOption::from_code("T"), DineOption::TakeAway);
        assert_eq!(DineOption::from_code("d"), DineOption::DineIn);
        assert_eq!(DineOption::from_code("?"), DineOption::DineIn);
        assert_eq!(DineOption::TakeAway.code(), 't');
        assert_eq!(DineOption::DineIn.to_string(), "Dine in");
        assert_eq!(DineOption::TakeAway.to_string(), "Take away");
    }

    #[test]
    fn test_line_item_validation() {
        assert!(LineItem::new("Burger", 1, Decimal::new(5, 0)).is_ok());
        assert!(LineItem::new("Water", 1, Decimal::ZERO).is_ok());
        assert_eq!(
            LineItem::new("Burger", 0, Decimal::new(5, 0)),
            Err(ValidationError::Quantity(0))
        );
        assert_eq!(
            LineItem::new("Burger", 1, Decimal::new(-1, 0)),
            Err(ValidationError::NegativePrice(Decimal::new(-1, 0)))
        );
        assert!(LineItem::new("", 1, Decimal::ONE).is_err());
    }

    #[test]
    fn test_line_item_rejects_overflowing_total() {
        assert!(LineItem::new("Gold Burger", 1, Decimal::MAX).is_ok());
        assert_eq!(
            LineItem::new("Gold Burger", 2, Decimal::MAX),
            Err(ValidationError::LineTotalOverflow {
                quantity: 2,
                unit_price: Decimal::MAX,
            })
        );
    }

    #[test]
    fn test_record_total_saturates() {
        let item = LineItem::new("Gold Burger", 1, Decimal::MAX).unwrap();
        let mut record =
            OrderRecord::from_line_item("Alice", DineOption::DineIn, &item, "t", 0);
        record.quantity = 2;
        assert_eq!(record.checked_total_price(), None);
        assert_eq!(record.total_price(), Decimal::MAX);
    }

    #[test]
    fn test_totals() {
        let item = LineItem::new("Burger", 2, Decimal::new(500, 2)).unwrap();
        assert_eq!(item.line_total(), Decimal::new(10, 0));

        let record = OrderRecord::from_line_item(
            "Alice",
            DineOption::DineIn,
            &item,
            "Thu Oct  3 09:05:07 2024",
            1_727_946_307,
        );
        assert_eq!(record.food_details, "Burger");
        assert_eq!(record.total_price(), Decimal::new(10, 0));
    }
}
