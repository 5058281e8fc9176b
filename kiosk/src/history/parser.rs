//! History line codec
//!
//! Line layout: `customerName,dineOption,foodDetails,quantity,price,orderTime`.
//! Fields are consumed strictly in order; the sixth is the rest of the line.

use std::str::FromStr;

use rust_decimal::Decimal;
use shared::util::plain_decimal;
use shared::{DineOption, OrderRecord};
use thiserror::Error;

use super::HistoryLoad;
use crate::utils::time::parse_ctime;

const FIELD_COUNT: usize = 6;

/// Why a stored line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 6 fields, found {found}")]
    MissingFields { found: usize },

    #[error("customer name is empty")]
    EmptyCustomer,

    #[error("invalid quantity: {0:?}")]
    InvalidQuantity(String),

    #[error("invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("total overflows: {quantity} x {price}")]
    TotalOverflow { quantity: u32, price: Decimal },

    #[error("invalid order time: {0:?}")]
    InvalidTimestamp(String),
}

/// Parse one stored line into a record
pub fn parse_record(line: &str) -> Result<OrderRecord, ParseError> {
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, ',').collect();
    let &[customer, dine, food, quantity, price, time] = fields.as_slice() else {
        return Err(ParseError::MissingFields {
            found: fields.len(),
        });
    };

    if customer.trim().is_empty() {
        return Err(ParseError::EmptyCustomer);
    }

    let quantity: u32 = quantity
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidQuantity(quantity.to_string()))?;

    let price = Decimal::from_str(price.trim())
        .ok()
        .filter(|p| *p >= Decimal::ZERO)
        .ok_or_else(|| ParseError::InvalidPrice(price.to_string()))?;
    if price.checked_mul(Decimal::from(quantity)).is_none() {
        return Err(ParseError::TotalOverflow { quantity, price });
    }

    let order_time_raw = time.trim().to_string();
    let order_time = parse_ctime(&order_time_raw)
        .ok_or_else(|| ParseError::InvalidTimestamp(order_time_raw.clone()))?;

    Ok(OrderRecord {
        customer_name: customer.to_string(),
        dine_option: DineOption::from_code(dine),
        food_details: food.to_string(),
        quantity,
        price,
        order_time_raw,
        order_time,
    })
}

/// Parse every line, skipping malformed ones
///
/// Blank lines are ignored without counting as malformed.
pub fn parse_all<I, S>(lines: I) -> HistoryLoad
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut load = HistoryLoad::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(line) {
            Ok(record) => load.records.push(record),
            Err(e) => {
                tracing::warn!(line = idx + 1, error = %e, "Skipping malformed history record");
                load.skipped += 1;
            }
        }
    }

    load
}

/// Serialize a record to its stored line (no trailing newline)
pub fn to_line(record: &OrderRecord) -> String {
    format!(
        "{},{},{},{},{},{}",
        record.customer_name,
        record.dine_option.code(),
        record.food_details,
        record.quantity,
        plain_decimal(record.price),
        record.order_time_raw
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIME: &str = "Thu Oct  3 09:05:07 2024";

    #[test]
    fn test_parse_well_formed_line() {
        let record = parse_record(&format!("Alice,d,Burger,2,5,{}", TIME)).unwrap();

        assert_eq!(record.customer_name, "Alice");
        assert_eq!(record.dine_option, DineOption::DineIn);
        assert_eq!(record.food_details, "Burger");
        assert_eq!(record.quantity, 2);
        assert_eq!(record.price, Decimal::new(5, 0));
        assert_eq!(record.order_time_raw, TIME);
        assert_eq!(record.order_time, parse_ctime(TIME).unwrap());
        assert_eq!(record.total_price(), Decimal::new(10, 0));
    }

    #[test]
    fn test_parse_strips_trailing_newline() {
        let record = parse_record(&format!("Bob,t,Pizza,1,12.5,{}\r\n", TIME)).unwrap();
        assert_eq!(record.dine_option, DineOption::TakeAway);
        assert_eq!(record.order_time_raw, TIME);
        assert_eq!(record.total_price(), Decimal::new(125, 1));
    }

    #[test]
    fn test_parse_keeps_name_case_and_spacing() {
        let record = parse_record(&format!("alice smith,D,Fries,1,3,{}", TIME)).unwrap();
        assert_eq!(record.customer_name, "alice smith");
        assert_eq!(record.dine_option, DineOption::DineIn);
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        assert_eq!(
            parse_record("Alice,d,Burger,2,5"),
            Err(ParseError::MissingFields { found: 5 })
        );
        assert_eq!(
            parse_record("just text"),
            Err(ParseError::MissingFields { found: 1 })
        );
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        assert_eq!(
            parse_record(&format!("Alice,d,Burger,two,5,{}", TIME)),
            Err(ParseError::InvalidQuantity("two".to_string()))
        );
        assert_eq!(
            parse_record(&format!("Alice,d,Burger,-1,5,{}", TIME)),
            Err(ParseError::InvalidQuantity("-1".to_string()))
        );
        assert_eq!(
            parse_record(&format!("Alice,d,Burger,2,abc,{}", TIME)),
            Err(ParseError::InvalidPrice("abc".to_string()))
        );
        assert_eq!(
            parse_record(&format!("Alice,d,Burger,2,-5,{}", TIME)),
            Err(ParseError::InvalidPrice("-5".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_overflowing_total() {
        let line = format!("Alice,d,Burger,2,79228162514264337593543950335,{}", TIME);
        assert_eq!(
            parse_record(&line),
            Err(ParseError::TotalOverflow {
                quantity: 2,
                price: Decimal::MAX,
            })
        );

        let single = format!("Alice,d,Burger,1,79228162514264337593543950335,{}", TIME);
        assert_eq!(parse_record(&single).unwrap().total_price(), Decimal::MAX);
    }

    #[test]
    fn test_parse_rejects_empty_customer_and_bad_time() {
        assert_eq!(
            parse_record(&format!(",d,Burger,2,5,{}", TIME)),
            Err(ParseError::EmptyCustomer)
        );
        assert_eq!(
            parse_record("Alice,d,Burger,2,5,sometime"),
            Err(ParseError::InvalidTimestamp("sometime".to_string()))
        );
    }

    #[test]
    fn test_commas_in_time_field_stay_in_remainder() {
        // The remainder is the time text; commas there make it unparseable,
        // but the five leading fields are still consumed in order.
        assert_eq!(
            parse_record("Alice,d,Burger,2,5,Thu, Oct 3"),
            Err(ParseError::InvalidTimestamp("Thu, Oct 3".to_string()))
        );
    }

    #[test]
    fn test_round_trip() {
        let line = format!("Bob,t,Pizza,1,12.5,{}", TIME);
        let record = parse_record(&line).unwrap();
        assert_eq!(to_line(&record), line);
        assert_eq!(parse_record(&to_line(&record)).unwrap(), record);
    }

    #[test]
    fn test_to_line_uses_plain_price() {
        let record = parse_record(&format!("Alice,d,Burger,2,5.00,{}", TIME)).unwrap();
        assert_eq!(to_line(&record), format!("Alice,d,Burger,2,5,{}", TIME));
    }

    #[test]
    fn test_parse_all_skips_bad_lines() {
        let lines = vec![
            format!("Alice,d,Burger,2,5,{}", TIME),
            format!("Bob,t,Pizza,x,12,{}", TIME),
            String::new(),
            format!("Carol,t,Cake,1,4.5,{}", TIME),
        ];

        let load = parse_all(&lines);
        assert_eq!(load.records.len(), 2);
        assert_eq!(load.skipped, 1);
        assert_eq!(load.records[0].customer_name, "Alice");
        assert_eq!(load.records[1].customer_name, "Carol");
    }

    #[test]
    fn test_parse_all_empty() {
        let load = parse_all(Vec::<String>::new());
        assert!(load.is_empty());
        assert_eq!(load.skipped, 0);
    }
}
