//! Order history reports
//!
//! Pure formatting; the caller decides which records to show.

use shared::OrderRecord;
use shared::util::{money, money_with_currency};

use super::builder::TextBuilder;

const REPORT_WIDTH: usize = 131;
const CUSTOMER_REPORT_WIDTH: usize = 112;

/// All records in the given order, header `Order History:`
pub fn render_full_report(records: &[OrderRecord]) -> String {
    render_table("Order History:", records)
}

/// Same columns as the full report, header `Sorted Order History:`
pub fn render_sorted_report(records: &[OrderRecord]) -> String {
    render_table("Sorted Order History:", records)
}

fn render_table(title: &str, records: &[OrderRecord]) -> String {
    let mut b = TextBuilder::new(REPORT_WIDTH);
    b.dash_sep();
    b.write_line(title);
    b.dash_sep();
    b.cell("Customer name", 20)
        .cell("Dine Option", 15)
        .cell("Food Details", 30)
        .cell("Quantity", 10)
        .cell("Price", 10)
        .cell("Total Price", 15)
        .write_line("Order Time");

    for r in records {
        b.cell(&r.customer_name, 20)
            .cell(r.dine_option.label(), 15)
            .cell(&r.food_details, 30)
            .cell(&r.quantity.to_string(), 10)
            .cell(&money(r.price), 10)
            .cell(&money(r.total_price()), 15)
            .write_line(&r.order_time_raw);
    }

    b.dash_sep();
    b.build()
}

/// One customer's records, or the not-found message for `None`
pub fn render_customer_report(name: &str, records: Option<&[OrderRecord]>) -> String {
    let Some(records) = records else {
        return format!("No order history found for customer: {}\n", name);
    };

    let mut b = TextBuilder::new(CUSTOMER_REPORT_WIDTH);
    b.dash_sep();
    b.write_line(&format!("Order History for {}:", name));
    b.dash_sep();
    b.cell("Dine Option", 20)
        .cell("Food Details", 30)
        .cell("Quantity", 10)
        .cell("Price", 10)
        .write_line("Order Time");

    for r in records {
        b.cell(r.dine_option.label(), 20)
            .cell(&r.food_details, 30)
            .cell(&r.quantity.to_string(), 10)
            .cell(&money(r.price), 10)
            .write_line(&r.order_time_raw);
    }

    b.dash_sep();
    b.build()
}

/// Names that do have history, shown after a failed lookup
pub fn render_known_customers<'a>(count: usize, names: impl IntoIterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.into_iter().collect();
    format!("Customers with order history ({}): {}\n", count, names.join(", "))
}

/// Orders placed during the current session, one line each
pub fn render_session_orders(records: &[OrderRecord]) -> String {
    if records.is_empty() {
        return "No order history.\n".to_string();
    }

    let mut b = TextBuilder::default();
    for r in records {
        b.write_line(&format!(
            "Customer: {}, Dine Option: {}, Item: {}, Quantity: {}, Price: {}, Order Time: {}, Total Price: {}",
            r.customer_name,
            r.dine_option.label(),
            r.food_details,
            r.quantity,
            money_with_currency(r.price),
            r.order_time_raw,
            money_with_currency(r.total_price()),
        ));
    }
    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::DineOption;

    const TIME: &str = "Thu Oct  3 09:05:07 2024";

    fn record(name: &str, dine: DineOption, food: &str, qty: u32, cents: i64) -> OrderRecord {
        OrderRecord {
            customer_name: name.to_string(),
            dine_option: dine,
            food_details: food.to_string(),
            quantity: qty,
            price: Decimal::new(cents, 2),
            order_time_raw: TIME.to_string(),
            order_time: 0,
        }
    }

    #[test]
    fn test_known_customers_line() {
        assert_eq!(
            render_known_customers(2, ["Alice", "Bob"]),
            "Customers with order history (2): Alice, Bob\n"
        );
    }

    #[test]
    fn test_full_report_rows() {
        let records = vec![
            record("Alice", DineOption::DineIn, "Burger", 2, 500),
            record("Bob", DineOption::TakeAway, "Pizza", 1, 1200),
        ];
        let report = render_full_report(&records);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "-".repeat(REPORT_WIDTH));
        assert_eq!(lines[1], "Order History:");
        assert!(lines[3].starts_with("Customer name       Dine Option    Food Details"));
        assert!(lines[3].ends_with("Total Price    Order Time"));
        assert_eq!(
            lines[4],
            format!(
                "{:<20}{:<15}{:<30}{:<10}{:<10}{:<15}{}",
                "Alice", "Dine in", "Burger", "2", "5.00", "10.00", TIME
            )
        );
        assert!(lines[5].starts_with("Bob                 Take away      Pizza"));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let report = render_sorted_report(&[]);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[1], "Sorted Order History:");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_customer_report() {
        let records = vec![record("Alice", DineOption::TakeAway, "Tea", 3, 200)];
        let report = render_customer_report("Alice", Some(&records));
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[1], "Order History for Alice:");
        assert_eq!(
            lines[4],
            format!("{:<20}{:<30}{:<10}{:<10}{}", "Take away", "Tea", "3", "2.00", TIME)
        );
    }

    #[test]
    fn test_customer_not_found() {
        assert_eq!(
            render_customer_report("Carol", None),
            "No order history found for customer: Carol\n"
        );
    }

    #[test]
    fn test_session_orders() {
        assert_eq!(render_session_orders(&[]), "No order history.\n");

        let records = vec![record("Alice", DineOption::DineIn, "Burger", 2, 500)];
        assert_eq!(
            render_session_orders(&records),
            format!(
                "Customer: Alice, Dine Option: Dine in, Item: Burger, Quantity: 2, Price: RM 5.00, Order Time: {}, Total Price: RM 10.00\n",
                TIME
            )
        );
    }
}
