//! Checkout receipt renderer
//!
//! Two variants: the on-screen receipt and the `receipt.txt` copy, which adds
//! a date header and uses a slightly narrower item column.

use chrono::{DateTime, Local};
use shared::LineItem;
use shared::util::money;

use super::builder::TextBuilder;
use crate::utils::time::format_receipt_datetime;

const RECEIPT_WIDTH: usize = 42;

/// Receipt renderer
pub struct ReceiptRenderer<'a> {
    items: &'a [LineItem],
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(items: &'a [LineItem]) -> Self {
        Self { items }
    }

    fn total(&self) -> rust_decimal::Decimal {
        self.items
            .iter()
            .fold(rust_decimal::Decimal::ZERO, |acc, item| {
                acc.saturating_add(item.line_total())
            })
    }

    /// Receipt shown on screen after checkout
    pub fn render_screen(&self) -> String {
        let mut b = TextBuilder::new(RECEIPT_WIDTH);
        self.render_body(&mut b, 27, "x");
        b.build()
    }

    /// Receipt written to the receipt file
    pub fn render_file(&self, at: DateTime<Local>) -> String {
        let mut b = TextBuilder::new(RECEIPT_WIDTH);
        let stamp = format_receipt_datetime(at);
        b.write_line(&format!("Date: {}", stamp));
        b.write_line(&format!("Time: {}", stamp));
        self.render_body(&mut b, 25, " x");
        b.build()
    }

    fn render_body(&self, b: &mut TextBuilder, name_width: usize, times: &str) {
        b.dash_sep();
        b.write_line("Receipt:");
        b.dash_sep();
        for item in self.items {
            b.cell(item.item_name(), name_width)
                .write(times)
                .cell_right(&item.quantity().to_string(), 5)
                .write("  RM ")
                .write_line(&money(item.unit_price()));
        }
        b.dash_sep();
        b.write_line(&format!("Total Price: \t\t\tRM {}", money(self.total())));
        b.dash_sep();
        b.newline();
    }
}
