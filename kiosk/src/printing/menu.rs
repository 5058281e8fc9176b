//! Menu and beverage tables

use shared::MenuItem;
use shared::util::money;

use super::builder::TextBuilder;
use crate::orders::beverage::Beverage;

const MENU_WIDTH: usize = 77;

/// Food table: code, name, type and price columns
pub fn render_menu(items: &[MenuItem]) -> String {
    let mut b = TextBuilder::new(MENU_WIDTH);
    b.dash_sep();
    b.write_line("Food code | Food name                         | Food type      | Food Price");
    b.dash_sep();
    for item in items {
        b.cell(&item.code, 9)
            .write(" | ")
            .cell(&item.name, 33)
            .write(" | ")
            .cell(&item.category, 14)
            .write(" | RM ")
            .write_line(&money(item.price));
    }
    b.dash_sep();
    b.build()
}

/// Name of the item being ordered, between dashes
pub fn render_item_banner(item: &MenuItem) -> String {
    let mut b = TextBuilder::new(28);
    b.dash_sep();
    b.write_line(&item.name);
    b.dash_sep();
    b.build()
}

/// Current details shown before an admin edit
pub fn render_item_details(item: &MenuItem) -> String {
    let mut b = TextBuilder::new(32);
    b.banner(&format!("  Current details of item {}:", item.code));
    b.write_line(&format!("Name: {}", item.name));
    b.write_line(&format!("Category: {}", item.category));
    b.write_line(&format!("Price: RM {}", money(item.price)));
    b.build()
}

pub fn render_beverages(beverages: &[Beverage]) -> String {
    let mut b = TextBuilder::new(27);
    b.star_sep();
    for bev in beverages {
        b.cell(bev.code, 7)
            .cell(bev.name, 12)
            .write("RM ")
            .write_line(&money(bev.price()));
    }
    b.star_sep();
    b.build()
}
