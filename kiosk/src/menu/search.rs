//! Menu search and display ordering

use rust_decimal::Decimal;
use shared::MenuItem;

/// Items with `min <= price <= max`, cheapest first
pub fn by_price_range(items: &[MenuItem], min: Decimal, max: Decimal) -> Vec<MenuItem> {
    let mut found: Vec<MenuItem> = items
        .iter()
        .filter(|i| i.price >= min && i.price <= max)
        .cloned()
        .collect();
    found.sort_by(|a, b| a.price.cmp(&b.price));
    found
}

/// Exact category match
pub fn by_category(items: &[MenuItem], category: &str) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|i| i.category == category)
        .cloned()
        .collect()
}

/// Name ascending
pub fn sort_by_name(items: &mut [MenuItem]) {
    items.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Price descending
pub fn sort_by_price(items: &mut [MenuItem]) {
    items.sort_by(|a, b| b.price.cmp(&a.price));
}
