//! Beverage add-ons offered after each food item

use rust_decimal::Decimal;

/// A drink from the fixed add-on list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beverage {
    pub code: &'static str,
    pub name: &'static str,
    /// Price in cents
    cents: i64,
}

impl Beverage {
    const fn new(code: &'static str, name: &'static str, cents: i64) -> Self {
        Self { code, name, cents }
    }

    pub fn price(&self) -> Decimal {
        Decimal::new(self.cents, 2)
    }
}

pub const BEVERAGES: [Beverage; 5] = [
    Beverage::new("D01", "Tea", 200),
    Beverage::new("D02", "Coffee", 300),
    Beverage::new("D03", "Soft Drink", 250),
    Beverage::new("D04", "Juice", 400),
    Beverage::new("D05", "Water", 100),
];

/// Exact, case-sensitive code lookup
pub fn find_beverage(code: &str) -> Option<&'static Beverage> {
    BEVERAGES.iter().find(|b| b.code == code.trim())
}
