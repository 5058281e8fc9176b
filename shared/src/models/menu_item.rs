//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Food code typed by the customer (e.g. `B01`)
    pub code: String,
    pub name: String,
    /// Food type (burger/pizza/cake/snack)
    pub category: String,
    pub price: Decimal,
}

impl MenuItem {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            category: category.into(),
            price,
        }
    }

    /// Apply an update payload; `None` fields keep their current value
    pub fn apply(&mut self, update: MenuItemUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
    }
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
}

impl MenuItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.price.is_none()
    }
}
