//! Menu catalog file
//!
//! Line layout: `code,name,category,price`; the price is the rest of the line.
//! The whole file is rewritten after every admin change.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use shared::util::plain_decimal;
use shared::{MenuItem, MenuItemUpdate, ValidationError};

use super::{MenuError, MenuResult};

/// In-memory menu backed by the menu file
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    path: PathBuf,
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Empty catalog that will be saved to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            items: Vec::new(),
        }
    }

    /// Load the menu file; malformed lines are skipped
    pub fn load(path: impl Into<PathBuf>) -> MenuResult<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|source| MenuError::Unavailable {
            path: path.clone(),
            source,
        })?;

        let mut items = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_menu_line(line) {
                Some(item) => items.push(item),
                None => tracing::warn!(line = idx + 1, "Skipping malformed menu line"),
            }
        }

        tracing::info!(path = %path.display(), items = items.len(), "Menu loaded");
        Ok(Self { path, items })
    }

    /// Rewrite the menu file from the current items
    pub fn save(&self) -> MenuResult<()> {
        let mut content = String::new();
        for item in &self.items {
            content.push_str(&format!(
                "{},{},{},{}\n",
                item.code,
                item.name,
                item.category,
                plain_decimal(item.price)
            ));
        }
        fs::write(&self.path, content).map_err(|source| MenuError::Unavailable {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "Menu saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Items in catalog order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn find(&self, code: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.code == code)
    }

    pub fn add(&mut self, item: MenuItem) -> MenuResult<()> {
        validate(&item)?;
        if self.find(&item.code).is_some() {
            return Err(MenuError::DuplicateCode(item.code));
        }
        self.items.push(item);
        Ok(())
    }

    /// Apply `update` to the item with `code`; `None` fields keep their value
    pub fn update(&mut self, code: &str, update: MenuItemUpdate) -> MenuResult<&MenuItem> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.code == code)
            .ok_or_else(|| MenuError::NotFound(code.to_string()))?;

        let mut updated = item.clone();
        updated.apply(update);
        validate(&updated)?;
        *item = updated;
        Ok(&*item)
    }

    /// Remove every item with `code`; returns whether anything was removed
    pub fn remove(&mut self, code: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.code != code);
        self.items.len() != before
    }
}

fn validate(item: &MenuItem) -> MenuResult<()> {
    ValidationError::check_field("food code", &item.code)?;
    ValidationError::check_field("food name", &item.name)?;
    ValidationError::check_field("food category", &item.category)?;
    if item.price < Decimal::ZERO {
        return Err(ValidationError::NegativePrice(item.price).into());
    }
    Ok(())
}

fn parse_menu_line(line: &str) -> Option<MenuItem> {
    let fields: Vec<&str> = line.splitn(4, ',').collect();
    let &[code, name, category, price] = fields.as_slice() else {
        return None;
    };
    if code.trim().is_empty() {
        return None;
    }
    let price = Decimal::from_str(price.trim())
        .ok()
        .filter(|p| *p >= Decimal::ZERO)?;
    Some(MenuItem::new(code.trim(), name, category, price))
}
