//! Shared types for the kiosk
//!
//! Domain models used by the ordering workflow, the menu catalog and the
//! order-history subsystem, plus the validation error they share.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ValidationError, ValidationResult};
pub use models::{
    Credentials, DineOption, LineItem, MenuItem, MenuItemUpdate, OrderRecord, Role,
};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
