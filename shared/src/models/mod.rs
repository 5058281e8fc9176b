//! Data models
//!
//! Shared between the ordering workflow, the menu catalog and the
//! order-history subsystem. Prices are `Decimal` throughout.

pub mod menu_item;
pub mod order;
pub mod role;

// Re-exports
pub use menu_item::*;
pub use order::*;
pub use role::*;
