//! Text rendering
//!
//! Every screen table and the receipt file are built with [`TextBuilder`].
//! Renderers return `String`; writing it out is the caller's job.

pub mod builder;
pub mod history;
pub mod menu;
pub mod receipt;

pub use builder::TextBuilder;
pub use history::{
    render_customer_report, render_full_report, render_known_customers, render_session_orders,
    render_sorted_report,
};
pub use menu::{render_beverages, render_item_banner, render_item_details, render_menu};
pub use receipt::ReceiptRenderer;
