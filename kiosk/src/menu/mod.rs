//! Menu catalog and search

pub mod catalog;
pub mod search;

use std::path::PathBuf;

use shared::ValidationError;
use thiserror::Error;

pub use catalog::MenuCatalog;

/// Menu catalog errors
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Menu file unavailable ({}): {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Item with code {0} already exists")]
    DuplicateCode(String),

    #[error("Item with code {0} not found")]
    NotFound(String),

    #[error("Invalid menu item: {0}")]
    Invalid(#[from] ValidationError),
}

pub type MenuResult<T> = Result<T, MenuError>;
