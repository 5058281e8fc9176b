//! Customer registration and login

pub mod users;

use std::path::PathBuf;

use shared::{Credentials, Role, ValidationError};
use thiserror::Error;

pub use users::UserStore;

/// User store errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("Passwords do not match. Please try again.")]
    PasswordMismatch,

    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] ValidationError),

    #[error("User file unavailable ({}): {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type UserStoreResult<T> = Result<T, UserStoreError>;

/// Check a login attempt for either role
///
/// Customers are looked up in the user store; the admin is compared with the
/// configured credentials.
pub fn login(role: &Role, users: &UserStore, admin: &Credentials) -> UserStoreResult<bool> {
    match role {
        Role::Customer(credentials) => users.authenticate(credentials),
        Role::Admin(credentials) => Ok(admin.matches(credentials)),
    }
}
