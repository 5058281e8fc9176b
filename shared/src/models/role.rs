//! Role Model
//!
//! Two login roles. Customers are checked against the users file,
//! the admin against configured credentials.

use serde::{Deserialize, Serialize};

/// Username + password pair as typed at a login prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact match on both fields
    pub fn matches(&self, other: &Credentials) -> bool {
        self.username == other.username && self.password == other.password
    }
}

/// Login role carrying the credentials it was attempted with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    Customer(Credentials),
    Admin(Credentials),
}

impl Role {
    pub fn credentials(&self) -> &Credentials {
        match self {
            Self::Customer(c) | Self::Admin(c) => c,
        }
    }

    pub fn username(&self) -> &str {
        &self.credentials().username
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin(_))
    }

    /// Message shown after a login attempt
    pub fn login_message(&self, success: bool) -> &'static str {
        match (self, success) {
            (Self::Customer(_), true) => "Customer login successful",
            (Self::Customer(_), false) => "Customer login failed",
            (Self::Admin(_), true) => "Admin login successful",
            (Self::Admin(_), false) => "Admin login failed",
        }
    }

    pub fn can_manage_menu(&self) -> bool {
        self.is_admin()
    }

    pub fn can_view_history(&self) -> bool {
        self.is_admin()
    }

    pub fn can_place_orders(&self) -> bool {
        matches!(self, Self::Customer(_))
    }
}
