//! Registered customers
//!
//! `users.txt` holds one `username,password` line per registration;
//! `register.txt` logs `Username: <name>, Date: <ctime>` for each one.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use shared::{Credentials, ValidationError};

use super::{UserStoreError, UserStoreResult};
use crate::utils::time::format_ctime;

/// File-backed user list plus registration log
#[derive(Debug, Clone)]
pub struct UserStore {
    users_path: PathBuf,
    register_log_path: PathBuf,
}

impl UserStore {
    pub fn new(users_path: impl Into<PathBuf>, register_log_path: impl Into<PathBuf>) -> Self {
        Self {
            users_path: users_path.into(),
            register_log_path: register_log_path.into(),
        }
    }

    pub fn users_path(&self) -> &Path {
        &self.users_path
    }

    /// Register a new customer
    ///
    /// Duplicate usernames are accepted; any matching line logs in.
    pub fn register(
        &self,
        username: &str,
        password: &str,
        confirm: &str,
        now: DateTime<Local>,
    ) -> UserStoreResult<()> {
        if password != confirm {
            return Err(UserStoreError::PasswordMismatch);
        }
        ValidationError::check_field("username", username)?;

        append_line(&self.users_path, &format!("{},{}", username, password))?;
        append_line(
            &self.register_log_path,
            &format!("Username: {}, Date: {}", username, format_ctime(now)),
        )?;

        tracing::info!(username, "Customer registered");
        Ok(())
    }

    /// Check `credentials` against every stored line
    pub fn authenticate(&self, credentials: &Credentials) -> UserStoreResult<bool> {
        let content =
            fs::read_to_string(&self.users_path).map_err(|source| UserStoreError::Unavailable {
                path: self.users_path.clone(),
                source,
            })?;

        let found = content
            .lines()
            .filter_map(|line| line.split_once(','))
            .any(|(username, password)| {
                credentials.matches(&Credentials::new(username, password))
            });
        Ok(found)
    }
}

fn append_line(path: &Path, line: &str) -> UserStoreResult<()> {
    let unavailable = |source| UserStoreError::Unavailable {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(unavailable)?;
    writeln!(file, "{}", line).map_err(unavailable)
}
