//! User Name Value Object
//!
//! Keeps the user's chosen capitalization for display while deriving a
//! lowercase canonical form. Uniqueness is case-insensitive: the canonical
//! form backs the database unique index, so "Alice" and "alice" are the
//! same name.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const USER_NAME_MIN_LENGTH: usize = 3;
pub const USER_NAME_MAX_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName {
    original: String,
    canonical: String,
}

impl UserName {
    /// Validate a user name.
    ///
    /// Rules: 3..=32 characters, ASCII alphanumerics plus `_`, `.`, `-`,
    /// must start and end with an alphanumeric.
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let original = name.into().trim().to_string();

        let len = original.chars().count();
        if len < USER_NAME_MIN_LENGTH {
            return Err(AppError::bad_request(format!(
                "User name must be at least {} characters",
                USER_NAME_MIN_LENGTH
            )));
        }
        if len > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "User name must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        if !original
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
        {
            return Err(AppError::bad_request(
                "User name may only contain letters, digits, '_', '.' and '-'",
            ));
        }

        // unwraps are safe: length checked above
        let first = original.chars().next().unwrap();
        let last = original.chars().last().unwrap();
        if !first.is_ascii_alphanumeric() || !last.is_ascii_alphanumeric() {
            return Err(AppError::bad_request(
                "User name must start and end with a letter or digit",
            ));
        }

        let canonical = original.to_ascii_lowercase();

        Ok(Self {
            original,
            canonical,
        })
    }

    /// Rebuild from storage (validated at signup time).
    pub fn from_db(original: impl Into<String>) -> Self {
        let original = original.into();
        let canonical = original.to_ascii_lowercase();
        Self {
            original,
            canonical,
        }
    }

    /// The name as the user typed it.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lowercase form backing the unique index.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.original)
    }
}
