//! User Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// User account
///
/// Email and user name are each globally unique; uniqueness is owned by the
/// storage layer's unique indexes, not by this type.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Login email (unique)
    pub email: Email,
    /// Display/user name (unique, case-insensitive)
    pub user_name: UserName,
    /// Argon2id password hash
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user at signup time.
    pub fn new(email: Email, user_name: UserName, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            user_name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
