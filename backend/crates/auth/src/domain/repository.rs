//! Repository Traits
//!
//! Interface for credential persistence. Implementation is in the
//! infrastructure layer.
//!
//! Uniqueness contract: the `exists_*` checks are early exits only. `create`
//! must be backed by unique indexes and report a concurrent duplicate as
//! `EmailTaken`/`UserNameTaken`, never as a generic database error.

use crate::domain::entity::user::User;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user. The insert is the atomic unit of work.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Check if a user name is already registered (case-insensitive)
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;
}
