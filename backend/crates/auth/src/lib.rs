//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository and token traits
//! - `application/` - Use cases and configuration
//! - `infra/` - PostgreSQL repository and JWT issuer
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User signup with email and user name uniqueness
//! - User signin issuing signed, time-bounded bearer tokens
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B compliant)
//! - Uniqueness enforced by database unique indexes; pre-checks are
//!   early exits only
//! - Stateless HS256 tokens carrying user id, email, and user name

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::jwt::JwtIssuer;
pub use infra::postgres::PgUserRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
