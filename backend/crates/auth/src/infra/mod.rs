//! Infrastructure Layer
//!
//! Database implementation and the concrete token issuer.

pub mod jwt;
pub mod postgres;

pub use jwt::JwtIssuer;
pub use postgres::PgUserRepository;
