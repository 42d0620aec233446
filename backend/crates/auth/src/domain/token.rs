//! Token Issuer Trait
//!
//! Seam between the sign-in use case and the concrete token format. The
//! token is the whole credential: no session state is kept server-side.

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;
use crate::error::AuthResult;

/// Claims carried by an issued token.
///
/// Wire names match the HTTP contract (`userName`), timestamps are Unix
/// seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id (UUID string)
    pub sub: String,
    pub email: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    /// Issued at
    pub iat: i64,
    /// Expiry
    pub exp: i64,
}

/// Issues and verifies signed bearer tokens.
///
/// `verify` exists so the issued-token round trip can be proven; serving
/// other token consumers is not this crate's job.
pub trait TokenIssuer: Send + Sync {
    /// Issue a signed, time-bounded token for a user.
    fn issue(&self, user: &User) -> AuthResult<String>;

    /// Verify a token's signature and expiry, returning its claims.
    fn verify(&self, token: &str) -> AuthResult<TokenClaims>;
}
