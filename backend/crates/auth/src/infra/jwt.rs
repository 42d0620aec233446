//! JWT Token Issuer
//!
//! HS256-signed JWTs carrying the user's id, email, and user name. The
//! token is stateless: expiry and signature are the only checks.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::token::{TokenClaims, TokenIssuer};
use crate::error::{AuthError, AuthResult};

/// HS256 token issuer
#[derive(Clone)]
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.token_secret),
            decoding_key: DecodingKey::from_secret(&config.token_secret),
            ttl: config.token_ttl,
        }
    }
}

impl TokenIssuer for JwtIssuer {
    fn issue(&self, user: &User) -> AuthResult<String> {
        let now = Utc::now().timestamp();

        let claims = TokenClaims {
            sub: user.user_id.to_string(),
            email: user.email.as_str().to_string(),
            user_name: user.user_name.original().to_string(),
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Token(e.to_string()))
    }

    fn verify(&self, token: &str) -> AuthResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| AuthError::Token(e.to_string()))
    }
}
