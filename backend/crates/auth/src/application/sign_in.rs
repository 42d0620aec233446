//! Sign In Use Case
//!
//! Authenticates a user by email and password and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::token::TokenIssuer;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Signed bearer token; the full credential, nothing is stored
    /// server-side.
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<R, T>
where
    R: UserRepository,
    T: TokenIssuer,
{
    repo: Arc<R>,
    issuer: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<R, T> SignInUseCase<R, T>
where
    R: UserRepository,
    T: TokenIssuer,
{
    pub fn new(repo: Arc<R>, issuer: Arc<T>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            issuer,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // An address that can't parse can't be registered either
        let email = Email::new(input.email).map_err(|_| AuthError::UserNotFound)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            tracing::warn!(user_id = %user.user_id, "Sign in rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issuer.issue(&user)?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed in"
        );

        Ok(SignInOutput { token })
    }
}
