//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::token::TokenIssuer;
use crate::infra::jwt::JwtIssuer;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with the PostgreSQL repository and JWT issuer
pub fn auth_router(repo: PgUserRepository, issuer: JwtIssuer, config: AuthConfig) -> Router {
    auth_router_generic(repo, issuer, config)
}

/// Create an Auth router for any repository/issuer implementation
pub fn auth_router_generic<R, T>(repo: R, issuer: T, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
    T: TokenIssuer + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        issuer: Arc::new(issuer),
        config: Arc::new(config),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R, T>))
        .route("/signin", post(handlers::sign_in::<R, T>))
        .with_state(state)
}
