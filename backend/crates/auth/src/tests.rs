//! Use case tests against an in-memory repository.

use std::sync::{Arc, Mutex};

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};
use crate::infra::jwt::JwtIssuer;

/// In-memory repository mirroring the uniqueness contract of the
/// PostgreSQL implementation: `create` rejects duplicates even when the
/// `exists_*` pre-checks were skipped or raced.
#[derive(Default)]
struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        if users
            .iter()
            .any(|u| u.user_name.canonical() == user.user_name.canonical())
        {
            return Err(AuthError::UserNameTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|u| &u.email == email))
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .any(|u| u.user_name.canonical() == user_name.canonical()))
    }
}

impl MemoryUserRepository {
    fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::with_random_secret())
}

fn sign_up_input(email: &str, user_name: &str, password: &str) -> SignUpInput {
    SignUpInput {
        email: email.to_string(),
        user_name: user_name.to_string(),
        password: password.to_string(),
        password_check: password.to_string(),
    }
}

async fn register(
    repo: &Arc<MemoryUserRepository>,
    config: &Arc<AuthConfig>,
    email: &str,
    user_name: &str,
    password: &str,
) -> AuthResult<()> {
    SignUpUseCase::new(repo.clone(), config.clone())
        .execute(sign_up_input(email, user_name, password))
        .await
}

// ============================================================================
// Sign Up
// ============================================================================

#[tokio::test]
async fn test_sign_up_creates_user() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    register(&repo, &config, "alice@example.com", "Alice", "correct horse")
        .await
        .unwrap();

    assert_eq!(repo.user_count(), 1);

    let email = Email::new("alice@example.com").unwrap();
    let user = repo.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(user.user_name.original(), "Alice");
    // Stored credential is a PHC hash, never the plaintext
    assert!(user.password_hash.as_phc_string().starts_with("$argon2id$"));
}

#[tokio::test]
async fn test_sign_up_duplicate_email_rejected() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    register(&repo, &config, "alice@example.com", "Alice", "correct horse")
        .await
        .unwrap();

    let err = register(&repo, &config, "alice@example.com", "Other", "correct horse")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken));
    assert_eq!(repo.user_count(), 1);
}

#[tokio::test]
async fn test_sign_up_email_conflict_checked_before_user_name() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    register(&repo, &config, "alice@example.com", "Alice", "correct horse")
        .await
        .unwrap();

    // Both conflict; email wins
    let err = register(&repo, &config, "alice@example.com", "Alice", "correct horse")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken));
}

#[tokio::test]
async fn test_sign_up_duplicate_user_name_rejected() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    register(&repo, &config, "alice@example.com", "Alice", "correct horse")
        .await
        .unwrap();

    let err = register(&repo, &config, "bob@example.com", "Alice", "correct horse")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UserNameTaken));
    assert_eq!(repo.user_count(), 1);
}

#[tokio::test]
async fn test_sign_up_user_name_uniqueness_is_case_insensitive() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    register(&repo, &config, "alice@example.com", "Alice", "correct horse")
        .await
        .unwrap();

    let err = register(&repo, &config, "bob@example.com", "ALICE", "correct horse")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UserNameTaken));
}

#[tokio::test]
async fn test_sign_up_email_uniqueness_ignores_case_and_whitespace() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    register(&repo, &config, "alice@example.com", "Alice", "correct horse")
        .await
        .unwrap();

    let err = register(&repo, &config, "  ALICE@Example.Com  ", "Other", "correct horse")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken));
}

#[tokio::test]
async fn test_sign_up_password_mismatch_rejected() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    let err = SignUpUseCase::new(repo.clone(), config.clone())
        .execute(SignUpInput {
            email: "alice@example.com".to_string(),
            user_name: "Alice".to_string(),
            password: "correct horse".to_string(),
            password_check: "wrong horse".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::PasswordMismatch));
    assert_eq!(repo.user_count(), 0);
}

#[tokio::test]
async fn test_sign_up_invalid_email_rejected() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    let err = register(&repo, &config, "not-an-email", "Alice", "correct horse")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));
    assert_eq!(repo.user_count(), 0);
}

#[tokio::test]
async fn test_sign_up_short_password_rejected() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    let err = register(&repo, &config, "alice@example.com", "Alice", "short")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));
    assert_eq!(repo.user_count(), 0);
}

#[tokio::test]
async fn test_sign_up_racing_duplicate_surfaces_conflict() {
    // Simulate losing the race: the row appears between the pre-check and
    // the insert. The repository's own uniqueness check must still win.
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();

    register(&repo, &config, "alice@example.com", "Alice", "correct horse")
        .await
        .unwrap();

    let raw = crate::domain::value_object::user_password::RawPassword::new(
        "correct horse".to_string(),
    )
    .unwrap();
    let dup = User::new(
        Email::new("alice@example.com").unwrap(),
        UserName::new("Other").unwrap(),
        crate::domain::value_object::user_password::UserPassword::from_raw(&raw, None).unwrap(),
    );
    let err = repo.create(&dup).await.unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken));
}

// ============================================================================
// Sign In
// ============================================================================

async fn sign_in(
    repo: &Arc<MemoryUserRepository>,
    issuer: &Arc<JwtIssuer>,
    config: &Arc<AuthConfig>,
    email: &str,
    password: &str,
) -> AuthResult<String> {
    SignInUseCase::new(repo.clone(), issuer.clone(), config.clone())
        .execute(SignInInput {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
        .map(|out| out.token)
}

#[tokio::test]
async fn test_sign_in_returns_token_with_user_claims() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();
    let issuer = Arc::new(JwtIssuer::new(&config));

    register(&repo, &config, "alice@example.com", "Alice", "correct horse")
        .await
        .unwrap();

    let token = sign_in(&repo, &issuer, &config, "alice@example.com", "correct horse")
        .await
        .unwrap();
    assert!(!token.is_empty());

    use crate::domain::token::TokenIssuer;
    let claims = issuer.verify(&token).unwrap();
    assert_eq!(claims.email, "alice@example.com");
    assert_eq!(claims.user_name, "Alice");
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_sign_in_unknown_email_rejected() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();
    let issuer = Arc::new(JwtIssuer::new(&config));

    let err = sign_in(&repo, &issuer, &config, "nobody@example.com", "correct horse")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::UserNotFound));
}

#[tokio::test]
async fn test_sign_in_wrong_password_rejected() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();
    let issuer = Arc::new(JwtIssuer::new(&config));

    register(&repo, &config, "alice@example.com", "Alice", "correct horse")
        .await
        .unwrap();

    let err = sign_in(&repo, &issuer, &config, "alice@example.com", "wrong horse!")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_sign_in_email_lookup_ignores_case() {
    let repo = Arc::new(MemoryUserRepository::default());
    let config = test_config();
    let issuer = Arc::new(JwtIssuer::new(&config));

    register(&repo, &config, "alice@example.com", "Alice", "correct horse")
        .await
        .unwrap();

    sign_in(&repo, &issuer, &config, "Alice@Example.COM", "correct horse")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_sign_in_respects_pepper() {
    let repo = Arc::new(MemoryUserRepository::default());
    let peppered = Arc::new(AuthConfig {
        password_pepper: Some(b"table-salt".to_vec()),
        ..AuthConfig::with_random_secret()
    });
    let plain = Arc::new(AuthConfig {
        password_pepper: None,
        token_secret: peppered.token_secret.clone(),
        ..AuthConfig::with_random_secret()
    });
    let issuer = Arc::new(JwtIssuer::new(&peppered));

    register(&repo, &peppered, "alice@example.com", "Alice", "correct horse")
        .await
        .unwrap();

    // Verification without the pepper must fail
    let err = sign_in(&repo, &issuer, &plain, "alice@example.com", "correct horse")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));

    // And succeed with it
    sign_in(&repo, &issuer, &peppered, "alice@example.com", "correct horse")
        .await
        .unwrap();
}
