//! Authentication service - credential verification and session issuance.
//!
//! Sign-up and sign-in both end in the same issuance step: stamp the
//! last-login timestamp, then mint a signed, time-bounded token.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::{NewUser, Password, SignedInUser, User};
use crate::errors::{AppError, AppResult, SignupViolation};
use crate::infra::UserRepository;

/// JWT claims payload.
///
/// The subject is the stored user id. Issuer and audience both carry the
/// configured issuer string; `jti` is a fresh nonce per token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub jti: Uuid,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create a new account and immediately sign it in
    async fn sign_up(
        &self,
        name: String,
        email: String,
        password: String,
        telephones: Vec<String>,
    ) -> AppResult<SignedInUser>;

    /// Verify credentials and issue a session token
    async fn sign_in(&self, email: String, password: String) -> AppResult<SignedInUser>;

    /// Verify a bearer token's signature, expiry, issuer and audience
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Mint a signed token for an authenticated user.
fn generate_token(user: &User, config: &Config) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = now + Duration::minutes(config.jwt_expire_minutes);

    let claims = Claims {
        sub: user.id,
        iat: now.timestamp(),
        jti: Uuid::new_v4(),
        iss: config.jwt_issuer.clone(),
        aud: config.jwt_issuer.clone(),
        exp: expires_at.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(token)
}

/// Decode a token and validate signature, expiry, issuer and audience.
fn decode_token(token: &str, config: &Config) -> AppResult<Claims> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&config.jwt_issuer]);
    validation.set_audience(&[&config.jwt_issuer]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of [`AuthService`] over the user repository.
pub struct Authenticator {
    repo: Arc<dyn UserRepository>,
    config: Config,
}

impl Authenticator {
    pub fn new(repo: Arc<dyn UserRepository>, config: Config) -> Self {
        Self { repo, config }
    }

    /// Stamp the last-login timestamp and mint the token.
    ///
    /// The timestamp write is a single round trip; a persistence failure
    /// propagates and no token is issued.
    async fn issue_session(&self, mut user: User) -> AppResult<SignedInUser> {
        let now = Utc::now();
        self.repo.record_login(user.id, now).await?;
        user.last_login_on = Some(now);
        user.last_updated_on = now;

        let token = generate_token(&user, &self.config)?;
        Ok(SignedInUser::with_token(user, token))
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn sign_up(
        &self,
        name: String,
        email: String,
        password: String,
        telephones: Vec<String>,
    ) -> AppResult<SignedInUser> {
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Registration(vec![SignupViolation::duplicate_email(
                &email,
            )]));
        }

        let password_hash = Password::new(&password)?.into_string();
        let user = self
            .repo
            .create(NewUser {
                name,
                email,
                password_hash,
                telephones,
            })
            .await?;

        tracing::info!(user_id = %user.id, "account created");

        // Sign-up implies sign-in
        self.issue_session(user).await
    }

    async fn sign_in(&self, email: String, password: String) -> AppResult<SignedInUser> {
        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AppError::UnknownUser)?;

        // An empty candidate (absent/null in the request) fails here too
        let stored = Password::from_hash(user.password_hash.clone());
        if !stored.verify(&password) {
            return Err(AppError::InvalidCredentials);
        }

        self.issue_session(user).await
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        decode_token(token, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(expire_minutes: i64) -> Config {
        Config::new(
            "postgres://unused".to_string(),
            "test-secret-key-for-testing-only-32chars".to_string(),
            expire_minutes,
            "test-issuer".to_string(),
            "127.0.0.1".to_string(),
            0,
        )
    }

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hashed".to_string(),
            telephones: vec![],
            created_on: Utc::now(),
            last_updated_on: Utc::now(),
            last_login_on: Some(Utc::now()),
        }
    }

    #[test]
    fn token_round_trip() {
        let config = test_config(30);
        let user = test_user();

        let token = generate_token(&user, &config).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let claims = decode_token(&token, &config).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.iss, "test-issuer");
        assert_eq!(claims.aud, "test-issuer");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn each_token_gets_a_fresh_nonce() {
        let config = test_config(30);
        let user = test_user();

        let first = decode_token(&generate_token(&user, &config).unwrap(), &config).unwrap();
        let second = decode_token(&generate_token(&user, &config).unwrap(), &config).unwrap();
        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let config = test_config(30);
        let other = Config::new(
            "postgres://unused".to_string(),
            "another-secret-key-that-is-long-enough!!".to_string(),
            30,
            "test-issuer".to_string(),
            "127.0.0.1".to_string(),
            0,
        );

        let token = generate_token(&test_user(), &config).unwrap();
        assert!(decode_token(&token, &other).is_err());
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let config = test_config(30);
        let other = Config::new(
            "postgres://unused".to_string(),
            "test-secret-key-for-testing-only-32chars".to_string(),
            30,
            "someone-else".to_string(),
            "127.0.0.1".to_string(),
            0,
        );

        let token = generate_token(&test_user(), &config).unwrap();
        assert!(decode_token(&token, &other).is_err());
    }
}
