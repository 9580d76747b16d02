//! Sign-up and sign-in handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::SignedInUser;
use crate::errors::{AppResult, SignupViolation};

/// Telephone numbers: optional leading +, then digits with common
/// separators, within the column length bound.
static TELEPHONE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 ().-]{0,18}$").expect("valid telephone pattern"));

/// Account creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    /// Display name
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    #[schema(example = "John Doe")]
    pub name: String,
    /// Email address, used as the login name
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    /// Telephone numbers owned by the account
    #[validate(nested)]
    #[serde(default)]
    pub telephones: Vec<TelephoneRequest>,
}

/// A single telephone number in a sign-up request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TelephoneRequest {
    #[validate(
        length(min = 1, max = 20, message = "Telephone number must be 1-20 characters"),
        regex(path = *TELEPHONE_NUMBER, message = "Telephone number is not phone-shaped")
    )]
    #[schema(example = "+1 555 0100")]
    pub number: String,
}

/// Sign-in request.
///
/// Fields are optional on the wire; an absent or null value is treated
/// as the empty string, which can never match a stored credential.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SigninRequest {
    /// Email address
    #[serde(default)]
    #[schema(example = "user@example.com")]
    pub email: Option<String>,
    /// Password
    #[serde(default)]
    #[schema(example = "SecurePass123!")]
    pub password: Option<String>,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
}

/// Create a new account and sign it in
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "Authentication",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created and signed in", body = SignedInUser),
        (status = 400, description = "Validation error or violated constraints", body = [SignupViolation])
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignedInUser>)> {
    tracing::debug!(email = %payload.email, "sign-up attempt");

    let telephones = payload.telephones.into_iter().map(|t| t.number).collect();
    let signed_in = state
        .auth_service
        .sign_up(payload.name, payload.email, payload.password, telephones)
        .await?;

    Ok((StatusCode::CREATED, Json(signed_in)))
}

/// Verify credentials and issue a session token
#[utoipa::path(
    post,
    path = "/auth/signin",
    tag = "Authentication",
    request_body = SigninRequest,
    responses(
        (status = 202, description = "Signed in", body = SignedInUser),
        (status = 401, description = "Invalid credentials"),
        (status = 404, description = "Unknown account")
    )
)]
pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<SigninRequest>,
) -> AppResult<(StatusCode, Json<SignedInUser>)> {
    let email = payload.email.unwrap_or_default();
    tracing::debug!(email = %email, "sign-in attempt");

    let signed_in = state
        .auth_service
        .sign_in(email, payload.password.unwrap_or_default())
        .await?;

    Ok((StatusCode::ACCEPTED, Json(signed_in)))
}
