//! Authenticated self-lookup handler.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::SignedInUser;
use crate::errors::AppResult;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/:id", get(find_user))
}

/// Look up the caller's own account
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Account id; must match the token subject")
    ),
    responses(
        (status = 200, description = "Account found and session still active", body = SignedInUser),
        (status = 401, description = "Id mismatch or expired session"),
        (status = 404, description = "Account not found")
    )
)]
pub async fn find_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    // The id stays a string so that a malformed id is an ordinary
    // mismatch, not a routing rejection.
    Path(id): Path<String>,
) -> AppResult<Json<SignedInUser>> {
    tracing::debug!(id = %id, "find user");

    let user = state.user_service.find_self(id, current_user.id).await?;
    Ok(Json(user))
}
