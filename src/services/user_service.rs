//! User service - authenticated self-lookup.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{SessionWindow, SignedInUser};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Look up the caller's own account.
    ///
    /// `caller_id` is the validated token subject, threaded in explicitly
    /// by the HTTP layer. Gates short-circuit in order: id match, record
    /// existence, session freshness.
    async fn find_self(&self, requested_id: String, caller_id: Uuid) -> AppResult<SignedInUser>;
}

/// Concrete implementation of [`UserService`] over the user repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    window: SessionWindow,
}

impl UserManager {
    pub fn new(repo: Arc<dyn UserRepository>, window: SessionWindow) -> Self {
        Self { repo, window }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn find_self(&self, requested_id: String, caller_id: Uuid) -> AppResult<SignedInUser> {
        // The requested id is compared as given; anything that is not the
        // caller's own id is rejected before any lookup happens.
        if requested_id != caller_id.to_string() {
            return Err(AppError::Unauthorized);
        }

        let user = self.repo.find_by_id(caller_id).await?.ok_or_not_found()?;

        if !self.window.is_active(user.last_login_on, Utc::now()) {
            return Err(AppError::SessionExpired);
        }

        // Lookup is read-only: no token reissue, no last-login update
        Ok(SignedInUser::from(user))
    }
}
