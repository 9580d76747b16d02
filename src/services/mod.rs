//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the repository to fulfill the
//! three account operations: sign-up, sign-in and self-lookup. They
//! depend on abstractions (traits) for dependency inversion.

mod auth_service;
mod user_service;

pub use auth_service::{AuthService, Authenticator, Claims};
pub use user_service::{UserManager, UserService};
