//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, user_handler};
use crate::domain::SignedInUser;
use crate::errors::SignupViolation;

/// OpenAPI documentation for the User Account API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Account API",
        version = "0.1.0",
        description = "Sign-up, sign-in and self-lookup with JWT session tokens",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::signup,
        auth_handler::signin,
        user_handler::find_user,
    ),
    components(
        schemas(
            SignedInUser,
            SignupViolation,
            auth_handler::SignupRequest,
            auth_handler::SigninRequest,
            auth_handler::TelephoneRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Account creation and sign-in"),
        (name = "Users", description = "Authenticated self-lookup")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/signin"))
                        .build(),
                ),
            );
        }
    }
}
