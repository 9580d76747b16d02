//! Seed command - Inserts a demo account for local development.
//!
//! Idempotent: skips creation when the demo email already exists.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::{NewUser, Password};
use crate::errors::AppResult;
use crate::infra::{Database, UserRepository, UserStore};

const DEMO_NAME: &str = "Demo User";
const DEMO_EMAIL: &str = "demo@example.com";
const DEMO_PASSWORD: &str = "Passw0rd!";
const DEMO_TELEPHONE: &str = "+1 555 0100";

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Arc::new(Database::connect(&config).await);
    let repo = UserStore::new(db.get_connection());

    if repo.find_by_email(DEMO_EMAIL).await?.is_some() {
        tracing::info!(email = DEMO_EMAIL, "demo account already present, skipping");
        return Ok(());
    }

    let password_hash = Password::new(DEMO_PASSWORD)?.into_string();
    let user = repo
        .create(NewUser {
            name: DEMO_NAME.to_string(),
            email: DEMO_EMAIL.to_string(),
            password_hash,
            telephones: vec![DEMO_TELEPHONE.to_string()],
        })
        .await?;

    tracing::info!(user_id = %user.id, email = DEMO_EMAIL, "demo account created");
    println!("Seeded demo account {} ({})", DEMO_EMAIL, user.id);

    Ok(())
}
