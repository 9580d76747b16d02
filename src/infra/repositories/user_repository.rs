//! User account repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

use super::entities::{telephone, user};
use crate::domain::{NewUser, Telephone, User};
use crate::errors::AppResult;

/// Data access contract for user accounts.
///
/// The store owns email uniqueness (backed by a unique index) and the
/// last-login timestamp; deletion is deliberately absent.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id, with owned telephones
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by exact email (store collation decides case-sensitivity)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a user together with its telephones in one transaction
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Persist a successful sign-in timestamp
    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`UserRepository`].
#[derive(Clone)]
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let found = user::Entity::find_by_id(id)
            .find_with_related(telephone::Entity)
            .all(&self.db)
            .await?;

        Ok(found.into_iter().next().map(to_domain))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let found = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .find_with_related(telephone::Entity)
            .all(&self.db)
            .await?;

        Ok(found.into_iter().next().map(to_domain))
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let now = Utc::now();
        let user_id = Uuid::new_v4();

        let txn = self.db.begin().await?;

        let user_model = user::ActiveModel {
            id: Set(user_id),
            name: Set(new_user.name),
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            created_on: Set(now),
            last_updated_on: Set(now),
            last_login_on: Set(None),
        }
        .insert(&txn)
        .await?;

        let mut telephones = Vec::with_capacity(new_user.telephones.len());
        for number in new_user.telephones {
            let telephone_model = telephone::ActiveModel {
                id: Set(Uuid::new_v4()),
                number: Set(number),
                user_id: Set(user_id),
            }
            .insert(&txn)
            .await?;
            telephones.push(telephone_model);
        }

        txn.commit().await?;

        Ok(to_domain((user_model, telephones)))
    }

    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<()> {
        // Single round trip; concurrent sign-ins are last-write-wins,
        // which is fine for a wall-clock monotonic column.
        user::Entity::update_many()
            .col_expr(user::Column::LastLoginOn, Expr::value(at))
            .col_expr(user::Column::LastUpdatedOn, Expr::value(at))
            .filter(user::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(())
    }
}

fn to_domain((model, telephones): (user::Model, Vec<telephone::Model>)) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        telephones: telephones
            .into_iter()
            .map(|t| Telephone {
                id: t.id,
                number: t.number,
            })
            .collect(),
        created_on: model.created_on,
        last_updated_on: model.last_updated_on,
        last_login_on: model.last_login_on,
    }
}
