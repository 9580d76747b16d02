//! `users` table entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub created_on: DateTimeUtc,
    pub last_updated_on: DateTimeUtc,
    pub last_login_on: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::telephone::Entity")]
    Telephones,
}

impl Related<super::telephone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Telephones.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
