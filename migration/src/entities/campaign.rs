//! Campaign entity
//!
//! An affiliate marketing effort. The public `designator` token is NULL on
//! first insert and assigned by the repository immediately afterwards, once
//! the auto-increment id is known.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "campaigns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Short public token, `dc` + base-32 body. Unique, immutable once set.
    #[sea_orm(unique)]
    pub designator: Option<String>,
    pub name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
