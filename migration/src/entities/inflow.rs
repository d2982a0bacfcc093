//! Inflow entity for visit/click tracking
//!
//! `campaign_designator` is a plain indexed string, deliberately not a foreign
//! key: inflow inserts arrive in bursts and must not contend on the campaigns
//! table. Rows with no matching campaign are accepted.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "inflows")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub campaign_designator: String,
    pub ip_address: String,
    pub user_agent: String,
    pub referer: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
