//! FeaturedCampaign entity
//!
//! Catalog/display record for a promotable offer. Independent of the tracking
//! tables; `priceper` holds the lowercase wire value of `PricePer`.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "featured_campaigns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: String,
    /// 8 digits total, 2 fractional.
    pub price: Decimal,
    #[sea_orm(default_value = "visit")]
    pub priceper: String,
    pub url: String,
    #[sea_orm(default_value = true)]
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
