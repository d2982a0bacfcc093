//! Conversion entity
//!
//! A recorded outcome (signup/sale) attributed to a campaign. Unlike inflows,
//! the campaign reference here is an enforced foreign key against
//! `campaigns.designator`. `status` holds the lowercase wire value of
//! `ConversionStatus`; transitions are driven by calling code.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "conversions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub campaign_designator: String,
    pub value: Option<i32>,
    #[sea_orm(default_value = "")]
    pub reference: String,
    pub text: String,
    pub ip_address: String,
    pub user_agent: String,
    pub referer: String,
    #[sea_orm(default_value = "created")]
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campaign::Entity",
        from = "Column::CampaignDesignator",
        to = "super::campaign::Column::Designator"
    )]
    Campaign,
}

impl Related<super::campaign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
