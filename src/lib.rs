//! Rewards - affiliate campaign tracking
//!
//! This library persists the four record types of a small affiliate-marketing
//! tracker and mints the short public token (designator) that ties tracking
//! traffic back to a campaign.
//!
//! # Architecture
//! - `designator`: token generation (`dc` + base-32 digest body)
//! - `models`: domain structs, closed status/price-per enumerations
//! - `repository`: persistence gateway over SeaORM, migrations at connect
//! - `errors`: crate error type and `Result` alias
//!
//! Schema notes worth knowing up front: `inflows.campaign_designator` is a
//! plain indexed string, deliberately not a foreign key, so tracking bursts
//! never contend on the campaigns table. `conversions.campaign_designator`
//! is enforced against `campaigns.designator`.

pub mod designator;
pub mod errors;
pub mod models;
pub mod repository;

pub use errors::{Result, RewardsError};
pub use models::{
    Campaign, Conversion, ConversionStatus, FeaturedCampaign, Inflow, NewConversion,
    NewFeaturedCampaign, NewInflow, PricePer,
};
pub use repository::RewardsRepository;
