pub mod campaign;
pub mod conversion;
pub mod featured_campaign;
pub mod inflow;

pub use campaign::Entity as CampaignEntity;
pub use conversion::Entity as ConversionEntity;
pub use featured_campaign::Entity as FeaturedCampaignEntity;
pub use inflow::Entity as InflowEntity;
