//! Domain models and input payloads.
//!
//! The repository converts between these and the SeaORM entity models in the
//! `migration` crate. Status and price-per fields are closed enumerations with
//! a default variant; their lowercase wire values match what the store holds.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Lifecycle status of a conversion. Transitions are application-driven;
/// nothing here enforces an ordering between variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConversionStatus {
    #[default]
    Created,
    Processed,
    Finished,
    Canceled,
}

impl std::fmt::Display for ConversionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Processed => write!(f, "processed"),
            Self::Finished => write!(f, "finished"),
            Self::Canceled => write!(f, "canceled"),
        }
    }
}

impl std::str::FromStr for ConversionStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::Created),
            "processed" => Ok(Self::Processed),
            "finished" => Ok(Self::Finished),
            "canceled" => Ok(Self::Canceled),
            _ => Err(format!(
                "Invalid conversion status: '{}'. Valid: {}",
                s,
                Self::iter().map(|v| v.as_ref().to_owned()).collect::<Vec<_>>().join(", ")
            )),
        }
    }
}

/// Billing unit of a featured campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PricePer {
    #[default]
    Visit,
    Signup,
    Sale,
}

impl std::fmt::Display for PricePer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Visit => write!(f, "visit"),
            Self::Signup => write!(f, "signup"),
            Self::Sale => write!(f, "sale"),
        }
    }
}

impl std::str::FromStr for PricePer {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visit" => Ok(Self::Visit),
            "signup" => Ok(Self::Signup),
            "sale" => Ok(Self::Sale),
            _ => Err(format!(
                "Invalid price-per unit: '{}'. Valid: {}",
                s,
                Self::iter().map(|v| v.as_ref().to_owned()).collect::<Vec<_>>().join(", ")
            )),
        }
    }
}

/// An affiliate marketing effort. `designator` stays `None` only if the
/// post-insert assignment write failed; the next save retries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub designator: Option<String>,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A recorded visit/click. Holds a denormalized designator string, never a
/// checked reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inflow {
    pub id: i64,
    pub campaign_designator: String,
    pub ip_address: String,
    pub user_agent: String,
    pub referer: String,
    pub created_at: DateTime<Utc>,
}

/// A recorded outcome attributed to a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub id: i64,
    pub campaign_designator: String,
    pub value: Option<i32>,
    pub reference: String,
    pub text: String,
    pub ip_address: String,
    pub user_agent: String,
    pub referer: String,
    pub status: ConversionStatus,
    pub created_at: DateTime<Utc>,
}

/// Catalog/display record for a promotable offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedCampaign {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub priceper: PricePer,
    pub url: String,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewInflow {
    pub campaign_designator: String,
    pub ip_address: String,
    pub user_agent: String,
    pub referer: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewConversion {
    pub campaign_designator: String,
    #[serde(default)]
    pub value: Option<i32>,
    #[serde(default)]
    pub reference: Option<String>,
    pub text: String,
    pub ip_address: String,
    pub user_agent: String,
    pub referer: String,
    #[serde(default)]
    pub status: Option<ConversionStatus>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewFeaturedCampaign {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub priceper: Option<PricePer>,
    pub url: String,
    #[serde(default)]
    pub is_active: Option<bool>,
}
