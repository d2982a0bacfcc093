//! Featured campaign catalog operations.

use std::str::FromStr;

use rust_decimal::Decimal;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use tracing::info;

use migration::entities::featured_campaign;

use crate::errors::{Result, RewardsError};
use crate::models::{FeaturedCampaign, NewFeaturedCampaign, PricePer};

use super::RewardsRepository;

// decimal(8, 2) ceiling.
const MAX_PRICE: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

impl RewardsRepository {
    /// Insert a catalog entry. `priceper` defaults to `visit` and `is_active`
    /// to true when not supplied.
    pub async fn create_featured_campaign(
        &self,
        new: NewFeaturedCampaign,
    ) -> Result<FeaturedCampaign> {
        validate_price(new.price)?;

        let model = featured_campaign::ActiveModel {
            name: Set(new.name),
            description: Set(new.description),
            price: Set(new.price),
            priceper: Set(new.priceper.unwrap_or_default().to_string()),
            url: Set(new.url),
            is_active: Set(new.is_active.unwrap_or(true)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            RewardsError::database_operation(format!("Failed to insert featured campaign: {}", e))
        })?;

        info!("Featured campaign created: {} ({})", model.name, model.id);
        model_to_featured(model)
    }

    pub async fn get_featured_campaign(&self, id: i64) -> Result<Option<FeaturedCampaign>> {
        let model = featured_campaign::Entity::find_by_id(id).one(&self.db).await?;
        model.map(model_to_featured).transpose()
    }

    /// Active catalog entries only.
    pub async fn list_active_featured_campaigns(&self) -> Result<Vec<FeaturedCampaign>> {
        let models = featured_campaign::Entity::find()
            .filter(featured_campaign::Column::IsActive.eq(true))
            .all(&self.db)
            .await?;
        models.into_iter().map(model_to_featured).collect()
    }

    pub async fn set_featured_campaign_active(
        &self,
        id: i64,
        is_active: bool,
    ) -> Result<FeaturedCampaign> {
        let model = featured_campaign::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                RewardsError::not_found(format!("Featured campaign not found: {}", id))
            })?;

        let mut active: featured_campaign::ActiveModel = model.into();
        active.is_active = Set(is_active);

        model_to_featured(active.update(&self.db).await?)
    }

    pub async fn remove_featured_campaign(&self, id: i64) -> Result<()> {
        let result = featured_campaign::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                RewardsError::database_operation(format!(
                    "Failed to delete featured campaign: {}",
                    e
                ))
            })?;

        if result.rows_affected == 0 {
            return Err(RewardsError::not_found(format!(
                "Featured campaign not found: {}",
                id
            )));
        }

        info!("Featured campaign deleted: {}", id);
        Ok(())
    }
}

fn validate_price(price: Decimal) -> Result<()> {
    if price.is_sign_negative() || price > MAX_PRICE {
        return Err(RewardsError::validation(format!(
            "Price out of range for decimal(8, 2): {}",
            price
        )));
    }
    Ok(())
}

fn model_to_featured(model: featured_campaign::Model) -> Result<FeaturedCampaign> {
    let priceper = PricePer::from_str(&model.priceper).map_err(|e| {
        RewardsError::database_operation(format!("Featured campaign {}: {}", model.id, e))
    })?;

    Ok(FeaturedCampaign {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        priceper,
        url: model.url,
        is_active: model.is_active,
    })
}
