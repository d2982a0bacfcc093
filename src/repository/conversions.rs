//! Conversion operations.

use std::str::FromStr;

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::info;

use migration::entities::conversion;

use crate::errors::{Result, RewardsError};
use crate::models::{Conversion, ConversionStatus, NewConversion};

use super::RewardsRepository;

impl RewardsRepository {
    /// Insert a conversion. Unlike inflows, the designator reference is
    /// enforced: a foreign-key violation is reported as a validation error
    /// naming the unknown designator. `status` defaults to `created` and
    /// `reference` to the empty string when not supplied.
    pub async fn create_conversion(&self, new: NewConversion) -> Result<Conversion> {
        let designator = new.campaign_designator.clone();
        let status = new.status.unwrap_or_default();

        let insert_result = conversion::ActiveModel {
            campaign_designator: Set(new.campaign_designator),
            value: Set(new.value),
            reference: Set(new.reference.unwrap_or_default()),
            text: Set(new.text),
            ip_address: Set(new.ip_address),
            user_agent: Set(new.user_agent),
            referer: Set(new.referer),
            status: Set(status.to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;

        let model = match insert_result {
            Ok(model) => model,
            Err(
                sea_orm::DbErr::Exec(sea_orm::RuntimeErr::SqlxError(sqlx_err))
                | sea_orm::DbErr::Query(sea_orm::RuntimeErr::SqlxError(sqlx_err)),
            ) if Self::is_foreign_key_violation(&sqlx_err) =>
            {
                return Err(RewardsError::validation(format!(
                    "Conversion references unknown campaign designator: {}",
                    designator
                )));
            }
            Err(e) => {
                return Err(RewardsError::database_operation(format!(
                    "Failed to insert conversion: {}",
                    e
                )));
            }
        };

        info!("Conversion recorded for {}", model.campaign_designator);
        model_to_conversion(model)
    }

    /// Overwrite the lifecycle status. Transitions are application-driven;
    /// any target variant is accepted.
    pub async fn set_conversion_status(
        &self,
        id: i64,
        status: ConversionStatus,
    ) -> Result<Conversion> {
        let model = conversion::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RewardsError::not_found(format!("Conversion not found: {}", id)))?;

        let mut active: conversion::ActiveModel = model.into();
        active.status = Set(status.to_string());

        let updated = active.update(&self.db).await?;
        info!("Conversion {} status set to {}", id, status);
        model_to_conversion(updated)
    }

    pub async fn get_conversion(&self, id: i64) -> Result<Option<Conversion>> {
        let model = conversion::Entity::find_by_id(id).one(&self.db).await?;
        model.map(model_to_conversion).transpose()
    }

    /// Conversions attributed to the given designator, newest first.
    pub async fn conversions_for_designator(&self, designator: &str) -> Result<Vec<Conversion>> {
        let models = conversion::Entity::find()
            .filter(conversion::Column::CampaignDesignator.eq(designator))
            .order_by_desc(conversion::Column::CreatedAt)
            .all(&self.db)
            .await?;
        models.into_iter().map(model_to_conversion).collect()
    }
}

fn model_to_conversion(model: conversion::Model) -> Result<Conversion> {
    let status = ConversionStatus::from_str(&model.status).map_err(|e| {
        RewardsError::database_operation(format!("Conversion {}: {}", model.id, e))
    })?;

    Ok(Conversion {
        id: model.id,
        campaign_designator: model.campaign_designator,
        value: model.value,
        reference: model.reference,
        text: model.text,
        ip_address: model.ip_address,
        user_agent: model.user_agent,
        referer: model.referer,
        status,
        created_at: model.created_at,
    })
}
