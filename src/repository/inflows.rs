//! Inflow operations.
//!
//! Inflows are the high-volume side of the schema. Inserts take the
//! designator string as given and never consult the campaigns table, so a
//! burst of tracking hits costs one indexed insert each.

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::trace;

use migration::entities::inflow;

use crate::errors::{Result, RewardsError};
use crate::models::{Inflow, NewInflow};

use super::RewardsRepository;

impl RewardsRepository {
    /// Record a visit/click. Any designator string is accepted, including one
    /// with no matching campaign row.
    pub async fn record_inflow(&self, new: NewInflow) -> Result<Inflow> {
        let model = inflow::ActiveModel {
            campaign_designator: Set(new.campaign_designator),
            ip_address: Set(new.ip_address),
            user_agent: Set(new.user_agent),
            referer: Set(new.referer),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            RewardsError::database_operation(format!("Failed to insert inflow: {}", e))
        })?;

        trace!("Inflow recorded for {}", model.campaign_designator);
        Ok(model_to_inflow(model))
    }

    /// Inflows carrying the given designator, newest first.
    pub async fn inflows_for_designator(&self, designator: &str) -> Result<Vec<Inflow>> {
        let models = inflow::Entity::find()
            .filter(inflow::Column::CampaignDesignator.eq(designator))
            .order_by_desc(inflow::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_inflow).collect())
    }

    pub async fn count_inflows(&self, designator: &str) -> Result<u64> {
        let count = inflow::Entity::find()
            .filter(inflow::Column::CampaignDesignator.eq(designator))
            .count(&self.db)
            .await?;
        Ok(count)
    }
}

fn model_to_inflow(model: inflow::Model) -> Inflow {
    Inflow {
        id: model.id,
        campaign_designator: model.campaign_designator,
        ip_address: model.ip_address,
        user_agent: model.user_agent,
        referer: model.referer,
        created_at: model.created_at,
    }
}
