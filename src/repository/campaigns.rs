//! Campaign operations, including designator assignment.

use chrono::Utc;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::{info, warn};

use migration::entities::campaign;

use crate::designator::generate_designator;
use crate::errors::{Result, RewardsError};
use crate::models::Campaign;

use super::RewardsRepository;

const MAX_NAME_LEN: usize = 100;

impl RewardsRepository {
    /// Insert a campaign and assign its designator.
    ///
    /// The insert and the designator write are two separate statements: the
    /// token is derived from the committed row id, so it cannot exist before
    /// the first write. If the second write fails the create still succeeds
    /// and the campaign is returned without a designator; the assignment is
    /// retried on the next save ([`RewardsRepository::rename_campaign`]).
    pub async fn create_campaign(&self, name: &str) -> Result<Campaign> {
        validate_name(name)?;

        let now = Utc::now();
        let model = campaign::ActiveModel {
            name: Set(name.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            RewardsError::database_operation(format!("Failed to insert campaign: {}", e))
        })?;

        let created = model_to_campaign(model);
        info!("Campaign created: {} ({})", created.name, created.id);

        match self.assign_designator(created.clone()).await {
            Ok(campaign) => Ok(campaign),
            Err(e) => {
                // Fire and forget: the row exists, the token does not yet.
                warn!(
                    "Designator assignment failed for campaign {}: {}",
                    created.id, e
                );
                Ok(created)
            }
        }
    }

    /// Assign a designator to a campaign that does not have one yet.
    ///
    /// Idempotent: a campaign whose designator is already set is returned
    /// unchanged, never overwritten.
    pub async fn assign_designator(&self, campaign: Campaign) -> Result<Campaign> {
        if campaign.designator.is_some() {
            return Ok(campaign);
        }

        let token = generate_designator(campaign.id);

        let active = campaign::ActiveModel {
            id: Unchanged(campaign.id),
            designator: Set(Some(token.clone())),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = match active.update(&self.db).await {
            Ok(model) => model,
            Err(
                sea_orm::DbErr::Exec(sea_orm::RuntimeErr::SqlxError(sqlx_err))
                | sea_orm::DbErr::Query(sea_orm::RuntimeErr::SqlxError(sqlx_err)),
            ) if Self::is_unique_violation(&sqlx_err) =>
            {
                // Vanishingly unlikely given the entropy inputs. The campaign
                // keeps a NULL designator and the next save tries a new token.
                return Err(RewardsError::database_operation(format!(
                    "Designator collision, {} is already taken",
                    token
                )));
            }
            Err(e) => {
                return Err(RewardsError::database_operation(format!(
                    "Failed to store designator {}: {}",
                    token, e
                )));
            }
        };

        info!("Designator {} assigned to campaign {}", token, campaign.id);
        Ok(model_to_campaign(model))
    }

    /// Rename a campaign. Also retries designator assignment if an earlier
    /// one failed, mirroring the save-hook semantics of the original module.
    pub async fn rename_campaign(&self, id: i64, name: &str) -> Result<Campaign> {
        validate_name(name)?;

        let model = campaign::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RewardsError::not_found(format!("Campaign not found: {}", id)))?;

        let mut active: campaign::ActiveModel = model.into();
        active.name = Set(name.to_owned());
        active.updated_at = Set(Utc::now());

        let updated = model_to_campaign(active.update(&self.db).await?);

        self.assign_designator(updated).await
    }

    pub async fn get_campaign(&self, id: i64) -> Result<Option<Campaign>> {
        let model = campaign::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_campaign))
    }

    pub async fn find_campaign_by_designator(&self, designator: &str) -> Result<Option<Campaign>> {
        let model = campaign::Entity::find()
            .filter(campaign::Column::Designator.eq(designator))
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_campaign))
    }

    /// All campaigns, newest first.
    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>> {
        let models = campaign::Entity::find()
            .order_by_desc(campaign::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_campaign).collect())
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(RewardsError::validation("Campaign name must not be empty"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(RewardsError::validation(format!(
            "Campaign name exceeds {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

fn model_to_campaign(model: campaign::Model) -> Campaign {
    Campaign {
        id: model.id,
        designator: model.designator,
        name: model.name,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
