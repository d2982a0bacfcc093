use rewards::{
    ConversionStatus, NewConversion, NewFeaturedCampaign, NewInflow, PricePer, RewardsError,
    RewardsRepository,
};
use rust_decimal::Decimal;
use tempfile::TempDir;

async fn setup() -> (TempDir, RewardsRepository) {
    let dir = TempDir::new().expect("tempdir");
    let url = format!("sqlite://{}/rewards.db", dir.path().display());
    let repo = RewardsRepository::connect(&url).await.expect("connect");
    (dir, repo)
}

fn inflow_for(designator: &str) -> NewInflow {
    NewInflow {
        campaign_designator: designator.to_string(),
        ip_address: "203.0.113.7".to_string(),
        user_agent: "Mozilla/5.0 (test)".to_string(),
        referer: "https://example.com/landing".to_string(),
    }
}

fn conversion_for(designator: &str) -> NewConversion {
    NewConversion {
        campaign_designator: designator.to_string(),
        value: Some(1500),
        reference: None,
        text: "signup completed".to_string(),
        ip_address: "203.0.113.7".to_string(),
        user_agent: "Mozilla/5.0 (test)".to_string(),
        referer: "https://example.com/signup".to_string(),
        status: None,
    }
}

mod connect_tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_backend_rejected() {
        let result = RewardsRepository::connect("redis://localhost/0").await;

        match result {
            Err(RewardsError::DatabaseConfig(msg)) => {
                assert!(msg.contains("redis"), "unexpected message: {}", msg)
            }
            other => panic!("expected config error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_empty_url_rejected() {
        assert!(matches!(
            RewardsRepository::connect("").await,
            Err(RewardsError::DatabaseConfig(_))
        ));
    }
}

mod campaign_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_designator() {
        let (_dir, repo) = setup().await;

        let campaign = repo.create_campaign("Spring Sale").await.unwrap();

        let designator = campaign.designator.expect("designator assigned on create");
        assert!(designator.starts_with("dc"));
        assert!(designator.len() < 28);
        assert!(
            designator[2..]
                .chars()
                .all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c))
        );
    }

    #[tokio::test]
    async fn test_designators_are_unique_across_campaigns() {
        let (_dir, repo) = setup().await;

        let a = repo.create_campaign("A").await.unwrap();
        let b = repo.create_campaign("B").await.unwrap();

        assert_ne!(a.designator, b.designator);
    }

    #[tokio::test]
    async fn test_assign_designator_is_idempotent() {
        let (_dir, repo) = setup().await;

        let campaign = repo.create_campaign("Idempotent").await.unwrap();
        let before = campaign.designator.clone();

        let again = repo.assign_designator(campaign).await.unwrap();

        assert_eq!(again.designator, before);
    }

    #[tokio::test]
    async fn test_rename_preserves_designator() {
        let (_dir, repo) = setup().await;

        let campaign = repo.create_campaign("Old Name").await.unwrap();
        let designator = campaign.designator.clone();

        let renamed = repo.rename_campaign(campaign.id, "New Name").await.unwrap();

        assert_eq!(renamed.name, "New Name");
        assert_eq!(renamed.designator, designator);
        assert!(renamed.updated_at >= campaign.updated_at);
    }

    #[tokio::test]
    async fn test_rename_assigns_missing_designator() {
        use sea_orm::ActiveModelTrait;
        use sea_orm::ActiveValue::Set;

        let (_dir, repo) = setup().await;

        // A row is left designator-less when the post-insert write fails.
        // Recreate that state directly through the entity.
        let now = chrono::Utc::now();
        let stranded = migration::entities::campaign::ActiveModel {
            name: Set("Stranded".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(repo.connection())
        .await
        .unwrap();
        assert!(stranded.designator.is_none());

        // The next save retries the assignment.
        let renamed = repo
            .rename_campaign(stranded.id, "Recovered")
            .await
            .unwrap();

        let designator = renamed.designator.expect("designator assigned on save");
        assert!(designator.starts_with("dc"));
        assert!(designator.len() < 28);
    }

    #[tokio::test]
    async fn test_find_by_designator() {
        let (_dir, repo) = setup().await;

        let campaign = repo.create_campaign("Findable").await.unwrap();
        let designator = campaign.designator.clone().unwrap();

        let found = repo
            .find_campaign_by_designator(&designator)
            .await
            .unwrap()
            .expect("campaign found by designator");
        assert_eq!(found.id, campaign.id);

        let missing = repo
            .find_campaign_by_designator("dcAAAAAAAAAAAAA")
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_campaigns_newest_first() {
        let (_dir, repo) = setup().await;

        repo.create_campaign("First").await.unwrap();
        repo.create_campaign("Second").await.unwrap();
        repo.create_campaign("Third").await.unwrap();

        let campaigns = repo.list_campaigns().await.unwrap();
        assert_eq!(campaigns.len(), 3);
        for pair in campaigns.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_name() {
        let (_dir, repo) = setup().await;

        assert!(matches!(
            repo.create_campaign("").await,
            Err(RewardsError::Validation(_))
        ));
        assert!(matches!(
            repo.create_campaign(&"x".repeat(101)).await,
            Err(RewardsError::Validation(_))
        ));
    }
}

mod inflow_tests {
    use super::*;

    #[tokio::test]
    async fn test_inflow_accepts_unmatched_designator() {
        let (_dir, repo) = setup().await;

        // No campaign row carries this designator; the insert must still
        // succeed because the reference is unenforced by design.
        let inflow = repo.record_inflow(inflow_for("dcDOESNOTEXIST")).await.unwrap();

        assert_eq!(inflow.campaign_designator, "dcDOESNOTEXIST");
        assert!(inflow.id > 0);
    }

    #[tokio::test]
    async fn test_inflows_listed_and_counted_by_designator() {
        let (_dir, repo) = setup().await;

        let campaign = repo.create_campaign("Tracked").await.unwrap();
        let designator = campaign.designator.unwrap();

        for _ in 0..3 {
            repo.record_inflow(inflow_for(&designator)).await.unwrap();
        }
        repo.record_inflow(inflow_for("dcSOMEWHEREELSE")).await.unwrap();

        assert_eq!(repo.count_inflows(&designator).await.unwrap(), 3);
        let listed = repo.inflows_for_designator(&designator).await.unwrap();
        assert_eq!(listed.len(), 3);
        assert!(listed.iter().all(|i| i.campaign_designator == designator));
    }
}

mod conversion_tests {
    use super::*;

    #[tokio::test]
    async fn test_conversion_requires_existing_campaign() {
        let (_dir, repo) = setup().await;

        let result = repo.create_conversion(conversion_for("dcDOESNOTEXIST")).await;

        match result {
            Err(RewardsError::Validation(msg)) => {
                assert!(msg.contains("dcDOESNOTEXIST"), "unexpected message: {}", msg)
            }
            other => panic!("expected validation error, got {:?}", other.map(|c| c.id)),
        }
    }

    #[tokio::test]
    async fn test_conversion_defaults() {
        let (_dir, repo) = setup().await;

        let campaign = repo.create_campaign("Converting").await.unwrap();
        let designator = campaign.designator.unwrap();

        let conversion = repo
            .create_conversion(conversion_for(&designator))
            .await
            .unwrap();

        assert_eq!(conversion.status, ConversionStatus::Created);
        assert_eq!(conversion.reference, "");
        assert_eq!(conversion.value, Some(1500));
    }

    #[tokio::test]
    async fn test_conversion_explicit_fields() {
        let (_dir, repo) = setup().await;

        let campaign = repo.create_campaign("Converting").await.unwrap();
        let designator = campaign.designator.unwrap();

        let mut new = conversion_for(&designator);
        new.reference = Some("order-4711".to_string());
        new.status = Some(ConversionStatus::Processed);

        let conversion = repo.create_conversion(new).await.unwrap();

        assert_eq!(conversion.reference, "order-4711");
        assert_eq!(conversion.status, ConversionStatus::Processed);
    }

    #[tokio::test]
    async fn test_set_conversion_status() {
        let (_dir, repo) = setup().await;

        let campaign = repo.create_campaign("Converting").await.unwrap();
        let designator = campaign.designator.unwrap();
        let conversion = repo
            .create_conversion(conversion_for(&designator))
            .await
            .unwrap();

        let updated = repo
            .set_conversion_status(conversion.id, ConversionStatus::Finished)
            .await
            .unwrap();
        assert_eq!(updated.status, ConversionStatus::Finished);

        let fetched = repo.get_conversion(conversion.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, ConversionStatus::Finished);
    }

    #[tokio::test]
    async fn test_conversions_listed_by_designator() {
        let (_dir, repo) = setup().await;

        let campaign = repo.create_campaign("Converting").await.unwrap();
        let designator = campaign.designator.unwrap();

        repo.create_conversion(conversion_for(&designator)).await.unwrap();
        repo.create_conversion(conversion_for(&designator)).await.unwrap();

        let listed = repo.conversions_for_designator(&designator).await.unwrap();
        assert_eq!(listed.len(), 2);
    }
}

mod featured_campaign_tests {
    use super::*;

    fn featured() -> NewFeaturedCampaign {
        NewFeaturedCampaign {
            name: "Premium Hosting".to_string(),
            description: "Managed hosting, first month free".to_string(),
            price: Decimal::new(1250, 2),
            priceper: None,
            url: "https://example.com/offers/hosting".to_string(),
            is_active: None,
        }
    }

    #[tokio::test]
    async fn test_featured_defaults() {
        let (_dir, repo) = setup().await;

        let record = repo.create_featured_campaign(featured()).await.unwrap();

        assert_eq!(record.priceper, PricePer::Visit);
        assert!(record.is_active);
        assert_eq!(record.price, Decimal::new(1250, 2));
    }

    #[tokio::test]
    async fn test_featured_explicit_fields() {
        let (_dir, repo) = setup().await;

        let mut new = featured();
        new.priceper = Some(PricePer::Sale);
        new.is_active = Some(false);

        let record = repo.create_featured_campaign(new).await.unwrap();

        assert_eq!(record.priceper, PricePer::Sale);
        assert!(!record.is_active);
    }

    #[tokio::test]
    async fn test_list_active_filters_inactive() {
        let (_dir, repo) = setup().await;

        let active = repo.create_featured_campaign(featured()).await.unwrap();
        let mut inactive = featured();
        inactive.is_active = Some(false);
        repo.create_featured_campaign(inactive).await.unwrap();

        let listed = repo.list_active_featured_campaigns().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, active.id);
    }

    #[tokio::test]
    async fn test_set_active_and_remove() {
        let (_dir, repo) = setup().await;

        let record = repo.create_featured_campaign(featured()).await.unwrap();

        let deactivated = repo
            .set_featured_campaign_active(record.id, false)
            .await
            .unwrap();
        assert!(!deactivated.is_active);

        repo.remove_featured_campaign(record.id).await.unwrap();
        assert!(matches!(
            repo.remove_featured_campaign(record.id).await,
            Err(RewardsError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_price_out_of_range_rejected() {
        let (_dir, repo) = setup().await;

        let mut new = featured();
        new.price = Decimal::new(100_000_000, 2); // 1,000,000.00 breaks decimal(8, 2)

        assert!(matches!(
            repo.create_featured_campaign(new).await,
            Err(RewardsError::Validation(_))
        ));
    }
}
