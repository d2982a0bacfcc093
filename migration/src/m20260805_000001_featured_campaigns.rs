//! Featured campaigns table
//!
//! Additive migration: creates the featured_campaigns catalog table. No data
//! migration, no backfill. `down` drops this table only.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeaturedCampaigns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeaturedCampaigns::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FeaturedCampaigns::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeaturedCampaigns::Description)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeaturedCampaigns::Price)
                            .decimal_len(8, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeaturedCampaigns::Priceper)
                            .string_len(32)
                            .not_null()
                            .default("visit"),
                    )
                    .col(
                        ColumnDef::new(FeaturedCampaigns::Url)
                            .string_len(1000)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeaturedCampaigns::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeaturedCampaigns::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FeaturedCampaigns {
    Table,
    Id,
    Name,
    Description,
    Price,
    Priceper,
    Url,
    IsActive,
}
