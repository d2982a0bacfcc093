//! Initial tracking tables
//!
//! Creates the three core tables:
//! - campaigns (designator unique, NULL until assigned)
//! - inflows (campaign_designator indexed, intentionally no foreign key)
//! - conversions (campaign_designator enforced against campaigns.designator)

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campaigns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Campaigns::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Campaigns::Designator)
                            .string_len(28)
                            .null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Campaigns::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Campaigns::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Campaigns::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_campaigns_designator")
                    .table(Campaigns::Table)
                    .col(Campaigns::Designator)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_campaigns_created_at")
                    .table(Campaigns::Table)
                    .col(Campaigns::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // inflows reference campaigns by designator string only. No foreign
        // key here: bursts of tracking hits must not lock the campaigns table.
        manager
            .create_table(
                Table::create()
                    .table(Inflows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inflows::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Inflows::CampaignDesignator)
                            .string_len(28)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Inflows::IpAddress).string_len(45).not_null())
                    .col(ColumnDef::new(Inflows::UserAgent).string_len(255).not_null())
                    .col(ColumnDef::new(Inflows::Referer).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Inflows::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_inflows_campaign_designator")
                    .table(Inflows::Table)
                    .col(Inflows::CampaignDesignator)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Conversions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Conversions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Conversions::CampaignDesignator)
                            .string_len(28)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Conversions::Value).integer().null())
                    .col(
                        ColumnDef::new(Conversions::Reference)
                            .string_len(64)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Conversions::Text).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Conversions::IpAddress)
                            .string_len(45)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Conversions::UserAgent)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Conversions::Referer)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Conversions::Status)
                            .string_len(32)
                            .not_null()
                            .default("created"),
                    )
                    .col(
                        ColumnDef::new(Conversions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conversions_campaign_designator")
                            .from(Conversions::Table, Conversions::CampaignDesignator)
                            .to(Campaigns::Table, Campaigns::Designator),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_conversions_reference")
                    .table(Conversions::Table)
                    .col(Conversions::Reference)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_conversions_campaign_designator")
                    .table(Conversions::Table)
                    .col(Conversions::CampaignDesignator)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Conversions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Inflows::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Campaigns::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Campaigns {
    Table,
    Id,
    Designator,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Inflows {
    Table,
    Id,
    CampaignDesignator,
    IpAddress,
    UserAgent,
    Referer,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Conversions {
    Table,
    Id,
    CampaignDesignator,
    Value,
    Reference,
    Text,
    IpAddress,
    UserAgent,
    Referer,
    Status,
    CreatedAt,
}
