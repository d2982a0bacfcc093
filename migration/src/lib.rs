pub use sea_orm_migration::prelude::*;

pub mod entities;
mod m20260712_000001_tracking_tables;
mod m20260805_000001_featured_campaigns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_000001_tracking_tables::Migration),
            Box::new(m20260805_000001_featured_campaigns::Migration),
        ]
    }
}
