//! Migration: Make crop names unique ignoring case.
//!
//! Catalog lookups match names case-insensitively, so "corn" and "Corn" must
//! not both exist.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_crops_crop_name_lower ON crops (LOWER(crop_name));
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_crops_crop_name_lower;
                "#,
            )
            .await?;

        Ok(())
    }
}
