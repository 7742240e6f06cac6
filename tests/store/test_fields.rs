//! Fields and plantings: references, status values and field deletion.

use chrono::{NaiveDate, Utc};
use farm_records::entity::field_crop;
use farm_records::error::AppError;
use farm_records::models::{
    CropStatus, FieldCropUpdate, FieldUpdate, NewField, NewFieldCrop, NewRecommendation, NewTask,
};
use sea_orm::{ActiveModelTrait, NotSet, Set};

use super::helpers::{create_farmer, create_field, test_pool};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_field_for_unknown_farmer_rejected() {
    let Some(pool) = test_pool().await else { return };

    let err = pool
        .create_field(NewField {
            farmer_id: i32::MAX,
            field_name: "Ghost Plot".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ForeignKeyViolation(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_planting_for_unknown_field_rejected() {
    let Some(pool) = test_pool().await else { return };

    let err = pool
        .create_field_crop(NewFieldCrop {
            field_id: i32::MAX,
            crop_name: "Corn".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ForeignKeyViolation(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unknown_planting_status_is_check_violation() {
    let Some(pool) = test_pool().await else { return };

    let farmer = create_farmer(&pool, "OPG Status").await;
    let field = create_field(&pool, farmer.id, "South Plot").await;
    let now = Utc::now();

    let err = field_crop::ActiveModel {
        id: NotSet,
        field_id: Set(field.field_id),
        crop_name: Set("Corn".to_string()),
        variety: Set(None),
        planting_date: Set(None),
        expected_harvest_date: Set(None),
        actual_harvest_date: Set(None),
        status: Set("dormant".to_string()),
        yield_tons: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(pool.connection())
    .await
    .map_err(AppError::from)
    .unwrap_err();

    assert!(matches!(err, AppError::CheckConstraintViolation(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_harvest_date_does_not_change_status() {
    let Some(pool) = test_pool().await else { return };

    let farmer = create_farmer(&pool, "OPG Žetva").await;
    let field = create_field(&pool, farmer.id, "East Plot").await;
    let planting = pool
        .create_field_crop(NewFieldCrop {
            field_id: field.field_id,
            crop_name: "Wheat".to_string(),
            planting_date: Some(date(2024, 10, 15)),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(planting.status, "active");

    let updated = pool
        .update_field_crop(
            planting.id,
            FieldCropUpdate {
                actual_harvest_date: Some(Some(date(2025, 7, 5))),
                yield_tons: Some(Some(7.2)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, "active");
    assert_eq!(updated.actual_harvest_date, Some(date(2025, 7, 5)));

    let harvested = pool
        .set_field_crop_status(planting.id, CropStatus::Harvested)
        .await
        .unwrap();
    assert_eq!(harvested.status, "harvested");
}

#[tokio::test]
async fn test_fields_overview_shows_active_planting_only() {
    let Some(pool) = test_pool().await else { return };

    let farmer = create_farmer(&pool, "OPG Pregled").await;
    let planted = create_field(&pool, farmer.id, "A Plot").await;
    let fallow = create_field(&pool, farmer.id, "B Plot").await;

    pool.create_field_crop(NewFieldCrop {
        field_id: planted.field_id,
        crop_name: "Sunflower".to_string(),
        variety: Some("NK Neoma".to_string()),
        ..Default::default()
    })
    .await
    .unwrap();
    pool.create_field_crop(NewFieldCrop {
        field_id: fallow.field_id,
        crop_name: "Barley".to_string(),
        status: CropStatus::Failed,
        ..Default::default()
    })
    .await
    .unwrap();

    let overview = pool.get_farmer_fields_overview(farmer.id).await.unwrap();
    assert_eq!(overview.len(), 2);
    assert_eq!(overview[0].field_name, "A Plot");
    assert_eq!(overview[0].current_crop.as_deref(), Some("Sunflower"));
    assert_eq!(overview[1].field_name, "B Plot");
    assert!(overview[1].current_crop.is_none());
}

#[tokio::test]
async fn test_delete_field_cascades_plantings_and_clears_links() {
    let Some(pool) = test_pool().await else { return };

    let farmer = create_farmer(&pool, "OPG Parcela").await;
    let field = create_field(&pool, farmer.id, "West Plot").await;

    let planting = pool
        .create_field_crop(NewFieldCrop {
            field_id: field.field_id,
            crop_name: "Soybean".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let task = pool
        .create_task(NewTask {
            farmer_id: farmer.id,
            field_id: Some(field.field_id),
            description: "Sjetva soje".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let rec = pool
        .create_recommendation(NewRecommendation {
            farmer_id: farmer.id,
            field_id: Some(field.field_id),
            recommendation_text: "Inokulirati sjeme".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    pool.delete_field(field.field_id).await.unwrap();

    assert!(matches!(
        pool.get_field_crop(planting.id).await,
        Err(AppError::NotFound(_))
    ));

    let task = pool.get_task(task.id).await.unwrap();
    assert_eq!(task.farmer_id, farmer.id);
    assert!(task.field_id.is_none());

    let rec = pool.get_recommendation(rec.id).await.unwrap();
    assert_eq!(rec.farmer_id, farmer.id);
    assert!(rec.field_id.is_none());
}

#[tokio::test]
async fn test_field_update_can_clear_nullable_columns() {
    let Some(pool) = test_pool().await else { return };

    let farmer = create_farmer(&pool, "OPG Tlo").await;
    let field = create_field(&pool, farmer.id, "Clay Plot").await;
    assert_eq!(field.soil_type.as_deref(), Some("chernozem"));

    let updated = pool
        .update_field(
            field.field_id,
            FieldUpdate {
                soil_type: Some(None),
                field_location: Some(Some("Čepin".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.soil_type.is_none());
    assert_eq!(updated.field_location.as_deref(), Some("Čepin"));
    assert_eq!(updated.field_size, Some(12.5));
}
