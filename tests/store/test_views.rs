//! Derived views: farmer summary and active crops.

use farm_records::error::AppError;
use farm_records::models::{CropStatus, NewConversation, NewFarmer, NewField, NewFieldCrop, NewTask};

use super::helpers::{create_farmer, create_field, test_pool, unique};

#[tokio::test]
async fn test_summary_includes_farmer_with_nothing_recorded() {
    let Some(pool) = test_pool().await else { return };

    let farmer = create_farmer(&pool, "OPG Prazno").await;

    let summary = pool.farmer_summary(farmer.id).await.unwrap();
    assert_eq!(summary.field_count, 0);
    assert_eq!(summary.conversation_count, 0);
    assert_eq!(summary.task_count, 0);

    let all = pool.list_farmer_summaries().await.unwrap();
    assert!(all.iter().any(|s| s.farmer_id == farmer.id));
}

#[tokio::test]
async fn test_summary_counts_are_independent() {
    let Some(pool) = test_pool().await else { return };

    let farmer = create_farmer(&pool, "OPG Brojanje").await;
    create_field(&pool, farmer.id, "One").await;
    create_field(&pool, farmer.id, "Two").await;
    for i in 0..3 {
        pool.create_conversation(NewConversation {
            farmer_id: Some(farmer.id),
            question: format!("Pitanje {}", i),
            answer: "Odgovor".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    }
    for description in ["Berba", "Oranje"] {
        pool.create_task(NewTask {
            farmer_id: farmer.id,
            description: description.to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    }

    let summary = pool.farmer_summary(farmer.id).await.unwrap();
    assert_eq!(summary.field_count, 2);
    assert_eq!(summary.conversation_count, 3);
    assert_eq!(summary.task_count, 2);
    assert_eq!(summary.total_hectares, Some(25.0));
}

#[tokio::test]
async fn test_summary_for_deleted_farmer_is_not_found() {
    let Some(pool) = test_pool().await else { return };

    let farmer = create_farmer(&pool, "OPG Nestalo").await;
    pool.delete_farmer(farmer.id).await.unwrap();

    assert!(matches!(
        pool.farmer_summary(farmer.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_registered_farmer_to_croatian_crop_name() {
    let Some(pool) = test_pool().await else { return };

    let farmer = pool
        .create_farmer(NewFarmer {
            state_farm_number: Some(unique("HR-001")),
            vat_no: Some(unique("HR123")),
            farm_name: Some("OPG Sjever".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let field = pool
        .create_field(NewField {
            farmer_id: farmer.id,
            field_name: "North Plot".to_string(),
            field_size: Some(8.0),
            ..Default::default()
        })
        .await
        .unwrap();
    pool.create_field_crop(NewFieldCrop {
        field_id: field.field_id,
        crop_name: "Corn".to_string(),
        ..Default::default()
    })
    .await
    .unwrap();

    let crops = pool.active_crops(Some(farmer.id)).await.unwrap();
    assert_eq!(crops.len(), 1);
    assert_eq!(crops[0].field_name, "North Plot");
    assert_eq!(crops[0].croatian_name.as_deref(), Some("Kukuruz"));
    assert_eq!(crops[0].crop_type.as_deref(), Some("cereal"));
    assert!(crops[0].in_catalog());
}

#[tokio::test]
async fn test_active_crops_excludes_finished_and_keeps_uncatalogued() {
    let Some(pool) = test_pool().await else { return };

    let farmer = create_farmer(&pool, "OPG Usjevi").await;
    let field = create_field(&pool, farmer.id, "Mixed Plot").await;

    let harvested = pool
        .create_field_crop(NewFieldCrop {
            field_id: field.field_id,
            crop_name: "Wheat".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    pool.set_field_crop_status(harvested.id, CropStatus::Harvested)
        .await
        .unwrap();
    pool.create_field_crop(NewFieldCrop {
        field_id: field.field_id,
        crop_name: "Lavender".to_string(),
        ..Default::default()
    })
    .await
    .unwrap();

    let crops = pool.active_crops(Some(farmer.id)).await.unwrap();
    assert_eq!(crops.len(), 1);
    assert_eq!(crops[0].crop_name, "Lavender");
    assert!(!crops[0].in_catalog());
    assert!(crops[0].croatian_name.is_none());
    assert!(crops[0].growing_period_days.is_none());

    let everyone = pool.active_crops(None).await.unwrap();
    assert!(everyone.iter().all(|c| c.field_crop_id != harvested.id));
}
