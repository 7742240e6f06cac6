//! Crop catalog seed and lookups.

use chrono::Utc;
use farm_records::entity::crop;
use farm_records::error::AppError;
use farm_records::migration::SEED_CROPS;
use farm_records::models::NewCrop;
use sea_orm::{ActiveModelTrait, NotSet, Set};

use super::helpers::{test_pool, unique};

#[tokio::test]
async fn test_seed_catalog_present() {
    let Some(pool) = test_pool().await else { return };

    let crops = pool.list_crops().await.unwrap();
    for (name, crop_type, days, croatian) in SEED_CROPS.iter() {
        let row = crops
            .iter()
            .find(|c| c.crop_name == *name)
            .unwrap_or_else(|| panic!("{} missing from catalog", name));
        assert_eq!(row.crop_type.as_deref(), Some(*crop_type));
        assert_eq!(row.growing_period_days, Some(*days));
        assert_eq!(row.croatian_name.as_deref(), Some(*croatian));
    }
}

#[tokio::test]
async fn test_rerunning_migrations_does_not_duplicate_seed() {
    let Some(pool) = test_pool().await else { return };

    let before = pool.list_crops().await.unwrap().len();
    pool.run_migrations().await.unwrap();
    let after = pool.list_crops().await.unwrap().len();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_lookup_is_case_insensitive() {
    let Some(pool) = test_pool().await else { return };

    let corn = pool.find_crop_by_name("corn").await.unwrap().unwrap();
    assert_eq!(corn.crop_name, "Corn");
    assert_eq!(corn.croatian_name.as_deref(), Some("Kukuruz"));
    assert_eq!(corn.growing_period_days, Some(120));

    assert!(pool.find_crop_by_name("Dragonfruit").await.unwrap().is_none());
}

#[tokio::test]
async fn test_upsert_refreshes_existing_entry() {
    let Some(pool) = test_pool().await else { return };

    let name = unique("Millet");
    let created = pool
        .upsert_crop(NewCrop {
            crop_name: name.clone(),
            crop_type: Some("cereal".to_string()),
            growing_period_days: Some(90),
            croatian_name: Some("Proso".to_string()),
        })
        .await
        .unwrap();

    let refreshed = pool
        .upsert_crop(NewCrop {
            crop_name: name,
            crop_type: Some("cereal".to_string()),
            growing_period_days: Some(95),
            croatian_name: Some("Proso".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(created.id, refreshed.id);
    assert_eq!(refreshed.growing_period_days, Some(95));
}

#[tokio::test]
async fn test_names_differing_only_in_case_share_one_entry() {
    let Some(pool) = test_pool().await else { return };

    let name = unique("Sorghum");
    let created = pool
        .upsert_crop(NewCrop {
            crop_name: name.clone(),
            growing_period_days: Some(110),
            ..Default::default()
        })
        .await
        .unwrap();
    let before = pool.list_crops().await.unwrap().len();

    let refreshed = pool
        .upsert_crop(NewCrop {
            crop_name: name.to_uppercase(),
            growing_period_days: Some(115),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(refreshed.id, created.id);
    assert_eq!(refreshed.crop_name, name);
    assert_eq!(pool.list_crops().await.unwrap().len(), before);

    let err = crop::ActiveModel {
        id: NotSet,
        crop_name: Set(name.to_uppercase()),
        crop_type: Set(None),
        growing_period_days: Set(None),
        croatian_name: Set(None),
        created_at: Set(Utc::now()),
    }
    .insert(pool.connection())
    .await
    .map_err(AppError::from)
    .unwrap_err();
    assert!(matches!(err, AppError::UniquenessViolation(_)), "got {:?}", err);

    let found = pool.find_crop_by_name(&name.to_lowercase()).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
}
