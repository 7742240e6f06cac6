//! Farmer registry: uniqueness, updates and the delete cascade.

use farm_records::error::AppError;
use farm_records::models::{
    FarmerUpdate, NewConversation, NewFarmer, NewLlmOperation, NewRecommendation, NewTask,
};

use super::helpers::{create_farmer, create_field, test_pool, unique};

#[tokio::test]
async fn test_duplicate_registration_number_rejected() {
    let Some(pool) = test_pool().await else { return };

    let sfn = unique("HR");
    pool.create_farmer(NewFarmer {
        state_farm_number: Some(sfn.clone()),
        ..Default::default()
    })
    .await
    .expect("first registration");

    let err = pool
        .create_farmer(NewFarmer {
            state_farm_number: Some(sfn),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::UniquenessViolation(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_duplicate_tax_id_rejected_on_create() {
    let Some(pool) = test_pool().await else { return };

    let vat_no = unique("HR123");
    pool.create_farmer(NewFarmer {
        vat_no: Some(vat_no.clone()),
        ..Default::default()
    })
    .await
    .expect("first registration");

    let err = pool
        .create_farmer(NewFarmer {
            state_farm_number: Some(unique("HR-002")),
            vat_no: Some(vat_no),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::UniquenessViolation(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_duplicate_tax_id_rejected_on_update() {
    let Some(pool) = test_pool().await else { return };

    let first = create_farmer(&pool, "OPG Prvi").await;
    let second = create_farmer(&pool, "OPG Drugi").await;

    let err = pool
        .update_farmer(
            second.id,
            FarmerUpdate {
                vat_no: Some(first.vat_no.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::UniquenessViolation(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_farmers_without_identifiers_coexist() {
    let Some(pool) = test_pool().await else { return };

    let a = pool.create_farmer(NewFarmer::default()).await.unwrap();
    let b = pool.create_farmer(NewFarmer::default()).await.unwrap();
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_update_and_lookup_by_chat_number() {
    let Some(pool) = test_pool().await else { return };

    let farmer = create_farmer(&pool, "OPG Kovač").await;
    let number = unique("+38598");

    let updated = pool
        .update_farmer(
            farmer.id,
            FarmerUpdate {
                wa_phone_number: Some(Some(number.clone())),
                city: Some(Some("Vukovar".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.city.as_deref(), Some("Vukovar"));
    assert_eq!(updated.farm_name.as_deref(), Some("OPG Kovač"));

    let found = pool.find_farmer_by_wa_phone(&number).await.unwrap().unwrap();
    assert_eq!(found.id, farmer.id);
}

#[tokio::test]
async fn test_update_can_clear_tax_id() {
    let Some(pool) = test_pool().await else { return };

    let farmer = create_farmer(&pool, "OPG Bez OIB").await;
    assert!(farmer.vat_no.is_some());

    let updated = pool
        .update_farmer(
            farmer.id,
            FarmerUpdate {
                vat_no: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.vat_no.is_none());
    assert_eq!(updated.state_farm_number, farmer.state_farm_number);
}

#[tokio::test]
async fn test_delete_farmer_cascades_and_nullifies_logs() {
    let Some(pool) = test_pool().await else { return };

    let farmer = create_farmer(&pool, "OPG Brisanje").await;
    let field = create_field(&pool, farmer.id, "North Plot").await;

    let conversation = pool
        .create_conversation(NewConversation {
            farmer_id: Some(farmer.id),
            question: "Kada sijati kukuruz?".to_string(),
            answer: "Sredinom travnja.".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let task = pool
        .create_task(NewTask {
            farmer_id: farmer.id,
            field_id: Some(field.field_id),
            description: "Oranje".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let rec = pool
        .create_recommendation(NewRecommendation {
            farmer_id: farmer.id,
            recommendation_text: "Provjeriti pH tla".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let op_type = unique("answer_question");
    let log = pool
        .log_llm_operation(NewLlmOperation {
            farmer_id: Some(farmer.id),
            operation_type: op_type.clone(),
            success: true,
            ..Default::default()
        })
        .await
        .unwrap();

    pool.delete_farmer(farmer.id).await.unwrap();

    assert!(matches!(pool.get_farmer(farmer.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(pool.get_field(field.field_id).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        pool.get_conversation(conversation.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(pool.get_task(task.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        pool.get_recommendation(rec.id).await,
        Err(AppError::NotFound(_))
    ));

    let logs = pool
        .list_llm_logs(Some(&op_type), None, None)
        .await
        .unwrap();
    let kept = logs.iter().find(|l| l.id == log.id).expect("log entry kept");
    assert!(kept.farmer_id.is_none());
}

#[tokio::test]
async fn test_delete_missing_farmer_is_not_found() {
    let Some(pool) = test_pool().await else { return };

    assert!(matches!(
        pool.delete_farmer(i32::MAX).await,
        Err(AppError::NotFound(_))
    ));
}
