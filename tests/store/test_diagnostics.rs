//! Diagnostics store and the 24-hour system status rollup.

use chrono::{Duration, Utc};
use farm_records::entity::system_health_log;
use farm_records::models::{HealthStatus, NewHealthCheck, NewLlmOperation};
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

use super::helpers::{test_pool, unique};

#[tokio::test]
async fn test_rollup_averages_recent_samples() {
    let Some(pool) = test_pool().await else { return };

    let component = unique("database");
    for ms in [10, 20, 30] {
        pool.record_health_check(
            NewHealthCheck::new(component.clone(), HealthStatus::Healthy).with_response_time(ms),
        )
        .await
        .unwrap();
    }
    pool.record_health_check(NewHealthCheck::new(component.clone(), HealthStatus::Degraded))
        .await
        .unwrap();

    let status = pool.system_status().await.unwrap();
    let ours: Vec<_> = status.iter().filter(|s| s.component == component).collect();
    assert_eq!(ours.len(), 2);

    let healthy = ours.iter().find(|s| s.status == "healthy").unwrap();
    assert_eq!(healthy.check_count, 3);
    assert_eq!(healthy.avg_response_time_ms, Some(20.0));

    let degraded = ours.iter().find(|s| s.status == "degraded").unwrap();
    assert_eq!(degraded.check_count, 1);
    assert!(degraded.avg_response_time_ms.is_none());
}

#[tokio::test]
async fn test_rollup_ignores_samples_older_than_a_day() {
    let Some(pool) = test_pool().await else { return };

    let component = unique("llm");
    system_health_log::ActiveModel {
        id: Set(Uuid::now_v7()),
        component: Set(component.clone()),
        status: Set("unhealthy".to_string()),
        response_time_ms: Set(Some(5000)),
        error_message: Set(Some("timeout".to_string())),
        metadata: Set(None),
        created_at: Set(Utc::now() - Duration::hours(25)),
    }
    .insert(pool.connection())
    .await
    .unwrap();

    let status = pool.system_status().await.unwrap();
    assert!(status.iter().all(|s| s.component != component));

    let history = pool
        .list_health_checks(Some(&component), None, None)
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn test_llm_operations_listed_newest_first() {
    let Some(pool) = test_pool().await else { return };

    let op_type = unique("classify");
    let first = pool
        .log_llm_operation(NewLlmOperation {
            operation_type: op_type.clone(),
            model_used: Some("gpt-4o-mini".to_string()),
            tokens_used: Some(512),
            latency_ms: Some(840),
            ..Default::default()
        })
        .await
        .unwrap();
    let second = pool
        .log_llm_operation(NewLlmOperation::failed(op_type.clone(), "rate limited"))
        .await
        .unwrap();

    let logs = pool.list_llm_logs(Some(&op_type), None, None).await.unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].id, second.id);
    assert_eq!(logs[1].id, first.id);
    assert!(!logs[0].success);
    assert!(logs[1].success);
}
