//! Database queries for the diagnostics store.
//!
//! Both tables are write-mostly logs with UUIDv7 keys, so insertion order and
//! key order agree.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::entity::llm_operation_log::{self, Entity as LlmOperationLog};
use crate::entity::system_health_log::{self, Entity as SystemHealthLog};
use crate::error::AppResult;
use crate::models::{NewHealthCheck, NewLlmOperation, clamp_limit, require_text};

use super::DbPool;

impl DbPool {
    /// Record one AI-assisted operation.
    pub async fn log_llm_operation(
        &self,
        op: NewLlmOperation,
    ) -> AppResult<llm_operation_log::Model> {
        require_text("operation_type", &op.operation_type)?;

        if !op.success {
            warn!(
                operation_type = %op.operation_type,
                error = op.error_message.as_deref().unwrap_or(""),
                "LLM operation failed"
            );
        }

        let model = llm_operation_log::ActiveModel {
            id: Set(Uuid::now_v7()),
            farmer_id: Set(op.farmer_id),
            operation_type: Set(op.operation_type),
            input_text: Set(op.input_text),
            output_text: Set(op.output_text),
            model_used: Set(op.model_used),
            tokens_used: Set(op.tokens_used),
            latency_ms: Set(op.latency_ms),
            success: Set(op.success),
            error_message: Set(op.error_message),
            created_at: Set(Utc::now()),
        };

        let result = model.insert(self.connection()).await?;
        Ok(result)
    }

    /// Record one component health sample.
    pub async fn record_health_check(
        &self,
        check: NewHealthCheck,
    ) -> AppResult<system_health_log::Model> {
        require_text("component", &check.component)?;

        debug!(
            component = %check.component,
            status = check.status.as_str(),
            "Recording health sample"
        );

        let model = system_health_log::ActiveModel {
            id: Set(Uuid::now_v7()),
            component: Set(check.component),
            status: Set(check.status.as_str().to_string()),
            response_time_ms: Set(check.response_time_ms),
            error_message: Set(check.error_message),
            metadata: Set(check.metadata),
            created_at: Set(Utc::now()),
        };

        let result = model.insert(self.connection()).await?;
        Ok(result)
    }

    /// LLM log entries, newest first.
    pub async fn list_llm_logs(
        &self,
        operation_type: Option<&str>,
        since: Option<DateTime<Utc>>,
        limit: Option<u64>,
    ) -> AppResult<Vec<llm_operation_log::Model>> {
        let mut select = LlmOperationLog::find();

        if let Some(operation_type) = operation_type {
            select = select.filter(llm_operation_log::Column::OperationType.eq(operation_type));
        }
        if let Some(since) = since {
            select = select.filter(llm_operation_log::Column::CreatedAt.gte(since));
        }

        let result = select
            .order_by_desc(llm_operation_log::Column::CreatedAt)
            .order_by_desc(llm_operation_log::Column::Id)
            .limit(clamp_limit(limit))
            .all(self.connection())
            .await?;

        Ok(result)
    }

    /// Health samples, newest first.
    pub async fn list_health_checks(
        &self,
        component: Option<&str>,
        since: Option<DateTime<Utc>>,
        limit: Option<u64>,
    ) -> AppResult<Vec<system_health_log::Model>> {
        let mut select = SystemHealthLog::find();

        if let Some(component) = component {
            select = select.filter(system_health_log::Column::Component.eq(component));
        }
        if let Some(since) = since {
            select = select.filter(system_health_log::Column::CreatedAt.gte(since));
        }

        let result = select
            .order_by_desc(system_health_log::Column::CreatedAt)
            .order_by_desc(system_health_log::Column::Id)
            .limit(clamp_limit(limit))
            .all(self.connection())
            .await?;

        Ok(result)
    }
}
