//! Database queries for the farm task ledger.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::debug;

use crate::entity::farm_task::{self, ActiveModel, Entity as FarmTask};
use crate::error::{AppError, AppResult};
use crate::models::{NewTask, TaskFilter, TaskStatus, clamp_limit, require_text};

use super::DbPool;

impl DbPool {
    /// Log a field operation for a farmer.
    pub async fn create_task(&self, new: NewTask) -> AppResult<farm_task::Model> {
        require_text("description", &new.description)?;
        let now = Utc::now();

        let model = ActiveModel {
            id: NotSet,
            farmer_id: Set(new.farmer_id),
            field_id: Set(new.field_id),
            task_type: Set(new.task_type),
            description: Set(new.description),
            task_date: Set(new.task_date),
            status: Set(new.status.as_str().to_string()),
            cost: Set(new.cost),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(self.connection()).await?;

        debug!(task_id = result.id, farmer_id = result.farmer_id, "Logged task");
        Ok(result)
    }

    /// Get a task by ID.
    pub async fn get_task(&self, id: i32) -> AppResult<farm_task::Model> {
        FarmTask::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task {}", id)))
    }

    /// Move a task to any status. No ordering is enforced.
    pub async fn update_task_status(
        &self,
        id: i32,
        status: TaskStatus,
    ) -> AppResult<farm_task::Model> {
        let task = self.get_task(id).await?;

        let mut active: ActiveModel = task.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(Utc::now());

        let result = active.update(self.connection()).await?;
        Ok(result)
    }

    /// A farmer's tasks, latest task date first.
    pub async fn list_tasks(
        &self,
        farmer_id: i32,
        filter: &TaskFilter,
    ) -> AppResult<Vec<farm_task::Model>> {
        let mut select = FarmTask::find().filter(farm_task::Column::FarmerId.eq(farmer_id));

        if let Some(status) = filter.status {
            select = select.filter(farm_task::Column::Status.eq(status.as_str()));
        }
        if let Some(ref task_type) = filter.task_type {
            select = select.filter(farm_task::Column::TaskType.eq(task_type.as_str()));
        }
        if let Some(field_id) = filter.field_id {
            select = select.filter(farm_task::Column::FieldId.eq(field_id));
        }
        if let Some(from) = filter.from_date {
            select = select.filter(farm_task::Column::TaskDate.gte(from));
        }
        if let Some(to) = filter.to_date {
            select = select.filter(farm_task::Column::TaskDate.lte(to));
        }

        let result = select
            .order_by_desc(farm_task::Column::TaskDate)
            .order_by_desc(farm_task::Column::Id)
            .limit(clamp_limit(filter.limit))
            .all(self.connection())
            .await?;

        Ok(result)
    }
}
