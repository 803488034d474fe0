use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{
    NewProject, NewTask, Project, ProjectChanges, Task, TaskChanges, TaskStatus,
};
use crate::domain::ports::{Clock, ProjectStore, StoreError, TaskStore};

// Shared application state for the projects service.
pub struct AppState {
    pub projects: Arc<dyn ProjectStore>,
    pub tasks: Arc<dyn TaskStore>,
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err.as_database_error() {
        Some(db_err) if db_err.is_foreign_key_violation() => StoreError::NotFound,
        _ => StoreError::Backend(err.to_string()),
    }
}

#[derive(Clone)]
pub struct PostgresProjectStore {
    pub db: PgPool,
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ProjectStore for PostgresProjectStore {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM projects
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Project>, StoreError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Project::from))
    }

    async fn insert(&self, project: NewProject) -> Result<Project, StoreError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            INSERT INTO projects (name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.created_at)
        .fetch_one(&self.db)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, changes: ProjectChanges) -> Result<Project, StoreError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            UPDATE projects
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = $4
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(changes.updated_at)
        .fetch_optional(&self.db)
        .await
        .map_err(map_sqlx_error)?;

        row.map(Project::from).ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct PostgresTaskStore {
    pub db: PgPool,
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: i64,
    project_id: i64,
    title: String,
    description: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TaskRow> for Task {
    type Error = StoreError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let status = TaskStatus::parse(&row.status)
            .ok_or_else(|| StoreError::Backend(format!("unknown task status {:?}", row.status)))?;

        Ok(Self {
            id: row.id,
            project_id: row.project_id,
            title: row.title,
            description: row.description,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn list(&self, project_id: Option<i64>) -> Result<Vec<Task>, StoreError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, project_id, title, description, status, created_at, updated_at
            FROM tasks
            WHERE $1::BIGINT IS NULL OR project_id = $1
            ORDER BY id
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.db)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(Task::try_from).collect()
    }

    async fn find(&self, id: i64) -> Result<Option<Task>, StoreError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, project_id, title, description, status, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(map_sqlx_error)?;

        row.map(Task::try_from).transpose()
    }

    async fn insert(&self, task: NewTask) -> Result<Task, StoreError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            INSERT INTO tasks (project_id, title, description, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id, project_id, title, description, status, created_at, updated_at
            "#,
        )
        .bind(task.project_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.created_at)
        .fetch_one(&self.db)
        .await
        .map_err(map_sqlx_error)?;

        row.try_into()
    }

    async fn update(&self, id: i64, changes: TaskChanges) -> Result<Task, StoreError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            UPDATE tasks
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                updated_at = $5
            WHERE id = $1
            RETURNING id, project_id, title, description, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.status.map(TaskStatus::as_str))
        .bind(changes.updated_at)
        .fetch_optional(&self.db)
        .await
        .map_err(map_sqlx_error)?;

        row.ok_or(StoreError::NotFound)?.try_into()
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

// System clock adapter used by project and task use cases.
#[derive(Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
