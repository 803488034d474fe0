use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::GatewayError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub project_id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

// Project operations served by the projects service.
#[async_trait]
pub trait ProjectsProvider: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, GatewayError>;

    async fn get_project(&self, id: i64) -> Result<Project, GatewayError>;

    async fn create_project(&self, project: NewProject) -> Result<Project, GatewayError>;

    async fn update_project(
        &self,
        id: i64,
        changes: ProjectChanges,
    ) -> Result<Project, GatewayError>;

    async fn delete_project(&self, id: i64) -> Result<(), GatewayError>;
}

// Task operations, also served by the projects service.
#[async_trait]
pub trait TasksProvider: Send + Sync {
    async fn list_tasks(&self, project_id: Option<i64>) -> Result<Vec<Task>, GatewayError>;

    async fn get_task(&self, id: i64) -> Result<Task, GatewayError>;

    async fn create_task(&self, task: NewTask) -> Result<Task, GatewayError>;

    async fn update_task(&self, id: i64, changes: TaskChanges) -> Result<Task, GatewayError>;

    async fn delete_task(&self, id: i64) -> Result<(), GatewayError>;
}
