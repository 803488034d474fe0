use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::entities::{NewProject, NewTask, Project, ProjectChanges, Task, TaskChanges};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("storage backend failure: {0}")]
    Backend(String),
}

// Port for project persistence. Deleting a project also removes its tasks.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, StoreError>;
    async fn find(&self, id: i64) -> Result<Option<Project>, StoreError>;
    async fn insert(&self, project: NewProject) -> Result<Project, StoreError>;
    async fn update(&self, id: i64, changes: ProjectChanges) -> Result<Project, StoreError>;
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

// Port for task persistence. `insert` reports `NotFound` when the parent
// project does not exist.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn list(&self, project_id: Option<i64>) -> Result<Vec<Task>, StoreError>;
    async fn find(&self, id: i64) -> Result<Option<Task>, StoreError>;
    async fn insert(&self, task: NewTask) -> Result<Task, StoreError>;
    async fn update(&self, id: i64, changes: TaskChanges) -> Result<Task, StoreError>;
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: ProjectStore + ?Sized> ProjectStore for Arc<T> {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        (**self).list().await
    }

    async fn find(&self, id: i64) -> Result<Option<Project>, StoreError> {
        (**self).find(id).await
    }

    async fn insert(&self, project: NewProject) -> Result<Project, StoreError> {
        (**self).insert(project).await
    }

    async fn update(&self, id: i64, changes: ProjectChanges) -> Result<Project, StoreError> {
        (**self).update(id, changes).await
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        (**self).delete(id).await
    }
}

#[async_trait]
impl<T: TaskStore + ?Sized> TaskStore for Arc<T> {
    async fn list(&self, project_id: Option<i64>) -> Result<Vec<Task>, StoreError> {
        (**self).list(project_id).await
    }

    async fn find(&self, id: i64) -> Result<Option<Task>, StoreError> {
        (**self).find(id).await
    }

    async fn insert(&self, task: NewTask) -> Result<Task, StoreError> {
        (**self).insert(task).await
    }

    async fn update(&self, id: i64, changes: TaskChanges) -> Result<Task, StoreError> {
        (**self).update(id, changes).await
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        (**self).delete(id).await
    }
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
