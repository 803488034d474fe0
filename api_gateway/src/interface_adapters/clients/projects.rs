use crate::domain::{
    GatewayError, NewProject, NewTask, Project, ProjectChanges, ProjectsProvider, Task,
    TaskChanges, TasksProvider,
};
use crate::interface_adapters::clients::ServiceClient;
use async_trait::async_trait;
use std::time::Duration;

// Client for the projects service, which owns both projects and their tasks.
#[derive(Clone)]
pub struct ProjectsClient {
    inner: ServiceClient,
}

impl ProjectsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            inner: ServiceClient::new("projects", base_url, timeout)?,
        })
    }
}

#[async_trait]
impl ProjectsProvider for ProjectsClient {
    async fn list_projects(&self) -> Result<Vec<Project>, GatewayError> {
        self.inner.get("/projects").await
    }

    async fn get_project(&self, id: i64) -> Result<Project, GatewayError> {
        self.inner.get(&format!("/projects/{id}")).await
    }

    async fn create_project(&self, project: NewProject) -> Result<Project, GatewayError> {
        self.inner.post("/projects", &project).await
    }

    async fn update_project(
        &self,
        id: i64,
        changes: ProjectChanges,
    ) -> Result<Project, GatewayError> {
        self.inner.patch(&format!("/projects/{id}"), &changes).await
    }

    async fn delete_project(&self, id: i64) -> Result<(), GatewayError> {
        self.inner.delete(&format!("/projects/{id}")).await
    }
}

#[async_trait]
impl TasksProvider for ProjectsClient {
    async fn list_tasks(&self, project_id: Option<i64>) -> Result<Vec<Task>, GatewayError> {
        match project_id {
            Some(project_id) => {
                self.inner
                    .get(&format!("/tasks?project_id={project_id}"))
                    .await
            }
            None => self.inner.get("/tasks").await,
        }
    }

    async fn get_task(&self, id: i64) -> Result<Task, GatewayError> {
        self.inner.get(&format!("/tasks/{id}")).await
    }

    async fn create_task(&self, task: NewTask) -> Result<Task, GatewayError> {
        self.inner.post("/tasks", &task).await
    }

    async fn update_task(&self, id: i64, changes: TaskChanges) -> Result<Task, GatewayError> {
        self.inner.patch(&format!("/tasks/{id}"), &changes).await
    }

    async fn delete_task(&self, id: i64) -> Result<(), GatewayError> {
        self.inner.delete(&format!("/tasks/{id}")).await
    }
}
