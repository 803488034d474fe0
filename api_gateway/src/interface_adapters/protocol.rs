use crate::domain::{
    Credentials, GatewayError, NewProject, NewTask, ProjectChanges, TaskChanges, TaskStatus,
};
use serde::{Deserialize, Serialize};

// Request bodies are checked here before they are forwarded so that clients
// get every violation at once.
pub trait Validate {
    fn violations(&self) -> Vec<String>;

    fn validate(&self) -> Result<(), GatewayError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(GatewayError::validation(violations))
        }
    }
}

fn require(field: &str, value: &str, violations: &mut Vec<String>) {
    if value.trim().is_empty() {
        violations.push(format!("{field} should not be empty"));
    }
}

fn reject_blank(field: &str, value: Option<&str>, violations: &mut Vec<String>) {
    if let Some(value) = value {
        require(field, value, violations);
    }
}

// Body for sign-up and sign-in. Missing fields default to empty so they are
// reported as violations rather than as a decode failure.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Validate for CredentialsRequest {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require("email", &self.email, &mut violations);
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            violations.push("email must be an email".to_string());
        }
        require("password", &self.password, &mut violations);
        violations
    }
}

impl From<CredentialsRequest> for Credentials {
    fn from(request: CredentialsRequest) -> Self {
        Credentials {
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

impl Validate for CreateProjectRequest {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        require("name", &self.name, &mut violations);
        violations
    }
}

impl From<CreateProjectRequest> for NewProject {
    fn from(request: CreateProjectRequest) -> Self {
        NewProject {
            name: request.name,
            description: request.description,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Validate for UpdateProjectRequest {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        reject_blank("name", self.name.as_deref(), &mut violations);
        violations
    }
}

impl From<UpdateProjectRequest> for ProjectChanges {
    fn from(request: UpdateProjectRequest) -> Self {
        ProjectChanges {
            name: request.name,
            description: request.description,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub project_id: i64,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

impl Validate for CreateTaskRequest {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.project_id <= 0 {
            violations.push("project_id must be a positive number".to_string());
        }
        require("title", &self.title, &mut violations);
        violations
    }
}

impl From<CreateTaskRequest> for NewTask {
    fn from(request: CreateTaskRequest) -> Self {
        NewTask {
            project_id: request.project_id,
            title: request.title,
            description: request.description,
            status: request.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

impl Validate for UpdateTaskRequest {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        reject_blank("title", self.title.as_deref(), &mut violations);
        violations
    }
}

impl From<UpdateTaskRequest> for TaskChanges {
    fn from(request: UpdateTaskRequest) -> Self {
        TaskChanges {
            title: request.title,
            description: request.description,
            status: request.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    pub project_id: Option<i64>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
