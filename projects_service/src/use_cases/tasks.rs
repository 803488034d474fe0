use crate::domain::entities::{NewTask, Task, TaskChanges};
use crate::domain::errors::ProjectError;
use crate::domain::ports::{Clock, ProjectStore, TaskStore};
use crate::interface_adapters::protocol::{CreateTaskRequest, UpdateTaskRequest};
use crate::use_cases::projects::not_found_as;

const MAX_TITLE_LEN: usize = 200;

// Task CRUD. Tasks always belong to an existing project.
pub struct TaskUseCases<C, P, T> {
    pub clock: C,
    pub projects: P,
    pub tasks: T,
}

impl<C, P, T> TaskUseCases<C, P, T>
where
    C: Clock,
    P: ProjectStore,
    T: TaskStore,
{
    pub async fn list(&self, project_id: Option<i64>) -> Result<Vec<Task>, ProjectError> {
        self.tasks
            .list(project_id)
            .await
            .map_err(|_| ProjectError::StorageFailure)
    }

    pub async fn get(&self, id: i64) -> Result<Task, ProjectError> {
        self.tasks
            .find(id)
            .await
            .map_err(|_| ProjectError::StorageFailure)?
            .ok_or(ProjectError::TaskNotFound(id))
    }

    pub async fn create(&self, payload: CreateTaskRequest) -> Result<Task, ProjectError> {
        let title = normalize_title(&payload.title)?;
        let project_id = payload.project_id;

        let project = self
            .projects
            .find(project_id)
            .await
            .map_err(|_| ProjectError::StorageFailure)?;
        if project.is_none() {
            return Err(ProjectError::ProjectNotFound(project_id));
        }

        let task = NewTask {
            project_id,
            title,
            description: payload.description,
            status: payload.status.unwrap_or_default(),
            created_at: self.clock.now(),
        };

        // The project can still vanish between the lookup and the insert.
        self.tasks
            .insert(task)
            .await
            .map_err(|err| not_found_as(err, ProjectError::ProjectNotFound(project_id)))
    }

    pub async fn update(&self, id: i64, payload: UpdateTaskRequest) -> Result<Task, ProjectError> {
        let title = payload.title.as_deref().map(normalize_title).transpose()?;

        let changes = TaskChanges {
            title,
            description: payload.description,
            status: payload.status,
            updated_at: self.clock.now(),
        };

        self.tasks
            .update(id, changes)
            .await
            .map_err(|err| not_found_as(err, ProjectError::TaskNotFound(id)))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ProjectError> {
        self.tasks
            .delete(id)
            .await
            .map_err(|err| not_found_as(err, ProjectError::TaskNotFound(id)))
    }
}

fn normalize_title(value: &str) -> Result<String, ProjectError> {
    let title = value.trim();
    let len = title.chars().count();
    if len == 0 || len > MAX_TITLE_LEN {
        return Err(ProjectError::InvalidTitle);
    }
    Ok(title.to_string())
}
