use crate::domain::entities::{NewProject, Project, ProjectChanges};
use crate::domain::errors::ProjectError;
use crate::domain::ports::{Clock, ProjectStore, StoreError};
use crate::interface_adapters::protocol::{CreateProjectRequest, UpdateProjectRequest};

const MAX_NAME_LEN: usize = 120;

// Project CRUD with injected clock and store.
pub struct ProjectUseCases<C, S> {
    pub clock: C,
    pub store: S,
}

impl<C, S> ProjectUseCases<C, S>
where
    C: Clock,
    S: ProjectStore,
{
    pub async fn list(&self) -> Result<Vec<Project>, ProjectError> {
        self.store
            .list()
            .await
            .map_err(|_| ProjectError::StorageFailure)
    }

    pub async fn get(&self, id: i64) -> Result<Project, ProjectError> {
        self.store
            .find(id)
            .await
            .map_err(|_| ProjectError::StorageFailure)?
            .ok_or(ProjectError::ProjectNotFound(id))
    }

    pub async fn create(&self, payload: CreateProjectRequest) -> Result<Project, ProjectError> {
        let name = normalize_name(&payload.name)?;

        let project = NewProject {
            name,
            description: payload.description,
            created_at: self.clock.now(),
        };

        self.store
            .insert(project)
            .await
            .map_err(|_| ProjectError::StorageFailure)
    }

    pub async fn update(
        &self,
        id: i64,
        payload: UpdateProjectRequest,
    ) -> Result<Project, ProjectError> {
        let name = payload.name.as_deref().map(normalize_name).transpose()?;

        let changes = ProjectChanges {
            name,
            description: payload.description,
            updated_at: self.clock.now(),
        };

        self.store
            .update(id, changes)
            .await
            .map_err(|err| not_found_as(err, ProjectError::ProjectNotFound(id)))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ProjectError> {
        self.store
            .delete(id)
            .await
            .map_err(|err| not_found_as(err, ProjectError::ProjectNotFound(id)))
    }
}

pub(crate) fn not_found_as(err: StoreError, not_found: ProjectError) -> ProjectError {
    match err {
        StoreError::NotFound => not_found,
        StoreError::Backend(_) => ProjectError::StorageFailure,
    }
}

fn normalize_name(value: &str) -> Result<String, ProjectError> {
    let name = value.trim();
    let len = name.chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        return Err(ProjectError::InvalidName);
    }
    Ok(name.to_string())
}
