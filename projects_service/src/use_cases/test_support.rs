use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{
    NewProject, NewTask, Project, ProjectChanges, Task, TaskChanges, TaskStatus,
};
use crate::domain::ports::{Clock, ProjectStore, StoreError, TaskStore};

pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl FixedClock {
    pub(crate) fn at_epoch(seconds: i64) -> Self {
        Self(Utc.timestamp_opt(seconds, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub read: bool,
    pub write: bool,
}

#[derive(Default)]
struct Tables {
    next_id: i64,
    projects: BTreeMap<i64, Project>,
    tasks: BTreeMap<i64, Task>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

// In-memory stand-in for both tables, with the same cascade and foreign key
// behavior as the database.
#[derive(Clone)]
pub(crate) struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
    failures: FailureFlags,
}

impl InMemoryStore {
    pub(crate) fn new() -> Self {
        Self {
            tables: Arc::new(Mutex::new(Tables::default())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_project(&self, name: &str) -> Project {
        let mut tables = self.tables.lock().expect("tables mutex poisoned");
        let created_at = Utc.timestamp_opt(1_600_000_000, 0).unwrap();
        let project = Project {
            id: tables.next_id(),
            name: name.to_string(),
            description: None,
            created_at,
            updated_at: created_at,
        };
        tables.projects.insert(project.id, project.clone());
        project
    }

    pub(crate) fn insert_test_task(&self, project_id: i64, title: &str) -> Task {
        let mut tables = self.tables.lock().expect("tables mutex poisoned");
        let created_at = Utc.timestamp_opt(1_600_000_000, 0).unwrap();
        let task = Task {
            id: tables.next_id(),
            project_id,
            title: title.to_string(),
            description: None,
            status: TaskStatus::Todo,
            created_at,
            updated_at: created_at,
        };
        tables.tasks.insert(task.id, task.clone());
        task
    }

    pub(crate) fn get_test_project(&self, id: i64) -> Option<Project> {
        let tables = self.tables.lock().expect("tables mutex poisoned");
        tables.projects.get(&id).cloned()
    }

    pub(crate) fn get_test_task(&self, id: i64) -> Option<Task> {
        let tables = self.tables.lock().expect("tables mutex poisoned");
        tables.tasks.get(&id).cloned()
    }

    fn check_read(&self) -> Result<(), StoreError> {
        if self.failures.read {
            return Err(StoreError::Backend("read failed".to_string()));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), StoreError> {
        if self.failures.write {
            return Err(StoreError::Backend("write failed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        self.check_read()?;
        let tables = self.tables.lock().expect("tables mutex poisoned");
        Ok(tables.projects.values().cloned().collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Project>, StoreError> {
        self.check_read()?;
        let tables = self.tables.lock().expect("tables mutex poisoned");
        Ok(tables.projects.get(&id).cloned())
    }

    async fn insert(&self, project: NewProject) -> Result<Project, StoreError> {
        self.check_write()?;
        let mut tables = self.tables.lock().expect("tables mutex poisoned");
        let stored = Project {
            id: tables.next_id(),
            name: project.name,
            description: project.description,
            created_at: project.created_at,
            updated_at: project.created_at,
        };
        tables.projects.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i64, changes: ProjectChanges) -> Result<Project, StoreError> {
        self.check_write()?;
        let mut tables = self.tables.lock().expect("tables mutex poisoned");
        let project = tables.projects.get_mut(&id).ok_or(StoreError::NotFound)?;
        if let Some(name) = changes.name {
            project.name = name;
        }
        if let Some(description) = changes.description {
            project.description = Some(description);
        }
        project.updated_at = changes.updated_at;
        Ok(project.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.check_write()?;
        let mut tables = self.tables.lock().expect("tables mutex poisoned");
        tables.projects.remove(&id).ok_or(StoreError::NotFound)?;
        tables.tasks.retain(|_, task| task.project_id != id);
        Ok(())
    }
}

#[async_trait]
impl TaskStore for InMemoryStore {
    async fn list(&self, project_id: Option<i64>) -> Result<Vec<Task>, StoreError> {
        self.check_read()?;
        let tables = self.tables.lock().expect("tables mutex poisoned");
        Ok(tables
            .tasks
            .values()
            .filter(|task| project_id.is_none_or(|id| task.project_id == id))
            .cloned()
            .collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Task>, StoreError> {
        self.check_read()?;
        let tables = self.tables.lock().expect("tables mutex poisoned");
        Ok(tables.tasks.get(&id).cloned())
    }

    async fn insert(&self, task: NewTask) -> Result<Task, StoreError> {
        self.check_write()?;
        let mut tables = self.tables.lock().expect("tables mutex poisoned");
        if !tables.projects.contains_key(&task.project_id) {
            return Err(StoreError::NotFound);
        }
        let stored = Task {
            id: tables.next_id(),
            project_id: task.project_id,
            title: task.title,
            description: task.description,
            status: task.status,
            created_at: task.created_at,
            updated_at: task.created_at,
        };
        tables.tasks.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i64, changes: TaskChanges) -> Result<Task, StoreError> {
        self.check_write()?;
        let mut tables = self.tables.lock().expect("tables mutex poisoned");
        let task = tables.tasks.get_mut(&id).ok_or(StoreError::NotFound)?;
        if let Some(title) = changes.title {
            task.title = title;
        }
        if let Some(description) = changes.description {
            task.description = Some(description);
        }
        if let Some(status) = changes.status {
            task.status = status;
        }
        task.updated_at = changes.updated_at;
        Ok(task.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.check_write()?;
        let mut tables = self.tables.lock().expect("tables mutex poisoned");
        tables.tasks.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}
