use crate::domain::{AuthProvider, Clock, ProjectsProvider, TasksProvider};
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub auth: Arc<dyn AuthProvider>,
    pub projects: Arc<dyn ProjectsProvider>,
    pub tasks: Arc<dyn TasksProvider>,
}

// System clock adapter used to stamp error envelopes.
#[derive(Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
