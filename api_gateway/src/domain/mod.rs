mod auth;
mod clock;
mod errors;
mod projects;

// Re-export the domain boundary types and ports.
pub use auth::{AuthProvider, Credentials, UserProfile};
pub use clock::Clock;
pub use errors::{GatewayError, HttpFailure, RpcPayload};
pub use projects::{
    NewProject, NewTask, Project, ProjectChanges, ProjectsProvider, Task, TaskChanges, TaskStatus,
    TasksProvider,
};
