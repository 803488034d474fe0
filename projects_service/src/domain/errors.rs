// Domain-level errors for project and task workflows.
#[derive(Debug, PartialEq)]
pub enum ProjectError {
    InvalidName,
    InvalidTitle,
    ProjectNotFound(i64),
    TaskNotFound(i64),
    StorageFailure,
}
