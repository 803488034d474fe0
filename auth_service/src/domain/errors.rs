// Domain-level errors for auth workflows.
#[derive(Debug)]
pub enum AuthError {
    InvalidEmail,
    WeakPassword,
    EmailTaken(String),
    UserNotFound(String),
    InvalidCredentials,
    HashFailure,
    StorageFailure,
}
