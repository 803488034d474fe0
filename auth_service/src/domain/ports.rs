use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::entities::{NewUser, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("storage backend failure: {0}")]
    Backend(String),
}

// Port for user persistence used by auth use cases.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

// Lets handlers hand a shared `Arc<dyn UserStore>` straight to a use case.
#[async_trait]
impl<T: UserStore + ?Sized> UserStore for Arc<T> {
    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        (**self).insert(user).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        (**self).find_by_email(email).await
    }
}

// Port for password hashing and verification. Async so CPU-heavy
// implementations can move off the request worker.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, String>;
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, String>;
}

#[async_trait]
impl<T: CredentialHasher + ?Sized> CredentialHasher for Arc<T> {
    async fn hash(&self, password: &str) -> Result<String, String> {
        (**self).hash(password).await
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, String> {
        (**self).verify(password, hash).await
    }
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
