use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::GatewayError;

// The serialization within this layer is a dependency leak, but its a pragmatic approach
// Payload sent to the auth service for both sign-up and sign-in.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Public user record returned by the auth service. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// The handler depends on this trait, not the concrete client implementation.
// Dependencies point inwards to the domain layer.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn hello(&self) -> Result<String, GatewayError>;

    async fn sign_up(&self, credentials: Credentials) -> Result<UserProfile, GatewayError>;

    async fn sign_in(&self, credentials: Credentials) -> Result<UserProfile, GatewayError>;
}
