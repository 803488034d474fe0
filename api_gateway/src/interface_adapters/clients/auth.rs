use crate::domain::{AuthProvider, Credentials, GatewayError, UserProfile};
use crate::interface_adapters::clients::ServiceClient;
use async_trait::async_trait;
use std::time::Duration;

// Thin wrapper around the shared transport for auth service calls.
#[derive(Clone)]
pub struct AuthClient {
    inner: ServiceClient,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            inner: ServiceClient::new("auth", base_url, timeout)?,
        })
    }
}

#[async_trait]
impl AuthProvider for AuthClient {
    async fn hello(&self) -> Result<String, GatewayError> {
        self.inner.get_text("/auth").await
    }

    async fn sign_up(&self, credentials: Credentials) -> Result<UserProfile, GatewayError> {
        self.inner.post("/auth/sign-up", &credentials).await
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<UserProfile, GatewayError> {
        self.inner.post("/auth/sign-in", &credentials).await
    }
}
