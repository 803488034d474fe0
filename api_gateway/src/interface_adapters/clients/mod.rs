mod auth;
mod projects;
pub mod upstream;

pub use auth::AuthClient;
pub use projects::ProjectsClient;

use crate::domain::GatewayError;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

// Shared reqwest transport for the service clients; every non-success answer
// is turned into a `GatewayError`.
#[derive(Clone)]
pub struct ServiceClient {
    http: Client,
    base_url: String,
    service: &'static str,
}

impl ServiceClient {
    pub fn new(
        service: &'static str,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            service,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, GatewayError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        self.decode(response).await
    }

    pub async fn get_text(&self, path: &str) -> Result<String, GatewayError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        response
            .text()
            .await
            .map_err(|err| upstream::decode_failure(self.service, &err))
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, GatewayError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        self.decode(response).await
    }

    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R, GatewayError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.send(self.http.patch(self.url(path)).json(body)).await?;
        self.decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|err| upstream::transport_failure(self.service, &err))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Keep upstream status/body so the normalizer can preserve 4xx semantics.
        let body = upstream::failure_body(self.service, response.bytes().await);
        tracing::debug!(service = self.service, %status, "upstream returned an error");
        Err(upstream::classify_failure(status.as_u16(), &body))
    }

    async fn decode<R: DeserializeOwned>(&self, response: Response) -> Result<R, GatewayError> {
        response
            .json::<R>()
            .await
            .map_err(|err| upstream::decode_failure(self.service, &err))
    }
}
