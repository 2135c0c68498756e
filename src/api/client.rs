//! LipiTrack API Client
//!
//! A read-only client for the LipiTrack backend's user and summary endpoints.

use crate::api::LipidApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::network;
use crate::environment::Environment;
use crate::models::{Summary, UserRef};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("lipitrack-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(network::connect_timeout())
            .timeout(network::request_timeout())
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }
}

#[async_trait::async_trait]
impl LipidApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn list_users(&self) -> Result<Vec<UserRef>, ApiError> {
        self.get_request("/users/").await
    }

    async fn get_summary(&self, user_id: i64) -> Result<Summary, ApiError> {
        self.get_request(&format!("/users/{}/summary/", user_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(url: &str) -> ApiClient {
        ApiClient::new(Environment::Custom {
            api_url: url.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_build_url_joins_single_slash() {
        let client = client_for("http://127.0.0.1:8000/");
        assert_eq!(
            client.build_url("/users/7/summary/"),
            "http://127.0.0.1:8000/users/7/summary/"
        );
        assert_eq!(client.build_url("users/"), "http://127.0.0.1:8000/users/");
    }

    #[tokio::test]
    // Nothing listens on port 1, so the request fails at the transport layer.
    async fn test_unreachable_server_is_transport_error() {
        let client = client_for("http://127.0.0.1:1");
        let result = client.get_summary(2).await;
        match result {
            Err(ApiError::Reqwest(e)) => assert!(!e.to_string().is_empty()),
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
