use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::entity::MonitorError;

/// Build an HTTP client with the monitor's user agent and an optional request timeout
pub fn build_client(user_agent: &str, timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(user_agent);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(MonitorError::from)
        .context("Failed to build HTTP client")
}

/// Send a request and decode a JSON body; non-2xx statuses become `MonitorError::Api`
pub async fn get_json<T: DeserializeOwned>(request: RequestBuilder, api_name: &str) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(MonitorError::from)
        .with_context(|| format!("{} request failed", api_name))?;

    debug!("{} response status: {}", api_name, response.status());

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(MonitorError::Api(format!("{} returned {}: {}", api_name, status, error_text)).into());
    }

    response
        .json::<T>()
        .await
        .map_err(MonitorError::from)
        .with_context(|| format!("Failed to parse {} response", api_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::test_server::{stub_client, StubServer};
    use serde_json::Value;

    #[tokio::test]
    async fn test_get_json_decodes_success_body() {
        let server = StubServer::start(200, r#"{"bitcoin": {"usd": 64000.5}}"#).await;

        let body: Value = get_json(stub_client().get(&server.base_url), "Stub").await.unwrap();

        assert_eq!(body["bitcoin"]["usd"], 64000.5);
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let server = StubServer::start(429, r#"{"error": "rate limited"}"#).await;

        let err = get_json::<Value>(stub_client().get(&server.base_url), "Stub")
            .await
            .unwrap_err();

        match err.downcast_ref::<MonitorError>() {
            Some(MonitorError::Api(message)) => {
                assert!(message.contains("429"));
                assert!(message.contains("rate limited"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_is_an_error() {
        let server = StubServer::start(200, "<html>maintenance</html>").await;

        let err = get_json::<Value>(stub_client().get(&server.base_url), "Stub")
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<MonitorError>(),
            Some(MonitorError::Http(_))
        ));
        assert!(format!("{:#}", err).contains("Failed to parse Stub response"));
    }
}
