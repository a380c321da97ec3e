use reqwest::Client;
use std::env;
use std::error::Error;
use std::fmt;

use crate::models::provider::SearchResponse;

const DEFAULT_API_BASE: &str = "https://hackathon.api.qloo.com";

#[derive(Debug)]
pub enum QlooError {
    EnvironmentError(String),
    HttpError(reqwest::Error),
    ResponseError(String),
}

impl fmt::Display for QlooError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QlooError::EnvironmentError(msg) => write!(f, "Environment error: {}", msg),
            QlooError::HttpError(err) => write!(f, "HTTP error: {}", err),
            QlooError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for QlooError {}

impl From<reqwest::Error> for QlooError {
    fn from(err: reqwest::Error) -> Self {
        QlooError::HttpError(err)
    }
}

/// Server-side gateway to the Qloo search API. Holds the secret key so it
/// never reaches a client; construct one per application with explicit
/// configuration so tests can point it anywhere.
#[derive(Clone)]
pub struct QlooClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl QlooClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_env() -> Result<Self, QlooError> {
        let api_key = env::var("QLOO_API_KEY")
            .map_err(|_| QlooError::EnvironmentError("QLOO_API_KEY not set".to_string()))?;
        let base_url = env::var("QLOO_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Self::new(base_url, api_key))
    }

    /// One outbound search call. A `limit` of 0 means "no limit parameter".
    pub async fn search(&self, query: &str, limit: u32) -> Result<SearchResponse, QlooError> {
        let url = format!("{}/search", self.base_url);

        let mut request = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .header("X-API-Key", &self.api_key)
            .header("Accept", "application/json");
        if limit > 0 {
            request = request.query(&[("limit", limit.to_string())]);
        }

        println!("🔍 Qloo search: \"{}\" (limit {})", query, limit);

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(QlooError::ResponseError(format!(
                "Search request failed with status {}: {}",
                status, error_text
            )));
        }

        let search_response: SearchResponse = response
            .json()
            .await
            .map_err(|e| QlooError::ResponseError(format!("Failed to parse response: {}", e)))?;

        Ok(search_response)
    }
}
