//! HTTP client performing parameterized requests against the API endpoint.

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::types::ApiConfig;

/// HTTP client for the Blockchain.info API.
///
/// Cheap to clone; every service in the SDK holds its own clone built from
/// the same configuration so connection pooling is shared.
#[derive(Debug, Clone)]
pub struct BlockchainHttpClient {
    /// Client configuration.
    config: ApiConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl BlockchainHttpClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Perform a GET request and deserialize the JSON response.
    ///
    /// The configured `api_code` (if any) is appended to the query string.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, "GET");

        let mut request = self
            .client
            .get(&url)
            .timeout(self.config.timeout)
            .query(query);
        if let Some(ref code) = self.config.api_code {
            request = request.query(&[("api_code", code.as_str())]);
        }

        let resp = request.send().await?;
        Self::read_json(resp).await
    }

    /// Perform a form-encoded POST request and deserialize the JSON response.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let resp = self.send_form(path, params).await?;
        Self::read_json(resp).await
    }

    /// Perform a form-encoded POST request and return the raw response body.
    ///
    /// Some endpoints (transaction push) answer with plain text rather
    /// than JSON.
    pub async fn post_form_text(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<String, ApiError> {
        let resp = self.send_form(path, params).await?;
        let resp = Self::validate(resp).await?;
        Ok(resp.text().await?)
    }

    /// Perform a JSON POST request and deserialize the JSON response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, "POST json");

        let mut request = self
            .client
            .post(&url)
            .timeout(self.config.timeout)
            .json(body);
        if let Some(ref code) = self.config.api_code {
            request = request.query(&[("api_code", code.as_str())]);
        }

        let resp = request.send().await?;
        Self::read_json(resp).await
    }

    async fn send_form(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Response, ApiError> {
        let url = self.url(path);
        debug!(%url, "POST form");

        let mut request = self
            .client
            .post(&url)
            .timeout(self.config.timeout)
            .form(params);
        if let Some(ref code) = self.config.api_code {
            request = request.query(&[("api_code", code.as_str())]);
        }

        Ok(request.send().await?)
    }

    /// Translate a non-success status into [`ApiError::Server`], capturing
    /// the response body as the error message.
    async fn validate(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(resp)
    }

    async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let resp = Self::validate(resp).await?;
        let text = resp.text().await?;
        let parsed = serde_json::from_str(&text)?;
        Ok(parsed)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }
}
