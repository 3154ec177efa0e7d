//! HTTP client for the user service API.
//!
//! Single point of contact with the remote API. Two cross-cutting
//! concerns are enforced identically for every call site: header
//! injection and normalization of all failures into [`ApiError`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{ApiError, Error, Result};
use crate::transport::headers;

/// HTTP client for the user service API.
///
/// Requests carry no timeout, matching the service's reference client;
/// callers that need one should supply a pre-configured
/// `reqwest::Client` via [`HttpClient::with_client`].
pub struct HttpClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpClient {
    /// Create a client with the default reqwest client.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create with a custom reqwest client (testing, TLS, timeouts).
    pub fn with_client(client: reqwest::Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// The injected configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Authenticated GET returning the deserialized JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: &str,
    ) -> Result<T> {
        debug!(%path, "GET");
        let response = self
            .client
            .get(self.url(path))
            .headers(headers::auth_headers(&self.config, access_token))
            .send()
            .await
            .map_err(|e| {
                warn!(%path, error = %e, "transport failure");
                Error::Api(ApiError::network())
            })?;

        Self::handle_response(path, response).await
    }

    /// POST with a JSON body, returning the deserialized JSON response.
    ///
    /// No Authorization header is attached; this is the pre-auth verb
    /// used for calls such as login.
    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        debug!(%path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .headers(headers::json_headers(&self.config))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(%path, error = %e, "transport failure");
                Error::Api(ApiError::network())
            })?;

        Self::handle_response(path, response).await
    }

    /// Normalize a response.
    ///
    /// Non-2xx becomes the server's structured error body; an error body
    /// that cannot be parsed (or carries no code) collapses into the
    /// fixed network error, as does a 2xx body that does not match the
    /// caller's expected shape.
    async fn handle_response<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let err = match response.json::<ApiError>().await {
                Ok(body) if !body.code.is_empty() => body,
                _ => ApiError::network(),
            };
            debug!(%path, status = status.as_u16(), code = %err.code, "request rejected");
            return Err(Error::Api(err));
        }

        response.json::<T>().await.map_err(|e| {
            warn!(%path, error = %e, "response body did not match expected shape");
            Error::Api(ApiError::network())
        })
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .field("platform", &self.config.platform)
            .finish()
    }
}
