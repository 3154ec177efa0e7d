//! Login endpoint.

use crate::error::Result;
use crate::models::auth::{LoginCredentials, TokenPair};
use crate::models::ApiEnvelope;
use crate::transport::HttpClient;

/// `POST /auth/login`.
///
/// Pre-auth call; no Authorization header is attached.
pub async fn login(
    http: &HttpClient,
    credentials: &LoginCredentials,
) -> Result<ApiEnvelope<TokenPair>> {
    http.post_json("/auth/login", credentials).await
}
