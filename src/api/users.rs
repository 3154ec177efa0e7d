//! User profile endpoint.

use crate::error::Result;
use crate::models::user::UserProfile;
use crate::models::ApiEnvelope;
use crate::transport::HttpClient;

/// `GET /users/me`.
pub async fn me(http: &HttpClient, access_token: &str) -> Result<ApiEnvelope<UserProfile>> {
    http.get_json("/users/me", access_token).await
}
