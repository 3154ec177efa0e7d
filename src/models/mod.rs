//! Wire types for the user service API.

pub mod auth;
pub mod user;

use serde::Deserialize;

/// Success envelope shared by every user service endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub title: String,
}
