//! # tov-gateway
//!
//! Rust client library for the TovTrip user service API.
//!
//! Covers the auth session lifecycle: email/phone login, secure bearer
//! token persistence in the OS keyring, profile retrieval, and the
//! derived tri-state session status used for routing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tov_gateway::{ApiConfig, AuthClient, LoginCredentials, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Configuration comes from TOV_API_URL / TOV_API_KEY
//!     let client = AuthClient::builder()
//!         .config(ApiConfig::from_env()?)
//!         .build()?;
//!
//!     client
//!         .login(&LoginCredentials::email("user@example.com", "secret1"))
//!         .await?;
//!
//!     let profile = client.profile().await?;
//!     println!("hello, {}", profile.first_name);
//!     Ok(())
//! }
//! ```
//!
//! Every failed API call surfaces the one normalized [`ApiError`] shape,
//! whether the server rejected the request or the transport failed.
//!
//! ## Features
//!
//! - `keyring` (default) - system keyring token storage

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;
pub mod transport;
pub mod validate;

// Re-exports for ergonomic usage
pub use client::{AuthClient, AuthClientBuilder};
pub use config::{ApiConfig, Platform};
pub use error::{ApiError, Error, Result};
pub use models::auth::{LoginCredentials, TokenPair};
pub use models::user::{Gender, UserProfile};
pub use models::ApiEnvelope;
pub use session::AuthStatus;
pub use storage::{MemoryTokenStore, TokenStore};

#[cfg(feature = "keyring")]
pub use storage::KeyringTokenStore;
