//! Token storage backends for persisting session credentials.
//!
//! Provides the [`TokenStore`] trait and implementations:
//! - [`KeyringTokenStore`] - OS-encrypted secret storage (feature `keyring`, on by default)
//! - [`MemoryTokenStore`] - In-memory (testing)

#[cfg(feature = "keyring")]
mod keyring;
mod memory;

use async_trait::async_trait;

#[cfg(feature = "keyring")]
pub use self::keyring::KeyringTokenStore;
pub use memory::MemoryTokenStore;

use crate::error::Result;

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "auth.accessToken";

/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "auth.refreshToken";

/// Trait for secure token storage backends.
///
/// Bearer tokens are opaque: implementations persist them verbatim and
/// must never write them to unencrypted storage or log their values.
/// The two keys are independent so an access-only login is representable.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Write the access token, and the refresh token when provided.
    ///
    /// Writes are sequential and not atomic across the two keys: the
    /// access write can succeed while the refresh write fails, in which
    /// case the error carries only the underlying cause's message.
    async fn set_tokens(&self, access: &str, refresh: Option<&str>) -> Result<()>;

    /// Stored access token, or `None` if never set.
    ///
    /// "Not found" is a successful read; only a store failure is an error.
    async fn access_token(&self) -> Result<Option<String>>;

    /// Stored refresh token, or `None` if never set.
    async fn refresh_token(&self) -> Result<Option<String>>;

    /// Delete both tokens. Deleting a missing key is not an error.
    async fn clear_tokens(&self) -> Result<()>;

    /// Name of this storage backend.
    fn name(&self) -> &str {
        "unknown"
    }
}

/// Blanket impl for `Arc<T>`.
#[async_trait]
impl<T: TokenStore + ?Sized> TokenStore for std::sync::Arc<T> {
    async fn set_tokens(&self, access: &str, refresh: Option<&str>) -> Result<()> {
        (**self).set_tokens(access, refresh).await
    }
    async fn access_token(&self) -> Result<Option<String>> {
        (**self).access_token().await
    }
    async fn refresh_token(&self) -> Result<Option<String>> {
        (**self).refresh_token().await
    }
    async fn clear_tokens(&self) -> Result<()> {
        (**self).clear_tokens().await
    }
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Blanket impl for `Box<T>`.
#[async_trait]
impl<T: TokenStore + ?Sized> TokenStore for Box<T> {
    async fn set_tokens(&self, access: &str, refresh: Option<&str>) -> Result<()> {
        (**self).set_tokens(access, refresh).await
    }
    async fn access_token(&self) -> Result<Option<String>> {
        (**self).access_token().await
    }
    async fn refresh_token(&self) -> Result<Option<String>> {
        (**self).refresh_token().await
    }
    async fn clear_tokens(&self) -> Result<()> {
        (**self).clear_tokens().await
    }
    fn name(&self) -> &str {
        (**self).name()
    }
}
