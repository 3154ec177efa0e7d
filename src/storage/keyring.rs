//! OS keyring token store.
//!
//! Backed by the platform's encrypted secret storage: Keychain on Apple
//! platforms, the secret service on Linux, Credential Manager on
//! Windows. Bearer tokens never touch unencrypted persistence.

use async_trait::async_trait;
use keyring::Entry;
use tracing::debug;

use super::{TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use crate::error::{Error, Result};

/// Default keyring service name.
pub const DEFAULT_SERVICE: &str = "tov-gateway";

/// Token store backed by the system keyring.
///
/// Keyring calls are blocking and run on the blocking thread pool. The
/// two tokens live under the fixed keys `auth.accessToken` and
/// `auth.refreshToken` within the service.
pub struct KeyringTokenStore {
    service: String,
}

impl KeyringTokenStore {
    /// Create a store under the default service name.
    pub fn new() -> Self {
        Self {
            service: DEFAULT_SERVICE.to_string(),
        }
    }

    /// Use a custom keyring service name.
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// The keyring service name in use.
    pub fn service(&self) -> &str {
        &self.service
    }

    async fn read(&self, key: &'static str) -> Result<Option<String>> {
        let service = self.service.clone();
        tokio::task::spawn_blocking(move || {
            let entry =
                Entry::new(&service, key).map_err(|e| Error::StorageRead(e.to_string()))?;
            match entry.get_password() {
                Ok(value) => Ok(Some(value)),
                Err(keyring::Error::NoEntry) => Ok(None),
                Err(e) => Err(Error::StorageRead(e.to_string())),
            }
        })
        .await
        .map_err(|e| Error::StorageRead(e.to_string()))?
    }
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for KeyringTokenStore {
    async fn set_tokens(&self, access: &str, refresh: Option<&str>) -> Result<()> {
        let service = self.service.clone();
        let access = access.to_string();
        let refresh = refresh.map(str::to_string);

        tokio::task::spawn_blocking(move || {
            let entry = Entry::new(&service, ACCESS_TOKEN_KEY)
                .map_err(|e| Error::StorageWrite(e.to_string()))?;
            entry
                .set_password(&access)
                .map_err(|e| Error::StorageWrite(e.to_string()))?;

            if let Some(refresh) = refresh {
                let entry = Entry::new(&service, REFRESH_TOKEN_KEY)
                    .map_err(|e| Error::StorageWrite(e.to_string()))?;
                entry
                    .set_password(&refresh)
                    .map_err(|e| Error::StorageWrite(e.to_string()))?;
            }

            Ok(())
        })
        .await
        .map_err(|e| Error::StorageWrite(e.to_string()))??;

        debug!(service = %self.service, "tokens saved");
        Ok(())
    }

    async fn access_token(&self) -> Result<Option<String>> {
        self.read(ACCESS_TOKEN_KEY).await
    }

    async fn refresh_token(&self) -> Result<Option<String>> {
        self.read(REFRESH_TOKEN_KEY).await
    }

    async fn clear_tokens(&self) -> Result<()> {
        let service = self.service.clone();

        tokio::task::spawn_blocking(move || {
            for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
                let entry =
                    Entry::new(&service, key).map_err(|e| Error::StorageClear(e.to_string()))?;
                match entry.delete_credential() {
                    Ok(()) | Err(keyring::Error::NoEntry) => {}
                    Err(e) => return Err(Error::StorageClear(e.to_string())),
                }
            }
            Ok(())
        })
        .await
        .map_err(|e| Error::StorageClear(e.to_string()))??;

        debug!(service = %self.service, "tokens cleared");
        Ok(())
    }

    fn name(&self) -> &str {
        "keyring"
    }
}

impl std::fmt::Debug for KeyringTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyringTokenStore")
            .field("service", &self.service)
            .finish()
    }
}
