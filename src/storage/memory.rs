//! In-memory token store for testing.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::TokenStore;
use crate::error::Result;

/// In-memory token store, primarily for testing.
#[derive(Default)]
pub struct MemoryTokenStore {
    slots: RwLock<Slots>,
}

#[derive(Default)]
struct Slots {
    access: Option<String>,
    refresh: Option<String>,
}

impl MemoryTokenStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with an access token.
    pub fn with_access_token(access: impl Into<String>) -> Self {
        Self {
            slots: RwLock::new(Slots {
                access: Some(access.into()),
                refresh: None,
            }),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn set_tokens(&self, access: &str, refresh: Option<&str>) -> Result<()> {
        let mut slots = self.slots.write().await;
        slots.access = Some(access.to_string());
        if let Some(refresh) = refresh {
            slots.refresh = Some(refresh.to_string());
        }
        Ok(())
    }

    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.slots.read().await.access.clone())
    }

    async fn refresh_token(&self) -> Result<Option<String>> {
        Ok(self.slots.read().await.refresh.clone())
    }

    async fn clear_tokens(&self) -> Result<()> {
        let mut slots = self.slots.write().await;
        slots.access = None;
        slots.refresh = None;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryTokenStore::new();

        assert!(store.access_token().await.unwrap().is_none());
        assert!(store.refresh_token().await.unwrap().is_none());

        store.set_tokens("acc", Some("ref")).await.unwrap();
        assert_eq!(store.access_token().await.unwrap().as_deref(), Some("acc"));
        assert_eq!(store.refresh_token().await.unwrap().as_deref(), Some("ref"));
    }

    #[tokio::test]
    async fn test_access_only_write_keeps_refresh() {
        let store = MemoryTokenStore::new();

        store.set_tokens("acc1", Some("ref1")).await.unwrap();
        store.set_tokens("acc2", None).await.unwrap();

        assert_eq!(store.access_token().await.unwrap().as_deref(), Some("acc2"));
        assert_eq!(
            store.refresh_token().await.unwrap().as_deref(),
            Some("ref1")
        );
    }

    #[tokio::test]
    async fn test_access_only_write_with_no_prior_refresh() {
        let store = MemoryTokenStore::new();

        store.set_tokens("acc", None).await.unwrap();
        assert!(store.refresh_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = MemoryTokenStore::new();

        store.set_tokens("acc", Some("ref")).await.unwrap();
        store.clear_tokens().await.unwrap();
        store.clear_tokens().await.unwrap();

        assert!(store.access_token().await.unwrap().is_none());
        assert!(store.refresh_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_with_access_token() {
        let store = MemoryTokenStore::with_access_token("abc");
        assert_eq!(store.access_token().await.unwrap().as_deref(), Some("abc"));
        assert!(store.refresh_token().await.unwrap().is_none());
    }
}
