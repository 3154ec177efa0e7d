//! Main client entry point.

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::{ApiConfig, Platform};
use crate::error::{Error, Result};
use crate::models::auth::{LoginCredentials, TokenPair};
use crate::models::user::UserProfile;
use crate::session::{self, AuthStatus};
use crate::storage::TokenStore;
use crate::transport::HttpClient;

/// User service client: login, profile, logout, and session status.
///
/// Generic over the token store so tests can use
/// [`MemoryTokenStore`](crate::storage::MemoryTokenStore) while
/// production code uses the keyring-backed store.
///
/// # Examples
///
/// ```rust,no_run
/// use tov_gateway::{AuthClient, LoginCredentials, Result};
///
/// # async fn example() -> Result<()> {
/// let client = AuthClient::builder().build()?;
///
/// client
///     .login(&LoginCredentials::email("user@example.com", "secret1"))
///     .await?;
///
/// let profile = client.profile().await?;
/// println!("hello, {}", profile.first_name);
/// # Ok(())
/// # }
/// ```
pub struct AuthClient<S: TokenStore> {
    http: HttpClient,
    store: S,
}

#[cfg(feature = "keyring")]
impl AuthClient<crate::storage::KeyringTokenStore> {
    /// Create a builder for configuring the client.
    pub fn builder() -> AuthClientBuilder {
        AuthClientBuilder::new()
    }
}

impl<S: TokenStore> AuthClient<S> {
    /// Log in and persist the returned tokens.
    ///
    /// The token write strictly follows a successful response, and a
    /// failed write is a hard error even though the network call
    /// succeeded: callers must not treat the session as established
    /// until this returns `Ok`.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<TokenPair> {
        let envelope = crate::api::auth::login(&self.http, credentials).await?;
        let tokens = envelope.data;

        self.store
            .set_tokens(&tokens.access_token, tokens.refresh_token.as_deref())
            .await?;

        info!(store = self.store.name(), "login succeeded, tokens persisted");
        Ok(tokens)
    }

    /// Fetch the authenticated user's profile.
    ///
    /// Reads the stored access token for the Authorization header;
    /// fails with [`Error::NotAuthenticated`] when none is stored.
    pub async fn profile(&self) -> Result<UserProfile> {
        let token = self
            .store
            .access_token()
            .await?
            .ok_or(Error::NotAuthenticated)?;

        let envelope = crate::api::users::me(&self.http, &token).await?;
        Ok(envelope.data)
    }

    /// Clear stored tokens, ending the session.
    pub async fn logout(&self) -> Result<()> {
        self.store.clear_tokens().await?;
        info!("logged out");
        Ok(())
    }

    /// Resolve the current session status from stored credentials.
    ///
    /// `None` means the resolution was cancelled before a status was
    /// committed; see [`session::resolve`].
    pub async fn auth_status(&self, cancel: &CancellationToken) -> Option<AuthStatus> {
        session::resolve(&self.store, cancel).await
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// The token store backend.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: TokenStore> std::fmt::Debug for AuthClient<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient")
            .field("http", &self.http)
            .field("store", &self.store.name())
            .finish()
    }
}

/// Builder for [`AuthClient`].
pub struct AuthClientBuilder {
    config: Option<ApiConfig>,
    platform: Option<Platform>,
    reqwest_client: Option<reqwest::Client>,
}

impl AuthClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            platform: None,
            reqwest_client: None,
        }
    }

    /// Use an explicit configuration instead of the environment.
    #[must_use]
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the platform reported in `x-platform`.
    #[must_use]
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Use a custom reqwest client (TLS config, timeouts).
    #[must_use]
    pub fn reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.reqwest_client = Some(client);
        self
    }

    /// Build the client with the given token store.
    ///
    /// Falls back to [`ApiConfig::from_env`] when no explicit config was
    /// provided; a missing base URL or API key fails here, before any
    /// network attempt.
    pub fn build_with_store<S: TokenStore>(self, store: S) -> Result<AuthClient<S>> {
        let mut config = match self.config {
            Some(config) => config,
            None => ApiConfig::from_env()?,
        };
        if let Some(platform) = self.platform {
            config = config.with_platform(platform);
        }

        let http = match self.reqwest_client {
            Some(client) => HttpClient::with_client(client, config),
            None => HttpClient::new(config),
        };

        info!(store = store.name(), "AuthClient initialized");
        Ok(AuthClient { http, store })
    }

    /// Build the client with the default keyring-backed store.
    #[cfg(feature = "keyring")]
    pub fn build(self) -> Result<AuthClient<crate::storage::KeyringTokenStore>> {
        self.build_with_store(crate::storage::KeyringTokenStore::new())
    }
}

impl Default for AuthClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
