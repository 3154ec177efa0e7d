//! Auth session resolution.
//!
//! On application start the stored access token is read once and a
//! tri-state status is derived for routing. The read is cancellable: if
//! the consumer goes away before it resolves, the derived status is
//! discarded instead of being committed.

use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::storage::TokenStore;

/// Application-wide authentication status derived from stored credentials.
///
/// Derived, never persisted; recomputed once per application start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Initial state while the stored credential is being read.
    #[default]
    Loading,
    /// A non-empty access token is present.
    LoggedIn,
    /// No access token, or the read failed.
    LoggedOut,
}

/// Resolve the session status from stored credentials.
///
/// Returns `None` when `cancel` fires before the result is committed;
/// the caller then observes no transition past [`AuthStatus::Loading`].
///
/// A storage read failure resolves to `LoggedOut` rather than surfacing
/// the error: a credential that cannot be read must not be treated as a
/// live session.
pub async fn resolve<S>(store: &S, cancel: &CancellationToken) -> Option<AuthStatus>
where
    S: TokenStore + ?Sized,
{
    let read = store.access_token().await;

    if cancel.is_cancelled() {
        return None;
    }

    Some(match read {
        Ok(Some(token)) if !token.is_empty() => AuthStatus::LoggedIn,
        Ok(_) => AuthStatus::LoggedOut,
        Err(e) => {
            warn!(error = %e, "token read failed, treating as logged out");
            AuthStatus::LoggedOut
        }
    })
}
