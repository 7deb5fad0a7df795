// ABOUTME: Provider traits injected into token caches.
// ABOUTME: TokenRefresher fetches one credential, TokenFetcher fetches any kind, ExternalTokenSource overrides caching.

use std::future::Future;

use async_trait::async_trait;

use crate::error::BoxError;
use crate::kind::TokenKind;
use crate::value::TokenValue;

/// Fetches a fresh credential of one kind.
///
/// Called once on a cold cache and then periodically by the refresher, so
/// implementations must be safe to call repeatedly. Async closures returning
/// `Result<TokenValue, BoxError>` implement this trait directly.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    async fn refresh(&self) -> Result<TokenValue, BoxError>;
}

#[async_trait]
impl<F, Fut> TokenRefresher for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<TokenValue, BoxError>> + Send + 'static,
{
    async fn refresh(&self) -> Result<TokenValue, BoxError> {
        (self)().await
    }
}

/// Fetches any credential kind for one app identity.
///
/// This is the seam for the HTTP client: one implementation typically maps
/// each kind to its `gettoken` / `get_jsapi_ticket` endpoint.
#[async_trait]
pub trait TokenFetcher: Send + Sync {
    async fn fetch(&self, kind: TokenKind) -> Result<TokenValue, BoxError>;
}

/// Externally managed credentials, e.g. a central token service shared by
/// several processes.
///
/// When a cache is given an external source it stops caching and refreshing
/// and forwards every lookup here. An implementation only ever serves one
/// credential kind; wiring the wrong kind to a cache is the caller's mistake.
#[async_trait]
pub trait ExternalTokenSource: Send + Sync {
    /// May be called concurrently.
    async fn get_token(&self) -> Result<String, BoxError>;
}
