// ABOUTME: Library root for workwx-token.
// ABOUTME: Exports the token cache, its provider traits, refresh policy, and per-app token bundle.

pub mod app;
pub mod backoff;
pub mod cache;
pub mod error;
pub mod kind;
pub mod policy;
pub mod source;
pub mod value;

pub use app::{AppIdentity, AppTokens, AppTokensBuilder};
pub use backoff::{BackoffConfig, ExponentialBackoff};
pub use cache::{TokenCache, TokenSnapshot};
pub use error::{BoxError, Result, TokenError};
pub use kind::TokenKind;
pub use policy::RefreshPolicy;
pub use source::{ExternalTokenSource, TokenFetcher, TokenRefresher};
pub use value::TokenValue;

// Re-exported so callers can cancel refreshers without a direct dependency.
pub use tokio_util::sync::CancellationToken;
