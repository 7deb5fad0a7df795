// ABOUTME: TokenValue, an immutable credential string plus its declared lifetime.
// ABOUTME: An empty token means the credential has not been fetched yet.

use std::fmt;
use std::time::Duration;

/// A fetched credential and the validity window the server declared for it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenValue {
    token: String,
    ttl: Duration,
}

impl TokenValue {
    pub fn new(token: impl Into<String>, ttl: Duration) -> Self {
        Self {
            token: token.into(),
            ttl,
        }
    }

    /// Build from the wire shape, where `expires_in` is whole seconds.
    /// Negative lifetimes clamp to zero.
    pub fn from_secs(token: impl Into<String>, expires_in_secs: i64) -> Self {
        Self::new(token, Duration::from_secs(expires_in_secs.max(0) as u64))
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// True for the zero value, i.e. nothing fetched yet.
    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }

    pub fn into_token(self) -> String {
        self.token
    }
}

impl fmt::Debug for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenValue")
            .field("token", &if self.is_empty() { "" } else { "[REDACTED]" })
            .field("ttl", &self.ttl)
            .finish()
    }
}
