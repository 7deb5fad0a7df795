// ABOUTME: Error types for workwx-token.
// ABOUTME: Separates failed credential fetches from failures of an external token source.

use thiserror::Error;

use crate::kind::TokenKind;

/// Error type returned by injected token providers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum TokenError {
    /// The cache's own refresh call failed. Nothing was cached.
    #[error("failed to fetch {kind}: {source}")]
    CredentialFetch {
        kind: TokenKind,
        #[source]
        source: BoxError,
    },

    /// The configured external token source failed.
    #[error("external source for {kind} failed: {source}")]
    ExternalSource {
        kind: TokenKind,
        #[source]
        source: BoxError,
    },
}

impl TokenError {
    /// Credential kind the failing call was made for.
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenError::CredentialFetch { kind, .. } | TokenError::ExternalSource { kind, .. } => {
                *kind
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TokenError>;
