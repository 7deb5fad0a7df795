// ABOUTME: Error types for workwx-cli.
// ABOUTME: Covers config loading, unreadable inputs and payloads that fail to resolve.

use thiserror::Error;
use workwx_rx::RxError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read {input}: {source}")]
    Read {
        input: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {input}: {source}")]
    Decode {
        input: String,
        #[source]
        source: RxError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
