// ABOUTME: Library side of the workwx tool: payload decoding and refresh schedule reports.
// ABOUTME: main.rs only parses arguments and sets up logging before calling in here.

pub mod config;
pub mod error;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tracing::{debug, info};
use workwx_rx::ResolvedMessage;

use crate::config::Config;
use crate::error::{CliError, Result};

/// Input name that stands for standard input.
pub const STDIN: &str = "-";

/// Resolve one payload and render it on a single line.
pub fn render_payload(input: &str, payload: &[u8]) -> Result<String> {
    let message = ResolvedMessage::from_envelope(payload).map_err(|source| CliError::Decode {
        input: input.to_string(),
        source,
    })?;
    debug!(input = %input, variant = message.variant_name(), "Decoded payload");
    Ok(message.to_string())
}

/// Decode each input in order and write one line per message to `out`.
/// Reads standard input when `inputs` is empty. Stops at the first failure.
pub async fn decode<W: Write>(inputs: &[PathBuf], out: &mut W) -> Result<usize> {
    let stdin = [PathBuf::from(STDIN)];
    let inputs = if inputs.is_empty() { &stdin[..] } else { inputs };

    for input in inputs {
        let name = input.display().to_string();
        let payload = read_input(input).await?;
        let line = render_payload(&name, &payload)?;
        writeln!(out, "{line}")?;
    }
    Ok(inputs.len())
}

async fn read_input(input: &Path) -> Result<Vec<u8>> {
    let name = input.display().to_string();
    if name == STDIN {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .map_err(|source| CliError::Read {
                input: "stdin".into(),
                source,
            })?;
        return Ok(buf);
    }
    tokio::fs::read(input)
        .await
        .map_err(|source| CliError::Read {
            input: name,
            source,
        })
}

/// Write the refresh delay the configured policy computes for a token
/// fetched now with the given lifetime.
pub fn schedule<W: Write>(config: &Config, ttl_secs: u64, out: &mut W) -> Result<Duration> {
    let policy = &config.token;
    let delay = policy.delay_for_fresh_token(Duration::from_secs(ttl_secs));

    if let Some(app) = &config.app {
        let identity = app.identity();
        writeln!(out, "app: {} (agent {})", identity.corp_id, identity.agent_id)?;
    }
    writeln!(
        out,
        "refresh window: {}s, minimum interval: {}s",
        policy.refresh_window_secs, policy.min_refresh_interval_secs
    )?;
    writeln!(
        out,
        "ttl {}s: next refresh in {}s",
        ttl_secs,
        delay.as_secs()
    )?;

    info!(ttl_secs, delay_secs = delay.as_secs(), "Computed refresh delay");
    Ok(delay)
}
