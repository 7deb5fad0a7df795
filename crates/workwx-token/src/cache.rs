// ABOUTME: TokenCache, a read-through credential cache with a cancellable background refresher.
// ABOUTME: Either manages its own token (fetch on first use, refresh before expiry) or delegates to an external source.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::backoff::ExponentialBackoff;
use crate::error::{Result, TokenError};
use crate::kind::TokenKind;
use crate::policy::RefreshPolicy;
use crate::source::{ExternalTokenSource, TokenRefresher};
use crate::value::TokenValue;

/// A committed credential together with the moment it was stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSnapshot {
    pub value: TokenValue,
    pub refreshed_at: Instant,
}

/// State for a cache that fetches and refreshes its own credential.
struct Managed {
    refresher: Arc<dyn TokenRefresher>,
    /// Token and refresh time, always written together.
    state: RwLock<Option<TokenSnapshot>>,
    /// Serializes fetches on a cold cache.
    fill: Mutex<()>,
    refresher_running: Arc<AtomicBool>,
}

/// Marks a refresher as running until dropped, however its future ends.
struct RefresherClaim(Arc<AtomicBool>);

impl Drop for RefresherClaim {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

enum Mode {
    Managed(Managed),
    External(Arc<dyn ExternalTokenSource>),
}

/// Cache for one credential kind of one app.
///
/// [`get`](Self::get) only touches the network on a cold cache. Keeping the
/// credential fresh is the job of the background refresher started with
/// [`spawn_refresher`](Self::spawn_refresher), which must be given a
/// cancellation token; a refresher whose token is never cancelled runs for
/// the rest of the process.
pub struct TokenCache {
    kind: TokenKind,
    policy: RefreshPolicy,
    mode: Mode,
}

impl TokenCache {
    /// Create a cache that fetches its credential through `refresher`.
    pub fn new(kind: TokenKind, refresher: Arc<dyn TokenRefresher>) -> Self {
        Self {
            kind,
            policy: RefreshPolicy::default(),
            mode: Mode::Managed(Managed {
                refresher,
                state: RwLock::new(None),
                fill: Mutex::new(()),
                refresher_running: Arc::new(AtomicBool::new(false)),
            }),
        }
    }

    /// Create a cache that forwards every lookup to `source`.
    pub fn external(kind: TokenKind, source: Arc<dyn ExternalTokenSource>) -> Self {
        Self {
            kind,
            policy: RefreshPolicy::default(),
            mode: Mode::External(source),
        }
    }

    /// Hand the credential over to `source`. Any refresher this cache was
    /// built with is dropped and never called.
    pub fn with_external_source(mut self, source: Arc<dyn ExternalTokenSource>) -> Self {
        self.mode = Mode::External(source);
        self
    }

    pub fn with_policy(mut self, policy: RefreshPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn policy(&self) -> &RefreshPolicy {
        &self.policy
    }

    pub fn uses_external_source(&self) -> bool {
        matches!(self.mode, Mode::External(_))
    }

    /// Return the current credential.
    ///
    /// With an external source this is a straight pass-through. Otherwise
    /// the cached token is returned without an expiry check; only a cold
    /// cache fetches, and concurrent cold callers share a single fetch. A
    /// failed fetch caches nothing, so the next call tries again.
    pub async fn get(&self) -> Result<String> {
        let managed = match &self.mode {
            Mode::External(source) => {
                return source
                    .get_token()
                    .await
                    .map_err(|source| TokenError::ExternalSource {
                        kind: self.kind,
                        source,
                    });
            }
            Mode::Managed(managed) => managed,
        };

        if let Some(token) = managed.cached_token().await {
            return Ok(token);
        }

        let _fill = managed.fill.lock().await;
        if let Some(token) = managed.cached_token().await {
            debug!(kind = %self.kind, "Token filled by a concurrent caller");
            return Ok(token);
        }

        debug!(kind = %self.kind, "No cached token, fetching");
        let snapshot = self.sync_token(managed).await?;
        Ok(snapshot.value.into_token())
    }

    /// The committed token and its refresh time, if one has been fetched.
    /// Always `None` with an external source.
    pub async fn snapshot(&self) -> Option<TokenSnapshot> {
        match &self.mode {
            Mode::Managed(managed) => managed
                .state
                .read()
                .await
                .clone()
                .filter(|snapshot| !snapshot.value.is_empty()),
            Mode::External(_) => None,
        }
    }

    /// Start the background refresher on the current tokio runtime.
    ///
    /// Returns `None` without spawning anything when the cache uses an
    /// external source or a refresher is already running, so it is safe to
    /// call unconditionally. The task refreshes immediately, then again
    /// shortly before each token expires, and exits once `cancel` fires.
    pub fn spawn_refresher(self: &Arc<Self>, cancel: CancellationToken) -> Option<JoinHandle<()>> {
        let claim = self.claim_refresher()?;
        let cache = Arc::clone(self);
        Some(tokio::spawn(async move {
            let _claim = claim;
            cache.refresh_loop(cancel).await;
        }))
    }

    /// Run the refresher on the calling task until `cancel` fires.
    ///
    /// Returns immediately under the same conditions in which
    /// [`spawn_refresher`](Self::spawn_refresher) spawns nothing.
    pub async fn run_refresher(&self, cancel: CancellationToken) {
        if let Some(_claim) = self.claim_refresher() {
            self.refresh_loop(cancel).await;
        }
    }

    /// The refresher counts as running for as long as the returned claim
    /// lives. Dropping it, by normal exit, abort or panic, releases it.
    fn claim_refresher(&self) -> Option<RefresherClaim> {
        let managed = match &self.mode {
            Mode::External(_) => {
                debug!(kind = %self.kind, "External token source configured, not starting refresher");
                return None;
            }
            Mode::Managed(managed) => managed,
        };

        if managed.refresher_running.swap(true, Ordering::SeqCst) {
            debug!(kind = %self.kind, "Refresher already running");
            return None;
        }
        Some(RefresherClaim(Arc::clone(&managed.refresher_running)))
    }

    async fn refresh_loop(&self, cancel: CancellationToken) {
        let Mode::Managed(managed) = &self.mode else {
            return;
        };

        info!(kind = %self.kind, "Token refresher started");

        let mut wait = Duration::ZERO;
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(wait) => {}
            }

            if !self.refresh_with_backoff(managed, &cancel).await {
                break;
            }

            wait = match managed.state.read().await.as_ref() {
                Some(snapshot) => self.policy.next_wake_delay(
                    snapshot.refreshed_at,
                    snapshot.value.ttl(),
                    Instant::now(),
                ),
                None => self.policy.min_refresh_interval(),
            };
            debug!(kind = %self.kind, wait_secs = wait.as_secs(), "Next token refresh scheduled");
        }

        info!(kind = %self.kind, "Token refresher stopped");
    }

    /// Retry the refresh until it succeeds (`true`) or `cancel` fires
    /// (`false`). An abandoned attempt commits nothing.
    async fn refresh_with_backoff(&self, managed: &Managed, cancel: &CancellationToken) -> bool {
        let mut backoff = ExponentialBackoff::new(self.policy.backoff.clone());
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => return false,
                result = self.sync_token(managed) => result,
            };

            match result {
                Ok(_) => {
                    if attempt > 1 {
                        info!(kind = %self.kind, attempts = attempt, "Token refresh recovered");
                    }
                    return true;
                }
                Err(e) => {
                    let delay = backoff.next_delay();
                    warn!(
                        kind = %self.kind,
                        attempt,
                        retry_in_ms = delay.as_millis() as u64,
                        error = %e,
                        "Token refresh failed"
                    );
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => return false,
                        _ = tokio::time::sleep(delay) => {}
                    }
                }
            }
        }
    }

    /// Fetch a fresh credential and commit it. The network call runs
    /// without holding the state lock.
    async fn sync_token(&self, managed: &Managed) -> Result<TokenSnapshot> {
        let value = managed
            .refresher
            .refresh()
            .await
            .map_err(|source| TokenError::CredentialFetch {
                kind: self.kind,
                source,
            })?;

        let snapshot = TokenSnapshot {
            value,
            refreshed_at: Instant::now(),
        };
        *managed.state.write().await = Some(snapshot.clone());

        debug!(
            kind = %self.kind,
            ttl_secs = snapshot.value.ttl().as_secs(),
            "Token committed"
        );
        Ok(snapshot)
    }
}

impl Managed {
    async fn cached_token(&self) -> Option<String> {
        self.state
            .read()
            .await
            .as_ref()
            .filter(|snapshot| !snapshot.value.is_empty())
            .map(|snapshot| snapshot.value.token().to_string())
    }
}

impl std::fmt::Debug for TokenCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCache")
            .field("kind", &self.kind)
            .field("external", &self.uses_external_source())
            .field("policy", &self.policy)
            .finish()
    }
}
