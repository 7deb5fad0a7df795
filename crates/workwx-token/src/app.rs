// ABOUTME: AppTokens, the per-app bundle of credential caches.
// ABOUTME: Builds one TokenCache per TokenKind from a shared fetcher, with optional external sources.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::cache::TokenCache;
use crate::error::{BoxError, Result};
use crate::kind::TokenKind;
use crate::policy::RefreshPolicy;
use crate::source::{ExternalTokenSource, TokenFetcher, TokenRefresher};
use crate::value::TokenValue;

/// Which app the credentials belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub corp_id: String,
    pub agent_id: i64,
}

impl AppIdentity {
    pub fn new(corp_id: impl Into<String>, agent_id: i64) -> Self {
        Self {
            corp_id: corp_id.into(),
            agent_id,
        }
    }
}

/// Adapts a multi-kind fetcher to the single-kind refresher a cache expects.
struct KindRefresher {
    kind: TokenKind,
    fetcher: Arc<dyn TokenFetcher>,
}

#[async_trait]
impl TokenRefresher for KindRefresher {
    async fn refresh(&self) -> std::result::Result<TokenValue, BoxError> {
        self.fetcher.fetch(self.kind).await
    }
}

/// Builder for [`AppTokens`].
pub struct AppTokensBuilder {
    identity: AppIdentity,
    fetcher: Arc<dyn TokenFetcher>,
    policy: RefreshPolicy,
    external: HashMap<TokenKind, Arc<dyn ExternalTokenSource>>,
}

impl AppTokensBuilder {
    /// Refresh policy shared by all managed caches.
    pub fn policy(mut self, policy: RefreshPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Serve `kind` from `source` instead of caching it locally.
    pub fn external_source(mut self, kind: TokenKind, source: Arc<dyn ExternalTokenSource>) -> Self {
        self.external.insert(kind, source);
        self
    }

    pub fn build(mut self) -> AppTokens {
        AppTokens {
            access_token: self.cache_for(TokenKind::AccessToken),
            jsapi_ticket: self.cache_for(TokenKind::JsapiTicket),
            jsapi_ticket_agent_config: self.cache_for(TokenKind::JsapiTicketAgentConfig),
            identity: self.identity,
        }
    }

    fn cache_for(&mut self, kind: TokenKind) -> Arc<TokenCache> {
        let cache = match self.external.remove(&kind) {
            Some(source) => TokenCache::external(kind, source),
            None => TokenCache::new(
                kind,
                Arc::new(KindRefresher {
                    kind,
                    fetcher: Arc::clone(&self.fetcher),
                }),
            )
            .with_policy(self.policy.clone()),
        };
        Arc::new(cache)
    }
}

/// All credential caches of one app identity.
#[derive(Debug)]
pub struct AppTokens {
    identity: AppIdentity,
    access_token: Arc<TokenCache>,
    jsapi_ticket: Arc<TokenCache>,
    jsapi_ticket_agent_config: Arc<TokenCache>,
}

impl AppTokens {
    pub fn builder(identity: AppIdentity, fetcher: Arc<dyn TokenFetcher>) -> AppTokensBuilder {
        AppTokensBuilder {
            identity,
            fetcher,
            policy: RefreshPolicy::default(),
            external: HashMap::new(),
        }
    }

    pub fn identity(&self) -> &AppIdentity {
        &self.identity
    }

    pub fn cache(&self, kind: TokenKind) -> &Arc<TokenCache> {
        match kind {
            TokenKind::AccessToken => &self.access_token,
            TokenKind::JsapiTicket => &self.jsapi_ticket,
            TokenKind::JsapiTicketAgentConfig => &self.jsapi_ticket_agent_config,
        }
    }

    pub async fn access_token(&self) -> Result<String> {
        self.cache(TokenKind::AccessToken).get().await
    }

    pub async fn jsapi_ticket(&self) -> Result<String> {
        self.cache(TokenKind::JsapiTicket).get().await
    }

    pub async fn jsapi_ticket_agent_config(&self) -> Result<String> {
        self.cache(TokenKind::JsapiTicketAgentConfig).get().await
    }

    /// Start the refresher for one kind. `None` if the kind is served by an
    /// external source or already being refreshed.
    pub fn spawn_refresher(
        &self,
        kind: TokenKind,
        cancel: CancellationToken,
    ) -> Option<JoinHandle<()>> {
        self.cache(kind).spawn_refresher(cancel)
    }

    /// Start refreshers for every locally managed kind. Each gets a child of
    /// `cancel`, so cancelling it stops them all.
    pub fn spawn_refreshers(&self, cancel: &CancellationToken) -> Vec<JoinHandle<()>> {
        let handles: Vec<_> = TokenKind::ALL
            .iter()
            .filter_map(|kind| self.spawn_refresher(*kind, cancel.child_token()))
            .collect();
        info!(
            corp_id = %self.identity.corp_id,
            agent_id = self.identity.agent_id,
            refreshers = handles.len(),
            "Token refreshers spawned"
        );
        handles
    }
}
