// ABOUTME: Credential kinds an app identity holds.
// ABOUTME: Used to route fetches and to label caches in logs and errors.

use std::fmt;

/// The kinds of short-lived credentials a WeCom app needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `access_token`, required by every API call.
    AccessToken,
    /// `jsapi_ticket` for signing JS-SDK pages.
    JsapiTicket,
    /// `jsapi_ticket` for the `agentConfig` JS-SDK call.
    JsapiTicketAgentConfig,
}

impl TokenKind {
    pub const ALL: [TokenKind; 3] = [
        TokenKind::AccessToken,
        TokenKind::JsapiTicket,
        TokenKind::JsapiTicketAgentConfig,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::AccessToken => "access_token",
            TokenKind::JsapiTicket => "jsapi_ticket",
            TokenKind::JsapiTicketAgentConfig => "jsapi_ticket_agent_config",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
