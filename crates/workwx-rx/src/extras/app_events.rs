// ABOUTME: Payload shapes for app-level events: menu clicks, subscriptions and customer service pings.

use std::fmt;

use serde::Deserialize;

macro_rules! event_key_payload {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
        pub struct $name {
            #[serde(rename = "EventKey", default)]
            event_key: String,
        }

        impl $name {
            pub fn event_key(&self) -> &str {
                &self.event_key
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "EventKey: {:?}", self.event_key)
            }
        }
    };
}

event_key_payload!(
    /// A menu item was clicked. The key is the one configured on the item.
    AppMenuClickEvent
);

event_key_payload!(
    /// A menu link was opened. The key is the target URL.
    AppMenuViewEvent
);

event_key_payload!(AppSubscribeEvent);

event_key_payload!(AppUnsubscribeEvent);

/// New customer service messages or events are waiting to be pulled.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct KfMsgOrEvent {
    #[serde(rename = "OpenKfId", default)]
    open_kf_id: String,
    #[serde(rename = "Token", default)]
    token: String,
}

impl KfMsgOrEvent {
    /// Customer service account id.
    pub fn open_kf_id(&self) -> &str {
        &self.open_kf_id
    }

    /// Must be passed back when pulling the messages.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for KfMsgOrEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OpenKfID: {:?}, Token: {:?}",
            self.open_kf_id, self.token
        )
    }
}
