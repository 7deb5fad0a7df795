// ABOUTME: ResolvedMessage, one decoded callback with its header fields and typed payload.
// ABOUTME: Exactly one try-get accessor returns Some, matching the payload's discriminants.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::{DecodeFailure, Result, RxError};
use crate::extras::*;
use crate::header::CommonHeader;
use crate::kinds::{ChangeType, EventType, MessageType};

/// A decoded callback message.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMessage {
    to_user_name: String,
    sender_id: String,
    send_time: DateTime<Utc>,
    kind: MessageType,
    message_id: i64,
    app_id: i64,
    event_kind: Option<EventType>,
    change_kind: Option<ChangeType>,
    extras: Extras,
}

macro_rules! variant_accessor {
    ($(#[$meta:meta])* $method:ident, $variant:ident, $ty:ty) => {
        $(#[$meta])*
        pub fn $method(&self) -> Option<&$ty> {
            match &self.extras {
                Extras::$variant(v) => Some(v),
                _ => None,
            }
        }
    };
}

impl ResolvedMessage {
    /// Decode a decrypted callback payload. Same as [`crate::resolve`].
    pub fn from_envelope(payload: &[u8]) -> Result<Self> {
        crate::dispatch::resolve(payload)
    }

    pub(crate) fn assemble(header: CommonHeader, kind: MessageType, extras: Extras) -> Result<Self> {
        let send_time = DateTime::from_timestamp(header.create_time, 0)
            .ok_or_else(|| {
                RxError::decode(
                    "create time",
                    DecodeFailure::TimestampOutOfRange(header.create_time),
                )
            })?;

        // Event and ChangeType only mean something on event payloads.
        let is_event = kind == MessageType::Event;
        let event = header.event.trim();
        let event_kind = (is_event && !event.is_empty()).then(|| EventType::from_wire(event));
        let change = header.change_type.trim();
        let change_kind = (is_event && !change.is_empty()).then(|| ChangeType::from_wire(change));

        Ok(Self {
            to_user_name: header.to_user_name,
            sender_id: header.from_user_name,
            send_time,
            kind,
            message_id: header.msg_id,
            app_id: header.agent_id,
            event_kind,
            change_kind,
            extras,
        })
    }

    /// The receiving corp id.
    pub fn to_user_name(&self) -> &str {
        &self.to_user_name
    }

    /// UserID of the sender. `sys` for system events.
    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }

    pub fn send_time(&self) -> DateTime<Utc> {
        self.send_time
    }

    pub fn kind(&self) -> MessageType {
        self.kind
    }

    /// Zero when the payload carries no `MsgId`, as for most events.
    pub fn message_id(&self) -> i64 {
        self.message_id
    }

    /// The `AgentID` of the receiving app, zero when absent.
    pub fn app_id(&self) -> i64 {
        self.app_id
    }

    /// `Event` of an event payload. `None` for ordinary messages.
    pub fn event_kind(&self) -> Option<&EventType> {
        self.event_kind.as_ref()
    }

    /// `ChangeType` of an event payload. `None` for ordinary messages.
    pub fn change_kind(&self) -> Option<&ChangeType> {
        self.change_kind.as_ref()
    }

    /// Name of the decoded variant, e.g. `text` or `del_follow_user`.
    pub fn variant_name(&self) -> &'static str {
        self.extras.name()
    }

    variant_accessor!(text, Text, TextMessage);
    variant_accessor!(image, Image, ImageMessage);
    variant_accessor!(voice, Voice, VoiceMessage);
    variant_accessor!(video, Video, VideoMessage);
    variant_accessor!(location, Location, LocationMessage);
    variant_accessor!(link, Link, LinkMessage);
    variant_accessor!(
        event_add_external_contact,
        AddExternalContact,
        AddExternalContactEvent
    );
    variant_accessor!(
        event_edit_external_contact,
        EditExternalContact,
        EditExternalContactEvent
    );
    variant_accessor!(
        event_del_external_contact,
        DelExternalContact,
        DelExternalContactEvent
    );
    variant_accessor!(event_del_follow_user, DelFollowUser, DelFollowUserEvent);
    variant_accessor!(
        event_add_half_external_contact,
        AddHalfExternalContact,
        AddHalfExternalContactEvent
    );
    variant_accessor!(event_transfer_fail, TransferFail, TransferFailEvent);
    variant_accessor!(
        event_change_external_chat,
        ChangeExternalChat,
        ChangeExternalChatEvent
    );
    variant_accessor!(
        event_sys_approval_change,
        SysApprovalChange,
        SysApprovalChangeEvent
    );
    variant_accessor!(event_create_user, CreateUser, CreateUserEvent);
    variant_accessor!(event_update_user, UpdateUser, UpdateUserEvent);
    variant_accessor!(event_app_menu_click, AppMenuClick, AppMenuClickEvent);
    variant_accessor!(event_app_menu_view, AppMenuView, AppMenuViewEvent);
    variant_accessor!(event_app_subscribe, AppSubscribe, AppSubscribeEvent);
    variant_accessor!(event_app_unsubscribe, AppUnsubscribe, AppUnsubscribeEvent);
    variant_accessor!(event_kf_msg_or_event, KfMsgOrEvent, KfMsgOrEvent);
    variant_accessor!(
        /// Events this crate does not model, with the full payload kept.
        event_unknown,
        UnknownEvent,
        UnknownEvent
    );
}

impl fmt::Display for ResolvedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RxMessage {{ FromUserID: {:?}, SendTime: {}, MsgType: {:?}, MsgID: {}, AgentID: {}, Event: {:?}, ChangeType: {:?}, {} }}",
            self.sender_id,
            self.send_time.to_rfc3339(),
            self.kind.as_str(),
            self.message_id,
            self.app_id,
            self.event_kind.as_ref().map(EventType::as_str).unwrap_or_default(),
            self.change_kind.as_ref().map(ChangeType::as_str).unwrap_or_default(),
            self.extras,
        )
    }
}
