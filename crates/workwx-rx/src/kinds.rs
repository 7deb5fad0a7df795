// ABOUTME: Discriminants carried by callback payloads: MsgType, Event and ChangeType.
// ABOUTME: MsgType is a closed set; Event and ChangeType keep unknown wire values verbatim.

use std::fmt;

/// Top-level `MsgType` of a callback payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    Text,
    Image,
    Voice,
    Video,
    Location,
    Link,
    Event,
}

impl MessageType {
    /// Parse the wire value. `None` for types this crate does not model.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "text" => Some(MessageType::Text),
            "image" => Some(MessageType::Image),
            "voice" => Some(MessageType::Voice),
            "video" => Some(MessageType::Video),
            "location" => Some(MessageType::Location),
            "link" => Some(MessageType::Link),
            "event" => Some(MessageType::Event),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Text => "text",
            MessageType::Image => "image",
            MessageType::Voice => "voice",
            MessageType::Video => "video",
            MessageType::Location => "location",
            MessageType::Link => "link",
            MessageType::Event => "event",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Event` of an event payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Approval request changed state.
    SysApprovalChange,
    /// External contact added, edited, removed or transferred.
    ChangeExternalContact,
    /// External group chat changed.
    ChangeExternalChat,
    /// Member directory changed.
    ChangeContact,
    /// App menu item clicked.
    AppMenuClick,
    /// App menu link opened.
    AppMenuView,
    AppSubscribe,
    AppUnsubscribe,
    /// Customer service message or event waiting to be pulled.
    KfMsgOrEvent,
    /// Anything else, kept as sent.
    Other(String),
}

impl EventType {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "sys_approval_change" => EventType::SysApprovalChange,
            "change_external_contact" => EventType::ChangeExternalContact,
            "change_external_chat" => EventType::ChangeExternalChat,
            "change_contact" => EventType::ChangeContact,
            "click" => EventType::AppMenuClick,
            "view" => EventType::AppMenuView,
            "subscribe" => EventType::AppSubscribe,
            "unsubscribe" => EventType::AppUnsubscribe,
            "kf_msg_or_event" => EventType::KfMsgOrEvent,
            other => EventType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventType::SysApprovalChange => "sys_approval_change",
            EventType::ChangeExternalContact => "change_external_contact",
            EventType::ChangeExternalChat => "change_external_chat",
            EventType::ChangeContact => "change_contact",
            EventType::AppMenuClick => "click",
            EventType::AppMenuView => "view",
            EventType::AppSubscribe => "subscribe",
            EventType::AppUnsubscribe => "unsubscribe",
            EventType::KfMsgOrEvent => "kf_msg_or_event",
            EventType::Other(value) => value,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `ChangeType` of a contact change event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChangeType {
    AddExternalContact,
    EditExternalContact,
    DelExternalContact,
    DelFollowUser,
    AddHalfExternalContact,
    TransferFail,
    CreateUser,
    UpdateUser,
    /// Anything else, kept as sent. Group chat events use this for
    /// `create`/`update`/`dismiss`.
    Other(String),
}

impl ChangeType {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "add_external_contact" => ChangeType::AddExternalContact,
            "edit_external_contact" => ChangeType::EditExternalContact,
            "del_external_contact" => ChangeType::DelExternalContact,
            "del_follow_user" => ChangeType::DelFollowUser,
            "add_half_external_contact" => ChangeType::AddHalfExternalContact,
            "transfer_fail" => ChangeType::TransferFail,
            "create_user" => ChangeType::CreateUser,
            "update_user" => ChangeType::UpdateUser,
            other => ChangeType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChangeType::AddExternalContact => "add_external_contact",
            ChangeType::EditExternalContact => "edit_external_contact",
            ChangeType::DelExternalContact => "del_external_contact",
            ChangeType::DelFollowUser => "del_follow_user",
            ChangeType::AddHalfExternalContact => "add_half_external_contact",
            ChangeType::TransferFail => "transfer_fail",
            ChangeType::CreateUser => "create_user",
            ChangeType::UpdateUser => "update_user",
            ChangeType::Other(value) => value,
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_wire_values() {
        for kind in [
            MessageType::Text,
            MessageType::Image,
            MessageType::Voice,
            MessageType::Video,
            MessageType::Location,
            MessageType::Link,
            MessageType::Event,
        ] {
            assert_eq!(MessageType::from_wire(kind.as_str()), Some(kind));
        }
        assert_eq!(MessageType::from_wire("miniprogram_notice"), None);
        assert_eq!(MessageType::from_wire("TEXT"), None);
    }

    #[test]
    fn test_event_type_keeps_unknown_values() {
        assert_eq!(EventType::from_wire("click"), EventType::AppMenuClick);
        assert_eq!(
            EventType::from_wire("change_contact"),
            EventType::ChangeContact
        );

        let other = EventType::from_wire("enter_agent");
        assert_eq!(other, EventType::Other("enter_agent".to_string()));
        assert_eq!(other.to_string(), "enter_agent");
    }

    #[test]
    fn test_change_type_keeps_unknown_values() {
        assert_eq!(
            ChangeType::from_wire("del_follow_user"),
            ChangeType::DelFollowUser
        );
        assert_eq!(
            ChangeType::from_wire("dismiss"),
            ChangeType::Other("dismiss".to_string())
        );
        assert_eq!(ChangeType::UpdateUser.to_string(), "update_user");
    }
}
