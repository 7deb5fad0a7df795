// ABOUTME: Variant payloads of a resolved callback message.
// ABOUTME: Extras is the closed union of every shape the resolver can produce.

mod app_events;
mod approval;
mod chat;
mod contact;
mod media;

use std::fmt;

pub use app_events::{
    AppMenuClickEvent, AppMenuViewEvent, AppSubscribeEvent, AppUnsubscribeEvent, KfMsgOrEvent,
};
pub use approval::{
    ApprovalComment, ApprovalInfo, ApprovalUser, Applyer, SpRecord, SpRecordDetail,
    SysApprovalChangeEvent,
};
pub use chat::ChangeExternalChatEvent;
pub use contact::{
    AddExternalContactEvent, AddHalfExternalContactEvent, CreateUserEvent,
    DelExternalContactEvent, DelFollowUserEvent, EditExternalContactEvent, ExtAttr, ExtAttrText,
    ExtAttrWeb, TransferFailEvent, UpdateUserEvent, UserProfile,
};
pub use media::{
    ImageMessage, LinkMessage, LocationMessage, TextMessage, VideoMessage, VoiceMessage,
};

/// An event whose type this crate does not model. Keeps the whole payload
/// so callers can decode it themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownEvent {
    event_type: String,
    raw: String,
}

impl UnknownEvent {
    pub(crate) fn new(event_type: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            raw: raw.into(),
        }
    }

    /// The `Event` value as sent.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// The complete decrypted payload.
    pub fn raw(&self) -> &[u8] {
        self.raw.as_bytes()
    }

    pub fn raw_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for UnknownEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event: {:?}, Raw: {:?}", self.event_type, self.raw)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Extras {
    Text(TextMessage),
    Image(ImageMessage),
    Voice(VoiceMessage),
    Video(VideoMessage),
    Location(LocationMessage),
    Link(LinkMessage),
    AddExternalContact(AddExternalContactEvent),
    EditExternalContact(EditExternalContactEvent),
    DelExternalContact(DelExternalContactEvent),
    DelFollowUser(DelFollowUserEvent),
    AddHalfExternalContact(AddHalfExternalContactEvent),
    TransferFail(TransferFailEvent),
    ChangeExternalChat(ChangeExternalChatEvent),
    SysApprovalChange(SysApprovalChangeEvent),
    CreateUser(CreateUserEvent),
    UpdateUser(UpdateUserEvent),
    AppMenuClick(AppMenuClickEvent),
    AppMenuView(AppMenuViewEvent),
    AppSubscribe(AppSubscribeEvent),
    AppUnsubscribe(AppUnsubscribeEvent),
    KfMsgOrEvent(KfMsgOrEvent),
    UnknownEvent(UnknownEvent),
}

impl Extras {
    /// Stable name of the variant, used in logs and display output.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Extras::Text(_) => "text",
            Extras::Image(_) => "image",
            Extras::Voice(_) => "voice",
            Extras::Video(_) => "video",
            Extras::Location(_) => "location",
            Extras::Link(_) => "link",
            Extras::AddExternalContact(_) => "add_external_contact",
            Extras::EditExternalContact(_) => "edit_external_contact",
            Extras::DelExternalContact(_) => "del_external_contact",
            Extras::DelFollowUser(_) => "del_follow_user",
            Extras::AddHalfExternalContact(_) => "add_half_external_contact",
            Extras::TransferFail(_) => "transfer_fail",
            Extras::ChangeExternalChat(_) => "change_external_chat",
            Extras::SysApprovalChange(_) => "sys_approval_change",
            Extras::CreateUser(_) => "create_user",
            Extras::UpdateUser(_) => "update_user",
            Extras::AppMenuClick(_) => "app_menu_click",
            Extras::AppMenuView(_) => "app_menu_view",
            Extras::AppSubscribe(_) => "app_subscribe",
            Extras::AppUnsubscribe(_) => "app_unsubscribe",
            Extras::KfMsgOrEvent(_) => "kf_msg_or_event",
            Extras::UnknownEvent(_) => "unknown_event",
        }
    }
}

impl fmt::Display for Extras {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extras::Text(v) => fmt::Display::fmt(v, f),
            Extras::Image(v) => fmt::Display::fmt(v, f),
            Extras::Voice(v) => fmt::Display::fmt(v, f),
            Extras::Video(v) => fmt::Display::fmt(v, f),
            Extras::Location(v) => fmt::Display::fmt(v, f),
            Extras::Link(v) => fmt::Display::fmt(v, f),
            Extras::AddExternalContact(v) => fmt::Display::fmt(v, f),
            Extras::EditExternalContact(v) => fmt::Display::fmt(v, f),
            Extras::DelExternalContact(v) => fmt::Display::fmt(v, f),
            Extras::DelFollowUser(v) => fmt::Display::fmt(v, f),
            Extras::AddHalfExternalContact(v) => fmt::Display::fmt(v, f),
            Extras::TransferFail(v) => fmt::Display::fmt(v, f),
            Extras::ChangeExternalChat(v) => fmt::Display::fmt(v, f),
            Extras::SysApprovalChange(v) => fmt::Display::fmt(v, f),
            Extras::CreateUser(v) => fmt::Display::fmt(v, f),
            Extras::UpdateUser(v) => fmt::Display::fmt(v, f),
            Extras::AppMenuClick(v) => fmt::Display::fmt(v, f),
            Extras::AppMenuView(v) => fmt::Display::fmt(v, f),
            Extras::AppSubscribe(v) => fmt::Display::fmt(v, f),
            Extras::AppUnsubscribe(v) => fmt::Display::fmt(v, f),
            Extras::KfMsgOrEvent(v) => fmt::Display::fmt(v, f),
            Extras::UnknownEvent(v) => fmt::Display::fmt(v, f),
        }
    }
}
