// ABOUTME: Typed decoding of decrypted WeCom callback payloads.
// ABOUTME: resolve() turns payload bytes into a ResolvedMessage with one typed variant.

mod de;
mod dispatch;
pub mod error;
pub mod extras;
mod header;
pub mod kinds;
mod message;

pub use dispatch::resolve;
pub use error::{DecodeFailure, Result, RxError};
pub use extras::{
    AddExternalContactEvent, AddHalfExternalContactEvent, AppMenuClickEvent, AppMenuViewEvent,
    AppSubscribeEvent, AppUnsubscribeEvent, ApprovalInfo, ChangeExternalChatEvent,
    CreateUserEvent, DelExternalContactEvent, DelFollowUserEvent, EditExternalContactEvent,
    ImageMessage, KfMsgOrEvent, LinkMessage, LocationMessage, SysApprovalChangeEvent,
    TextMessage, TransferFailEvent, UnknownEvent, UpdateUserEvent, UserProfile, VideoMessage,
    VoiceMessage,
};
pub use kinds::{ChangeType, EventType, MessageType};
pub use message::ResolvedMessage;
