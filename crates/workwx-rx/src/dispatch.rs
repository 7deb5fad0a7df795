// ABOUTME: Two-pass resolution of a decrypted callback payload.
// ABOUTME: The common header selects a variant decoder, which then re-parses the same bytes.

use tracing::debug;

use crate::error::{Result, RxError};
use crate::extras::{Extras, UnknownEvent, UpdateUserEvent};
use crate::header::{decode_variant, CommonHeader};
use crate::kinds::{ChangeType, EventType, MessageType};
use crate::message::ResolvedMessage;

/// Resolve a decrypted callback payload into a typed message.
///
/// Unknown event types, and unknown change types of known contact events,
/// resolve to the unknown-event variant. Only an unknown top-level
/// `MsgType` is rejected.
///
/// Only the root element is read. Bytes after its closing tag are ignored,
/// so a payload with trailing garbage still resolves.
pub fn resolve(payload: &[u8]) -> Result<ResolvedMessage> {
    let xml = std::str::from_utf8(payload).map_err(|e| RxError::decode("utf-8", e))?;
    let header = CommonHeader::parse(xml)?;

    let kind = MessageType::from_wire(header.msg_type.trim())
        .ok_or_else(|| RxError::UnrecognizedKind(header.msg_type.clone()))?;
    let extras = extract_extras(kind, &header, xml)?;

    debug!(
        msg_type = %kind,
        event = %header.event,
        change_type = %header.change_type,
        variant = extras.name(),
        "Resolved callback payload"
    );

    ResolvedMessage::assemble(header, kind, extras)
}

fn extract_extras(kind: MessageType, header: &CommonHeader, xml: &str) -> Result<Extras> {
    let extras = match kind {
        MessageType::Text => Extras::Text(decode_variant(xml, "text message")?),
        MessageType::Image => Extras::Image(decode_variant(xml, "image message")?),
        MessageType::Voice => Extras::Voice(decode_variant(xml, "voice message")?),
        MessageType::Video => Extras::Video(decode_variant(xml, "video message")?),
        MessageType::Location => Extras::Location(decode_variant(xml, "location message")?),
        MessageType::Link => Extras::Link(decode_variant(xml, "link message")?),
        MessageType::Event => extract_event(header, xml)?,
    };
    Ok(extras)
}

fn extract_event(header: &CommonHeader, xml: &str) -> Result<Extras> {
    let event = EventType::from_wire(header.event.trim());
    let change = ChangeType::from_wire(header.change_type.trim());

    let extras = match (&event, &change) {
        (EventType::SysApprovalChange, _) => {
            Extras::SysApprovalChange(decode_variant(xml, "sys_approval_change event")?)
        }

        (EventType::ChangeExternalContact, ChangeType::AddExternalContact) => {
            Extras::AddExternalContact(decode_variant(xml, "add_external_contact event")?)
        }
        (EventType::ChangeExternalContact, ChangeType::EditExternalContact) => {
            Extras::EditExternalContact(decode_variant(xml, "edit_external_contact event")?)
        }
        (EventType::ChangeExternalContact, ChangeType::DelExternalContact) => {
            Extras::DelExternalContact(decode_variant(xml, "del_external_contact event")?)
        }
        (EventType::ChangeExternalContact, ChangeType::DelFollowUser) => {
            Extras::DelFollowUser(decode_variant(xml, "del_follow_user event")?)
        }
        (EventType::ChangeExternalContact, ChangeType::AddHalfExternalContact) => {
            Extras::AddHalfExternalContact(decode_variant(
                xml,
                "add_half_external_contact event",
            )?)
        }
        (EventType::ChangeExternalContact, ChangeType::TransferFail) => {
            Extras::TransferFail(decode_variant(xml, "transfer_fail event")?)
        }

        // Member changes arrive under both contact event types.
        (
            EventType::ChangeExternalContact | EventType::ChangeContact,
            ChangeType::CreateUser,
        ) => Extras::CreateUser(decode_variant(xml, "create_user event")?),
        (
            EventType::ChangeExternalContact | EventType::ChangeContact,
            ChangeType::UpdateUser,
        ) => Extras::UpdateUser(UpdateUserEvent::decode(xml)?),

        (EventType::ChangeExternalChat, _) => {
            Extras::ChangeExternalChat(decode_variant(xml, "change_external_chat event")?)
        }

        (EventType::AppMenuClick, _) => Extras::AppMenuClick(decode_variant(xml, "click event")?),
        (EventType::AppMenuView, _) => Extras::AppMenuView(decode_variant(xml, "view event")?),
        (EventType::AppSubscribe, _) => {
            Extras::AppSubscribe(decode_variant(xml, "subscribe event")?)
        }
        (EventType::AppUnsubscribe, _) => {
            Extras::AppUnsubscribe(decode_variant(xml, "unsubscribe event")?)
        }
        (EventType::KfMsgOrEvent, _) => {
            Extras::KfMsgOrEvent(decode_variant(xml, "kf_msg_or_event event")?)
        }

        (EventType::ChangeExternalContact | EventType::ChangeContact, other) => {
            debug!(event = %event, change_type = %other, "Unhandled change type");
            Extras::UnknownEvent(UnknownEvent::new(event.as_str(), xml))
        }
        (EventType::Other(name), _) => Extras::UnknownEvent(UnknownEvent::new(name.as_str(), xml)),
    };
    Ok(extras)
}
