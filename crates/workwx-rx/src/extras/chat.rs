// ABOUTME: Payload shape for external group chat change events.

use std::fmt;

use serde::Deserialize;

use crate::de::lenient;

/// An external group chat was created, updated or dismissed. The action is
/// the event's change type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChangeExternalChatEvent {
    #[serde(rename = "ChatId", default)]
    chat_id: String,
    #[serde(rename = "ToUserName", default)]
    to_user_name: String,
    #[serde(rename = "FromUserName", default)]
    from_user_name: String,
    #[serde(rename = "FailReason", default)]
    fail_reason: String,
    #[serde(rename = "UpdateDetail", default)]
    update_detail: String,
    #[serde(rename = "JoinScene", default, deserialize_with = "lenient")]
    join_scene: i32,
    #[serde(rename = "QuitScene", default, deserialize_with = "lenient")]
    quit_scene: i32,
    #[serde(rename = "MemChangeCnt", default, deserialize_with = "lenient")]
    mem_change_cnt: i32,
}

impl ChangeExternalChatEvent {
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    pub fn to_user_name(&self) -> &str {
        &self.to_user_name
    }

    pub fn from_user_name(&self) -> &str {
        &self.from_user_name
    }

    pub fn fail_reason(&self) -> &str {
        &self.fail_reason
    }

    /// What changed on `update`, e.g. `add_member` or `change_name`.
    pub fn update_detail(&self) -> &str {
        &self.update_detail
    }

    pub fn join_scene(&self) -> i32 {
        self.join_scene
    }

    pub fn quit_scene(&self) -> i32 {
        self.quit_scene
    }

    pub fn member_change_count(&self) -> i32 {
        self.mem_change_cnt
    }
}

impl fmt::Display for ChangeExternalChatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChatID: {:?}, ToUserName: {:?}, FromUserName: {:?}, FailReason: {:?}",
            self.chat_id, self.to_user_name, self.from_user_name, self.fail_reason
        )
    }
}
