// ABOUTME: Payload shapes for contact change events.
// ABOUTME: Covers external contact changes and member create/update notifications.

use std::fmt;

use serde::Deserialize;

use crate::de::{lenient, split_numbers};
use crate::error::Result;
use crate::header::decode_variant;

/// A member added an external contact.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AddExternalContactEvent {
    #[serde(rename = "UserID", default)]
    user_id: String,
    #[serde(rename = "ExternalUserID", default)]
    external_user_id: String,
    #[serde(rename = "State", default)]
    state: String,
    #[serde(rename = "WelcomeCode", default)]
    welcome_code: String,
}

impl AddExternalContactEvent {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn external_user_id(&self) -> &str {
        &self.external_user_id
    }

    /// The `state` parameter of the contact-me link used, if any.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Code for sending a welcome message. Valid for 20 seconds.
    pub fn welcome_code(&self) -> &str {
        &self.welcome_code
    }
}

impl fmt::Display for AddExternalContactEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UserID: {:?}, ExternalUserID: {:?}, State: {:?}, WelcomeCode: {:?}",
            self.user_id, self.external_user_id, self.state, self.welcome_code
        )
    }
}

/// An external contact was added without verification and awaits acceptance.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AddHalfExternalContactEvent {
    #[serde(rename = "UserID", default)]
    user_id: String,
    #[serde(rename = "ExternalUserID", default)]
    external_user_id: String,
    #[serde(rename = "State", default)]
    state: String,
    #[serde(rename = "WelcomeCode", default)]
    welcome_code: String,
}

impl AddHalfExternalContactEvent {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn external_user_id(&self) -> &str {
        &self.external_user_id
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn welcome_code(&self) -> &str {
        &self.welcome_code
    }
}

impl fmt::Display for AddHalfExternalContactEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UserID: {:?}, ExternalUserID: {:?}, State: {:?}, WelcomeCode: {:?}",
            self.user_id, self.external_user_id, self.state, self.welcome_code
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EditExternalContactEvent {
    #[serde(rename = "UserID", default)]
    user_id: String,
    #[serde(rename = "ExternalUserID", default)]
    external_user_id: String,
    #[serde(rename = "State", default)]
    state: String,
}

impl EditExternalContactEvent {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn external_user_id(&self) -> &str {
        &self.external_user_id
    }

    pub fn state(&self) -> &str {
        &self.state
    }
}

impl fmt::Display for EditExternalContactEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UserID: {:?}, ExternalUserID: {:?}, State: {:?}",
            self.user_id, self.external_user_id, self.state
        )
    }
}

/// A member removed an external contact.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DelExternalContactEvent {
    #[serde(rename = "UserID", default)]
    user_id: String,
    #[serde(rename = "ExternalUserID", default)]
    external_user_id: String,
}

impl DelExternalContactEvent {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn external_user_id(&self) -> &str {
        &self.external_user_id
    }
}

impl fmt::Display for DelExternalContactEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UserID: {:?}, ExternalUserID: {:?}",
            self.user_id, self.external_user_id
        )
    }
}

/// An external contact removed the member.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DelFollowUserEvent {
    #[serde(rename = "UserID", default)]
    user_id: String,
    #[serde(rename = "ExternalUserID", default)]
    external_user_id: String,
}

impl DelFollowUserEvent {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn external_user_id(&self) -> &str {
        &self.external_user_id
    }
}

impl fmt::Display for DelFollowUserEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UserID: {:?}, ExternalUserID: {:?}",
            self.user_id, self.external_user_id
        )
    }
}

/// Handing an external contact over to another member failed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransferFailEvent {
    #[serde(rename = "UserID", default)]
    user_id: String,
    #[serde(rename = "ExternalUserID", default)]
    external_user_id: String,
    #[serde(rename = "FailReason", default)]
    fail_reason: String,
}

impl TransferFailEvent {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn external_user_id(&self) -> &str {
        &self.external_user_id
    }

    /// `customer_refused` or `customer_limit_exceed`.
    pub fn fail_reason(&self) -> &str {
        &self.fail_reason
    }
}

impl fmt::Display for TransferFailEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UserID: {:?}, ExternalUserID: {:?}, FailReason: {:?}",
            self.user_id, self.external_user_id, self.fail_reason
        )
    }
}

/// Custom profile attribute of a member.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExtAttr {
    #[serde(rename = "Name", default)]
    pub name: String,
    /// 0 for text, 1 for web link.
    #[serde(rename = "Type", default, deserialize_with = "lenient")]
    pub kind: i32,
    #[serde(rename = "Text", default)]
    pub text: Option<ExtAttrText>,
    #[serde(rename = "Web", default)]
    pub web: Option<ExtAttrWeb>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExtAttrText {
    #[serde(rename = "Value", default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExtAttrWeb {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Url", default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct ExtAttrList {
    #[serde(rename = "Item", default)]
    items: Vec<ExtAttr>,
}

/// Member profile fields carried by `create_user` and `update_user`.
/// Fields the change did not touch are empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "UserID", default)]
    user_id: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Department", default)]
    department: String,
    #[serde(rename = "MainDepartment", default, deserialize_with = "lenient")]
    main_department: i64,
    #[serde(rename = "IsLeaderInDept", default)]
    is_leader_in_dept: String,
    #[serde(rename = "DirectLeader", default)]
    direct_leader: String,
    #[serde(rename = "Position", default)]
    position: String,
    #[serde(rename = "Mobile", default)]
    mobile: String,
    #[serde(rename = "Gender", default, deserialize_with = "lenient")]
    gender: i32,
    #[serde(rename = "Email", default)]
    email: String,
    #[serde(rename = "BizMail", default)]
    biz_mail: String,
    #[serde(rename = "Status", default, deserialize_with = "lenient")]
    status: i32,
    #[serde(rename = "Avatar", default)]
    avatar: String,
    #[serde(rename = "Alias", default)]
    alias: String,
    #[serde(rename = "Telephone", default)]
    telephone: String,
    #[serde(rename = "Address", default)]
    address: String,
    #[serde(rename = "ExtAttr", default)]
    ext_attr: ExtAttrList,
}

impl UserProfile {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Department ids the member belongs to.
    pub fn departments(&self) -> Vec<i64> {
        split_numbers(&self.department)
    }

    pub fn main_department(&self) -> i64 {
        self.main_department
    }

    /// Leader flags aligned with [`departments`](Self::departments).
    pub fn is_leader_in_dept(&self) -> Vec<i32> {
        split_numbers(&self.is_leader_in_dept)
    }

    pub fn direct_leaders(&self) -> Vec<&str> {
        self.direct_leader
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    /// 1 for male, 2 for female, 0 when unset.
    pub fn gender(&self) -> i32 {
        self.gender
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn biz_mail(&self) -> &str {
        &self.biz_mail
    }

    /// 1 active, 2 disabled, 4 not yet activated.
    pub fn status(&self) -> i32 {
        self.status
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn telephone(&self) -> &str {
        &self.telephone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn ext_attrs(&self) -> &[ExtAttr] {
        &self.ext_attr.items
    }
}

#[derive(Debug, Default, Deserialize)]
struct RenamedUser {
    #[serde(rename = "NewUserID", default)]
    new_user_id: String,
}

/// A member was created in the directory.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CreateUserEvent {
    profile: UserProfile,
}

impl CreateUserEvent {
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }
}

impl fmt::Display for CreateUserEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CreateUser: UserID: {:?}, Name: {:?}",
            self.profile.user_id, self.profile.name
        )
    }
}

/// A member's profile changed. `new_user_id` is set when the id itself changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserEvent {
    profile: UserProfile,
    new_user_id: Option<String>,
}

impl UpdateUserEvent {
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn new_user_id(&self) -> Option<&str> {
        self.new_user_id.as_deref()
    }

    /// Decode the profile and the optional id change from the same payload.
    pub(crate) fn decode(xml: &str) -> Result<Self> {
        let profile: UserProfile = decode_variant(xml, "update_user event")?;
        let renamed: RenamedUser = decode_variant(xml, "update_user event")?;
        let new_user_id = Some(renamed.new_user_id.trim().to_string()).filter(|id| !id.is_empty());
        Ok(Self {
            profile,
            new_user_id,
        })
    }
}

impl fmt::Display for UpdateUserEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UpdateUser: UserID: {:?}, Name: {:?}",
            self.profile.user_id, self.profile.name
        )?;
        if let Some(id) = &self.new_user_id {
            write!(f, ", NewUserID: {id:?}")?;
        }
        Ok(())
    }
}
