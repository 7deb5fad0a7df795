// ABOUTME: Payload shape for approval state change notifications.
// ABOUTME: Mirrors the nested ApprovalInfo element as plain data structs.

use std::fmt;

use serde::Deserialize;

use crate::de::lenient;

/// An approval request changed state.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SysApprovalChangeEvent {
    #[serde(rename = "ApprovalInfo", default)]
    approval_info: ApprovalInfo,
}

impl SysApprovalChangeEvent {
    pub fn approval_info(&self) -> &ApprovalInfo {
        &self.approval_info
    }
}

impl fmt::Display for SysApprovalChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = &self.approval_info;
        write!(
            f,
            "ApprovalInfo: {{ SpNo: {:?}, SpName: {:?}, SpStatus: {}, Applyer: {:?} }}",
            info.sp_no, info.sp_name, info.sp_status, info.applyer.user_id
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApprovalInfo {
    /// Approval number.
    #[serde(rename = "SpNo", default)]
    pub sp_no: String,
    /// Template name.
    #[serde(rename = "SpName", default)]
    pub sp_name: String,
    /// 1 pending, 2 approved, 3 rejected, 4 withdrawn, 6 revoked after
    /// approval, 7 deleted, 10 paid.
    #[serde(rename = "SpStatus", default, deserialize_with = "lenient")]
    pub sp_status: i32,
    #[serde(rename = "TemplateId", default)]
    pub template_id: String,
    /// Unix seconds.
    #[serde(rename = "ApplyTime", default, deserialize_with = "lenient")]
    pub apply_time: i64,
    #[serde(rename = "Applyer", default)]
    pub applyer: Applyer,
    #[serde(rename = "SpRecord", default)]
    pub sp_records: Vec<SpRecord>,
    #[serde(rename = "Notifyer", default)]
    pub notifyers: Vec<ApprovalUser>,
    #[serde(rename = "Comments", default)]
    pub comments: Vec<ApprovalComment>,
    /// What triggered this notification: 1 submitted, 2 approved,
    /// 3 forwarded, 4 withdrawn, 5 rejected and so on.
    #[serde(rename = "StatuChangeEvent", default, deserialize_with = "lenient")]
    pub status_change_event: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Applyer {
    #[serde(rename = "UserId", default)]
    pub user_id: String,
    /// Department of the applicant.
    #[serde(rename = "Party", default)]
    pub party: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApprovalUser {
    #[serde(rename = "UserId", default)]
    pub user_id: String,
}

/// One approval step.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SpRecord {
    #[serde(rename = "SpStatus", default, deserialize_with = "lenient")]
    pub sp_status: i32,
    /// 1 any approver suffices, 2 all approvers must agree.
    #[serde(rename = "ApproverAttr", default, deserialize_with = "lenient")]
    pub approver_attr: i32,
    #[serde(rename = "Details", default)]
    pub details: Vec<SpRecordDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SpRecordDetail {
    #[serde(rename = "Approver", default)]
    pub approver: ApprovalUser,
    #[serde(rename = "Speech", default)]
    pub speech: String,
    #[serde(rename = "SpStatus", default, deserialize_with = "lenient")]
    pub sp_status: i32,
    #[serde(rename = "SpTime", default, deserialize_with = "lenient")]
    pub sp_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApprovalComment {
    #[serde(rename = "CommentUserInfo", default)]
    pub comment_user_info: ApprovalUser,
    #[serde(rename = "CommentTime", default, deserialize_with = "lenient")]
    pub comment_time: i64,
    #[serde(rename = "CommentContent", default)]
    pub comment_content: String,
    #[serde(rename = "CommentId", default)]
    pub comment_id: String,
}
