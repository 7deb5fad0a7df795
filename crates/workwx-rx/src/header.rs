// ABOUTME: First-pass decode of a callback payload into the fields every message shares.
// ABOUTME: The result selects which variant shape the second pass decodes into.

use serde::Deserialize;

use crate::de::lenient;
use crate::error::{Result, RxError};

/// Fields present on every callback payload. Missing or empty elements fall
/// back to their defaults so the second pass can decide what is required.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct CommonHeader {
    #[serde(rename = "ToUserName", default)]
    pub to_user_name: String,

    #[serde(rename = "FromUserName", default)]
    pub from_user_name: String,

    #[serde(rename = "CreateTime", default, deserialize_with = "lenient")]
    pub create_time: i64,

    #[serde(rename = "MsgType", default)]
    pub msg_type: String,

    #[serde(rename = "MsgId", default, deserialize_with = "lenient")]
    pub msg_id: i64,

    #[serde(rename = "AgentID", default, deserialize_with = "lenient")]
    pub agent_id: i64,

    #[serde(rename = "Event", default)]
    pub event: String,

    #[serde(rename = "ChangeType", default)]
    pub change_type: String,
}

impl CommonHeader {
    pub(crate) fn parse(xml: &str) -> Result<Self> {
        quick_xml::de::from_str(xml).map_err(|source| RxError::decode("common header", source))
    }
}

/// Second-pass decode of `xml` into the shape chosen for `pass`.
pub(crate) fn decode_variant<T>(xml: &str, pass: &'static str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    quick_xml::de::from_str(xml).map_err(|source| RxError::decode(pass, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_header() {
        let xml = r#"<xml>
            <ToUserName><![CDATA[ww0123456789]]></ToUserName>
            <FromUserName><![CDATA[zhangsan]]></FromUserName>
            <CreateTime>1700000000</CreateTime>
            <MsgType><![CDATA[text]]></MsgType>
            <Content><![CDATA[hello]]></Content>
            <MsgId>42</MsgId>
            <AgentID>7</AgentID>
        </xml>"#;

        let header = CommonHeader::parse(xml).unwrap();
        assert_eq!(header.to_user_name, "ww0123456789");
        assert_eq!(header.from_user_name, "zhangsan");
        assert_eq!(header.create_time, 1_700_000_000);
        assert_eq!(header.msg_type, "text");
        assert_eq!(header.msg_id, 42);
        assert_eq!(header.agent_id, 7);
        assert!(header.event.is_empty());
        assert!(header.change_type.is_empty());
    }

    #[test]
    fn test_event_header_without_msg_id() {
        let xml = r#"<xml>
            <FromUserName><![CDATA[sys]]></FromUserName>
            <CreateTime>1700000000</CreateTime>
            <MsgType><![CDATA[event]]></MsgType>
            <Event><![CDATA[change_external_contact]]></Event>
            <ChangeType><![CDATA[del_follow_user]]></ChangeType>
        </xml>"#;

        let header = CommonHeader::parse(xml).unwrap();
        assert_eq!(header.msg_id, 0);
        assert_eq!(header.agent_id, 0);
        assert_eq!(header.event, "change_external_contact");
        assert_eq!(header.change_type, "del_follow_user");
    }

    #[test]
    fn test_truncated_header_is_decode_error() {
        let err = CommonHeader::parse("<xml><MsgTy").unwrap_err();
        assert!(matches!(
            err,
            RxError::Decode {
                pass: "common header",
                ..
            }
        ));
    }
}
