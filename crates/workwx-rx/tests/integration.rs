// ABOUTME: Integration tests for workwx-rx.
// ABOUTME: Resolves realistic callback payloads and checks the typed variant each one lands in.

use workwx_rx::{
    resolve, ChangeType, DecodeFailure, EventType, MessageType, ResolvedMessage, RxError,
};

// ============================================================================
// Fixtures
// ============================================================================

fn message(msg_type: &str, body: &str) -> String {
    format!(
        "<xml>\
         <ToUserName><![CDATA[ww0123456789]]></ToUserName>\
         <FromUserName><![CDATA[zhangsan]]></FromUserName>\
         <CreateTime>1700000000</CreateTime>\
         <MsgType><![CDATA[{msg_type}]]></MsgType>\
         {body}\
         <MsgId>42</MsgId>\
         <AgentID>7</AgentID>\
         </xml>"
    )
}

fn event(event: &str, change_type: Option<&str>, body: &str) -> String {
    let change = change_type
        .map(|c| format!("<ChangeType><![CDATA[{c}]]></ChangeType>"))
        .unwrap_or_default();
    format!(
        "<xml>\
         <ToUserName><![CDATA[ww0123456789]]></ToUserName>\
         <FromUserName><![CDATA[sys]]></FromUserName>\
         <CreateTime>1700000000</CreateTime>\
         <MsgType><![CDATA[event]]></MsgType>\
         <Event><![CDATA[{event}]]></Event>\
         {change}\
         {body}\
         <AgentID>7</AgentID>\
         </xml>"
    )
}

const CONTACT_BODY: &str = "<UserID><![CDATA[zhangsan]]></UserID>\
     <ExternalUserID><![CDATA[wmEAlECwAAHrbWYDOK5u3Af13xlYDDNQ]]></ExternalUserID>\
     <State><![CDATA[campaign]]></State>\
     <WelcomeCode><![CDATA[WELCOMECODE]]></WelcomeCode>\
     <FailReason><![CDATA[customer_refused]]></FailReason>";

/// Names of every try-get accessor that returns Some.
fn present_variants(msg: &ResolvedMessage) -> Vec<&'static str> {
    let checks = [
        ("text", msg.text().is_some()),
        ("image", msg.image().is_some()),
        ("voice", msg.voice().is_some()),
        ("video", msg.video().is_some()),
        ("location", msg.location().is_some()),
        ("link", msg.link().is_some()),
        (
            "add_external_contact",
            msg.event_add_external_contact().is_some(),
        ),
        (
            "edit_external_contact",
            msg.event_edit_external_contact().is_some(),
        ),
        (
            "del_external_contact",
            msg.event_del_external_contact().is_some(),
        ),
        ("del_follow_user", msg.event_del_follow_user().is_some()),
        (
            "add_half_external_contact",
            msg.event_add_half_external_contact().is_some(),
        ),
        ("transfer_fail", msg.event_transfer_fail().is_some()),
        (
            "change_external_chat",
            msg.event_change_external_chat().is_some(),
        ),
        (
            "sys_approval_change",
            msg.event_sys_approval_change().is_some(),
        ),
        ("create_user", msg.event_create_user().is_some()),
        ("update_user", msg.event_update_user().is_some()),
        ("app_menu_click", msg.event_app_menu_click().is_some()),
        ("app_menu_view", msg.event_app_menu_view().is_some()),
        ("app_subscribe", msg.event_app_subscribe().is_some()),
        ("app_unsubscribe", msg.event_app_unsubscribe().is_some()),
        ("kf_msg_or_event", msg.event_kf_msg_or_event().is_some()),
        ("unknown_event", msg.event_unknown().is_some()),
    ];
    checks
        .into_iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| name)
        .collect()
}

// ============================================================================
// Closed dispatch
// ============================================================================

#[test]
fn test_every_known_triple_selects_exactly_one_variant() {
    let cases: Vec<(String, &str)> = vec![
        (message("text", "<Content><![CDATA[hello]]></Content>"), "text"),
        (
            message(
                "image",
                "<PicUrl><![CDATA[https://example.com/a.png]]></PicUrl><MediaId><![CDATA[m1]]></MediaId>",
            ),
            "image",
        ),
        (
            message(
                "voice",
                "<MediaId><![CDATA[m2]]></MediaId><Format><![CDATA[amr]]></Format>",
            ),
            "voice",
        ),
        (
            message(
                "video",
                "<MediaId><![CDATA[m3]]></MediaId><ThumbMediaId><![CDATA[t3]]></ThumbMediaId>",
            ),
            "video",
        ),
        (
            message(
                "location",
                "<Location_X>23.1</Location_X><Location_Y>113.3</Location_Y><Scale>15</Scale><Label><![CDATA[here]]></Label>",
            ),
            "location",
        ),
        (
            message(
                "link",
                "<Title><![CDATA[t]]></Title><Description><![CDATA[d]]></Description><Url><![CDATA[https://example.com]]></Url><PicUrl><![CDATA[p]]></PicUrl>",
            ),
            "link",
        ),
        (
            event(
                "change_external_contact",
                Some("add_external_contact"),
                CONTACT_BODY,
            ),
            "add_external_contact",
        ),
        (
            event(
                "change_external_contact",
                Some("edit_external_contact"),
                CONTACT_BODY,
            ),
            "edit_external_contact",
        ),
        (
            event(
                "change_external_contact",
                Some("del_external_contact"),
                CONTACT_BODY,
            ),
            "del_external_contact",
        ),
        (
            event(
                "change_external_contact",
                Some("del_follow_user"),
                CONTACT_BODY,
            ),
            "del_follow_user",
        ),
        (
            event(
                "change_external_contact",
                Some("add_half_external_contact"),
                CONTACT_BODY,
            ),
            "add_half_external_contact",
        ),
        (
            event(
                "change_external_contact",
                Some("transfer_fail"),
                CONTACT_BODY,
            ),
            "transfer_fail",
        ),
        (
            event(
                "change_external_contact",
                Some("create_user"),
                "<UserID><![CDATA[lisi]]></UserID>",
            ),
            "create_user",
        ),
        (
            event(
                "change_external_contact",
                Some("update_user"),
                "<UserID><![CDATA[lisi]]></UserID>",
            ),
            "update_user",
        ),
        (
            event(
                "change_contact",
                Some("create_user"),
                "<UserID><![CDATA[lisi]]></UserID>",
            ),
            "create_user",
        ),
        (
            event(
                "change_contact",
                Some("update_user"),
                "<UserID><![CDATA[lisi]]></UserID>",
            ),
            "update_user",
        ),
        (
            event(
                "change_external_chat",
                Some("create"),
                "<ChatId><![CDATA[wr123]]></ChatId>",
            ),
            "change_external_chat",
        ),
        (
            event(
                "sys_approval_change",
                None,
                "<ApprovalInfo><SpNo>202011040001</SpNo></ApprovalInfo>",
            ),
            "sys_approval_change",
        ),
        (
            event("click", None, "<EventKey><![CDATA[menu_1]]></EventKey>"),
            "app_menu_click",
        ),
        (
            event(
                "view",
                None,
                "<EventKey><![CDATA[https://example.com]]></EventKey>",
            ),
            "app_menu_view",
        ),
        (event("subscribe", None, ""), "app_subscribe"),
        (event("unsubscribe", None, ""), "app_unsubscribe"),
        (
            event(
                "kf_msg_or_event",
                None,
                "<Token><![CDATA[tok]]></Token><OpenKfId><![CDATA[wk1]]></OpenKfId>",
            ),
            "kf_msg_or_event",
        ),
    ];

    for (payload, expected) in cases {
        let msg = resolve(payload.as_bytes())
            .unwrap_or_else(|e| panic!("{expected} failed to resolve: {e}"));
        assert_eq!(present_variants(&msg), vec![expected], "payload: {payload}");
        assert_eq!(msg.variant_name(), expected);
    }
}

#[test]
fn test_variant_fields_survive_dispatch() {
    let msg = resolve(
        event(
            "change_external_contact",
            Some("add_external_contact"),
            CONTACT_BODY,
        )
        .as_bytes(),
    )
    .unwrap();

    let added = msg.event_add_external_contact().unwrap();
    assert_eq!(added.user_id(), "zhangsan");
    assert_eq!(added.external_user_id(), "wmEAlECwAAHrbWYDOK5u3Af13xlYDDNQ");
    assert_eq!(added.state(), "campaign");
    assert_eq!(added.welcome_code(), "WELCOMECODE");
    assert_eq!(msg.event_kind(), Some(&EventType::ChangeExternalContact));
    assert_eq!(msg.change_kind(), Some(&ChangeType::AddExternalContact));
    assert_eq!(msg.sender_id(), "sys");
    assert_eq!(msg.message_id(), 0);

    let msg = resolve(
        event(
            "change_external_contact",
            Some("transfer_fail"),
            CONTACT_BODY,
        )
        .as_bytes(),
    )
    .unwrap();
    assert_eq!(
        msg.event_transfer_fail().unwrap().fail_reason(),
        "customer_refused"
    );
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_text_message_end_to_end() {
    let payload = message("text", "<Content><![CDATA[hello]]></Content>");
    let msg = ResolvedMessage::from_envelope(payload.as_bytes()).unwrap();

    assert_eq!(msg.sender_id(), "zhangsan");
    assert_eq!(msg.to_user_name(), "ww0123456789");
    assert_eq!(msg.kind(), MessageType::Text);
    assert_eq!(msg.send_time().to_rfc3339(), "2023-11-14T22:13:20+00:00");
    assert_eq!(msg.message_id(), 42);
    assert_eq!(msg.app_id(), 7);
    assert_eq!(msg.text().unwrap().content(), "hello");
    assert!(msg.event_kind().is_none());
    assert!(msg.to_string().ends_with(r#"Content: "hello" }"#));
}

#[test]
fn test_resolve_is_deterministic() {
    let payload = message("voice", "<MediaId><![CDATA[m2]]></MediaId><Format><![CDATA[amr]]></Format>");
    let first = resolve(payload.as_bytes()).unwrap();
    let second = resolve(payload.as_bytes()).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Forward compatibility
// ============================================================================

#[test]
fn test_unknown_event_keeps_raw_payload() {
    let payload = event(
        "enter_agent",
        None,
        "<EventKey><![CDATA[]]></EventKey>",
    );
    let msg = resolve(payload.as_bytes()).unwrap();

    assert_eq!(present_variants(&msg), vec!["unknown_event"]);
    assert_eq!(
        msg.event_kind(),
        Some(&EventType::Other("enter_agent".to_string()))
    );

    let unknown = msg.event_unknown().unwrap();
    assert_eq!(unknown.event_type(), "enter_agent");
    assert_eq!(unknown.raw(), payload.as_bytes());
}

#[test]
fn test_unknown_change_type_under_contact_event() {
    let payload = event("change_contact", Some("delete_party"), "<Id>2</Id>");
    let msg = resolve(payload.as_bytes()).unwrap();

    assert_eq!(present_variants(&msg), vec!["unknown_event"]);
    assert_eq!(msg.event_unknown().unwrap().event_type(), "change_contact");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_unrecognized_kind() {
    let payload = message("miniprogram_notice", "");
    let err = resolve(payload.as_bytes()).unwrap_err();

    assert!(matches!(err, RxError::UnrecognizedKind(ref kind) if kind == "miniprogram_notice"));
    assert!(!err.is_decode_error());
}

#[test]
fn test_malformed_payloads_are_decode_errors() {
    let cases: [&[u8]; 4] = [
        b"<xml><MsgTy",
        b"<xml><MsgType>te",
        b"<xml><MsgType><![CDATA[text",
        &[0x3c, 0x78, 0x6d, 0x6c, 0x3e, 0xc3, 0x28],
    ];

    for payload in cases {
        let err = resolve(payload).unwrap_err();
        assert!(err.is_decode_error(), "expected decode error, got {err}");
    }
}

#[test]
fn test_bad_number_in_variant_is_decode_error() {
    let payload = message(
        "location",
        "<Location_X>north</Location_X><Location_Y>113.3</Location_Y>",
    );
    let err = resolve(payload.as_bytes()).unwrap_err();

    assert!(matches!(
        err,
        RxError::Decode {
            pass: "location message",
            ..
        }
    ));
}

#[test]
fn test_invalid_utf8_is_decode_variant() {
    let err = resolve(&[0x3c, 0x78, 0x6d, 0x6c, 0x3e, 0xc3, 0x28]).unwrap_err();

    assert!(matches!(
        err,
        RxError::Decode {
            pass: "utf-8",
            source: DecodeFailure::Utf8(_)
        }
    ));
}

#[test]
fn test_out_of_range_create_time_is_decode_variant() {
    let payload = message("text", "<Content><![CDATA[hello]]></Content>")
        .replace("1700000000", "9223372036854775807");
    let err = resolve(payload.as_bytes()).unwrap_err();

    assert!(matches!(
        err,
        RxError::Decode {
            pass: "create time",
            source: DecodeFailure::TimestampOutOfRange(i64::MAX)
        }
    ));
}

#[test]
fn test_change_type_ignored_outside_events() {
    let payload = message(
        "text",
        "<Content><![CDATA[hello]]></Content><ChangeType><![CDATA[update_user]]></ChangeType>",
    );
    let msg = resolve(payload.as_bytes()).unwrap();

    assert_eq!(msg.change_kind(), None);
    assert_eq!(present_variants(&msg), vec!["text"]);
}

#[test]
fn test_bytes_after_root_element_are_ignored() {
    let payload = format!(
        "{}<junk",
        message("text", "<Content><![CDATA[hello]]></Content>")
    );
    let msg = resolve(payload.as_bytes()).unwrap();

    assert_eq!(msg.text().unwrap().content(), "hello");
}
