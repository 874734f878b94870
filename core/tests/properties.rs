//! Cross-cutting contract tests over the public surface.
//!
//! # Design
//! Exercises the model the way a transport layer would: constructs messages
//! from raw primitives, mutates them through `with_*` methods, and checks the
//! immutability, casing, and validation guarantees across types rather than
//! per module.

use http_message::{BodyStream, HeaderMap, Message, MessageError, Request, Response};

fn response_with_headers() -> Response {
    let mut headers = HeaderMap::new();
    headers.set("Content-Type", "application/json");
    headers.set("Date", "Tue, 25 Aug 2026 00:00:00 GMT");
    Response::new("1.1", 200, "OK", headers, BodyStream::from_string("{}")).unwrap()
}

#[test]
fn with_methods_never_change_the_receiver() {
    let res = response_with_headers();

    let _ = res.with_protocol_version("2.0").unwrap();
    let _ = res.with_header("content-type", "text/plain").unwrap();
    let _ = res.with_added_header("Date", "later").unwrap();
    let _ = res.without_header("Date");
    let _ = res.with_status(500, Some("Internal Server Error")).unwrap();
    let _ = res.with_body(BodyStream::from_string("replaced"));

    assert_eq!(res.protocol_version(), "1.1");
    assert_eq!(res.status_code(), 200);
    assert_eq!(res.reason_phrase(), "OK");
    assert_eq!(res.header_line("Content-Type"), "application/json");
    assert_eq!(res.header("Date").len(), 1);
    assert_eq!(res.body().contents().unwrap(), "{}");
}

#[test]
fn header_lookup_is_case_insensitive_across_the_trait() {
    let res = response_with_headers();
    assert!(res.has_header("content-type"));
    assert!(res.has_header("Content-Type"));
    assert!(res.has_header("CONTENT-TYPE"));
    assert_eq!(
        res.header("CONTENT-TYPE"),
        &["application/json".to_string()]
    );
}

#[test]
fn header_line_matches_joined_header_values() {
    let res = response_with_headers()
        .with_header("Accept", ["text/html", "application/json"])
        .unwrap();
    assert_eq!(res.header_line("accept"), res.header("accept").join(","));
    assert_eq!(res.header_line("accept"), "text/html,application/json");

    assert!(!res.has_header("Vary"));
    assert_eq!(res.header_line("Vary"), "");
}

#[test]
fn replacing_a_header_keeps_the_first_stored_casing() {
    let res = response_with_headers()
        .with_header("content-type", "text/plain")
        .unwrap();
    let stored: Vec<_> = res.headers().names().collect();
    assert!(stored.contains(&"Content-Type"));
    assert!(!stored.contains(&"content-type"));
    assert_eq!(res.header("Content-Type"), &["text/plain".to_string()]);
    assert_eq!(res.headers().len(), 2);
}

#[test]
fn added_header_appends_without_discarding() {
    let req = Request::new("1.1", "GET", "/", HeaderMap::new(), BodyStream::empty())
        .unwrap()
        .with_header("Accept", "a")
        .unwrap()
        .with_added_header("accept", "b")
        .unwrap();
    assert_eq!(req.header("Accept"), &["a".to_string(), "b".to_string()]);
}

#[test]
fn without_header_is_idempotent() {
    let res = response_with_headers();
    let once = res.without_header("Date");
    let twice = once.without_header("Date");
    assert!(!once.has_header("date"));
    assert_eq!(once.headers().len(), twice.headers().len());
    assert_eq!(twice.header_line("content-type"), "application/json");
}

#[test]
fn protocol_version_boundaries_through_with() {
    let res = response_with_headers();
    for ok in ["1.0", "1.1", "2.0"] {
        assert_eq!(res.with_protocol_version(ok).unwrap().protocol_version(), ok);
    }
    for bad in ["0.9", "3.0"] {
        assert!(matches!(
            res.with_protocol_version(bad),
            Err(MessageError::InvalidProtocolVersion(_))
        ));
    }
}

#[test]
fn unknown_header_name_is_rejected_before_any_state_change() {
    let res = response_with_headers();
    let err = res.with_header("X-Request-Id", "abc").unwrap_err();
    assert_eq!(err, MessageError::InvalidHeaderName("X-Request-Id".to_string()));
    assert_eq!(res.headers().len(), 2);
}

#[test]
fn hardcoded_json_response_scenario() {
    let mut headers = HeaderMap::new();
    headers.set("Content-Type", "application/json");
    let res = Response::new("1.1", 200, "OK", headers, BodyStream::from_string("{}")).unwrap();

    assert_eq!(res.status_code(), 200);
    assert_eq!(res.header_line("content-type"), "application/json");
    assert_eq!(res.body().contents().unwrap(), "{}");
}

#[test]
fn body_can_be_streamed_through_an_exclusive_borrow() {
    let mut res = response_with_headers().with_body(BodyStream::from_string("stream me"));
    let mut collected = Vec::new();
    loop {
        let chunk = res.body_mut().read(4).unwrap();
        if chunk.is_empty() {
            break;
        }
        collected.extend_from_slice(&chunk);
    }
    assert_eq!(String::from_utf8(collected).unwrap(), "stream me");
    assert!(res.body().eof().unwrap());
}

#[test]
fn closed_body_fails_for_later_readers() {
    let mut res = response_with_headers();
    res.body_mut().close();
    assert!(res.body().contents().is_err());
    // A fresh body restores the contract for the new instance only.
    let replaced = res.with_body(BodyStream::from_string("new"));
    assert_eq!(replaced.body().contents().unwrap(), "new");
    assert!(res.body().contents().is_err());
}
