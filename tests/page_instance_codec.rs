//! Decode/encode behavior of the page instance codec.

use page_codec::codec::{ComponentPath, DecodeOutcome, EncodeError, NoMatchReason, PageReference};
use page_codec::registry::ListenerInterface;
use page_codec::{RequestCodec, RequestHandler};

mod common;
use common::{check_page, decode, decode_handler, wicket_codec};

fn link_listener() -> ListenerInterface {
    ListenerInterface::new("ILinkListener")
}

#[test]
fn test_decode_page_id() {
    let handler = decode_handler("wicket/page?4");
    assert!(matches!(handler, RequestHandler::RenderPage { .. }));
    check_page(handler.page(), 4, 0, None);
}

#[test]
fn test_decode_page_id_and_version() {
    let handler = decode_handler("wicket/page?4.5");
    assert!(matches!(handler, RequestHandler::RenderPage { .. }));
    check_page(handler.page(), 4, 5, None);
}

#[test]
fn test_decode_ignores_extra_path_and_parameters() {
    let handler = decode_handler("wicket/page/ignore/me?abc.4.5&a=3&b=3");
    assert!(matches!(handler, RequestHandler::RenderPage { .. }));
    check_page(handler.page(), 4, 5, Some("abc"));
}

#[test]
fn test_decode_listener() {
    let RequestHandler::InvokeListener {
        page,
        component_path,
        interface,
        behavior_index,
    } = decode_handler("wicket/page?abc.4.5-ILinkListener-a-b-c")
    else {
        panic!("expected listener handler");
    };
    check_page(&page, 4, 5, Some("abc"));
    assert_eq!(component_path.to_string(), "a:b:c");
    assert_eq!(interface, link_listener());
    assert_eq!(behavior_index, None);
}

#[test]
fn test_decode_mount_mismatch() {
    assert_eq!(
        decode("wickett/pagee?abc.4.5-ILinkListener-a:b-c"),
        DecodeOutcome::NoMatch(NoMatchReason::MountMismatch)
    );
}

#[test]
fn test_decode_alias_without_page_id() {
    assert_eq!(
        decode("wicket/page?abc"),
        DecodeOutcome::NoMatch(NoMatchReason::MalformedPageInfo)
    );
}

#[test]
fn test_decode_listener_with_behavior_index() {
    let RequestHandler::InvokeListener {
        page,
        component_path,
        interface,
        behavior_index,
    } = decode_handler("wicket/page?abc.4.5-ILinkListener.5-a-b-c")
    else {
        panic!("expected listener handler");
    };
    check_page(&page, 4, 5, Some("abc"));
    assert_eq!(component_path.to_string(), "a:b:c");
    assert_eq!(interface, link_listener());
    assert_eq!(behavior_index, Some(5));
}

#[test]
fn test_decode_rejects_trailing_garbage_in_numbers() {
    for raw in [
        "wicket/page?4x.5",
        "wicket/page?4.5x",
        "wicket/page?abc.4x.5",
        "wicket/page?abc.4.5x",
        "wicket/page?4-ILinkListener.5x-a",
        "wicket/page?4.5.6",
    ] {
        assert!(!decode(raw).is_match(), "{} should not match", raw);
    }
}

#[test]
fn test_encode_alias_page() {
    let handler = RequestHandler::render(PageReference::new(15, 4, Some("pm1".into())));
    let url = wicket_codec().encode(&handler).unwrap();
    assert_eq!(url.to_string(), "wicket/page?pm1.15.4");
}

#[test]
fn test_digit_leading_alias_round_trips() {
    let codec = wicket_codec();
    let handler = RequestHandler::render(PageReference::new(15, 4, Some("1abc".into())));
    let url = codec.encode(&handler).unwrap();
    assert_eq!(url.to_string(), "wicket/page?1abc.15.4");
    assert_eq!(codec.decode(&url).unwrap(), DecodeOutcome::Matched(handler));

    // the short form stays reserved for numeric ids
    assert!(!decode("wicket/page?1abc.15").is_match());

    let numeric = RequestHandler::render(PageReference::new(15, 4, Some("42".into())));
    assert_eq!(codec.encode(&numeric), Err(EncodeError::InvalidAlias("42".into())));
}

#[test]
fn test_encode_plain_page() {
    let handler = RequestHandler::render(PageReference::new(15, 0, None));
    let url = wicket_codec().encode(&handler).unwrap();
    assert_eq!(url.to_string(), "wicket/page?15");
}

#[test]
fn test_encode_listener() {
    let handler = RequestHandler::listener(
        PageReference::new(15, 0, None),
        ComponentPath::parse("a:b:c"),
        link_listener(),
        None,
    );
    let url = wicket_codec().encode(&handler).unwrap();
    assert_eq!(url.to_string(), "wicket/page?15-ILinkListener-a-b-c");
}

#[test]
fn test_encode_listener_with_behavior_index() {
    let handler = RequestHandler::listener(
        PageReference::new(15, 0, None),
        ComponentPath::new(["a", "b", "c"]),
        link_listener(),
        Some(5),
    );
    let url = wicket_codec().encode(&handler).unwrap();
    assert_eq!(url.to_string(), "wicket/page?15-ILinkListener.5-a-b-c");
}

#[test]
fn test_encode_rejects_reserved_delimiter_in_segment() {
    let handler = RequestHandler::listener(
        PageReference::new(15, 0, None),
        ComponentPath::new(["a-b", "c"]),
        link_listener(),
        None,
    );
    assert!(matches!(
        wicket_codec().encode(&handler),
        Err(EncodeError::ReservedCharacter { reserved: '-', .. })
    ));
}

#[test]
fn test_encoded_listener_decodes_back() {
    let codec = wicket_codec();
    let handler = RequestHandler::listener(
        PageReference::new(3, 7, Some("Home".into())),
        ComponentPath::parse("form:items:0:remove"),
        link_listener(),
        Some(2),
    );
    let url = codec.encode(&handler).unwrap();
    assert_eq!(url.to_string(), "wicket/page?Home.3.7-ILinkListener.2-form-items-0-remove");
    assert_eq!(
        codec.decode(&url).unwrap(),
        DecodeOutcome::Matched(handler)
    );
}
