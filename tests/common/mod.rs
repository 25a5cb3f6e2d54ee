//! Shared fixtures for integration tests.

use page_codec::codec::{DecodeOutcome, PageReference};
use page_codec::registry::ListenerInterfaceRegistry;
use page_codec::{PageInstanceCodec, RequestCodec, RequestHandler, Url};

/// Codec mounted at `wicket/page` that knows `ILinkListener`.
pub fn wicket_codec() -> PageInstanceCodec {
    PageInstanceCodec::builder()
        .mount(["wicket", "page"])
        .listeners(ListenerInterfaceRegistry::with_interfaces(["ILinkListener"]))
        .build()
        .expect("valid mount prefix")
}

/// Decode a raw Url with the default test codec.
pub fn decode(raw: &str) -> DecodeOutcome {
    wicket_codec()
        .decode(&Url::parse(raw))
        .expect("detached resolver never fails")
}

/// Decode and return the handler, panicking on no-match.
#[allow(dead_code)]
pub fn decode_handler(raw: &str) -> RequestHandler {
    match decode(raw) {
        DecodeOutcome::Matched(handler) => handler,
        DecodeOutcome::NoMatch(reason) => panic!("{} did not match: {}", raw, reason),
    }
}

/// Assert the page coordinates of a handler.
#[allow(dead_code)]
pub fn check_page(page: &PageReference, page_id: u64, version: u64, alias: Option<&str>) {
    assert_eq!(page.page_id(), page_id);
    assert_eq!(page.version(), version);
    assert_eq!(page.alias(), alias);
}
