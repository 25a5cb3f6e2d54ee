//! Codec chain lookup and dispatch.
//!
//! # Responsibilities
//! - Hold an ordered list of codecs
//! - Offer each Url to every codec in turn until one claims it
//! - Return the claimed handler or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - First match wins, in registration order
//! - A resolver failure stops the scan: the Url was claimed

use std::sync::Arc;

use crate::codec::{
    DecodeOutcome, EncodeError, EncodeResult, NoMatchReason, RequestCodec, RequestHandler,
};
use crate::registry::ResolveResult;
use crate::url_model::Url;

/// Ordered list of codecs tried one after another.
#[derive(Debug, Clone, Default)]
pub struct CodecChain {
    codecs: Vec<Arc<dyn RequestCodec>>,
}

impl CodecChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, codec: impl RequestCodec + 'static) -> Self {
        self.codecs.push(Arc::new(codec));
        self
    }

    pub fn push(&mut self, codec: Arc<dyn RequestCodec>) {
        self.codecs.push(codec);
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// Decode with the first codec that claims the Url.
    pub fn decode(&self, url: &Url) -> ResolveResult<DecodeOutcome> {
        for codec in &self.codecs {
            let outcome = codec.decode(url)?;
            if outcome.is_match() {
                tracing::trace!(codec = codec.name(), url = %url, "Codec claimed url");
                return Ok(outcome);
            }
        }
        tracing::debug!(url = %url, codecs = self.codecs.len(), "No codec matched");
        Ok(DecodeOutcome::NoMatch(NoMatchReason::NoCodec))
    }

    /// Encode with the first codec that accepts the handler.
    pub fn encode(&self, handler: &RequestHandler) -> EncodeResult<Url> {
        let mut last_error = EncodeError::NoCodec;
        for codec in &self.codecs {
            match codec.encode(handler) {
                Ok(url) => return Ok(url),
                Err(e) => last_error = e,
            }
        }
        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{PageInstanceCodec, PageReference};
    use crate::registry::ListenerInterfaceRegistry;

    fn mounted(prefix: &[&str]) -> PageInstanceCodec {
        PageInstanceCodec::builder()
            .mount(prefix.iter().copied())
            .listeners(ListenerInterfaceRegistry::with_interfaces(["ILinkListener"]))
            .build()
            .unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let chain = CodecChain::new()
            .with(mounted(&["admin", "page"]))
            .with(mounted(&["wicket", "page"]));

        let outcome = chain.decode(&Url::parse("wicket/page?3")).unwrap();
        assert_eq!(
            outcome.into_handler(),
            Some(RequestHandler::render(PageReference::new(3, 0, None)))
        );
    }

    #[test]
    fn test_no_codec_matched() {
        let chain = CodecChain::new().with(mounted(&["wicket", "page"]));
        assert_eq!(
            chain.decode(&Url::parse("static/logo.png")).unwrap(),
            DecodeOutcome::NoMatch(NoMatchReason::NoCodec)
        );
        assert_eq!(
            CodecChain::new().decode(&Url::parse("wicket/page?3")).unwrap(),
            DecodeOutcome::NoMatch(NoMatchReason::NoCodec)
        );
    }

    #[test]
    fn test_encode_uses_first_codec() {
        let chain = CodecChain::new()
            .with(mounted(&["admin", "page"]))
            .with(mounted(&["wicket", "page"]));
        let url = chain
            .encode(&RequestHandler::render(PageReference::new(9, 1, None)))
            .unwrap();
        assert_eq!(url.to_string(), "admin/page?9.1");

        assert_eq!(
            CodecChain::new().encode(&RequestHandler::render(PageReference::new(9, 1, None))),
            Err(EncodeError::NoCodec)
        );
    }
}
