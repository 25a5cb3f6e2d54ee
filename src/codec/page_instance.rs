//! Page instance codec.
//!
//! # Responsibilities
//! - Claim Urls under the mount prefix carrying a page token
//! - Decode the token into a `RequestHandler` via the injected collaborators
//! - Encode a `RequestHandler` into its canonical Url
//!
//! # Design Decisions
//! - Immutable after construction; share via `Arc`
//! - Only the first query parameter is read; the rest belong to the application
//! - Encoding never consults the registry or resolver

use std::sync::Arc;

use crate::codec::error::{EncodeResult, NoMatchReason};
use crate::codec::handler::{PageReference, RequestHandler};
use crate::codec::token::{parse_token, ListenerToken, PageToken, ParsedToken};
use crate::codec::{DecodeOutcome, RequestCodec};
use crate::config::validation::{validate_mount_segment, ValidationError};
use crate::config::CodecConfig;
use crate::observability::metrics;
use crate::registry::{
    DetachedPageResolver, ListenerInterfaceRegistry, ListenerRegistry, PageResolver, ResolveResult,
};
use crate::routing::matcher::{Matcher, MountMatcher};
use crate::url_model::{QueryParameter, Url};

/// Codec for `<prefix>?<page-info>[-<listener-info>-<path>...]` Urls.
#[derive(Debug, Clone)]
pub struct PageInstanceCodec {
    mount: MountMatcher,
    listeners: Arc<dyn ListenerRegistry>,
    resolver: Arc<dyn PageResolver>,
}

impl PageInstanceCodec {
    pub fn builder() -> PageInstanceCodecBuilder {
        PageInstanceCodecBuilder::default()
    }

    /// Codec mounted at the configured prefix, with a registry seeded from
    /// the configured listener names and a detached resolver.
    pub fn from_config(config: &CodecConfig) -> Result<Self, ValidationError> {
        let listeners = ListenerInterfaceRegistry::with_interfaces(&config.listeners.interfaces);
        Self::builder()
            .mount(config.mount.prefix.iter().cloned())
            .listeners(listeners)
            .build()
    }

    pub fn mount_prefix(&self) -> &[String] {
        self.mount.prefix()
    }

    fn decode_token(&self, url: &Url) -> ResolveResult<DecodeOutcome> {
        if !self.mount.matches(url) {
            return Ok(DecodeOutcome::NoMatch(NoMatchReason::MountMismatch));
        }
        let Some(param) = url.first_query_parameter() else {
            return Ok(DecodeOutcome::NoMatch(NoMatchReason::MissingToken));
        };

        let parsed = match parse_token(&param.name) {
            Ok(parsed) => parsed,
            Err(reason) => return Ok(DecodeOutcome::NoMatch(reason)),
        };

        match parsed {
            ParsedToken::Render(page) => {
                let page = self.resolve(&page)?;
                Ok(DecodeOutcome::Matched(RequestHandler::render(page)))
            }
            ParsedToken::Listener {
                page,
                listener,
                component_path,
            } => {
                let Some(interface) = self.listeners.lookup(&listener.interface_name) else {
                    return Ok(DecodeOutcome::NoMatch(NoMatchReason::UnknownListener(
                        listener.interface_name,
                    )));
                };
                let page = self.resolve(&page)?;
                Ok(DecodeOutcome::Matched(RequestHandler::listener(
                    page,
                    component_path,
                    interface,
                    listener.behavior_index,
                )))
            }
        }
    }

    fn resolve(&self, page: &PageToken) -> ResolveResult<PageReference> {
        self.resolver
            .resolve(page.page_id, page.version, page.alias.as_deref())
    }

    fn to_parsed_token(handler: &RequestHandler) -> ParsedToken {
        let page = handler.page();
        let page = PageToken::new(
            page.alias().map(str::to_string),
            page.page_id(),
            page.version(),
        );
        match handler {
            RequestHandler::RenderPage { .. } => ParsedToken::Render(page),
            RequestHandler::InvokeListener {
                component_path,
                interface,
                behavior_index,
                ..
            } => ParsedToken::Listener {
                page,
                listener: ListenerToken {
                    interface_name: interface.name().to_string(),
                    behavior_index: *behavior_index,
                },
                component_path: component_path.clone(),
            },
        }
    }
}

impl RequestCodec for PageInstanceCodec {
    fn name(&self) -> &str {
        "page-instance"
    }

    fn decode(&self, url: &Url) -> ResolveResult<DecodeOutcome> {
        let outcome = self.decode_token(url);
        match &outcome {
            Ok(DecodeOutcome::Matched(handler)) => {
                tracing::trace!(url = %url, handler = ?handler, "Url decoded");
                metrics::record_decode("matched");
            }
            Ok(DecodeOutcome::NoMatch(reason)) => {
                tracing::debug!(url = %url, reason = %reason, "Url not claimed");
                metrics::record_decode("no_match");
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Page resolution failed");
                metrics::record_decode("resolve_error");
            }
        }
        outcome
    }

    fn encode(&self, handler: &RequestHandler) -> EncodeResult<Url> {
        let token = match Self::to_parsed_token(handler).to_token() {
            Ok(token) => token,
            Err(e) => {
                tracing::debug!(error = %e, "Handler rejected by encoder");
                metrics::record_encode("invalid_argument");
                return Err(e);
            }
        };
        metrics::record_encode("encoded");

        Ok(Url::new(
            self.mount.prefix().to_vec(),
            vec![QueryParameter::flag(token)],
        ))
    }
}

/// Builder wiring the mount prefix and collaborators.
#[derive(Debug, Default)]
pub struct PageInstanceCodecBuilder {
    prefix: Vec<String>,
    listeners: Option<Arc<dyn ListenerRegistry>>,
    resolver: Option<Arc<dyn PageResolver>>,
}

impl PageInstanceCodecBuilder {
    pub fn mount<I, S>(mut self, prefix: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefix = prefix.into_iter().map(Into::into).collect();
        self
    }

    pub fn listeners(mut self, registry: impl ListenerRegistry + 'static) -> Self {
        self.listeners = Some(Arc::new(registry));
        self
    }

    pub fn shared_listeners(mut self, registry: Arc<dyn ListenerRegistry>) -> Self {
        self.listeners = Some(registry);
        self
    }

    pub fn resolver(mut self, resolver: impl PageResolver + 'static) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    pub fn shared_resolver(mut self, resolver: Arc<dyn PageResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Missing collaborators default to an empty registry and a detached resolver.
    ///
    /// Fails on a mount segment that `Url::parse` could never reproduce (empty,
    /// or containing `/`, `?`, `&` or `#`). An empty prefix is allowed.
    pub fn build(self) -> Result<PageInstanceCodec, ValidationError> {
        for (index, segment) in self.prefix.iter().enumerate() {
            validate_mount_segment(index, segment)?;
        }
        Ok(PageInstanceCodec {
            mount: MountMatcher::new(self.prefix),
            listeners: self
                .listeners
                .unwrap_or_else(|| Arc::new(ListenerInterfaceRegistry::new())),
            resolver: self
                .resolver
                .unwrap_or_else(|| Arc::new(DetachedPageResolver)),
        })
    }
}
