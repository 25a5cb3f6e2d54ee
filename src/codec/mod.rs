//! Url codec subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound Url
//!     → routing::matcher (mount prefix)
//!     → token.rs (page info, listener info, component path)
//!     → registry (listener lookup, page resolution)
//!     → Return: Matched(RequestHandler) or NoMatch(reason)
//!
//! RequestHandler (from link rendering)
//!     → token.rs (canonical token)
//!     → Url (mount prefix + token parameter)
//! ```
//!
//! # Design Decisions
//! - "Not my Url" is a value, not an error
//! - Resolver failures surface unchanged as `Err`
//! - Encoding rejects values that would not decode back identically

pub mod error;
pub mod handler;
pub mod page_instance;
pub mod token;

use serde::Serialize;

use crate::registry::ResolveResult;
use crate::url_model::Url;

pub use error::{EncodeError, EncodeResult, NoMatchReason};
pub use handler::{ComponentPath, PageReference, RequestHandler};
pub use page_instance::{PageInstanceCodec, PageInstanceCodecBuilder};
pub use token::{parse_token, ListenerToken, PageToken, ParsedToken};

/// Result of offering a Url to a codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DecodeOutcome {
    Matched(RequestHandler),
    NoMatch(NoMatchReason),
}

impl DecodeOutcome {
    pub fn handler(&self) -> Option<&RequestHandler> {
        match self {
            DecodeOutcome::Matched(handler) => Some(handler),
            DecodeOutcome::NoMatch(_) => None,
        }
    }

    pub fn into_handler(self) -> Option<RequestHandler> {
        match self {
            DecodeOutcome::Matched(handler) => Some(handler),
            DecodeOutcome::NoMatch(_) => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, DecodeOutcome::Matched(_))
    }
}

/// A bidirectional Url <-> RequestHandler mapping strategy.
pub trait RequestCodec: Send + Sync + std::fmt::Debug {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Claim and decode a Url. Never fails on malformed input.
    fn decode(&self, url: &Url) -> ResolveResult<DecodeOutcome>;

    /// Produce the canonical Url for a handler.
    fn encode(&self, handler: &RequestHandler) -> EncodeResult<Url>;
}
