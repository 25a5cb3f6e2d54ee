//! Page instance Url codec.
//!
//! Maps compact Url tokens such as `wicket/page?abc.4.5-ILinkListener.2-a-b-c`
//! to request handlers (render a page, invoke a listener on one of its
//! components) and back.

pub mod codec;
pub mod config;
pub mod observability;
pub mod registry;
pub mod routing;
pub mod url_model;

pub use codec::{DecodeOutcome, PageInstanceCodec, RequestCodec, RequestHandler};
pub use config::CodecConfig;
pub use routing::CodecChain;
pub use url_model::Url;
