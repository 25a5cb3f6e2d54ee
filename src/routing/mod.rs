//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound Url (segments, query)
//!     → router.rs (codec chain, in order)
//!     → matcher.rs (mount prefix check per codec)
//!     → Return: matched RequestHandler or NoMatch
//! ```
//!
//! # Design Decisions
//! - Codecs are configured at startup, immutable at runtime
//! - Prefix matching only, no regex
//! - Deterministic: same input always matches same codec
//! - First match wins (registration order)

pub mod matcher;
pub mod router;

pub use matcher::{Matcher, MountMatcher};
pub use router::CodecChain;
