//! Collaborators the codec consults while decoding.
//!
//! # Data Flow
//! ```text
//! decoded token
//!     → listener.rs (interface name → ListenerInterface, or NoMatch)
//!     → resolver.rs (page id/version/alias → PageReference, or ResolveError)
//! ```
//!
//! # Design Decisions
//! - Both are traits injected into the codec at construction
//! - Thread safety of custom implementations is their own concern

pub mod listener;
pub mod resolver;

pub use listener::{ListenerInterface, ListenerInterfaceRegistry, ListenerRegistry};
pub use resolver::{DetachedPageResolver, PageResolver, ResolveError, ResolveResult};
