//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! codec, router, config loader produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (decode/encode counters via the metrics facade)
//! ```
//!
//! # Design Decisions
//! - Structured fields (url, reason, codec) instead of formatted messages
//! - Metrics are cheap and no-ops without a recorder

pub mod logging;
pub mod metrics;
