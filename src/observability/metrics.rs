//! Codec metrics.
//!
//! # Metrics
//! - `page_codec_decode_total` (counter): decode calls by outcome
//!   (`matched`, `no_match`, `resolve_error`)
//! - `page_codec_encode_total` (counter): encode calls by outcome
//!   (`encoded`, `invalid_argument`)
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; no-ops until the embedding
//!   application installs a recorder
//! - Labels are static strings to keep cardinality bounded

pub const DECODE_TOTAL: &str = "page_codec_decode_total";
pub const ENCODE_TOTAL: &str = "page_codec_encode_total";

/// Count one decode call.
pub fn record_decode(outcome: &'static str) {
    ::metrics::counter!(DECODE_TOTAL, "outcome" => outcome).increment(1);
}

/// Count one encode call.
pub fn record_encode(outcome: &'static str) {
    ::metrics::counter!(ENCODE_TOTAL, "outcome" => outcome).increment(1);
}
