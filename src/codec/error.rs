//! Codec outcome and error types.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Why a Url was not claimed by a codec. This is an expected outcome, not an
/// error: the caller may offer the Url to the next codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum NoMatchReason {
    /// Leading path segments differ from the mount prefix.
    MountMismatch,
    /// The Url has no query parameter to carry a token.
    MissingToken,
    /// The `[alias.]id[.version]` part is malformed.
    MalformedPageInfo,
    /// The `name[.index]` part is malformed.
    MalformedListenerInfo,
    /// A listener was named but the component path is missing, has an empty
    /// segment, or a segment containing `:`.
    MalformedComponentPath,
    /// The listener name is not registered.
    UnknownListener(String),
    /// No codec in a chain claimed the Url.
    NoCodec,
}

impl fmt::Display for NoMatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoMatchReason::MountMismatch => write!(f, "mount prefix mismatch"),
            NoMatchReason::MissingToken => write!(f, "no page token in query"),
            NoMatchReason::MalformedPageInfo => write!(f, "malformed page info"),
            NoMatchReason::MalformedListenerInfo => write!(f, "malformed listener info"),
            NoMatchReason::MalformedComponentPath => write!(f, "malformed component path"),
            NoMatchReason::UnknownListener(name) => {
                write!(f, "unknown listener interface '{}'", name)
            }
            NoMatchReason::NoCodec => write!(f, "no codec matched"),
        }
    }
}

/// Caller contract violations detected while encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A token field contains a delimiter the grammar or the Url reserves.
    #[error("{field} '{value}' contains reserved character '{reserved}'")]
    ReservedCharacter {
        field: &'static str,
        value: String,
        reserved: char,
    },

    /// A token field is empty.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    /// A numeric alias would be read back as a page id.
    #[error("alias '{0}' must not be numeric")]
    InvalidAlias(String),

    /// No codec in a chain could encode the handler.
    #[error("no codec available to encode handler")]
    NoCodec,
}

/// Result type for encoding.
pub type EncodeResult<T> = Result<T, EncodeError>;
