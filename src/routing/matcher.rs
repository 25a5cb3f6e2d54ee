//! Mount prefix matching.
//!
//! # Responsibilities
//! - Decide whether a Url lives under a codec's mount prefix
//!
//! # Design Decisions
//! - Segment-wise, case-sensitive comparison
//! - Segments beyond the prefix are ignored (extra path info)
//! - A non-match is a plain `false`, never an error

use crate::url_model::Url;

/// Trait for matching Urls against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the url matches this condition.
    fn matches(&self, url: &Url) -> bool;
}

/// Matches the leading path segments of a Url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountMatcher {
    prefix: Vec<String>,
}

impl MountMatcher {
    pub fn new<I, S>(prefix: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefix: prefix.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefix(&self) -> &[String] {
        &self.prefix
    }
}

impl Matcher for MountMatcher {
    fn matches(&self, url: &Url) -> bool {
        let segments = url.segments();
        segments.len() >= self.prefix.len()
            && self.prefix.iter().zip(segments).all(|(p, s)| p == s)
    }
}
