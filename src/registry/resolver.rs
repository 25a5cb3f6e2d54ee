//! Page reference resolution.
//!
//! The codec hands `(page_id, version, alias)` to a resolver and never looks
//! at live pages itself. Whether a page still exists is the resolver's call.

use thiserror::Error;

use crate::codec::PageReference;

/// Errors a resolver may report. Not part of the codec's own taxonomy; they
/// are passed through to the caller of `decode`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The page existed but has been evicted or expired.
    #[error("page {page_id} (version {version}) has expired")]
    Expired { page_id: u64, version: u64 },

    /// No page with this id is known.
    #[error("unknown page {page_id}")]
    Unknown { page_id: u64 },
}

/// Result type for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Turns decoded page coordinates into a page reference.
pub trait PageResolver: Send + Sync + std::fmt::Debug {
    fn resolve(
        &self,
        page_id: u64,
        version: u64,
        alias: Option<&str>,
    ) -> ResolveResult<PageReference>;
}

/// Resolver that wraps the coordinates without consulting any page store.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedPageResolver;

impl PageResolver for DetachedPageResolver {
    fn resolve(
        &self,
        page_id: u64,
        version: u64,
        alias: Option<&str>,
    ) -> ResolveResult<PageReference> {
        Ok(PageReference::new(page_id, version, alias.map(str::to_string)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_resolver() {
        let page = DetachedPageResolver.resolve(4, 5, Some("abc")).unwrap();
        assert_eq!(page, PageReference::new(4, 5, Some("abc".into())));
    }

    #[test]
    fn test_error_messages() {
        let err = ResolveError::Expired { page_id: 3, version: 1 };
        assert_eq!(err.to_string(), "page 3 (version 1) has expired");
    }
}
