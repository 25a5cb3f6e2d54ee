//! Dispatch descriptors produced by decoding and consumed by encoding.

use std::fmt;

use serde::Serialize;

use crate::registry::ListenerInterface;

/// Resolved identity of a page instance.
///
/// Only the external resolver turns this into a live page; the codec treats
/// it as an opaque carrier of id, version and alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PageReference {
    page_id: u64,
    version: u64,
    alias: Option<String>,
}

impl PageReference {
    pub fn new(page_id: u64, version: u64, alias: Option<String>) -> Self {
        Self {
            page_id,
            version,
            alias,
        }
    }

    pub fn page_id(&self) -> u64 {
        self.page_id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

/// Colon-delimited address of a component within a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct ComponentPath {
    segments: Vec<String>,
}

impl ComponentPath {
    /// Build from raw segments. Segments are checked when encoding.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a `a:b:c` path.
    pub fn parse(path: &str) -> Self {
        Self::new(path.split(':'))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ComponentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(":"))
    }
}

impl From<ComponentPath> for String {
    fn from(path: ComponentPath) -> Self {
        path.to_string()
    }
}

/// What a decoded Url asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestHandler {
    /// Render the page as-is.
    RenderPage { page: PageReference },
    /// Invoke a listener interface on a component of the page.
    InvokeListener {
        page: PageReference,
        component_path: ComponentPath,
        interface: ListenerInterface,
        behavior_index: Option<u32>,
    },
}

impl RequestHandler {
    pub fn render(page: PageReference) -> Self {
        RequestHandler::RenderPage { page }
    }

    pub fn listener(
        page: PageReference,
        component_path: ComponentPath,
        interface: ListenerInterface,
        behavior_index: Option<u32>,
    ) -> Self {
        RequestHandler::InvokeListener {
            page,
            component_path,
            interface,
            behavior_index,
        }
    }

    pub fn page(&self) -> &PageReference {
        match self {
            RequestHandler::RenderPage { page } => page,
            RequestHandler::InvokeListener { page, .. } => page,
        }
    }
}
