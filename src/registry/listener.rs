//! Listener interface registry.
//!
//! # Responsibilities
//! - Map listener names (as they appear in tokens) to interface descriptors
//! - Accept registrations at any time, concurrently with lookups
//!
//! # Design Decisions
//! - Lookup is exact and case-sensitive
//! - Descriptors are cheap to clone (shared name)

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use serde::{Serialize, Serializer};

/// A named capability a component may be invoked through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListenerInterface {
    name: Arc<str>,
}

impl ListenerInterface {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ListenerInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for ListenerInterface {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// Resolves a listener name to its descriptor.
pub trait ListenerRegistry: Send + Sync + fmt::Debug {
    fn lookup(&self, name: &str) -> Option<ListenerInterface>;
}

/// Thread-safe registry of listener interfaces.
#[derive(Debug, Clone, Default)]
pub struct ListenerInterfaceRegistry {
    inner: Arc<DashMap<String, ListenerInterface>>,
}

impl ListenerInterfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the given names.
    pub fn with_interfaces<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let registry = Self::new();
        for name in names {
            registry.register(name.as_ref());
        }
        registry
    }

    /// Register an interface by name, returning its descriptor.
    /// Registering an existing name returns the already-stored descriptor.
    pub fn register(&self, name: &str) -> ListenerInterface {
        let interface = self
            .inner
            .entry(name.to_string())
            .or_insert_with(|| ListenerInterface::new(name))
            .clone();
        tracing::trace!(interface = %interface, "Listener interface registered");
        interface
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl ListenerRegistry for ListenerInterfaceRegistry {
    fn lookup(&self, name: &str) -> Option<ListenerInterface> {
        self.inner.get(name).map(|entry| entry.value().clone())
    }
}
