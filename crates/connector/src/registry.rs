use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::contract::Connector;

/// Lookup from adapter name to a live connector implementation.
///
/// Populated once at startup and read-only afterwards; cheap to share
/// behind an `Arc`. Registering a second connector under the same name
/// replaces the first.
#[derive(Default)]
pub struct ConnectorRegistry {
    connectors: HashMap<String, Arc<dyn Connector>>,
}

impl ConnectorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connector under its own reported name.
    pub fn register(&mut self, connector: Arc<dyn Connector>) {
        self.connectors
            .insert(connector.name().to_string(), connector);
    }

    /// Look up a connector by adapter name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Connector>> {
        self.connectors.get(name)
    }

    /// Whether a connector is registered under the name.
    pub fn contains(&self, name: &str) -> bool {
        self.connectors.contains_key(name)
    }

    /// Number of registered connectors.
    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    /// Iterate registered `(name, connector)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Connector>)> {
        self.connectors.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Debug for ConnectorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.connectors.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ConnectorRegistry")
            .field("count", &self.connectors.len())
            .field("names", &names)
            .finish()
    }
}
