use serde::de::DeserializeOwned;
use serde_json::Value;
use tessera_core::JsonMap;
use tessera_core::constants::CONTEXT_KEY;

use crate::error::ConnectorError;

/// Declarative constraints checked after structural decoding.
///
/// Adapters implement this on their typed option records to express field
/// constraints serde cannot (port ranges, mutually exclusive auth modes,
/// non-empty hosts). The default implementation accepts everything.
pub trait ValidateOptions {
    /// Check declared constraints. Returns a human-readable message on
    /// violation.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Decode a dynamic options mapping into an adapter's typed record and check
/// its declared constraints.
///
/// Field-name matching and type coercion are serde's; no I/O happens here.
/// Both decode and constraint failures surface as
/// [`ConnectorError::Validation`].
pub fn decode_options<T>(options: &JsonMap) -> Result<T, ConnectorError>
where
    T: DeserializeOwned + ValidateOptions,
{
    let typed: T = serde_json::from_value(Value::Object(options.clone()))
        .map_err(|e| ConnectorError::validation(e.to_string()))?;
    typed.validate().map_err(ConnectorError::validation)?;
    Ok(typed)
}

/// The unmodified action `content` handed to `Connector::run`, next to the
/// typed view the adapter decoded from it.
///
/// Adapters pull template strings out of `content()` and resolve them
/// against `context()` through the template engine and the SQL escaper; the
/// runtime never rewrites either mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawActionOptions {
    content: JsonMap,
}

impl RawActionOptions {
    /// Wrap an action's `content` mapping.
    pub fn new(content: JsonMap) -> Self {
        Self { content }
    }

    /// The unmodified `content` mapping.
    pub fn content(&self) -> &JsonMap {
        &self.content
    }

    /// A value from `content` by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.content.get(key)
    }

    /// The template context nested under the `"context"` key.
    ///
    /// Empty when the key is absent or not an object.
    pub fn context(&self) -> JsonMap {
        match self.content.get(CONTEXT_KEY) {
            Some(Value::Object(map)) => map.clone(),
            _ => JsonMap::new(),
        }
    }
}
