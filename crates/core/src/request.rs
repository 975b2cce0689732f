use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::JsonMap;
use crate::constants::CONTEXT_KEY;

/// One invocation of an adapter, as described by the builder front-end.
///
/// The request is transient: it is created per invocation and destroyed with
/// the response. `content` is adapter-specific and opaque to the runtime; the
/// runtime only traverses it as mappings and strings when performing template
/// substitution.
///
/// Wire field names follow the builder protocol (`actionType`, `displayName`,
/// `resourceID`, `content`). The template context travels nested inside
/// `content` under the `"context"` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    /// Adapter name; must resolve through the adapter catalog.
    #[serde(rename = "actionType")]
    pub action_type: String,

    /// Human-readable name shown in the builder UI.
    #[serde(rename = "displayName", default)]
    pub display_name: String,

    /// Opaque reference to a saved resource. Absent for virtual adapters.
    #[serde(rename = "resourceID", default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,

    /// Adapter-specific options. Always present, possibly empty.
    #[serde(default)]
    pub content: JsonMap,
}

impl ActionRequest {
    /// Create a request with the given adapter name and content.
    pub fn new(action_type: impl Into<String>, content: JsonMap) -> Self {
        Self {
            action_type: action_type.into(),
            display_name: String::new(),
            resource_id: None,
            content,
        }
    }

    /// Attach a display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Attach a resource id.
    pub fn with_resource_id(mut self, id: impl Into<String>) -> Self {
        self.resource_id = Some(id.into());
        self
    }

    /// The template context nested inside `content`.
    ///
    /// Returns an empty mapping when the `"context"` key is absent or is not
    /// an object. SQL actions require the key to be present; the owning
    /// adapter enforces that during action validation.
    pub fn context(&self) -> JsonMap {
        match self.content.get(CONTEXT_KEY) {
            Some(Value::Object(map)) => map.clone(),
            _ => JsonMap::new(),
        }
    }
}
