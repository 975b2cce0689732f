use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tessera_core::{JsonMap, RunResult};

use crate::context::InvocationContext;
use crate::error::ConnectorError;
use crate::options::RawActionOptions;

/// Schema description of the data source behind a resource.
///
/// `schema` is adapter-shaped: relational adapters report tables and column
/// types, document stores report collections, API adapters may report
/// nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaInfo {
    /// Display name of the described resource.
    #[serde(rename = "resourceName", default)]
    pub resource_name: String,
    /// Adapter-shaped schema description.
    #[serde(default)]
    pub schema: JsonMap,
}

impl MetaInfo {
    /// Describe a resource by name and schema mapping.
    pub fn new(resource_name: impl Into<String>, schema: JsonMap) -> Self {
        Self {
            resource_name: resource_name.into(),
            schema,
        }
    }
}

/// The capability contract every adapter implements.
///
/// The two validators are pure: they inspect mappings and perform no I/O, so
/// the dispatcher can call them before spending a connection. The three
/// async capabilities may open transports; any transport opened inside a
/// call must be released on every exit path, success or failure.
#[async_trait]
pub trait Connector: Send + Sync {
    /// The cataloged adapter name this implementation answers to.
    fn name(&self) -> &'static str;

    /// Check a resource options mapping for shape and declared constraints.
    fn validate_resource_options(&self, options: &JsonMap) -> Result<(), ConnectorError>;

    /// Check an action options mapping for shape and declared constraints.
    fn validate_action_options(&self, options: &JsonMap) -> Result<(), ConnectorError>;

    /// Verify the resource options can reach the external system.
    async fn test_connection(&self, resource: &JsonMap) -> Result<(), ConnectorError>;

    /// Describe the data source behind the resource.
    async fn meta_info(&self, resource: &JsonMap) -> Result<MetaInfo, ConnectorError>;

    /// Execute one action against the resource.
    ///
    /// `action` is the typed-decodable options mapping, `raw` the same
    /// mapping untouched plus its template context. The returned envelope is
    /// passed to the caller verbatim.
    async fn run(
        &self,
        resource: &JsonMap,
        action: &JsonMap,
        raw: &RawActionOptions,
        ctx: &InvocationContext,
    ) -> Result<RunResult, ConnectorError>;
}
