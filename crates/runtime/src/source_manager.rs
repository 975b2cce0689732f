use async_trait::async_trait;
use tessera_core::JsonMap;

use crate::error::DispatchError;

/// Port to the service that holds configuration for remote-virtual
/// adapters.
///
/// Remote-virtual adapters have no saved resource record; their resource
/// options live in an external source-of-truth service and are fetched by
/// resource id at dispatch time.
#[async_trait]
pub trait SourceManager: Send + Sync {
    /// Resolve resource options for a remote-virtual invocation.
    async fn resource_options(&self, resource_id: &str) -> Result<JsonMap, DispatchError>;
}
