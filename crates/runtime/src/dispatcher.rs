use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use tessera_connector::{
    ConnectorRegistry, InvocationContext, RawActionOptions, catalog,
};
use tessera_core::{ActionRequest, DEFAULT_QUERY_AND_EXEC_TIMEOUT, JsonMap, RunResult};

use crate::error::DispatchError;
use crate::source_manager::SourceManager;

/// Carries one action request end-to-end through a connector.
///
/// The caller resolves resource options for persisted resources and hands
/// them in; remote-virtual adapters override them via the configured
/// [`SourceManager`]. Execution runs under the dispatcher's deadline and
/// the caller's cancellation token, and the adapter's envelope is returned
/// verbatim.
pub struct Dispatcher {
    registry: Arc<ConnectorRegistry>,
    source_manager: Option<Arc<dyn SourceManager>>,
    deadline: Duration,
}

impl Dispatcher {
    /// A dispatcher over a populated registry with the default deadline.
    pub fn new(registry: Arc<ConnectorRegistry>) -> Self {
        Self {
            registry,
            source_manager: None,
            deadline: DEFAULT_QUERY_AND_EXEC_TIMEOUT,
        }
    }

    /// Attach the source-manager port for remote-virtual adapters.
    #[must_use]
    pub fn with_source_manager(mut self, source_manager: Arc<dyn SourceManager>) -> Self {
        self.source_manager = Some(source_manager);
        self
    }

    /// Override the invocation deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Execute one action request.
    ///
    /// Fails before touching the adapter when the adapter is unknown, when a
    /// remote-virtual request cannot be resolved, or when the action options
    /// do not validate. Once running, the invocation is raced against
    /// `cancel` and the deadline.
    ///
    /// On failure the typed error carries the classification; hosting
    /// services that need the wire shape render it through
    /// [`DispatchError::envelope`], which yields the unsuccessful envelope
    /// with the message in its extras.
    pub async fn execute(
        &self,
        request: &ActionRequest,
        resource_options: JsonMap,
        cancel: CancellationToken,
    ) -> Result<RunResult, DispatchError> {
        let action_type = request.action_type.as_str();
        if !catalog::contains(action_type) {
            return Err(DispatchError::unknown_adapter(action_type));
        }
        let connector = self
            .registry
            .get(action_type)
            .ok_or_else(|| DispatchError::unknown_adapter(action_type))?;
        debug!(
            action_type,
            display_name = %request.display_name,
            "dispatching action"
        );

        let resource_options = if catalog::needs_source_manager_lookup(action_type) {
            let source_manager = self.source_manager.as_ref().ok_or_else(|| {
                DispatchError::driver(
                    "no source manager configured for remote-virtual adapter",
                )
            })?;
            let resource_id = request.resource_id.as_deref().ok_or_else(|| {
                DispatchError::validation(
                    "resourceID is required for remote-virtual adapters",
                )
            })?;
            source_manager.resource_options(resource_id).await?
        } else {
            resource_options
        };

        connector.validate_action_options(&request.content)?;

        let raw = RawActionOptions::new(request.content.clone());
        let ctx = InvocationContext::new()
            .with_cancellation(cancel.clone())
            .with_deadline(self.deadline);

        if cancel.is_cancelled() {
            return Err(DispatchError::Cancelled);
        }

        let run = connector.run(&resource_options, &request.content, &raw, &ctx);
        let outcome = tokio::select! {
            () = cancel.cancelled() => return Err(DispatchError::Cancelled),
            outcome = tokio::time::timeout(self.deadline, run) => outcome,
        };

        match outcome {
            Err(_elapsed) => Err(DispatchError::Timeout),
            Ok(result) => {
                let envelope = result.map_err(DispatchError::from)?;
                debug!(
                    action_type,
                    success = envelope.success,
                    rows = envelope.rows.len(),
                    "action completed"
                );
                Ok(envelope)
            }
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("has_source_manager", &self.source_manager.is_some())
            .field("deadline", &self.deadline)
            .finish()
    }
}
