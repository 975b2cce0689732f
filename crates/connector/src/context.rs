use std::time::Duration;

use tokio_util::sync::CancellationToken;

use tessera_core::DEFAULT_QUERY_AND_EXEC_TIMEOUT;

use crate::error::ConnectorError;

/// Per-invocation execution context handed to `Connector::run`.
///
/// Carries the cancellation token the dispatcher races the invocation
/// against, plus the deadline it enforces. Adapters should call
/// [`check_cancelled`](Self::check_cancelled) between I/O steps so a
/// cancelled invocation stops promptly instead of running to completion.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    /// Token cancelled when the caller abandons the invocation.
    pub cancellation: CancellationToken,
    deadline: Duration,
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl InvocationContext {
    /// A fresh context with an unfired token and the default deadline.
    pub fn new() -> Self {
        Self {
            cancellation: CancellationToken::new(),
            deadline: DEFAULT_QUERY_AND_EXEC_TIMEOUT,
        }
    }

    /// Replace the cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Replace the deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// The deadline the dispatcher enforces on this invocation.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Fail fast if the invocation has been cancelled.
    pub fn check_cancelled(&self) -> Result<(), ConnectorError> {
        if self.cancellation.is_cancelled() {
            return Err(ConnectorError::Cancelled);
        }
        Ok(())
    }
}
