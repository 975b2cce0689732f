/// Error type for adapter operations.
///
/// Distinguishes configuration problems (caller's fault, surfaced as 4xx by
/// the hosting service) from transport problems (the external system's
/// fault) so the dispatcher can classify failures without inspecting
/// message strings.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum ConnectorError {
    /// An options mapping did not decode into the adapter's typed record,
    /// or violated a declared field constraint.
    #[error("validation: {0}")]
    Validation(String),

    /// The adapter's underlying transport failed (network, authentication,
    /// protocol, server-reported).
    #[error("driver: {0}")]
    Driver(String),

    /// Execution cancelled via the invocation's cancellation token.
    #[error("cancelled")]
    Cancelled,
}

impl ConnectorError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a driver error.
    pub fn driver(msg: impl Into<String>) -> Self {
        Self::Driver(msg.into())
    }

    /// Returns `true` for failures caused by the caller's configuration.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
