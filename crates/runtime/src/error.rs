use tessera_connector::ConnectorError;
use tessera_core::RunResult;
use tessera_template::TemplateError;

/// Failure of one dispatched invocation.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum DispatchError {
    /// The request named an adapter outside the catalog, or one with no
    /// registered connector.
    #[error("unknown adapter `{0}`")]
    UnknownAdapter(String),

    /// The action options failed structural decoding or a declared
    /// constraint.
    #[error("validation: {0}")]
    Validation(String),

    /// A template value could not be encoded during substitution.
    #[error("template encoding: {0}")]
    TemplateEncoding(String),

    /// The adapter's transport failed, or the runtime was misconfigured for
    /// the adapter.
    #[error("driver: {0}")]
    Driver(String),

    /// The invocation did not complete within its deadline.
    #[error("invocation deadline elapsed")]
    Timeout,

    /// The invocation's cancellation token fired.
    #[error("invocation cancelled")]
    Cancelled,
}

impl DispatchError {
    /// Create an unknown-adapter error.
    pub fn unknown_adapter(name: impl Into<String>) -> Self {
        Self::UnknownAdapter(name.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a driver error.
    pub fn driver(msg: impl Into<String>) -> Self {
        Self::Driver(msg.into())
    }

    /// Returns `true` for failures the caller can fix by changing the
    /// request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnknownAdapter(_) | Self::Validation(_))
    }

    /// An unsuccessful result envelope carrying this error's message.
    pub fn envelope(&self) -> RunResult {
        RunResult::failure(self.to_string())
    }
}

impl From<ConnectorError> for DispatchError {
    fn from(err: ConnectorError) -> Self {
        match err {
            ConnectorError::Validation(msg) => Self::Validation(msg),
            ConnectorError::Cancelled => Self::Cancelled,
            other => Self::Driver(other.to_string()),
        }
    }
}

impl From<TemplateError> for DispatchError {
    fn from(err: TemplateError) -> Self {
        Self::TemplateEncoding(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn client_errors_are_flagged() {
        assert!(DispatchError::unknown_adapter("fax-machine").is_client_error());
        assert!(DispatchError::validation("bad options").is_client_error());
        assert!(!DispatchError::driver("connection refused").is_client_error());
        assert!(!DispatchError::Timeout.is_client_error());
    }

    #[test]
    fn envelope_carries_message() {
        let envelope = DispatchError::unknown_adapter("fax-machine").envelope();
        assert!(!envelope.success);
        assert_eq!(envelope.message(), Some("unknown adapter `fax-machine`"));
    }

    #[test]
    fn connector_errors_convert() {
        let validation: DispatchError = ConnectorError::validation("missing host").into();
        assert!(matches!(validation, DispatchError::Validation(_)));

        let cancelled: DispatchError = ConnectorError::Cancelled.into();
        assert!(matches!(cancelled, DispatchError::Cancelled));

        let driver: DispatchError = ConnectorError::driver("timeout").into();
        assert!(matches!(driver, DispatchError::Driver(_)));
    }
}
