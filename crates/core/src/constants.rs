use std::time::Duration;

/// Default wall-clock deadline for one adapter invocation.
///
/// Every query, exec, upload, or probe issued from `Connector::run` executes
/// under this deadline unless the adapter sets a tighter one explicitly.
pub const DEFAULT_QUERY_AND_EXEC_TIMEOUT: Duration = Duration::from_secs(30);

/// Key under which the template context travels inside an action's `content`
/// mapping on the wire.
pub const CONTEXT_KEY: &str = "context";
