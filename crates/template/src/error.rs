/// Error type for template substitution.
///
/// Substitution is deliberately forgiving — unbound keys and malformed
/// braces degrade to literal text — so the only failure is a context value
/// that cannot be JSON-encoded during replacement.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// A non-primitive context value could not be JSON-encoded.
    #[error("cannot encode value for `{{{{ {key} }}}}`: {reason}")]
    Encoding {
        /// The lookup key whose bound value failed to encode.
        key: String,
        /// The underlying serializer message.
        reason: String,
    },
}

impl TemplateError {
    /// Create an encoding failure for the given key.
    pub fn encoding(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Encoding {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
