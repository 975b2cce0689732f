//! # Tessera Core
//!
//! Shared types for the Tessera action runtime.
//!
//! This crate defines the vocabulary every other runtime crate speaks:
//!
//! - [`ActionRequest`] — one invocation of an adapter, as delivered by the
//!   builder front-end
//! - [`RunResult`] — the uniform envelope every adapter returns
//! - [`JsonMap`] — the dynamic string-keyed mapping used for adapter options
//!   and template contexts
//! - [`constants`] — runtime-wide constants such as the default execution
//!   deadline
//!
//! No I/O happens here; the crate is pure data.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Runtime-wide constants.
pub mod constants;
/// Result envelope returned by every adapter.
pub mod envelope;
/// Action request model.
pub mod request;

pub use constants::DEFAULT_QUERY_AND_EXEC_TIMEOUT;
pub use envelope::RunResult;
pub use request::ActionRequest;

/// Dynamic string-keyed mapping with JSON-compatible values.
///
/// Adapter options, template contexts, and envelope extras all use this
/// shape. Typed decoding happens at the adapter seam, never in the core.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
