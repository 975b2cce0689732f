//! # Tessera Connector
//!
//! The capability contract every adapter implements, plus the lookup tables
//! the dispatcher uses to find adapters.
//!
//! ## Core Types
//!
//! - [`Connector`] — the five-capability trait (validate resource, validate
//!   action, test connection, meta info, run)
//! - [`catalog`] — the fixed `name ↔ numeric id` pairing and taxonomy sets
//!   (virtual, local-virtual, remote-virtual, source-manager lookup)
//! - [`ConnectorRegistry`] — `name → Arc<dyn Connector>` lookup, populated
//!   at startup and read-only afterwards
//! - [`RawActionOptions`] — the unmodified action `content` plus its
//!   template context, handed untouched to `run`
//! - [`InvocationContext`] — per-invocation cancellation token and deadline
//! - [`decode_options`] — serde-based structural decoding of dynamic option
//!   mappings into typed records with declarative constraints
//!
//! Individual adapters live outside this crate; they depend on it and plug
//! into the registry at startup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Fixed adapter identity tables and taxonomy predicates.
pub mod catalog;
/// The capability trait and its supporting types.
pub mod contract;
/// Per-invocation execution context.
pub mod context;
/// Error type for the adapter seam.
pub mod error;
/// Dynamic-to-typed decoding of option mappings.
pub mod options;
/// Runtime registry of connector implementations.
pub mod registry;

pub use contract::{Connector, MetaInfo};
pub use context::InvocationContext;
pub use error::ConnectorError;
pub use options::{RawActionOptions, ValidateOptions, decode_options};
pub use registry::ConnectorRegistry;
