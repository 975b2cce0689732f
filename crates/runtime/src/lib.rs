//! # Tessera Runtime
//!
//! The dispatcher that carries one action request end-to-end: catalog and
//! registry lookup, remote-virtual resource resolution, option validation,
//! and execution under a deadline and a cancellation token.
//!
//! The adapter's result envelope is returned verbatim; the dispatcher never
//! retries, parallelizes, or caches an invocation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dispatcher;
mod error;
mod source_manager;

pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use source_manager::SourceManager;
