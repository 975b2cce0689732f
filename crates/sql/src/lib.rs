//! # Tessera SQL
//!
//! SQL-side helpers shared by the relational adapters:
//!
//! - [`escape`] — turn a templated query into a parameterized statement and
//!   its ordered argument list
//! - [`PlaceholderStyle`] — per-dialect placeholder syntax (`$N` for the
//!   postgres family, `?` elsewhere)
//! - [`classify`] — leading-keyword statement classification, used to decide
//!   whether an execution returns rows or an affected-row count
//! - [`rows`] — normalization of driver rows into JSON objects
//!
//! None of this executes SQL; adapters feed the results to their drivers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod dialect;
mod escape;
pub mod rows;

pub use classify::{SqlKind, classify};
pub use dialect::PlaceholderStyle;
pub use escape::escape;
