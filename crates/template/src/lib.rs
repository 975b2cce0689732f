//! # Tessera Template
//!
//! `{{ key }}` substitution for action content.
//!
//! The builder describes actions as JSON whose string fields may contain
//! substitution sites of the form `{{ key }}`. This crate recognizes those
//! sites and either extracts the keys or replaces each site with the
//! stringified value bound to its whitespace-trimmed key in a context
//! mapping. The interior of a site is an opaque lookup key — it is compared
//! literally, never evaluated.
//!
//! ## Recognition rules
//!
//! - `{{` opens a site, `}}` closes it; single braces are literal.
//! - In a run of three or more `{`, the two rightmost become the opener.
//! - A `{` inside an open site breaks it: the buffered `{{` and captured
//!   text are emitted literally.
//! - Keys absent from the context leave their `{{ … }}` site verbatim.
//!
//! ## Example
//!
//! ```rust
//! use tessera_template::substitute;
//!
//! let mut ctx = serde_json::Map::new();
//! ctx.insert("name".into(), serde_json::json!("world"));
//!
//! let out = substitute("hello {{ name }}", &ctx).unwrap();
//! assert_eq!(out, "hello world");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod error;
/// Low-level scanner splitting a template into literal and site segments.
pub mod scanner;

pub use engine::{extract, substitute};
pub use error::TemplateError;
