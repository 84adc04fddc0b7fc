//! Template substitution engine.
//!
//! Turns HTML template content plus a data context into final HTML. It is
//! used for:
//!
//! - Full renders of stored templates against real order data
//! - Preview renders against the built-in sample context
//!
//! # Syntax
//!
//! - `{{key}}` - Substitutes the value of `key`
//! - `{{#key}}...{{/key}}` - Repeats the body once per element of the array at `key`
//!
//! Keys are case-sensitive and consist of ASCII letters, digits and underscores.
//!
//! # Error Handling
//!
//! Missing data degrades gracefully: absent keys render as empty strings so
//! partial records can be previewed while editing. Only unbalanced section
//! tags are reported, as a [`TemplateError`].
//!
//! Rendering already-rendered output again is not supported; literal `{{`
//! sequences in data values may be picked up as placeholders.

mod error;
mod parser;
mod render;
mod scope;


pub use error::TemplateError;
pub use render::{DataContext, TemplateOutline, outline, render};

pub(crate) use parser::is_key;
