//! Structural errors reported by the template engine.

use thiserror::Error;

/// Error type for template rendering failures.
///
/// Only section structure is ever an error. Missing keys, stray braces and
/// unrecognized `{{...}}` text all render without complaint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{{#name}}` was opened but never closed.
    #[error("section '{{{{#{name}}}}}' opened at position {position} is never closed")]
    UnclosedSection {
        /// The section name.
        name: String,
        /// Byte offset of the opening tag.
        position: usize,
    },

    /// A `{{/name}}` appeared with no section open.
    #[error("closing tag '{{{{/{name}}}}}' at position {position} has no matching '{{{{#{name}}}}}'")]
    UnexpectedClose {
        /// The section name in the closing tag.
        name: String,
        /// Byte offset of the closing tag.
        position: usize,
    },

    /// A `{{/found}}` closed a different section than the innermost open one.
    #[error(
        "closing tag '{{{{/{found}}}}}' at position {position} does not match open section '{{{{#{expected}}}}}'"
    )]
    MismatchedClose {
        /// The innermost open section.
        expected: String,
        /// The name found in the closing tag.
        found: String,
        /// Byte offset of the closing tag.
        position: usize,
    },
}

impl TemplateError {
    /// The section name the error is about.
    pub fn section_name(&self) -> &str {
        match self {
            TemplateError::UnclosedSection { name, .. } => name,
            TemplateError::UnexpectedClose { name, .. } => name,
            TemplateError::MismatchedClose { found, .. } => found,
        }
    }

    /// Byte offset in the template where the problem was detected.
    pub fn position(&self) -> usize {
        match self {
            TemplateError::UnclosedSection { position, .. }
            | TemplateError::UnexpectedClose { position, .. }
            | TemplateError::MismatchedClose { position, .. } => *position,
        }
    }
}
