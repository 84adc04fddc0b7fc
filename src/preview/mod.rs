//! Preview rendering with synthetic sample data.
//!
//! This module provides:
//!
//! - **Sample context**: hand-authored order, parties, shipment and
//!   signature values plus two or more rows for every repeating section the
//!   catalog advertises
//! - **Sample templates**: one starter template per document category,
//!   used by `init` to seed a new store
//! - **Error block**: a fallback rendering so editors never see a crash
//!   while a template is half-written

mod sample;
mod templates;


pub use sample::sample_context;
pub use templates::{SampleTemplate, sample_templates};

use crate::engine::{TemplateError, render};

/// Render template content against the sample context.
///
/// # Errors
///
/// Returns a [`TemplateError`] when section tags are unbalanced.
pub fn preview_template(content: &str) -> Result<String, TemplateError> {
    render(content, sample_context())
}

/// Render a preview that never fails.
///
/// Malformed templates produce an [`error_block`] in place of the document.
pub fn render_preview(content: &str) -> String {
    preview_template(content).unwrap_or_else(|e| error_block(&e))
}

/// A visibly red HTML block describing a template error.
pub fn error_block(error: &TemplateError) -> String {
    format!(
        "<div class=\"template-error\" style=\"color: #b91c1c; background: #fef2f2; \
         border: 1px solid #b91c1c; padding: 12px; font-family: monospace;\">\
         <strong>Template error:</strong> {}</div>",
        escape_html(&error.to_string())
    )
}

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
