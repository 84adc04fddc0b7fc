//! Template ID validation and filename generation.

use crate::error::{Result, TradeDocsError};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Prefix of every template ID.
pub const ID_PREFIX: &str = "TPL-";

/// File extension of stored templates.
pub const TEMPLATE_EXTENSION: &str = "html";

static TEMPLATE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^TPL-\d{3,}$").expect("Invalid template ID regex"));

/// Validate a template ID and normalize it to upper case.
///
/// Valid IDs match `TPL-NNN` with at least three digits. Path traversal
/// characters are rejected outright.
pub fn validate_template_id(id: &str) -> Result<String> {
    if id.contains('/') || id.contains('\\') || id.contains("..") {
        return Err(TradeDocsError::UserError(format!(
            "invalid template ID '{}': contains path traversal characters.\n\
             Template IDs must be in the format TPL-NNN (e.g., TPL-001).",
            id
        )));
    }

    let normalized = id.trim().to_uppercase();

    if !TEMPLATE_ID_REGEX.is_match(&normalized) {
        return Err(TradeDocsError::UserError(format!(
            "invalid template ID '{}': must be in the format TPL-NNN (e.g., TPL-001).",
            id
        )));
    }

    Ok(normalized)
}

/// Format a template ID from its number, zero-padded to three digits.
pub fn generate_template_id(number: u32) -> String {
    format!("{}{:03}", ID_PREFIX, number)
}

/// The numeric part of a template ID.
pub fn template_number(id: &str) -> Option<u32> {
    id.strip_prefix(ID_PREFIX)?.parse().ok()
}

/// Extract the template ID from a stored filename (`TPL-NNN-slug.html`).
pub fn id_from_filename(path: &Path) -> Option<String> {
    if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION) {
        return None;
    }

    let stem = path.file_stem()?.to_str()?;
    let rest = stem.strip_prefix(ID_PREFIX)?;
    let digits = rest.split('-').next()?;

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(format!("{}{}", ID_PREFIX, digits))
}

/// Slugify a template name for use in its filename.
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut last_was_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen && !slug.is_empty() {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() > 50 {
        match slug[..50].rfind('-') {
            Some(pos) => slug.truncate(pos),
            None => slug.truncate(50),
        }
    }

    if slug.is_empty() {
        slug = "untitled".to_string();
    }

    slug
}

/// Filename for a template: `TPL-001-standard-purchase-order.html`.
pub fn template_filename(id: &str, name: &str) -> String {
    format!("{}-{}.{}", id, slugify(name), TEMPLATE_EXTENSION)
}
