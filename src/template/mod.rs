//! Template file model for tradedocs.
//!
//! This module provides parsing and serialization of stored document
//! templates, which use YAML frontmatter followed by the HTML content. The
//! implementation supports:
//!
//! - Round-trip preservation of unknown YAML fields (forward compatibility)
//! - Exact preservation of the HTML content
//! - Partial updates through [`TemplatePatch`]
//!
//! # Template File Format
//!
//! ```text
//! ---
//! id: TPL-001
//! name: Standard Purchase Order
//! category: purchase_order
//! active: true
//! ---
//! <html>
//!   <h1>Purchase Order {{order_number}}</h1>
//! </html>
//! ```

mod io;
mod mutations;

#[cfg(test)]
mod tests;

pub use mutations::TemplatePatch;

use crate::error::{Result, TradeDocsError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Document category of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    PurchaseOrder,
    SalesOrder,
    BillOfLading,
    CommercialInvoice,
    Other,
}

impl TemplateCategory {
    /// All categories in display order.
    pub const ALL: [TemplateCategory; 5] = [
        TemplateCategory::PurchaseOrder,
        TemplateCategory::SalesOrder,
        TemplateCategory::BillOfLading,
        TemplateCategory::CommercialInvoice,
        TemplateCategory::Other,
    ];

    /// The snake_case key used on disk and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::PurchaseOrder => "purchase_order",
            TemplateCategory::SalesOrder => "sales_order",
            TemplateCategory::BillOfLading => "bill_of_lading",
            TemplateCategory::CommercialInvoice => "commercial_invoice",
            TemplateCategory::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TemplateCategory::PurchaseOrder => "Purchase Order",
            TemplateCategory::SalesOrder => "Sales Order",
            TemplateCategory::BillOfLading => "Bill of Lading",
            TemplateCategory::CommercialInvoice => "Commercial Invoice",
            TemplateCategory::Other => "Other",
        }
    }

    /// Parse a category key, accepting `-` in place of `_` and any case.
    pub fn parse(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| {
                let valid: Vec<_> = Self::ALL.iter().map(|c| c.as_str()).collect();
                TradeDocsError::UserError(format!(
                    "invalid category '{}'. Valid categories: {}",
                    s,
                    valid.join(", ")
                ))
            })
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed template file with frontmatter and HTML content.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    /// The parsed frontmatter fields.
    pub frontmatter: TemplateFrontmatter,
    /// The HTML content (everything after the closing `---` line).
    pub content: String,
}

/// Template frontmatter fields.
///
/// Unknown fields are preserved in `extra` for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateFrontmatter {
    /// Template identifier (e.g., "TPL-001").
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Document category.
    #[serde(default = "default_category")]
    pub category: TemplateCategory,

    /// Inactive templates are hidden from listings and refused by `render`
    /// unless forced.
    #[serde(default = "default_true")]
    pub active: bool,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    /// Any fields not explicitly defined above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

fn default_category() -> TemplateCategory {
    TemplateCategory::Other
}

fn default_true() -> bool {
    true
}

impl TemplateFile {
    /// Template identifier.
    pub fn id(&self) -> &str {
        &self.frontmatter.id
    }

    /// Parse a template file from its content string.
    ///
    /// Both LF and CRLF line endings are accepted. The HTML content is kept
    /// exactly as written, including its line endings.
    pub fn parse(text: &str) -> Result<Self> {
        let (frontmatter_yaml, content) = split_frontmatter(text)?;

        let frontmatter: TemplateFrontmatter = serde_yaml::from_str(frontmatter_yaml)
            .map_err(|e| {
                TradeDocsError::UserError(format!("failed to parse template frontmatter: {}", e))
            })?;

        Ok(Self {
            frontmatter,
            content: content.to_string(),
        })
    }
}

/// Split a template file into its frontmatter YAML and HTML content.
///
/// The frontmatter sits between two lines consisting of `---` alone. Later
/// `---` lines belong to the content.
fn split_frontmatter(text: &str) -> Result<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    if !lines.next().is_some_and(is_delimiter) {
        return Err(TradeDocsError::UserError(
            "template file must start with '---' frontmatter delimiter".to_string(),
        ));
    }

    let yaml_start = text.find('\n').map_or(text.len(), |i| i + 1);
    let mut offset = yaml_start;
    for line in lines {
        if is_delimiter(line) {
            return Ok((&text[yaml_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(TradeDocsError::UserError(
        "template file missing closing '---' frontmatter delimiter".to_string(),
    ))
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == "---"
}
