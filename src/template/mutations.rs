//! Partial updates of template files.

use super::{TemplateCategory, TemplateFile};
use chrono::{DateTime, Utc};

/// A partial update: only `Some` fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplatePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<TemplateCategory>,
    pub content: Option<String>,
    pub active: Option<bool>,
}

impl TemplatePatch {
    /// Whether the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.content.is_none()
            && self.active.is_none()
    }
}

impl TemplateFile {
    /// Apply a patch and stamp the update time.
    ///
    /// Returns the names of the fields that were set.
    pub fn apply_patch(&mut self, patch: TemplatePatch, now: DateTime<Utc>) -> Vec<&'static str> {
        let mut changed = Vec::new();
        let fm = &mut self.frontmatter;

        if let Some(name) = patch.name {
            fm.name = name;
            changed.push("name");
        }
        if let Some(description) = patch.description {
            fm.description = description;
            changed.push("description");
        }
        if let Some(category) = patch.category {
            fm.category = category;
            changed.push("category");
        }
        if let Some(active) = patch.active {
            fm.active = active;
            changed.push("active");
        }
        if let Some(content) = patch.content {
            self.content = content;
            changed.push("content");
        }

        if !changed.is_empty() {
            self.frontmatter.updated = Some(now);
        }

        changed
    }

    /// Replace the content, stamping the update time.
    pub fn set_content(&mut self, content: String, now: DateTime<Utc>) {
        self.content = content;
        self.frontmatter.updated = Some(now);
    }
}
