//! File I/O operations for template files.

use super::TemplateFile;
use crate::error::{Result, TradeDocsError};
use std::path::Path;

impl TemplateFile {
    /// Load a template file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            TradeDocsError::StorageError(format!(
                "failed to read template file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&text).map_err(|e| {
            TradeDocsError::UserError(format!("{} (in '{}')", e, path.display()))
        })
    }

    /// Atomically save the template file to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = self.to_file_string()?;
        crate::fs::atomic_write_file(path, &text)
    }

    /// Serialize the template file to its on-disk form.
    pub fn to_file_string(&self) -> Result<String> {
        let frontmatter_yaml = serde_yaml::to_string(&self.frontmatter).map_err(|e| {
            TradeDocsError::StorageError(format!(
                "failed to serialize template frontmatter: {}",
                e
            ))
        })?;

        let mut output = String::with_capacity(frontmatter_yaml.len() + self.content.len() + 8);
        output.push_str("---\n");
        output.push_str(&frontmatter_yaml);
        output.push_str("---\n");
        output.push_str(&self.content);

        Ok(output)
    }
}
