//! File-based template store.
//!
//! Each template lives in its own file under `.tradedocs/templates/`, named
//! `TPL-NNN-<slug>.html`. The store provides the list/get/create/update/delete
//! operations the editor and list views need. IDs are allocated
//! monotonically: a `.next_id` high-water mark in the store directory keeps
//! a deleted template's ID from being handed out again.
//!
//! Writes are atomic. When content validation is enabled, a template whose
//! sections are unbalanced is rejected before anything touches disk.

mod naming;


pub use naming::{
    generate_template_id, slugify, template_filename, validate_template_id,
};

use crate::engine::outline;
use crate::error::{Result, TradeDocsError};
use crate::fs::atomic_write_file;
use crate::template::{TemplateCategory, TemplateFile, TemplateFrontmatter, TemplatePatch};
use chrono::{DateTime, Utc};
use naming::{id_from_filename, template_number};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// High-water mark file, skipped by `scan` like other dot-files.
const NEXT_ID_FILE: &str = ".next_id";

/// Fields for a new template.
#[derive(Debug, Clone)]
pub struct NewTemplate {
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    pub content: String,
    pub active: bool,
}

/// A template file located in the store.
#[derive(Debug, Clone)]
pub struct StoredTemplate {
    /// Absolute path of the template file.
    pub path: PathBuf,
    /// The parsed template.
    pub template: TemplateFile,
}

/// Template store rooted at a directory.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
    validate_on_save: bool,
}

impl TemplateStore {
    /// Open a store over an existing directory.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.is_dir() {
            return Err(TradeDocsError::UserError(format!(
                "template store directory '{}' does not exist",
                dir.display()
            )));
        }
        Ok(Self {
            dir,
            validate_on_save: true,
        })
    }

    /// Enable or disable section validation on create/update.
    pub fn with_validation(mut self, validate_on_save: bool) -> Self {
        self.validate_on_save = validate_on_save;
        self
    }

    /// Map of template ID to file path for every template file.
    fn scan(&self) -> Result<BTreeMap<String, PathBuf>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            TradeDocsError::StorageError(format!(
                "failed to read template directory '{}': {}",
                self.dir.display(),
                e
            ))
        })?;

        let mut index = BTreeMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                TradeDocsError::StorageError(format!("failed to read directory entry: {}", e))
            })?;
            let path = entry.path();

            // Skip leftovers from interrupted atomic writes
            let hidden = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with('.'));
            if hidden || !path.is_file() {
                continue;
            }

            if let Some(id) = id_from_filename(&path) {
                if let Some(previous) = index.insert(id.clone(), path.clone()) {
                    return Err(TradeDocsError::StorageError(format!(
                        "duplicate template ID '{}' in '{}' and '{}'",
                        id,
                        previous.display(),
                        path.display()
                    )));
                }
            }
        }

        Ok(index)
    }

    /// Sort key that orders `TPL-002` before `TPL-010` and `TPL-1000` last.
    fn sorted_ids(index: &BTreeMap<String, PathBuf>) -> Vec<&String> {
        let mut ids: Vec<&String> = index.keys().collect();
        ids.sort_by_key(|id| template_number(id).unwrap_or(u32::MAX));
        ids
    }

    /// List templates ordered by ID, optionally limited to one category.
    pub fn list(&self, category: Option<TemplateCategory>) -> Result<Vec<StoredTemplate>> {
        let index = self.scan()?;
        let mut templates = Vec::new();

        for id in Self::sorted_ids(&index) {
            let path = &index[id];
            let template = TemplateFile::load(path)?;
            if category.is_none_or(|c| template.frontmatter.category == c) {
                templates.push(StoredTemplate {
                    path: path.clone(),
                    template,
                });
            }
        }

        Ok(templates)
    }

    /// Fetch a template by ID.
    pub fn get(&self, id: &str) -> Result<StoredTemplate> {
        let id = validate_template_id(id)?;
        let index = self.scan()?;

        let path = index.get(&id).ok_or_else(|| {
            TradeDocsError::UserError(format!(
                "template '{}' not found.\n\n\
                 Use `tradedocs list --all` to see all templates.",
                id
            ))
        })?;

        let template = TemplateFile::load(path)?;
        if template.frontmatter.id != id {
            return Err(TradeDocsError::StorageError(format!(
                "template file '{}' declares ID '{}' but its filename says '{}'",
                path.display(),
                template.frontmatter.id,
                id
            )));
        }

        Ok(StoredTemplate {
            path: path.clone(),
            template,
        })
    }

    /// Create a new template with the next free ID.
    pub fn create(&self, new: NewTemplate) -> Result<StoredTemplate> {
        self.create_at(new, Utc::now())
    }

    fn create_at(&self, new: NewTemplate, now: DateTime<Utc>) -> Result<StoredTemplate> {
        validate_name(&new.name)?;
        self.check_content(&new.content)?;

        let next = self.next_number()?;
        let id = generate_template_id(next);

        let path = self.dir.join(template_filename(&id, &new.name));
        if path.exists() {
            return Err(TradeDocsError::StorageError(format!(
                "template file already exists: {}",
                path.display()
            )));
        }

        let template = TemplateFile {
            frontmatter: TemplateFrontmatter {
                id,
                name: new.name,
                description: new.description,
                category: new.category,
                active: new.active,
                created: Some(now),
                updated: Some(now),
                extra: BTreeMap::new(),
            },
            content: new.content,
        };

        template.save(&path)?;
        atomic_write_file(self.dir.join(NEXT_ID_FILE), &format!("{}\n", next + 1))?;

        Ok(StoredTemplate { path, template })
    }

    /// Apply a partial update to a template.
    ///
    /// The file is renamed when the name changes so its slug stays current.
    /// Returns the updated template and the names of the changed fields.
    pub fn update(
        &self,
        id: &str,
        patch: TemplatePatch,
    ) -> Result<(StoredTemplate, Vec<&'static str>)> {
        if patch.is_empty() {
            return Err(TradeDocsError::UserError(
                "nothing to update: provide at least one field to change".to_string(),
            ));
        }
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(content) = &patch.content {
            self.check_content(content)?;
        }

        let StoredTemplate {
            path: old_path,
            mut template,
        } = self.get(id)?;

        let changed = template.apply_patch(patch, Utc::now());
        let new_path = self
            .dir
            .join(template_filename(template.id(), &template.frontmatter.name));

        template.save(&new_path)?;
        if new_path != old_path {
            fs::remove_file(&old_path).map_err(|e| {
                TradeDocsError::StorageError(format!(
                    "failed to remove renamed template file '{}': {}",
                    old_path.display(),
                    e
                ))
            })?;
        }

        Ok((
            StoredTemplate {
                path: new_path,
                template,
            },
            changed,
        ))
    }

    /// Replace a template's content, e.g. from a migration job.
    pub fn replace_content(&self, stored: &StoredTemplate, content: String) -> Result<StoredTemplate> {
        let mut template = stored.template.clone();
        template.set_content(content, Utc::now());
        template.save(&stored.path)?;
        Ok(StoredTemplate {
            path: stored.path.clone(),
            template,
        })
    }

    /// Delete a template, returning what was removed.
    pub fn delete(&self, id: &str) -> Result<StoredTemplate> {
        let stored = self.get(id)?;
        fs::remove_file(&stored.path).map_err(|e| {
            TradeDocsError::StorageError(format!(
                "failed to delete template file '{}': {}",
                stored.path.display(),
                e
            ))
        })?;
        Ok(stored)
    }

    /// The next template number: past every file on disk and past the
    /// recorded high-water mark.
    fn next_number(&self) -> Result<u32> {
        let on_disk = self
            .scan()?
            .keys()
            .filter_map(|id| template_number(id))
            .max()
            .unwrap_or(0)
            + 1;

        let mark_path = self.dir.join(NEXT_ID_FILE);
        if !mark_path.exists() {
            return Ok(on_disk);
        }
        let text = fs::read_to_string(&mark_path).map_err(|e| {
            TradeDocsError::StorageError(format!(
                "failed to read '{}': {}",
                mark_path.display(),
                e
            ))
        })?;
        let mark: u32 = text.trim().parse().map_err(|_| {
            TradeDocsError::StorageError(format!(
                "'{}' does not hold a template number: '{}'",
                mark_path.display(),
                text.trim()
            ))
        })?;

        Ok(on_disk.max(mark))
    }

    fn check_content(&self, content: &str) -> Result<()> {
        if self.validate_on_save {
            outline(content)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(TradeDocsError::UserError(
            "template name must not be empty".to_string(),
        ));
    }
    Ok(())
}
