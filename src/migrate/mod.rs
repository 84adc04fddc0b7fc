//! Bulk rewrite jobs for stored template content.
//!
//! A migration job is a regex replacement applied to the HTML of every
//! stored template, used for maintenance such as normalizing placeholder
//! spacing after an import. Jobs run outside the engine: rendering never
//! rewrites content.
//!
//! Every job must be idempotent. Before anything is written, each rewrite is
//! applied a second time to its own output; if that changes the text again
//! the whole run is refused.

mod job;

#[cfg(test)]
mod tests;

pub use job::{MigrationJob, available_jobs, builtin_jobs, find_job};

use crate::engine::outline;
use crate::error::{Result, TradeDocsError};
use crate::store::{StoredTemplate, TemplateStore};
use std::path::PathBuf;

/// One template changed by a migration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratedTemplate {
    pub id: String,
    pub path: PathBuf,
    /// Number of matches whose text changed.
    pub replacements: usize,
}

/// Outcome of a migration run.
#[derive(Debug, Clone)]
pub struct MigrationReport {
    pub job: String,
    pub dry_run: bool,
    pub changed: Vec<MigratedTemplate>,
    pub unchanged: usize,
}

impl MigrationReport {
    /// Total replacements across all changed templates.
    pub fn total_replacements(&self) -> usize {
        self.changed.iter().map(|t| t.replacements).sum()
    }
}

/// Apply a job to every stored template.
///
/// All rewrites are computed and checked first; nothing is written if any
/// template fails the idempotency or structure check. With `dry_run` the
/// report is produced without writing.
pub fn run_job(store: &TemplateStore, job: &MigrationJob, dry_run: bool) -> Result<MigrationReport> {
    let templates = store.list(None)?;
    let mut planned: Vec<(StoredTemplate, String, usize)> = Vec::new();
    let mut unchanged = 0;

    for stored in templates {
        let Some((content, replacements)) = job.apply(&stored.template.content).map_err(|e| {
            TradeDocsError::UserError(format!("{} (in template {})", e, stored.template.id()))
        })?
        else {
            unchanged += 1;
            continue;
        };

        if outline(&stored.template.content).is_ok()
            && let Err(e) = outline(&content)
        {
            return Err(TradeDocsError::UserError(format!(
                "migration '{}' would break template {}: {}",
                job.name,
                stored.template.id(),
                e
            )));
        }

        planned.push((stored, content, replacements));
    }

    let mut changed = Vec::with_capacity(planned.len());
    for (stored, content, replacements) in planned {
        let stored = if dry_run {
            stored
        } else {
            store.replace_content(&stored, content)?
        };
        changed.push(MigratedTemplate {
            id: stored.template.id().to_string(),
            path: stored.path,
            replacements,
        });
    }

    Ok(MigrationReport {
        job: job.name.clone(),
        dry_run,
        changed,
        unchanged,
    })
}
