//! Compiled migration jobs.

use crate::config::{Config, MigrationJobConfig};
use crate::error::{Result, TradeDocsError};
use regex::{Captures, Regex};

/// A compiled rewrite job.
pub struct MigrationJob {
    pub name: String,
    pub description: String,
    pattern: Regex,
    replacement: String,
    /// Matches that also match this pattern are left as they are.
    skip: Option<Regex>,
}

impl std::fmt::Debug for MigrationJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MigrationJob")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("replacement", &self.replacement)
            .finish()
    }
}

impl MigrationJob {
    /// Compile a job from its config entry.
    pub fn from_config(config: &MigrationJobConfig) -> Result<Self> {
        let pattern = Regex::new(&config.pattern).map_err(|e| {
            TradeDocsError::UserError(format!(
                "invalid regex pattern in migration '{}': {}\n\
                 Fix: edit config.yaml and correct or remove this job.",
                config.name, e
            ))
        })?;

        Ok(Self {
            name: config.name.clone(),
            description: config.description.clone(),
            pattern,
            replacement: config.replacement.clone(),
            skip: None,
        })
    }

    /// The regex this job matches.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Rewrite content once, counting matches whose text changed.
    fn rewrite(&self, content: &str) -> (String, usize) {
        let mut replacements = 0;
        let output = self.pattern.replace_all(content, |caps: &Captures<'_>| {
            let matched = &caps[0];
            if self.skip.as_ref().is_some_and(|skip| skip.is_match(matched)) {
                return matched.to_string();
            }
            let mut expanded = String::new();
            caps.expand(&self.replacement, &mut expanded);
            if expanded != matched {
                replacements += 1;
            }
            expanded
        });
        (output.into_owned(), replacements)
    }

    /// Apply the job to template content.
    ///
    /// Returns `None` when nothing changes, otherwise the new content and
    /// the number of replacements.
    ///
    /// # Errors
    ///
    /// Fails when applying the job to its own output would change the text
    /// again.
    pub fn apply(&self, content: &str) -> Result<Option<(String, usize)>> {
        let (once, replacements) = self.rewrite(content);
        if once == content {
            return Ok(None);
        }

        let (twice, _) = self.rewrite(&once);
        if twice != once {
            return Err(TradeDocsError::UserError(format!(
                "migration '{}' is not idempotent: applying it again keeps changing the content",
                self.name
            )));
        }

        Ok(Some((once, replacements)))
    }
}

fn builtin(
    name: &str,
    description: &str,
    pattern: &str,
    replacement: &str,
    skip: Option<&str>,
) -> MigrationJob {
    MigrationJob {
        name: name.to_string(),
        description: description.to_string(),
        pattern: Regex::new(pattern).expect("Invalid built-in migration regex"),
        replacement: replacement.to_string(),
        skip: skip.map(|s| Regex::new(s).expect("Invalid built-in migration regex")),
    }
}

/// Jobs that ship with tradedocs.
pub fn builtin_jobs() -> Vec<MigrationJob> {
    vec![
        builtin(
            "placeholder-whitespace",
            "Remove spaces inside placeholders: {{ key }} becomes {{key}}",
            r"\{\{\s*([#/]?)\s*([A-Za-z0-9_]+)\s*\}\}",
            "{{${1}${2}}}",
            None,
        ),
        builtin(
            "logo-max-height",
            "Cap logo images at 80px: adds a style to <img class=\"logo\"> tags without one",
            r#"(<img\b[^>]*?\bclass="logo"[^>]*?)(\s*/?>)"#,
            r#"${1} style="max-height: 80px;"${2}"#,
            Some(r"\bstyle\s*="),
        ),
    ]
}

/// Built-in jobs followed by the jobs defined in config.
pub fn available_jobs(config: &Config) -> Result<Vec<MigrationJob>> {
    let mut jobs = builtin_jobs();
    for entry in &config.migrations {
        if jobs.iter().any(|j| j.name == entry.name) {
            return Err(TradeDocsError::UserError(format!(
                "migration '{}' in config.yaml clashes with a built-in job of the same name",
                entry.name
            )));
        }
        jobs.push(MigrationJob::from_config(entry)?);
    }
    Ok(jobs)
}

/// Look up a job by name.
pub fn find_job(config: &Config, name: &str) -> Result<MigrationJob> {
    available_jobs(config)?
        .into_iter()
        .find(|j| j.name == name)
        .ok_or_else(|| {
            TradeDocsError::UserError(format!(
                "unknown migration '{}'.\n\n\
                 Use `tradedocs migrate --list` to see available jobs.",
                name
            ))
        })
}
