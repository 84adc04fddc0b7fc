//! Workspace context resolution for tradedocs.
//!
//! A workspace is any directory containing a `.tradedocs/` state directory.
//! Commands may be run from the workspace root or any directory below it;
//! this module walks up from the working directory to find it and derives
//! every path the other modules need.

use crate::error::{Result, TradeDocsError};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the state directory at the workspace root.
pub const STATE_DIR_NAME: &str = ".tradedocs";

/// Resolved paths for a tradedocs workspace. All paths are absolute.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    /// Directory that contains `.tradedocs/`.
    pub root: PathBuf,

    /// The state directory (`{root}/.tradedocs/`).
    pub state_dir: PathBuf,

    /// Template store directory (`{root}/.tradedocs/templates/`).
    pub templates_dir: PathBuf,
}

impl WorkspaceContext {
    /// Build the context for a workspace rooted at `root`.
    pub fn at<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let state_dir = root.join(STATE_DIR_NAME);
        let templates_dir = state_dir.join("templates");

        Self {
            root,
            state_dir,
            templates_dir,
        }
    }

    /// Locate the workspace containing `cwd`.
    ///
    /// Returns `None` when neither `cwd` nor any ancestor has a state
    /// directory.
    pub fn discover_from<P: AsRef<Path>>(cwd: P) -> Option<Self> {
        cwd.as_ref()
            .ancestors()
            .find(|dir| dir.join(STATE_DIR_NAME).is_dir())
            .map(Self::at)
    }

    /// Whether the state directory exists.
    pub fn is_initialized(&self) -> bool {
        self.state_dir.is_dir() && self.templates_dir.is_dir()
    }

    /// Path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.state_dir.join("config.yaml")
    }

    /// Path to the events directory.
    pub fn events_dir(&self) -> PathBuf {
        self.state_dir.join("events")
    }

    /// Path to the event log file.
    pub fn events_file(&self) -> PathBuf {
        self.events_dir().join("events.ndjson")
    }

    /// Resolve an output path from config, relative to the workspace root.
    pub fn output_dir(&self, configured: &str) -> PathBuf {
        let configured = Path::new(configured);
        if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            self.root.join(configured)
        }
    }
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(|e| {
        TradeDocsError::UserError(format!("failed to get current working directory: {}", e))
    })
}

/// Resolve the workspace for the current directory and require it to exist.
///
/// Use this in every command except `init`.
pub fn require_workspace() -> Result<WorkspaceContext> {
    let cwd = current_dir()?;
    let ctx = WorkspaceContext::discover_from(&cwd).ok_or_else(|| {
        TradeDocsError::UserError(format!(
            "no tradedocs workspace found in '{}' or any parent directory.\n\n\
             Run `tradedocs init` to create one here.",
            cwd.display()
        ))
    })?;

    if !ctx.templates_dir.is_dir() {
        return Err(TradeDocsError::UserError(format!(
            "template store not found.\n\
             Expected: {}\n\n\
             Run `tradedocs init` to repair the workspace.",
            ctx.templates_dir.display()
        )));
    }

    Ok(ctx)
}

/// Resolve the workspace for `init`: an existing enclosing workspace, or a
/// new one rooted at the current directory.
pub fn resolve_for_init() -> Result<WorkspaceContext> {
    let cwd = current_dir()?;
    Ok(WorkspaceContext::discover_from(&cwd).unwrap_or_else(|| WorkspaceContext::at(&cwd)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_under_root() {
        let ctx = WorkspaceContext::at("/work/trading");
        assert_eq!(ctx.state_dir, Path::new("/work/trading/.tradedocs"));
        assert_eq!(ctx.templates_dir, Path::new("/work/trading/.tradedocs/templates"));
        assert!(ctx.config_path().ends_with("config.yaml"));
        assert!(ctx.events_file().ends_with("events/events.ndjson"));
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join(STATE_DIR_NAME)).unwrap();
        let nested = temp_dir.path().join("orders").join("2026");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = WorkspaceContext::discover_from(&nested).unwrap();
        assert_eq!(ctx.root, temp_dir.path());
    }

    #[test]
    fn test_discover_without_workspace() {
        let temp_dir = TempDir::new().unwrap();
        assert!(WorkspaceContext::discover_from(temp_dir.path()).is_none());
    }

    #[test]
    fn test_is_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = WorkspaceContext::at(temp_dir.path());
        assert!(!ctx.is_initialized());

        std::fs::create_dir_all(&ctx.templates_dir).unwrap();
        assert!(ctx.is_initialized());
    }

    #[test]
    fn test_output_dir_relative_and_absolute() {
        let ctx = WorkspaceContext::at("/work/trading");
        assert_eq!(ctx.output_dir("rendered"), Path::new("/work/trading/rendered"));
        assert_eq!(ctx.output_dir("/tmp/out"), Path::new("/tmp/out"));
    }
}
