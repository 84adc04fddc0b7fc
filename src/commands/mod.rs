//! Command implementations for tradedocs.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the pieces several commands share: the opened
//! workspace, template source resolution and output writing.

mod create;
mod delete;
mod init;
mod list;
mod migrate;
mod preview;
mod render;
mod show;
mod update;
mod validate;
mod variables;

use crate::cli::{Command, TemplateSource};
use crate::config::Config;
use crate::context::{WorkspaceContext, require_workspace};
use crate::error::{Result, TradeDocsError};
use crate::events::{Event, EventAction, record};
use crate::fs::atomic_write_file;
use crate::store::TemplateStore;
use crate::template::TemplateFile;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

/// Dispatch a command to its implementation.
///
/// `trader` is the `--trader` override for this invocation.
pub fn dispatch(command: Command, trader: Option<&str>) -> Result<()> {
    match command {
        Command::Init => init::cmd_init(trader),
        Command::List(args) => list::cmd_list(args),
        Command::Show(args) => show::cmd_show(args),
        Command::Create(args) => create::cmd_create(args, trader),
        Command::Update(args) => update::cmd_update(args, trader),
        Command::Delete(args) => delete::cmd_delete(args, trader),
        Command::Render(args) => render::cmd_render(args, trader),
        Command::Preview(args) => preview::cmd_preview(args, trader),
        Command::Validate(args) => validate::cmd_validate(args),
        Command::Variables(args) => variables::cmd_variables(args),
        Command::Migrate(args) => migrate::cmd_migrate(args, trader),
    }
}

/// An opened workspace: paths, config and the acting trader.
pub(crate) struct Session {
    pub ctx: WorkspaceContext,
    pub config: Config,
    trader: Option<String>,
}

impl Session {
    /// Locate the workspace from the current directory and load its config.
    pub fn open(trader: Option<&str>) -> Result<Self> {
        let ctx = require_workspace()?;
        let config = Config::load_or_default(ctx.config_path())?;
        let trader = config.effective_trader(trader).map(str::to_string);
        Ok(Self {
            ctx,
            config,
            trader,
        })
    }

    /// The template store, honoring `validate_on_save`.
    pub fn store(&self) -> Result<TemplateStore> {
        Ok(TemplateStore::open(&self.ctx.templates_dir)?
            .with_validation(self.config.validate_on_save))
    }

    /// A new event attributed to this session's trader.
    pub fn event(&self, action: EventAction) -> Event {
        Event::new(action, self.trader.as_deref())
    }

    /// Append an event to the log when logging is enabled.
    pub fn record(&self, event: Event) {
        record(&self.ctx, &self.config, event);
    }
}

/// Template content resolved from the store or a file.
#[derive(Debug, Clone)]
pub(crate) struct SourceTemplate {
    /// ID for stored templates.
    pub id: Option<String>,
    /// `TPL-001` or the file path, for messages.
    pub label: String,
    pub content: String,
    pub active: bool,
}

impl SourceTemplate {
    /// Event details identifying where the template came from.
    pub fn describe(&self) -> Value {
        match &self.id {
            Some(id) => json!({ "template": id }),
            None => json!({ "file": self.label }),
        }
    }

    /// Base name for output files: the ID, or the file stem.
    pub fn output_stem(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => Path::new(&self.label)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "template".to_string()),
        }
    }
}

/// Resolve a `TPL-NNN` or `--file` source.
///
/// Files with frontmatter are read as stored templates; anything else is
/// taken as raw HTML.
pub(crate) fn resolve_source(store: &TemplateStore, source: &TemplateSource) -> Result<SourceTemplate> {
    if let Some(path) = &source.file {
        let text = read_input_file(path)?;
        let (content, active) = if text.starts_with("---") {
            let template = TemplateFile::parse(&text)?;
            (template.content, template.frontmatter.active)
        } else {
            (text, true)
        };
        return Ok(SourceTemplate {
            id: None,
            label: path.display().to_string(),
            content,
            active,
        });
    }

    let id = source.template_id.as_deref().ok_or_else(|| {
        TradeDocsError::UserError("provide a template ID or --file".to_string())
    })?;
    let stored = store.get(id)?;
    Ok(SourceTemplate {
        id: Some(stored.template.id().to_string()),
        label: stored.template.id().to_string(),
        active: stored.template.frontmatter.active,
        content: stored.template.content,
    })
}

/// Read a user-supplied input file.
pub(crate) fn read_input_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        TradeDocsError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })
}

/// Write rendered HTML to `output`, or to stdout when `None`.
///
/// Returns the path written, if any.
pub(crate) fn emit_html(html: &str, output: Option<PathBuf>) -> Result<Option<PathBuf>> {
    match output {
        Some(path) => {
            atomic_write_file(&path, html)?;
            Ok(Some(path))
        }
        None => {
            print!("{}", html);
            Ok(None)
        }
    }
}
