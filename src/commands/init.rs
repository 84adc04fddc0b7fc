//! Implementation of the `tradedocs init` command.
//!
//! Creates the workspace state directory:
//!
//! 1. `.tradedocs/templates/` (the template store)
//! 2. `.tradedocs/events/`
//! 3. `.tradedocs/config.yaml` with defaults (if missing)
//! 4. One starter template per document category, when the store is new
//!
//! The command is idempotent: running it again repairs missing directories
//! without touching existing templates or config.

use crate::config::Config;
use crate::context::{WorkspaceContext, resolve_for_init};
use crate::error::{Result, TradeDocsError};
use crate::events::{Event, EventAction, record};
use crate::fs::atomic_write_file;
use crate::preview::sample_templates;
use crate::store::{NewTemplate, TemplateStore};
use serde_json::json;
use std::fs;
use std::path::Path;

/// What `init` created.
#[derive(Debug, Default)]
pub(super) struct InitOutcome {
    pub created_store: bool,
    pub created_config: bool,
    pub seeded: Vec<String>,
}

/// Execute the `tradedocs init` command.
pub fn cmd_init(trader: Option<&str>) -> Result<()> {
    let ctx = resolve_for_init()?;
    let outcome = init_workspace(&ctx)?;

    let config = Config::load_or_default(ctx.config_path())?;
    let event = Event::new(EventAction::Init, config.effective_trader(trader)).with_details(json!({
        "root": ctx.root.display().to_string(),
        "created_store": outcome.created_store,
        "created_config": outcome.created_config,
        "seeded": outcome.seeded,
    }));
    record(&ctx, &config, event);

    if outcome.created_store {
        println!("Initialized tradedocs workspace in {}", ctx.root.display());
    } else {
        println!("tradedocs workspace already exists in {}", ctx.root.display());
    }
    println!();
    println!("  Templates: {}", ctx.templates_dir.display());
    println!("  Config:    {}", ctx.config_path().display());
    if !outcome.seeded.is_empty() {
        println!();
        println!("Starter templates: {}", outcome.seeded.join(", "));
    }
    println!();
    println!("Next steps:");
    println!("  1. Run `tradedocs list` to see the templates");
    println!("  2. Run `tradedocs preview TPL-001` to render one with sample data");

    Ok(())
}

/// Create whatever is missing from the workspace.
pub(super) fn init_workspace(ctx: &WorkspaceContext) -> Result<InitOutcome> {
    let mut outcome = InitOutcome {
        created_store: !ctx.is_initialized(),
        ..Default::default()
    };

    create_dir(&ctx.templates_dir)?;
    create_dir(&ctx.events_dir())?;

    let config_path = ctx.config_path();
    if !config_path.exists() {
        atomic_write_file(&config_path, &Config::default().to_yaml()?)?;
        outcome.created_config = true;
    }

    if outcome.created_store {
        let store = TemplateStore::open(&ctx.templates_dir)?;
        for sample in sample_templates() {
            let stored = store.create(NewTemplate {
                name: sample.name.to_string(),
                description: sample.description.to_string(),
                category: sample.category,
                content: sample.content.to_string(),
                active: true,
            })?;
            outcome.seeded.push(stored.template.id().to_string());
        }
    }

    Ok(outcome)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        TradeDocsError::StorageError(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })
}
