//! Implementation of the `tradedocs render` command.
//!
//! Renders a template against an order data file and writes the HTML to
//! stdout, a file, or the configured output directory. The data file is
//! JSON (`.json`) or YAML (`.yaml`, `.yml`) and must hold a single object.

use super::{Session, SourceTemplate, emit_html, read_input_file, resolve_source};
use crate::cli::RenderArgs;
use crate::engine::{DataContext, render};
use crate::error::{Result, TradeDocsError};
use crate::events::EventAction;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

/// Execute the `tradedocs render` command.
pub fn cmd_render(args: RenderArgs, trader: Option<&str>) -> Result<()> {
    let session = Session::open(trader)?;
    let source = resolve_source(&session.store()?, &args.source)?;

    if !source.active && !args.force && !session.config.render_inactive {
        return Err(TradeDocsError::UserError(format!(
            "template {} is inactive.\n\n\
             Use --force to render it anyway, or reactivate it with:\n  \
             tradedocs update {} --active",
            source.label, source.label
        )));
    }

    let context = load_data(&args.data)?;
    let html = render(&source.content, &context)?;

    let output = if args.save {
        Some(saved_output_path(&session, &source))
    } else {
        args.output
    };
    let written = emit_html(&html, output)?;

    let mut details = source.describe();
    details["data"] = json!(args.data.display().to_string());
    details["output"] = json!(written.as_ref().map(|p| p.display().to_string()));
    details["bytes"] = json!(html.len());
    let mut event = session.event(EventAction::Render).with_details(details);
    if let Some(id) = &source.id {
        event = event.with_template(id.clone());
    }
    session.record(event);

    if let Some(path) = written {
        eprintln!("Rendered {} to {}", source.label, path.display());
    }

    Ok(())
}

/// `{output_dir}/{TPL-NNN or file stem}.html`.
fn saved_output_path(session: &Session, source: &SourceTemplate) -> PathBuf {
    session
        .ctx
        .output_dir(&session.config.output_dir)
        .join(format!("{}.html", source.output_stem()))
}

/// Load a data context from a JSON or YAML file.
pub(super) fn load_data(path: &Path) -> Result<DataContext> {
    let text = read_input_file(path)?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let value: Value = if is_yaml {
        serde_yaml::from_str(&text).map_err(|e| {
            TradeDocsError::UserError(format!(
                "failed to parse data file '{}' as YAML: {}",
                path.display(),
                e
            ))
        })?
    } else {
        serde_json::from_str(&text).map_err(|e| {
            TradeDocsError::UserError(format!(
                "failed to parse data file '{}' as JSON: {}",
                path.display(),
                e
            ))
        })?
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(TradeDocsError::UserError(format!(
            "data file '{}' must contain an object at the top level, found {}",
            path.display(),
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
