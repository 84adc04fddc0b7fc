//! Implementation of the `tradedocs preview` command.
//!
//! Renders a template against the built-in sample context. A malformed
//! template still produces output: the error block replaces the document and
//! the problem is repeated on stderr.

use super::{Session, emit_html, resolve_source};
use crate::cli::PreviewArgs;
use crate::engine::outline;
use crate::error::Result;
use crate::events::EventAction;
use crate::preview::render_preview;
use serde_json::json;

/// Execute the `tradedocs preview` command.
pub fn cmd_preview(args: PreviewArgs, trader: Option<&str>) -> Result<()> {
    let session = Session::open(trader)?;
    let source = resolve_source(&session.store()?, &args.source)?;

    let problem = outline(&source.content).err();
    if let Some(e) = &problem {
        eprintln!("Warning: {} has a template error: {}", source.label, e);
    }

    let html = render_preview(&source.content);
    let written = emit_html(&html, args.output)?;

    let mut details = source.describe();
    details["output"] = json!(written.as_ref().map(|p| p.display().to_string()));
    if let Some(e) = problem {
        details["error"] = json!(e.to_string());
        details["error_section"] = json!(e.section_name());
        details["error_position"] = json!(e.position());
    }
    let mut event = session.event(EventAction::Preview).with_details(details);
    if let Some(id) = &source.id {
        event = event.with_template(id.clone());
    }
    session.record(event);

    if let Some(path) = written {
        eprintln!("Preview of {} written to {}", source.label, path.display());
    }

    Ok(())
}
