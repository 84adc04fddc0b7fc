//! Implementation of the `tradedocs show` command.
//!
//! Displays the metadata, placeholder outline and HTML content of a template.

use super::Session;
use crate::cli::ShowArgs;
use crate::engine::outline;
use crate::error::Result;
use crate::events::{Event, read_events};

/// History entries shown per template.
const HISTORY_LIMIT: usize = 5;

/// Execute the `tradedocs show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let session = Session::open(None)?;
    let stored = session.store()?.get(&args.template_id)?;
    let fm = &stored.template.frontmatter;

    println!("================================================================================");
    println!("{} [{}]", fm.id, fm.category.label());
    println!("================================================================================");
    println!();

    println!("Name:       {}", fm.name);
    if !fm.description.is_empty() {
        println!("About:      {}", fm.description);
    }
    println!("Status:     {}", if fm.active { "active" } else { "inactive" });
    if let Some(created) = fm.created {
        println!("Created:    {}", created.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    if let Some(updated) = fm.updated {
        println!("Updated:    {}", updated.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    println!("Path:       {}", stored.path.display());

    match outline(&stored.template.content) {
        Ok(structure) => {
            if !structure.sections.is_empty() {
                println!("Sections:   {}", structure.sections.join(", "));
            }
            if !structure.variables.is_empty() {
                println!("Variables:  {}", structure.variables.join(", "));
            }
        }
        Err(e) => println!("Problem:    {}", e),
    }

    match read_events(&session.ctx) {
        Ok(events) => {
            let history = recent_history(&events, &fm.id);
            if !history.is_empty() {
                println!();
                println!("History:");
                for event in history {
                    println!(
                        "  {}  {:<8} {}",
                        event.ts.format("%Y-%m-%d %H:%M"),
                        event.action.to_string(),
                        event.actor
                    );
                }
            }
        }
        Err(e) => eprintln!("Warning: failed to read event log: {}", e),
    }

    println!();
    println!("--------------------------------------------------------------------------------");
    print!("{}", stored.template.content);
    if !stored.template.content.ends_with('\n') {
        println!();
    }

    Ok(())
}

/// The latest events for a template, newest first.
fn recent_history<'a>(events: &'a [Event], template_id: &str) -> Vec<&'a Event> {
    events
        .iter()
        .rev()
        .filter(|e| e.template.as_deref() == Some(template_id))
        .take(HISTORY_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventAction;

    #[test]
    fn test_recent_history_filters_and_orders() {
        let mut events = vec![Event::new(EventAction::Init, Some("a"))];
        for action in [
            EventAction::Create,
            EventAction::Update,
            EventAction::Render,
            EventAction::Preview,
            EventAction::Render,
            EventAction::Update,
        ] {
            events.push(Event::new(action, Some("a")).with_template("TPL-001"));
        }
        events.push(Event::new(EventAction::Render, Some("a")).with_template("TPL-002"));

        let history = recent_history(&events, "TPL-001");

        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].action, EventAction::Update);
        assert_eq!(history[4].action, EventAction::Update);
        assert!(history.iter().all(|e| e.template.as_deref() == Some("TPL-001")));
    }
}
