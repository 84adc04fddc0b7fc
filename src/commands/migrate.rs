//! Implementation of the `tradedocs migrate` command.

use super::Session;
use crate::cli::MigrateArgs;
use crate::error::{Result, TradeDocsError};
use crate::events::EventAction;
use crate::migrate::{MigrationReport, available_jobs, find_job, run_job};
use serde_json::json;

/// Execute the `tradedocs migrate` command.
pub fn cmd_migrate(args: MigrateArgs, trader: Option<&str>) -> Result<()> {
    let session = Session::open(trader)?;

    if args.list {
        return list_jobs(&session);
    }

    let name = args.job.as_deref().ok_or_else(|| {
        TradeDocsError::UserError("provide a job name, or --list to see jobs".to_string())
    })?;
    let job = find_job(&session.config, name)?;
    let report = run_job(&session.store()?, &job, args.dry_run)?;

    if !report.dry_run && !report.changed.is_empty() {
        session.record(session.event(EventAction::Migrate).with_details(json!({
            "job": report.job,
            "templates": report.changed.iter().map(|t| &t.id).collect::<Vec<_>>(),
            "replacements": report.total_replacements(),
        })));
    }

    print_report(&report);
    Ok(())
}

fn list_jobs(session: &Session) -> Result<()> {
    let jobs = available_jobs(&session.config)?;
    println!("Available migrations:");
    println!();
    for job in &jobs {
        println!("  {}", job.name);
        if !job.description.is_empty() {
            println!("    {}", job.description);
        }
        println!("    pattern: {}", job.pattern());
    }
    Ok(())
}

fn print_report(report: &MigrationReport) {
    let verb = if report.dry_run { "Would update" } else { "Updated" };

    if report.changed.is_empty() {
        println!(
            "Migration '{}': nothing to change ({} template(s) checked).",
            report.job, report.unchanged
        );
        return;
    }

    println!(
        "Migration '{}': {} {} template(s), {} replacement(s).",
        report.job,
        verb,
        report.changed.len(),
        report.total_replacements()
    );
    println!();
    for template in &report.changed {
        println!(
            "  {} ({} replacement(s)) {}",
            template.id,
            template.replacements,
            template.path.display()
        );
    }
    if report.dry_run {
        println!();
        println!("Dry run: no files were written.");
    }
}
