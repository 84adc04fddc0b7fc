//! Event logging for tradedocs.
//!
//! Every state-changing command (and every render) appends one event to an
//! append-only NDJSON log at `.tradedocs/events/events.ndjson`.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: The action performed (init, create, update, render, ...)
//! - `actor`: The configured trader, or `user@HOST`
//! - `template`: Optional template ID
//! - `details`: Freeform object with action-specific details

use crate::config::Config;
use crate::context::WorkspaceContext;
use crate::error::{Result, TradeDocsError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Workspace initialization
    Init,
    /// Template created
    Create,
    /// Template updated
    Update,
    /// Template deleted
    Delete,
    /// Template rendered with real data
    Render,
    /// Template previewed with sample data
    Preview,
    /// Migration job applied
    Migrate,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventAction::Init => "init",
            EventAction::Create => "create",
            EventAction::Update => "update",
            EventAction::Delete => "delete",
            EventAction::Render => "render",
            EventAction::Preview => "preview",
            EventAction::Migrate => "migrate",
        };
        f.write_str(name)
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// When the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// Who performed the action.
    pub actor: String,

    /// Template ID for template-specific events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Action-specific details.
    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time.
    ///
    /// The actor is the given trader identity, or `USER@HOSTNAME` when none
    /// is configured.
    pub fn new(action: EventAction, trader: Option<&str>) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: trader.map(str::to_string).unwrap_or_else(system_actor),
            template: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the template ID for this event.
    pub fn with_template(mut self, template_id: impl Into<String>) -> Self {
        self.template = Some(template_id.into());
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            TradeDocsError::StorageError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

fn system_actor() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the log, creating the log if needed.
pub fn append_event(ctx: &WorkspaceContext, event: &Event) -> Result<()> {
    let events_file = ctx.events_file();
    let json_line = event.to_ndjson_line()?;

    let events_dir = ctx.events_dir();
    fs::create_dir_all(&events_dir).map_err(|e| {
        TradeDocsError::StorageError(format!(
            "failed to create events directory '{}': {}",
            events_dir.display(),
            e
        ))
    })?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            TradeDocsError::StorageError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        TradeDocsError::StorageError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}

/// Append an event if event logging is enabled.
///
/// Logging never fails the command: errors are reported as warnings on
/// stderr, since the command's own work has already happened.
pub fn record(ctx: &WorkspaceContext, config: &Config, event: Event) {
    if !config.log_events {
        return;
    }
    if let Err(e) = append_event(ctx, &event) {
        eprintln!("Warning: failed to log {} event: {}", event.action, e);
    }
}

/// Read all events from the log, oldest first.
///
/// Returns an empty list when no events have been written yet.
pub fn read_events(ctx: &WorkspaceContext) -> Result<Vec<Event>> {
    let events_file = ctx.events_file();
    if !events_file.exists() {
        return Ok(Vec::new());
    }

    let file = fs::File::open(&events_file).map_err(|e| {
        TradeDocsError::StorageError(format!(
            "failed to open events file '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    let mut events = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| {
            TradeDocsError::StorageError(format!("failed to read events file: {}", e))
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let event = serde_json::from_str(&line).map_err(|e| {
            TradeDocsError::StorageError(format!(
                "malformed event on line {} of '{}': {}",
                index + 1,
                events_file.display(),
                e
            ))
        })?;
        events.push(event);
    }

    Ok(events)
}
