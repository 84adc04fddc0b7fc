//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a tradedocs workspace.
///
/// This struct represents the contents of `.tradedocs/config.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Identity
    // =========================================================================
    /// Trader recorded as the actor of logged events.
    ///
    /// Falls back to `USER@hostname` when unset. `--trader` overrides it for
    /// a single invocation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trader: Option<String>,

    // =========================================================================
    // Rendering
    // =========================================================================
    /// Directory for rendered documents, relative to the workspace root.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Whether `render` accepts inactive templates without `--force`.
    #[serde(default)]
    pub render_inactive: bool,

    // =========================================================================
    // Store
    // =========================================================================
    /// Reject template content with unbalanced sections on create/update.
    #[serde(default = "default_true")]
    pub validate_on_save: bool,

    // =========================================================================
    // Logging
    // =========================================================================
    /// Append events to `.tradedocs/events/events.ndjson`.
    #[serde(default = "default_true")]
    pub log_events: bool,

    // =========================================================================
    // Maintenance
    // =========================================================================
    /// Additional migration jobs available to `migrate`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub migrations: Vec<MigrationJobConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trader: None,
            output_dir: default_output_dir(),
            render_inactive: false,
            validate_on_save: default_true(),
            log_events: default_true(),
            migrations: Vec::new(),
        }
    }
}
