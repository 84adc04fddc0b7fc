//! Supporting types and default values for config.

use serde::{Deserialize, Serialize};

/// A user-defined migration job.
///
/// Jobs rewrite stored template content with a regex replacement. They are
/// refused when a second application would change the text again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationJobConfig {
    /// Job name used on the command line.
    pub name: String,

    /// One-line description shown by `migrate --list`.
    #[serde(default)]
    pub description: String,

    /// Regex pattern to match.
    pub pattern: String,

    /// Replacement text; `$1`, `${name}` refer to capture groups.
    pub replacement: String,
}

pub(super) fn default_output_dir() -> String {
    "rendered".to_string()
}

pub(super) fn default_true() -> bool {
    true
}
