//! CLI argument parsing for tradedocs.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// tradedocs: document templates for trading operations.
///
/// Templates for purchase orders, sales orders, bills of lading and
/// commercial invoices are stored as HTML files under `.tradedocs/`:
/// - `{{key}}` placeholders are replaced by order data
/// - `{{#section}}...{{/section}}` blocks repeat once per row
/// - previews use built-in sample data
#[derive(Parser, Debug)]
#[command(name = "tradedocs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Trader identity recorded in the event log for this invocation.
    ///
    /// Overrides `trader` from config.yaml.
    #[arg(long, global = true)]
    pub trader: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for tradedocs.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a tradedocs workspace in the current directory.
    ///
    /// Creates `.tradedocs/` with the template store, a default config and
    /// one starter template per document category.
    Init,

    /// List stored templates.
    ///
    /// Inactive templates are hidden unless `--all` is given.
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a template's metadata and HTML content.
    Show(ShowArgs),

    /// Create a new template.
    Create(CreateArgs),

    /// Update fields of an existing template.
    ///
    /// Only the given fields change.
    Update(UpdateArgs),

    /// Delete a template.
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Render a template with real order data.
    Render(RenderArgs),

    /// Render a template with built-in sample data.
    ///
    /// Never fails on malformed templates: an error block is rendered instead.
    Preview(PreviewArgs),

    /// Check a template's sections and list the placeholders it uses.
    Validate(ValidateArgs),

    /// List the variable catalog.
    #[command(alias = "vars")]
    Variables(VariablesArgs),

    /// Run a migration job over all stored templates.
    Migrate(MigrateArgs),
}

/// A template from the store or from a file.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TemplateSource {
    /// Template ID (e.g., TPL-001).
    pub template_id: Option<String>,

    /// Read the template from a file instead of the store.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the `list` command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list templates of this category (e.g., bill_of_lading).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Include inactive templates.
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Template ID to show (e.g., TPL-001).
    pub template_id: String,
}

/// Arguments for the `create` command.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Template name.
    #[arg(short, long)]
    pub name: String,

    /// Document category (purchase_order, sales_order, bill_of_lading,
    /// commercial_invoice, other).
    #[arg(short, long)]
    pub category: String,

    /// Free-text description.
    #[arg(short, long)]
    pub description: Option<String>,

    /// HTML file with the template content.
    ///
    /// Defaults to the starter template of the category.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Create the template as inactive.
    #[arg(long)]
    pub inactive: bool,
}

/// Arguments for the `update` command.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Template ID to update.
    pub template_id: String,

    /// New name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// New description.
    #[arg(short, long)]
    pub description: Option<String>,

    /// New category.
    #[arg(short, long)]
    pub category: Option<String>,

    /// HTML file with the new content.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Mark the template active.
    #[arg(long, conflicts_with = "inactive")]
    pub active: bool,

    /// Mark the template inactive.
    #[arg(long)]
    pub inactive: bool,
}

/// Arguments for the `delete` command.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Template ID to delete.
    pub template_id: String,

    /// Confirm the deletion.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: TemplateSource,

    /// JSON or YAML file with the order data.
    #[arg(short, long)]
    pub data: PathBuf,

    /// Write the HTML to this file instead of stdout.
    #[arg(short, long, conflicts_with = "save")]
    pub output: Option<PathBuf>,

    /// Write the HTML into the configured output directory.
    #[arg(long)]
    pub save: bool,

    /// Render even if the template is inactive.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `preview` command.
#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub source: TemplateSource,

    /// Write the HTML to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `validate` command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: TemplateSource,
}

/// Arguments for the `variables` command.
#[derive(Args, Debug)]
pub struct VariablesArgs {
    /// Only show this catalog category (e.g., containers).
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the `migrate` command.
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Name of the job to run.
    #[arg(required_unless_present = "list")]
    pub job: Option<String>,

    /// Report what would change without writing.
    #[arg(long)]
    pub dry_run: bool,

    /// List available jobs.
    #[arg(long, conflicts_with_all = ["job", "dry_run"])]
    pub list: bool,
}
