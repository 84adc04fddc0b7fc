//! Implementation of the `tradedocs create` command.
//!
//! Creates a new template in the store with:
//! - Auto-generated `TPL-NNN` ID (monotonic)
//! - Slugified name for the filename
//! - Content from `--file`, or the category's starter template

use super::{Session, read_input_file};
use crate::cli::CreateArgs;
use crate::error::Result;
use crate::events::EventAction;
use crate::preview::sample_templates;
use crate::store::{NewTemplate, StoredTemplate};
use crate::template::TemplateCategory;
use serde_json::json;

/// Content for categories without a starter template.
const BLANK_TEMPLATE: &str = "<html>\n<body>\n  <h1>{{order_number}}</h1>\n</body>\n</html>\n";

/// Execute the `tradedocs create` command.
pub fn cmd_create(args: CreateArgs, trader: Option<&str>) -> Result<()> {
    let session = Session::open(trader)?;
    let stored = create_template(&session, args)?;
    let fm = &stored.template.frontmatter;

    session.record(
        session
            .event(EventAction::Create)
            .with_template(fm.id.clone())
            .with_details(json!({
                "name": fm.name,
                "category": fm.category,
                "active": fm.active,
                "path": stored.path.display().to_string(),
            })),
    );

    println!("Created template: {}", fm.id);
    println!();
    println!("  Name:     {}", fm.name);
    println!("  Category: {}", fm.category.label());
    println!("  Path:     {}", stored.path.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit the HTML in the template file");
    println!("  2. Run `tradedocs preview {}` to check it with sample data", fm.id);

    Ok(())
}

fn create_template(session: &Session, args: CreateArgs) -> Result<StoredTemplate> {
    let category = TemplateCategory::parse(&args.category)?;
    let content = match &args.file {
        Some(path) => read_input_file(path)?,
        None => starter_content(category).to_string(),
    };

    session.store()?.create(NewTemplate {
        name: args.name,
        description: args.description.unwrap_or_default(),
        category,
        content,
        active: !args.inactive,
    })
}

/// The built-in starter content for a category.
fn starter_content(category: TemplateCategory) -> &'static str {
    sample_templates()
        .iter()
        .find(|t| t.category == category)
        .map(|t| t.content)
        .unwrap_or(BLANK_TEMPLATE)
}
