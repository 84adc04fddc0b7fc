//! Implementation of the `tradedocs list` command.

use super::Session;
use crate::cli::ListArgs;
use crate::error::Result;
use crate::store::{StoredTemplate, TemplateStore};
use crate::template::TemplateCategory;

/// Execute the `tradedocs list` command.
pub fn cmd_list(args: ListArgs) -> Result<()> {
    let session = Session::open(None)?;
    let store = session.store()?;

    let category = args
        .category
        .as_deref()
        .map(TemplateCategory::parse)
        .transpose()?;
    let templates = list_templates(&store, category, args.all)?;

    if templates.is_empty() {
        if args.all {
            println!("No templates.");
        } else {
            println!("No active templates. Use `--all` to include inactive ones.");
        }
        return Ok(());
    }

    println!("{:<10} {:<20} {:<9} NAME", "ID", "CATEGORY", "STATUS");
    for stored in &templates {
        let fm = &stored.template.frontmatter;
        println!(
            "{:<10} {:<20} {:<9} {}",
            fm.id,
            fm.category.as_str(),
            if fm.active { "active" } else { "inactive" },
            fm.name
        );
    }

    Ok(())
}

/// Templates to show, oldest first.
fn list_templates(
    store: &TemplateStore,
    category: Option<TemplateCategory>,
    include_inactive: bool,
) -> Result<Vec<StoredTemplate>> {
    let mut templates = store.list(category)?;
    if !include_inactive {
        templates.retain(|t| t.template.frontmatter.active);
    }
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NewTemplate;
    use tempfile::TempDir;

    fn seed(store: &TemplateStore, name: &str, category: TemplateCategory, active: bool) {
        store
            .create(NewTemplate {
                name: name.to_string(),
                description: String::new(),
                category,
                content: String::new(),
                active,
            })
            .unwrap();
    }

    #[test]
    fn test_inactive_hidden_unless_all() {
        let temp_dir = TempDir::new().unwrap();
        let store = TemplateStore::open(temp_dir.path()).unwrap();
        seed(&store, "PO", TemplateCategory::PurchaseOrder, true);
        seed(&store, "Old PO", TemplateCategory::PurchaseOrder, false);
        seed(&store, "B/L", TemplateCategory::BillOfLading, true);

        let active = list_templates(&store, None, false).unwrap();
        assert_eq!(active.len(), 2);

        let all = list_templates(&store, None, true).unwrap();
        assert_eq!(all.len(), 3);

        let orders = list_templates(&store, Some(TemplateCategory::PurchaseOrder), true).unwrap();
        assert_eq!(orders.len(), 2);
        let active_orders =
            list_templates(&store, Some(TemplateCategory::PurchaseOrder), false).unwrap();
        assert_eq!(active_orders.len(), 1);
        assert_eq!(active_orders[0].template.frontmatter.name, "PO");
    }
}
