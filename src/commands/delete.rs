//! Implementation of the `tradedocs delete` command.

use super::Session;
use crate::cli::DeleteArgs;
use crate::error::{Result, TradeDocsError};
use crate::events::EventAction;
use serde_json::json;

/// Execute the `tradedocs delete` command.
///
/// Deletion is permanent, so `--force` is required.
pub fn cmd_delete(args: DeleteArgs, trader: Option<&str>) -> Result<()> {
    if !args.force {
        return Err(TradeDocsError::UserError(format!(
            "refusing to delete template without --force flag.\n\n\
             Deleted templates cannot be recovered. To mark it unused instead, run:\n  \
             tradedocs update {id} --inactive\n\n\
             To delete it, run:\n  tradedocs delete {id} --force",
            id = args.template_id
        )));
    }

    let session = Session::open(trader)?;
    let removed = session.store()?.delete(&args.template_id)?;
    let fm = &removed.template.frontmatter;

    session.record(
        session
            .event(EventAction::Delete)
            .with_template(fm.id.clone())
            .with_details(json!({
                "name": fm.name,
                "category": fm.category,
                "path": removed.path.display().to_string(),
            })),
    );

    println!("Deleted template: {} ({})", fm.id, fm.name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::read_events;
    use crate::exit_codes;
    use crate::store::NewTemplate;
    use crate::template::TemplateCategory;
    use crate::test_support::{DirGuard, create_test_workspace};
    use serial_test::serial;

    #[test]
    fn test_delete_refuses_without_force() {
        let err = cmd_delete(
            DeleteArgs {
                template_id: "TPL-001".to_string(),
                force: false,
            },
            None,
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("--force"));
    }

    #[test]
    #[serial]
    fn test_delete_removes_and_logs() {
        let temp_dir = create_test_workspace();
        let _guard = DirGuard::new(temp_dir.path());
        let session = Session::open(None).unwrap();
        let store = session.store().unwrap();
        let stored = store
            .create(NewTemplate {
                name: "Draft".to_string(),
                description: String::new(),
                category: TemplateCategory::Other,
                content: String::new(),
                active: false,
            })
            .unwrap();

        cmd_delete(
            DeleteArgs {
                template_id: "TPL-001".to_string(),
                force: true,
            },
            None,
        )
        .unwrap();

        assert!(!stored.path.exists());
        let events = read_events(&session.ctx).unwrap();
        assert_eq!(events[0].action, EventAction::Delete);
        assert_eq!(events[0].details["name"], "Draft");
    }
}
