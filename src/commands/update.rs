//! Implementation of the `tradedocs update` command.

use super::{Session, read_input_file};
use crate::cli::UpdateArgs;
use crate::error::Result;
use crate::events::EventAction;
use crate::template::{TemplateCategory, TemplatePatch};
use serde_json::json;

/// Execute the `tradedocs update` command.
pub fn cmd_update(args: UpdateArgs, trader: Option<&str>) -> Result<()> {
    let session = Session::open(trader)?;
    let template_id = args.template_id.clone();
    let patch = build_patch(args)?;

    let (stored, changed) = session.store()?.update(&template_id, patch)?;
    let fm = &stored.template.frontmatter;

    session.record(
        session
            .event(EventAction::Update)
            .with_template(fm.id.clone())
            .with_details(json!({
                "changed": changed,
                "path": stored.path.display().to_string(),
            })),
    );

    println!("Updated template: {}", fm.id);
    println!();
    println!("  Changed:  {}", changed.join(", "));
    println!("  Name:     {}", fm.name);
    println!("  Status:   {}", if fm.active { "active" } else { "inactive" });
    println!("  Path:     {}", stored.path.display());

    Ok(())
}

/// Turn command-line flags into a patch; only given flags are set.
fn build_patch(args: UpdateArgs) -> Result<TemplatePatch> {
    let category = args
        .category
        .as_deref()
        .map(TemplateCategory::parse)
        .transpose()?;
    let content = args.file.as_deref().map(read_input_file).transpose()?;
    let active = match (args.active, args.inactive) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };

    Ok(TemplatePatch {
        name: args.name,
        description: args.description,
        category,
        content,
        active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::read_events;
    use crate::exit_codes;
    use crate::store::NewTemplate;
    use crate::test_support::{DirGuard, create_test_workspace};
    use serial_test::serial;

    fn args(template_id: &str) -> UpdateArgs {
        UpdateArgs {
            template_id: template_id.to_string(),
            name: None,
            description: None,
            category: None,
            file: None,
            active: false,
            inactive: false,
        }
    }

    fn seed(session: &Session) {
        session
            .store()
            .unwrap()
            .create(NewTemplate {
                name: "Standard SO".to_string(),
                description: String::new(),
                category: TemplateCategory::SalesOrder,
                content: "<p>{{order_number}}</p>".to_string(),
                active: true,
            })
            .unwrap();
    }

    #[test]
    fn test_build_patch_only_sets_given_flags() {
        let patch = build_patch(UpdateArgs {
            inactive: true,
            category: Some("commercial-invoice".to_string()),
            ..args("TPL-001")
        })
        .unwrap();

        assert_eq!(
            patch,
            TemplatePatch {
                category: Some(TemplateCategory::CommercialInvoice),
                active: Some(false),
                ..Default::default()
            }
        );
        assert!(build_patch(args("TPL-001")).unwrap().is_empty());
    }

    #[test]
    #[serial]
    fn test_update_content_from_file() {
        let temp_dir = create_test_workspace();
        let _guard = DirGuard::new(temp_dir.path());
        let session = Session::open(None).unwrap();
        seed(&session);
        let file = temp_dir.path().join("new.html");
        std::fs::write(&file, "<p>{{bl_number}}</p>").unwrap();

        cmd_update(
            UpdateArgs {
                file: Some(file),
                ..args("tpl-001")
            },
            None,
        )
        .unwrap();

        let stored = session.store().unwrap().get("TPL-001").unwrap();
        assert_eq!(stored.template.content, "<p>{{bl_number}}</p>");

        let events = read_events(&session.ctx).unwrap();
        assert_eq!(events.last().unwrap().action, EventAction::Update);
        assert_eq!(events.last().unwrap().details["changed"][0], "content");
    }

    #[test]
    #[serial]
    fn test_update_without_fields_is_user_error() {
        let temp_dir = create_test_workspace();
        let _guard = DirGuard::new(temp_dir.path());
        let session = Session::open(None).unwrap();
        seed(&session);

        let err = cmd_update(args("TPL-001"), None).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    #[serial]
    fn test_update_missing_template() {
        let temp_dir = create_test_workspace();
        let _guard = DirGuard::new(temp_dir.path());

        let err = cmd_update(
            UpdateArgs {
                name: Some("x".to_string()),
                ..args("TPL-404")
            },
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("TPL-404"));
    }
}
