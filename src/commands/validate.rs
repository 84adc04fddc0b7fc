//! Implementation of the `tradedocs validate` command.
//!
//! Checks that a template's sections are balanced and lists the keys it
//! references. Keys missing from the variable catalog are reported as
//! warnings only, since any key present in the data context renders.

use super::{Session, resolve_source};
use crate::catalog::is_known_key;
use crate::cli::ValidateArgs;
use crate::engine::{TemplateOutline, outline};
use crate::error::Result;

/// Result of validating one template.
#[derive(Debug)]
pub(super) struct ValidationReport {
    pub outline: TemplateOutline,
    /// Referenced keys the catalog does not know.
    pub unknown_keys: Vec<String>,
}

/// Execute the `tradedocs validate` command.
///
/// Unbalanced sections fail with the render-failure exit code.
pub fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let session = Session::open(None)?;
    let source = resolve_source(&session.store()?, &args.source)?;
    let report = validate_content(&source.content)?;

    println!("{}: OK", source.label);
    println!();
    if report.outline.is_empty() {
        println!("  No placeholders.");
    } else {
        println!("  Sections:  {}", display_list(&report.outline.sections));
        println!("  Variables: {}", display_list(&report.outline.variables));
    }

    if !report.unknown_keys.is_empty() {
        println!();
        println!(
            "Warning: not in the variable catalog (render empty unless the data provides them):"
        );
        for key in &report.unknown_keys {
            println!("  - {}", key);
        }
        println!();
        println!("Run `tradedocs variables` to see the catalog.");
    }

    Ok(())
}

pub(super) fn validate_content(content: &str) -> Result<ValidationReport> {
    let outline = outline(content)?;
    let unknown_keys = outline
        .sections
        .iter()
        .chain(&outline.variables)
        .filter(|key| !is_known_key(key))
        .cloned()
        .collect();

    Ok(ValidationReport {
        outline,
        unknown_keys,
    })
}

fn display_list(keys: &[String]) -> String {
    if keys.is_empty() {
        "(none)".to_string()
    } else {
        keys.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TradeDocsError;
    use crate::exit_codes;

    #[test]
    fn test_validate_reports_outline_and_unknown_keys() {
        let report = validate_content(
            "{{order_number}}{{#line_items}}{{product_name}}{{sku}}{{/line_items}}{{#pallets}}{{/pallets}}",
        )
        .unwrap();

        assert_eq!(report.outline.sections, vec!["line_items", "pallets"]);
        assert_eq!(
            report.outline.variables,
            vec!["order_number", "product_name", "sku"]
        );
        assert_eq!(report.unknown_keys, vec!["pallets", "sku"]);
    }

    #[test]
    fn test_validate_malformed_is_render_failure() {
        let err = validate_content("{{#containers}}{{/shipments}}").unwrap_err();
        assert!(matches!(err, TradeDocsError::RenderError(_)));
        assert_eq!(err.exit_code(), exit_codes::RENDER_FAILURE);
        assert!(err.to_string().contains("containers"));
        assert!(err.to_string().contains("shipments"));
    }

    #[test]
    fn test_display_list() {
        assert_eq!(display_list(&[]), "(none)");
        assert_eq!(display_list(&["a".to_string(), "b".to_string()]), "a, b");
    }
}
