//! Implementation of the `tradedocs variables` command.
//!
//! Prints the variable catalog: the placeholder to insert for every key,
//! and the block to wrap around section fields.

use crate::catalog::{VariableCategory, catalog, find_category};
use crate::cli::VariablesArgs;
use crate::error::{Result, TradeDocsError};

/// Execute the `tradedocs variables` command.
///
/// Works outside a workspace; the catalog is built in.
pub fn cmd_variables(args: VariablesArgs) -> Result<()> {
    let categories = select_categories(args.category.as_deref())?;

    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_category(category);
    }

    Ok(())
}

fn select_categories(key: Option<&str>) -> Result<Vec<&'static VariableCategory>> {
    let Some(key) = key else {
        return Ok(catalog().iter().collect());
    };

    let category = find_category(key).ok_or_else(|| {
        let valid: Vec<_> = catalog().iter().map(|c| c.key).collect();
        TradeDocsError::UserError(format!(
            "unknown variable category '{}'. Valid categories: {}",
            key,
            valid.join(", ")
        ))
    })?;
    Ok(vec![category])
}

fn print_category(category: &VariableCategory) {
    match category.section_block() {
        Some(block) => {
            println!("{} (repeating section)", category.label);
            for line in block.lines() {
                println!("  {}", line);
            }
            println!("  Fields:");
        }
        None => println!("{}", category.label),
    }

    let indent = if category.section.is_some() { "    " } else { "  " };
    for variable in category.variables {
        println!("{}{:<28} {}", indent, variable.placeholder(), variable.label);
    }
}
