//! Package listing.

use anyhow::Result;
use serde_json::json;

use crate::formatting::{
    print_key_value, print_package_table, print_section_header, print_warning, SectionStyle,
};

use super::{Context, WorkspaceOptions};

pub fn cmd_list(options: &WorkspaceOptions, json: bool) -> Result<()> {
    let context = Context::load(options)?;
    let workspace = context.workspace();

    let mut rows = Vec::with_capacity(workspace.len());
    for package in workspace.packages() {
        let deps = workspace.dependencies(&package.id)?;
        rows.push((package, deps));
    }

    if json {
        let packages: Vec<_> = rows
            .iter()
            .map(|(package, deps)| {
                json!({
                    "id": package.id,
                    "language": package.language,
                    "path": package.path,
                    "dependencies": deps,
                })
            })
            .collect();
        let data = json!({
            "packages_dir": context.packages_dir,
            "packages": packages,
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    print_section_header("[Packages]", SectionStyle::Primary);
    print_key_value("Directory", &context.packages_dir.display().to_string());
    println!();

    if rows.is_empty() {
        print_warning("No packages found");
        println!();
        return Ok(());
    }

    let table_rows: Vec<(String, String, Vec<String>)> = rows
        .into_iter()
        .map(|(package, deps)| {
            (
                package.id.clone(),
                package.language.as_str().to_string(),
                deps,
            )
        })
        .collect();
    print_package_table(&table_rows);
    println!();

    Ok(())
}
