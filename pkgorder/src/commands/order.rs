//! Build order and cycle reporting.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::formatting::{
    print_circular_table, print_section_header, print_success, print_warning, SectionStyle,
};

use super::{Context, WorkspaceOptions};

pub fn cmd_order(options: &WorkspaceOptions, json: bool) -> Result<()> {
    let context = Context::load(options)?;
    let report = context.workspace().sort_report()?;
    let order = report.order();

    if json {
        println!("{}", serde_json::to_string_pretty(&order)?);
        return Ok(());
    }

    print_section_header("[Build Order]", SectionStyle::Primary);

    if order.is_empty() {
        print_warning("No packages found");
        println!();
        return Ok(());
    }

    println!(
        "  {} {} packages:",
        "OK".green(),
        order.len().to_string().bold().cyan()
    );
    println!();
    for (idx, pkg) in order.iter().enumerate() {
        let marker = if report.is_circular(pkg) {
            "(circular)".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {} {}",
            format!("{:2}", idx + 1).bright_black(),
            pkg.bold().white(),
            marker
        );
    }
    println!();

    if report.has_cycles() {
        print_warning(&format!(
            "{} packages are part of a dependency cycle; run 'pkgorder cycles' for details",
            report.circular.len()
        ));
        println!();
    }

    Ok(())
}

pub fn cmd_cycles(options: &WorkspaceOptions, json: bool, strict: bool) -> Result<()> {
    let context = Context::load(options)?;
    let report = context.workspace().sort_report()?;

    if json {
        let edges: Vec<_> = report
            .edges
            .iter()
            .filter(|e| report.is_circular(&e.from) && report.is_circular(&e.to))
            .collect();
        let data = serde_json::json!({
            "circular": report.circular,
            "edges": edges,
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else if report.has_cycles() {
        print_section_header("[Dependency Cycles]", SectionStyle::Warning);
        print_warning(&format!(
            "{} packages are part of a dependency cycle",
            report.circular.len()
        ));
        println!();
        print_circular_table(&report.circular);
        println!();
    } else {
        print_section_header("[Dependency Cycles]", SectionStyle::Success);
        print_success("No circular dependencies");
        println!();
    }

    if strict && report.has_cycles() {
        anyhow::bail!(
            "{} packages are part of a dependency cycle",
            report.circular.len()
        );
    }

    Ok(())
}
