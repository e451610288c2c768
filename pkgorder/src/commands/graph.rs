//! Dependency graph summary and DOT export.

use anyhow::Result;
use owo_colors::OwoColorize;
use pkgorder_core::render_dot;

use crate::formatting::{print_section_header, print_summary_box, SectionStyle};

use super::{Context, WorkspaceOptions};

pub fn cmd_graph(options: &WorkspaceOptions, dot: bool) -> Result<()> {
    let context = Context::load(options)?;
    let report = context.workspace().sort_report()?;

    if dot {
        println!("{}", render_dot(&report));
        return Ok(());
    }

    print_section_header("[Dependency Graph]", SectionStyle::Primary);
    print_summary_box(
        "Summary",
        &[
            ("Packages", &report.len().to_string()),
            ("Edges", &report.edges.len().to_string()),
            ("Acyclic", &report.sorted.len().to_string()),
            ("Circular", &report.circular.len().to_string()),
            ("Standalone", &report.standalone.len().to_string()),
        ],
    );
    println!();

    for edge in &report.edges {
        let arrow = if report.is_circular(&edge.from) && report.is_circular(&edge.to) {
            "→".yellow().to_string()
        } else {
            "→".cyan().to_string()
        };
        println!("  {} {} {}", edge.from.bold().white(), arrow, edge.to.white());
    }
    if !report.edges.is_empty() {
        println!();
    }

    Ok(())
}
