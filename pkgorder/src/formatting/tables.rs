//! Table formatting using comfy-table.

use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use owo_colors::OwoColorize;
use pkgorder_core::CircularPackage;

fn styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(*h).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        )
        .load_preset(comfy_table::presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Prints packages with their language and internal dependencies.
pub fn print_package_table(packages: &[(String, String, Vec<String>)]) {
    let mut table = styled_table(&["Package", "Language", "Depends on"]);

    for (name, language, deps) in packages {
        let deps_str = if deps.is_empty() {
            "(none)".bright_black().to_string()
        } else {
            deps.join(", ")
        };
        table.add_row(vec![
            Cell::new(name).fg(Color::White),
            Cell::new(language).fg(Color::DarkGrey),
            Cell::new(deps_str),
        ]);
    }

    println!("{}", table);
}

/// Prints cycle members in the order they will be built.
pub fn print_circular_table(circular: &[CircularPackage]) {
    let mut table = styled_table(&["#", "Package", "Out-degree"]);

    for (idx, pkg) in circular.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1).fg(Color::DarkGrey),
            Cell::new(&pkg.id).fg(Color::Yellow),
            Cell::new(pkg.out_degree),
        ]);
    }

    println!("{}", table);
}
