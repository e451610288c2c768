//! CLI output formatting.
//!
//! Colours come from owo-colors and tables from comfy-table so every command
//! renders with the same visual hierarchy.

mod headers;
mod output;
mod status;
mod tables;

pub use headers::{print_section_header, SectionStyle};
pub use output::{print_key_value, print_summary_box};
pub use status::{print_success, print_warning};
pub use tables::{print_circular_table, print_package_table};
