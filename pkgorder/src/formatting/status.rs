//! Status lines.

use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy)]
enum Status {
    Success,
    Warning,
}

impl Status {
    fn format(&self, message: &str) -> String {
        match self {
            Status::Success => format!("{} {}", "✓".green(), message.green().bold()),
            Status::Warning => format!("{} {}", "⚠".yellow(), message.yellow().bold()),
        }
    }
}

pub fn print_success(message: &str) {
    println!("  {}", Status::Success.format(message));
}

pub fn print_warning(message: &str) {
    println!("  {}", Status::Warning.format(message));
}
