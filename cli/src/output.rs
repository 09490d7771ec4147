//! CLI output helpers

use colored::Colorize;

pub fn heading(text: &str) -> String {
    format!("{}", text.bright_cyan())
}

pub fn label(text: &str) -> String {
    format!("{}", text.bright_blue())
}

pub fn muted(text: &str) -> String {
    format!("{}", text.bright_black())
}

pub fn success(text: &str) -> String {
    format!("{}", text.bright_green())
}

pub fn err_line(text: &str) -> String {
    format!("{} {}", "Error:".red().bold(), text)
}

/// `label: value` with a padded, coloured label
pub fn field(name: &str, value: &str) -> String {
    format!("  {} {}", label(&format!("{:<10}", format!("{name}:"))), value)
}
