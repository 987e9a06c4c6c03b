//! Terminal text theme for CLI output

use colored::Colorize;

/// Text formatting utilities for non-TUI output
pub struct Theme;

impl Theme {
    pub fn header(text: &str) -> String {
        text.bold().to_string()
    }

    pub fn primary(text: &str) -> String {
        text.to_string()
    }

    pub fn secondary(text: &str) -> String {
        text.dimmed().to_string()
    }

    pub fn emphasis(text: &str) -> String {
        text.cyan().to_string()
    }

    pub fn success(text: &str) -> String {
        text.green().to_string()
    }

    pub fn warning(text: &str) -> String {
        text.yellow().to_string()
    }

    pub fn error(text: &str) -> String {
        text.red().to_string()
    }

    pub fn command(text: &str) -> String {
        text.cyan().to_string()
    }

    pub fn value(text: &str) -> String {
        text.bold().to_string()
    }

    /// Plain divider line
    pub fn divider(width: usize) -> String {
        "-".repeat(width)
    }

    /// Double divider
    pub fn divider_bold(width: usize) -> String {
        "=".repeat(width)
    }
}
