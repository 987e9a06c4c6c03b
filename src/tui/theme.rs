//! Shared styles for the TUI

use ratatui::style::{Color, Modifier, Style};

/// Centralized style palette so every screen stays consistent
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn primary() -> Style {
        Style::default()
    }

    pub fn secondary() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn emphasis() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn success() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn warning() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }
}
