//! Reusable TIDY ASCII logo widget
//!
//! Consistent branding across all TUI screens.

use crate::tui::theme::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// ASCII art lines for the TIDY logo
const LOGO_LINES: &[&str] = &[
    "  ████████╗██╗██████╗ ██╗   ██╗",
    "  ╚══██╔══╝██║██╔══██╗╚██╗ ██╔╝",
    "     ██║   ██║██║  ██║ ╚████╔╝ ",
    "     ██║   ██║██║  ██║  ╚██╔╝  ",
    "     ██║   ██║██████╔╝   ██║   ",
    "     ╚═╝   ╚═╝╚═════╝    ╚═╝   ",
];

/// Height of the logo in lines
pub const LOGO_HEIGHT: u16 = 6;

/// Render the TIDY logo at the given area
/// Adds a line of spacing before the logo
pub fn render_logo(f: &mut Frame, area: Rect) {
    let logo_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: LOGO_HEIGHT,
    };

    let title_lines: Vec<Line> = LOGO_LINES
        .iter()
        .map(|line| Line::from(vec![Span::styled(*line, Styles::title())]))
        .collect();

    let title_paragraph = Paragraph::new(title_lines).alignment(Alignment::Left);
    f.render_widget(title_paragraph, logo_area);
}

/// Render the tagline directly below the logo
pub fn render_tagline(f: &mut Frame, area: Rect) {
    let tagline_y = area.y + 1 + LOGO_HEIGHT;

    // Logo has 2 leading spaces; match them so the tagline lines up
    let tagline = Paragraph::new(Line::from(vec![
        Span::styled("  Organize your Documents on Windows", Styles::secondary()),
        Span::styled(" • ", Styles::secondary()),
        Span::styled("jplx05/tidydesk", Styles::secondary()),
    ]))
    .alignment(Alignment::Left);

    let tagline_area = Rect {
        x: area.x,
        y: tagline_y,
        width: area.width,
        height: 1,
    };
    f.render_widget(tagline, tagline_area);
}

/// Total height needed for logo + tagline + 1 blank line after tagline
pub const LOGO_WITH_TAGLINE_HEIGHT: u16 = LOGO_HEIGHT + 1 + 1 + 1; // spacing before + logo + tagline + 1 blank after tagline
