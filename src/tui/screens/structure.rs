//! Folder Structure tab - the recommended taxonomy as a collapsible tree

use crate::taxonomy::FOLDER_STRUCTURE;
use crate::tui::state::AppState;
use crate::tui::theme::Styles;
use crate::tui::widgets::tree::render_tree;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app_state: &AppState) {
    let show_help = area.height >= 18;
    let help_height = if show_help { 6 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Intro
            Constraint::Min(8),    // Tree
            Constraint::Length(help_height),
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Recreate this tree inside your ", Styles::primary()),
            Span::styled("Documents", Styles::header()),
            Span::styled(" folder.", Styles::primary()),
        ]),
        Line::from(""),
    ]);
    f.render_widget(intro, chunks[0]);

    render_tree(f, chunks[1], &FOLDER_STRUCTURE, &app_state.tree, "FOLDER STRUCTURE");

    if show_help {
        let help = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  1. Press ", Styles::secondary()),
                Span::styled("[C]", Styles::emphasis()),
                Span::styled(" to copy the setup script.", Styles::secondary()),
            ]),
            Line::from(Span::styled(
                "  2. Open PowerShell (search Start for it).",
                Styles::secondary(),
            )),
            Line::from(Span::styled(
                "  3. Right-click in the PowerShell window to paste and hit Enter.",
                Styles::secondary(),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border())
                .title("HOW TO USE THE SCRIPT"),
        );
        f.render_widget(help, chunks[2]);
    }
}
