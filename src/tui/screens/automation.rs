//! Automation tab - the scheduled cleanup snippet

use crate::guide::{AUTO_CLEAN_DESCRIPTION, AUTO_CLEAN_FILENAME, AUTO_CLEAN_SCRIPT, AUTO_CLEAN_USAGE};
use crate::tui::state::AppState;
use crate::tui::theme::Styles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, _app_state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Intro
            Constraint::Length(7), // Script box
            Constraint::Min(6),    // Usage
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Let the computer do the boring work for you using PowerShell.",
            Styles::secondary(),
        )),
        Line::from(""),
    ]);
    f.render_widget(intro, chunks[0]);

    let script_lines = vec![
        Line::from(Span::styled(
            format!("  {}", AUTO_CLEAN_DESCRIPTION),
            Styles::secondary(),
        )),
        Line::from(vec![
            Span::styled("  Keep it in a text file named ", Styles::secondary()),
            Span::styled(AUTO_CLEAN_FILENAME, Styles::emphasis()),
            Span::styled(".", Styles::secondary()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", AUTO_CLEAN_SCRIPT),
            Styles::success(),
        )),
    ];

    let script = Paragraph::new(script_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border())
                .title("SCRIPT: AUTO-DELETE OLD DOWNLOADS"),
        )
        .wrap(ratatui::widgets::Wrap { trim: false });
    f.render_widget(script, chunks[1]);

    let mut usage_lines = vec![Line::from("")];
    for (step, text) in AUTO_CLEAN_USAGE {
        usage_lines.push(Line::from(Span::styled(
            format!("  {}", step),
            Styles::emphasis(),
        )));
        usage_lines.push(Line::from(Span::styled(
            format!("  {}", text),
            Styles::primary(),
        )));
        usage_lines.push(Line::from(""));
    }

    let usage = Paragraph::new(usage_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border())
                .title("HOW TO USE"),
        )
        .wrap(ratatui::widgets::Wrap { trim: false });
    f.render_widget(usage, chunks[2]);
}
