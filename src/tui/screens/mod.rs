//! Screen rendering modules

pub mod analyzer;
pub mod automation;
pub mod guide;
pub mod naming;
pub mod structure;

use crate::tui::state::{AppState, Tab};
use crate::tui::theme::Styles;
use crate::tui::widgets::{
    logo::{render_logo, render_tagline, LOGO_WITH_TAGLINE_HEIGHT},
    shortcuts::{get_shortcuts, render_shortcuts},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

/// Main render function: common chrome plus the active tab's screen
pub fn render(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LOGO_WITH_TAGLINE_HEIGHT),
            Constraint::Length(2), // Tab bar
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status line
            Constraint::Length(3), // Shortcuts
        ])
        .split(area);

    render_logo(f, chunks[0]);
    render_tagline(f, chunks[0]);
    render_tabs(f, chunks[1], app_state);

    match app_state.tab {
        Tab::Structure => structure::render(f, chunks[2], app_state),
        Tab::Naming => naming::render(f, chunks[2], app_state),
        Tab::Guide => guide::render(f, chunks[2], app_state),
        Tab::Analyzer => analyzer::render(f, chunks[2], app_state),
        Tab::Automation => automation::render(f, chunks[2], app_state),
    }

    render_status(f, chunks[3], app_state);

    let shortcuts = get_shortcuts(app_state);
    render_shortcuts(f, chunks[4], &shortcuts);
}

fn render_tabs(f: &mut Frame, area: Rect, app_state: &AppState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Styles::secondary()),
                Span::raw(tab.title()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app_state.tab.index())
        .style(Styles::secondary())
        .highlight_style(Styles::selected())
        .divider(Span::styled("│", Styles::border()));

    f.render_widget(tabs, area);
}

fn render_status(f: &mut Frame, area: Rect, app_state: &AppState) {
    if let Some(msg) = &app_state.status_message {
        let line = Line::from(vec![
            Span::styled("  ✓ ", Styles::success()),
            Span::styled(msg.text.clone(), Styles::success()),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}
