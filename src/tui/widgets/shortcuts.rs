//! Shortcuts bar widget

use crate::tui::state::{AnalyzerView, AppState, Tab};
use crate::tui::theme::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render shortcuts bar at the bottom of the screen
pub fn render_shortcuts(f: &mut Frame, area: Rect, shortcuts: &[(&str, &str)]) {
    if shortcuts.is_empty() {
        return;
    }

    let available_width = area.width.saturating_sub(2);

    let mut spans: Vec<Span> = vec![];
    let mut current_width = 0;

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        let separator = if i > 0 { " • " } else { "" };
        let key_text = format!("[{}]", key);
        let desc_text = format!(" {}", desc);
        let item_text = format!("{}{}{}", separator, key_text, desc_text);
        let item_width = item_text.len() as u16;

        if i > 0 && current_width + item_width > available_width {
            spans.push(Span::styled(" ...", Styles::secondary()));
            break;
        }

        if i > 0 {
            spans.push(Span::styled(separator, Styles::secondary()));
        }
        spans.push(Span::styled(key_text, Styles::emphasis()));
        spans.push(Span::styled(desc_text, Styles::secondary()));

        current_width += item_width;
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Styles::border())
                .padding(ratatui::widgets::Padding::new(0, 1, 0, 1)),
        )
        .style(Styles::secondary())
        .alignment(ratatui::layout::Alignment::Left)
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(paragraph, area);
}

/// Get shortcuts for the current tab and its state
pub fn get_shortcuts(app_state: &AppState) -> Vec<(&'static str, &'static str)> {
    match app_state.tab {
        Tab::Structure => vec![
            ("↑↓", "Navigate"),
            ("Enter/Space", "Expand/Collapse"),
            ("C", "Copy Setup Script"),
            ("Tab", "Next Tab"),
            ("Q", "Quit"),
        ],
        Tab::Naming => {
            if app_state.naming.is_editing() {
                vec![
                    ("Type", "Edit Value"),
                    ("Enter", "Confirm"),
                    ("Esc", "Cancel"),
                ]
            } else {
                vec![
                    ("↑↓", "Select Field"),
                    ("Enter", "Edit"),
                    ("C", "Copy Filename"),
                    ("Tab", "Next Tab"),
                    ("Q", "Quit"),
                ]
            }
        }
        Tab::Guide => vec![
            ("↑↓", "Scroll"),
            ("Tab", "Next Tab"),
            ("Q", "Quit"),
        ],
        Tab::Analyzer => match app_state.analyzer.view {
            AnalyzerView::Input => vec![
                ("Type", "Edit Listing"),
                ("Ctrl+V", "Paste"),
                ("Ctrl+S", "Analyze"),
                ("Ctrl+U", "Clear"),
                ("Tab", "Next Tab"),
            ],
            AnalyzerView::Running => vec![],
            AnalyzerView::Result(_) => vec![
                ("↑↓", "Scroll"),
                ("C", "Copy Script"),
                ("R", "Start Over"),
                ("Tab", "Next Tab"),
                ("Q", "Quit"),
            ],
            AnalyzerView::Error(_) => vec![
                ("Enter", "Back to Input"),
                ("R", "Discard Listing"),
                ("Q", "Quit"),
            ],
        },
        Tab::Automation => vec![
            ("C", "Copy Script"),
            ("Tab", "Next Tab"),
            ("Q", "Quit"),
        ],
    }
}
