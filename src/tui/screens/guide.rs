//! Setup Guide tab - the step-by-step desktop overhaul

use crate::guide::SETUP_STEPS;
use crate::tui::state::AppState;
use crate::tui::theme::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Total number of lines the guide produces (used to clamp scrolling)
pub fn line_count() -> u16 {
    guide_lines().len() as u16
}

fn guide_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Follow these instructions exactly to overhaul your PC in 15 minutes.",
            Styles::secondary(),
        )),
        Line::from(""),
    ];

    for (i, step) in SETUP_STEPS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), Styles::emphasis()),
            Span::styled(step.title, Styles::header()),
            Span::raw("  "),
            Span::styled(format!("[{}]", step.category.label()), Styles::secondary()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", step.description),
            Styles::secondary(),
        )));
        lines.push(Line::from(""));
        for detail in step.details {
            lines.push(Line::from(vec![
                Span::styled("   ✓ ", Styles::success()),
                Span::styled(*detail, Styles::primary()),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines
}

pub fn render(f: &mut Frame, area: Rect, app_state: &AppState) {
    let paragraph = Paragraph::new(guide_lines())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border())
                .title("STEP-BY-STEP SETUP")
                .padding(ratatui::widgets::Padding::uniform(1)),
        )
        .scroll((app_state.guide_scroll, 0))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(paragraph, area);
}
