//! Naming Rules tab - editable fields and the resulting filename

use crate::naming::EXAMPLE_SCENARIOS;
use crate::tui::state::{AppState, EditMode, NAMING_FIELD_LABELS};
use crate::tui::theme::Styles;
use crate::utils::pad_right_to_width;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app_state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Intro
            Constraint::Length(8),  // Fields + result panels
            Constraint::Min(5),     // Example scenarios
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Standardized naming makes searching instant. No more 'Final_Final_2.doc'.",
            Styles::secondary(),
        )),
        Line::from(""),
    ]);
    f.render_widget(intro, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_fields(f, panels[0], app_state);
    render_result(f, panels[1], app_state);
    render_scenarios(f, chunks[2]);
}

fn render_fields(f: &mut Frame, area: Rect, app_state: &AppState) {
    let naming = &app_state.naming;

    let items: Vec<ListItem> = NAMING_FIELD_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let is_selected = i == naming.selected;
            let prefix = if is_selected { "> " } else { "  " };
            let label_style = if is_selected {
                Styles::selected()
            } else {
                Styles::header()
            };

            let value_span = match (&naming.mode, is_selected) {
                (EditMode::Editing { buffer }, true) => Span::styled(
                    format!("{}▏", buffer),
                    Styles::emphasis(),
                ),
                _ => Span::styled(naming.field_value(i).to_string(), Styles::primary()),
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, label_style),
                Span::styled(pad_right_to_width(label, 9), label_style),
                value_span,
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border())
            .title("RULE: ISO DATE + SUBJECT + TOPIC")
            .padding(ratatui::widgets::Padding::uniform(1)),
    );
    f.render_widget(list, area);
}

fn render_result(f: &mut Frame, area: Rect, app_state: &AppState) {
    let filename = app_state.naming.input.example_filename();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  RESULTING FILENAME", Styles::secondary())),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", filename), Styles::success())),
    ];

    let result = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::emphasis())
                .title("PREVIEW"),
        )
        .wrap(ratatui::widgets::Wrap { trim: false });
    f.render_widget(result, area);
}

fn render_scenarios(f: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];
    for (title, name) in EXAMPLE_SCENARIOS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", pad_right_to_width(title, 15)), Styles::header()),
            Span::styled(*name, Styles::emphasis()),
        ]));
    }

    let scenarios = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border())
            .title("EXAMPLE SCENARIOS"),
    );
    f.render_widget(scenarios, area);
}
