//! AI Optimizer tab
//!
//! Four views: the file-list input form, the in-flight wait screen, the
//! rendered report, and an explicit error view. Rendering only; state
//! transitions live in the event handlers and the run loop.

use crate::analysis::AnalysisReport;
use crate::tui::state::{AnalyzerView, AppState};
use crate::tui::theme::Styles;
use crate::tui::widgets::{bars::category_lines, spinner::get_spinner};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app_state: &AppState) {
    match &app_state.analyzer.view {
        AnalyzerView::Input => render_input(f, area, app_state),
        AnalyzerView::Running => render_running(f, area, app_state),
        AnalyzerView::Result(report) => render_result(f, area, app_state, report),
        AnalyzerView::Error(message) => render_error(f, area, message),
    }
}

fn render_input(f: &mut Frame, area: Rect, app_state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Instructions
            Constraint::Min(6),    // Listing input
        ])
        .split(area);

    let instructions = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("1. ", Styles::emphasis()),
            Span::styled(
                "Open Command Prompt (CMD), go to your messy folder, and run:",
                Styles::primary(),
            ),
        ]),
        Line::from(Span::styled("     dir /b /s > files.txt", Styles::success())),
        Line::from(vec![
            Span::styled("2. ", Styles::emphasis()),
            Span::styled("Paste the contents of files.txt below ", Styles::primary()),
            Span::styled("(Ctrl+V)", Styles::secondary()),
            Span::styled(", then press ", Styles::primary()),
            Span::styled("Ctrl+S", Styles::emphasis()),
            Span::styled(" to analyze.", Styles::primary()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Paste your messy file list and let the AI design your custom system.",
            Styles::secondary(),
        )),
    ]);
    f.render_widget(instructions, chunks[0]);

    let listing = &app_state.analyzer.file_list;
    let line_count = listing.lines().count();
    let visible = chunks[1].height.saturating_sub(2) as usize;

    // Show the tail of the listing so the typing cursor stays on screen
    let skip = line_count.saturating_sub(visible);
    let mut lines: Vec<Line> = listing
        .lines()
        .skip(skip)
        .map(|l| Line::from(Span::styled(l.to_string(), Styles::primary())))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.spans.push(Span::styled("▏", Styles::emphasis()));
    } else {
        lines.push(Line::from(vec![
            Span::styled("▏", Styles::emphasis()),
            Span::styled(
                r"C:\Users\Student\Downloads\Physics_Notes_Final.pdf ...",
                Styles::muted(),
            ),
        ]));
    }

    let title = if line_count > 0 {
        format!("FILE LISTING ({} lines)", line_count)
    } else {
        "FILE LISTING".to_string()
    };

    let input = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border())
            .title(title)
            .padding(ratatui::widgets::Padding::uniform(1)),
    );
    f.render_widget(input, chunks[1]);
}

fn render_running(f: &mut Frame, area: Rect, app_state: &AppState) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(get_spinner(app_state.tick), Styles::emphasis()),
            Span::styled("  Analyzing your digital mess...", Styles::header()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "   One request is in flight; submission is disabled until it resolves.",
            Styles::secondary(),
        )),
    ];

    let waiting = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::emphasis())
            .title("AI ANALYSIS")
            .padding(ratatui::widgets::Padding::uniform(1)),
    );
    f.render_widget(waiting, area);
}

/// Number of lines the report view produces (used to clamp scrolling).
pub fn result_line_count(report: &AnalysisReport) -> u16 {
    result_lines(report, 80).len() as u16
}

fn result_lines(report: &AnalysisReport, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "DETECTED CATEGORIES",
        Styles::header(),
    ))];
    lines.extend(category_lines(&report.categories, width));

    if !report.problems.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("PAIN POINTS", Styles::header())));
        for problem in &report.problems {
            lines.push(Line::from(vec![
                Span::styled("  • ", Styles::warning()),
                Span::styled(problem.clone(), Styles::warning()),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "PROPOSED CUSTOM STRUCTURE",
        Styles::header(),
    )));
    for line in report.proposed_structure.lines() {
        lines.push(Line::from(Span::styled(
            format!("  {}", line),
            Styles::primary(),
        )));
    }

    if !report.naming_examples.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("RENAME EXAMPLES", Styles::header())));
        for example in &report.naming_examples {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", example.old), Styles::secondary()),
                Span::styled(" → ", Styles::secondary()),
                Span::styled(example.new.clone(), Styles::success()),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "CUSTOM POWERSHELL DEPLOYMENT SCRIPT",
        Styles::header(),
    )));
    lines.push(Line::from(Span::styled(
        "  Use PowerShell (not CMD) to run this. It provides feedback while moving files.",
        Styles::secondary(),
    )));
    for line in report.powershell_script.lines() {
        lines.push(Line::from(Span::styled(
            format!("  {}", line),
            Styles::success(),
        )));
    }

    lines
}

fn render_result(f: &mut Frame, area: Rect, app_state: &AppState, report: &AnalysisReport) {
    let paragraph = Paragraph::new(result_lines(report, area.width as usize))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border())
                .title("YOUR CUSTOM PLAN")
                .padding(ratatui::widgets::Padding::uniform(1)),
        )
        .scroll((app_state.analyzer.scroll, 0));
    f.render_widget(paragraph, area);
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ✗ ", Styles::error()),
            Span::styled("ANALYSIS FAILED", Styles::error()),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", message), Styles::primary())),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", Styles::secondary()),
            Span::styled("[Enter]", Styles::emphasis()),
            Span::styled(
                " to go back and retry with the same listing.",
                Styles::secondary(),
            ),
        ]),
    ];

    let error = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::error())
                .title("AI ANALYSIS"),
        )
        .wrap(ratatui::widgets::Wrap { trim: false });
    f.render_widget(error, area);
}
