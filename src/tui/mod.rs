//! TUI module for interactive terminal interface
//!
//! Provides a full-screen terminal UI using Ratatui: five tabs over shared
//! application state, with one blocking inference request at a time.

pub mod events;
pub mod screens;
pub mod state;
pub mod theme;
pub mod widgets;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::time::Duration;

use self::events::{handle_event, EventResult};
use self::screens::render;
use self::state::{AnalyzerView, AppState};
use crate::analysis::AnalysisClient;

/// Run the TUI application
pub fn run(initial_state: Option<AppState>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = initial_state.unwrap_or_default();

    // Main event loop
    loop {
        // Increment tick for animations and status expiry
        app_state.tick = app_state.tick.wrapping_add(1);
        app_state.expire_status();

        terminal.draw(|f| render(f, &mut app_state))?;

        // A submitted analysis runs here, after the Running frame is on
        // screen. The call blocks; Running state keeps re-submission out.
        if matches!(app_state.analyzer.view, AnalyzerView::Running) {
            perform_analysis(&mut app_state);
            continue;
        }

        // Use polling with timeout for animation updates
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match handle_event(&mut app_state, key.code, key.modifiers) {
                        EventResult::Quit => break,
                        EventResult::Continue => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Resolve the outstanding request into a result or an explicit error view.
fn perform_analysis(app_state: &mut AppState) {
    let outcome = AnalysisClient::from_config(&app_state.config.ai)
        .and_then(|client| client.analyze(&app_state.analyzer.file_list));

    app_state.analyzer.view = match outcome {
        Ok(report) => AnalyzerView::Result(report),
        Err(e) => AnalyzerView::Error(e.to_string()),
    };
    app_state.analyzer.scroll = 0;
}
