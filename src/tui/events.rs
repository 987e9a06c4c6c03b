//! Event handling for TUI

use crate::clipboard;
use crate::guide::AUTO_CLEAN_SCRIPT;
use crate::script;
use crate::taxonomy::FOLDER_STRUCTURE;
use crate::tui::screens::{analyzer as analyzer_screen, guide as guide_screen};
use crate::tui::state::{
    AnalyzerView, AppState, EditMode, Tab, NAMING_FIELD_LABELS,
};
use crate::tui::widgets::tree::visible_rows;
use crossterm::event::{KeyCode, KeyModifiers};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
}

/// Handle a keyboard event
pub fn handle_event(
    app_state: &mut AppState,
    key: KeyCode,
    modifiers: KeyModifiers,
) -> EventResult {
    // Ctrl+C always quits
    if modifiers.contains(KeyModifiers::CONTROL) && matches!(key, KeyCode::Char('c')) {
        return EventResult::Quit;
    }

    // Navigation shortcuts, unless a text field is capturing keystrokes
    if !app_state.is_text_entry() {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => return EventResult::Quit,
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                app_state.tab = Tab::ALL[idx];
                return EventResult::Continue;
            }
            _ => {}
        }
    }

    // Tab switching works everywhere except mid-edit of a naming field
    if !app_state.naming.is_editing() {
        match key {
            KeyCode::Tab => {
                app_state.tab = app_state.tab.next();
                return EventResult::Continue;
            }
            KeyCode::BackTab => {
                app_state.tab = app_state.tab.prev();
                return EventResult::Continue;
            }
            _ => {}
        }
    }

    match app_state.tab {
        Tab::Structure => handle_structure_event(app_state, key),
        Tab::Naming => handle_naming_event(app_state, key),
        Tab::Guide => handle_guide_event(app_state, key),
        Tab::Analyzer => handle_analyzer_event(app_state, key, modifiers),
        Tab::Automation => handle_automation_event(app_state, key),
    }
}

fn handle_structure_event(app_state: &mut AppState, key: KeyCode) -> EventResult {
    let rows = visible_rows(&FOLDER_STRUCTURE, &app_state.tree);
    if rows.is_empty() {
        return EventResult::Continue;
    }
    let cursor = app_state.tree.cursor.min(rows.len() - 1);
    app_state.tree.cursor = cursor;

    match key {
        KeyCode::Up => {
            app_state.tree.cursor = cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            app_state.tree.cursor = (cursor + 1).min(rows.len() - 1);
        }
        KeyCode::Home => {
            app_state.tree.cursor = 0;
        }
        KeyCode::End => {
            app_state.tree.cursor = rows.len() - 1;
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let row = &rows[cursor];
            if row.has_children {
                app_state.tree.toggle(&row.path);
                clamp_tree_cursor(app_state);
            }
        }
        KeyCode::Right => {
            let row = &rows[cursor];
            if row.has_children && !row.expanded {
                app_state.tree.set_expanded(&row.path, true);
            }
        }
        KeyCode::Left => {
            let row = rows[cursor].clone();
            if row.has_children && row.expanded {
                app_state.tree.set_expanded(&row.path, false);
                clamp_tree_cursor(app_state);
            } else if row.depth > 0 {
                // Jump to the parent row
                let parent_path = &row.path[..row.path.len() - 1];
                if let Some(idx) = rows.iter().position(|r| r.path == parent_path) {
                    app_state.tree.cursor = idx;
                }
            }
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            match clipboard::copy_text(&script::baseline_script()) {
                Ok(()) => app_state.set_status(
                    "Setup script copied. Paste it into a PowerShell window to create your folders.",
                ),
                Err(e) => app_state.set_status(format!("Clipboard copy failed: {}", e)),
            }
        }
        _ => {}
    }
    EventResult::Continue
}

/// After a collapse the visible row set shrinks; keep the cursor in range.
fn clamp_tree_cursor(app_state: &mut AppState) {
    let len = visible_rows(&FOLDER_STRUCTURE, &app_state.tree).len();
    if len > 0 {
        app_state.tree.cursor = app_state.tree.cursor.min(len - 1);
    }
}

fn handle_naming_event(app_state: &mut AppState, key: KeyCode) -> EventResult {
    let selected = app_state.naming.selected;

    match &mut app_state.naming.mode {
        EditMode::View => match key {
            KeyCode::Up => {
                app_state.naming.selected = selected.saturating_sub(1);
            }
            KeyCode::Down => {
                app_state.naming.selected =
                    (selected + 1).min(NAMING_FIELD_LABELS.len() - 1);
            }
            KeyCode::Enter => {
                let buffer = app_state.naming.field_value(selected).to_string();
                app_state.naming.mode = EditMode::Editing { buffer };
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                let filename = app_state.naming.input.example_filename();
                match clipboard::copy_text(&filename) {
                    Ok(()) => app_state.set_status(format!("Copied {}", filename)),
                    Err(e) => app_state.set_status(format!("Clipboard copy failed: {}", e)),
                }
            }
            _ => {}
        },
        EditMode::Editing { buffer } => match key {
            KeyCode::Enter => {
                let value = buffer.clone();
                app_state.naming.set_field(selected, value);
                app_state.naming.mode = EditMode::View;
            }
            KeyCode::Esc => {
                app_state.naming.mode = EditMode::View;
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) => {
                buffer.push(c);
            }
            _ => {}
        },
    }
    EventResult::Continue
}

fn handle_guide_event(app_state: &mut AppState, key: KeyCode) -> EventResult {
    let max = guide_screen::line_count().saturating_sub(1);
    match key {
        KeyCode::Up => app_state.guide_scroll = app_state.guide_scroll.saturating_sub(1),
        KeyCode::Down => app_state.guide_scroll = (app_state.guide_scroll + 1).min(max),
        KeyCode::PageUp => app_state.guide_scroll = app_state.guide_scroll.saturating_sub(10),
        KeyCode::PageDown => app_state.guide_scroll = (app_state.guide_scroll + 10).min(max),
        KeyCode::Home => app_state.guide_scroll = 0,
        _ => {}
    }
    EventResult::Continue
}

fn handle_automation_event(app_state: &mut AppState, key: KeyCode) -> EventResult {
    if let KeyCode::Char('c') | KeyCode::Char('C') = key {
        match clipboard::copy_text(AUTO_CLEAN_SCRIPT) {
            Ok(()) => app_state.set_status("Cleanup script copied to clipboard."),
            Err(e) => app_state.set_status(format!("Clipboard copy failed: {}", e)),
        }
    }
    EventResult::Continue
}

fn handle_analyzer_event(
    app_state: &mut AppState,
    key: KeyCode,
    modifiers: KeyModifiers,
) -> EventResult {
    match &app_state.analyzer.view {
        AnalyzerView::Input => {
            let ctrl = modifiers.contains(KeyModifiers::CONTROL);
            match key {
                KeyCode::Char('s') if ctrl => app_state.submit_analysis(),
                KeyCode::Char('u') if ctrl => app_state.analyzer.file_list.clear(),
                KeyCode::Char('v') if ctrl => match clipboard::paste_text() {
                    Ok(text) => app_state.analyzer.file_list.push_str(&text),
                    Err(e) => app_state.set_status(format!("Clipboard paste failed: {}", e)),
                },
                KeyCode::Enter => app_state.analyzer.file_list.push('\n'),
                KeyCode::Backspace => {
                    app_state.analyzer.file_list.pop();
                }
                KeyCode::Char(c) if !ctrl => app_state.analyzer.file_list.push(c),
                _ => {}
            }
        }
        // While a request is outstanding every key is ignored; the gate
        // that prevents a second submission
        AnalyzerView::Running => {}
        AnalyzerView::Result(report) => {
            let max = analyzer_screen::result_line_count(report).saturating_sub(1);
            match key {
                KeyCode::Up => {
                    app_state.analyzer.scroll = app_state.analyzer.scroll.saturating_sub(1)
                }
                KeyCode::Down => {
                    app_state.analyzer.scroll = (app_state.analyzer.scroll + 1).min(max)
                }
                KeyCode::PageUp => {
                    app_state.analyzer.scroll = app_state.analyzer.scroll.saturating_sub(10)
                }
                KeyCode::PageDown => {
                    app_state.analyzer.scroll = (app_state.analyzer.scroll + 10).min(max)
                }
                KeyCode::Char('c') | KeyCode::Char('C') => {
                    let script = report.powershell_script.clone();
                    match clipboard::copy_text(&script) {
                        Ok(()) => app_state.set_status("Deployment script copied to clipboard."),
                        Err(e) => app_state.set_status(format!("Clipboard copy failed: {}", e)),
                    }
                }
                KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Esc => {
                    app_state.reset_analysis();
                }
                _ => {}
            }
        }
        AnalyzerView::Error(_) => match key {
            KeyCode::Enter | KeyCode::Esc => app_state.dismiss_analysis_error(),
            KeyCode::Char('r') | KeyCode::Char('R') => app_state.reset_analysis(),
            _ => {}
        },
    }
    EventResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisReport;

    fn app() -> AppState {
        AppState::new()
    }

    fn press(app_state: &mut AppState, key: KeyCode) -> EventResult {
        handle_event(app_state, key, KeyModifiers::empty())
    }

    fn ctrl(app_state: &mut AppState, c: char) -> EventResult {
        handle_event(app_state, KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Quit);
        assert_eq!(ctrl(&mut app, 'c'), EventResult::Quit);
    }

    #[test]
    fn test_tab_switching() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tab, Tab::Naming);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.tab, Tab::Structure);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.tab, Tab::Analyzer);
    }

    #[test]
    fn test_structure_toggle_roundtrip() {
        let mut app = app();
        let before = visible_rows(&FOLDER_STRUCTURE, &app.tree).len();

        // Cursor starts on 01_Academic (expanded); Enter collapses it
        press(&mut app, KeyCode::Enter);
        let collapsed = visible_rows(&FOLDER_STRUCTURE, &app.tree).len();
        assert!(collapsed < before);

        press(&mut app, KeyCode::Enter);
        assert_eq!(visible_rows(&FOLDER_STRUCTURE, &app.tree).len(), before);
    }

    #[test]
    fn test_structure_toggle_on_leaf_is_noop() {
        let mut app = app();
        press(&mut app, KeyCode::End); // 99_Inbox, a leaf
        let before = visible_rows(&FOLDER_STRUCTURE, &app.tree).len();
        press(&mut app, KeyCode::Enter);
        assert_eq!(visible_rows(&FOLDER_STRUCTURE, &app.tree).len(), before);
    }

    #[test]
    fn test_structure_cursor_clamped_after_collapse() {
        let mut app = app();
        press(&mut app, KeyCode::End);
        // Collapse everything from the top; cursor must stay in range
        press(&mut app, KeyCode::Home);
        for _ in 0..10 {
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Down);
        }
        let rows = visible_rows(&FOLDER_STRUCTURE, &app.tree);
        assert!(app.tree.cursor < rows.len());
    }

    #[test]
    fn test_naming_edit_commit_and_cancel() {
        let mut app = app();
        app.tab = Tab::Naming;
        press(&mut app, KeyCode::Down); // Subject
        press(&mut app, KeyCode::Enter); // start editing
        assert!(app.naming.is_editing());

        // Replace the buffer content
        for _ in 0..app.naming.input.subject.len() {
            press(&mut app, KeyCode::Backspace);
        }
        for c in "Math".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.naming.input.subject, "Math");

        // Cancel leaves the value untouched
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('X'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.naming.input.subject, "Math");
    }

    #[test]
    fn test_naming_editing_blocks_quit_and_tab() {
        let mut app = app();
        app.tab = Tab::Naming;
        press(&mut app, KeyCode::Enter);
        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Continue);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tab, Tab::Naming);
        press(&mut app, KeyCode::Esc);
    }

    #[test]
    fn test_analyzer_input_captures_text() {
        let mut app = app();
        app.tab = Tab::Analyzer;

        // 'q' and digits are text here, not shortcuts
        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Continue);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tab, Tab::Analyzer);
        assert_eq!(app.analyzer.file_list, "q1\n");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.analyzer.file_list, "q1");

        ctrl(&mut app, 'u');
        assert!(app.analyzer.file_list.is_empty());
    }

    #[test]
    fn test_analyzer_submit_empty_stays_in_input() {
        let mut app = app();
        app.tab = Tab::Analyzer;
        ctrl(&mut app, 's');
        assert!(matches!(app.analyzer.view, AnalyzerView::Input));
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_analyzer_submit_transitions_to_running() {
        let mut app = app();
        app.tab = Tab::Analyzer;
        app.analyzer.file_list = "C:\\Downloads\\a.pdf".to_string();
        ctrl(&mut app, 's');
        assert!(matches!(app.analyzer.view, AnalyzerView::Running));

        // Everything is ignored while running
        ctrl(&mut app, 's');
        press(&mut app, KeyCode::Char('x'));
        assert!(matches!(app.analyzer.view, AnalyzerView::Running));
        assert_eq!(app.analyzer.file_list, "C:\\Downloads\\a.pdf");
    }

    #[test]
    fn test_analyzer_error_recovery() {
        let mut app = app();
        app.tab = Tab::Analyzer;
        app.analyzer.file_list = "listing".to_string();
        app.analyzer.view = AnalyzerView::Error("HTTP 500".to_string());

        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.analyzer.view, AnalyzerView::Input));
        assert_eq!(app.analyzer.file_list, "listing");
    }

    #[test]
    fn test_analyzer_result_reset() {
        let mut app = app();
        app.tab = Tab::Analyzer;
        app.analyzer.file_list = "listing".to_string();
        app.analyzer.view = AnalyzerView::Result(AnalysisReport {
            categories: vec![],
            problems: vec![],
            proposed_structure: String::new(),
            naming_examples: vec![],
            powershell_script: String::new(),
        });

        press(&mut app, KeyCode::Char('r'));
        assert!(matches!(app.analyzer.view, AnalyzerView::Input));
        assert!(app.analyzer.file_list.is_empty(), "reset discards the listing");
    }
}
