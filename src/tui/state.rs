//! Application state management for TUI

use crate::analysis::AnalysisReport;
use crate::config::Config;
use crate::naming::NamingInput;
use std::collections::HashMap;

/// The five views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Structure,
    Naming,
    Guide,
    Analyzer,
    Automation,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Structure,
        Tab::Naming,
        Tab::Guide,
        Tab::Analyzer,
        Tab::Automation,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Structure => "Folder Structure",
            Tab::Naming => "Naming Rules",
            Tab::Guide => "Setup Guide",
            Tab::Analyzer => "AI Optimizer",
            Tab::Automation => "Automation",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap()
    }

    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Expand/collapse state for the folder tree, keyed by node path
/// (sequence of child indices from the forest roots).
///
/// The data model itself is never touched; a missing entry means the node
/// is still in its initial state: expanded iff it sits at depth 0.
#[derive(Debug, Clone, Default)]
pub struct TreeViewState {
    expanded: HashMap<Vec<usize>, bool>,
    pub cursor: usize,
}

impl TreeViewState {
    pub fn is_expanded(&self, path: &[usize]) -> bool {
        self.expanded
            .get(path)
            .copied()
            .unwrap_or(path.len() == 1)
    }

    /// Flip one node's own flag. Siblings and descendants keep theirs;
    /// collapsing a parent hides children without resetting them.
    pub fn toggle(&mut self, path: &[usize]) {
        let current = self.is_expanded(path);
        self.expanded.insert(path.to_vec(), !current);
    }

    pub fn set_expanded(&mut self, path: &[usize], value: bool) {
        self.expanded.insert(path.to_vec(), value);
    }
}

/// Field editing mode on the Naming tab
#[derive(Debug, Clone)]
pub enum EditMode {
    View,
    Editing { buffer: String },
}

pub const NAMING_FIELD_LABELS: [&str; 4] = ["Date", "Subject", "Topic", "Version"];

#[derive(Debug, Clone)]
pub struct NamingState {
    pub input: NamingInput,
    /// Which field is selected
    pub selected: usize,
    pub mode: EditMode,
}

impl NamingState {
    pub fn field_value(&self, index: usize) -> &str {
        match index {
            0 => &self.input.date,
            1 => &self.input.subject,
            2 => &self.input.topic,
            _ => &self.input.version,
        }
    }

    pub fn set_field(&mut self, index: usize, value: String) {
        match index {
            0 => self.input.date = value,
            1 => self.input.subject = value,
            2 => self.input.topic = value,
            _ => self.input.version = value,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing { .. })
    }
}

/// Where the AI tab currently is.
///
/// `Running` acts as the one-request-in-flight gate: submission is only
/// possible from `Input`, and the event handlers ignore submit while a
/// request is outstanding.
#[derive(Debug, Clone)]
pub enum AnalyzerView {
    Input,
    Running,
    Result(AnalysisReport),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct AnalyzerState {
    pub file_list: String,
    pub view: AnalyzerView,
    pub scroll: u16,
}

impl Default for AnalyzerState {
    fn default() -> Self {
        Self {
            file_list: String::new(),
            view: AnalyzerView::Input,
            scroll: 0,
        }
    }
}

/// Transient one-line notice (e.g. after a clipboard copy)
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: u64,
}

/// How many ticks a status message stays on screen (~100ms per tick)
const STATUS_TICKS: u64 = 40;

/// Main application state
pub struct AppState {
    pub tab: Tab,
    pub config: Config,
    pub tree: TreeViewState,
    pub naming: NamingState,
    pub guide_scroll: u16,
    pub analyzer: AnalyzerState,
    pub status_message: Option<StatusMessage>,
    pub tick: u64, // animation tick counter
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::load_or_create();
        let naming_input = NamingInput::with_defaults(
            &config.naming.subject,
            &config.naming.topic,
            &config.naming.version,
        );

        Self {
            tab: Tab::Structure,
            config,
            tree: TreeViewState::default(),
            naming: NamingState {
                input: naming_input,
                selected: 0,
                mode: EditMode::View,
            },
            guide_scroll: 0,
            analyzer: AnalyzerState::default(),
            status_message: None,
            tick: 0,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            set_at: self.tick,
        });
    }

    /// Drop a stale status message. Called once per loop tick.
    pub fn expire_status(&mut self) {
        if let Some(msg) = &self.status_message {
            if self.tick.wrapping_sub(msg.set_at) > STATUS_TICKS {
                self.status_message = None;
            }
        }
    }

    /// True while a key press should be captured as text rather than
    /// treated as a navigation shortcut.
    pub fn is_text_entry(&self) -> bool {
        self.naming.is_editing()
            || (self.tab == Tab::Analyzer
                && matches!(self.analyzer.view, AnalyzerView::Input))
    }

    /// Move from Input to Running, unless the listing is empty or a
    /// request is already outstanding.
    pub fn submit_analysis(&mut self) {
        if !matches!(self.analyzer.view, AnalyzerView::Input) {
            return;
        }
        if self.analyzer.file_list.trim().is_empty() {
            self.set_status("Paste a file listing first (dir /b /s > files.txt)");
            return;
        }
        self.analyzer.view = AnalyzerView::Running;
    }

    /// Discard the current report and return to the empty input form.
    /// Nothing of the previous analysis survives.
    pub fn reset_analysis(&mut self) {
        self.analyzer = AnalyzerState::default();
    }

    /// Leave an error view, keeping the listing so the user can retry.
    pub fn dismiss_analysis_error(&mut self) {
        if matches!(self.analyzer.view, AnalyzerView::Error(_)) {
            self.analyzer.view = AnalyzerView::Input;
            self.analyzer.scroll = 0;
        }
    }
}
