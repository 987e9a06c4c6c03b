//! Collapsible folder-tree widget
//!
//! Rendering is a pure function of (static forest, expansion-state map,
//! cursor); the forest itself is never mutated. Each visible node becomes
//! one row, children indented one level deeper.

use crate::taxonomy::FolderNode;
use crate::tui::state::TreeViewState;
use crate::tui::theme::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// One visible row of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub path: Vec<usize>,
    pub depth: usize,
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub top_level: bool,
    pub has_children: bool,
    pub expanded: bool,
}

/// Flatten the forest into the rows currently visible under `state`.
///
/// A collapsed node contributes itself but none of its descendants; their
/// own expansion flags are preserved in `state` for when it reopens.
pub fn visible_rows(forest: &[FolderNode], state: &TreeViewState) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    collect(forest, state, &mut Vec::new(), &mut rows);
    rows
}

fn collect(
    nodes: &[FolderNode],
    state: &TreeViewState,
    path: &mut Vec<usize>,
    rows: &mut Vec<TreeRow>,
) {
    for (idx, node) in nodes.iter().enumerate() {
        path.push(idx);
        let expanded = state.is_expanded(path);
        rows.push(TreeRow {
            path: path.clone(),
            depth: path.len() - 1,
            name: node.name,
            description: node.description,
            top_level: node.top_level,
            has_children: !node.is_leaf(),
            expanded,
        });
        if expanded {
            collect(&node.subfolders, state, path, rows);
        }
        path.pop();
    }
}

/// Render the tree as a list, highlighting the cursor row.
pub fn render_tree(
    f: &mut Frame,
    area: Rect,
    forest: &[FolderNode],
    state: &TreeViewState,
    title: &str,
) {
    let rows = visible_rows(forest, state);
    let wide = area.width >= 70;

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let is_selected = i == state.cursor;

            // Leaves get no expand affordance
            let glyph = if !row.has_children {
                "  "
            } else if row.expanded {
                "▾ "
            } else {
                "▸ "
            };

            let name_style = if is_selected {
                Styles::selected()
            } else if row.top_level {
                Styles::emphasis()
            } else {
                Styles::primary()
            };

            let mut spans = vec![
                Span::raw("  ".repeat(row.depth)),
                Span::styled(glyph, if is_selected { Styles::selected() } else { Styles::secondary() }),
                Span::styled(row.name, name_style),
            ];
            if wide && row.depth == 0 {
                if let Some(desc) = row.description {
                    spans.push(Span::styled(format!("  — {}", desc), Styles::secondary()));
                }
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border())
            .title(title.to_string())
            .padding(ratatui::widgets::Padding::uniform(1)),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor.min(rows.len().saturating_sub(1))));
    f.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::FOLDER_STRUCTURE;

    #[test]
    fn test_default_visibility() {
        let state = TreeViewState::default();
        let rows = visible_rows(&FOLDER_STRUCTURE, &state);

        // Top-level nodes open by default: all roots plus their direct
        // children are visible, nothing at depth 2
        let roots = rows.iter().filter(|r| r.depth == 0).count();
        assert_eq!(roots, FOLDER_STRUCTURE.len());
        assert!(rows.iter().any(|r| r.depth == 1));
        assert!(rows.iter().all(|r| r.depth < 2));

        // Every depth-0 row renders expanded, every deeper row collapsed
        for row in &rows {
            assert_eq!(row.expanded && row.has_children, row.depth == 0 && row.has_children);
        }
    }

    #[test]
    fn test_leaf_rows_have_no_affordance() {
        let state = TreeViewState::default();
        let rows = visible_rows(&FOLDER_STRUCTURE, &state);
        let inbox = rows.iter().find(|r| r.name == "99_Inbox").unwrap();
        assert!(!inbox.has_children);
    }

    #[test]
    fn test_expanding_child_reveals_grandchildren() {
        let mut state = TreeViewState::default();
        let before = visible_rows(&FOLDER_STRUCTURE, &state).len();

        state.toggle(&[0, 0]); // JEE_2027
        let rows = visible_rows(&FOLDER_STRUCTURE, &state);
        assert_eq!(rows.len(), before + 4);
        assert!(rows.iter().any(|r| r.name == "Physics" && r.depth == 2));
    }

    #[test]
    fn test_double_toggle_restores_visible_set() {
        let mut state = TreeViewState::default();
        let before = visible_rows(&FOLDER_STRUCTURE, &state);

        state.toggle(&[1]);
        state.toggle(&[1]);
        let after = visible_rows(&FOLDER_STRUCTURE, &state);
        assert_eq!(before, after);
    }

    #[test]
    fn test_collapse_hides_but_preserves_child_state() {
        let mut state = TreeViewState::default();
        state.toggle(&[0, 0]); // open JEE_2027
        state.toggle(&[0]); // collapse 01_Academic

        let rows = visible_rows(&FOLDER_STRUCTURE, &state);
        assert!(!rows.iter().any(|r| r.name == "JEE_2027"));

        state.toggle(&[0]); // reopen the parent
        let rows = visible_rows(&FOLDER_STRUCTURE, &state);
        // JEE_2027 comes back in the state it was left in: expanded
        assert!(rows.iter().any(|r| r.name == "JEE_2027" && r.expanded));
        assert!(rows.iter().any(|r| r.name == "Physics"));
    }

    #[test]
    fn test_rows_are_preorder() {
        let state = TreeViewState::default();
        let rows = visible_rows(&FOLDER_STRUCTURE, &state);
        // A parent always appears immediately before its first child
        for (i, row) in rows.iter().enumerate() {
            if row.depth == 1 {
                let parent = rows[..i]
                    .iter()
                    .rev()
                    .find(|r| r.depth == 0)
                    .expect("depth-1 row without a preceding root");
                assert_eq!(parent.path[0], row.path[0]);
            }
        }
    }
}
