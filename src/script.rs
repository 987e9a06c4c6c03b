//! Baseline setup-script generator
//!
//! Serializes the static taxonomy into an idempotent PowerShell script that
//! recreates the folder structure under Documents. Pure function of the
//! forest; the same input always yields byte-identical output.

use crate::taxonomy::{FolderNode, FOLDER_STRUCTURE};

const PREAMBLE: &str = r#"Set-Location "$HOME\Documents""#;
const SUCCESS_LINE: &str = r#"Write-Host "Success! Your new structure has been created in Documents." -ForegroundColor Green"#;

/// Generate the setup script for the shipped taxonomy.
pub fn baseline_script() -> String {
    script_for(&FOLDER_STRUCTURE)
}

/// Generate a setup script for an arbitrary forest.
///
/// One `New-Item -Force` line per node, pre-order (parent before children),
/// each carrying the full accumulated path from the Documents root.
pub fn script_for(forest: &[FolderNode]) -> String {
    let mut lines = vec![PREAMBLE.to_string()];
    walk(forest, "", &mut lines);
    lines.push(SUCCESS_LINE.to_string());
    lines.join("\n")
}

fn walk(nodes: &[FolderNode], prefix: &str, lines: &mut Vec<String>) {
    for node in nodes {
        let path = if prefix.is_empty() {
            node.name.to_string()
        } else {
            format!("{}\\{}", prefix, node.name)
        };
        lines.push(format!(
            r#"New-Item -ItemType Directory -Force -Path "{}" | Out-Null"#,
            path
        ));
        walk(&node.subfolders, &path, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::node_count;

    #[test]
    fn test_deterministic() {
        assert_eq!(baseline_script(), baseline_script());
    }

    #[test]
    fn test_line_structure() {
        let script = baseline_script();
        let lines: Vec<&str> = script.lines().collect();

        assert_eq!(lines.first(), Some(&PREAMBLE));
        assert_eq!(lines.last(), Some(&SUCCESS_LINE));
        // One New-Item line per node
        assert_eq!(lines.len(), node_count(&FOLDER_STRUCTURE) + 2);
        for line in &lines[1..lines.len() - 1] {
            assert!(line.starts_with("New-Item -ItemType Directory -Force -Path "));
            assert!(line.ends_with("| Out-Null"));
        }
    }

    #[test]
    fn test_preorder_parent_before_children() {
        let script = baseline_script();
        let academic = script.find(r#""01_Academic""#).unwrap();
        let jee = script.find(r#""01_Academic\JEE_2027""#).unwrap();
        let physics = script.find(r#""01_Academic\JEE_2027\Physics""#).unwrap();
        assert!(academic < jee);
        assert!(jee < physics);

        // Every directory line must be preceded by its parent's line
        for line in script.lines().skip(1) {
            let Some(path) = line
                .strip_prefix(r#"New-Item -ItemType Directory -Force -Path ""#)
                .and_then(|rest| rest.split('"').next())
            else {
                continue;
            };
            if let Some((parent, _)) = path.rsplit_once('\\') {
                let parent_line =
                    format!(r#"New-Item -ItemType Directory -Force -Path "{}" | Out-Null"#, parent);
                let parent_pos = script.find(&parent_line).expect("parent line missing");
                let child_pos = script.find(line).unwrap();
                assert!(parent_pos < child_pos, "{} created before {}", path, parent);
            }
        }
    }

    #[test]
    fn test_paths_accumulate_from_root() {
        let script = baseline_script();
        assert!(script.contains(r#""02_Resources\Question_Papers""#));
        assert!(script.contains(r#""99_Inbox""#));
        // No absolute paths; everything is relative to the Set-Location root
        assert!(!script.contains(r"C:\"));
    }
}
