//! The recommended Documents folder taxonomy
//!
//! A statically declared, immutable forest of named folders. The data is
//! owned by this module for the lifetime of the process; expand/collapse
//! state lives in the TUI layer, keyed by node path, never here.

use lazy_static::lazy_static;

/// One folder in the recommended structure, possibly with children.
#[derive(Debug, Clone)]
pub struct FolderNode {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub top_level: bool,
    pub subfolders: Vec<FolderNode>,
}

impl FolderNode {
    fn top(name: &'static str, description: &'static str, subfolders: Vec<FolderNode>) -> Self {
        Self {
            name,
            description: Some(description),
            top_level: true,
            subfolders,
        }
    }

    fn branch(name: &'static str, subfolders: Vec<FolderNode>) -> Self {
        Self {
            name,
            description: None,
            top_level: false,
            subfolders,
        }
    }

    fn leaf(name: &'static str) -> Self {
        Self::branch(name, Vec::new())
    }

    pub fn is_leaf(&self) -> bool {
        self.subfolders.is_empty()
    }
}

lazy_static! {
    /// The shipped taxonomy. Depth never exceeds 3.
    pub static ref FOLDER_STRUCTURE: Vec<FolderNode> = vec![
        FolderNode::top(
            "01_Academic",
            "Active school and exam prep material",
            vec![
                FolderNode::branch(
                    "JEE_2027",
                    vec![
                        FolderNode::leaf("Physics"),
                        FolderNode::leaf("Chemistry"),
                        FolderNode::leaf("Math"),
                        FolderNode::leaf("Trackers_Schedules"),
                    ],
                ),
                FolderNode::leaf("School_Projects"),
                FolderNode::leaf("Assignments_Pending"),
            ],
        ),
        FolderNode::top(
            "02_Resources",
            "Reference material that rarely changes",
            vec![
                FolderNode::leaf("Question_Papers"),
                FolderNode::leaf("Digital_Textbooks"),
                FolderNode::leaf("Formula_Sheets"),
                FolderNode::leaf("Video_Lectures"),
            ],
        ),
        FolderNode::top(
            "03_Personal",
            "Non-academic life management",
            vec![
                FolderNode::leaf("Finance_Scholarships"),
                FolderNode::leaf("Identity_Docs"),
                FolderNode::leaf("Health_Medical"),
                FolderNode::leaf("Hobbies"),
            ],
        ),
        FolderNode::top(
            "04_Media",
            "Visual and creative assets",
            vec![
                FolderNode::leaf("Photos"),
                FolderNode::leaf("Videos"),
                FolderNode::leaf("Wallpapers_Icons"),
            ],
        ),
        FolderNode::top(
            "05_Archive",
            "Completed work and old files",
            vec![
                FolderNode::leaf("Previous_Grades"),
                FolderNode::leaf("Completed_Projects"),
            ],
        ),
        FolderNode::top(
            "99_Inbox",
            "The 'Temporary' landing zone for unsorted files",
            Vec::new(),
        ),
    ];
}

/// Look up a node by its path (sequence of child indices from the forest
/// roots). Returns `None` for an out-of-range or empty path.
pub fn node_at<'a>(forest: &'a [FolderNode], path: &[usize]) -> Option<&'a FolderNode> {
    let (&first, rest) = path.split_first()?;
    let mut node = forest.get(first)?;
    for &idx in rest {
        node = node.subfolders.get(idx)?;
    }
    Some(node)
}

/// Count all nodes in the forest (pre-order, so also the number of
/// directory-creation lines the setup script will emit).
pub fn node_count(forest: &[FolderNode]) -> usize {
    forest
        .iter()
        .map(|n| 1 + node_count(&n.subfolders))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forest_shape() {
        assert_eq!(FOLDER_STRUCTURE.len(), 6);
        assert!(FOLDER_STRUCTURE.iter().all(|n| n.top_level));
        assert!(FOLDER_STRUCTURE.iter().all(|n| n.description.is_some()));

        // 99_Inbox is the only top-level leaf
        let inbox = FOLDER_STRUCTURE.last().unwrap();
        assert_eq!(inbox.name, "99_Inbox");
        assert!(inbox.is_leaf());
    }

    #[test]
    fn test_depth_limit() {
        fn depth(node: &FolderNode) -> usize {
            1 + node.subfolders.iter().map(depth).max().unwrap_or(0)
        }
        let max = FOLDER_STRUCTURE.iter().map(depth).max().unwrap();
        assert!(max <= 3, "shipped taxonomy should never exceed depth 3");
    }

    #[test]
    fn test_node_at() {
        let jee = node_at(&FOLDER_STRUCTURE, &[0, 0]).unwrap();
        assert_eq!(jee.name, "JEE_2027");
        assert!(!jee.top_level);

        let physics = node_at(&FOLDER_STRUCTURE, &[0, 0, 0]).unwrap();
        assert_eq!(physics.name, "Physics");
        assert!(physics.is_leaf());

        assert!(node_at(&FOLDER_STRUCTURE, &[]).is_none());
        assert!(node_at(&FOLDER_STRUCTURE, &[99]).is_none());
        assert!(node_at(&FOLDER_STRUCTURE, &[5, 0]).is_none());
    }

    #[test]
    fn test_node_count() {
        // 6 top-level + 3+4 under Academic + 4 + 4 + 3 + 2 = 26
        assert_eq!(node_count(&FOLDER_STRUCTURE), 26);
    }
}
