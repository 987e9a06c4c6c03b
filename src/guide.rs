//! Static setup-guide and automation content
//!
//! The step-by-step cleanup instructions and the scheduled-cleanup snippet
//! shown on the Guide and Automation tabs. Read-only data, same ownership
//! rules as the taxonomy.

/// Which part of the machine a setup step is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCategory {
    Desktop,
    Downloads,
    QuickAccess,
    Automation,
}

impl StepCategory {
    pub fn label(self) -> &'static str {
        match self {
            StepCategory::Desktop => "DESKTOP",
            StepCategory::Downloads => "DOWNLOADS",
            StepCategory::QuickAccess => "QUICK ACCESS",
            StepCategory::Automation => "AUTOMATION",
        }
    }
}

/// One step of the desktop overhaul, with its checklist.
#[derive(Debug, Clone, Copy)]
pub struct SetupStep {
    pub id: &'static str,
    pub category: StepCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

pub const SETUP_STEPS: &[SetupStep] = &[
    SetupStep {
        id: "clean-desktop",
        category: StepCategory::Desktop,
        title: "The Zero-Icon Desktop",
        description: "Your desktop is a workspace, not a storage unit.",
        details: &[
            "Create a folder named 'Desktop_Cleanup_Date' on your desktop.",
            "Move EVERY single file and folder into this new folder.",
            "Right-click Desktop -> View -> Uncheck 'Show desktop icons'.",
            "Pin only your 3 most used apps to the Taskbar.",
            "Move the 'Desktop_Cleanup' folder to '99_Inbox' for sorting later.",
        ],
    },
    SetupStep {
        id: "clean-downloads",
        category: StepCategory::Downloads,
        title: "Taming the Downloads Folder",
        description: "Empty your downloads daily to prevent 'Digital Rust'.",
        details: &[
            "Open Downloads. Sort by 'Date Modified'.",
            "Delete everything you don't recognize or haven't opened in 30 days.",
            "Move academic PDFs to '02_Resources/Question_Papers' or 'Digital_Textbooks'.",
            "Move personal photos to '04_Media/Photos'.",
            "Goal: The Downloads folder should be EMPTY by the end of the day.",
        ],
    },
    SetupStep {
        id: "quick-access",
        category: StepCategory::QuickAccess,
        title: "The Quick Access Shortcut",
        description: "Navigate like a pro with sidebar pinning.",
        details: &[
            "Go to your Documents -> 01_Academic.",
            "Right-click the folder -> Select 'Pin to Quick Access'.",
            "Repeat for '02_Resources' and '99_Inbox'.",
            "Unpin 'Recent folders' from Quick Access settings to reduce clutter.",
        ],
    },
];

/// The one-line scheduled cleanup script shown on the Automation tab.
pub const AUTO_CLEAN_SCRIPT: &str = r#"Get-ChildItem -Path "$HOME\Downloads" -Recurse | Where-Object { $_.LastWriteTime -lt (Get-Date).AddDays(-30) } | Remove-Item -Force"#;

/// Suggested file name for the snippet above.
pub const AUTO_CLEAN_FILENAME: &str = "CleanDownloads.ps1";

pub const AUTO_CLEAN_DESCRIPTION: &str = "This simple one-line script deletes files in your Downloads folder that are older than 30 days.";

/// How to put the snippet to work, shown beneath it.
pub const AUTO_CLEAN_USAGE: &[(&str, &str)] = &[
    (
        "Step 1: Test",
        "Open 'PowerShell' from Start menu, paste the code, and hit Enter to clean immediately.",
    ),
    (
        "Step 2: Automate",
        "Open 'Task Scheduler', create a new task to run this script every Sunday morning.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_ids_unique() {
        let mut ids: Vec<&str> = SETUP_STEPS.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SETUP_STEPS.len());
    }

    #[test]
    fn test_steps_have_details() {
        for step in SETUP_STEPS {
            assert!(!step.details.is_empty(), "step {} has no checklist", step.id);
        }
    }

    #[test]
    fn test_auto_clean_targets_downloads() {
        assert!(AUTO_CLEAN_SCRIPT.contains(r"$HOME\Downloads"));
        assert!(AUTO_CLEAN_SCRIPT.contains("AddDays(-30)"));
    }
}
