//! Filename-convention generator
//!
//! Builds `YYYY-MM-DD_Subject_Topic_version.pdf` names from the four naming
//! fields. Interior whitespace is collapsed to underscores so the result is
//! always a single searchable token.

use chrono::Local;

/// The four editable naming fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingInput {
    pub date: String,
    pub subject: String,
    pub topic: String,
    pub version: String,
}

impl Default for NamingInput {
    fn default() -> Self {
        Self {
            date: Local::now().format("%Y-%m-%d").to_string(),
            subject: "Physics".to_string(),
            topic: "Thermodynamics".to_string(),
            version: "v1".to_string(),
        }
    }
}

impl NamingInput {
    /// Start from config-provided defaults, with today's date.
    pub fn with_defaults(subject: &str, topic: &str, version: &str) -> Self {
        Self {
            date: Local::now().format("%Y-%m-%d").to_string(),
            subject: subject.to_string(),
            topic: topic.to_string(),
            version: version.to_string(),
        }
    }

    /// The resulting example filename.
    pub fn example_filename(&self) -> String {
        format!(
            "{}_{}_{}_{}.pdf",
            self.date.trim(),
            underscored(&self.subject),
            underscored(&self.topic),
            self.version.trim()
        )
    }
}

/// Collapse whitespace runs to single underscores.
fn underscored(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Static example scenarios shown next to the generator.
pub const EXAMPLE_SCENARIOS: &[(&str, &str)] = &[
    ("Exam Paper", "2026-05-12_Math_JEE-Advanced_Mock-01.pdf"),
    ("Project Draft", "2027-01-20_Chemistry_Periodic-Table_Draft-v1.docx"),
    ("Personal Doc", "2025-12-01_Identity_Aadhar-Card_Scan.jpg"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_filename() {
        let input = NamingInput {
            date: "2026-05-12".to_string(),
            subject: "Physics".to_string(),
            topic: "Thermodynamics".to_string(),
            version: "v1".to_string(),
        };
        assert_eq!(
            input.example_filename(),
            "2026-05-12_Physics_Thermodynamics_v1.pdf"
        );
    }

    #[test]
    fn test_whitespace_collapsed() {
        let input = NamingInput {
            date: "2026-05-12".to_string(),
            subject: "Organic  Chemistry".to_string(),
            topic: " Periodic Table ".to_string(),
            version: "v2".to_string(),
        };
        assert_eq!(
            input.example_filename(),
            "2026-05-12_Organic_Chemistry_Periodic_Table_v2.pdf"
        );
    }

    #[test]
    fn test_default_uses_today() {
        let input = NamingInput::default();
        let today = Local::now().format("%Y-%m-%d").to_string();
        assert!(input.example_filename().starts_with(&today));
        assert!(input.example_filename().ends_with(".pdf"));
    }
}
