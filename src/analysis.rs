//! AI file-list analysis client
//!
//! Sends a user-supplied file listing to the hosted Gemini `generateContent`
//! endpoint together with a strict response schema, and parses the returned
//! text as a structured [`AnalysisReport`]. One request per submission, no
//! retry, no cancellation; every failure surfaces as an [`AnalysisError`]
//! for the caller to display.

use crate::config::AiConfig;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// One detected file category with producer-supplied percentage.
///
/// Percentages are rendered as-is; the service is not required to make them
/// sum to 100 and we never normalize them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub name: String,
    pub count: u64,
    pub percentage: f64,
}

/// A before/after rename suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameExample {
    pub old: String,
    pub new: String,
}

/// The full structured reply. Replaced wholesale on each successful call.
///
/// All five fields are required; a reply missing any of them is rejected as
/// malformed rather than padded with empty defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub categories: Vec<CategoryStat>,
    pub problems: Vec<String>,
    pub proposed_structure: String,
    pub naming_examples: Vec<RenameExample>,
    pub powershell_script: String,
}

/// Everything that can go wrong between submit and report.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("file list is empty; paste the output of 'dir /b /s' first")]
    EmptyFileList,

    #[error("no API key configured; set GEMINI_API_KEY or [ai] api_key in config.toml")]
    MissingApiKey,

    #[error("could not reach the inference service: {0}")]
    Transport(String),

    #[error("inference service returned HTTP {status}: {message}")]
    Service { status: u16, message: String },

    #[error("malformed reply from inference service: {0}")]
    MalformedReply(String),
}

/// Client for the hosted inference endpoint.
pub struct AnalysisClient {
    agent: ureq::Agent,
    endpoint: String,
    model: String,
    api_key: String,
}

impl AnalysisClient {
    /// Build a client from config. Fails fast if no API key is available.
    pub fn from_config(ai: &AiConfig) -> Result<Self, AnalysisError> {
        let api_key = ai.resolve_api_key().ok_or(AnalysisError::MissingApiKey)?;
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(ai.timeout_secs))
            .build();
        Ok(Self {
            agent,
            endpoint: ai.endpoint.trim_end_matches('/').to_string(),
            model: ai.model.clone(),
            api_key,
        })
    }

    /// Analyze a pasted file listing.
    ///
    /// An empty or whitespace-only listing is rejected before any request
    /// is issued.
    pub fn analyze(&self, file_list: &str) -> Result<AnalysisReport, AnalysisError> {
        if file_list.trim().is_empty() {
            return Err(AnalysisError::EmptyFileList);
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );

        let response = self
            .agent
            .post(&url)
            .send_json(request_body(file_list))
            .map_err(|e| match e {
                ureq::Error::Status(status, response) => {
                    let message = response
                        .into_string()
                        .unwrap_or_else(|_| "<unreadable body>".to_string());
                    AnalysisError::Service { status, message }
                }
                ureq::Error::Transport(t) => AnalysisError::Transport(t.to_string()),
            })?;

        let reply: Value = response
            .into_json()
            .map_err(|e| AnalysisError::MalformedReply(format!("invalid JSON body: {}", e)))?;

        parse_report(&reply)
    }
}

/// The instruction sent alongside the file listing.
pub fn analysis_prompt(file_list: &str) -> String {
    format!(
        "Act as a Windows 10 expert. Analyze this list of files.\n\
         Context: The user is a student preparing for JEE 2027.\n\
         Files:\n\
         {}\n\
         \n\
         Generate a JSON response that categorizes these files and provides a ROBUST PowerShell script.\n\
         The PowerShell script MUST:\n\
         1. Use 'Write-Host' to inform the user what it is doing (e.g., 'Creating folder X', 'Moving file Y').\n\
         2. Create directories using New-Item -ItemType Directory -Force.\n\
         3. Use absolute paths where possible starting from $HOME.\n\
         4. Include a final success message.",
        file_list
    )
}

/// Full request body: prompt plus the structured-output configuration.
pub fn request_body(file_list: &str) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": analysis_prompt(file_list) }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
        }
    })
}

/// The schema the service must conform to. All five fields are required.
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "categories": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "count": { "type": "INTEGER" },
                        "percentage": { "type": "NUMBER" }
                    },
                    "required": ["name", "count", "percentage"]
                }
            },
            "problems": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "proposedStructure": { "type": "STRING" },
            "namingExamples": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "old": { "type": "STRING" },
                        "new": { "type": "STRING" }
                    },
                    "required": ["old", "new"]
                }
            },
            "powershellScript": { "type": "STRING" }
        },
        "required": [
            "categories",
            "problems",
            "proposedStructure",
            "namingExamples",
            "powershellScript"
        ]
    })
}

/// Extract and validate the report from a raw `generateContent` reply.
pub fn parse_report(reply: &Value) -> Result<AnalysisReport, AnalysisError> {
    let text = reply
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            AnalysisError::MalformedReply("reply carries no text candidate".to_string())
        })?;

    serde_json::from_str(text)
        .map_err(|e| AnalysisError::MalformedReply(format!("reply text is not a valid report: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client() -> AnalysisClient {
        // Unroutable endpoint: any attempt to actually send would fail loudly.
        let ai = AiConfig {
            api_key: Some("test-key".to_string()),
            endpoint: "http://192.0.2.1:1".to_string(),
            model: "test-model".to_string(),
            timeout_secs: 1,
        };
        AnalysisClient::from_config(&ai).unwrap()
    }

    fn wrap_candidate(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }] }
            }]
        })
    }

    #[test]
    fn test_empty_file_list_is_rejected_without_request() {
        let client = offline_client();
        assert!(matches!(
            client.analyze(""),
            Err(AnalysisError::EmptyFileList)
        ));
        assert!(matches!(
            client.analyze("   \n\t  "),
            Err(AnalysisError::EmptyFileList)
        ));
    }

    #[test]
    fn test_missing_api_key() {
        let ai = AiConfig {
            api_key: None,
            ..AiConfig::default()
        };
        // Only meaningful when the environment doesn't provide one either
        if std::env::var("GEMINI_API_KEY").is_err() {
            assert!(matches!(
                AnalysisClient::from_config(&ai),
                Err(AnalysisError::MissingApiKey)
            ));
        }
    }

    #[test]
    fn test_request_body_carries_prompt_and_schema() {
        let body = request_body(r"C:\Users\Student\Downloads\notes.pdf");
        let text = body
            .pointer("/contents/0/parts/0/text")
            .and_then(Value::as_str)
            .unwrap();
        assert!(text.contains(r"C:\Users\Student\Downloads\notes.pdf"));
        assert!(text.contains("JEE 2027"));

        let required = body
            .pointer("/generationConfig/responseSchema/required")
            .and_then(Value::as_array)
            .unwrap();
        assert_eq!(required.len(), 5);
        assert_eq!(
            body.pointer("/generationConfig/responseMimeType")
                .and_then(Value::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_parse_report_conforming_reply() {
        let reply = wrap_candidate(
            r#"{
                "categories": [{"name": "PDFs", "count": 10, "percentage": 50}],
                "problems": ["Duplicate screenshots"],
                "proposedStructure": "Documents/01_Academic",
                "namingExamples": [{"old": "final2.pdf", "new": "2026-01-01_Math_Mock_v2.pdf"}],
                "powershellScript": "Write-Host 'done'"
            }"#,
        );
        let report = parse_report(&reply).unwrap();
        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.categories[0].name, "PDFs");
        assert_eq!(report.categories[0].count, 10);
        assert_eq!(report.categories[0].percentage, 50.0);
        assert_eq!(report.problems, vec!["Duplicate screenshots"]);
        assert_eq!(report.naming_examples[0].new, "2026-01-01_Math_Mock_v2.pdf");
    }

    #[test]
    fn test_parse_report_rejects_empty_object() {
        // The original UI accepted `{}` and rendered an all-empty result;
        // here a reply missing required fields is an explicit error.
        let reply = wrap_candidate("{}");
        assert!(matches!(
            parse_report(&reply),
            Err(AnalysisError::MalformedReply(_))
        ));
    }

    #[test]
    fn test_parse_report_rejects_missing_candidate() {
        assert!(matches!(
            parse_report(&json!({"candidates": []})),
            Err(AnalysisError::MalformedReply(_))
        ));
        assert!(matches!(
            parse_report(&json!({})),
            Err(AnalysisError::MalformedReply(_))
        ));
    }

    #[test]
    fn test_parse_report_rejects_non_json_text() {
        let reply = wrap_candidate("I'm sorry, I cannot help with that.");
        assert!(matches!(
            parse_report(&reply),
            Err(AnalysisError::MalformedReply(_))
        ));
    }
}
