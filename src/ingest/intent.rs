//! Typed intent records as exported by Dialogflow.

use serde::Deserialize;
use std::path::Path;

use crate::error::{IntentGraphError, Result};

/// A single intent of the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub id: String,
    /// Display name, used as the node label.
    pub name: String,
    /// Contexts that must be active for this intent to trigger.
    pub input_contexts: Vec<String>,
    /// Contexts set when the intent resolves (first response only).
    pub output_contexts: Vec<String>,
}

/// On-disk shape of an intent file. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct IntentRecord {
    id: String,
    name: String,
    contexts: Vec<String>,
    responses: Vec<ResponseRecord>,
}

#[derive(Debug, Deserialize)]
struct ResponseRecord {
    #[serde(rename = "affectedContexts")]
    affected_contexts: Vec<AffectedContext>,
}

#[derive(Debug, Deserialize)]
struct AffectedContext {
    name: String,
}

impl Intent {
    /// Parse an intent record from JSON text. `path` is only used in errors.
    pub fn from_json(content: &str, path: &str) -> Result<Self> {
        let record: IntentRecord =
            serde_json::from_str(content).map_err(|e| IntentGraphError::MalformedIntent {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let first_response = record.responses.into_iter().next().ok_or_else(|| {
            IntentGraphError::MalformedIntent {
                path: path.to_string(),
                message: "`responses` is empty".to_string(),
            }
        })?;

        Ok(Self {
            id: record.id,
            name: record.name,
            input_contexts: record.contexts,
            output_contexts: first_response
                .affected_contexts
                .into_iter()
                .map(|c| c.name)
                .collect(),
        })
    }

    /// Read and parse one intent file. The file is closed before returning.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content, &path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dialogflow_intent() {
        let content = r#"
{
  "id": "0d3c1a8e-1111-4f4e-9a5c-000000000001",
  "name": "Order - confirm",
  "auto": true,
  "contexts": ["order-followup", "cart"],
  "responses": [
    {
      "resetContexts": false,
      "affectedContexts": [
        {"name": "order-confirmed", "parameters": {}, "lifespan": 5},
        {"name": "payment", "parameters": {}, "lifespan": 2}
      ],
      "parameters": []
    },
    {
      "affectedContexts": [{"name": "ignored", "lifespan": 1}]
    }
  ],
  "priority": 500000
}
"#;
        let intent = Intent::from_json(content, "Order - confirm.json").unwrap();
        assert_eq!(intent.id, "0d3c1a8e-1111-4f4e-9a5c-000000000001");
        assert_eq!(intent.name, "Order - confirm");
        assert_eq!(intent.input_contexts, vec!["order-followup", "cart"]);
        assert_eq!(intent.output_contexts, vec!["order-confirmed", "payment"]);
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let content = concat!(
            r#"{"name": "NoId", "contexts": [], "#,
            r#""responses": [{"affectedContexts": []}]}"#,
        );
        let err = Intent::from_json(content, "NoId.json").unwrap_err();
        match err {
            IntentGraphError::MalformedIntent { path, message } => {
                assert_eq!(path, "NoId.json");
                assert!(message.contains("id"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_responses_is_malformed() {
        let content = r#"{"id": "x", "name": "X", "contexts": [], "responses": []}"#;
        let err = Intent::from_json(content, "X.json").unwrap_err();
        assert!(matches!(err, IntentGraphError::MalformedIntent { .. }));
        assert!(err.to_string().contains("responses"));
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let content = concat!(
            r#"{"id": "x", "name": "X", "contexts": "greeted", "#,
            r#""responses": [{"affectedContexts": []}]}"#,
        );
        let err = Intent::from_json(content, "X.json").unwrap_err();
        assert!(matches!(err, IntentGraphError::MalformedIntent { .. }));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = Intent::from_json("{not json", "Broken.json").unwrap_err();
        assert!(matches!(err, IntentGraphError::MalformedIntent { .. }));
    }
}
