use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

/// File holding agent-wide settings in a Dialogflow export
pub const AGENT_FILE: &str = "agent.json";

/// Export manifest stored next to `agent.json`
pub const PACKAGE_FILE: &str = "package.json";

/// Files at the root of an export that are never intents
pub const AGENT_ROOT_FILES: &[&str] = &[AGENT_FILE, PACKAGE_FILE];

#[derive(Debug, Deserialize)]
struct AgentRecord {
    #[serde(rename = "displayName")]
    display_name: Option<String>,
}

/// Human-readable agent name, used as the graph comment.
///
/// Taken from `displayName` in `agent.json` when present. Otherwise the last
/// component of the agent directory is used. A broken `agent.json` only logs
/// a warning.
pub fn extract_agent_name(agent_dir: &Path) -> String {
    match read_display_name(&agent_dir.join(AGENT_FILE)) {
        Ok(Some(name)) if !name.trim().is_empty() => return name,
        Ok(_) => {}
        Err(e) => log::warn!("Ignoring {} in {}: {}", AGENT_FILE, agent_dir.display(), e),
    }

    agent_dir
        .canonicalize()
        .ok()
        .as_deref()
        .unwrap_or(agent_dir)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "agent".to_string())
}

fn read_display_name(path: &Path) -> Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let record: AgentRecord = serde_json::from_str(&content)?;
    Ok(record.display_name)
}
