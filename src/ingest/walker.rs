use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::AgentConfig;
use crate::error::{IntentGraphError, Result};

/// Locale value that excludes the usersays files of every locale
pub const ANY_LOCALE: &str = "*";

/// A discovered intent definition file
#[derive(Debug, Clone)]
pub struct IntentFile {
    /// File name relative to the intents directory
    pub relative_path: String,
    pub absolute_path: PathBuf,
}

/// Recognizes example-utterance files (`<intent>_usersays_<locale>.json`).
#[derive(Debug, Clone)]
pub struct UsersaysFilter {
    pattern: Regex,
}

impl UsersaysFilter {
    /// Build a filter for a single locale tag, or for all locales with `"*"`.
    pub fn new(locale: &str) -> Result<Self> {
        let locale_pattern = if locale == ANY_LOCALE {
            r"[^/\\]+".to_string()
        } else {
            regex::escape(locale)
        };
        let pattern = Regex::new(&format!(r"(?i)_usersays_{}\.json$", locale_pattern))
            .map_err(|e| {
                IntentGraphError::Config(format!("usersays_locale {:?}: {}", locale, e))
            })?;
        Ok(Self { pattern })
    }

    pub fn is_usersays(&self, file_name: &str) -> bool {
        self.pattern.is_match(file_name)
    }
}

/// Check that the agent export path is a directory.
pub fn validate_agent_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(IntentGraphError::InvalidInput(format!(
            "'{}' is not a valid directory",
            path.display()
        )));
    }
    Ok(())
}

/// Check that an input path is a regular file.
pub fn validate_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(IntentGraphError::InvalidInput(format!(
            "'{}' is not a valid file",
            path.display()
        )));
    }
    Ok(())
}

/// Directory holding the intent files of an agent export.
///
/// Dialogflow exports keep them under `intents/`; when that sub-directory is
/// missing the agent directory itself is scanned.
pub fn resolve_intents_dir(agent_dir: &Path, config: &AgentConfig) -> PathBuf {
    let nested = agent_dir.join(&config.intents_dir);
    if nested.is_dir() {
        nested
    } else {
        log::debug!(
            "No {} directory in {}, scanning it directly",
            config.intents_dir.display(),
            agent_dir.display()
        );
        agent_dir.to_path_buf()
    }
}

/// Discover the intent definition files directly inside `intents_dir`.
///
/// Only `.json` files (case-insensitive) are returned, sorted by file name so
/// that graphs are reproducible across runs. Usersays files and the file
/// names listed in `reserved` are skipped.
pub fn discover_intent_files(
    intents_dir: &Path,
    usersays: &UsersaysFilter,
    reserved: &[&str],
) -> Result<Vec<IntentFile>> {
    let mut files = Vec::new();
    let mut skipped = 0usize;

    for entry in WalkDir::new(intents_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_json = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if !is_json {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if usersays.is_usersays(&file_name) {
            log::debug!("Skipping example-utterance file {}", file_name);
            skipped += 1;
            continue;
        }

        if reserved.iter().any(|r| r.eq_ignore_ascii_case(&file_name)) {
            log::debug!("Skipping non-intent file {}", file_name);
            continue;
        }

        files.push(IntentFile {
            relative_path: file_name,
            absolute_path: path.to_path_buf(),
        });
    }

    log::info!(
        "Discovered {} intent files in {} ({} usersays files skipped)",
        files.len(),
        intents_dir.display(),
        skipped
    );
    Ok(files)
}
