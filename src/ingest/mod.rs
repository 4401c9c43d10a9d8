pub mod intent;
pub mod metadata;
pub mod walker;

pub use intent::Intent;
pub use metadata::{extract_agent_name, AGENT_ROOT_FILES};
pub use walker::{
    discover_intent_files, resolve_intents_dir, validate_agent_dir, validate_file, IntentFile,
    UsersaysFilter,
};

use std::path::Path;

use crate::config::AgentConfig;
use crate::error::Result;

/// Everything read from an agent export
#[derive(Debug, Clone)]
pub struct LoadedAgent {
    pub name: String,
    /// Intents in file-name order
    pub intents: Vec<Intent>,
}

/// Convenience function to load a whole agent export
///
/// Orchestrates the input side: locate intents → discover files → parse each.
/// The first malformed intent aborts the load.
pub fn load_agent(agent_dir: &Path, config: &AgentConfig) -> Result<LoadedAgent> {
    let usersays = UsersaysFilter::new(&config.usersays_locale)?;
    let intents_dir = resolve_intents_dir(agent_dir, config);
    // A flat export keeps agent.json and package.json beside the intents
    let reserved: &[&str] = if intents_dir == agent_dir {
        AGENT_ROOT_FILES
    } else {
        &[]
    };
    let files = discover_intent_files(&intents_dir, &usersays, reserved)?;

    let mut intents = Vec::with_capacity(files.len());
    for file in &files {
        let intent = Intent::from_file(&file.absolute_path)?;
        log::debug!(
            "Loaded intent {:?} from {} (in: {:?}, out: {:?})",
            intent.name,
            file.relative_path,
            intent.input_contexts,
            intent.output_contexts
        );
        intents.push(intent);
    }

    log::info!("Loaded {} intents", intents.len());

    Ok(LoadedAgent {
        name: extract_agent_name(agent_dir),
        intents,
    })
}
