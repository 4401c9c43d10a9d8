pub mod config;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod render;

pub use config::Config;
pub use error::{IntentGraphError, Result};
pub use graph::{build_graph, BuildReport, ContextIndex, IntentGraph};
pub use ingest::{load_agent, Intent, LoadedAgent};
