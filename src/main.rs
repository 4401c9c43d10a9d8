use anyhow::Result;
use clap::Parser;
use intentgraph::graph::{build_graph, ContextIndex};
use intentgraph::ingest::{load_agent, validate_agent_dir, validate_file};
use intentgraph::render::Renderer;
use intentgraph::{Config, IntentGraphError};
use std::path::PathBuf;

/// Generates a graph to visualize a Dialogflow chat from the exported agent.
///
/// Intents are nodes; an edge A -> B means A sets an output context that B
/// requires as an input context.
#[derive(Parser, Debug)]
#[command(name = "intentgraph")]
#[command(version)]
struct Args {
    /// Agent exported directory
    #[arg(value_name = "AGENT_DIR")]
    agent_dir: PathBuf,

    /// File mapping intents and context (accepted, not applied)
    #[arg(short = 'f', value_name = "FUFILL_INTENT_MAP")]
    fufill_intent_map: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Both validation failures end the run before anything is written
    exit_if_invalid(validate_agent_dir(&args.agent_dir));
    if let Some(map_path) = &args.fufill_intent_map {
        exit_if_invalid(validate_file(map_path));
    }

    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", config.logging.level.as_str())
    ).init();

    log::info!("Starting intentgraph v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Agent directory: {}", args.agent_dir.display());

    if let Some(map_path) = &args.fufill_intent_map {
        log::warn!(
            "Fulfillment map {} accepted but not applied: fulfillment mapping is not supported",
            map_path.display()
        );
    }

    let agent = load_agent(&args.agent_dir, &config.agent)?;
    if agent.intents.is_empty() {
        log::warn!("No intent files found. Check AGENT_DIR and agent.intents_dir.");
    }

    let index = ContextIndex::build(&agent.intents);
    let (graph, report) = build_graph(&agent.intents, &index);
    for (intent_id, context) in &report.dangling_contexts {
        log::debug!("Dangling context {:?} set by {}", context, intent_id);
    }

    let renderer = Renderer::new(config.render.clone());
    let rendered = renderer.render(&graph, &agent.name)?;

    log::info!("=== Intent Graph Complete ===");
    log::info!("Agent: {}", agent.name);
    log::info!("Intents: {}", graph.node_count());
    log::info!("Transitions: {}", graph.edge_count());
    log::info!("Self-loops skipped: {}", report.self_loops_skipped);
    log::info!("DOT source: {}", rendered.source_path.display());
    log::info!("Diagram: {}", rendered.output_path.display());

    Ok(())
}

/// Print a validation failure to stdout and exit with status 1.
fn exit_if_invalid(result: intentgraph::Result<()>) {
    if let Err(e) = result {
        match e {
            IntentGraphError::InvalidInput(msg) => println!("ERROR: {}", msg),
            other => println!("ERROR: {}", other),
        }
        std::process::exit(1);
    }
}
