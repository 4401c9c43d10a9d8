//! Edge construction from output contexts.

use super::{ContextIndex, IntentGraph};
use crate::ingest::Intent;

/// Side information gathered while building the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// `(intent id, context)` for output contexts no intent consumes
    pub dangling_contexts: Vec<(String, String)>,
    /// Consumer entries skipped because they point back at the producer
    pub self_loops_skipped: usize,
}

/// Build the intent graph.
///
/// Every intent becomes a node. For each output context `c` of intent `A`
/// (load order, then declaration order) an edge `A -> B` is added for every
/// consumer `B` of `c` in the index, except `A` itself.
pub fn build_graph(intents: &[Intent], index: &ContextIndex) -> (IntentGraph, BuildReport) {
    let mut graph = IntentGraph::new();
    let mut report = BuildReport::default();

    // All nodes first so that edges to later intents resolve.
    for intent in intents {
        graph.add_node(&intent.id, &intent.name);
    }

    for intent in intents {
        for context in &intent.output_contexts {
            let Some(consumers) = index.consumers(context) else {
                log::debug!("Output context {:?} of {:?} has no consumer", context, intent.name);
                report
                    .dangling_contexts
                    .push((intent.id.clone(), context.clone()));
                continue;
            };

            for target in consumers {
                if *target == intent.id {
                    report.self_loops_skipped += 1;
                    continue;
                }
                graph.add_edge(&intent.id, target);
            }
        }
    }

    log::info!(
        "Built intent graph: {} nodes, {} edges ({} dangling contexts)",
        graph.node_count(),
        graph.edge_count(),
        report.dangling_contexts.len()
    );

    (graph, report)
}
