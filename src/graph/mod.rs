//! Intent graph: context index, edge construction and the graph container.
//!
//! Nodes are intents keyed by id; an edge `A -> B` means intent `A` sets a
//! context that intent `B` requires.

mod builder;
mod context_index;

pub use builder::{build_graph, BuildReport};
pub use context_index::ContextIndex;

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// A node of the intent graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentNode {
    pub id: String,
    pub label: String,
}

/// Directed intent graph. Duplicate edges are kept, self-loops never exist.
#[derive(Debug, Clone, Default)]
pub struct IntentGraph {
    graph: DiGraph<IntentNode, ()>,
    index_by_id: HashMap<String, NodeIndex>,
}

impl IntentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or relabel the existing node with the same id.
    pub fn add_node(&mut self, id: &str, label: &str) -> NodeIndex {
        if let Some(&idx) = self.index_by_id.get(id) {
            log::warn!(
                "Duplicate intent id {}: relabeling {:?} as {:?}",
                id,
                self.graph[idx].label,
                label
            );
            self.graph[idx].label = label.to_string();
            return idx;
        }

        let idx = self.graph.add_node(IntentNode {
            id: id.to_string(),
            label: label.to_string(),
        });
        self.index_by_id.insert(id.to_string(), idx);
        idx
    }

    /// Add `source -> target`. Returns false (and adds nothing) for a
    /// self-loop or an unknown endpoint.
    pub fn add_edge(&mut self, source: &str, target: &str) -> bool {
        if source == target {
            return false;
        }
        match (self.index_by_id.get(source), self.index_by_id.get(target)) {
            (Some(&from), Some(&to)) => {
                self.graph.add_edge(from, to, ());
                true
            }
            _ => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &IntentNode> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// `(source id, target id)` pairs in insertion order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .raw_edges()
            .iter()
            .map(|edge| {
                (
                    self.graph[edge.source()].id.as_str(),
                    self.graph[edge.target()].id.as_str(),
                )
            })
            .collect()
    }

    pub fn contains_edge(&self, source: &str, target: &str) -> bool {
        match (self.index_by_id.get(source), self.index_by_id.get(target)) {
            (Some(&from), Some(&to)) => self.graph.contains_edge(from, to),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_rejects_self_loop() {
        let mut graph = IntentGraph::new();
        graph.add_node("a", "A");
        assert!(!graph.add_edge("a", "a"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_rejects_unknown_node() {
        let mut graph = IntentGraph::new();
        graph.add_node("a", "A");
        assert!(!graph.add_edge("a", "missing"));
        assert!(!graph.contains_edge("a", "missing"));
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let mut graph = IntentGraph::new();
        graph.add_node("a", "A");
        graph.add_node("b", "B");
        assert!(graph.add_edge("a", "b"));
        assert!(graph.add_edge("a", "b"));
        assert_eq!(graph.edges(), vec![("a", "b"), ("a", "b")]);
    }

    #[test]
    fn test_duplicate_id_reuses_node() {
        let mut graph = IntentGraph::new();
        let first = graph.add_node("a", "First");
        let second = graph.add_node("a", "Second");
        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.nodes().next().unwrap().label, "Second");
    }
}
