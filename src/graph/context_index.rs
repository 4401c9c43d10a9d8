//! Context name → consuming intents.

use std::collections::HashMap;

use crate::ingest::Intent;

/// Maps each context to the intents that declare it as an input context.
///
/// Per-context lists keep insertion order: the first intent (in load order)
/// that consumes a context is listed first.
#[derive(Debug, Clone, Default)]
pub struct ContextIndex {
    consumers: HashMap<String, Vec<String>>,
}

impl ContextIndex {
    pub fn build(intents: &[Intent]) -> Self {
        let mut index = Self::default();
        for intent in intents {
            index.insert(intent);
        }
        log::debug!("Context index holds {} contexts", index.len());
        index
    }

    fn insert(&mut self, intent: &Intent) {
        for context in &intent.input_contexts {
            self.consumers
                .entry(context.clone())
                .or_default()
                .push(intent.id.clone());
        }
    }

    /// Intents activated by `context`, or `None` for a context nobody consumes.
    pub fn consumers(&self, context: &str) -> Option<&[String]> {
        self.consumers.get(context).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.consumers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }
}
