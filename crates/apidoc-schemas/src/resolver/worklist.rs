//! Fixed-point worklist over named definitions
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::resolver::key::{RefKey, ResolvedTable};
use crate::swagger::{Definitions, Schema};
use tracing::{debug, trace};

/// Result of running a worklist to its fixed point
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    /// Output for every definition that resolved
    pub resolved: ResolvedTable<T>,
    /// Definitions still pending when a pass made no progress, in key order
    pub unresolved: Vec<RefKey>,
    /// Number of passes over the pending set
    pub passes: usize,
}

impl<T> Outcome<T> {
    pub fn converged(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Pending and completed state of one resolution run
///
/// Each run owns its worklist; the value and row resolvers never share one.
/// A pass tries every pending definition once, and a definition completed
/// early in a pass is visible to the rest of that pass. The run stops when
/// nothing is pending or a whole pass completes nothing.
#[derive(Debug)]
pub struct Worklist<'a, T> {
    pending: Vec<(RefKey, &'a Schema)>,
    completed: ResolvedTable<T>,
    passes: usize,
}

impl<'a, T> Worklist<'a, T> {
    /// Seed the worklist with definitions in the given iteration order
    pub fn new<I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a Schema)>,
    {
        Self {
            pending: definitions
                .into_iter()
                .map(|(name, schema)| (RefKey::definition(name), schema))
                .collect(),
            completed: ResolvedTable::new(),
            passes: 0,
        }
    }

    pub fn from_definitions(definitions: &'a Definitions) -> Self {
        Self::new(definitions.iter().map(|(name, schema)| (name.as_str(), schema)))
    }

    /// Run passes until the fixed point, using `step` to resolve one schema
    /// against the definitions completed so far
    pub fn run<F>(mut self, mut step: F) -> Outcome<T>
    where
        F: FnMut(&ResolvedTable<T>, &Schema) -> Option<T>,
    {
        while !self.pending.is_empty() {
            self.passes += 1;
            let before = self.pending.len();

            for (key, schema) in std::mem::take(&mut self.pending) {
                match step(&self.completed, schema) {
                    Some(output) => {
                        trace!(definition = %key, pass = self.passes, "Resolved definition");
                        self.completed.insert(key, output);
                    }
                    None => self.pending.push((key, schema)),
                }
            }

            if self.pending.len() == before {
                debug!(
                    pending = self.pending.len(),
                    passes = self.passes,
                    "Resolution stopped without progress"
                );
                break;
            }
        }

        let mut unresolved: Vec<RefKey> = self.pending.into_iter().map(|(key, _)| key).collect();
        unresolved.sort();

        Outcome {
            resolved: self.completed,
            unresolved,
            passes: self.passes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swagger::SchemaType;

    fn depth(table: &ResolvedTable<usize>, schema: &Schema) -> Option<usize> {
        match schema.ref_key() {
            Some(key) => table.get(key).map(|d| d + 1),
            None => Some(0),
        }
    }

    #[test]
    fn test_empty_definitions() {
        let definitions = Definitions::new();
        let outcome = Worklist::from_definitions(&definitions).run(depth);
        assert!(outcome.converged());
        assert!(outcome.resolved.is_empty());
        assert_eq!(outcome.passes, 0);
    }

    #[test]
    fn test_chain_resolves_in_any_order() {
        let leaf = Schema::of_type(SchemaType::String);
        let middle = Schema::reference_to("#/definitions/C");
        let top = Schema::reference_to("#/definitions/B");

        // Declared against dependency order
        let outcome = Worklist::new([("A", &top), ("B", &middle), ("C", &leaf)]).run(depth);

        assert!(outcome.converged());
        assert_eq!(outcome.resolved["#/definitions/A"], 2);
        assert_eq!(outcome.resolved["#/definitions/C"], 0);
        assert!(outcome.passes <= 3);
    }

    #[test]
    fn test_cycle_stops_without_progress() {
        let a = Schema::reference_to("#/definitions/B");
        let b = Schema::reference_to("#/definitions/A");
        let c = Schema::of_type(SchemaType::Integer);

        let outcome = Worklist::new([("A", &a), ("B", &b), ("C", &c)]).run(depth);

        assert!(!outcome.converged());
        assert_eq!(
            outcome.unresolved,
            vec![RefKey::definition("A"), RefKey::definition("B")]
        );
        assert!(outcome.resolved.contains_key("#/definitions/C"));
        assert_eq!(outcome.passes, 2);
    }
}
