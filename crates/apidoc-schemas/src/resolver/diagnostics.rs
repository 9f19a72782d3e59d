//! Explanations for definitions left unresolved
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::resolver::key::RefKey;
use crate::swagger::{Definitions, Schema};
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

/// Why a definition is missing from the resolved tables
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionIssue {
    /// A reference names something that is not a definition
    #[error("definition '{definition}' references missing '{target}'")]
    DanglingReference { definition: RefKey, target: String },

    /// Definitions that reference each other and can never complete
    #[error("reference cycle between {}", join_keys(.members))]
    ReferenceCycle { members: Vec<RefKey> },

    /// A definition waiting on other unresolved definitions
    #[error("definition '{definition}' depends on unresolved {}", join_keys(.waiting_on))]
    BlockedDefinition {
        definition: RefKey,
        waiting_on: Vec<RefKey>,
    },
}

impl ResolutionIssue {
    /// Definitions this issue is about
    pub fn definitions(&self) -> Vec<&RefKey> {
        match self {
            Self::DanglingReference { definition, .. } => vec![definition],
            Self::ReferenceCycle { members } => members.iter().collect(),
            Self::BlockedDefinition { definition, .. } => vec![definition],
        }
    }
}

fn join_keys(keys: &[RefKey]) -> String {
    keys.iter()
        .map(RefKey::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Explain every unresolved definition
///
/// Output order: dangling references, then cycles, then blocked definitions,
/// each sorted by key.
pub fn diagnose(definitions: &Definitions, unresolved: &[RefKey]) -> Vec<ResolutionIssue> {
    if unresolved.is_empty() {
        return Vec::new();
    }

    let pending: BTreeSet<&RefKey> = unresolved.iter().collect();
    let known: BTreeSet<RefKey> = definitions.keys().map(|name| RefKey::definition(name)).collect();

    let mut dangling = Vec::new();
    let mut graph: DiGraph<RefKey, ()> = DiGraph::new();
    let mut node_index_map: HashMap<RefKey, NodeIndex> = HashMap::new();
    let mut dependencies: HashMap<&RefKey, Vec<RefKey>> = HashMap::new();

    for key in pending.iter().copied() {
        node_index_map.insert(key.clone(), graph.add_node(key.clone()));
    }

    for key in pending.iter().copied() {
        let Some(schema) = key.definition_name().and_then(|name| definitions.get(name)) else {
            continue;
        };
        let from = node_index_map[key];

        let mut waiting_on = Vec::new();
        for target in collect_refs(schema) {
            match node_index_map.get(target) {
                Some(&to) => {
                    graph.add_edge(from, to, ());
                    waiting_on.push(graph[to].clone());
                }
                None if !known.contains(target) => {
                    dangling.push(ResolutionIssue::DanglingReference {
                        definition: key.clone(),
                        target: target.to_string(),
                    })
                }
                None => {}
            }
        }
        dependencies.insert(key, waiting_on);
    }

    let mut cycles = Vec::new();
    let mut in_cycle: BTreeSet<RefKey> = BTreeSet::new();
    for component in tarjan_scc(&graph) {
        let is_cycle = component.len() > 1
            || component
                .first()
                .is_some_and(|&idx| graph.contains_edge(idx, idx));
        if !is_cycle {
            continue;
        }
        let mut members: Vec<RefKey> = component.iter().map(|&idx| graph[idx].clone()).collect();
        members.sort();
        in_cycle.extend(members.iter().cloned());
        cycles.push(ResolutionIssue::ReferenceCycle { members });
    }
    cycles.sort_by(|a, b| a.definitions().cmp(&b.definitions()));

    let has_dangling: BTreeSet<&RefKey> = dangling
        .iter()
        .flat_map(ResolutionIssue::definitions)
        .collect();

    let mut blocked = Vec::new();
    for key in pending.iter().copied() {
        if in_cycle.contains(key) || has_dangling.contains(key) {
            continue;
        }
        let waiting_on = dependencies.remove(key).unwrap_or_default();
        if !waiting_on.is_empty() {
            blocked.push(ResolutionIssue::BlockedDefinition {
                definition: key.clone(),
                waiting_on,
            });
        }
    }

    dangling.into_iter().chain(cycles).chain(blocked).collect()
}

/// Every distinct `$ref` target inside a schema tree, sorted
pub fn collect_refs(schema: &Schema) -> BTreeSet<&str> {
    let mut refs = BTreeSet::new();
    visit_refs(schema, &mut refs);
    refs
}

fn visit_refs<'a>(schema: &'a Schema, refs: &mut BTreeSet<&'a str>) {
    if let Some(key) = schema.ref_key() {
        refs.insert(key);
        return;
    }
    if let Some(items) = &schema.items {
        visit_refs(items, refs);
    }
    for property in schema.properties.values() {
        visit_refs(property, refs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::value::resolve_all;
    use crate::swagger::SchemaType;
    use pretty_assertions::assert_eq;

    fn object_with_ref(property: &str, target: &str) -> Schema {
        Schema::of_type(SchemaType::Object)
            .with_property(property, Schema::reference_to(format!("#/definitions/{}", target)))
    }

    fn diagnose_all(definitions: &Definitions) -> Vec<ResolutionIssue> {
        let outcome = resolve_all(definitions);
        diagnose(definitions, &outcome.unresolved)
    }

    #[test]
    fn test_no_issues_when_converged() {
        let mut definitions = Definitions::new();
        definitions.insert("A".into(), Schema::of_type(SchemaType::String));
        assert!(diagnose_all(&definitions).is_empty());
    }

    #[test]
    fn test_dangling_reference() {
        let mut definitions = Definitions::new();
        definitions.insert("A".into(), object_with_ref("b", "Missing"));

        assert_eq!(
            diagnose_all(&definitions),
            vec![ResolutionIssue::DanglingReference {
                definition: RefKey::definition("A"),
                target: "#/definitions/Missing".into(),
            }]
        );
    }

    #[test]
    fn test_cycle_and_blocked() {
        let mut definitions = Definitions::new();
        definitions.insert("A".into(), object_with_ref("b", "B"));
        definitions.insert("B".into(), object_with_ref("a", "A"));
        definitions.insert("C".into(), object_with_ref("a", "A"));
        definitions.insert("D".into(), Schema::of_type(SchemaType::Integer));

        let issues = diagnose_all(&definitions);
        assert_eq!(
            issues,
            vec![
                ResolutionIssue::ReferenceCycle {
                    members: vec![RefKey::definition("A"), RefKey::definition("B")],
                },
                ResolutionIssue::BlockedDefinition {
                    definition: RefKey::definition("C"),
                    waiting_on: vec![RefKey::definition("A")],
                },
            ]
        );
        assert_eq!(
            issues[0].to_string(),
            "reference cycle between #/definitions/A, #/definitions/B"
        );
    }

    #[test]
    fn test_self_reference_is_a_cycle() {
        let mut definitions = Definitions::new();
        definitions.insert("Node".into(), object_with_ref("next", "Node"));

        assert_eq!(
            diagnose_all(&definitions),
            vec![ResolutionIssue::ReferenceCycle {
                members: vec![RefKey::definition("Node")],
            }]
        );
    }

    #[test]
    fn test_collect_refs() {
        let schema = Schema::of_type(SchemaType::Object)
            .with_property("a", Schema::reference_to("#/definitions/A"))
            .with_property(
                "list",
                Schema::of_type(SchemaType::Array).with_items(Schema::reference_to("#/definitions/B")),
            )
            .with_property("again", Schema::reference_to("#/definitions/A"));

        let refs: Vec<&str> = collect_refs(&schema).into_iter().collect();
        assert_eq!(refs, vec!["#/definitions/A", "#/definitions/B"]);
    }
}
