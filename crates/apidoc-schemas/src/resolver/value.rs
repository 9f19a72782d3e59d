//! Example value synthesis
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::resolver::key::ResolvedTable;
use crate::resolver::worklist::{Outcome, Worklist};
use crate::swagger::{Definitions, Schema, SchemaType};
use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Concrete example materialized from a schema
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Array rendering, holding the single resolved item
    Array(Vec<ResolvedValue>),
    Object(BTreeMap<String, ResolvedValue>),
}

impl ResolvedValue {
    /// Convert into a generic JSON value
    pub fn to_json(&self) -> Value {
        match self {
            ResolvedValue::Null => Value::Null,
            ResolvedValue::Bool(b) => Value::Bool(*b),
            ResolvedValue::Integer(i) => Value::Number((*i).into()),
            ResolvedValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            ResolvedValue::String(s) => Value::String(s.clone()),
            ResolvedValue::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            ResolvedValue::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl From<ResolvedValue> for Value {
    fn from(value: ResolvedValue) -> Self {
        value.to_json()
    }
}

/// Resolve an example value for every definition
pub fn resolve_all(definitions: &Definitions) -> Outcome<ResolvedValue> {
    Worklist::from_definitions(definitions).run(resolve_value)
}

/// Resolve one schema against already-resolved definitions
///
/// Returns `None` when a `$ref` anywhere in the tree points at a definition
/// missing from `table`.
pub fn resolve_value(table: &ResolvedTable<ResolvedValue>, schema: &Schema) -> Option<ResolvedValue> {
    if let Some(key) = schema.ref_key() {
        return table.get(key).cloned();
    }

    let value = match schema.schema_type {
        Some(SchemaType::String) => ResolvedValue::String(schema.example.clone()),
        Some(SchemaType::Integer) => ResolvedValue::Integer(parse_integer(&schema.example)),
        Some(SchemaType::Number) => ResolvedValue::Float(parse_number(&schema.example)),
        Some(SchemaType::Boolean) => ResolvedValue::Bool(parse_bool(&schema.example)),
        Some(SchemaType::Array) => match &schema.items {
            Some(items) => ResolvedValue::Array(vec![resolve_value(table, items)?]),
            None => ResolvedValue::Array(Vec::new()),
        },
        Some(SchemaType::Object) => {
            let mut fields = BTreeMap::new();
            for (name, property) in &schema.properties {
                fields.insert(name.clone(), resolve_value(table, property)?);
            }
            ResolvedValue::Object(fields)
        }
        Some(SchemaType::File) | Some(SchemaType::Unknown) | None => ResolvedValue::Null,
    };
    Some(value)
}

/// Integer example, zero when empty or unparsable
fn parse_integer(literal: &str) -> i64 {
    literal.parse().unwrap_or(0)
}

/// Floating point example, zero when empty, unparsable or not finite
fn parse_number(literal: &str) -> f64 {
    literal
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .unwrap_or(0.0)
}

/// Boolean example, false unless a recognized true literal
fn parse_bool(literal: &str) -> bool {
    matches!(literal, "1" | "t" | "T" | "TRUE" | "true" | "True")
}
