//! Flattened field rows for tabular documentation
//!
//! A property that points at a definition through `$ref` shows up as a row of
//! its own, followed by the definition's fields. That row's `required` flag
//! comes from the embedding object's `required` list, not from the
//! definition, whose own root row is never required.
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use crate::resolver::key::ResolvedTable;
use crate::resolver::worklist::{Outcome, Worklist};
use crate::swagger::{Definitions, Schema, SchemaType};
use serde::Serialize;

/// Path segment appended for array items
pub const ITEMS_SEGMENT: &str = "[]";

/// One field or container of a schema tree, addressed by a dotted path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Dotted path from the tree root; empty for the root itself
    pub name: String,
    #[serde(rename = "type")]
    pub row_type: Option<SchemaType>,
    pub required: bool,
    pub description: String,
    /// Enum values joined with `", "`
    #[serde(rename = "enum")]
    pub enum_text: String,
    pub example: String,
}

impl Row {
    fn from_schema(name: String, schema: &Schema, required: bool) -> Self {
        Self {
            name,
            row_type: schema.schema_type,
            required,
            description: schema.description.clone(),
            enum_text: schema.enum_values.join(", "),
            example: schema.example.clone(),
        }
    }

    /// Whether this is the synthetic root row of a tree
    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    /// Type tag for display, empty when undeclared
    pub fn type_name(&self) -> &'static str {
        self.row_type.map_or("", |t| t.as_str())
    }
}

/// Resolve the row list of every definition
pub fn resolve_all_rows(definitions: &Definitions) -> Outcome<Vec<Row>> {
    Worklist::from_definitions(definitions)
        .run(|table, schema| resolve_rows(table, schema, &[], false))
}

/// Resolve the rows of one schema embedded at `path`
///
/// A `$ref` copies the target's rows with their names rebased under `path`;
/// the copied root row takes `parent_required`. Returns `None` when any
/// reference in the tree is missing from `table`.
pub fn resolve_rows(
    table: &ResolvedTable<Vec<Row>>,
    schema: &Schema,
    path: &[&str],
    parent_required: bool,
) -> Option<Vec<Row>> {
    if let Some(key) = schema.ref_key() {
        let target = table.get(key)?;
        let prefix = path.join(".");
        return Some(
            target
                .iter()
                .map(|row| rebase(row, &prefix, parent_required))
                .collect(),
        );
    }

    let mut rows = vec![Row::from_schema(path.join("."), schema, parent_required)];

    match schema.schema_type {
        Some(SchemaType::Array) => {
            if let Some(items) = &schema.items {
                let child = extend(path, ITEMS_SEGMENT);
                rows.extend(resolve_rows(table, items, &child, false)?);
            }
        }
        Some(SchemaType::Object) => {
            for (name, property) in &schema.properties {
                let child = extend(path, name);
                rows.extend(resolve_rows(table, property, &child, schema.is_required(name))?);
            }
        }
        _ => {}
    }

    Some(rows)
}

/// Drop synthetic root rows before presentation
pub fn presentation_rows(rows: Vec<Row>) -> Vec<Row> {
    rows.into_iter().filter(|row| !row.is_root()).collect()
}

fn rebase(row: &Row, prefix: &str, parent_required: bool) -> Row {
    let mut row = row.clone();
    if row.is_root() {
        row.name = prefix.to_string();
        row.required = parent_required;
    } else if !prefix.is_empty() {
        row.name = format!("{}.{}", prefix, row.name);
    }
    row
}

fn extend<'p>(path: &[&'p str], segment: &'p str) -> Vec<&'p str> {
    let mut child = Vec::with_capacity(path.len() + 1);
    child.extend_from_slice(path);
    child.push(segment);
    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::key::RefKey;
    use pretty_assertions::assert_eq;

    fn names(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    fn pet() -> Schema {
        Schema::of_type(SchemaType::Object)
            .with_required("name")
            .with_property(
                "name",
                Schema::of_type(SchemaType::String).with_example("Rex"),
            )
            .with_property(
                "status",
                Schema::of_type(SchemaType::String).with_enum(["available", "sold"]),
            )
    }

    #[test]
    fn test_object_rows() {
        let rows = resolve_rows(&ResolvedTable::new(), &pet(), &[], false).unwrap();

        assert_eq!(names(&rows), vec!["", "name", "status"]);
        assert_eq!(rows[0].row_type, Some(SchemaType::Object));
        assert!(rows[1].required);
        assert_eq!(rows[1].example, "Rex");
        assert!(!rows[2].required);
        assert_eq!(rows[2].enum_text, "available, sold");
    }

    #[test]
    fn test_nested_paths() {
        let schema = Schema::of_type(SchemaType::Object).with_property(
            "tags",
            Schema::of_type(SchemaType::Array).with_items(
                Schema::of_type(SchemaType::Object)
                    .with_property("label", Schema::of_type(SchemaType::String)),
            ),
        );

        let rows = resolve_rows(&ResolvedTable::new(), &schema, &[], false).unwrap();
        assert_eq!(names(&rows), vec!["", "tags", "tags.[]", "tags.[].label"]);
    }

    #[test]
    fn test_reference_rebases_names() {
        let mut table = ResolvedTable::new();
        let pet_rows = resolve_rows(&table, &pet(), &[], false).unwrap();
        table.insert(RefKey::definition("Pet"), pet_rows);

        let schema = Schema::of_type(SchemaType::Object)
            .with_required("pet")
            .with_property("pet", Schema::reference_to("#/definitions/Pet"));

        let rows = resolve_rows(&table, &schema, &[], false).unwrap();
        assert_eq!(names(&rows), vec!["", "pet", "pet.name", "pet.status"]);
        assert!(rows[1].required);
        assert_eq!(rows[1].row_type, Some(SchemaType::Object));
        assert!(rows[2].required);
    }

    #[test]
    fn test_reference_root_row_follows_embedding_field() {
        let mut table = ResolvedTable::new();
        let pet_rows = resolve_rows(&table, &pet(), &[], false).unwrap();
        assert!(!pet_rows[0].required);
        table.insert(RefKey::definition("Pet"), pet_rows);

        let schema = Schema::of_type(SchemaType::Object)
            .with_required("owned")
            .with_property("owned", Schema::reference_to("#/definitions/Pet"))
            .with_property("wanted", Schema::reference_to("#/definitions/Pet"));

        let rows = resolve_rows(&table, &schema, &[], false).unwrap();
        let flag = |name: &str| rows.iter().find(|row| row.name == name).unwrap().required;
        assert!(flag("owned"));
        assert!(!flag("wanted"));
        assert_eq!(flag("owned.name"), flag("wanted.name"));
    }

    #[test]
    fn test_top_level_reference_keeps_names() {
        let mut table = ResolvedTable::new();
        table.insert(
            RefKey::definition("Pet"),
            resolve_rows(&table, &pet(), &[], false).unwrap(),
        );

        let rows = resolve_rows(&table, &Schema::reference_to("#/definitions/Pet"), &[], false)
            .unwrap();
        assert_eq!(names(&rows), vec!["", "name", "status"]);
    }

    #[test]
    fn test_missing_reference_fails_whole_tree() {
        let schema = Schema::of_type(SchemaType::Object)
            .with_property("ok", Schema::of_type(SchemaType::String))
            .with_property("missing", Schema::reference_to("#/definitions/Nope"));

        assert_eq!(resolve_rows(&ResolvedTable::new(), &schema, &[], false), None);
    }

    #[test]
    fn test_presentation_drops_root() {
        let rows = resolve_rows(&ResolvedTable::new(), &pet(), &[], false).unwrap();
        let shown = presentation_rows(rows);
        assert_eq!(names(&shown), vec!["name", "status"]);
    }
}
