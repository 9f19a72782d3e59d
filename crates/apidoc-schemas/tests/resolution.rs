//! End-to-end resolution scenarios
//!
//! Documents are decoded from JSON or YAML text and prepared, then queried
//! the way the documentation generator queries them.

use apidoc_schemas::resolver::RefKey;
use apidoc_schemas::{DocumentParser, PreparedApi, ResolutionIssue, Schema};
use serde_json::json;
use std::path::Path;

fn prepare_json(document: serde_json::Value) -> PreparedApi {
    let bytes = serde_json::to_vec(&document).unwrap();
    DocumentParser::new()
        .parse_bytes(&bytes, Path::new("swagger.json"))
        .unwrap()
        .prepare()
}

fn pet_document() -> serde_json::Value {
    json!({
        "swagger": "2.0",
        "info": {"title": "Petstore", "version": "1.0.0"},
        "definitions": {
            "Pet": {
                "type": "object",
                "required": ["name"],
                "properties": {
                    "name": {"type": "string", "example": "Rex"},
                    "tag": {"type": "string", "example": "dog"}
                }
            },
            "Pets": {
                "type": "array",
                "items": {"$ref": "#/definitions/Pet"}
            }
        }
    })
}

fn reference(name: &str) -> Schema {
    Schema::reference_to(format!("#/definitions/{}", name))
}

#[cfg(test)]
mod examples {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_object_example() {
        let prepared = prepare_json(pet_document());

        assert_eq!(
            prepared.object(Some(&reference("Pet"))).unwrap().to_json(),
            json!({"name": "Rex", "tag": "dog"})
        );
    }

    #[test]
    fn test_array_example_wraps_one_item() {
        let prepared = prepare_json(pet_document());

        assert_eq!(
            prepared.object(Some(&reference("Pets"))).unwrap().to_json(),
            json!([{"name": "Rex", "tag": "dog"}])
        );
    }

    #[test]
    fn test_forward_reference_resolves() {
        let prepared = prepare_json(json!({
            "definitions": {
                "A": {"type": "object", "properties": {"b": {"$ref": "#/definitions/B"}}},
                "B": {"type": "integer", "example": "5"}
            }
        }));

        assert_eq!(
            prepared.object(Some(&reference("A"))).unwrap().to_json(),
            json!({"b": 5})
        );
        assert!(prepared.issues().is_empty());
    }

    #[test]
    fn test_numeric_literals_from_yaml() {
        let yaml = br#"
swagger: "2.0"
info:
  title: Numbers
  version: 1.0
definitions:
  Reading:
    type: object
    properties:
      value:
        type: number
        example: 2.5
      count:
        type: integer
        example: 3
      valid:
        type: boolean
        example: true
      unit:
        type: string
        enum: [celsius, 42]
"#;
        let prepared = DocumentParser::new()
            .parse_bytes(yaml, Path::new("readings.yaml"))
            .unwrap()
            .prepare();

        assert_eq!(prepared.api().info.version, "1.0");
        assert_eq!(
            prepared.definition_object("Reading").unwrap().to_json(),
            json!({"value": 2.5, "count": 3, "valid": true, "unit": ""})
        );

        let rows = prepared.definition_rows("Reading");
        let unit = rows.iter().find(|row| row.name == "unit").unwrap();
        assert_eq!(unit.enum_text, "celsius, 42");
    }
}

#[cfg(test)]
mod rows {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_object_rows() {
        let prepared = prepare_json(pet_document());
        let rows = prepared.rows(Some(&reference("Pet")));

        let summary: Vec<(&str, &str, bool, &str)> = rows
            .iter()
            .map(|row| (row.name.as_str(), row.type_name(), row.required, row.example.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![("name", "string", true, "Rex"), ("tag", "string", false, "dog")]
        );
    }

    #[test]
    fn test_array_rows_use_item_segment() {
        let prepared = prepare_json(pet_document());
        let names: Vec<String> = prepared
            .rows(Some(&reference("Pets")))
            .into_iter()
            .map(|row| row.name)
            .collect();

        assert_eq!(names, vec!["[]", "[].name", "[].tag"]);
    }

    #[test]
    fn test_embedded_reference_is_rebased() {
        let mut document = pet_document();
        document["definitions"]["Owner"] = json!({
            "type": "object",
            "required": ["pets"],
            "properties": {"pets": {"$ref": "#/definitions/Pets"}}
        });
        let prepared = prepare_json(document);

        let rows = prepared.definition_rows("Owner");
        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["pets", "pets.[]", "pets.[].name", "pets.[].tag"]);
        assert!(rows[0].required);
        assert!(rows[2].required);
        assert!(!rows[3].required);
    }
}

#[cfg(test)]
mod failures {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dangling_reference_is_absent() {
        let prepared = prepare_json(pet_document());
        let missing = reference("Missing");

        assert_eq!(prepared.object(Some(&missing)), None);
        assert!(prepared.rows(Some(&missing)).is_empty());
    }

    #[test]
    fn test_definition_with_dangling_reference_is_reported() {
        let mut document = pet_document();
        document["definitions"]["Order"] = json!({
            "type": "object",
            "properties": {"item": {"$ref": "#/definitions/Item"}}
        });
        let prepared = prepare_json(document);

        assert!(prepared.definition_object("Order").is_none());
        assert!(prepared.definition_object("Pet").is_some());
        assert_eq!(
            prepared.issues(),
            &[ResolutionIssue::DanglingReference {
                definition: RefKey::definition("Order"),
                target: "#/definitions/Item".to_string(),
            }]
        );
    }

    #[test]
    fn test_cycle_containment() {
        let prepared = prepare_json(json!({
            "definitions": {
                "A": {"type": "object", "properties": {"b": {"$ref": "#/definitions/B"}}},
                "B": {"type": "object", "properties": {"a": {"$ref": "#/definitions/A"}}},
                "C": {"type": "string", "example": "ok"}
            }
        }));

        assert_eq!(prepared.object(Some(&reference("A"))), None);
        assert_eq!(prepared.object(Some(&reference("B"))), None);
        assert!(prepared.rows(Some(&reference("A"))).is_empty());
        assert_eq!(
            prepared.object(Some(&reference("C"))).unwrap().to_json(),
            json!("ok")
        );
        assert_eq!(
            prepared.issues(),
            &[ResolutionIssue::ReferenceCycle {
                members: vec![RefKey::definition("A"), RefKey::definition("B")],
            }]
        );
        assert!(prepared.stats().value_passes <= 3);
    }

    #[test]
    fn test_definition_alias_resolves() {
        let mut document = pet_document();
        document["definitions"]["Animal"] = json!({"$ref": "#/definitions/Pet"});
        let prepared = prepare_json(document);

        assert_eq!(
            prepared.definition_object("Animal").unwrap().to_json(),
            json!({"name": "Rex", "tag": "dog"})
        );
        assert_eq!(prepared.definition_rows("Animal").len(), 2);
    }
}
