//! Schema nodes and their declared types
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Named, referenceable schemas of a document, keyed by definition name
pub type Definitions = BTreeMap<String, Schema>;

/// Declared type of a schema or parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Integer,
    Number,
    Boolean,
    String,
    Array,
    Object,
    File,
    /// Any type tag outside the Swagger 2.0 set
    #[serde(other)]
    Unknown,
}

impl SchemaType {
    /// The type tag as written in the document
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::String => "string",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
            SchemaType::File => "file",
            SchemaType::Unknown => "unknown",
        }
    }

    /// Whether the type is a scalar leaf
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            SchemaType::Integer | SchemaType::Number | SchemaType::Boolean | SchemaType::String
        )
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A schema node: either a `$ref` to a definition or an inline type tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Reference into the definitions table, e.g. `#/definitions/Pet`
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(
        rename = "enum",
        default,
        deserialize_with = "lenient::string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub enum_values: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "String::is_empty"
    )]
    pub example: String,
}

impl Schema {
    /// Create a schema of the given type
    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Self::default()
        }
    }

    /// Create a `$ref` schema pointing at a reference key
    pub fn reference_to(key: impl Into<String>) -> Self {
        Self {
            reference: Some(key.into()),
            ..Self::default()
        }
    }

    /// The `$ref` target, if set and non-empty
    pub fn ref_key(&self) -> Option<&str> {
        self.reference.as_deref().filter(|r| !r.is_empty())
    }

    /// Whether the named property is listed in `required`
    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|name| name == property)
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    pub fn with_required(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    pub fn with_items(mut self, items: Schema) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }
}

/// Deserializers that accept scalar literals where the document model keeps text
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.map(scalar_text).unwrap_or_default())
    }

    pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Option::<Vec<Value>>::deserialize(deserializer)?;
        Ok(values
            .unwrap_or_default()
            .into_iter()
            .map(scalar_text)
            .collect())
    }

    fn scalar_text(value: Value) -> String {
        match value {
            Value::String(s) => s,
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_deserialization() {
        let schema: Schema = serde_json::from_value(json!({
            "type": "object",
            "required": ["id"],
            "properties": {
                "id": {"type": "integer", "format": "int64", "example": 42},
                "status": {"type": "string", "enum": ["open", "closed"]},
                "owner": {"$ref": "#/definitions/User"}
            }
        }))
        .unwrap();

        assert_eq!(schema.schema_type, Some(SchemaType::Object));
        assert!(schema.is_required("id"));
        assert!(!schema.is_required("status"));
        assert_eq!(schema.properties["id"].example, "42");
        assert_eq!(schema.properties["status"].enum_values, vec!["open", "closed"]);
        assert_eq!(schema.properties["owner"].ref_key(), Some("#/definitions/User"));
    }

    #[test]
    fn test_lenient_scalars() {
        let schema: Schema = serde_json::from_value(json!({
            "type": "boolean",
            "example": true,
            "enum": [1, 2.5, false, null]
        }))
        .unwrap();

        assert_eq!(schema.example, "true");
        assert_eq!(schema.enum_values, vec!["1", "2.5", "false", ""]);
    }

    #[test]
    fn test_unknown_type_tag() {
        let schema: Schema = serde_json::from_value(json!({"type": "null"})).unwrap();
        assert_eq!(schema.schema_type, Some(SchemaType::Unknown));
    }

    #[test]
    fn test_empty_reference_is_ignored() {
        let schema: Schema = serde_json::from_value(json!({"$ref": "", "type": "string"})).unwrap();
        assert_eq!(schema.ref_key(), None);
    }

    #[test]
    fn test_properties_are_sorted() {
        let schema = Schema::of_type(SchemaType::Object)
            .with_property("zeta", Schema::of_type(SchemaType::String))
            .with_property("alpha", Schema::of_type(SchemaType::String));

        let names: Vec<_> = schema.properties.keys().collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
