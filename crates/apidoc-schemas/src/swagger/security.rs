//! Security scheme and requirement objects
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// A security scheme declared under `securityDefinitions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    #[serde(rename = "type", default)]
    pub scheme_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "in", default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub flow: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub authorization_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token_url: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scopes: BTreeMap<String, String>,
}

/// Alternative security requirements of an API or operation
///
/// An explicitly empty list (`security: []`) disables security and is kept
/// distinct from an absent field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityRequirement {
    pub requirements: Vec<BTreeMap<String, Vec<String>>>,
    pub disable_security: bool,
}

impl SecurityRequirement {
    /// Scheme names referenced by any alternative, deduplicated and sorted
    pub fn scheme_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .requirements
            .iter()
            .flat_map(|r| r.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl Serialize for SecurityRequirement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.disable_security {
            return Vec::<BTreeMap<String, Vec<String>>>::new().serialize(serializer);
        }
        self.requirements.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecurityRequirement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let requirements =
            Option::<Vec<BTreeMap<String, Vec<String>>>>::deserialize(deserializer)?
                .unwrap_or_default();
        Ok(Self {
            disable_security: requirements.is_empty(),
            requirements,
        })
    }
}
