//! Reference keys identifying named definitions
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Document section every definition reference points into
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Resolved output per definition, ordered by reference key
pub type ResolvedTable<T> = BTreeMap<RefKey, T>;

/// Canonical `$ref` string of a named definition, e.g. `#/definitions/Pet`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RefKey(String);

impl RefKey {
    /// Build the key for a definition name
    pub fn definition(name: &str) -> Self {
        Self(format!("{}{}", DEFINITIONS_PREFIX, name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The definition name, when the key points into the definitions section
    pub fn definition_name(&self) -> Option<&str> {
        self.0.strip_prefix(DEFINITIONS_PREFIX)
    }
}

impl Borrow<str> for RefKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
