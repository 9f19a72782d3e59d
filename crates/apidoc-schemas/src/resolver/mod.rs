//! Schema resolution engine
//!
//! Named definitions may reference each other in any declaration order. The
//! engine resolves them with a fixed-point [`Worklist`]: every pass retries
//! the pending definitions against those already completed, and the run ends
//! once a pass makes no progress. Two independent runs produce
//!
//! - an example [`ResolvedValue`] per definition ([`resolve_all`]), and
//! - a flattened [`Row`] list per definition ([`resolve_all_rows`]).
//!
//! Definitions caught in a reference cycle, or pointing at a missing
//! definition, are left out of both tables; [`diagnose`] explains why.
//!
//! # Example
//!
//! ```rust
//! use apidoc_schemas::resolver::resolve_all;
//! use apidoc_schemas::swagger::{Definitions, Schema, SchemaType};
//!
//! let mut definitions = Definitions::new();
//! definitions.insert(
//!     "Pet".to_string(),
//!     Schema::of_type(SchemaType::Object)
//!         .with_property("name", Schema::of_type(SchemaType::String).with_example("Rex")),
//! );
//!
//! let outcome = resolve_all(&definitions);
//! assert!(outcome.converged());
//! assert_eq!(
//!     outcome.resolved["#/definitions/Pet"].to_json(),
//!     serde_json::json!({"name": "Rex"})
//! );
//! ```
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

pub mod diagnostics;
pub mod key;
pub mod rows;
pub mod value;
pub mod worklist;

pub use diagnostics::{collect_refs, diagnose, ResolutionIssue};
pub use key::{RefKey, ResolvedTable, DEFINITIONS_PREFIX};
pub use rows::{presentation_rows, resolve_all_rows, resolve_rows, Row, ITEMS_SEGMENT};
pub use value::{resolve_all, resolve_value, ResolvedValue};
pub use worklist::{Outcome, Worklist};
