//! Swagger 2.0 document model
//!
//! The types mirror the subset of the Swagger 2.0 object graph used for
//! documentation. Maps are ordered so every traversal is deterministic.
//!
//! Copyright (c) 2025 Apidoc Team
//! Licensed under the Apache-2.0 license

pub mod api;
pub mod schema;
pub mod security;

pub use api::{
    Api, Contact, Endpoint, Endpoints, Header, Info, License, Method, Parameter, Response, Tag,
    TagDocs,
};
pub use schema::{Definitions, Schema, SchemaType};
pub use security::{SecurityRequirement, SecurityScheme};
