#![deny(missing_docs)]

//! # Flow Input Model
//!
//! Typed representation of the flow description format: an API as named
//! reusable types and named endpoints. Required-field presence is validated
//! once, here, at the deserialization edge; the converter downstream never
//! has to deal with partially-populated documents.
//!
//! `IndexMap` keeps the JSON document order of `types` and `endpoints`,
//! which drives schema and path insertion order in the output.

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde::Deserialize;

/// A complete flow document: API metadata plus its types and endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FlowDocument {
    /// API name, used as the document title and as the lowercase tag name.
    pub name: String,
    /// Short description, used for both the API and the tag.
    pub short_descr: String,
    /// Reusable type definitions, keyed by type-key.
    pub types: IndexMap<String, TypeDef>,
    /// Endpoint definitions, keyed by endpoint-key.
    pub endpoints: IndexMap<String, EndpointDef>,
}

/// A reusable type definition.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TypeDef {
    /// Schema identifier in the output document.
    pub name: String,
    /// Ordered field list.
    pub fields: Vec<FieldDef>,
}

/// A single field of a type, or a single endpoint parameter.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FieldDef {
    /// Property name.
    pub name: String,
    /// Type token (e.g. `"str"`, `"int"`); unknown tokens are tolerated and
    /// fall back to `"string"` during conversion.
    #[serde(rename = "type")]
    pub type_: String,
    /// Property description.
    pub description: String,
}

/// A single endpoint definition.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EndpointDef {
    /// Path template, e.g. `/users/{id}`.
    pub url: String,
    /// HTTP verb, case-insensitive.
    pub method: String,
    /// Unique operation identifier.
    pub id: String,
    /// One-line summary.
    pub short_descr: String,
    /// Longer description.
    pub description: String,
    /// Ordered request parameters.
    pub parameters: Vec<FieldDef>,
}

impl FlowDocument {
    /// Parses a flow document from JSON text.
    ///
    /// Fails with [`AppError::Input`] when the text is not JSON or when any
    /// required field is missing at any level (top-level, type, field, or
    /// endpoint). Unknown extra keys are ignored.
    pub fn from_json(text: &str) -> AppResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| AppError::Input(format!("invalid flow document: {}", e)))
    }
}
