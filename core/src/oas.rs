#![deny(missing_docs)]

//! # OpenAPI Output Model
//!
//! Typed OpenAPI 3.0.0 document tree, restricted to the subset the converter
//! actually emits. Serialization key order follows struct-field declaration
//! order and `IndexMap` insertion order, so the YAML output reads in the
//! same order the document was built.

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde::Serialize;

/// Operations under one path, keyed by lowercase HTTP method.
pub type PathItem = IndexMap<String, Operation>;

/// A complete OpenAPI 3.0.0 document.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OasDocument {
    /// Always `"3.0.0"`.
    pub openapi: String,
    /// Document metadata.
    pub info: Info,
    /// Path templates mapped to their operations.
    pub paths: IndexMap<String, PathItem>,
    /// Reusable schema container.
    pub components: Components,
    /// Document tags.
    pub tags: Vec<Tag>,
}

impl OasDocument {
    /// An empty skeleton with the version pinned and every container blank.
    pub fn skeleton() -> Self {
        OasDocument {
            openapi: "3.0.0".to_string(),
            info: Info {
                title: String::new(),
                description: String::new(),
                version: String::new(),
            },
            paths: IndexMap::new(),
            components: Components {
                schemas: IndexMap::new(),
            },
            tags: Vec::new(),
        }
    }

    /// Serializes the document to YAML.
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(AppError::Serialization)
    }
}

/// The `info` object. `version` stays empty: the flow format carries no
/// version and the field is not populated from input.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Info {
    /// API title.
    pub title: String,
    /// API description.
    pub description: String,
    /// API version, left empty.
    pub version: String,
}

/// The `components` object.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Components {
    /// Named schemas, in insertion order.
    pub schemas: IndexMap<String, SchemaObject>,
}

/// A single operation (path + method entry).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Operation {
    /// One-line summary.
    pub summary: String,
    /// Longer description.
    pub description: String,
    /// Unique operation identifier.
    #[serde(rename = "operationId")]
    pub operation_id: String,
    /// Tag names this operation belongs to.
    pub tags: Vec<String>,
    /// JSON request body reference.
    #[serde(rename = "requestBody")]
    pub request_body: RequestBody,
    /// Responses keyed by status code string.
    pub responses: IndexMap<String, Response>,
}

/// A request body with per-media-type content.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RequestBody {
    /// Media type mapped to its schema reference.
    pub content: IndexMap<String, MediaType>,
}

/// A single response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Response {
    /// Human-readable response description.
    pub description: String,
    /// Media type mapped to its schema reference.
    pub content: IndexMap<String, MediaType>,
}

/// Content entry carrying a schema reference.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MediaType {
    /// The referenced schema.
    pub schema: SchemaRef,
}

/// A `$ref` pointer into `components.schemas`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SchemaRef {
    /// Reference string, e.g. `#/components/schemas/get_pets`.
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl SchemaRef {
    /// Builds a reference to a named entry in `components.schemas`.
    pub fn to_component(name: &str) -> Self {
        SchemaRef {
            reference: format!("#/components/schemas/{}", name),
        }
    }
}

/// An object schema with an ordered property map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SchemaObject {
    /// Always `"object"`.
    #[serde(rename = "type")]
    pub type_: String,
    /// Properties in field order; duplicate field names collapse to the
    /// last occurrence.
    pub properties: IndexMap<String, Property>,
}

/// A single object property.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Property {
    /// JSON type name (`string`, `integer`, `boolean`).
    #[serde(rename = "type")]
    pub type_: String,
    /// Property description.
    pub description: String,
}

/// A document tag.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Tag {
    /// Tag name (lowercased API name).
    pub name: String,
    /// Tag description.
    pub description: String,
}
