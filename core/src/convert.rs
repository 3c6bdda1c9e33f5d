#![deny(missing_docs)]

//! # Flow -> OpenAPI Conversion
//!
//! Projects a [`FlowDocument`] into an OpenAPI 3.0.0 document. The whole
//! mapping is a pure in-memory transformation: types become named schemas,
//! endpoints become path operations with a request schema and an identical
//! `_response` schema, and the API name becomes the single document tag.

use crate::flow::{FieldDef, FlowDocument};
use crate::oas::{
    MediaType, OasDocument, Operation, Property, RequestBody, Response, SchemaObject, SchemaRef,
    Tag,
};
use indexmap::IndexMap;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Converts a flow document into an OpenAPI 3.0.0 document.
///
/// Pure function of its input: no I/O, no hidden state, structurally
/// identical output for identical input. Required-field validation happens
/// earlier, at [`FlowDocument::from_json`]; a well-formed `FlowDocument`
/// always converts.
pub fn convert(flow: &FlowDocument) -> OasDocument {
    let mut oas = OasDocument::skeleton();

    oas.info.title = flow.name.clone();
    oas.info.description = flow.short_descr.clone();

    for type_def in flow.types.values() {
        oas.components
            .schemas
            .insert(type_def.name.clone(), object_schema(&type_def.fields));
    }

    for endpoint in flow.endpoints.values() {
        let method_name = endpoint.method.to_lowercase();
        let schema_name = schema_name(&method_name, &endpoint.url);
        let response_name = format!("{}_response", schema_name);

        let operation = Operation {
            summary: endpoint.short_descr.clone(),
            description: endpoint.description.clone(),
            operation_id: endpoint.id.clone(),
            tags: vec![flow.name.to_lowercase()],
            request_body: RequestBody {
                content: json_content(&schema_name),
            },
            responses: IndexMap::from([(
                "200".to_string(),
                Response {
                    description: "Successful operation".to_string(),
                    content: json_content(&response_name),
                },
            )]),
        };

        let schema = object_schema(&endpoint.parameters);
        oas.components
            .schemas
            .insert(schema_name, schema.clone());
        oas.components.schemas.insert(response_name, schema);

        // Merge: two endpoints may share a URL with different methods.
        oas.paths
            .entry(endpoint.url.clone())
            .or_default()
            .insert(method_name, operation);
    }

    oas.tags.push(Tag {
        name: flow.name.to_lowercase(),
        description: flow.short_descr.clone(),
    });

    oas
}

/// Derives the schema name for an endpoint: `method_name + "_" + url`, every
/// `/` replaced by `_`, then one single pass collapsing `__` to `_`.
///
/// The collapse is deliberately not recursive; three-or-more consecutive
/// underscores coming from the URL are only partially collapsed.
fn schema_name(method_name: &str, url: &str) -> String {
    format!("{}_{}", method_name, url)
        .replace('/', "_")
        .replace("__", "_")
}

/// Maps a flow type token to its JSON schema type name.
///
/// Case-sensitive exact match; unknown tokens silently fall back to
/// `"string"`. Floating-point tokens map to `"integer"`, matching the flow
/// format's established output.
fn map_type(token: &str) -> &'static str {
    match token {
        "string" | "str" => "string",
        "integer" | "int" | "num" | "float" | "double" => "integer",
        "boolean" | "bool" => "boolean",
        _ => "string",
    }
}

/// Builds an object schema from an ordered field list. A repeated field name
/// overwrites the earlier property rather than erroring.
fn object_schema(fields: &[FieldDef]) -> SchemaObject {
    let mut properties = IndexMap::new();
    for field in fields {
        properties.insert(
            field.name.clone(),
            Property {
                type_: map_type(&field.type_).to_string(),
                description: field.description.clone(),
            },
        );
    }
    SchemaObject {
        type_: "object".to_string(),
        properties,
    }
}

/// Single-entry `application/json` content map referencing a named schema.
fn json_content(schema: &str) -> IndexMap<String, MediaType> {
    IndexMap::from([(
        JSON_MEDIA_TYPE.to_string(),
        MediaType {
            schema: SchemaRef::to_component(schema),
        },
    )])
}
