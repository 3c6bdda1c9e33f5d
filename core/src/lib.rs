#![deny(missing_docs)]

//! # Flow2OAS Core
//!
//! Core library for the flow-to-OpenAPI converter: typed models for the flow
//! input format and the OpenAPI 3.0.0 output subset, plus the pure mapping
//! between them. File access and output destinations are the caller's
//! concern (see the `flow2oas-cli` crate).

/// Shared error types.
pub mod error;

/// Flow input format model and deserialization edge.
pub mod flow;

/// OpenAPI 3.0.0 output model and YAML serialization.
pub mod oas;

/// The flow -> OpenAPI mapping.
pub mod convert;

pub use convert::convert;
pub use error::{AppError, AppResult};
pub use flow::{EndpointDef, FieldDef, FlowDocument, TypeDef};
pub use oas::{
    Components, Info, MediaType, OasDocument, Operation, PathItem, Property, RequestBody,
    Response, SchemaObject, SchemaRef, Tag,
};
