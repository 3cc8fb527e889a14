//! # Using Schema Definitions
//!
//! The `graphql_validate::schema` module contains utilities to create a GraphQL Schema or parse
//! it from introspection data. The schema is consumed read-only by the validator: it provides
//! root types, field and argument definitions, directive definitions, and the sub-type and
//! type-overlap relations the validation rules check documents against.
//!
//! The [BuildClientSchema] trait may be used to convert introspection data into a usable
//! [Schema]:
//!
//! ```
//! use graphql_validate::{ast::ASTContext, schema::*};
//!
//! fn inspect(introspection_json: &'static str) {
//!     let ctx = ASTContext::new();
//!
//!     let introspection: IntrospectionQuery = serde_json::from_str(introspection_json).unwrap();
//!     let _schema = introspection.build_client_schema(&ctx);
//! }
//! ```
//!
//! [More information on the Schema struct.](Schema)

pub mod introspection;
#[allow(clippy::module_inception)]
pub mod schema;

pub use introspection::{BuildClientSchema, IntrospectionQuery, IntrospectionSchema};
pub use schema::*;
