//! `graphql_validate`
//! =========
//!
//! _Schema-aware validation for GraphQL Query Language documents._
//!
//! The **`graphql_validate`** library determines whether a parsed GraphQL request document
//! may be executed against a given schema. It implements the validation section of the
//! GraphQL specification: a document that passes the full rule set is safe to hand to an
//! executor, while a document that fails produces a list of structured errors with source
//! locations and references to the offending AST nodes.
//!
//! The crate deliberately stops there. It does not execute operations, coerce runtime
//! variable values, or serve introspection; those are one-off, server-side concerns. What
//! it does instead is make the validation pass itself fast and pleasant to build on:
//!
//! - an arena-allocated query language AST with a parser and printer,
//! - a read-only client schema built from introspection data,
//! - a visitor framework that threads schema type information through a traversal,
//! - and the full set of specified validation rules, each usable on its own.
//!
//! ```
//! use graphql_validate::{ast::*, schema::Schema, validate::validate};
//!
//! let ctx = ASTContext::new();
//! let schema = ctx.alloc(Schema::default_in(&ctx.arena));
//! let document = Document::parse(&ctx, "{ __typename }").unwrap();
//!
//! let errors = validate(&ctx, schema, document).unwrap();
//! assert!(errors.is_empty());
//! ```
//!
//! [A good place to start learning more about this crate is the `validate` module...](validate)

pub mod ast;
pub mod error;
pub mod schema;
pub mod validate;
pub mod visit;

pub use bumpalo;
