//! # Validation of GraphQL ASTs
//!
//! The `graphql_validate::validate` module determines whether a GraphQL query language
//! document conforms to a given schema. It implements the full set of validation rules
//! defined by the GraphQL specification; a document that passes may safely be executed,
//! while a document that fails must not be.
//!
//! The usual entry point is [`validate`], which runs every rule and returns the
//! accumulated [`ValidationError`]s (message, source locations, and the offending AST
//! nodes) in the order they were found:
//!
//! ```
//! use graphql_validate::{ast::*, schema::Schema, validate::validate};
//!
//! let ctx = ASTContext::new();
//! let schema = ctx.alloc(Schema::default_in(&ctx.arena));
//! let document = Document::parse(&ctx, "{ field }").unwrap();
//!
//! let errors = validate(&ctx, schema, document).unwrap();
//! assert!(errors.is_empty());
//! ```
//!
//! Every rule is also usable on its own through the [`ValidationRule`] trait, and any
//! subset of rules can be fused into a single traversal with
//! [`ComposedVisitor`](crate::visit::ComposedVisitor):
//!
//! ```
//! use graphql_validate::{ast::*, schema::Schema, validate::*};
//!
//! let ctx = ASTContext::new();
//! let schema = ctx.alloc(Schema::default_in(&ctx.arena));
//! let document = Document::parse(&ctx, "{ a } { b }").unwrap();
//!
//! LoneAnonymousOperation::validate(&ctx, schema, document).unwrap_err();
//! ```
//!
//! Rules observe the document through the [visit](crate::visit) module's traversal, and the
//! [`ValidationContext`] threads schema type information through every visited node: the
//! current type, parent type, expected input type, field definition, and directive
//! definition are always available to the rule that's running.

#[allow(clippy::module_inception)]
mod validate;

mod context;
mod error;
mod type_info;
mod values;

pub mod rules;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use context::{UsageSite, ValidationContext, VariableUsage};
pub use error::{NodeRef, ValidationError};
pub use rules::*;
pub use type_info::{TypeInfo, TypeInfoVisitor, WithTypeInfo};
pub use validate::{validate, ValidationRule};
pub use values::is_valid_literal_value;
