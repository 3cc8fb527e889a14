//! # Visiting and Transforming GraphQL ASTs
//!
//! The `graphql_validate::visit` module contains utilities to traverse and transform GraphQL
//! ASTs. Mainly, this module exposes two traits relevant to this task:
//!
//! - The [Visitor] trait can be used to implement a visitor.
//! - The [Folder] trait can be used to implement a folder to transform an AST.
//!
//! This works via the [`VisitNode`] trait and [`FoldNode`] trait that most AST nodes implement
//! and where visiting and folding can start.
//!
//! Typically, a visitor is used in GraphQL to gain information about the AST and inspect it for
//! certain features; the validation rules of this crate are all visitors. A folder instead
//! receives and returns AST nodes to create a new, transformed copy of an AST while the input
//! tree stays untouched.
//!
//! In this example we'll define a visitor that counts all operations in a document:
//!
//! ```
//! use graphql_validate::{ast::*, visit::*};
//!
//! #[derive(Default)]
//! struct CountOperations {
//!    operations: usize,
//! }
//!
//! impl<'a> Visitor<'a> for CountOperations {
//!     fn enter_fragment(
//!         &mut self,
//!         _ctx: &mut (),
//!         _fragment: &'a FragmentDefinition<'a>,
//!         _info: &VisitInfo<'a>
//!     ) -> VisitFlow {
//!         // We can skip over fragment nodes and never traverse their children,
//!         // since we're only interested in counting operations
//!         VisitFlow::Skip
//!     }
//!
//!     fn enter_operation(
//!         &mut self,
//!         _ctx: &mut (),
//!         operation: &'a OperationDefinition<'a>,
//!         _info: &VisitInfo<'a>
//!     ) -> VisitFlow {
//!         self.operations += 1;
//!         VisitFlow::Next
//!     }
//! }
//!
//! let ctx = ASTContext::new();
//! let document = Document::parse(&ctx, "{ field }").unwrap();
//! let mut visitor = CountOperations::default();
//! document.visit(&mut (), &mut visitor);
//! assert_eq!(visitor.operations, 1);
//! ```
//!
//! Multiple visitors can run in a single pass over a document by combining them with
//! [`Visitor::compose`]; the validator fuses its whole rule set this way.

mod compose;
mod folder;
mod path;
mod visitor;

pub use compose::ComposedVisitor;
pub use folder::*;
pub use path::*;
pub use visitor::*;
