use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate a document to only contain one anonymous operation or multiple named operations.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Lone-Anonymous-Operation)
#[derive(Default)]
pub struct LoneAnonymousOperation {
    operation_count: usize,
}

impl<'a> ValidationRule<'a> for LoneAnonymousOperation {}

impl<'a> Visitor<'a, ValidationContext<'a>> for LoneAnonymousOperation {
    fn enter_document(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        document: &'a Document<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.operation_count = document
            .definitions
            .iter()
            .filter(|definition| definition.operation().is_some())
            .count();
        VisitFlow::Next
    }

    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if operation.name.is_none() && self.operation_count > 1 {
            ctx.report_error(
                "This anonymous operation must be the only defined operation.",
                vec![NodeRef::Operation(operation)],
            );
        }
        VisitFlow::Next
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::test_helpers::test_schema;
    use super::*;

    #[test]
    fn lone_operation() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ dog { name } }").unwrap();
        LoneAnonymousOperation::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn multiple_named() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document =
            Document::parse(&ctx, "query A { dog { name } } query B { dog { name } }").unwrap();
        LoneAnonymousOperation::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn anonymous_beside_named() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ dog { name } } query B { dog { name } }").unwrap();
        let errors = LoneAnonymousOperation::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "This anonymous operation must be the only defined operation."
        );
    }

    #[test]
    fn two_anonymous_report_twice() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ dog { name } } { cat { name } }").unwrap();
        let errors = LoneAnonymousOperation::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 2);
    }
}
