use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that every type referenced by the document is defined by the schema.
///
/// Documents reference types in variable definitions and in fragment type conditions; the
/// traversal surfaces exactly those named type nodes.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-Spread-Type-Existence)
#[derive(Default)]
pub struct KnownTypeNames {}

impl<'a> ValidationRule<'a> for KnownTypeNames {}

impl<'a> Visitor<'a, ValidationContext<'a>> for KnownTypeNames {
    fn enter_named_type(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        named_type: &'a NamedType<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if ctx.schema().get_type(named_type.name).is_none() {
            ctx.report_error(
                format!(r#"Unknown type "{}"."#, named_type.name),
                vec![NodeRef::NamedType(named_type)],
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
    fn known_types() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "query ($v: Int, $list: [[Boolean!]]) { pet { ... on Dog { name } ...F } }
             fragment F on Cat { name }",
        )
        .unwrap();
        KnownTypeNames::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn unknown_types() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "query ($v: JumbledUpLetters) { pet { ... on Badger { name } ...F } }
             fragment F on Peettt { name }",
        )
        .unwrap();
        let errors = KnownTypeNames::errors(&ctx, schema, document);
        let messages: Vec<&str> = errors.iter().map(|error| error.message).collect();
        assert_eq!(
            messages,
            vec![
                r#"Unknown type "JumbledUpLetters"."#,
                r#"Unknown type "Badger"."#,
                r#"Unknown type "Peettt"."#,
            ]
        );
    }

    #[test]
    fn wrapped_types_check_their_leaf() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "query ($v: [Mystery!]!) { dog { name } }").unwrap();
        let errors = KnownTypeNames::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, r#"Unknown type "Mystery"."#);
    }
}
