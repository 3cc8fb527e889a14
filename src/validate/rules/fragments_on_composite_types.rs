use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that fragments only condition on composite types.
///
/// A fragment's type condition decides whether the fragment applies at runtime, which only
/// makes sense for objects, interfaces, and unions; conditioning on a leaf type can never
/// match anything.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragments-On-Composite-Types)
#[derive(Default)]
pub struct FragmentsOnCompositeTypes {}

impl<'a> ValidationRule<'a> for FragmentsOnCompositeTypes {}

impl<'a> Visitor<'a, ValidationContext<'a>> for FragmentsOnCompositeTypes {
    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        inline_fragment: &'a InlineFragment<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let type_condition = match &inline_fragment.type_condition {
            Some(type_condition) => type_condition,
            None => return VisitFlow::Next,
        };
        let named = ctx
            .current_type()
            .and_then(|of_type| of_type.named_type(ctx.schema()));
        if let Some(named) = named {
            if !named.is_composite() {
                ctx.report_error(
                    format!(
                        r#"Fragment cannot condition on non composite type "{}"."#,
                        named.name()
                    ),
                    vec![NodeRef::NamedType(type_condition)],
                );
            }
        }
        VisitFlow::Next
    }

    fn enter_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let named = ctx
            .current_type()
            .and_then(|of_type| of_type.named_type(ctx.schema()));
        if let Some(named) = named {
            if !named.is_composite() {
                ctx.report_error(
                    format!(
                        r#"Fragment "{}" cannot condition on non composite type "{}"."#,
                        fragment.name.name,
                        named.name()
                    ),
                    vec![NodeRef::NamedType(&fragment.type_condition)],
                );
            }
        }
        VisitFlow::Next
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::test_helpers::test_schema;
    use super::*;

    #[test]
    fn composite_conditions() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{ pet { ... on Dog { name } ... on Pet { name } ... on CatOrDog { __typename } } }
             fragment F on Dog { name }",
        )
        .unwrap();
        FragmentsOnCompositeTypes::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn inline_on_scalar() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ pet { ... on Boolean { x } } }").unwrap();
        let errors = FragmentsOnCompositeTypes::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"Fragment cannot condition on non composite type "Boolean"."#
        );
    }

    #[test]
    fn fragment_on_enum() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document =
            Document::parse(&ctx, "fragment F on FurColor { __typename } { dog { ...F } }")
                .unwrap();
        let errors = FragmentsOnCompositeTypes::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"Fragment "F" cannot condition on non composite type "FurColor"."#
        );
    }

    #[test]
    fn unknown_condition_is_not_this_rules_problem() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "fragment F on Mystery { x } { dog { ...F } }")
            .unwrap();
        FragmentsOnCompositeTypes::validate(&ctx, schema, document).unwrap();
    }
}
