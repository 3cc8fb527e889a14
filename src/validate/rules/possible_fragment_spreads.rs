use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that every fragment spread can ever apply: the possible runtime types of the
/// surrounding selection and of the fragment's type condition must overlap.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-spread-is-possible)
#[derive(Default)]
pub struct PossibleFragmentSpreads {}

impl<'a> ValidationRule<'a> for PossibleFragmentSpreads {}

impl<'a> Visitor<'a, ValidationContext<'a>> for PossibleFragmentSpreads {
    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        inline_fragment: &'a InlineFragment<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let fragment_type = ctx
            .current_type()
            .and_then(|of_type| of_type.named_type(ctx.schema()));
        let parent_type = ctx.parent_type();
        if let (Some(fragment_type), Some(parent_type)) = (fragment_type, parent_type) {
            if !ctx.schema().types_overlap(fragment_type, parent_type) {
                ctx.report_error(
                    format!(
                        r#"Fragment cannot be spread here as objects of type "{}" can never be of type "{}"."#,
                        parent_type.name(),
                        fragment_type.name()
                    ),
                    vec![NodeRef::InlineFragment(inline_fragment)],
                );
            }
        }
        VisitFlow::Next
    }

    fn enter_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        spread: &'a FragmentSpread<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let fragment_type = ctx
            .fragment(spread.name.name)
            .and_then(|fragment| ctx.schema().get_type(fragment.type_condition.name))
            .copied();
        let parent_type = ctx.parent_type();
        if let (Some(fragment_type), Some(parent_type)) = (fragment_type, parent_type) {
            if !ctx.schema().types_overlap(fragment_type, parent_type) {
                ctx.report_error(
                    format!(
                        r#"Fragment "{}" cannot be spread here as objects of type "{}" can never be of type "{}"."#,
                        spread.name.name,
                        parent_type.name(),
                        fragment_type.name()
                    ),
                    vec![NodeRef::FragmentSpread(spread)],
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
    fn possible_spreads() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{
                pet { ... on Dog { name } ...CatFields }
                catOrDog { ... on Pet { name } }
                dog { ... on Pet { name } }
            }
            fragment CatFields on Cat { name }",
        )
        .unwrap();
        PossibleFragmentSpreads::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn impossible_inline_spread() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ dog { ... on Cat { name } } }").unwrap();
        let errors = PossibleFragmentSpreads::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"Fragment cannot be spread here as objects of type "Dog" can never be of type "Cat"."#
        );
    }

    #[test]
    fn impossible_named_spread() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{ humanOrAlien { ...PetFields } } fragment PetFields on Pet { name }",
        )
        .unwrap();
        let errors = PossibleFragmentSpreads::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"Fragment "PetFields" cannot be spread here as objects of type "HumanOrAlien" can never be of type "Pet"."#
        );
    }

    #[test]
    fn abstract_types_overlap_by_possible_types() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        // DogOrHuman and Pet share Dog as a possible type
        let document = Document::parse(&ctx, "{ dogOrHuman { ... on Pet { name } } }").unwrap();
        PossibleFragmentSpreads::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn unknown_fragments_are_skipped() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ dog { ...Unknown } }").unwrap();
        PossibleFragmentSpreads::validate(&ctx, schema, document).unwrap();
    }
}
