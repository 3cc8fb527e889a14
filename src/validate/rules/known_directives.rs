use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that every `@directive` is known to the schema and legally positioned.
///
/// A directive definition names the positions it may appear in: operations, fields, or
/// fragments. Fragment positions comprise fragment spreads, inline fragments, and fragment
/// definitions.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Directives-Are-Defined)
#[derive(Default)]
pub struct KnownDirectives {}

impl<'a> ValidationRule<'a> for KnownDirectives {}

impl<'a> Visitor<'a, ValidationContext<'a>> for KnownDirectives {
    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a Directive<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let directive_def = match ctx.schema().get_directive(directive.name) {
            Some(directive_def) => directive_def,
            None => {
                ctx.report_error(
                    format!(r#"Unknown directive "{}"."#, directive.name),
                    vec![NodeRef::Directive(directive)],
                );
                return VisitFlow::Next;
            }
        };

        let misplaced_on = match info.parent_kind() {
            Some(ASTKind::OperationDefinition) if !directive_def.on_operation => Some("operation"),
            Some(ASTKind::Field) if !directive_def.on_field => Some("field"),
            Some(
                ASTKind::FragmentSpread | ASTKind::InlineFragment | ASTKind::FragmentDefinition,
            ) if !directive_def.on_fragment => Some("fragment"),
            _ => None,
        };
        if let Some(position) = misplaced_on {
            ctx.report_error(
                format!(
                    r#"Directive "{}" may not be used on "{}"."#,
                    directive.name, position
                ),
                vec![NodeRef::Directive(directive)],
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
    fn well_placed_directives() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "query Q @onQuery {
                dog @onField {
                    name @include(if: true)
                    ...F @onFragment
                    ... on Dog @onFragment { nickname }
                }
            }
            fragment F on Dog @onFragment { barkVolume }",
        )
        .unwrap();
        KnownDirectives::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn unknown_directive() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ dog { name @mystery } }").unwrap();
        let errors = KnownDirectives::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, r#"Unknown directive "mystery"."#);
    }

    #[test]
    fn misplaced_directives() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "query Q @onField { dog @onQuery { name ...F @onQuery } }
             fragment F on Dog @onField { name }",
        )
        .unwrap();
        let errors = KnownDirectives::errors(&ctx, schema, document);
        let messages: Vec<&str> = errors.iter().map(|error| error.message).collect();
        assert_eq!(
            messages,
            vec![
                r#"Directive "onField" may not be used on "operation"."#,
                r#"Directive "onQuery" may not be used on "field"."#,
                r#"Directive "onQuery" may not be used on "fragment"."#,
                r#"Directive "onField" may not be used on "fragment"."#,
            ]
        );
    }
}
