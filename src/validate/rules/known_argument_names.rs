use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that every supplied argument is defined by the field or directive taking it.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Argument-Names)
#[derive(Default)]
pub struct KnownArgumentNames {}

impl<'a> ValidationRule<'a> for KnownArgumentNames {}

impl<'a> Visitor<'a, ValidationContext<'a>> for KnownArgumentNames {
    fn enter_argument(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        argument: &'a Argument<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        match info.parent_kind() {
            Some(ASTKind::Field) => {
                if let Some(field_def) = ctx.field_def() {
                    if field_def.get_argument(argument.name).is_none() {
                        let parent_name = ctx.parent_type().map_or("", |parent| parent.name());
                        ctx.report_error(
                            format!(
                                r#"Unknown argument "{}" on field "{}" of type "{}"."#,
                                argument.name, field_def.name, parent_name
                            ),
                            vec![NodeRef::Argument(argument)],
                        );
                    }
                }
            }
            Some(ASTKind::Directive) => {
                if let Some(directive_def) = ctx.directive() {
                    if directive_def.get_argument(argument.name).is_none() {
                        ctx.report_error(
                            format!(
                                r#"Unknown argument "{}" on directive "@{}"."#,
                                argument.name, directive_def.name
                            ),
                            vec![NodeRef::Argument(argument)],
                        );
                    }
                }
            }
            _ => {}
        }
        VisitFlow::Next
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::test_helpers::test_schema;
    use super::*;

    #[test]
    fn known_arguments() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{ dog { doesKnowCommand(dogCommand: SIT) name @include(if: true) } }",
        )
        .unwrap();
        KnownArgumentNames::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn unknown_field_argument() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document =
            Document::parse(&ctx, "{ dog { doesKnowCommand(command: SIT) } }").unwrap();
        let errors = KnownArgumentNames::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"Unknown argument "command" on field "doesKnowCommand" of type "Dog"."#
        );
    }

    #[test]
    fn unknown_directive_argument() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ dog { name @include(when: true) } }").unwrap();
        let errors = KnownArgumentNames::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"Unknown argument "when" on directive "@include"."#
        );
    }

    #[test]
    fn arguments_on_unknown_fields_are_skipped() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ dog { wingspan(size: 3) } }").unwrap();
        KnownArgumentNames::validate(&ctx, schema, document).unwrap();
    }
}
