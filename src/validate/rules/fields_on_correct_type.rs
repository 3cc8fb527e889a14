use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that every selected field is defined by the type it's selected on.
///
/// The `__typename` meta field counts as defined on every composite type, so selecting it
/// never produces an error.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Field-Selections)
#[derive(Default)]
pub struct FieldsOnCorrectType {}

impl<'a> ValidationRule<'a> for FieldsOnCorrectType {}

impl<'a> Visitor<'a, ValidationContext<'a>> for FieldsOnCorrectType {
    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a Field<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if let Some(parent_type) = ctx.parent_type() {
            if ctx.field_def().is_none() {
                ctx.report_error(
                    format!(
                        r#"Cannot query field "{}" on "{}"."#,
                        field.name,
                        parent_type.name()
                    ),
                    vec![NodeRef::Field(field)],
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
    fn known_fields() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{ dog { name nickname barkVolume __typename } pet { name } }",
        )
        .unwrap();
        FieldsOnCorrectType::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn unknown_field() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ dog { wingspan } }").unwrap();
        let errors = FieldsOnCorrectType::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, r#"Cannot query field "wingspan" on "Dog"."#);
    }

    #[test]
    fn fields_on_unions_are_not_defined() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ catOrDog { name } }").unwrap();
        let errors = FieldsOnCorrectType::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, r#"Cannot query field "name" on "CatOrDog"."#);
    }

    #[test]
    fn typename_on_union() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ catOrDog { __typename } }").unwrap();
        FieldsOnCorrectType::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn deep_unknown_fields_stay_quiet() {
        // Once a field is unknown, there is no type to check its children against
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ unknownRoot { alsoUnknown } }").unwrap();
        let errors = FieldsOnCorrectType::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"Cannot query field "unknownRoot" on "QueryRoot"."#
        );
    }
}
