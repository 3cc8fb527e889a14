use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that leaf fields carry no sub selection while composite fields carry one.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Leaf-Field-Selections)
#[derive(Default)]
pub struct ScalarLeafs {}

impl<'a> ValidationRule<'a> for ScalarLeafs {}

impl<'a> Visitor<'a, ValidationContext<'a>> for ScalarLeafs {
    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a Field<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let of_type = match ctx.current_type() {
            Some(of_type) => of_type,
            None => return VisitFlow::Next,
        };
        let named = match of_type.named_type(ctx.schema()) {
            Some(named) => named,
            None => return VisitFlow::Next,
        };
        if named.is_leaf() {
            if !field.selection_set.is_empty() {
                ctx.report_error(
                    format!(
                        r#"Field "{}" of type "{}" must not have a sub selection."#,
                        field.name, of_type
                    ),
                    vec![NodeRef::SelectionSet(&field.selection_set)],
                );
            }
        } else if field.selection_set.is_empty() {
            ctx.report_error(
                format!(
                    r#"Field "{}" of type "{}" must have a sub selection."#,
                    field.name, of_type
                ),
                vec![NodeRef::Field(field)],
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
    fn scalar_leaves() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ dog { name barkVolume } }").unwrap();
        ScalarLeafs::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn sub_selection_on_scalar() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ dog { barkVolume { sinceWhen } } }").unwrap();
        let errors = ScalarLeafs::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"Field "barkVolume" of type "Int" must not have a sub selection."#
        );
    }

    #[test]
    fn missing_sub_selection_on_object() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ human }").unwrap();
        let errors = ScalarLeafs::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"Field "human" of type "Human" must have a sub selection."#
        );
    }

    #[test]
    fn missing_sub_selection_on_wrapped_type() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ human { pets } }").unwrap();
        let errors = ScalarLeafs::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"Field "pets" of type "[Pet]" must have a sub selection."#
        );
    }

    #[test]
    fn enum_is_a_leaf() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ cat { furColor } }").unwrap();
        ScalarLeafs::validate(&ctx, schema, document).unwrap();
    }
}
