use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that every variable declares an input type: scalar, enum, or input object,
/// possibly wrapped in lists and non-nulls.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Variables-Are-Input-Types)
#[derive(Default)]
pub struct VariablesAreInputTypes {}

impl<'a> ValidationRule<'a> for VariablesAreInputTypes {}

impl<'a> Visitor<'a, ValidationContext<'a>> for VariablesAreInputTypes {
    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let named_type = var_def.of_type.named_type();
        if let Some(named) = ctx.schema().get_type(named_type.name) {
            if !named.is_input() {
                ctx.report_error(
                    format!(
                        r#"Variable "${}" cannot be non-input type "{}"."#,
                        var_def.variable.name,
                        var_def.of_type.print()
                    ),
                    vec![NodeRef::NamedType(named_type)],
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
    fn input_types() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "query ($a: Int, $b: [String!], $c: ComplexInput, $d: FurColor!) { dog { name } }",
        )
        .unwrap();
        VariablesAreInputTypes::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn output_types_rejected() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "query ($a: Dog, $b: [[CatOrDog!]]!, $c: Pet) { dog { name } }",
        )
        .unwrap();
        let errors = VariablesAreInputTypes::errors(&ctx, schema, document);
        let messages: Vec<&str> = errors.iter().map(|error| error.message).collect();
        assert_eq!(
            messages,
            vec![
                r#"Variable "$a" cannot be non-input type "Dog"."#,
                r#"Variable "$b" cannot be non-input type "[[CatOrDog!]]!"."#,
                r#"Variable "$c" cannot be non-input type "Pet"."#,
            ]
        );
    }

    #[test]
    fn unknown_types_are_left_to_known_type_names() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "query ($a: Mystery) { dog { name } }").unwrap();
        VariablesAreInputTypes::validate(&ctx, schema, document).unwrap();
    }
}
