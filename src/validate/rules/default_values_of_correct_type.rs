use super::super::{is_valid_literal_value, NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that variable default values match the variable's declared type, and that
/// required variables declare no default at all.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Values-of-Correct-Type)
#[derive(Default)]
pub struct DefaultValuesOfCorrectType {}

impl<'a> ValidationRule<'a> for DefaultValuesOfCorrectType {}

impl<'a> Visitor<'a, ValidationContext<'a>> for DefaultValuesOfCorrectType {
    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let default_value = match &var_def.default_value {
            Some(default_value) => default_value,
            None => return VisitFlow::Next,
        };
        let of_type = match ctx.input_type() {
            Some(of_type) => of_type,
            None => return VisitFlow::Next,
        };

        if of_type.is_non_null() {
            ctx.report_error(
                format!(
                    r#"Variable "${}" of type "{}" is required and will not use the default value. Perhaps you meant to use type "{}"."#,
                    var_def.variable.name,
                    of_type,
                    of_type.nullable()
                ),
                vec![NodeRef::Value(default_value)],
            );
            return VisitFlow::Next;
        }

        let (is_valid, messages) =
            is_valid_literal_value(ctx.schema(), of_type, Some(default_value));
        if !is_valid {
            let details = if messages.is_empty() {
                String::new()
            } else {
                format!("\n{}", messages.join("\n"))
            };
            ctx.report_error(
                format!(
                    r#"Variable "${}" has invalid default value: {}.{}"#,
                    var_def.variable.name,
                    default_value.print(),
                    details
                ),
                vec![NodeRef::Value(default_value)],
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
    fn valid_defaults() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            r#"query ($a: Int = 1, $b: String = "ok", $c: ComplexInput = {requiredField: true}) { dog { name } }"#,
        )
        .unwrap();
        DefaultValuesOfCorrectType::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn required_variables_take_no_default() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document =
            Document::parse(&ctx, "query ($a: Int! = 3) { dog { name } }").unwrap();
        let errors = DefaultValuesOfCorrectType::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "Variable \"$a\" of type \"Int!\" is required and will not use the default value. Perhaps you meant to use type \"Int\"."
        );
    }

    #[test]
    fn mismatched_default() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document =
            Document::parse(&ctx, r#"query ($a: Int = "one") { dog { name } }"#).unwrap();
        let errors = DefaultValuesOfCorrectType::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "Variable \"$a\" has invalid default value: \"one\".\nExpected type \"Int\", found \"one\"."
        );
    }
}
