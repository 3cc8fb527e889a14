use super::super::{is_valid_literal_value, NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that the literal value of every argument is of the type the argument declares.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Values-of-Correct-Type)
#[derive(Default)]
pub struct ArgumentsOfCorrectType {}

impl<'a> ValidationRule<'a> for ArgumentsOfCorrectType {}

impl<'a> Visitor<'a, ValidationContext<'a>> for ArgumentsOfCorrectType {
    fn enter_argument(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        argument: &'a Argument<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if let Some(argument_def) = ctx.argument_def() {
            let (is_valid, messages) =
                is_valid_literal_value(ctx.schema(), argument_def.input_type, Some(&argument.value));
            if !is_valid {
                let details = if messages.is_empty() {
                    String::new()
                } else {
                    format!("\n{}", messages.join("\n"))
                };
                ctx.report_error(
                    format!(
                        r#"Argument "{}" has invalid value {}.{}"#,
                        argument.name,
                        argument.value.print(),
                        details
                    ),
                    vec![NodeRef::Value(&argument.value)],
                );
            }
        }
        VisitFlow::Next
    }
}
