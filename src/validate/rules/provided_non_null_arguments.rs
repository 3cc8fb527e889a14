use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that every non-null argument a field or directive declares is actually provided.
///
/// Fields are checked on leave so that deeper errors surface first. Missing arguments are
/// reported in name order, keeping the output stable no matter how the schema stores its
/// argument definitions.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Required-Arguments)
#[derive(Default)]
pub struct ProvidedNonNullArguments {}

impl<'a> ValidationRule<'a> for ProvidedNonNullArguments {}

impl<'a> Visitor<'a, ValidationContext<'a>> for ProvidedNonNullArguments {
    fn leave_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a Field<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let field_def = match ctx.field_def() {
            Some(field_def) => field_def,
            None => return VisitFlow::Next,
        };
        let mut argument_names: Vec<&str> = field_def.arguments.keys().copied().collect();
        argument_names.sort_unstable();
        for argument_name in argument_names {
            let argument_def = &field_def.arguments[argument_name];
            if argument_def.input_type.is_non_null() && field.arguments.get(argument_name).is_none()
            {
                ctx.report_error(
                    format!(
                        r#"Field "{}" argument "{}" of type "{}" is required but not provided."#,
                        field.name, argument_name, argument_def.input_type
                    ),
                    vec![NodeRef::Field(field)],
                );
            }
        }
        VisitFlow::Next
    }

    fn leave_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a Directive<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let directive_def = match ctx.directive() {
            Some(directive_def) => directive_def,
            None => return VisitFlow::Next,
        };
        let mut argument_names: Vec<&str> = directive_def.arguments.keys().copied().collect();
        argument_names.sort_unstable();
        for argument_name in argument_names {
            let argument_def = &directive_def.arguments[argument_name];
            if argument_def.input_type.is_non_null()
                && directive.arguments.get(argument_name).is_none()
            {
                ctx.report_error(
                    format!(
                        r#"Directive "@{}" argument "{}" of type "{}" is required but not provided."#,
                        directive.name, argument_name, argument_def.input_type
                    ),
                    vec![NodeRef::Directive(directive)],
                );
            }
        }
        VisitFlow::Next
    }
}
