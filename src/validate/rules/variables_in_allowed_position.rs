use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, BumpWrapper, HashMap};

use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::schema::TypeRef;
use crate::visit::*;

/// Validate that every variable usage appears in a position whose expected type the
/// variable's type conforms to.
///
/// A variable may be stricter than the position expects; in particular a variable with a
/// default value is treated as non-null, since a value is always available.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-All-Variable-Usages-are-Allowed)
pub struct VariablesInAllowedPosition<'a> {
    variable_defs: HashMap<&'a str, &'a VariableDefinition<'a>, DefaultHashBuilder, BumpWrapper<'a>>,
}

impl<'a> DefaultIn<'a> for VariablesInAllowedPosition<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            variable_defs: HashMap::new_in(BumpWrapper(arena)),
        }
    }
}

impl<'a> ValidationRule<'a> for VariablesInAllowedPosition<'a> {
    const VISITS_SPREAD_FRAGMENTS: bool = true;
}

impl<'a> Visitor<'a, ValidationContext<'a>> for VariablesInAllowedPosition<'a> {
    fn enter_operation(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.variable_defs.clear();
        VisitFlow::Next
    }

    fn enter_variable_definition(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.variable_defs.insert(var_def.variable.name, var_def);
        VisitFlow::Next
    }

    fn leave_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let usages = ctx.recursive_variable_usages(operation);
        for usage in usages {
            let var_def = match self.variable_defs.get(usage.variable.name) {
                Some(var_def) => *var_def,
                None => continue,
            };
            let expected_type = match usage.expected_type {
                Some(expected_type) => expected_type,
                None => continue,
            };
            let var_type = TypeRef::from_ast(ctx.arena, &var_def.of_type);
            if !ctx
                .schema()
                .is_ref_sub_type(effective_type(ctx.arena, var_type, var_def), expected_type)
            {
                ctx.report_error(
                    format!(
                        r#"Variable "${}" of type "{}" used in position expecting type "{}"."#,
                        usage.variable.name, var_type, expected_type
                    ),
                    vec![NodeRef::Variable(usage.variable)],
                );
            }
        }
        VisitFlow::Next
    }
}

/// A variable definition with a default value is effectively non-null.
fn effective_type<'a>(
    arena: &'a Bump,
    var_type: &'a TypeRef<'a>,
    var_def: &'a VariableDefinition<'a>,
) -> &'a TypeRef<'a> {
    if var_def.default_value.is_none() || var_type.is_non_null() {
        var_type
    } else {
        arena.alloc(TypeRef::NonNullType(var_type))
    }
}
