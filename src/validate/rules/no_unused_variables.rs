use bumpalo::{collections::Vec as BumpVec, Bump};

use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that every variable an operation defines is used at least once, directly or
/// within a spread fragment.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-All-Variables-Used)
pub struct NoUnusedVariables<'a> {
    variable_defs: BumpVec<'a, &'a VariableDefinition<'a>>,
}

impl<'a> DefaultIn<'a> for NoUnusedVariables<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            variable_defs: BumpVec::new_in(arena),
        }
    }
}

impl<'a> ValidationRule<'a> for NoUnusedVariables<'a> {
    const VISITS_SPREAD_FRAGMENTS: bool = true;
}

impl<'a> Visitor<'a, ValidationContext<'a>> for NoUnusedVariables<'a> {
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
        self.variable_defs.push(var_def);
        VisitFlow::Next
    }

    fn leave_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let usages = ctx.recursive_variable_usages(operation);
        for var_def in self.variable_defs.iter() {
            let name = var_def.variable.name;
            if !usages.iter().any(|usage| usage.variable.name == name) {
                ctx.report_error(
                    format!(r#"Variable "${}" is never used."#, name),
                    vec![NodeRef::VariableDefinition(var_def)],
                );
            }
        }
        VisitFlow::Next
    }
}
