use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, BumpWrapper, HashMap};

use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that every operation defines each of its variables only once.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Variable-Uniqueness)
pub struct UniqueVariableNames<'a> {
    known_names: HashMap<&'a str, &'a Variable<'a>, DefaultHashBuilder, BumpWrapper<'a>>,
}

impl<'a> DefaultIn<'a> for UniqueVariableNames<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            known_names: HashMap::new_in(BumpWrapper(arena)),
        }
    }
}

impl<'a> ValidationRule<'a> for UniqueVariableNames<'a> {}

impl<'a> Visitor<'a, ValidationContext<'a>> for UniqueVariableNames<'a> {
    fn enter_operation(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.known_names.clear();
        VisitFlow::Next
    }

    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let variable = &var_def.variable;
        if let Some(previous) = self.known_names.get(variable.name) {
            ctx.report_error(
                format!(
                    r#"There can only be one variable named "{}"."#,
                    variable.name
                ),
                vec![NodeRef::Variable(previous), NodeRef::Variable(variable)],
            );
        } else {
            self.known_names.insert(variable.name, variable);
        }
        VisitFlow::Next
    }
}
