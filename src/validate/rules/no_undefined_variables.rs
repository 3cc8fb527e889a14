use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, BumpWrapper, HashSet};

use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that every variable an operation uses, directly or through fragment spreads, is
/// defined by that operation.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-All-Variable-Uses-Defined)
pub struct NoUndefinedVariables<'a> {
    defined_names: HashSet<&'a str, DefaultHashBuilder, BumpWrapper<'a>>,
}

impl<'a> DefaultIn<'a> for NoUndefinedVariables<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            defined_names: HashSet::new_in(BumpWrapper(arena)),
        }
    }
}

impl<'a> ValidationRule<'a> for NoUndefinedVariables<'a> {
    const VISITS_SPREAD_FRAGMENTS: bool = true;
}

impl<'a> Visitor<'a, ValidationContext<'a>> for NoUndefinedVariables<'a> {
    fn enter_operation(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.defined_names.clear();
        VisitFlow::Next
    }

    fn enter_variable_definition(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.defined_names.insert(var_def.variable.name);
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
            let name = usage.variable.name;
            if !self.defined_names.contains(name) {
                let message = match &operation.name {
                    Some(operation_name) => format!(
                        r#"Variable "${}" is not defined by operation "{}"."#,
                        name, operation_name.name
                    ),
                    None => format!(r#"Variable "${}" is not defined."#, name),
                };
                ctx.report_error(
                    message,
                    vec![
                        NodeRef::Variable(usage.variable),
                        NodeRef::Operation(operation),
                    ],
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
    fn defined_variables() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "query Q($atOtherHomes: Boolean) {
                dog { isHousetrained(atOtherHomes: $atOtherHomes) ...F }
            }
            fragment F on Dog { isHousetrained(atOtherHomes: $atOtherHomes) }",
        )
        .unwrap();
        NoUndefinedVariables::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn undefined_variable_in_operation() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "query Q { dog { isHousetrained(atOtherHomes: $atOtherHomes) } }",
        )
        .unwrap();
        let errors = NoUndefinedVariables::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"Variable "$atOtherHomes" is not defined by operation "Q"."#
        );
    }

    #[test]
    fn undefined_variable_in_anonymous_operation() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document =
            Document::parse(&ctx, "{ dog { isHousetrained(atOtherHomes: $x) } }").unwrap();
        let errors = NoUndefinedVariables::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, r#"Variable "$x" is not defined."#);
    }

    #[test]
    fn undefined_variable_in_fragment() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "query Q { dog { ...A } }
             fragment A on Dog { ...B }
             fragment B on Dog { isHousetrained(atOtherHomes: $x) }",
        )
        .unwrap();
        let errors = NoUndefinedVariables::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"Variable "$x" is not defined by operation "Q"."#
        );
    }

    #[test]
    fn variables_are_scoped_per_operation() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "query A($x: Boolean) { dog { isHousetrained(atOtherHomes: $x) } }
             query B { dog { isHousetrained(atOtherHomes: $x) } }",
        )
        .unwrap();
        let errors = NoUndefinedVariables::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"Variable "$x" is not defined by operation "B"."#
        );
    }
}
