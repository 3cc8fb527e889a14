use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, BumpWrapper, HashMap};

use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that no field or directive is passed two arguments of the same name.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Argument-Uniqueness)
pub struct UniqueArgumentNames<'a> {
    known_names: HashMap<&'a str, &'a Argument<'a>, DefaultHashBuilder, BumpWrapper<'a>>,
}

impl<'a> DefaultIn<'a> for UniqueArgumentNames<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            known_names: HashMap::new_in(BumpWrapper(arena)),
        }
    }
}

impl<'a> ValidationRule<'a> for UniqueArgumentNames<'a> {}

impl<'a> Visitor<'a, ValidationContext<'a>> for UniqueArgumentNames<'a> {
    fn enter_field(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _field: &'a Field<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.known_names.clear();
        VisitFlow::Next
    }

    fn enter_directive(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _directive: &'a Directive<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.known_names.clear();
        VisitFlow::Next
    }

    fn enter_argument(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        argument: &'a Argument<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if let Some(previous) = self.known_names.get(argument.name) {
            ctx.report_error(
                format!(
                    r#"There can be only one argument named "{}"."#,
                    argument.name
                ),
                vec![NodeRef::Argument(previous), NodeRef::Argument(argument)],
            );
        } else {
            self.known_names.insert(argument.name, argument);
        }
        VisitFlow::Next
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::test_helpers::test_schema;
    use super::*;

    #[test]
    fn unique_arguments() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{ dog { isAtLocation(x: 1, y: 2) name @include(if: true) @skip(if: false) } }",
        )
        .unwrap();
        UniqueArgumentNames::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn duplicate_field_arguments() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, "{ dog { isAtLocation(x: 1, x: 2) } }").unwrap();
        let errors = UniqueArgumentNames::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"There can be only one argument named "x"."#
        );
    }

    #[test]
    fn duplicate_directive_arguments() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document =
            Document::parse(&ctx, "{ dog { name @include(if: true, if: false) } }").unwrap();
        UniqueArgumentNames::validate(&ctx, schema, document).unwrap_err();
    }

    #[test]
    fn directive_scope_is_separate_from_field_scope() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document =
            Document::parse(&ctx, "{ dog { isAtLocation(x: 1) @include(if: true) } }").unwrap();
        UniqueArgumentNames::validate(&ctx, schema, document).unwrap();
    }
}
