use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, BumpWrapper, HashMap};

use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that no two operations in a document share the same name.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Operation-Name-Uniqueness)
pub struct UniqueOperationNames<'a> {
    known_names: HashMap<&'a str, &'a NamedType<'a>, DefaultHashBuilder, BumpWrapper<'a>>,
}

impl<'a> DefaultIn<'a> for UniqueOperationNames<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            known_names: HashMap::new_in(BumpWrapper(arena)),
        }
    }
}

impl<'a> ValidationRule<'a> for UniqueOperationNames<'a> {}

impl<'a> Visitor<'a, ValidationContext<'a>> for UniqueOperationNames<'a> {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if let Some(name) = &operation.name {
            if let Some(previous) = self.known_names.get(name.name) {
                ctx.report_error(
                    format!(r#"There can only be one operation named "{}"."#, name.name),
                    vec![NodeRef::NamedType(previous), NodeRef::NamedType(name)],
                );
            } else {
                self.known_names.insert(name.name, name);
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
    fn unique_names() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document =
            Document::parse(&ctx, "query A { dog { name } } query B { dog { name } }").unwrap();
        UniqueOperationNames::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn duplicate_names() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document =
            Document::parse(&ctx, "query A { dog { name } } query A { cat { name } }").unwrap();
        let errors = UniqueOperationNames::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"There can only be one operation named "A"."#
        );
        assert_eq!(errors[0].locations.len(), 2);
    }

    #[test]
    fn duplicate_across_operation_kinds() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document =
            Document::parse(&ctx, "query A { dog { name } } mutation A { dog { name } }").unwrap();
        UniqueOperationNames::validate(&ctx, schema, document).unwrap_err();
    }
}
