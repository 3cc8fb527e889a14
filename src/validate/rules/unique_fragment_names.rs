use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, BumpWrapper, HashMap};

use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that no two fragments in a document share the same name.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-Name-Uniqueness)
pub struct UniqueFragmentNames<'a> {
    known_names: HashMap<&'a str, &'a NamedType<'a>, DefaultHashBuilder, BumpWrapper<'a>>,
}

impl<'a> DefaultIn<'a> for UniqueFragmentNames<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            known_names: HashMap::new_in(BumpWrapper(arena)),
        }
    }
}

impl<'a> ValidationRule<'a> for UniqueFragmentNames<'a> {}

impl<'a> Visitor<'a, ValidationContext<'a>> for UniqueFragmentNames<'a> {
    fn enter_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let name = &fragment.name;
        if let Some(previous) = self.known_names.get(name.name) {
            ctx.report_error(
                format!(r#"There can only be one fragment named "{}"."#, name.name),
                vec![NodeRef::NamedType(previous), NodeRef::NamedType(name)],
            );
        } else {
            self.known_names.insert(name.name, name);
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
        let document = Document::parse(
            &ctx,
            "{ dog { ...A ...B } } fragment A on Dog { name } fragment B on Dog { nickname }",
        )
        .unwrap();
        UniqueFragmentNames::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn duplicate_names() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{ dog { ...A } } fragment A on Dog { name } fragment A on Dog { nickname }",
        )
        .unwrap();
        let errors = UniqueFragmentNames::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"There can only be one fragment named "A"."#
        );
    }
}
