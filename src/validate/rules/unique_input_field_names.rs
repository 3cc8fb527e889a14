use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, BumpWrapper, HashMap};

use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

type KnownFields<'a> = HashMap<&'a str, &'a ObjectField<'a>, DefaultHashBuilder, BumpWrapper<'a>>;

/// Validate that no input object literal provides the same field twice.
///
/// Nested object literals each get their own scope, so the same field name may appear at
/// different nesting depths.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Field-Uniqueness)
pub struct UniqueInputFieldNames<'a> {
    arena: &'a Bump,
    known_name_stack: Vec<KnownFields<'a>>,
}

impl<'a> DefaultIn<'a> for UniqueInputFieldNames<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            arena,
            known_name_stack: Vec::new(),
        }
    }
}

impl<'a> ValidationRule<'a> for UniqueInputFieldNames<'a> {}

impl<'a> Visitor<'a, ValidationContext<'a>> for UniqueInputFieldNames<'a> {
    fn enter_object_value(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _object_value: &'a ObjectValue<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.known_name_stack.push(HashMap::new_in(BumpWrapper(self.arena)));
        VisitFlow::Next
    }

    fn leave_object_value(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _object_value: &'a ObjectValue<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.known_name_stack.pop();
        VisitFlow::Next
    }

    fn enter_object_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        object_field: &'a ObjectField<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if let Some(known_names) = self.known_name_stack.last_mut() {
            if let Some(previous) = known_names.get(object_field.name) {
                let previous = *previous;
                ctx.report_error(
                    format!(
                        r#"There can be only one input field named "{}"."#,
                        object_field.name
                    ),
                    vec![
                        NodeRef::ObjectField(previous),
                        NodeRef::ObjectField(object_field),
                    ],
                );
            } else {
                known_names.insert(object_field.name, object_field);
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
    fn unique_fields() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{ complicatedArgs { complexArgField(complexArg: {requiredField: true, intField: 2}) } }",
        )
        .unwrap();
        UniqueInputFieldNames::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn duplicate_fields() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{ f(arg: {field: 1, field: 2}) }",
        )
        .unwrap();
        let errors = UniqueInputFieldNames::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            r#"There can be only one input field named "field"."#
        );
    }

    #[test]
    fn nested_objects_have_their_own_scope() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{ f(arg: {field: {field: 1}, other: {field: 2}}) }",
        )
        .unwrap();
        UniqueInputFieldNames::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn duplicates_in_nested_objects() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{ f(arg: {outer: {inner: 1, inner: 2}}) }",
        )
        .unwrap();
        let errors = UniqueInputFieldNames::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
    }
}
