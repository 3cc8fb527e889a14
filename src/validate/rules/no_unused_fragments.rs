use bumpalo::{collections::Vec as BumpVec, Bump};
use hashbrown::{hash_map::DefaultHashBuilder, BumpWrapper, HashMap, HashSet};

use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

enum SpreadScope<'a> {
    Operation,
    Fragment(&'a str),
}

/// Validate that every fragment defined in a document is spread at least once, directly
/// from an operation or transitively through other spread fragments.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragments-Must-Be-Used)
pub struct NoUnusedFragments<'a> {
    fragment_defs: BumpVec<'a, &'a FragmentDefinition<'a>>,
    operation_spreads: BumpVec<'a, &'a str>,
    fragment_spreads: HashMap<&'a str, BumpVec<'a, &'a str>, DefaultHashBuilder, BumpWrapper<'a>>,
    scope: Option<SpreadScope<'a>>,
}

impl<'a> DefaultIn<'a> for NoUnusedFragments<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            fragment_defs: BumpVec::new_in(arena),
            operation_spreads: BumpVec::new_in(arena),
            fragment_spreads: HashMap::new_in(BumpWrapper(arena)),
            scope: None,
        }
    }
}

impl<'a> ValidationRule<'a> for NoUnusedFragments<'a> {}

impl<'a> Visitor<'a, ValidationContext<'a>> for NoUnusedFragments<'a> {
    fn enter_operation(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.scope = Some(SpreadScope::Operation);
        VisitFlow::Next
    }

    fn enter_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.fragment_defs.push(fragment);
        self.fragment_spreads
            .insert(fragment.name.name, BumpVec::new_in(ctx.arena));
        self.scope = Some(SpreadScope::Fragment(fragment.name.name));
        VisitFlow::Next
    }

    fn enter_fragment_spread(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        spread: &'a FragmentSpread<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        match self.scope {
            Some(SpreadScope::Operation) => self.operation_spreads.push(spread.name.name),
            Some(SpreadScope::Fragment(fragment_name)) => {
                if let Some(spreads) = self.fragment_spreads.get_mut(fragment_name) {
                    spreads.push(spread.name.name);
                }
            }
            None => {}
        }
        VisitFlow::Next
    }

    fn leave_document(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _document: &'a Document<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let mut used: HashSet<&'a str> = HashSet::new();
        let mut queue: Vec<&'a str> = self.operation_spreads.iter().copied().collect();
        while let Some(name) = queue.pop() {
            if used.insert(name) {
                if let Some(spreads) = self.fragment_spreads.get(name) {
                    queue.extend(spreads.iter().copied());
                }
            }
        }

        for fragment in self.fragment_defs.iter() {
            if !used.contains(fragment.name.name) {
                ctx.report_error(
                    format!(r#"Fragment "{}" is never used."#, fragment.name.name),
                    vec![NodeRef::Fragment(fragment)],
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
    fn all_fragments_used() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{ dog { ...A } } fragment A on Dog { ...B } fragment B on Dog { name }",
        )
        .unwrap();
        NoUnusedFragments::validate(&ctx, schema, document).unwrap();
    }

    #[test]
    fn unused_fragment() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{ dog { name } } fragment Unused on Dog { name }",
        )
        .unwrap();
        let errors = NoUnusedFragments::errors(&ctx, schema, document);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, r#"Fragment "Unused" is never used."#);
    }

    #[test]
    fn fragments_only_spread_by_unused_fragments() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{ dog { name } } fragment A on Dog { ...B } fragment B on Dog { name }",
        )
        .unwrap();
        let errors = NoUnusedFragments::errors(&ctx, schema, document);
        let messages: Vec<&str> = errors.iter().map(|error| error.message).collect();
        assert_eq!(
            messages,
            vec![
                r#"Fragment "A" is never used."#,
                r#"Fragment "B" is never used."#,
            ]
        );
    }

    #[test]
    fn cyclic_fragments_spread_from_an_operation_count_as_used() {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(
            &ctx,
            "{ dog { ...A } } fragment A on Dog { ...B } fragment B on Dog { ...A }",
        )
        .unwrap();
        NoUnusedFragments::validate(&ctx, schema, document).unwrap();
    }
}
