use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate a document for all fragment names in spreads to be defined in the same document.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-spread-target-defined)
#[derive(Default)]
pub struct KnownFragmentNames {}

impl<'a> ValidationRule<'a> for KnownFragmentNames {}

impl<'a> Visitor<'a, ValidationContext<'a>> for KnownFragmentNames {
    fn enter_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        spread: &'a FragmentSpread<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if ctx.fragment(spread.name.name).is_none() {
            ctx.report_error(
                format!(r#"Unknown fragment "{}"."#, spread.name.name),
                vec![NodeRef::NamedType(&spread.name)],
            );
        }
        VisitFlow::Next
    }
}
