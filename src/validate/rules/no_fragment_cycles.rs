use bumpalo::{collections::Vec as BumpVec, Bump};
use hashbrown::{hash_map::DefaultHashBuilder, BumpWrapper, HashMap, HashSet};

use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::*;

/// Validate that no fragment is spread within itself, directly or through other fragments.
///
/// Each distinct cycle is reported once: every spread along a reported cycle is remembered,
/// and later traversals that run into one of those spreads stop there instead of reporting
/// the same loop again. Inline fragments cannot be spread by name and are ignored.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-spreads-must-not-form-cycles)
pub struct NoFragmentCycles<'a> {
    spreads_in_fragment:
        HashMap<&'a str, BumpVec<'a, &'a FragmentSpread<'a>>, DefaultHashBuilder, BumpWrapper<'a>>,
    known_to_lead_to_cycle: HashSet<usize, DefaultHashBuilder, BumpWrapper<'a>>,
}

impl<'a> DefaultIn<'a> for NoFragmentCycles<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            spreads_in_fragment: HashMap::new_in(BumpWrapper(arena)),
            known_to_lead_to_cycle: HashSet::new_in(BumpWrapper(arena)),
        }
    }
}

impl<'a> ValidationRule<'a> for NoFragmentCycles<'a> {}

impl<'a> Visitor<'a, ValidationContext<'a>> for NoFragmentCycles<'a> {
    fn enter_document(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        document: &'a Document<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        for definition in document.definitions.iter() {
            if let Definition::Fragment(fragment) = definition {
                let mut spreads = BumpVec::new_in(ctx.arena);
                gather_spreads(&fragment.selection_set, &mut spreads);
                self.spreads_in_fragment.insert(fragment.name.name, spreads);
            }
        }
        VisitFlow::Next
    }

    fn enter_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.detect_cycles_from(ctx, fragment.name.name);
        VisitFlow::Next
    }
}

struct Frame<'s, 'a> {
    spreads: &'s [&'a FragmentSpread<'a>],
    index: usize,
}

impl<'a> NoFragmentCycles<'a> {
    /// Depth-first search through the spread graph starting at `initial_name`, with an
    /// explicit frame stack so deeply nested fragment graphs cannot exhaust the call stack.
    fn detect_cycles_from(&mut self, ctx: &mut ValidationContext<'a>, initial_name: &'a str) {
        let empty: &[&'a FragmentSpread<'a>] = &[];
        let mut spread_path: Vec<&'a FragmentSpread<'a>> = Vec::new();
        let mut frames = vec![Frame {
            spreads: self
                .spreads_in_fragment
                .get(initial_name)
                .map_or(empty, |spreads| spreads.as_slice()),
            index: 0,
        }];

        while let Some(frame) = frames.last_mut() {
            if frame.index == frame.spreads.len() {
                frames.pop();
                if !frames.is_empty() {
                    spread_path.pop();
                }
                continue;
            }
            let spread = frame.spreads[frame.index];
            frame.index += 1;

            if self.known_to_lead_to_cycle.contains(&node_key(spread)) {
                continue;
            }
            if spread.name.name == initial_name {
                let mut cycle_path = spread_path.clone();
                cycle_path.push(spread);
                for cycle_spread in cycle_path.iter() {
                    self.known_to_lead_to_cycle.insert(node_key(cycle_spread));
                }
                let via = if spread_path.is_empty() {
                    String::new()
                } else {
                    let names: Vec<&str> = spread_path
                        .iter()
                        .map(|spread| spread.name.name)
                        .collect();
                    format!(" via {}", names.join(", "))
                };
                ctx.report_error(
                    format!(
                        r#"Cannot spread fragment "{}" within itself{}."#,
                        initial_name, via
                    ),
                    cycle_path.into_iter().map(NodeRef::FragmentSpread).collect(),
                );
                continue;
            }
            if spread_path
                .iter()
                .any(|previous| std::ptr::eq(*previous, spread))
            {
                continue;
            }
            spread_path.push(spread);
            frames.push(Frame {
                spreads: self
                    .spreads_in_fragment
                    .get(spread.name.name)
                    .map_or(empty, |spreads| spreads.as_slice()),
                index: 0,
            });
        }
    }
}

fn node_key(spread: &FragmentSpread) -> usize {
    spread as *const FragmentSpread as usize
}

/// Collects every fragment spread node within a selection set, including those nested in
/// fields and inline fragments.
fn gather_spreads<'a>(
    selection_set: &'a SelectionSet<'a>,
    out: &mut BumpVec<'a, &'a FragmentSpread<'a>>,
) {
    for selection in selection_set.selections.iter() {
        match selection {
            Selection::FragmentSpread(spread) => out.push(spread),
            Selection::Field(field) => gather_spreads(&field.selection_set, out),
            Selection::InlineFragment(inline_fragment) => {
                gather_spreads(&inline_fragment.selection_set, out)
            }
        }
    }
}
