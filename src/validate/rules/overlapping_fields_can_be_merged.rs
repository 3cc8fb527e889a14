use std::collections::BTreeMap;

use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, BumpWrapper, HashSet};

use super::super::{NodeRef, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::schema::{SchemaField, SchemaType};
use crate::visit::*;

/// Validate that every pair of fields selected under the same response name can be merged
/// into one response entry without ambiguity.
///
/// Selections are grouped by response name across inline fragments and named fragment
/// spreads. A pair conflicts when the two selections name different fields, return
/// structurally different types, take differing arguments, carry differing directives, or
/// when their sub-selections conflict; child conflicts aggregate into the parent's reason.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Field-Selection-Merging)
pub struct OverlappingFieldsCanBeMerged<'a> {
    compared: HashSet<(usize, usize), DefaultHashBuilder, BumpWrapper<'a>>,
}

impl<'a> DefaultIn<'a> for OverlappingFieldsCanBeMerged<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            compared: HashSet::new_in(BumpWrapper(arena)),
        }
    }
}

impl<'a> ValidationRule<'a> for OverlappingFieldsCanBeMerged<'a> {}

#[derive(Clone, Copy)]
struct FieldAndDef<'a> {
    field: &'a Field<'a>,
    field_def: Option<&'a SchemaField<'a>>,
}

/// Fields grouped by response name. The ordered map keeps conflict output in lexicographic
/// response-name order regardless of selection order.
type FieldMap<'a> = BTreeMap<&'a str, Vec<FieldAndDef<'a>>>;

/// Why two selections of the same response name cannot be merged: either a direct reason,
/// or the collected reasons of their conflicting sub-selections.
enum Reason<'a> {
    Message(String),
    Nested(Vec<(&'a str, Reason<'a>)>),
}

struct Conflict<'a> {
    name: &'a str,
    reason: Reason<'a>,
    fields: Vec<&'a Field<'a>>,
}

fn reason_message(reason: &Reason) -> String {
    match reason {
        Reason::Message(message) => message.clone(),
        Reason::Nested(children) => children
            .iter()
            .map(|(name, child)| {
                format!(
                    r#"subfields "{}" conflict because {}"#,
                    name,
                    reason_message(child)
                )
            })
            .collect::<Vec<String>>()
            .join(" and "),
    }
}

fn same_value(left: &Value, right: &Value) -> bool {
    left.print() == right.print()
}

fn same_arguments(left: &Arguments, right: &Arguments) -> bool {
    if left.children.len() != right.children.len() {
        return false;
    }
    left.children.iter().all(|argument| {
        right
            .get(argument.name)
            .map_or(false, |other| same_value(&argument.value, &other.value))
    })
}

fn same_directives(left: &Directives, right: &Directives) -> bool {
    if left.children.len() != right.children.len() {
        return false;
    }
    left.children.iter().all(|directive| {
        right
            .children
            .iter()
            .find(|other| other.name == directive.name)
            .map_or(false, |other| {
                same_arguments(&directive.arguments, &other.arguments)
            })
    })
}

fn node_key(field: &Field) -> usize {
    field as *const Field as usize
}

impl<'a> OverlappingFieldsCanBeMerged<'a> {
    fn collect_fields(
        &self,
        ctx: &ValidationContext<'a>,
        parent_type: Option<SchemaType<'a>>,
        selection_set: &'a SelectionSet<'a>,
        visited_fragments: &mut Vec<&'a str>,
        field_map: &mut FieldMap<'a>,
    ) {
        for selection in selection_set.selections.iter() {
            match selection {
                Selection::Field(field) => {
                    let field_def = parent_type.and_then(|parent| parent.get_field(field.name));
                    field_map
                        .entry(field.alias_or_name())
                        .or_default()
                        .push(FieldAndDef { field, field_def });
                }
                Selection::InlineFragment(inline_fragment) => {
                    let next_parent = match &inline_fragment.type_condition {
                        Some(condition) => ctx.schema().get_type(condition.name).copied(),
                        None => parent_type,
                    };
                    self.collect_fields(
                        ctx,
                        next_parent,
                        &inline_fragment.selection_set,
                        visited_fragments,
                        field_map,
                    );
                }
                Selection::FragmentSpread(spread) => {
                    if visited_fragments.contains(&spread.name.name) {
                        continue;
                    }
                    visited_fragments.push(spread.name.name);
                    if let Some(fragment) = ctx.fragment(spread.name.name) {
                        let next_parent =
                            ctx.schema().get_type(fragment.type_condition.name).copied();
                        self.collect_fields(
                            ctx,
                            next_parent,
                            &fragment.selection_set,
                            visited_fragments,
                            field_map,
                        );
                    }
                }
            }
        }
    }

    fn find_conflicts(
        &mut self,
        ctx: &ValidationContext<'a>,
        field_map: &FieldMap<'a>,
    ) -> Vec<Conflict<'a>> {
        let mut conflicts = Vec::new();
        for (response_name, fields) in field_map.iter() {
            for first in 0..fields.len() {
                for second in first + 1..fields.len() {
                    if let Some(conflict) =
                        self.find_conflict(ctx, response_name, fields[first], fields[second])
                    {
                        conflicts.push(conflict);
                    }
                }
            }
        }
        conflicts
    }

    fn find_conflict(
        &mut self,
        ctx: &ValidationContext<'a>,
        response_name: &'a str,
        left: FieldAndDef<'a>,
        right: FieldAndDef<'a>,
    ) -> Option<Conflict<'a>> {
        if std::ptr::eq(left.field, right.field) {
            return None;
        }
        let left_key = node_key(left.field);
        let right_key = node_key(right.field);
        let pair = (left_key.min(right_key), left_key.max(right_key));
        if !self.compared.insert(pair) {
            return None;
        }

        if left.field.name != right.field.name {
            return Some(Conflict {
                name: response_name,
                reason: Reason::Message(format!(
                    "{} and {} are different fields",
                    left.field.name, right.field.name
                )),
                fields: vec![left.field, right.field],
            });
        }

        let left_type = left.field_def.map(|def| def.output_type);
        let right_type = right.field_def.map(|def| def.output_type);
        if let (Some(left_type), Some(right_type)) = (left_type, right_type) {
            if left_type != right_type {
                return Some(Conflict {
                    name: response_name,
                    reason: Reason::Message(format!(
                        "they return differing types {} and {}",
                        left_type, right_type
                    )),
                    fields: vec![left.field, right.field],
                });
            }
        }

        if !same_arguments(&left.field.arguments, &right.field.arguments) {
            return Some(Conflict {
                name: response_name,
                reason: Reason::Message("they have differing arguments".to_string()),
                fields: vec![left.field, right.field],
            });
        }
        if !same_directives(&left.field.directives, &right.field.directives) {
            return Some(Conflict {
                name: response_name,
                reason: Reason::Message("they have differing directives".to_string()),
                fields: vec![left.field, right.field],
            });
        }

        if !left.field.selection_set.is_empty() && !right.field.selection_set.is_empty() {
            let mut visited_fragments = Vec::new();
            let mut subfield_map = FieldMap::new();
            let left_parent =
                left_type.and_then(|of_type| of_type.named_type(ctx.schema()));
            self.collect_fields(
                ctx,
                left_parent,
                &left.field.selection_set,
                &mut visited_fragments,
                &mut subfield_map,
            );
            let right_parent =
                right_type.and_then(|of_type| of_type.named_type(ctx.schema()));
            self.collect_fields(
                ctx,
                right_parent,
                &right.field.selection_set,
                &mut visited_fragments,
                &mut subfield_map,
            );

            let child_conflicts = self.find_conflicts(ctx, &subfield_map);
            if !child_conflicts.is_empty() {
                let mut fields = vec![left.field, right.field];
                let mut reasons = Vec::new();
                for child in child_conflicts {
                    fields.extend(child.fields);
                    reasons.push((child.name, child.reason));
                }
                return Some(Conflict {
                    name: response_name,
                    reason: Reason::Nested(reasons),
                    fields,
                });
            }
        }

        None
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for OverlappingFieldsCanBeMerged<'a> {
    fn leave_selection_set(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        selection_set: &'a SelectionSet<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let mut visited_fragments = Vec::new();
        let mut field_map = FieldMap::new();
        self.collect_fields(
            ctx,
            ctx.parent_type(),
            selection_set,
            &mut visited_fragments,
            &mut field_map,
        );

        let conflicts = self.find_conflicts(ctx, &field_map);
        for conflict in conflicts {
            ctx.report_error(
                format!(
                    r#"Fields "{}" conflict because {}."#,
                    conflict.name,
                    reason_message(&conflict.reason)
                ),
                conflict.fields.into_iter().map(NodeRef::Field).collect(),
            );
        }
        VisitFlow::Next
    }
}
