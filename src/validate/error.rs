use crate::ast::*;
use crate::error::Location;
use crate::visit::PathSegment;

/// A reference to an AST node of the validated document.
///
/// Validation errors point back at the nodes that violated a rule. The referenced nodes are
/// always part of the input document; the validator never fabricates nodes.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Operation(&'a OperationDefinition<'a>),
    Fragment(&'a FragmentDefinition<'a>),
    VariableDefinition(&'a VariableDefinition<'a>),
    SelectionSet(&'a SelectionSet<'a>),
    Field(&'a Field<'a>),
    FragmentSpread(&'a FragmentSpread<'a>),
    InlineFragment(&'a InlineFragment<'a>),
    Directive(&'a Directive<'a>),
    Argument(&'a Argument<'a>),
    ObjectField(&'a ObjectField<'a>),
    Value(&'a Value<'a>),
    Variable(&'a Variable<'a>),
    NamedType(&'a NamedType<'a>),
}

impl<'a> NodeRef<'a> {
    /// The source position of the referenced node.
    pub fn location(&self) -> Location {
        match self {
            NodeRef::Operation(node) => node.location,
            NodeRef::Fragment(node) => node.location,
            NodeRef::VariableDefinition(node) => node.location,
            NodeRef::SelectionSet(node) => node.location,
            NodeRef::Field(node) => node.location,
            NodeRef::FragmentSpread(node) => node.location,
            NodeRef::InlineFragment(node) => node.location,
            NodeRef::Directive(node) => node.location,
            NodeRef::Argument(node) => node.location,
            NodeRef::ObjectField(node) => node.location,
            NodeRef::Value(node) => node.location(),
            NodeRef::Variable(node) => node.location,
            NodeRef::NamedType(node) => node.location,
        }
    }
}

/// A single validation rule violation.
///
/// Carries the message, the source locations derived from the offending nodes, a response
/// path (always empty for validation, present for parity with executor errors), and
/// references to the offending nodes themselves.
#[derive(Debug, Clone)]
pub struct ValidationError<'a> {
    pub message: &'a str,
    pub locations: Vec<Location>,
    pub path: Vec<PathSegment>,
    pub nodes: Vec<NodeRef<'a>>,
}

impl<'a> ValidationError<'a> {
    pub(crate) fn new(message: &'a str, nodes: Vec<NodeRef<'a>>) -> Self {
        let locations = nodes.iter().map(NodeRef::location).collect();
        ValidationError {
            message,
            locations,
            path: Vec::new(),
            nodes,
        }
    }
}
