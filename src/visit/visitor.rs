use super::{compose::ComposedVisitor, path::Path, PathSegment};
use crate::ast::*;
use hashbrown::{hash_map::DefaultHashBuilder, BumpWrapper, HashMap};

/// A by-name index of the fragment definitions of a document, as built by
/// `Document::fragments`.
pub type FragmentMap<'a> =
    HashMap<&'a str, &'a FragmentDefinition<'a>, DefaultHashBuilder, BumpWrapper<'a>>;

pub(crate) mod private {
    use super::{VisitFlow, VisitInfo, Visitor};

    pub trait VisitNodeWithInfo<'a>: Sized {
        fn visit_with_info<'b, C, V: Visitor<'a, C>>(
            &'a self,
            ctx: &'b mut C,
            visitor: &'b mut V,
            info: &mut VisitInfo<'a>,
        ) -> VisitFlow;
    }
}

/// A visitor signal that is returned from [Visitor] callbacks to alter the flow of traversal.
///
/// The default callbacks all return `VisitFlow::Next`, which continues the depth-first traversal.
/// The other signals may be used to skip over a node in an `enter_` callback or to abort traversal
/// entirely without visiting any more AST Nodes.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum VisitFlow {
    /// Continue visiting nodes as usual.
    Next,
    /// Abort the traversal without performing any subsequent visits.
    Break,
    /// Skip over the current node without performing any deeper traversal.
    /// (Only applies to `enter_` callbacks)
    Skip,
}

/// Positional information the traversal maintains for the currently visited node.
///
/// Carries the path by which the node hangs off the document root, the kinds of its
/// ancestor nodes, and, when fragment-spread expansion is active, the fragment index
/// and the set of spreads already expanded.
#[derive(Debug, Default)]
pub struct VisitInfo<'a> {
    pub path: Path,
    pub ancestors: Vec<ASTKind>,
    pub(crate) fragments: Option<&'a FragmentMap<'a>>,
    pub(crate) visited_spreads: Vec<&'a str>,
}

impl<'a> VisitInfo<'a> {
    /// The kind of the node the currently visited node directly hangs off of.
    #[inline]
    pub fn parent_kind(&self) -> Option<ASTKind> {
        self.ancestors.last().copied()
    }
}

/// Trait for a visitor that carries methods that are called as callbacks while AST nodes
/// implementing the visitor pattern are traversed.
///
/// While the AST is traversed in depth-first order, callbacks that are prefixed with `enter_` are
/// called from top-to-bottom while the traversal is recursing, while callbacks that are prefixed
/// with `leave_` are called from bottom-to-top while the traversal is returning.
///
/// All callbacks have a default no-op implementation that returns `VisitFlow::Next`. The
/// [`VisitFlow`] signals are returned from callbacks to alter the traversal and either continue it
/// (`Next`), skip over a node during an `enter_` callback with (`Skip`), or abort traversal
/// entirely (`Break`).
///
/// The visitor must implement the [Visitor] trait which may also define a custom context structure
/// that can be passed to the `visit` method. By default the context is an empty unit `()`.
///
/// This pattern is applicable to any AST node that implements the [`VisitNode`] trait.
pub trait Visitor<'a, Context = ()>: Sized {
    /// Combines two visitors into one that will run both the original and passed visitor
    /// concurrently.
    ///
    /// Both visitors must accept the same `Context` type.
    #[inline]
    fn compose<V: Visitor<'a, Context>>(self, other: V) -> ComposedVisitor<'a, Context, Self, V> {
        ComposedVisitor::new(self, other)
    }

    fn enter_document(
        &mut self,
        _ctx: &mut Context,
        _document: &'a Document<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    fn leave_document(
        &mut self,
        _ctx: &mut Context,
        _document: &'a Document<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    fn enter_operation(
        &mut self,
        _ctx: &mut Context,
        _operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    fn leave_operation(
        &mut self,
        _ctx: &mut Context,
        _operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    fn enter_fragment(
        &mut self,
        _ctx: &mut Context,
        _fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    fn leave_fragment(
        &mut self,
        _ctx: &mut Context,
        _fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    fn enter_variable_definition(
        &mut self,
        _ctx: &mut Context,
        _var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    fn leave_variable_definition(
        &mut self,
        _ctx: &mut Context,
        _var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    fn enter_selection_set(
        &mut self,
        _ctx: &mut Context,
        _selection_set: &'a SelectionSet<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    fn leave_selection_set(
        &mut self,
        _ctx: &mut Context,
        _selection_set: &'a SelectionSet<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    fn enter_fragment_spread(
        &mut self,
        _ctx: &mut Context,
        _fragment_spread: &'a FragmentSpread<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    fn leave_fragment_spread(
        &mut self,
        _ctx: &mut Context,
        _fragment_spread: &'a FragmentSpread<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    fn enter_inline_fragment(
        &mut self,
        _ctx: &mut Context,
        _inline_fragment: &'a InlineFragment<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    fn leave_inline_fragment(
        &mut self,
        _ctx: &mut Context,
        _inline_fragment: &'a InlineFragment<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    fn enter_field(
        &mut self,
        _ctx: &mut Context,
        _field: &'a Field<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    fn leave_field(
        &mut self,
        _ctx: &mut Context,
        _field: &'a Field<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    fn enter_directive(
        &mut self,
        _ctx: &mut Context,
        _directive: &'a Directive<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    fn leave_directive(
        &mut self,
        _ctx: &mut Context,
        _directive: &'a Directive<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    fn enter_argument(
        &mut self,
        _ctx: &mut Context,
        _argument: &'a Argument<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    fn leave_argument(
        &mut self,
        _ctx: &mut Context,
        _argument: &'a Argument<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    fn enter_list_value(
        &mut self,
        _ctx: &mut Context,
        _list_value: &'a ListValue<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    fn leave_list_value(
        &mut self,
        _ctx: &mut Context,
        _list_value: &'a ListValue<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    fn enter_object_value(
        &mut self,
        _ctx: &mut Context,
        _object_value: &'a ObjectValue<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    fn leave_object_value(
        &mut self,
        _ctx: &mut Context,
        _object_value: &'a ObjectValue<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    fn enter_object_field(
        &mut self,
        _ctx: &mut Context,
        _object_field: &'a ObjectField<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    fn leave_object_field(
        &mut self,
        _ctx: &mut Context,
        _object_field: &'a ObjectField<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    fn enter_variable(
        &mut self,
        _ctx: &mut Context,
        _variable: &'a Variable<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    fn leave_variable(
        &mut self,
        _ctx: &mut Context,
        _variable: &'a Variable<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    fn enter_named_type(
        &mut self,
        _ctx: &mut Context,
        _named_type: &'a NamedType<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    fn leave_named_type(
        &mut self,
        _ctx: &mut Context,
        _named_type: &'a NamedType<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
}

/// Trait for visiting AST Nodes of a GraphQL language document in depth-first order using a
/// custom visitor.
///
/// The visitor must implement the [Visitor] trait which may also define a custom context structure
/// that can be passed to the `visit` method.
pub trait VisitNode<'a>: Sized + private::VisitNodeWithInfo<'a> {
    /// Visit a GraphQL AST node tree recursively in depth-first order with a given visitor.
    fn visit<'b, C, V: Visitor<'a, C>>(&'a self, ctx: &'b mut C, visitor: &'b mut V) -> VisitFlow {
        let mut info = VisitInfo::default();
        self.visit_with_info(ctx, visitor, &mut info)
    }

    /// Visit a GraphQL AST node tree, additionally descending from every [`FragmentSpread`] into
    /// the referenced [`FragmentDefinition`] in place, so that a visitor observes fragment
    /// contents in the context of the operations spreading them.
    ///
    /// Each spread name is expanded at most once per traversal, which keeps cyclic fragment
    /// spreads from looping.
    fn visit_with_fragments<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        fragments: &'a FragmentMap<'a>,
    ) -> VisitFlow {
        let mut info = VisitInfo {
            fragments: Some(fragments),
            ..VisitInfo::default()
        };
        self.visit_with_info(ctx, visitor, &mut info)
    }
}

impl<'a, T: private::VisitNodeWithInfo<'a>> VisitNode<'a> for T {}

impl<'a> private::VisitNodeWithInfo<'a> for Variable<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_variable(ctx, self, info);
        if let VisitFlow::Next = flow {
            visitor.leave_variable(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for NamedType<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_named_type(ctx, self, info);
        if let VisitFlow::Next = flow {
            visitor.leave_named_type(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for Type<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        // Only the named leaf is observable; wrappers carry no name to check
        self.named_type().visit_with_info(ctx, visitor, info)
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for ListValue<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_list_value(ctx, self, info);
        if let VisitFlow::Next = flow {
            info.ancestors.push(ASTKind::List);
            for (index, value) in self.children.iter().enumerate() {
                info.path.push(PathSegment::Index(index));
                if value.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                    return VisitFlow::Break;
                }
                info.path.pop();
            }
            info.ancestors.pop();

            visitor.leave_list_value(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for ObjectField<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_object_field(ctx, self, info);
        if let VisitFlow::Next = flow {
            info.ancestors.push(ASTKind::ObjectField);
            info.path.push(PathSegment::Value);
            if self.value.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();
            info.ancestors.pop();

            visitor.leave_object_field(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for ObjectValue<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_object_value(ctx, self, info);
        if let VisitFlow::Next = flow {
            info.ancestors.push(ASTKind::Object);
            for (index, field) in self.children.iter().enumerate() {
                info.path.push(PathSegment::Index(index));
                if field.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                    return VisitFlow::Break;
                }
                info.path.pop();
            }
            info.ancestors.pop();

            visitor.leave_object_value(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for Value<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        match self {
            Value::Variable(variable) => variable.visit_with_info(ctx, visitor, info),
            Value::List(list_value) => list_value.visit_with_info(ctx, visitor, info),
            Value::Object(object_value) => object_value.visit_with_info(ctx, visitor, info),
            // Scalar leaves carry no hooks of their own
            _ => VisitFlow::Next,
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for Argument<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_argument(ctx, self, info);
        if let VisitFlow::Next = flow {
            info.ancestors.push(ASTKind::Argument);
            info.path.push(PathSegment::Value);
            if self.value.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();
            info.ancestors.pop();

            visitor.leave_argument(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for Arguments<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        for (index, argument) in self.children.iter().enumerate() {
            info.path.push(PathSegment::Index(index));
            if argument.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();
        }
        VisitFlow::Next
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for Directive<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_directive(ctx, self, info);
        if let VisitFlow::Next = flow {
            info.ancestors.push(ASTKind::Directive);
            info.path.push(PathSegment::Arguments);
            if self.arguments.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();
            info.ancestors.pop();

            visitor.leave_directive(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for Directives<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        for (index, directive) in self.children.iter().enumerate() {
            info.path.push(PathSegment::Index(index));
            if directive.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();
        }
        VisitFlow::Next
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for VariableDefinition<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_variable_definition(ctx, self, info);
        if let VisitFlow::Next = flow {
            info.ancestors.push(ASTKind::VariableDefinition);
            info.path.push(PathSegment::Type);
            if self.of_type.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();

            if let Some(default_value) = &self.default_value {
                info.path.push(PathSegment::Value);
                if default_value.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                    return VisitFlow::Break;
                }
                info.path.pop();
            }

            info.path.push(PathSegment::Directives);
            if self.directives.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();
            info.ancestors.pop();

            visitor.leave_variable_definition(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for VariableDefinitions<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        for (index, var_def) in self.children.iter().enumerate() {
            info.path.push(PathSegment::Index(index));
            if var_def.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();
        }
        VisitFlow::Next
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for Field<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_field(ctx, self, info);
        if let VisitFlow::Next = flow {
            info.ancestors.push(ASTKind::Field);
            info.path.push(PathSegment::Arguments);
            if self.arguments.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();

            info.path.push(PathSegment::Directives);
            if self.directives.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();

            info.path.push(PathSegment::SelectionSet);
            if self.selection_set.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();
            info.ancestors.pop();

            visitor.leave_field(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for FragmentSpread<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_fragment_spread(ctx, self, info);
        if let VisitFlow::Next = flow {
            info.ancestors.push(ASTKind::FragmentSpread);
            info.path.push(PathSegment::Directives);
            if self.directives.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();
            info.ancestors.pop();

            if let Some(fragments) = info.fragments {
                let name = self.name.name;
                if !info.visited_spreads.contains(&name) {
                    info.visited_spreads.push(name);
                    if let Some(fragment) = fragments.get(name).copied() {
                        if fragment.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                            return VisitFlow::Break;
                        }
                    }
                }
            }

            visitor.leave_fragment_spread(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for InlineFragment<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_inline_fragment(ctx, self, info);
        if let VisitFlow::Next = flow {
            info.ancestors.push(ASTKind::InlineFragment);
            if let Some(type_condition) = &self.type_condition {
                info.path.push(PathSegment::Type);
                if type_condition.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                    return VisitFlow::Break;
                }
                info.path.pop();
            }

            info.path.push(PathSegment::Directives);
            if self.directives.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();

            info.path.push(PathSegment::SelectionSet);
            if self.selection_set.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();
            info.ancestors.pop();

            visitor.leave_inline_fragment(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for SelectionSet<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_selection_set(ctx, self, info);
        if let VisitFlow::Next = flow {
            info.ancestors.push(ASTKind::SelectionSet);
            for (index, selection) in self.selections.iter().enumerate() {
                info.path.push(PathSegment::Index(index));
                let flow = match selection {
                    Selection::Field(field) => field.visit_with_info(ctx, visitor, info),
                    Selection::FragmentSpread(spread) => spread.visit_with_info(ctx, visitor, info),
                    Selection::InlineFragment(fragment) => {
                        fragment.visit_with_info(ctx, visitor, info)
                    }
                };
                if flow == VisitFlow::Break {
                    return VisitFlow::Break;
                }
                info.path.pop();
            }
            info.ancestors.pop();

            visitor.leave_selection_set(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for FragmentDefinition<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_fragment(ctx, self, info);
        if let VisitFlow::Next = flow {
            info.ancestors.push(ASTKind::FragmentDefinition);
            info.path.push(PathSegment::Type);
            if self.type_condition.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();

            info.path.push(PathSegment::Directives);
            if self.directives.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();

            info.path.push(PathSegment::SelectionSet);
            if self.selection_set.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();
            info.ancestors.pop();

            visitor.leave_fragment(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for OperationDefinition<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_operation(ctx, self, info);
        if let VisitFlow::Next = flow {
            info.ancestors.push(ASTKind::OperationDefinition);
            info.path.push(PathSegment::VariableDefinitions);
            if self
                .variable_definitions
                .visit_with_info(ctx, visitor, info)
                == VisitFlow::Break
            {
                return VisitFlow::Break;
            }
            info.path.pop();

            info.path.push(PathSegment::Directives);
            if self.directives.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();

            info.path.push(PathSegment::SelectionSet);
            if self.selection_set.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            info.path.pop();
            info.ancestors.pop();

            visitor.leave_operation(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for Document<'a> {
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_document(ctx, self, info);
        if let VisitFlow::Next = flow {
            info.ancestors.push(ASTKind::Document);
            for (index, definition) in self.definitions.iter().enumerate() {
                info.path.push(PathSegment::Index(index));
                let flow = match definition {
                    Definition::Operation(operation) => {
                        operation.visit_with_info(ctx, visitor, info)
                    }
                    Definition::Fragment(fragment) => fragment.visit_with_info(ctx, visitor, info),
                };
                if flow == VisitFlow::Break {
                    return VisitFlow::Break;
                }
                info.path.pop();
            }
            info.ancestors.pop();

            visitor.leave_document(ctx, self, info)
        } else {
            flow
        }
    }
}
