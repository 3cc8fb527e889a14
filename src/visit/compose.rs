use super::visitor::*;
use crate::ast::*;

/// This structure implements the `Visitor` trait and runs two child Visitors in parallel,
/// executing and calling callbacks on them both.
///
/// During traversal the Composed Visitor will keep track of the visitors' [`VisitFlow`] signals
/// and will avoid calling callbacks on them appropriately, while letting the other visitor
/// continue as usual. A `Skip` or `Break` returned by one visitor never cancels the other
/// visitor's callbacks on the same node.
///
/// Visitors may be composed indefinitely since a Composed Visitor can be passed into another
/// Composed Visitor, as long as all visitors accept the same `Context` type.
pub struct ComposedVisitor<'a, Context, A: Visitor<'a, Context>, B: Visitor<'a, Context>> {
    _marker: std::marker::PhantomData<&'a Context>,
    depth: usize,
    skip_a: usize,
    skip_b: usize,
    pub a: A,
    pub b: B,
}

impl<'a, C, A: Visitor<'a, C>, B: Visitor<'a, C>> ComposedVisitor<'a, C, A, B> {
    /// Composes two input visitors into one Composed Visitor.
    #[inline]
    pub fn new(a: A, b: B) -> ComposedVisitor<'a, C, A, B> {
        ComposedVisitor {
            _marker: std::marker::PhantomData,
            depth: 1,
            skip_a: usize::MAX,
            skip_b: usize::MAX,
            a,
            b,
        }
    }

    #[inline(always)]
    fn compose_flow_enter<Node: 'a>(
        &mut self,
        fn_a: fn(_self: &mut A, ctx: &mut C, node: &'a Node, info: &VisitInfo<'a>) -> VisitFlow,
        fn_b: fn(_self: &mut B, ctx: &mut C, node: &'a Node, info: &VisitInfo<'a>) -> VisitFlow,
        node: &'a Node,
        info: &VisitInfo<'a>,
        ctx: &mut C,
    ) -> VisitFlow {
        let mut all_skip = true;
        let mut all_break = true;

        if self.skip_a == usize::MAX || self.skip_a == self.depth {
            self.skip_a = usize::MAX;
            let flow = fn_a(&mut self.a, ctx, node, info);
            if flow == VisitFlow::Break {
                self.skip_a = 0;
                all_skip = false;
            } else if flow == VisitFlow::Skip {
                self.skip_a = self.depth;
                all_break = false;
            } else {
                all_break = false;
                all_skip = false;
            }
        } else if self.skip_a == 0 {
            all_skip = false;
        } else {
            all_break = false;
        }

        if self.skip_b == usize::MAX || self.skip_b == self.depth {
            self.skip_b = usize::MAX;
            let flow = fn_b(&mut self.b, ctx, node, info);
            if flow == VisitFlow::Break {
                self.skip_b = 0;
                all_skip = false;
            } else if flow == VisitFlow::Skip {
                self.skip_b = self.depth;
                all_break = false;
            } else {
                all_break = false;
                all_skip = false;
            }
        } else if self.skip_b == 0 {
            all_skip = false;
        } else {
            all_break = false;
        };

        if all_break {
            VisitFlow::Break
        } else if all_skip {
            if self.skip_a == self.depth {
                self.skip_a = usize::MAX;
            }
            if self.skip_b == self.depth {
                self.skip_b = usize::MAX;
            }
            VisitFlow::Skip
        } else {
            self.depth += 1;
            VisitFlow::Next
        }
    }

    #[inline(always)]
    fn compose_flow_leave<Node: 'a>(
        &mut self,
        fn_a: fn(_self: &mut A, ctx: &mut C, node: &'a Node, info: &VisitInfo<'a>) -> VisitFlow,
        fn_b: fn(_self: &mut B, ctx: &mut C, node: &'a Node, info: &VisitInfo<'a>) -> VisitFlow,
        node: &'a Node,
        info: &VisitInfo<'a>,
        ctx: &mut C,
    ) -> VisitFlow {
        self.depth -= 1;
        let mut all_break = true;

        if self.skip_a == usize::MAX {
            let flow = fn_a(&mut self.a, ctx, node, info);
            if flow == VisitFlow::Break {
                self.skip_a = 0;
            } else {
                all_break = false;
            }
        } else if self.skip_a == self.depth {
            self.skip_a = usize::MAX;
            all_break = false;
        } else if self.skip_a != 0 {
            all_break = false;
        }

        if self.skip_b == usize::MAX {
            let flow = fn_b(&mut self.b, ctx, node, info);
            if flow == VisitFlow::Break {
                self.skip_b = 0;
            } else {
                all_break = false;
            }
        } else if self.skip_b == self.depth {
            self.skip_b = usize::MAX;
            all_break = false;
        } else if self.skip_b != 0 {
            all_break = false;
        }

        if all_break {
            VisitFlow::Break
        } else {
            VisitFlow::Next
        }
    }
}

macro_rules! composed_hooks {
    ($(($enter:ident, $leave:ident, $node:ty)),+ $(,)?) => {
        $(
            #[inline]
            fn $enter(&mut self, ctx: &mut C, node: &'a $node, info: &VisitInfo<'a>) -> VisitFlow {
                self.compose_flow_enter(A::$enter, B::$enter, node, info, ctx)
            }

            #[inline]
            fn $leave(&mut self, ctx: &mut C, node: &'a $node, info: &VisitInfo<'a>) -> VisitFlow {
                self.compose_flow_leave(A::$leave, B::$leave, node, info, ctx)
            }
        )+
    };
}

impl<'a, C, A: Visitor<'a, C>, B: Visitor<'a, C>> Visitor<'a, C> for ComposedVisitor<'a, C, A, B> {
    composed_hooks!(
        (enter_document, leave_document, Document<'a>),
        (enter_operation, leave_operation, OperationDefinition<'a>),
        (enter_fragment, leave_fragment, FragmentDefinition<'a>),
        (
            enter_variable_definition,
            leave_variable_definition,
            VariableDefinition<'a>
        ),
        (enter_selection_set, leave_selection_set, SelectionSet<'a>),
        (
            enter_fragment_spread,
            leave_fragment_spread,
            FragmentSpread<'a>
        ),
        (
            enter_inline_fragment,
            leave_inline_fragment,
            InlineFragment<'a>
        ),
        (enter_field, leave_field, Field<'a>),
        (enter_directive, leave_directive, Directive<'a>),
        (enter_argument, leave_argument, Argument<'a>),
        (enter_list_value, leave_list_value, ListValue<'a>),
        (enter_object_value, leave_object_value, ObjectValue<'a>),
        (enter_object_field, leave_object_field, ObjectField<'a>),
        (enter_variable, leave_variable, Variable<'a>),
        (enter_named_type, leave_named_type, NamedType<'a>),
    );
}

#[cfg(test)]
mod tests {
    use super::super::visitor::tests::*;
    use super::*;
    use crate::ast::ParseNode;

    #[derive(Debug, PartialEq, Default)]
    struct SkipFieldsVisitor {
        enter_selection_set: usize,
        leave_selection_set: usize,
        enter_field: usize,
        leave_field: usize,
        enter_argument: usize,
    }

    impl<'a> Visitor<'a, ()> for SkipFieldsVisitor {
        fn enter_selection_set(
            &mut self,
            _: &mut (),
            _selection_set: &'a SelectionSet<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.enter_selection_set += 1;
            VisitFlow::Next
        }
        fn leave_selection_set(
            &mut self,
            _: &mut (),
            _selection_set: &'a SelectionSet<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.leave_selection_set += 1;
            VisitFlow::Next
        }
        fn enter_field(
            &mut self,
            _: &mut (),
            _field: &'a Field<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.enter_field += 1;
            VisitFlow::Skip
        }
        fn leave_field(
            &mut self,
            _: &mut (),
            _field: &'a Field<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.leave_field += 1;
            VisitFlow::Next
        }
        fn enter_argument(
            &mut self,
            _: &mut (),
            _argument: &'a Argument<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.enter_argument += 1;
            VisitFlow::Next
        }
    }

    #[test]
    fn one_visitor_skipping_does_not_cancel_the_other() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, "{ a(x: 1) { b } c }").unwrap();

        let mut visitor = ComposedVisitor::new(CountVisitor::default(), SkipFieldsVisitor::default());
        ast.visit(&mut (), &mut visitor);

        // The counting visitor still sees every node below skipped fields
        assert_eq!(visitor.a.in_field, 3);
        assert_eq!(visitor.a.out_field, 3);
        assert_eq!(visitor.a.in_argument, 1);

        // The skipping visitor entered both top-level fields, was never called below
        // them, and never saw the nested field at all
        assert_eq!(visitor.b.enter_field, 2);
        assert_eq!(visitor.b.leave_field, 0);
        assert_eq!(visitor.b.enter_argument, 0);
        // It still observed the top-level selection set
        assert_eq!(visitor.b.enter_selection_set, 1);
        assert_eq!(visitor.b.leave_selection_set, 1);
    }

    #[test]
    fn nested_composition() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, "{ a b }").unwrap();

        let inner = ComposedVisitor::new(CountVisitor::default(), CountVisitor::default());
        let mut visitor = ComposedVisitor::new(inner, CountVisitor::default());
        ast.visit(&mut (), &mut visitor);

        assert_eq!(visitor.a.a.in_field, 2);
        assert_eq!(visitor.a.b.in_field, 2);
        assert_eq!(visitor.b.in_field, 2);
    }
}
