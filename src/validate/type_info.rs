use crate::ast::*;
use crate::schema::{Schema, SchemaDirective, SchemaField, SchemaInputField, SchemaType, TypeRef};
use crate::visit::{VisitFlow, VisitInfo, Visitor};
use bumpalo::Bump;
use hashbrown::{BumpWrapper, HashMap};

/// Live schema type information for the node a traversal is currently visiting.
///
/// The stacks are pushed before a node's `enter_` hook runs and rolled back after its
/// `leave_` hook, so a hook can always ask what type, field definition, or input type the
/// current position corresponds to. [`TypeInfoVisitor`] performs the pushing and popping
/// around an inner visitor.
pub struct TypeInfo<'a> {
    type_stack: Vec<Option<&'a TypeRef<'a>>>,
    parent_type_stack: Vec<Option<SchemaType<'a>>>,
    input_type_stack: Vec<Option<&'a TypeRef<'a>>>,
    field_def_stack: Vec<Option<&'a SchemaField<'a>>>,
    directive: Option<&'a SchemaDirective<'a>>,
    argument: Option<&'a SchemaInputField<'a>>,
    underflow: bool,
}

impl<'a> TypeInfo<'a> {
    pub(crate) fn new() -> Self {
        TypeInfo {
            type_stack: Vec::new(),
            parent_type_stack: Vec::new(),
            input_type_stack: Vec::new(),
            field_def_stack: Vec::new(),
            directive: None,
            argument: None,
            underflow: false,
        }
    }

    /// The type of the current position, usually the declared type of the enclosing field.
    #[inline]
    pub fn current_type(&self) -> Option<&'a TypeRef<'a>> {
        self.type_stack.last().copied().flatten()
    }

    /// The named type selections at the current position apply to.
    #[inline]
    pub fn parent_type(&self) -> Option<SchemaType<'a>> {
        self.parent_type_stack.last().copied().flatten()
    }

    /// The input type a literal at the current position is expected to conform to.
    #[inline]
    pub fn input_type(&self) -> Option<&'a TypeRef<'a>> {
        self.input_type_stack.last().copied().flatten()
    }

    /// The definition of the field being visited, if the parent type defines it.
    #[inline]
    pub fn field_def(&self) -> Option<&'a SchemaField<'a>> {
        self.field_def_stack.last().copied().flatten()
    }

    /// The definition of the directive being visited, if the schema defines it.
    #[inline]
    pub fn directive(&self) -> Option<&'a SchemaDirective<'a>> {
        self.directive
    }

    /// The definition of the argument being visited, if its field or directive defines it.
    #[inline]
    pub fn argument(&self) -> Option<&'a SchemaInputField<'a>> {
        self.argument
    }

    /// Whether every push was matched by exactly one pop. Anything else is a defect in the
    /// traversal engine, not in the validated document.
    pub(crate) fn is_balanced(&self) -> bool {
        !self.underflow
            && self.type_stack.is_empty()
            && self.parent_type_stack.is_empty()
            && self.input_type_stack.is_empty()
            && self.field_def_stack.is_empty()
            && self.directive.is_none()
            && self.argument.is_none()
    }

    fn pop_type(&mut self) {
        if self.type_stack.pop().is_none() {
            self.underflow = true;
        }
    }

    fn pop_parent_type(&mut self) {
        if self.parent_type_stack.pop().is_none() {
            self.underflow = true;
        }
    }

    fn pop_input_type(&mut self) {
        if self.input_type_stack.pop().is_none() {
            self.underflow = true;
        }
    }

    fn pop_field_def(&mut self) {
        if self.field_def_stack.pop().is_none() {
            self.underflow = true;
        }
    }

    fn enter_operation(
        &mut self,
        schema: &'a Schema<'a>,
        arena: &'a Bump,
        operation: &'a OperationDefinition<'a>,
    ) {
        let root = schema
            .get_root_type(operation.operation)
            .map(|object| &*arena.alloc(TypeRef::Type(object.name)));
        self.type_stack.push(root);
    }

    fn leave_operation(&mut self) {
        self.pop_type();
    }

    fn enter_condition(
        &mut self,
        arena: &'a Bump,
        type_condition: Option<&NamedType<'a>>,
    ) {
        let next = match type_condition {
            Some(condition) => Some(&*arena.alloc(TypeRef::Type(condition.name))),
            None => self.current_type(),
        };
        self.type_stack.push(next);
    }

    fn leave_condition(&mut self) {
        self.pop_type();
    }

    fn enter_selection_set(&mut self, schema: &'a Schema<'a>) {
        let named = self
            .current_type()
            .and_then(|of_type| of_type.named_type(schema));
        self.parent_type_stack.push(named);
    }

    fn leave_selection_set(&mut self) {
        self.pop_parent_type();
    }

    fn enter_field(&mut self, arena: &'a Bump, field: &'a Field<'a>) {
        let field_def = match self.parent_type() {
            Some(parent) if field.name == "__typename" && parent.is_composite() => {
                Some(typename_meta_field(arena))
            }
            Some(parent) => parent.get_field(field.name),
            None => None,
        };
        self.field_def_stack.push(field_def);
        self.type_stack.push(field_def.map(|def| def.output_type));
    }

    fn leave_field(&mut self) {
        self.pop_type();
        self.pop_field_def();
    }

    fn enter_directive(&mut self, schema: &'a Schema<'a>, directive: &'a Directive<'a>) {
        self.directive = schema.get_directive(directive.name);
    }

    fn leave_directive(&mut self) {
        self.directive = None;
    }

    fn enter_argument(&mut self, argument: &'a Argument<'a>) {
        let argument_def = if let Some(directive) = self.directive {
            directive.get_argument(argument.name)
        } else if let Some(field_def) = self.field_def() {
            field_def.get_argument(argument.name)
        } else {
            None
        };
        self.argument = argument_def;
        self.input_type_stack
            .push(argument_def.map(|def| def.input_type));
    }

    fn leave_argument(&mut self) {
        self.argument = None;
        self.pop_input_type();
    }

    fn enter_variable_definition(&mut self, arena: &'a Bump, var_def: &'a VariableDefinition<'a>) {
        self.input_type_stack
            .push(Some(TypeRef::from_ast(arena, &var_def.of_type)));
    }

    fn leave_variable_definition(&mut self) {
        self.pop_input_type();
    }

    fn enter_list_value(&mut self) {
        let item_type = self.input_type().and_then(TypeRef::list_item_type);
        self.input_type_stack.push(item_type);
    }

    fn leave_list_value(&mut self) {
        self.pop_input_type();
    }

    fn enter_object_field(&mut self, schema: &'a Schema<'a>, object_field: &'a ObjectField<'a>) {
        let field_type = self
            .input_type()
            .and_then(|input_type| input_type.nullable().named_type(schema))
            .and_then(|named| named.input_object())
            .and_then(|input_object| input_object.get_field(object_field.name))
            .map(|field| field.input_type);
        self.input_type_stack.push(field_type);
    }

    fn leave_object_field(&mut self) {
        self.pop_input_type();
    }
}

/// The `__typename` meta field, served on every composite type.
fn typename_meta_field(arena: &Bump) -> &SchemaField {
    let output_type = arena.alloc(TypeRef::NonNullType(arena.alloc(TypeRef::Type("String"))));
    arena.alloc(SchemaField {
        name: "__typename",
        arguments: HashMap::new_in(BumpWrapper(arena)),
        output_type,
    })
}

/// A context that exposes a schema, an arena, and a [`TypeInfo`] to a [`TypeInfoVisitor`].
///
/// The `ValidationContext` implements this; so does the internal context used to collect
/// variable usages.
pub trait WithTypeInfo<'a> {
    fn schema(&self) -> &'a Schema<'a>;
    fn arena(&self) -> &'a Bump;
    fn type_info(&mut self) -> &mut TypeInfo<'a>;
}

/// Wraps another visitor and keeps the context's [`TypeInfo`] in sync with the traversal.
///
/// On enter the type information is pushed before the inner visitor's hook runs; on leave it
/// is popped after the inner hook ran, so both hooks observe the node's own type context.
/// When the inner visitor skips a subtree the pushed state is rolled back immediately,
/// because no matching leave hook will fire.
pub struct TypeInfoVisitor<V> {
    pub visitor: V,
}

impl<V> TypeInfoVisitor<V> {
    #[inline]
    pub fn new(visitor: V) -> Self {
        TypeInfoVisitor { visitor }
    }
}

macro_rules! wrap_hooks {
    ($(($enter:ident, $leave:ident, $node:ty, $push:expr, $pop:expr)),+ $(,)?) => {
        $(
            fn $enter(&mut self, ctx: &mut C, node: &'a $node, info: &VisitInfo<'a>) -> VisitFlow {
                let push: fn(&mut C, &'a $node) = $push;
                push(ctx, node);
                let flow = self.visitor.$enter(ctx, node, info);
                if flow == VisitFlow::Skip {
                    let pop: fn(&mut C) = $pop;
                    pop(ctx);
                }
                flow
            }

            fn $leave(&mut self, ctx: &mut C, node: &'a $node, info: &VisitInfo<'a>) -> VisitFlow {
                let flow = self.visitor.$leave(ctx, node, info);
                let pop: fn(&mut C) = $pop;
                pop(ctx);
                flow
            }
        )+
    };
}

impl<'a, C: WithTypeInfo<'a>, V: Visitor<'a, C>> Visitor<'a, C> for TypeInfoVisitor<V> {
    wrap_hooks!(
        (
            enter_operation,
            leave_operation,
            OperationDefinition<'a>,
            |ctx, node| {
                let (schema, arena) = (ctx.schema(), ctx.arena());
                ctx.type_info().enter_operation(schema, arena, node)
            },
            |ctx| ctx.type_info().leave_operation()
        ),
        (
            enter_fragment,
            leave_fragment,
            FragmentDefinition<'a>,
            |ctx, node| {
                let arena = ctx.arena();
                ctx.type_info().enter_condition(arena, Some(&node.type_condition))
            },
            |ctx| ctx.type_info().leave_condition()
        ),
        (
            enter_inline_fragment,
            leave_inline_fragment,
            InlineFragment<'a>,
            |ctx, node| {
                let arena = ctx.arena();
                ctx.type_info()
                    .enter_condition(arena, node.type_condition.as_ref())
            },
            |ctx| ctx.type_info().leave_condition()
        ),
        (
            enter_selection_set,
            leave_selection_set,
            SelectionSet<'a>,
            |ctx, _node| {
                let schema = ctx.schema();
                ctx.type_info().enter_selection_set(schema)
            },
            |ctx| ctx.type_info().leave_selection_set()
        ),
        (
            enter_field,
            leave_field,
            Field<'a>,
            |ctx, node| {
                let arena = ctx.arena();
                ctx.type_info().enter_field(arena, node)
            },
            |ctx| ctx.type_info().leave_field()
        ),
        (
            enter_directive,
            leave_directive,
            Directive<'a>,
            |ctx, node| {
                let schema = ctx.schema();
                ctx.type_info().enter_directive(schema, node)
            },
            |ctx| ctx.type_info().leave_directive()
        ),
        (
            enter_argument,
            leave_argument,
            Argument<'a>,
            |ctx, node| ctx.type_info().enter_argument(node),
            |ctx| ctx.type_info().leave_argument()
        ),
        (
            enter_variable_definition,
            leave_variable_definition,
            VariableDefinition<'a>,
            |ctx, node| {
                let arena = ctx.arena();
                ctx.type_info().enter_variable_definition(arena, node)
            },
            |ctx| ctx.type_info().leave_variable_definition()
        ),
        (
            enter_list_value,
            leave_list_value,
            ListValue<'a>,
            |ctx, _node| ctx.type_info().enter_list_value(),
            |ctx| ctx.type_info().leave_list_value()
        ),
        (
            enter_object_field,
            leave_object_field,
            ObjectField<'a>,
            |ctx, node| {
                let schema = ctx.schema();
                ctx.type_info().enter_object_field(schema, node)
            },
            |ctx| ctx.type_info().leave_object_field()
        ),
    );

    // The remaining node kinds carry no type information of their own

    fn enter_document(&mut self, ctx: &mut C, node: &'a Document<'a>, info: &VisitInfo<'a>) -> VisitFlow {
        self.visitor.enter_document(ctx, node, info)
    }
    fn leave_document(&mut self, ctx: &mut C, node: &'a Document<'a>, info: &VisitInfo<'a>) -> VisitFlow {
        self.visitor.leave_document(ctx, node, info)
    }
    fn enter_fragment_spread(
        &mut self,
        ctx: &mut C,
        node: &'a FragmentSpread<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.visitor.enter_fragment_spread(ctx, node, info)
    }
    fn leave_fragment_spread(
        &mut self,
        ctx: &mut C,
        node: &'a FragmentSpread<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.visitor.leave_fragment_spread(ctx, node, info)
    }
    fn enter_object_value(
        &mut self,
        ctx: &mut C,
        node: &'a ObjectValue<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.visitor.enter_object_value(ctx, node, info)
    }
    fn leave_object_value(
        &mut self,
        ctx: &mut C,
        node: &'a ObjectValue<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.visitor.leave_object_value(ctx, node, info)
    }
    fn enter_variable(&mut self, ctx: &mut C, node: &'a Variable<'a>, info: &VisitInfo<'a>) -> VisitFlow {
        self.visitor.enter_variable(ctx, node, info)
    }
    fn leave_variable(&mut self, ctx: &mut C, node: &'a Variable<'a>, info: &VisitInfo<'a>) -> VisitFlow {
        self.visitor.leave_variable(ctx, node, info)
    }
    fn enter_named_type(
        &mut self,
        ctx: &mut C,
        node: &'a NamedType<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.visitor.enter_named_type(ctx, node, info)
    }
    fn leave_named_type(
        &mut self,
        ctx: &mut C,
        node: &'a NamedType<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.visitor.leave_named_type(ctx, node, info)
    }
}
