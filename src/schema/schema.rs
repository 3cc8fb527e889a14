use crate::ast::{ASTContext, DefaultIn, OperationKind, Type, Value};
use bumpalo::collections::Vec;
use bumpalo::Bump;
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::BumpWrapper;
use hashbrown::{HashMap, HashSet};
use std::fmt;

/// Schema Definition
///
/// A schema is created from root types for each kind of operation and is then used against
/// AST documents for validation. In this library the schema is never executable and serves
/// only for metadata and type information. It is hence a "Client Schema".
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Debug, Clone, PartialEq)]
pub struct Schema<'a> {
    pub(crate) query_type: Option<&'a SchemaObject<'a>>,
    pub(crate) mutation_type: Option<&'a SchemaObject<'a>>,
    pub(crate) subscription_type: Option<&'a SchemaObject<'a>>,
    pub(crate) types: HashMap<&'a str, &'a SchemaType<'a>, DefaultHashBuilder, BumpWrapper<'a>>,
    pub(crate) directives: HashMap<&'a str, &'a SchemaDirective<'a>, DefaultHashBuilder, BumpWrapper<'a>>,
}

impl<'a> DefaultIn<'a> for Schema<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Schema {
            query_type: None,
            mutation_type: None,
            subscription_type: None,
            types: HashMap::new_in(BumpWrapper(arena)),
            directives: HashMap::new_in(BumpWrapper(arena)),
        }
    }
}

impl<'a> Schema<'a> {
    /// Returns whether the schema is a default, empty schema
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.query_type.is_none()
            && self.mutation_type.is_none()
            && self.subscription_type.is_none()
    }

    /// Returns the root object type for query operations
    #[inline]
    pub fn query_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.query_type
    }

    /// Returns the root object type for mutation operations
    #[inline]
    pub fn mutation_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.mutation_type
    }

    /// Returns the root object type for subscription operations
    #[inline]
    pub fn subscription_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.subscription_type
    }

    /// Returns the appropriate object type depending on the passed operation kind
    #[inline]
    pub fn get_root_type(&self, operation_kind: OperationKind) -> Option<&'a SchemaObject<'a>> {
        match operation_kind {
            OperationKind::Query => self.query_type,
            OperationKind::Mutation => self.mutation_type,
            OperationKind::Subscription => self.subscription_type,
        }
    }

    /// Retrieves a kind by name from known schema types.
    #[inline]
    pub fn get_type(&self, name: &str) -> Option<&'a SchemaType<'a>> {
        self.types.get(name).copied()
    }

    /// Retrieves a directive definition by name.
    #[inline]
    pub fn get_directive(&self, name: &str) -> Option<&'a SchemaDirective<'a>> {
        self.directives.get(name).copied()
    }

    /// Adds a type definition to the known schema types.
    pub fn add_type(&mut self, ctx: &'a ASTContext, schema_type: SchemaType<'a>) {
        self.types.insert(schema_type.name(), ctx.alloc(schema_type));
    }

    /// Sets the root object type for query operations.
    pub fn set_query_type(&mut self, object: &'a SchemaObject<'a>) {
        self.query_type = Some(object);
    }

    /// Sets the root object type for mutation operations.
    pub fn set_mutation_type(&mut self, object: &'a SchemaObject<'a>) {
        self.mutation_type = Some(object);
    }

    /// Sets the root object type for subscription operations.
    pub fn set_subscription_type(&mut self, object: &'a SchemaObject<'a>) {
        self.subscription_type = Some(object);
    }

    /// Adds a directive definition to the schema.
    pub fn add_directive(&mut self, ctx: &'a ASTContext, directive: SchemaDirective<'a>) {
        self.directives.insert(directive.name, ctx.alloc(directive));
    }

    /// Checks whether a given type is a sub type of another.
    ///
    /// This is typically used for return types of fields. A return type may be any given sub type
    /// of the return type of said field.
    pub fn is_sub_type(&self, abstract_type: SchemaType<'a>, sub_type: SchemaType<'a>) -> bool {
        match abstract_type {
            SchemaType::Union(schema_union) => schema_union.is_sub_type(sub_type),
            SchemaType::Interface(schema_interface) => schema_interface.is_sub_type(sub_type),
            SchemaType::Object(schema_object) => {
                if let SchemaType::Object(sub_object_type) = sub_type {
                    sub_object_type == schema_object
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Checks whether one wrapped type reference is a sub type of another.
    ///
    /// A variable of a given type may be used where a sub type of that type is expected: non-null
    /// types are sub types of their nullable counterparts and list item types vary accordingly.
    pub fn is_ref_sub_type(&self, maybe_sub_type: &TypeRef<'a>, super_type: &TypeRef<'a>) -> bool {
        if maybe_sub_type == super_type {
            return true;
        }
        match (maybe_sub_type, super_type) {
            (TypeRef::NonNullType(sub), TypeRef::NonNullType(sup)) => self.is_ref_sub_type(sub, sup),
            (TypeRef::NonNullType(sub), _) => self.is_ref_sub_type(sub, super_type),
            (_, TypeRef::NonNullType(_)) => false,
            (TypeRef::ListType(sub), TypeRef::ListType(sup)) => self.is_ref_sub_type(sub, sup),
            (TypeRef::ListType(_), _) | (_, TypeRef::ListType(_)) => false,
            (TypeRef::Type(sub_name), TypeRef::Type(super_name)) => {
                match (self.get_type(sub_name), self.get_type(super_name)) {
                    (Some(sub), Some(sup)) => self.is_sub_type(*sup, *sub),
                    _ => false,
                }
            }
        }
    }

    /// Checks whether two named types can ever refer to an overlapping set of runtime objects.
    ///
    /// Two concrete objects overlap only when they're identical; an object overlaps an abstract
    /// type when it's one of its possible types; two abstract types overlap when their
    /// possible-type sets intersect by name.
    pub fn types_overlap(&self, t1: SchemaType<'a>, t2: SchemaType<'a>) -> bool {
        if t1.name() == t2.name() {
            return true;
        }
        match (t1.possible_type_names(), t2.possible_type_names()) {
            (None, None) => false,
            (None, Some(possible)) => possible.iter().any(|name| *name == t1.name()),
            (Some(possible), None) => possible.iter().any(|name| *name == t2.name()),
            (Some(possible1), Some(possible2)) => possible1
                .iter()
                .any(|name| possible2.iter().any(|other| other == name)),
        }
    }
}

/// Generic trait for any schema type that implements fields
pub trait SchemaFields<'a>: Sized {
    /// Add a new [SchemaField] to the list of fields
    fn add_field(&mut self, ctx: &'a ASTContext, field: SchemaField<'a>);

    /// Get a known field by name
    fn get_field(&self, name: &str) -> Option<&'a SchemaField<'a>>;
}

/// Generic trait for any schema type that implements interfaces
pub trait SchemaInterfaces<'a>: Sized {
    /// Add a new [SchemaInterface] to the list of implemented interfaces
    fn add_interface(&mut self, ctx: &'a ASTContext, interface: &'a str);

    /// Get list of implemented [SchemaInterface]s
    fn get_interfaces(&self) -> &Vec<'a, &'a str>;

    /// Checks whether the given [SchemaInterface] is implemented
    #[inline]
    fn implements_interface(&self, schema_interface: &SchemaInterface<'a>) -> bool {
        self.get_interfaces()
            .iter()
            .any(|interface| *interface == schema_interface.name)
    }
}

/// Generic trait for any schema type that keeps a list of possible concrete types
pub trait SchemaPossibleTypes<'a>: Sized {
    /// Add a new [SchemaObject] to the list of possible types
    fn add_possible_type(&mut self, ctx: &'a ASTContext, object: &'a str);

    /// Get list of possible [SchemaObject] types
    fn get_possible_types(&self) -> &Vec<'a, &'a str>;

    /// Checks whether the given [SchemaObject] is a possible type
    #[inline]
    fn is_possible_type(&self, schema_object: &SchemaObject<'a>) -> bool {
        self.get_possible_types()
            .iter()
            .any(|possible_type| *possible_type == schema_object.name)
    }
}

/// Generic trait for any schema type that may be a super type of other types
pub trait SchemaSuperType<'a>: Sized {
    /// Checks whether a given type is a sub type of the current super type.
    fn is_sub_type(&self, sub_type: SchemaType<'a>) -> bool;
}

/// An Object type definition.
///
/// Most types in GraphQL are objects and define a set of fields and the interfaces they implement.
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaObject<'a> {
    pub name: &'a str,
    pub(crate) fields: HashMap<&'a str, &'a SchemaField<'a>, DefaultHashBuilder, BumpWrapper<'a>>,
    pub(crate) interfaces: Vec<'a, &'a str>,
}

impl<'a> SchemaObject<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaObject {
            name,
            fields: HashMap::new_in(BumpWrapper(&ctx.arena)),
            interfaces: Vec::new_in(&ctx.arena),
        }
    }
}

impl<'a> SchemaFields<'a> for SchemaObject<'a> {
    fn add_field(&mut self, ctx: &'a ASTContext, field: SchemaField<'a>) {
        self.fields.insert(field.name, ctx.alloc(field));
    }

    #[inline]
    fn get_field(&self, name: &str) -> Option<&'a SchemaField<'a>> {
        self.fields.get(name).copied()
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaObject<'a> {
    fn add_interface(&mut self, _ctx: &'a ASTContext, interface: &'a str) {
        self.interfaces.push(interface);
    }

    #[inline]
    fn get_interfaces(&self) -> &Vec<'a, &'a str> {
        &self.interfaces
    }
}

/// An Interface type definition.
///
/// Any object or other interfaces may implement one or more interfaces and must then adhere to the
/// definition of this interface. A field that returns an interface as its return type may return
/// any object that implements this interface.
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaInterface<'a> {
    pub name: &'a str,
    pub(crate) fields: HashMap<&'a str, &'a SchemaField<'a>, DefaultHashBuilder, BumpWrapper<'a>>,
    pub(crate) interfaces: Vec<'a, &'a str>,
    pub(crate) possible_types: Vec<'a, &'a str>,
}

impl<'a> SchemaInterface<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaInterface {
            name,
            fields: HashMap::new_in(BumpWrapper(&ctx.arena)),
            interfaces: Vec::new_in(&ctx.arena),
            possible_types: Vec::new_in(&ctx.arena),
        }
    }
}

impl<'a> SchemaFields<'a> for SchemaInterface<'a> {
    fn add_field(&mut self, ctx: &'a ASTContext, field: SchemaField<'a>) {
        self.fields.insert(field.name, ctx.alloc(field));
    }

    #[inline]
    fn get_field(&self, name: &str) -> Option<&'a SchemaField<'a>> {
        self.fields.get(name).copied()
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaInterface<'a> {
    fn add_interface(&mut self, _ctx: &'a ASTContext, interface: &'a str) {
        self.interfaces.push(interface);
    }

    #[inline]
    fn get_interfaces(&self) -> &Vec<'a, &'a str> {
        &self.interfaces
    }
}

impl<'a> SchemaPossibleTypes<'a> for SchemaInterface<'a> {
    fn add_possible_type(&mut self, _ctx: &'a ASTContext, object: &'a str) {
        self.possible_types.push(object);
    }

    #[inline]
    fn get_possible_types(&self) -> &Vec<'a, &'a str> {
        &self.possible_types
    }
}

impl<'a> SchemaSuperType<'a> for SchemaInterface<'a> {
    #[inline]
    fn is_sub_type(&self, sub_type: SchemaType<'a>) -> bool {
        match sub_type {
            SchemaType::Object(schema_object) => schema_object.implements_interface(self),
            SchemaType::Interface(schema_interface) => schema_interface.implements_interface(self),
            _ => false,
        }
    }
}

/// An object Field type definition.
///
/// A field is like a function that given its arguments as input values produces an output value.
/// [Reference](https://spec.graphql.org/October2021/#FieldsDefinition)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField<'a> {
    pub name: &'a str,
    pub arguments: HashMap<&'a str, SchemaInputField<'a>, DefaultHashBuilder, BumpWrapper<'a>>,
    pub output_type: &'a TypeRef<'a>,
}

impl<'a> SchemaField<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str, output_type: &'a TypeRef<'a>) -> Self {
        SchemaField {
            name,
            arguments: HashMap::new_in(BumpWrapper(&ctx.arena)),
            output_type,
        }
    }

    /// The `__typename` meta field, which the schema serves on every composite type.
    pub fn typename_meta(ctx: &'a ASTContext) -> Self {
        let output_type = ctx.alloc(TypeRef::NonNullType(ctx.alloc(TypeRef::Type("String"))));
        SchemaField::new(ctx, "__typename", output_type)
    }

    pub fn add_argument(&mut self, _ctx: &'a ASTContext, arg: SchemaInputField<'a>) {
        self.arguments.insert(arg.name, arg);
    }

    #[inline]
    pub fn get_argument(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.arguments.get(name)
    }
}

/// A Union type definition.
///
/// A union contains a list of possible types that can be returned in its stead when it's defined
/// as an output type.
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaUnion<'a> {
    pub name: &'a str,
    pub(crate) possible_types: Vec<'a, &'a str>,
}

impl<'a> SchemaUnion<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaUnion {
            name,
            possible_types: Vec::new_in(&ctx.arena),
        }
    }
}

impl<'a> SchemaPossibleTypes<'a> for SchemaUnion<'a> {
    fn add_possible_type(&mut self, _ctx: &'a ASTContext, object: &'a str) {
        self.possible_types.push(object);
    }

    #[inline]
    fn get_possible_types(&self) -> &Vec<'a, &'a str> {
        &self.possible_types
    }
}

impl<'a> SchemaSuperType<'a> for SchemaUnion<'a> {
    #[inline]
    fn is_sub_type(&self, sub_type: SchemaType<'a>) -> bool {
        if let SchemaType::Object(schema_object) = sub_type {
            self.is_possible_type(schema_object)
        } else {
            false
        }
    }
}

/// A Scalar type definition.
///
/// Scalars represent primitive leaf values in GraphQL that are represented with a specific
/// serializer and deserializer, which makes the values returnable to a GraphQL client or readable
/// by a GraphQL API.
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaScalar<'a> {
    pub name: &'a str,
}

impl<'a> SchemaScalar<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaScalar { name }
    }

    /// Whether the given AST literal parses as a value of this scalar.
    ///
    /// The five built-in scalars follow the coercion rules of the GraphQL specification.
    /// Custom scalars carry no literal-parsing information on a client schema and admit
    /// any literal.
    pub fn is_valid_literal(&self, value: &Value) -> bool {
        match self.name {
            "Int" => match value {
                Value::Int(int) => int.value.parse::<i32>().is_ok(),
                _ => false,
            },
            "Float" => match value {
                Value::Int(int) => int.value.parse::<f64>().is_ok(),
                Value::Float(float) => float.value.parse::<f64>().is_ok(),
                _ => false,
            },
            "String" => matches!(value, Value::String(_)),
            "Boolean" => matches!(value, Value::Boolean(_)),
            "ID" => matches!(value, Value::String(_) | Value::Int(_)),
            _ => !value.is_null(),
        }
    }
}

/// An Enum type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaEnum<'a> {
    pub name: &'a str,
    pub values: HashSet<&'a str, DefaultHashBuilder, BumpWrapper<'a>>,
}

impl<'a> SchemaEnum<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaEnum {
            name,
            values: HashSet::new_in(BumpWrapper(&ctx.arena)),
        }
    }

    pub fn add_value(&mut self, _ctx: &'a ASTContext, value: &'a str) {
        self.values.insert(value);
    }

    /// Whether the given AST literal is one of this enum's values, written as an enum literal.
    pub fn is_valid_literal(&self, value: &Value) -> bool {
        match value {
            Value::Enum(enum_value) => self.values.contains(enum_value.value),
            _ => false,
        }
    }
}

/// An Input Object type definition.
///
/// Inputs, such as arguments, may sometimes be nested and accept objects that must adhere to the
/// shape of an Input Object definition. This is often used to represent more complex inputs.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaInputObject<'a> {
    pub name: &'a str,
    pub fields: HashMap<&'a str, SchemaInputField<'a>, DefaultHashBuilder, BumpWrapper<'a>>,
}

impl<'a> SchemaInputObject<'a> {
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        SchemaInputObject {
            name,
            fields: HashMap::new_in(BumpWrapper(&ctx.arena)),
        }
    }

    pub fn add_field(&mut self, _ctx: &'a ASTContext, field: SchemaInputField<'a>) {
        self.fields.insert(field.name, field);
    }

    #[inline]
    pub fn get_field(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.fields.get(name)
    }
}

/// An input field or argument definition carrying a name and an input type.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SchemaInputField<'a> {
    pub name: &'a str,
    pub input_type: &'a TypeRef<'a>,
}

impl<'a> SchemaInputField<'a> {
    #[inline]
    pub fn new(name: &'a str, input_type: &'a TypeRef<'a>) -> Self {
        SchemaInputField { name, input_type }
    }
}

/// A Directive definition.
///
/// Directives annotate parts of a document to alter how a GraphQL API handles them. A directive
/// definition names the arguments a directive accepts and the positions it may appear in.
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDirective<'a> {
    pub name: &'a str,
    pub arguments: HashMap<&'a str, SchemaInputField<'a>, DefaultHashBuilder, BumpWrapper<'a>>,
    pub on_operation: bool,
    pub on_field: bool,
    pub on_fragment: bool,
}

impl<'a> SchemaDirective<'a> {
    #[inline]
    pub fn new(
        ctx: &'a ASTContext,
        name: &'a str,
        on_operation: bool,
        on_field: bool,
        on_fragment: bool,
    ) -> Self {
        SchemaDirective {
            name,
            arguments: HashMap::new_in(BumpWrapper(&ctx.arena)),
            on_operation,
            on_field,
            on_fragment,
        }
    }

    /// The built-in `@include` directive.
    pub fn include(ctx: &'a ASTContext) -> Self {
        let mut directive = SchemaDirective::new(ctx, "include", false, true, true);
        directive.add_argument(ctx, SchemaInputField::new("if", boolean_non_null(ctx)));
        directive
    }

    /// The built-in `@skip` directive.
    pub fn skip(ctx: &'a ASTContext) -> Self {
        let mut directive = SchemaDirective::new(ctx, "skip", false, true, true);
        directive.add_argument(ctx, SchemaInputField::new("if", boolean_non_null(ctx)));
        directive
    }

    pub fn add_argument(&mut self, _ctx: &'a ASTContext, arg: SchemaInputField<'a>) {
        self.arguments.insert(arg.name, arg);
    }

    #[inline]
    pub fn get_argument(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.arguments.get(name)
    }
}

fn boolean_non_null<'a>(ctx: &'a ASTContext) -> &'a TypeRef<'a> {
    ctx.alloc(TypeRef::NonNullType(ctx.alloc(TypeRef::Type("Boolean"))))
}

/// A named type enum that represents all possible GraphQL definition types.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Types)
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SchemaType<'a> {
    InputObject(&'a SchemaInputObject<'a>),
    Object(&'a SchemaObject<'a>),
    Union(&'a SchemaUnion<'a>),
    Interface(&'a SchemaInterface<'a>),
    Scalar(&'a SchemaScalar<'a>),
    Enum(&'a SchemaEnum<'a>),
}

impl<'a> SchemaType<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            SchemaType::InputObject(x) => x.name,
            SchemaType::Object(x) => x.name,
            SchemaType::Union(x) => x.name,
            SchemaType::Interface(x) => x.name,
            SchemaType::Scalar(x) => x.name,
            SchemaType::Enum(x) => x.name,
        }
    }

    /// Whether selection sets may be applied to this type, which applies to objects,
    /// interfaces, and unions.
    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            SchemaType::Object(_) | SchemaType::Interface(_) | SchemaType::Union(_)
        )
    }

    /// Whether this type represents a response leaf that must not carry a sub selection.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, SchemaType::Scalar(_) | SchemaType::Enum(_))
    }

    /// Whether this type may appear in input positions, such as variable and argument types.
    #[inline]
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            SchemaType::Scalar(_) | SchemaType::Enum(_) | SchemaType::InputObject(_)
        )
    }

    /// Whether this type is abstract and resolves to one of a set of concrete object types.
    #[inline]
    pub fn is_abstract(&self) -> bool {
        matches!(self, SchemaType::Interface(_) | SchemaType::Union(_))
    }

    /// The names of the concrete types an abstract type can resolve to.
    #[inline]
    pub fn possible_type_names(&self) -> Option<&Vec<'a, &'a str>> {
        match self {
            SchemaType::Interface(x) => Some(x.get_possible_types()),
            SchemaType::Union(x) => Some(x.get_possible_types()),
            _ => None,
        }
    }

    /// Looks up a field definition when this type is an object or interface.
    #[inline]
    pub fn get_field(&self, name: &str) -> Option<&'a SchemaField<'a>> {
        match self {
            SchemaType::Object(x) => x.get_field(name),
            SchemaType::Interface(x) => x.get_field(name),
            _ => None,
        }
    }

    pub fn object(&self) -> Option<&'a SchemaObject<'a>> {
        match self {
            SchemaType::Object(x) => Some(x),
            _ => None,
        }
    }

    pub fn input_object(&self) -> Option<&'a SchemaInputObject<'a>> {
        match self {
            SchemaType::InputObject(x) => Some(x),
            _ => None,
        }
    }

    pub fn interface(&self) -> Option<&'a SchemaInterface<'a>> {
        match self {
            SchemaType::Interface(x) => Some(x),
            _ => None,
        }
    }

    pub fn union_type(&self) -> Option<&'a SchemaUnion<'a>> {
        match self {
            SchemaType::Union(x) => Some(x),
            _ => None,
        }
    }
}

impl<'a> From<&'a SchemaObject<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_object: &'a SchemaObject<'a>) -> Self {
        SchemaType::Object(schema_object)
    }
}

impl<'a> From<&'a SchemaUnion<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_union: &'a SchemaUnion<'a>) -> Self {
        SchemaType::Union(schema_union)
    }
}

impl<'a> From<&'a SchemaInterface<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_interface: &'a SchemaInterface<'a>) -> Self {
        SchemaType::Interface(schema_interface)
    }
}

/// A reference to a schema type, optionally wrapped in list and non-null wrapper types.
///
/// A `TypeRef` mirrors the shape of an AST [Type] but leaves its named leaf unresolved, so
/// type references can exist for types a schema doesn't define. Resolution happens through
/// [`TypeRef::named_type`].
#[derive(Clone, Copy)]
pub enum TypeRef<'a> {
    Type(&'a str),
    ListType(&'a TypeRef<'a>),
    NonNullType(&'a TypeRef<'a>),
}

impl<'a> TypeRef<'a> {
    /// Converts an AST type annotation into an arena-allocated type reference.
    pub fn from_ast(arena: &'a Bump, of_type: &Type<'a>) -> &'a TypeRef<'a> {
        match of_type {
            Type::NamedType(named) => arena.alloc(TypeRef::Type(named.name)),
            Type::ListType(inner) => {
                let inner = TypeRef::from_ast(arena, inner);
                arena.alloc(TypeRef::ListType(inner))
            }
            Type::NonNullType(inner) => {
                let inner = TypeRef::from_ast(arena, inner);
                arena.alloc(TypeRef::NonNullType(inner))
            }
        }
    }

    /// The name of the named type underneath all wrappers.
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            TypeRef::Type(name) => name,
            TypeRef::ListType(of_type) => of_type.name(),
            TypeRef::NonNullType(of_type) => of_type.name(),
        }
    }

    /// Resolves the named type underneath all wrappers against a schema.
    #[inline]
    pub fn named_type(&self, schema: &Schema<'a>) -> Option<SchemaType<'a>> {
        schema.get_type(self.name()).copied()
    }

    /// Strips a non-null wrapper, if present.
    #[inline]
    pub fn nullable(&'a self) -> &'a TypeRef<'a> {
        match self {
            TypeRef::NonNullType(of_type) => of_type,
            _ => self,
        }
    }

    #[inline]
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNullType(_))
    }

    /// The item type when this reference is a list, looking through a non-null wrapper.
    #[inline]
    pub fn list_item_type(&'a self) -> Option<&'a TypeRef<'a>> {
        match self.nullable() {
            TypeRef::ListType(of_type) => Some(of_type),
            _ => None,
        }
    }
}

impl<'a> fmt::Display for TypeRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Type(name) => f.write_str(name),
            TypeRef::ListType(of_type) => write!(f, "[{}]", of_type),
            TypeRef::NonNullType(of_type) => write!(f, "{}!", of_type),
        }
    }
}

/// This implementation is necessary to circuit break circular types.
/// Without this impl, `Debug` would print on and on, overflowing the stack as it's bouncing
/// between types over and over.
impl<'a> fmt::Debug for TypeRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(arg0) => f.debug_tuple("Type").field(&arg0).finish(),
            Self::ListType(arg0) => f.debug_tuple("ListType").field(arg0).finish(),
            Self::NonNullType(arg0) => f.debug_tuple("NonNullType").field(arg0).finish(),
        }
    }
}

/// This implementation is necessary to circuit break circular types.
/// Without this impl, `PartialEq` would never stop comparing types referencing each other.
/// We achieve this by only ever comparing type names, which is all we need for comparing
/// references.
impl<'a> PartialEq for TypeRef<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Type(left), Self::Type(right)) => left == right,
            (Self::ListType(left), Self::ListType(right)) => left == right,
            (Self::NonNullType(left), Self::NonNullType(right)) => left == right,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ParseNode;

    fn pet_types<'a>(ctx: &'a ASTContext) -> Schema<'a> {
        let mut schema = Schema::default_in(&ctx.arena);
        schema.add_type(ctx, SchemaType::Scalar(ctx.alloc(SchemaScalar::new("String"))));

        let string_ref = ctx.alloc(TypeRef::Type("String"));

        let mut pet = SchemaInterface::new(ctx, "Pet");
        pet.add_field(ctx, SchemaField::new(ctx, "name", string_ref));
        pet.add_possible_type(ctx, "Dog");
        pet.add_possible_type(ctx, "Cat");
        let pet = &*ctx.alloc(pet);

        let mut dog = SchemaObject::new(ctx, "Dog");
        dog.add_field(ctx, SchemaField::new(ctx, "name", string_ref));
        dog.add_interface(ctx, "Pet");
        let dog = &*ctx.alloc(dog);

        let mut cat = SchemaObject::new(ctx, "Cat");
        cat.add_field(ctx, SchemaField::new(ctx, "name", string_ref));
        cat.add_interface(ctx, "Pet");
        let cat = &*ctx.alloc(cat);

        let mut cat_or_dog = SchemaUnion::new(ctx, "CatOrDog");
        cat_or_dog.add_possible_type(ctx, "Cat");
        cat_or_dog.add_possible_type(ctx, "Dog");
        let cat_or_dog = &*ctx.alloc(cat_or_dog);

        schema.add_type(ctx, SchemaType::Interface(pet));
        schema.add_type(ctx, SchemaType::Object(dog));
        schema.add_type(ctx, SchemaType::Object(cat));
        schema.add_type(ctx, SchemaType::Union(cat_or_dog));
        schema
    }

    #[test]
    fn sub_types() {
        let ctx = ASTContext::new();
        let schema = pet_types(&ctx);
        let pet = *schema.get_type("Pet").unwrap();
        let dog = *schema.get_type("Dog").unwrap();
        let cat_or_dog = *schema.get_type("CatOrDog").unwrap();
        assert!(schema.is_sub_type(pet, dog));
        assert!(schema.is_sub_type(cat_or_dog, dog));
        assert!(!schema.is_sub_type(dog, pet));
    }

    #[test]
    fn type_overlap() {
        let ctx = ASTContext::new();
        let schema = pet_types(&ctx);
        let pet = *schema.get_type("Pet").unwrap();
        let dog = *schema.get_type("Dog").unwrap();
        let cat = *schema.get_type("Cat").unwrap();
        let cat_or_dog = *schema.get_type("CatOrDog").unwrap();
        assert!(schema.types_overlap(dog, dog));
        assert!(!schema.types_overlap(dog, cat));
        assert!(schema.types_overlap(dog, pet));
        assert!(schema.types_overlap(pet, cat_or_dog));
    }

    #[test]
    fn ref_sub_types() {
        let ctx = ASTContext::new();
        let schema = pet_types(&ctx);
        let string_ref = TypeRef::Type("String");
        let non_null_string = TypeRef::NonNullType(&string_ref);
        assert!(schema.is_ref_sub_type(&non_null_string, &string_ref));
        assert!(!schema.is_ref_sub_type(&string_ref, &non_null_string));
        assert!(schema.is_ref_sub_type(&string_ref, &string_ref));

        let list = TypeRef::ListType(&string_ref);
        assert!(!schema.is_ref_sub_type(&list, &string_ref));
        assert!(!schema.is_ref_sub_type(&string_ref, &list));

        let dog_ref = TypeRef::Type("Dog");
        let pet_ref = TypeRef::Type("Pet");
        assert!(schema.is_ref_sub_type(&dog_ref, &pet_ref));
        assert!(!schema.is_ref_sub_type(&pet_ref, &dog_ref));
    }

    #[test]
    fn type_ref_display() {
        let int_ref = TypeRef::Type("Int");
        let non_null = TypeRef::NonNullType(&int_ref);
        let list = TypeRef::ListType(&non_null);
        let non_null_list = TypeRef::NonNullType(&list);
        assert_eq!(non_null_list.to_string(), "[Int!]!");
    }

    #[test]
    fn type_ref_from_ast() {
        let ctx = ASTContext::new();
        let ast = crate::ast::Document::parse(&ctx, "query ($v: [Int!]!) { f }").unwrap();
        let operation = ast.definitions[0].operation().unwrap();
        let of_type = &operation.variable_definitions.children[0].of_type;
        let type_ref = TypeRef::from_ast(&ctx.arena, of_type);
        assert_eq!(type_ref.to_string(), "[Int!]!");
        assert_eq!(type_ref.name(), "Int");
    }

    #[test]
    fn scalar_literals() {
        let ctx = ASTContext::new();
        let ast = crate::ast::Document::parse(
            &ctx,
            r#"{ f(int: 3, big: 2147483648, float: 1.5, str: "x", bool: true) }"#,
        )
        .unwrap();
        let operation = ast.definitions[0].operation().unwrap();
        let field = match &operation.selection_set.selections[0] {
            crate::ast::Selection::Field(field) => field,
            _ => panic!("expected a field"),
        };
        let args = &field.arguments.children;

        let int = SchemaScalar::new("Int");
        assert!(int.is_valid_literal(&args[0].value));
        assert!(!int.is_valid_literal(&args[1].value));
        assert!(!int.is_valid_literal(&args[2].value));

        let float = SchemaScalar::new("Float");
        assert!(float.is_valid_literal(&args[0].value));
        assert!(float.is_valid_literal(&args[2].value));
        assert!(!float.is_valid_literal(&args[3].value));

        let string = SchemaScalar::new("String");
        assert!(string.is_valid_literal(&args[3].value));
        assert!(!string.is_valid_literal(&args[4].value));

        let id = SchemaScalar::new("ID");
        assert!(id.is_valid_literal(&args[0].value));
        assert!(id.is_valid_literal(&args[3].value));
        assert!(!id.is_valid_literal(&args[4].value));
    }
}
