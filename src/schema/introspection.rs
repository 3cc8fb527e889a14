use serde::Deserialize;

use super::schema::*;
use crate::ast::{ASTContext, DefaultIn};

/// The result of a full introspection query, as returned by a GraphQL API.
#[derive(Debug, Deserialize)]
pub struct IntrospectionQuery<'a> {
    #[serde(rename = "__schema", borrow)]
    pub schema: IntrospectionSchema<'a>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema<'a> {
    pub query_type: Option<IntrospectionNamedTypeRef<'a>>,
    pub mutation_type: Option<IntrospectionNamedTypeRef<'a>>,
    pub subscription_type: Option<IntrospectionNamedTypeRef<'a>>,
    #[serde(borrow)]
    pub types: Vec<IntrospectionType<'a>>,
    #[serde(borrow, default)]
    pub directives: Vec<IntrospectionDirective<'a>>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntrospectionType<'a> {
    #[serde(borrow)]
    Scalar(IntrospectionScalarType<'a>),
    Object(IntrospectionObjectType<'a>),
    Interface(IntrospectionInterfaceType<'a>),
    Union(IntrospectionUnionType<'a>),
    Enum(IntrospectionEnumType<'a>),
    InputObject(IntrospectionInputObjectType<'a>),
}

impl<'a> IntrospectionType<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            IntrospectionType::Scalar(x) => x.name,
            IntrospectionType::Object(x) => x.name,
            IntrospectionType::Interface(x) => x.name,
            IntrospectionType::Union(x) => x.name,
            IntrospectionType::Enum(x) => x.name,
            IntrospectionType::InputObject(x) => x.name,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionNamedTypeRef<'a> {
    pub kind: Option<&'a str>,
    #[serde(borrow)]
    pub name: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind")]
pub enum IntrospectionTypeRef<'a> {
    #[serde(rename = "LIST")]
    List {
        #[serde(rename = "ofType")]
        of_type: Box<IntrospectionTypeRef<'a>>,
    },
    #[serde(rename = "NON_NULL")]
    NonNull {
        #[serde(rename = "ofType")]
        of_type: Box<IntrospectionTypeRef<'a>>,
    },
    #[serde(rename = "SCALAR")]
    ScalarType {
        #[serde(borrow)]
        name: &'a str,
    },
    #[serde(rename = "OBJECT")]
    ObjectType {
        #[serde(borrow)]
        name: &'a str,
    },
    #[serde(rename = "INTERFACE")]
    InterfaceType {
        #[serde(borrow)]
        name: &'a str,
    },
    #[serde(rename = "UNION")]
    UnionType {
        #[serde(borrow)]
        name: &'a str,
    },
    #[serde(rename = "ENUM")]
    EnumType {
        #[serde(borrow)]
        name: &'a str,
    },
    #[serde(rename = "INPUT_OBJECT")]
    InputObjectType {
        #[serde(borrow)]
        name: &'a str,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionScalarType<'a> {
    #[serde(borrow)]
    pub name: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionObjectType<'a> {
    #[serde(borrow)]
    pub name: &'a str,
    pub fields: Vec<IntrospectionField<'a>>,
    #[serde(default)]
    pub interfaces: Option<Vec<IntrospectionNamedTypeRef<'a>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInterfaceType<'a> {
    #[serde(borrow)]
    pub name: &'a str,
    pub fields: Vec<IntrospectionField<'a>>,
    #[serde(default)]
    pub interfaces: Option<Vec<IntrospectionNamedTypeRef<'a>>>,
    #[serde(default)]
    pub possible_types: Vec<IntrospectionNamedTypeRef<'a>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionUnionType<'a> {
    #[serde(borrow)]
    pub name: &'a str,
    pub possible_types: Vec<IntrospectionNamedTypeRef<'a>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionEnumType<'a> {
    #[serde(borrow)]
    pub name: &'a str,
    pub enum_values: Vec<IntrospectionEnumValue<'a>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionEnumValue<'a> {
    #[serde(borrow)]
    pub name: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputObjectType<'a> {
    #[serde(borrow)]
    pub name: &'a str,
    pub input_fields: Vec<IntrospectionInputValue<'a>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionField<'a> {
    #[serde(borrow)]
    pub name: &'a str,
    pub args: Vec<IntrospectionInputValue<'a>>,
    #[serde(rename = "type")]
    pub of_type: IntrospectionTypeRef<'a>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputValue<'a> {
    #[serde(borrow)]
    pub name: &'a str,
    #[serde(rename = "type")]
    pub of_type: IntrospectionTypeRef<'a>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionDirective<'a> {
    #[serde(borrow)]
    pub name: &'a str,
    pub locations: Vec<IntrospectionDirectiveLocation>,
    pub args: Vec<IntrospectionInputValue<'a>>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntrospectionDirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

fn from_type_ref<'a>(ctx: &'a ASTContext, type_ref: &IntrospectionTypeRef) -> &'a TypeRef<'a> {
    let out = match type_ref {
        IntrospectionTypeRef::List { of_type } => TypeRef::ListType(from_type_ref(ctx, of_type)),
        IntrospectionTypeRef::NonNull { of_type } => {
            TypeRef::NonNullType(from_type_ref(ctx, of_type))
        }
        IntrospectionTypeRef::ScalarType { name }
        | IntrospectionTypeRef::ObjectType { name }
        | IntrospectionTypeRef::InterfaceType { name }
        | IntrospectionTypeRef::UnionType { name }
        | IntrospectionTypeRef::EnumType { name }
        | IntrospectionTypeRef::InputObjectType { name } => TypeRef::Type(ctx.alloc_str(name)),
    };
    ctx.alloc(out)
}

fn build_field<'a>(ctx: &'a ASTContext, field: &IntrospectionField) -> SchemaField<'a> {
    let mut schema_field =
        SchemaField::new(ctx, ctx.alloc_str(field.name), from_type_ref(ctx, &field.of_type));
    for arg in field.args.iter() {
        let input_field =
            SchemaInputField::new(ctx.alloc_str(arg.name), from_type_ref(ctx, &arg.of_type));
        schema_field.add_argument(ctx, input_field);
    }
    schema_field
}

fn build_type<'a>(ctx: &'a ASTContext, introspection_type: &IntrospectionType) -> SchemaType<'a> {
    match introspection_type {
        IntrospectionType::Scalar(scalar) => {
            SchemaType::Scalar(ctx.alloc(SchemaScalar::new(ctx.alloc_str(scalar.name))))
        }
        IntrospectionType::Object(object) => {
            let mut schema_object = SchemaObject::new(ctx, ctx.alloc_str(object.name));
            for field in object.fields.iter() {
                schema_object.add_field(ctx, build_field(ctx, field));
            }
            for interface in object.interfaces.iter().flatten() {
                schema_object.add_interface(ctx, ctx.alloc_str(interface.name));
            }
            SchemaType::Object(ctx.alloc(schema_object))
        }
        IntrospectionType::Interface(interface) => {
            let mut schema_interface = SchemaInterface::new(ctx, ctx.alloc_str(interface.name));
            for field in interface.fields.iter() {
                schema_interface.add_field(ctx, build_field(ctx, field));
            }
            for implemented in interface.interfaces.iter().flatten() {
                schema_interface.add_interface(ctx, ctx.alloc_str(implemented.name));
            }
            for possible in interface.possible_types.iter() {
                schema_interface.add_possible_type(ctx, ctx.alloc_str(possible.name));
            }
            SchemaType::Interface(ctx.alloc(schema_interface))
        }
        IntrospectionType::Union(union_type) => {
            let mut schema_union = SchemaUnion::new(ctx, ctx.alloc_str(union_type.name));
            for possible in union_type.possible_types.iter() {
                schema_union.add_possible_type(ctx, ctx.alloc_str(possible.name));
            }
            SchemaType::Union(ctx.alloc(schema_union))
        }
        IntrospectionType::Enum(enum_type) => {
            let mut schema_enum = SchemaEnum::new(ctx, ctx.alloc_str(enum_type.name));
            for value in enum_type.enum_values.iter() {
                schema_enum.add_value(ctx, ctx.alloc_str(value.name));
            }
            SchemaType::Enum(ctx.alloc(schema_enum))
        }
        IntrospectionType::InputObject(input_object) => {
            let mut schema_input = SchemaInputObject::new(ctx, ctx.alloc_str(input_object.name));
            for field in input_object.input_fields.iter() {
                let input_field =
                    SchemaInputField::new(ctx.alloc_str(field.name), from_type_ref(ctx, &field.of_type));
                schema_input.add_field(ctx, input_field);
            }
            SchemaType::InputObject(ctx.alloc(schema_input))
        }
    }
}

fn build_directive<'a>(
    ctx: &'a ASTContext,
    directive: &IntrospectionDirective,
) -> SchemaDirective<'a> {
    use IntrospectionDirectiveLocation::*;
    let on_operation = directive
        .locations
        .iter()
        .any(|location| matches!(location, Query | Mutation | Subscription));
    let on_field = directive.locations.contains(&Field);
    let on_fragment = directive
        .locations
        .iter()
        .any(|location| matches!(location, FragmentDefinition | FragmentSpread | InlineFragment));
    let mut schema_directive = SchemaDirective::new(
        ctx,
        ctx.alloc_str(directive.name),
        on_operation,
        on_field,
        on_fragment,
    );
    for arg in directive.args.iter() {
        let input_field =
            SchemaInputField::new(ctx.alloc_str(arg.name), from_type_ref(ctx, &arg.of_type));
        schema_directive.add_argument(ctx, input_field);
    }
    schema_directive
}

pub trait BuildClientSchema<'a> {
    /// Converts the introspected data to a [Schema].
    fn build_client_schema(&self, ctx: &'a ASTContext) -> &'a Schema<'a>;
}

impl<'a> BuildClientSchema<'a> for IntrospectionSchema<'a> {
    fn build_client_schema(&self, ctx: &'a ASTContext) -> &'a Schema<'a> {
        let mut schema = Schema::default_in(&ctx.arena);
        for introspection_type in self.types.iter() {
            schema.add_type(ctx, build_type(ctx, introspection_type));
        }
        for directive in self.directives.iter() {
            schema.add_directive(ctx, build_directive(ctx, directive));
        }
        if schema.get_directive("include").is_none() {
            schema.add_directive(ctx, SchemaDirective::include(ctx));
        }
        if schema.get_directive("skip").is_none() {
            schema.add_directive(ctx, SchemaDirective::skip(ctx));
        }

        schema.query_type = self
            .query_type
            .as_ref()
            .and_then(|type_ref| schema.get_type(type_ref.name))
            .and_then(|schema_type| schema_type.object());
        schema.mutation_type = self
            .mutation_type
            .as_ref()
            .and_then(|type_ref| schema.get_type(type_ref.name))
            .and_then(|schema_type| schema_type.object());
        schema.subscription_type = self
            .subscription_type
            .as_ref()
            .and_then(|type_ref| schema.get_type(type_ref.name))
            .and_then(|schema_type| schema_type.object());

        ctx.alloc(schema)
    }
}

impl<'a> BuildClientSchema<'a> for IntrospectionQuery<'a> {
    fn build_client_schema(&self, ctx: &'a ASTContext) -> &'a Schema<'a> {
        self.schema.build_client_schema(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const INTROSPECTION_JSON: &str = indoc! {r##"
        {
          "__schema": {
            "queryType": { "name": "Query" },
            "mutationType": null,
            "subscriptionType": null,
            "types": [
              { "kind": "SCALAR", "name": "String" },
              { "kind": "SCALAR", "name": "Boolean" },
              {
                "kind": "OBJECT",
                "name": "Query",
                "fields": [
                  {
                    "name": "todo",
                    "args": [
                      {
                        "name": "id",
                        "type": {
                          "kind": "NON_NULL",
                          "ofType": { "kind": "SCALAR", "name": "String" }
                        }
                      }
                    ],
                    "type": { "kind": "OBJECT", "name": "Todo" }
                  }
                ],
                "interfaces": []
              },
              {
                "kind": "OBJECT",
                "name": "Todo",
                "fields": [
                  { "name": "text", "args": [], "type": { "kind": "SCALAR", "name": "String" } },
                  { "name": "done", "args": [], "type": { "kind": "SCALAR", "name": "Boolean" } }
                ],
                "interfaces": []
              }
            ],
            "directives": [
              {
                "name": "include",
                "locations": ["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"],
                "args": [
                  {
                    "name": "if",
                    "type": {
                      "kind": "NON_NULL",
                      "ofType": { "kind": "SCALAR", "name": "Boolean" }
                    }
                  }
                ]
              }
            ]
          }
        }
    "##};

    #[test]
    fn build_schema() {
        let ctx = ASTContext::new();
        let introspection: IntrospectionQuery = serde_json::from_str(INTROSPECTION_JSON).unwrap();
        let schema = introspection.build_client_schema(&ctx);

        assert_eq!(schema.query_type().unwrap().name, "Query");
        let todo = schema.get_type("Todo").unwrap();
        let text = todo.get_field("text").unwrap();
        assert_eq!(text.output_type.name(), "String");

        let todo_field = schema.query_type().unwrap().get_field("todo").unwrap();
        let id_arg = todo_field.get_argument("id").unwrap();
        assert!(id_arg.input_type.is_non_null());
    }

    #[test]
    fn directive_locations() {
        let ctx = ASTContext::new();
        let introspection: IntrospectionQuery = serde_json::from_str(INTROSPECTION_JSON).unwrap();
        let schema = introspection.build_client_schema(&ctx);

        let include = schema.get_directive("include").unwrap();
        assert!(!include.on_operation);
        assert!(include.on_field);
        assert!(include.on_fragment);
        assert!(include.get_argument("if").is_some());

        // The built-in @skip is supplied even when introspection data omits it
        assert!(schema.get_directive("skip").is_some());
    }

    #[test]
    fn empty_schema() {
        let ctx = ASTContext::new();
        let schema = Schema::default_in(&ctx.arena);
        assert!(schema.is_empty());
    }
}
