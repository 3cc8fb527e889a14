//! The schema the validation tests run against: a small menagerie of pets, their owners,
//! and a type exercising every flavor of argument.

use crate::ast::{ASTContext, DefaultIn};
use crate::schema::*;

fn named<'a>(ctx: &'a ASTContext, name: &'a str) -> &'a TypeRef<'a> {
    ctx.alloc(TypeRef::Type(name))
}

fn non_null<'a>(ctx: &'a ASTContext, of_type: &'a TypeRef<'a>) -> &'a TypeRef<'a> {
    ctx.alloc(TypeRef::NonNullType(of_type))
}

fn list<'a>(ctx: &'a ASTContext, of_type: &'a TypeRef<'a>) -> &'a TypeRef<'a> {
    ctx.alloc(TypeRef::ListType(of_type))
}

fn field_with_args<'a>(
    ctx: &'a ASTContext,
    name: &'a str,
    output_type: &'a TypeRef<'a>,
    args: &[(&'a str, &'a TypeRef<'a>)],
) -> SchemaField<'a> {
    let mut field = SchemaField::new(ctx, name, output_type);
    for (arg_name, arg_type) in args {
        field.add_argument(ctx, SchemaInputField::new(arg_name, arg_type));
    }
    field
}

/// Builds the test schema shared by the validation tests.
pub(crate) fn test_schema(ctx: &ASTContext) -> &Schema {
    let mut schema = Schema::default_in(&ctx.arena);

    for scalar in ["String", "Int", "Float", "Boolean", "ID"] {
        schema.add_type(ctx, SchemaType::Scalar(ctx.alloc(SchemaScalar::new(scalar))));
    }

    let string = named(ctx, "String");
    let int = named(ctx, "Int");
    let float = named(ctx, "Float");
    let boolean = named(ctx, "Boolean");
    let id = named(ctx, "ID");

    let mut fur_color = SchemaEnum::new(ctx, "FurColor");
    for value in ["BROWN", "BLACK", "TAN", "SPOTTED"] {
        fur_color.add_value(ctx, value);
    }
    schema.add_type(ctx, SchemaType::Enum(ctx.alloc(fur_color)));

    let mut dog_command = SchemaEnum::new(ctx, "DogCommand");
    for value in ["SIT", "HEEL", "DOWN"] {
        dog_command.add_value(ctx, value);
    }
    schema.add_type(ctx, SchemaType::Enum(ctx.alloc(dog_command)));

    let mut being = SchemaInterface::new(ctx, "Being");
    being.add_field(ctx, field_with_args(ctx, "name", string, &[("surname", boolean)]));
    for possible in ["Dog", "Cat", "Human", "Alien"] {
        being.add_possible_type(ctx, possible);
    }
    schema.add_type(ctx, SchemaType::Interface(ctx.alloc(being)));

    let mut pet = SchemaInterface::new(ctx, "Pet");
    pet.add_field(ctx, field_with_args(ctx, "name", string, &[("surname", boolean)]));
    pet.add_possible_type(ctx, "Dog");
    pet.add_possible_type(ctx, "Cat");
    schema.add_type(ctx, SchemaType::Interface(ctx.alloc(pet)));

    let mut dog = SchemaObject::new(ctx, "Dog");
    dog.add_field(ctx, field_with_args(ctx, "name", string, &[("surname", boolean)]));
    dog.add_field(ctx, SchemaField::new(ctx, "nickname", string));
    dog.add_field(ctx, SchemaField::new(ctx, "barkVolume", int));
    dog.add_field(ctx, SchemaField::new(ctx, "barks", boolean));
    dog.add_field(
        ctx,
        field_with_args(
            ctx,
            "doesKnowCommand",
            boolean,
            &[("dogCommand", non_null(ctx, named(ctx, "DogCommand")))],
        ),
    );
    dog.add_field(
        ctx,
        field_with_args(ctx, "isHousetrained", boolean, &[("atOtherHomes", boolean)]),
    );
    dog.add_field(
        ctx,
        field_with_args(ctx, "isAtLocation", boolean, &[("x", int), ("y", int)]),
    );
    dog.add_interface(ctx, "Being");
    dog.add_interface(ctx, "Pet");
    schema.add_type(ctx, SchemaType::Object(ctx.alloc(dog)));

    let mut cat = SchemaObject::new(ctx, "Cat");
    cat.add_field(ctx, field_with_args(ctx, "name", string, &[("surname", boolean)]));
    cat.add_field(ctx, SchemaField::new(ctx, "nickname", string));
    cat.add_field(ctx, SchemaField::new(ctx, "meowVolume", int));
    cat.add_field(ctx, SchemaField::new(ctx, "furColor", named(ctx, "FurColor")));
    cat.add_interface(ctx, "Being");
    cat.add_interface(ctx, "Pet");
    schema.add_type(ctx, SchemaType::Object(ctx.alloc(cat)));

    let mut cat_or_dog = SchemaUnion::new(ctx, "CatOrDog");
    cat_or_dog.add_possible_type(ctx, "Cat");
    cat_or_dog.add_possible_type(ctx, "Dog");
    schema.add_type(ctx, SchemaType::Union(ctx.alloc(cat_or_dog)));

    let mut human = SchemaObject::new(ctx, "Human");
    human.add_field(ctx, field_with_args(ctx, "name", string, &[("surname", boolean)]));
    human.add_field(ctx, SchemaField::new(ctx, "pets", list(ctx, named(ctx, "Pet"))));
    human.add_field(ctx, SchemaField::new(ctx, "iq", int));
    human.add_interface(ctx, "Being");
    schema.add_type(ctx, SchemaType::Object(ctx.alloc(human)));

    let mut alien = SchemaObject::new(ctx, "Alien");
    alien.add_field(ctx, field_with_args(ctx, "name", string, &[("surname", boolean)]));
    alien.add_field(ctx, SchemaField::new(ctx, "numEyes", int));
    alien.add_interface(ctx, "Being");
    schema.add_type(ctx, SchemaType::Object(ctx.alloc(alien)));

    let mut dog_or_human = SchemaUnion::new(ctx, "DogOrHuman");
    dog_or_human.add_possible_type(ctx, "Dog");
    dog_or_human.add_possible_type(ctx, "Human");
    schema.add_type(ctx, SchemaType::Union(ctx.alloc(dog_or_human)));

    let mut human_or_alien = SchemaUnion::new(ctx, "HumanOrAlien");
    human_or_alien.add_possible_type(ctx, "Human");
    human_or_alien.add_possible_type(ctx, "Alien");
    schema.add_type(ctx, SchemaType::Union(ctx.alloc(human_or_alien)));

    let mut complex_input = SchemaInputObject::new(ctx, "ComplexInput");
    complex_input.add_field(ctx, SchemaInputField::new("requiredField", non_null(ctx, boolean)));
    complex_input.add_field(ctx, SchemaInputField::new("intField", int));
    complex_input.add_field(ctx, SchemaInputField::new("stringField", string));
    complex_input.add_field(ctx, SchemaInputField::new("booleanField", boolean));
    complex_input.add_field(ctx, SchemaInputField::new("stringListField", list(ctx, string)));
    schema.add_type(ctx, SchemaType::InputObject(ctx.alloc(complex_input)));

    let mut complicated_args = SchemaObject::new(ctx, "ComplicatedArgs");
    complicated_args.add_field(ctx, field_with_args(ctx, "intArgField", string, &[("intArg", int)]));
    complicated_args.add_field(
        ctx,
        field_with_args(
            ctx,
            "nonNullIntArgField",
            string,
            &[("nonNullIntArg", non_null(ctx, int))],
        ),
    );
    complicated_args.add_field(
        ctx,
        field_with_args(ctx, "stringArgField", string, &[("stringArg", string)]),
    );
    complicated_args.add_field(
        ctx,
        field_with_args(ctx, "booleanArgField", string, &[("booleanArg", boolean)]),
    );
    complicated_args.add_field(
        ctx,
        field_with_args(ctx, "enumArgField", string, &[("enumArg", named(ctx, "FurColor"))]),
    );
    complicated_args.add_field(
        ctx,
        field_with_args(ctx, "floatArgField", string, &[("floatArg", float)]),
    );
    complicated_args.add_field(ctx, field_with_args(ctx, "idArgField", string, &[("idArg", id)]));
    complicated_args.add_field(
        ctx,
        field_with_args(
            ctx,
            "stringListArgField",
            string,
            &[("stringListArg", list(ctx, string))],
        ),
    );
    complicated_args.add_field(
        ctx,
        field_with_args(
            ctx,
            "complexArgField",
            string,
            &[("complexArg", named(ctx, "ComplexInput"))],
        ),
    );
    complicated_args.add_field(
        ctx,
        field_with_args(
            ctx,
            "multipleReqs",
            string,
            &[("req1", non_null(ctx, int)), ("req2", non_null(ctx, int))],
        ),
    );
    complicated_args.add_field(
        ctx,
        field_with_args(ctx, "multipleOpts", string, &[("opt1", int), ("opt2", int)]),
    );
    schema.add_type(ctx, SchemaType::Object(ctx.alloc(complicated_args)));

    let mut string_box = SchemaObject::new(ctx, "StringBox");
    string_box.add_field(ctx, SchemaField::new(ctx, "scalar", string));
    schema.add_type(ctx, SchemaType::Object(ctx.alloc(string_box)));

    let mut int_box = SchemaObject::new(ctx, "IntBox");
    int_box.add_field(ctx, SchemaField::new(ctx, "scalar", int));
    schema.add_type(ctx, SchemaType::Object(ctx.alloc(int_box)));

    let mut some_box = SchemaUnion::new(ctx, "SomeBox");
    some_box.add_possible_type(ctx, "StringBox");
    some_box.add_possible_type(ctx, "IntBox");
    schema.add_type(ctx, SchemaType::Union(ctx.alloc(some_box)));

    let mut query_root = SchemaObject::new(ctx, "QueryRoot");
    query_root.add_field(ctx, SchemaField::new(ctx, "someBox", named(ctx, "SomeBox")));
    query_root.add_field(ctx, SchemaField::new(ctx, "dog", named(ctx, "Dog")));
    query_root.add_field(ctx, SchemaField::new(ctx, "cat", named(ctx, "Cat")));
    query_root.add_field(ctx, SchemaField::new(ctx, "pet", named(ctx, "Pet")));
    query_root.add_field(ctx, SchemaField::new(ctx, "being", named(ctx, "Being")));
    query_root.add_field(ctx, SchemaField::new(ctx, "catOrDog", named(ctx, "CatOrDog")));
    query_root.add_field(ctx, SchemaField::new(ctx, "dogOrHuman", named(ctx, "DogOrHuman")));
    query_root.add_field(
        ctx,
        SchemaField::new(ctx, "humanOrAlien", named(ctx, "HumanOrAlien")),
    );
    query_root.add_field(ctx, field_with_args(ctx, "human", named(ctx, "Human"), &[("id", id)]));
    query_root.add_field(ctx, SchemaField::new(ctx, "alien", named(ctx, "Alien")));
    query_root.add_field(
        ctx,
        SchemaField::new(ctx, "complicatedArgs", named(ctx, "ComplicatedArgs")),
    );
    let query_root = ctx.alloc(query_root);
    schema.add_type(ctx, SchemaType::Object(query_root));
    schema.set_query_type(query_root);

    schema.add_directive(ctx, SchemaDirective::include(ctx));
    schema.add_directive(ctx, SchemaDirective::skip(ctx));
    schema.add_directive(ctx, SchemaDirective::new(ctx, "onQuery", true, false, false));
    schema.add_directive(ctx, SchemaDirective::new(ctx, "onField", false, true, false));
    schema.add_directive(
        ctx,
        SchemaDirective::new(ctx, "onFragment", false, false, true),
    );

    ctx.alloc(schema)
}
