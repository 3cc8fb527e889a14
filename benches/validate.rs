#[macro_use]
extern crate bencher;

use bencher::Bencher;
use graphql_validate::ast::*;
use graphql_validate::schema::*;
use graphql_validate::validate::validate;

fn bench_schema(ctx: &ASTContext) -> &Schema {
    let mut schema = Schema::default_in(&ctx.arena);
    for scalar in ["String", "Int", "Boolean", "ID"] {
        schema.add_type(ctx, SchemaType::Scalar(ctx.alloc(SchemaScalar::new(scalar))));
    }

    let string = &*ctx.alloc(TypeRef::Type("String"));
    let int = &*ctx.alloc(TypeRef::Type("Int"));
    let id = &*ctx.alloc(TypeRef::Type("ID"));

    let mut author = SchemaObject::new(ctx, "Author");
    author.add_field(ctx, SchemaField::new(ctx, "id", id));
    author.add_field(ctx, SchemaField::new(ctx, "name", string));
    author.add_field(ctx, SchemaField::new(ctx, "friends", ctx.alloc(TypeRef::ListType(ctx.alloc(TypeRef::Type("Author"))))));
    let author = &*ctx.alloc(author);
    schema.add_type(ctx, SchemaType::Object(author));

    let mut todo = SchemaObject::new(ctx, "Todo");
    todo.add_field(ctx, SchemaField::new(ctx, "id", id));
    todo.add_field(ctx, SchemaField::new(ctx, "text", string));
    todo.add_field(ctx, SchemaField::new(ctx, "author", ctx.alloc(TypeRef::Type("Author"))));
    let todo = &*ctx.alloc(todo);
    schema.add_type(ctx, SchemaType::Object(todo));

    let mut query_root = SchemaObject::new(ctx, "Query");
    let mut todos = SchemaField::new(
        ctx,
        "todos",
        ctx.alloc(TypeRef::ListType(ctx.alloc(TypeRef::Type("Todo")))),
    );
    todos.add_argument(ctx, SchemaInputField::new("first", int));
    query_root.add_field(ctx, todos);
    let query_root = &*ctx.alloc(query_root);
    schema.add_type(ctx, SchemaType::Object(query_root));
    schema.set_query_type(query_root);

    schema.add_directive(ctx, SchemaDirective::include(ctx));
    schema.add_directive(ctx, SchemaDirective::skip(ctx));

    ctx.alloc(schema)
}

fn graphql_parse_document(bench: &mut Bencher) {
    bench.iter(|| {
        let ctx = ASTContext::new();
        Document::parse(&ctx, QUERY).ok();
    });
}

fn graphql_parse_and_validate_document(bench: &mut Bencher) {
    bench.iter(|| {
        let ctx = ASTContext::new();
        let schema = bench_schema(&ctx);
        let document = Document::parse(&ctx, QUERY).unwrap();
        let errors = validate(&ctx, schema, document).unwrap();
        assert!(errors.is_empty());
    });
}

benchmark_group!(
    validate_benchmarks,
    graphql_parse_document,
    graphql_parse_and_validate_document
);
benchmark_main!(validate_benchmarks);

static QUERY: &str = r#"
query TodoList($first: Int = 10, $withAuthor: Boolean!) {
    todos(first: $first) {
        id
        text
        ...TodoDetails
        author @include(if: $withAuthor) {
            ...AuthorSummary
        }
    }
}

fragment TodoDetails on Todo {
    __typename
    id
    text
    author {
        id
    }
}

fragment AuthorSummary on Author {
    id
    name
    friends {
        id
        name
    }
}
"#;
