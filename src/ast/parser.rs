use super::ast::*;
use super::ast_kind::ASTKind;
use super::lexer::{Extras, Token};
use crate::error::{get_location, print_span, Error, ErrorType, LineIndex, Location, Result};
use bumpalo::collections::Vec;
use logos::{Lexer, Logos, Span};

type ParseResult<T> = std::result::Result<T, ASTKind>;

pub(crate) mod private {
    use super::{ASTContext, Extras, Lexer, LineIndex, Location, Logos, ParseResult, Span, Token};

    /// Private Parser context state that's kept to keep track of the current parser's progress and
    /// state. This contains the AST context's arena, a [Lexer], and a line index used to resolve
    /// token spans into line/column locations on the parsed nodes.
    pub struct ParserContext<'a> {
        pub(crate) arena: &'a bumpalo::Bump,
        pub(crate) peek: Option<Token<'a>>,
        pub(crate) iter: Lexer<'a, Token<'a>>,
        pub(crate) lines: LineIndex,
        pub(crate) in_var_def: bool,
    }

    impl<'a> ParserContext<'a> {
        /// Create a new Parser context for a given AST context and initialize it with an input
        /// source string to parse from.
        pub(crate) fn new(ctx: &'a ASTContext, source: &'a str) -> Self {
            let extras = Extras { arena: &ctx.arena };
            ParserContext {
                arena: &ctx.arena,
                peek: None,
                iter: Token::lexer_with_extras(source, extras),
                lines: LineIndex::new(source),
                in_var_def: false,
            }
        }

        #[inline]
        pub(crate) fn next(&mut self) -> Token<'a> {
            match self.peek.take() {
                Some(token) => token,
                None => self.iter.next().unwrap_or(Token::End),
            }
        }

        #[inline]
        pub(crate) fn peek(&mut self) -> &Token<'a> {
            let iter = &mut self.iter;
            self.peek
                .get_or_insert_with(|| iter.next().unwrap_or(Token::End))
        }

        /// The location of the upcoming token, which is the first token of the node a
        /// `new_with_ctx` implementation is about to parse.
        #[inline]
        pub(crate) fn location(&mut self) -> Location {
            self.peek();
            self.lines.locate(self.iter.span().start)
        }

        #[inline]
        pub(crate) fn source(&self) -> &str {
            self.iter.source()
        }

        #[inline]
        pub(crate) fn span(&self) -> Span {
            self.iter.span()
        }
    }

    /// (Private) Trait for parsing AST Nodes from a Parser Context.
    /// The [`super::ParseNode`] trait implements the public `parse` method instead.
    pub trait ParseNode<'a>: Sized {
        fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Self>;
    }
}

/// Trait for parsing AST Nodes from source texts using recursive descent and a lexer.
///
/// This trait is implemented by all AST Nodes and can hence be used to granularly parse GraphQL
/// language. However, mostly this will be used via `Document::parse`.
pub trait ParseNode<'a>: private::ParseNode<'a> {
    /// Parse an input source text into the implementor's AST Node structure and allocate the
    /// resulting AST into the current AST Context's arena.
    fn parse<T: ToString>(ctx: &'a ASTContext, source: T) -> Result<&'a Self> {
        let source = ctx.alloc_string(source.to_string());
        let mut parser_ctx = private::ParserContext::new(ctx, source);
        match Self::new_with_ctx(&mut parser_ctx) {
            Ok(value) => Ok(ctx.alloc(value)),
            Err(error) => {
                let span = print_span(parser_ctx.source(), parser_ctx.span());
                let location = get_location(parser_ctx.source(), parser_ctx.span());
                let message = format!("Invalid {}", error);
                Err(Error::new_with_context(
                    message,
                    Some(location),
                    span,
                    Some(ErrorType::Syntax),
                ))
            }
        }
    }
}

impl<'a, T: private::ParseNode<'a>> ParseNode<'a> for T {}

impl<'a> private::ParseNode<'a> for BooleanValue {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<BooleanValue> {
        let location = ctx.location();
        match ctx.next() {
            Token::Name("true") => Ok(BooleanValue {
                value: true,
                location,
            }),
            Token::Name("false") => Ok(BooleanValue {
                value: false,
                location,
            }),
            _ => Err(ASTKind::Boolean),
        }
    }
}

impl<'a> private::ParseNode<'a> for EnumValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<EnumValue<'a>> {
        let location = ctx.location();
        match ctx.next() {
            Token::Name("true" | "false" | "null") => Err(ASTKind::Enum),
            Token::Name(value) => Ok(EnumValue { value, location }),
            _ => Err(ASTKind::Enum),
        }
    }
}

impl<'a> private::ParseNode<'a> for FloatValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FloatValue<'a>> {
        let location = ctx.location();
        if let Token::Float(value) = ctx.next() {
            Ok(FloatValue { value, location })
        } else {
            Err(ASTKind::Float)
        }
    }
}

impl<'a> private::ParseNode<'a> for IntValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<IntValue<'a>> {
        let location = ctx.location();
        if let Token::Integer(value) = ctx.next() {
            Ok(IntValue { value, location })
        } else {
            Err(ASTKind::Int)
        }
    }
}

impl<'a> private::ParseNode<'a> for StringValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<StringValue<'a>> {
        let location = ctx.location();
        if let Token::String(value) = ctx.next() {
            Ok(StringValue { value, location })
        } else {
            Err(ASTKind::String)
        }
    }
}

impl<'a> private::ParseNode<'a> for Variable<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Variable<'a>> {
        let location = ctx.location();
        if let Token::VariableName(name) = ctx.next() {
            Ok(Variable { name, location })
        } else {
            Err(ASTKind::Variable)
        }
    }
}

impl<'a> private::ParseNode<'a> for Value<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Value<'a>> {
        let in_var_def = ctx.in_var_def;
        let location = ctx.location();
        match ctx.peek() {
            Token::Name("null") => {
                ctx.next();
                Ok(Value::Null(NullValue { location }))
            }
            Token::VariableName(_) if in_var_def => Err(ASTKind::VariableDefinition),
            Token::VariableName(_) => Variable::new_with_ctx(ctx).map(Value::Variable),
            Token::Name("true" | "false") => BooleanValue::new_with_ctx(ctx).map(Value::Boolean),
            Token::Name(_) => EnumValue::new_with_ctx(ctx).map(Value::Enum),
            Token::Float(_) => FloatValue::new_with_ctx(ctx).map(Value::Float),
            Token::Integer(_) => IntValue::new_with_ctx(ctx).map(Value::Int),
            Token::String(_) => StringValue::new_with_ctx(ctx).map(Value::String),
            Token::BracketOpen => ListValue::new_with_ctx(ctx).map(Value::List),
            Token::BraceOpen => ObjectValue::new_with_ctx(ctx).map(Value::Object),
            _ => Err(ASTKind::Value),
        }
    }
}

impl<'a> private::ParseNode<'a> for ObjectField<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ObjectField<'a>> {
        let location = ctx.location();
        if let Token::Name(name) = ctx.next() {
            if let Token::Colon = ctx.next() {
                let value = Value::new_with_ctx(ctx)?;
                return Ok(ObjectField {
                    name,
                    value,
                    location,
                });
            }
        }
        Err(ASTKind::ObjectField)
    }
}

impl<'a> private::ParseNode<'a> for ObjectValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ObjectValue<'a>> {
        let location = ctx.location();
        if let Token::BraceOpen = ctx.next() {
            let children = if let Token::BraceClose = ctx.peek() {
                ctx.next();
                Vec::new_in(ctx.arena)
            } else {
                let mut builder = Vec::new_in(ctx.arena);
                loop {
                    builder.push(ObjectField::new_with_ctx(ctx)?);
                    if let Token::BraceClose = ctx.peek() {
                        ctx.next();
                        break;
                    }
                }
                builder
            };
            Ok(ObjectValue { children, location })
        } else {
            Err(ASTKind::Object)
        }
    }
}

impl<'a> private::ParseNode<'a> for ListValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ListValue<'a>> {
        let location = ctx.location();
        if let Token::BracketOpen = ctx.next() {
            let children = if let Token::BracketClose = ctx.peek() {
                ctx.next();
                Vec::new_in(ctx.arena)
            } else {
                let mut builder = Vec::new_in(ctx.arena);
                loop {
                    builder.push(Value::new_with_ctx(ctx)?);
                    if let Token::BracketClose = ctx.peek() {
                        ctx.next();
                        break;
                    }
                }
                builder
            };
            Ok(ListValue { children, location })
        } else {
            Err(ASTKind::List)
        }
    }
}

impl<'a> private::ParseNode<'a> for Argument<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Argument<'a>> {
        let location = ctx.location();
        if let Token::Name(name) = ctx.next() {
            if let Token::Colon = ctx.next() {
                let value = Value::new_with_ctx(ctx)?;
                return Ok(Argument {
                    name,
                    value,
                    location,
                });
            }
        }
        Err(ASTKind::Argument)
    }
}

impl<'a> private::ParseNode<'a> for Arguments<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Arguments<'a>> {
        let children = if let Token::ParenOpen = ctx.peek() {
            ctx.next();
            if let Token::ParenClose = ctx.peek() {
                ctx.next();
                Vec::new_in(ctx.arena)
            } else {
                let mut builder = Vec::new_in(ctx.arena);
                loop {
                    builder.push(Argument::new_with_ctx(ctx)?);
                    if let Token::ParenClose = ctx.peek() {
                        ctx.next();
                        break;
                    }
                }
                builder
            }
        } else {
            Vec::new_in(ctx.arena)
        };
        Ok(Arguments { children })
    }
}

impl<'a> private::ParseNode<'a> for Directive<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Directive<'a>> {
        let location = ctx.location();
        if let Token::DirectiveName(name) = ctx.next() {
            let arguments = Arguments::new_with_ctx(ctx)?;
            Ok(Directive {
                name,
                arguments,
                location,
            })
        } else {
            Err(ASTKind::Directive)
        }
    }
}

impl<'a> private::ParseNode<'a> for Directives<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Directives<'a>> {
        let mut builder = Vec::new_in(ctx.arena);
        while let Token::DirectiveName(_) = ctx.peek() {
            builder.push(Directive::new_with_ctx(ctx)?);
        }
        Ok(Directives { children: builder })
    }
}

impl<'a> private::ParseNode<'a> for Field<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Field<'a>> {
        let location = ctx.location();
        if let Token::Name(name_or_alias) = ctx.next() {
            let (alias, name) = if let Token::Colon = ctx.peek() {
                ctx.next();
                if let Token::Name(name) = ctx.next() {
                    (Some(name_or_alias), name)
                } else {
                    return Err(ASTKind::Field);
                }
            } else {
                (None, name_or_alias)
            };

            let arguments = Arguments::new_with_ctx(ctx)?;
            let directives = Directives::new_with_ctx(ctx)?;
            let selection_set = SelectionSet::new_with_ctx(ctx)?;

            Ok(Field {
                alias,
                name,
                arguments,
                directives,
                selection_set,
                location,
            })
        } else {
            Err(ASTKind::Field)
        }
    }
}

impl<'a> private::ParseNode<'a> for NamedType<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<NamedType<'a>> {
        let location = ctx.location();
        if let Token::Name(name) = ctx.next() {
            Ok(NamedType { name, location })
        } else {
            Err(ASTKind::NamedType)
        }
    }
}

impl<'a> private::ParseNode<'a> for FragmentSpread<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FragmentSpread<'a>> {
        if let Token::Ellipsis = ctx.peek() {
            ctx.next();
        };
        let location = ctx.location();
        match ctx.peek() {
            Token::Name("on") => Err(ASTKind::FragmentSpread),
            Token::Name(_) => {
                let name = NamedType::new_with_ctx(ctx)?;
                let directives = Directives::new_with_ctx(ctx)?;
                Ok(FragmentSpread {
                    name,
                    directives,
                    location,
                })
            }
            _ => Err(ASTKind::FragmentSpread),
        }
    }
}

impl<'a> private::ParseNode<'a> for InlineFragment<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<InlineFragment<'a>> {
        if let Token::Ellipsis = ctx.peek() {
            ctx.next();
        };
        let location = ctx.location();
        let type_condition = if let Token::Name("on") = ctx.peek() {
            ctx.next();
            Some(NamedType::new_with_ctx(ctx)?)
        } else {
            None
        };
        let directives = Directives::new_with_ctx(ctx)?;
        if let Token::BraceOpen = ctx.peek() {
            let selection_set = SelectionSet::new_with_ctx(ctx)?;
            Ok(InlineFragment {
                type_condition,
                directives,
                selection_set,
                location,
            })
        } else {
            Err(ASTKind::InlineFragment)
        }
    }
}

impl<'a> private::ParseNode<'a> for Selection<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Selection<'a>> {
        match ctx.peek() {
            Token::Name(_) => Field::new_with_ctx(ctx).map(Selection::Field),
            Token::Ellipsis => {
                ctx.next();
                match ctx.peek() {
                    Token::DirectiveName(_) | Token::BraceOpen | Token::Name("on") => {
                        InlineFragment::new_with_ctx(ctx).map(Selection::InlineFragment)
                    }
                    Token::Name(_) => {
                        FragmentSpread::new_with_ctx(ctx).map(Selection::FragmentSpread)
                    }
                    _ => Err(ASTKind::Selection),
                }
            }
            _ => Err(ASTKind::Selection),
        }
    }
}

impl<'a> private::ParseNode<'a> for SelectionSet<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<SelectionSet<'a>> {
        let location = ctx.location();
        let selections = if let Token::BraceOpen = ctx.peek() {
            ctx.next();
            let mut builder = Vec::new_in(ctx.arena);
            loop {
                builder.push(Selection::new_with_ctx(ctx)?);
                if let Token::BraceClose = ctx.peek() {
                    ctx.next();
                    break;
                }
            }
            builder
        } else {
            Vec::new_in(ctx.arena)
        };
        Ok(SelectionSet {
            selections,
            location,
        })
    }
}

impl<'a> private::ParseNode<'a> for Type<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Type<'a>> {
        let location = ctx.location();
        let token = ctx.next();
        let of_type = if let Token::BracketOpen = token {
            let inner = Type::new_with_ctx(ctx)?;
            if let Token::BracketClose = ctx.next() {
                Type::ListType(ctx.arena.alloc(inner))
            } else {
                return Err(ASTKind::ListType);
            }
        } else if let Token::Name(name) = token {
            Type::NamedType(NamedType { name, location })
        } else {
            return Err(ASTKind::Type);
        };
        if let Token::Exclam = ctx.peek() {
            ctx.next();
            Ok(Type::NonNullType(ctx.arena.alloc(of_type)))
        } else {
            Ok(of_type)
        }
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<VariableDefinition<'a>> {
        let location = ctx.location();
        let variable = Variable::new_with_ctx(ctx)?;
        let of_type = if let Token::Colon = ctx.next() {
            Type::new_with_ctx(ctx)?
        } else {
            return Err(ASTKind::VariableDefinition);
        };
        let default_value = if let Token::Equal = ctx.peek() {
            ctx.next();
            ctx.in_var_def = true;
            let value = Value::new_with_ctx(ctx)?;
            ctx.in_var_def = false;
            Some(value)
        } else {
            None
        };
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(VariableDefinition {
            variable,
            of_type,
            default_value,
            directives,
            location,
        })
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinitions<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<VariableDefinitions<'a>> {
        let children = if let Token::ParenOpen = ctx.peek() {
            ctx.next();
            let mut builder = Vec::new_in(ctx.arena);
            loop {
                builder.push(VariableDefinition::new_with_ctx(ctx)?);
                if let Token::ParenClose = ctx.peek() {
                    ctx.next();
                    break;
                }
            }
            builder
        } else {
            Vec::new_in(ctx.arena)
        };
        Ok(VariableDefinitions { children })
    }
}

impl<'a> private::ParseNode<'a> for FragmentDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FragmentDefinition<'a>> {
        let location = ctx.location();
        if let Token::Name("fragment") = ctx.next() {
            let name = NamedType::new_with_ctx(ctx)?;
            let type_condition = if let Token::Name("on") = ctx.next() {
                NamedType::new_with_ctx(ctx)?
            } else {
                return Err(ASTKind::FragmentDefinition);
            };
            let directives = Directives::new_with_ctx(ctx)?;
            let selection_set = if let Token::BraceOpen = ctx.peek() {
                SelectionSet::new_with_ctx(ctx)?
            } else {
                return Err(ASTKind::FragmentDefinition);
            };
            Ok(FragmentDefinition {
                name,
                type_condition,
                directives,
                selection_set,
                location,
            })
        } else {
            Err(ASTKind::FragmentDefinition)
        }
    }
}

impl<'a> private::ParseNode<'a> for OperationKind {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<OperationKind> {
        match ctx.next() {
            Token::Name("query") => Ok(OperationKind::Query),
            Token::Name("mutation") => Ok(OperationKind::Mutation),
            Token::Name("subscription") => Ok(OperationKind::Subscription),
            _ => Err(ASTKind::OperationKind),
        }
    }
}

impl<'a> private::ParseNode<'a> for OperationDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<OperationDefinition<'a>> {
        let location = ctx.location();
        let operation = match ctx.peek() {
            Token::BraceOpen => {
                let selection_set = SelectionSet::new_with_ctx(ctx)?;
                return Ok(OperationDefinition {
                    operation: OperationKind::Query,
                    name: None,
                    variable_definitions: VariableDefinitions::default_in(ctx.arena),
                    directives: Directives::default_in(ctx.arena),
                    selection_set,
                    location,
                });
            }
            Token::Name("query") => OperationKind::Query,
            Token::Name("mutation") => OperationKind::Mutation,
            Token::Name("subscription") => OperationKind::Subscription,
            _ => return Err(ASTKind::OperationDefinition),
        };
        ctx.next();
        let name = if let Token::Name(_) = ctx.peek() {
            NamedType::new_with_ctx(ctx).ok()
        } else {
            None
        };
        let variable_definitions = VariableDefinitions::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        if let Token::BraceOpen = ctx.peek() {
            let selection_set = SelectionSet::new_with_ctx(ctx)?;
            Ok(OperationDefinition {
                operation,
                name,
                variable_definitions,
                directives,
                selection_set,
                location,
            })
        } else {
            Err(ASTKind::OperationDefinition)
        }
    }
}

impl<'a> private::ParseNode<'a> for Document<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Document<'a>> {
        let mut definitions = Vec::new_in(ctx.arena);
        loop {
            let definition = match ctx.peek() {
                Token::BraceOpen | Token::Name("query" | "mutation" | "subscription") => {
                    OperationDefinition::new_with_ctx(ctx).map(Definition::Operation)
                }
                Token::Name("fragment") => {
                    FragmentDefinition::new_with_ctx(ctx).map(Definition::Fragment)
                }
                Token::End => break,
                _ => Err(ASTKind::Document),
            }?;
            definitions.push(definition);
        }
        Ok(Document {
            definitions,
            size_hint: ctx.iter.span().end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{super::ast::*, ParseNode};
    use crate::error::Location;

    #[test]
    fn parse_error_location() {
        let ctx = ASTContext::new();
        let result = Document::parse(&ctx, "query { document { $ }}");
        assert_eq!(
            *result.err().unwrap().location(),
            Some(Location {
                line: 1,
                column: 20
            })
        );

        let result = Document::parse(
            &ctx,
            "query {
            document {
                $
            }
        }",
        );
        assert_eq!(
            *result.err().unwrap().location(),
            Some(Location {
                line: 3,
                column: 17
            })
        );
    }

    #[test]
    fn field_locations() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, "{\n  dog {\n    name\n  }\n}").unwrap();
        let operation = ast.definitions[0].operation().unwrap();
        let dog = match &operation.selection_set.selections[0] {
            Selection::Field(field) => field,
            _ => panic!("expected a field"),
        };
        assert_eq!(dog.location, Location { line: 2, column: 3 });
        let name = match &dog.selection_set.selections[0] {
            Selection::Field(field) => field,
            _ => panic!("expected a field"),
        };
        assert_eq!(name.location, Location { line: 3, column: 5 });
    }

    #[test]
    fn values() {
        let ctx = ASTContext::new();
        let ast = Document::parse(
            &ctx,
            r#"{ f(a: 1, b: 1.5, c: "x", d: true, e: null, f: FOO, g: [1, 2], h: {i: 1}) }"#,
        )
        .unwrap();
        let operation = ast.definitions[0].operation().unwrap();
        let field = match &operation.selection_set.selections[0] {
            Selection::Field(field) => field,
            _ => panic!("expected a field"),
        };
        let arguments = &field.arguments.children;
        assert_eq!(arguments.len(), 8);
        assert!(matches!(arguments[0].value, Value::Int(IntValue { value: "1", .. })));
        assert!(matches!(arguments[1].value, Value::Float(_)));
        assert!(matches!(arguments[2].value, Value::String(_)));
        assert!(matches!(arguments[3].value, Value::Boolean(_)));
        assert!(matches!(arguments[4].value, Value::Null(_)));
        assert!(matches!(arguments[5].value, Value::Enum(_)));
        assert!(matches!(arguments[6].value, Value::List(_)));
        assert!(matches!(arguments[7].value, Value::Object(_)));
    }

    #[test]
    fn variable_definitions() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, "query Q($a: Int = 10, $b: [String!]!) { f }").unwrap();
        let operation = ast.definitions[0].operation().unwrap();
        let var_defs = &operation.variable_definitions.children;
        assert_eq!(var_defs[0].variable.name, "a");
        assert!(matches!(
            var_defs[0].default_value,
            Some(Value::Int(IntValue { value: "10", .. }))
        ));
        assert_eq!(var_defs[1].variable.name, "b");
        assert!(var_defs[1].default_value.is_none());
        assert!(matches!(var_defs[1].of_type, Type::NonNullType(_)));
    }

    #[test]
    fn variables_not_allowed_in_defaults() {
        let ctx = ASTContext::new();
        Document::parse(&ctx, "query Q($a: Int = $b) { f }").unwrap_err();
    }

    #[test]
    fn fragments() {
        let ctx = ASTContext::new();
        let ast = Document::parse(
            &ctx,
            "{ ...Frag ... on Dog { name } ... { name } } fragment Frag on Dog { name }",
        )
        .unwrap();
        let operation = ast.definitions[0].operation().unwrap();
        assert!(matches!(
            operation.selection_set.selections[0],
            Selection::FragmentSpread(_)
        ));
        assert!(matches!(
            &operation.selection_set.selections[1],
            Selection::InlineFragment(inline) if inline.type_condition.is_some()
        ));
        assert!(matches!(
            &operation.selection_set.selections[2],
            Selection::InlineFragment(inline) if inline.type_condition.is_none()
        ));
        assert!(matches!(ast.definitions[1], Definition::Fragment(_)));
    }
}
