use super::ast::*;
use std::{fmt, fmt::Write};

/// Trait for printing AST Nodes to a new String allocated on the heap.
/// This is implemented by all AST Nodes and can hence be used to granularly print GraphQL
/// language. The validator uses it to quote offending literals and type references inside
/// error messages; whole documents print via `Document::print`.
///
/// For convenience when debugging, AST Nodes that implement `PrintNode` also automatically
/// implement the [`fmt::Display`] trait.
pub trait PrintNode {
    /// Write an AST node to a buffer implementing the [Write] trait.
    ///
    /// The `level` indicates the level of nesting, which increases with each [`SelectionSet`]
    /// and is typically initialized as zero (`0`).
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result;

    /// Print an AST Node to source text as a String allocated on the heap.
    fn print(&self) -> String {
        let mut buf = String::new();
        match self.write_to_buffer(0, &mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}

impl fmt::Display for dyn PrintNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to_buffer(0, f)
    }
}

fn write_indent(level: usize, buffer: &mut dyn Write) -> fmt::Result {
    for _ in 0..level {
        buffer.write_str("  ")?;
    }
    Ok(())
}

impl<'a> PrintNode for NamedType<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.name)
    }
}

impl<'a> PrintNode for Variable<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "${}", self.name)
    }
}

impl PrintNode for BooleanValue {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self.value {
            true => buffer.write_str("true"),
            false => buffer.write_str("false"),
        }
    }
}

impl PrintNode for NullValue {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("null")
    }
}

impl<'a> PrintNode for EnumValue<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }
}

impl<'a> PrintNode for FloatValue<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }
}

impl<'a> PrintNode for IntValue<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }
}

impl<'a> PrintNode for StringValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        use lexical_core::*;
        let mut buf = [b'0'; u32::FORMATTED_SIZE];

        if !self.is_block() {
            buffer.write_char('"')?;
            for c in self.value.chars() {
                match c {
                    '\r' => buffer.write_str(r"\r")?,
                    '\n' => buffer.write_str(r"\n")?,
                    '\t' => buffer.write_str(r"\t")?,
                    '"' => buffer.write_str("\\\"")?,
                    '\\' => buffer.write_str(r"\\")?,
                    '\u{0020}'..='\u{FFFF}' => buffer.write_char(c)?,
                    _ => unsafe {
                        const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
                        const OPTIONS: WriteIntegerOptions = WriteIntegerOptions::new();
                        let buf =
                            write_with_options_unchecked::<_, FORMAT>(c as u32, &mut buf, &OPTIONS);
                        write!(buffer, "\\u{:0>4}", std::str::from_utf8_unchecked(buf))?;
                    },
                };
            }
            buffer.write_char('"')
        } else {
            buffer.write_str("\"\"\"\n")?;
            for line in self.value.lines() {
                if !line.trim().is_empty() {
                    write_indent(level, buffer)?;
                    buffer.write_str(&line.replace(r#"""""#, r#"\""""#))?;
                }
                buffer.write_char('\n')?;
            }
            write_indent(level, buffer)?;
            buffer.write_str("\"\"\"")
        }
    }
}

impl<'a> PrintNode for Value<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Value::Boolean(value) => value.write_to_buffer(level, buffer),
            Value::Enum(value) => value.write_to_buffer(level, buffer),
            Value::Float(value) => value.write_to_buffer(level, buffer),
            Value::Int(value) => value.write_to_buffer(level, buffer),
            Value::String(value) => value.write_to_buffer(level, buffer),
            Value::Variable(value) => value.write_to_buffer(level, buffer),
            Value::Object(value) => value.write_to_buffer(level, buffer),
            Value::List(value) => value.write_to_buffer(level, buffer),
            Value::Null(value) => value.write_to_buffer(level, buffer),
        }
    }
}

impl<'a> PrintNode for ObjectField<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for ObjectValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("{")?;
        let mut first = true;
        for field in self.children.iter() {
            if first {
                first = false;
            } else {
                buffer.write_str(", ")?;
            }
            field.write_to_buffer(level, buffer)?;
        }
        buffer.write_str("}")
    }
}

impl<'a> PrintNode for ListValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("[")?;
        let mut first = true;
        for value in self.children.iter() {
            if first {
                first = false;
            } else {
                buffer.write_str(", ")?;
            }
            value.write_to_buffer(level, buffer)?;
        }
        buffer.write_str("]")
    }
}

impl<'a> PrintNode for Argument<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for Arguments<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            buffer.write_str("(")?;
            let mut first = true;
            for argument in self.children.iter() {
                if first {
                    first = false;
                } else {
                    buffer.write_str(", ")?;
                }
                argument.write_to_buffer(level, buffer)?;
            }
            buffer.write_str(")")?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for Directive<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "@{}", self.name)?;
        self.arguments.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for Directives<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        for directive in self.children.iter() {
            buffer.write_char(' ')?;
            directive.write_to_buffer(level, buffer)?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for SelectionSet<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            buffer.write_str("{\n")?;
            for selection in self.selections.iter() {
                write_indent(level + 1, buffer)?;
                match selection {
                    Selection::Field(field) => field.write_to_buffer(level + 1, buffer)?,
                    Selection::FragmentSpread(spread) => spread.write_to_buffer(level + 1, buffer)?,
                    Selection::InlineFragment(fragment) => {
                        fragment.write_to_buffer(level + 1, buffer)?
                    }
                };
                buffer.write_char('\n')?;
            }
            write_indent(level, buffer)?;
            buffer.write_str("}")?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for Field<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if let Some(alias) = self.alias {
            write!(buffer, "{}: ", alias)?;
        }
        buffer.write_str(self.name)?;
        self.arguments.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        if !self.selection_set.is_empty() {
            buffer.write_char(' ')?;
            self.selection_set.write_to_buffer(level, buffer)?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for FragmentSpread<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "...{}", self.name.name)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for InlineFragment<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("...")?;
        if let Some(type_condition) = &self.type_condition {
            write!(buffer, " on {}", type_condition.name)?;
        }
        self.directives.write_to_buffer(level, buffer)?;
        buffer.write_char(' ')?;
        self.selection_set.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for Type<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Type::NamedType(named) => named.write_to_buffer(level, buffer),
            Type::ListType(of_type) => {
                buffer.write_char('[')?;
                of_type.write_to_buffer(level, buffer)?;
                buffer.write_char(']')
            }
            Type::NonNullType(of_type) => {
                of_type.write_to_buffer(level, buffer)?;
                buffer.write_char('!')
            }
        }
    }
}

impl<'a> PrintNode for VariableDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        self.variable.write_to_buffer(level, buffer)?;
        buffer.write_str(": ")?;
        self.of_type.write_to_buffer(level, buffer)?;
        if let Some(default_value) = &self.default_value {
            buffer.write_str(" = ")?;
            default_value.write_to_buffer(level, buffer)?;
        }
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for VariableDefinitions<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            buffer.write_str("(")?;
            let mut first = true;
            for var_def in self.children.iter() {
                if first {
                    first = false;
                } else {
                    buffer.write_str(", ")?;
                }
                var_def.write_to_buffer(level, buffer)?;
            }
            buffer.write_str(")")?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for FragmentDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "fragment {} on {}", self.name.name, self.type_condition.name)?;
        self.directives.write_to_buffer(level, buffer)?;
        buffer.write_char(' ')?;
        self.selection_set.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for OperationDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        let is_shorthand = self.operation == OperationKind::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty();
        if !is_shorthand {
            match self.operation {
                OperationKind::Query => buffer.write_str("query")?,
                OperationKind::Mutation => buffer.write_str("mutation")?,
                OperationKind::Subscription => buffer.write_str("subscription")?,
            };
            if let Some(name) = &self.name {
                write!(buffer, " {}", name.name)?;
            }
            self.variable_definitions.write_to_buffer(level, buffer)?;
            self.directives.write_to_buffer(level, buffer)?;
            buffer.write_char(' ')?;
        }
        self.selection_set.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for Document<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        let mut first = true;
        for definition in self.definitions.iter() {
            if first {
                first = false;
            } else {
                buffer.write_str("\n\n")?;
            }
            match definition {
                Definition::Operation(operation) => operation.write_to_buffer(level, buffer)?,
                Definition::Fragment(fragment) => fragment.write_to_buffer(level, buffer)?,
            };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::{ast::*, parser::ParseNode, printer::PrintNode};

    #[test]
    fn print_document() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, "{ dog { name } }").unwrap();
        assert_eq!(ast.print(), "{\n  dog {\n    name\n  }\n}");
    }

    #[test]
    fn print_operation() {
        let ctx = ASTContext::new();
        let ast = Document::parse(
            &ctx,
            "query Q($v: [Int!] = [1, 2]) @onQuery { f(a: $v) @skip(if: true) }",
        )
        .unwrap();
        assert_eq!(
            ast.print(),
            "query Q($v: [Int!] = [1, 2]) @onQuery {\n  f(a: $v) @skip(if: true)\n}"
        );
    }

    #[test]
    fn print_values() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, r#"{ f(a: {b: [1, "x"], c: null, d: FOO}) }"#).unwrap();
        let operation = ast.definitions[0].operation().unwrap();
        let field = match &operation.selection_set.selections[0] {
            Selection::Field(field) => field,
            _ => panic!("expected a field"),
        };
        assert_eq!(
            field.arguments.children[0].value.print(),
            r#"{b: [1, "x"], c: null, d: FOO}"#
        );
    }

    #[test]
    fn print_type() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, "query ($v: [[Pet]!]!) { f }").unwrap();
        let operation = ast.definitions[0].operation().unwrap();
        assert_eq!(
            operation.variable_definitions.children[0].of_type.print(),
            "[[Pet]!]!"
        );
    }
}
