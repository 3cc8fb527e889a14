use logos::{internal::LexerInternal, Lexer, Logos};

#[derive(Clone)]
pub struct Extras<'a> {
    pub arena: &'a bumpalo::Bump,
}

#[derive(Logos, Debug, PartialEq)]
#[logos(extras = Extras<'s>)]
pub enum Token<'a> {
    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(":")]
    Colon,

    #[token("=")]
    Equal,

    #[token("!")]
    Exclam,

    #[token("...")]
    Ellipsis,

    #[regex(r"@[_a-zA-Z][_0-9a-zA-Z]*", |lex| &lex.slice()[1..])]
    DirectiveName(&'a str),

    #[regex(r"\$[_a-zA-Z][_0-9a-zA-Z]*", |lex| &lex.slice()[1..])]
    VariableName(&'a str),

    #[regex(r"[_a-zA-Z][_0-9a-zA-Z]*", |lex| lex.slice())]
    Name(&'a str),

    #[regex(r"-?([1-9][0-9]*|0)[.][0-9]+([eE][+-]?[0-9]+)?")]
    #[regex("-?([1-9][0-9]*|0)[eE][+-]?[0-9]+")]
    Float(&'a str),

    #[regex(r"-?([1-9][0-9]*|0)")]
    Integer(&'a str),

    #[regex(r#"""?"?"#, parse_string)]
    String(&'a str),

    #[error]
    #[regex(r"([ ,\t\n\r\f]+|#[^\n\r]*)+", logos::skip)]
    Error,

    /// Token indicates the end of the input
    End,
}

#[derive(Logos, Debug, PartialEq)]
pub(crate) enum BlockPart {
    #[regex(r#"[^"\\\r\n]+"#)]
    #[regex(r#""+"#)]
    Text,

    #[regex(r"(\r|\n|\r\n)[\t ]*")]
    Newline,

    #[regex(r#"\\""""#)]
    EscapedEndBlock,

    #[regex(r#"\\."#)]
    EscapedSequence,

    #[token(r#"""""#)]
    EndBlock,

    #[error]
    Error,
}

#[derive(Logos, Debug, PartialEq)]
pub(crate) enum StringPart {
    #[regex(r#"[^\n\r\\"]+"#)]
    Text,

    #[regex(r"\\u[0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F]")]
    EscapedCodepoint,

    #[token(r#"\""#)]
    EscapedQuote,
    #[token(r#"\\"#)]
    EscapedBackslash,
    #[token(r#"\/"#)]
    EscapedSlash,
    #[token(r#"\b"#)]
    EscapedBackspace,
    #[token(r#"\f"#)]
    EscapedLinefeed,
    #[token(r#"\n"#)]
    EscapedNewline,
    #[token(r#"\r"#)]
    EscapedReturn,
    #[token(r#"\t"#)]
    EscapedTab,

    #[token("\"")]
    EndString,

    #[error]
    Error,
}

#[inline]
fn lex_string<'a>(lex: &mut Lexer<'a, Token<'a>>, mut output: String) -> Option<&'a str> {
    let mut sublex = StringPart::lexer(lex.remainder());
    while let Some(token) = sublex.next() {
        match token {
            StringPart::Error => break,
            StringPart::Text => output.push_str(sublex.slice()),
            StringPart::EscapedQuote => output.push('"'),
            StringPart::EscapedBackslash => output.push('\\'),
            StringPart::EscapedSlash => output.push('/'),
            StringPart::EscapedBackspace => output.push(8 as char),
            StringPart::EscapedLinefeed => output.push(12 as char),
            StringPart::EscapedNewline => output.push('\n'),
            StringPart::EscapedReturn => output.push('\r'),
            StringPart::EscapedTab => output.push('\t'),
            StringPart::EscapedCodepoint => {
                use lexical_core::*;
                const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
                const OPTIONS: ParseIntegerOptions = ParseIntegerOptions::new();
                output.push(
                    parse_with_options::<u32, FORMAT>(sublex.slice()[2..].as_bytes(), &OPTIONS)
                        .ok()
                        .and_then(std::char::from_u32)?,
                );
            }
            StringPart::EndString => {
                lex.bump_unchecked(sublex.span().end);
                return Some(lex.extras.arena.alloc(output));
            }
        }
    }
    None
}

#[inline]
fn lex_block_string<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Option<&'a str> {
    let mut output = String::new();
    let mut sublex = BlockPart::lexer(lex.remainder());
    let mut min_indent: usize = usize::MAX;
    while let Some(token) = sublex.next() {
        match token {
            BlockPart::EscapedSequence | BlockPart::Text => output.push_str(sublex.slice()),
            BlockPart::EscapedEndBlock => output.push_str("\"\"\""),
            BlockPart::Newline => {
                let mut slice = &sublex.slice()[1..];
                if !slice.is_empty() && &slice[0..1] == "\n" {
                    slice = &slice[1..];
                };
                let indent = slice.len();
                if indent > 0 && indent < min_indent {
                    min_indent = indent;
                }
                output.push('\n');
                output.push_str(slice);
            }
            BlockPart::EndBlock => {
                lex.bump_unchecked(sublex.span().end);
                if min_indent == usize::MAX {
                    min_indent = 0;
                }
                let mut lines = output.lines();
                let mut output = String::with_capacity(output.len());
                if let Some(first) = lines.next() {
                    let stripped = first.trim();
                    if !stripped.is_empty() {
                        output.push_str(stripped);
                        output.push('\n');
                    }
                }
                let mut last_line = 0;
                for line in lines {
                    last_line = output.len();
                    if line.len() > min_indent {
                        output.push_str(&line[min_indent..]);
                    }
                    output.push('\n');
                }
                if output[last_line..].trim().is_empty() {
                    output.truncate(last_line);
                }
                return Some(lex.extras.arena.alloc(output));
            }
            BlockPart::Error => break,
        }
    }
    None
}

fn parse_string<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Option<&'a str> {
    match lex.slice() {
        r#""""# => Some(""),
        r#"""""# => lex_block_string(lex),
        "\"" => {
            // Scan ahead for escape codes first so simple strings avoid the
            // full StringPart sub-lexer
            let remainder = lex.remainder();
            for (i, c) in remainder.char_indices() {
                match c {
                    '\n' | '\r' => return None,
                    '\\' => {
                        lex.bump_unchecked(i);
                        return lex_string(lex, remainder[0..i].to_string());
                    }
                    '"' => {
                        lex.bump_unchecked(i + 1);
                        return Some(&remainder[0..i]);
                    }
                    _ => {}
                }
            }
            None
        }
        _ => None,
    }
}
