use logos::Logos;

use crate::{ast::Position, error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens such as `42`, kept as text.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `undefined`
    #[token("undefined")]
    Undefined,
    /// `fn`
    #[token("fn")]
    Fn,
    /// `mut`
    #[token("mut")]
    Mut,
    /// `while`
    #[token("while")]
    While,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// Identifier tokens; variable or property names such as `x` or `push`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `'plain string'`, without the quotes.
    #[regex(r"'[^']*'", plain_string)]
    Str(String),
    /// `"interpolated ${string}"`, without the quotes and with escapes still
    /// encoded.
    #[regex(r#""([^"\\]|\\.)*""#, interpolated_string)]
    InterpolatedStr(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```
    /// // Multi line comments.
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| {
        track_newlines(lex);
        logos::Skip
    })]
    MultiLineComment,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// `=`
    #[token("=")]
    Equals,
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Line breaks separate statements.
    #[token("\n", |lex| {
        track_newlines(lex);
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so every
/// token can be given a line and column.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// Advances the line counter past every newline in the current slice.
fn track_newlines(lex: &mut logos::Lexer<Token>) {
    let start = lex.span().start;
    for (offset, _) in lex.slice().match_indices('\n') {
        lex.extras.line += 1;
        lex.extras.line_start = start + offset + 1;
    }
}

/// Strips the quotes off a plain string literal.
fn plain_string(lex: &mut logos::Lexer<Token>) -> String {
    track_newlines(lex);
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Strips the quotes off an interpolated string literal.
///
/// Escapes and `${...}` segments are left for the parser, which needs the raw
/// text to compute positions of embedded expressions.
fn interpolated_string(lex: &mut logos::Lexer<Token>) -> String {
    track_newlines(lex);
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Splits source text into `(Token, Position)` pairs, starting at line 1,
/// column 1.
///
/// # Errors
/// Returns `ParseError::UnrecognizedInput` for text no token matches.
///
/// # Example
/// ```
/// use culebra::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1").unwrap();
/// assert_eq!(tokens[0].0, Token::Identifier("x".to_string()));
/// assert_eq!(tokens[2].1.column, 5);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, Position)>> {
    tokenize_at(source, Position::new(1, 1))
}

/// Splits source text that begins at `start` inside a larger document.
///
/// Used for expressions embedded in interpolated strings, so their tokens
/// report positions relative to the enclosing file.
///
/// # Errors
/// Returns `ParseError::UnrecognizedInput` for text no token matches.
pub fn tokenize_at(source: &str, start: Position) -> ParseResult<Vec<(Token, Position)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line:       start.line,
                                                                   line_start: 0, });

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        // Tokens spanning lines have already moved the line counter past
        // their start.
        let position = if lexer.slice().contains('\n') {
            string_start(source, span.start, start)
        } else {
            position_of(span.start, lexer.extras.line, lexer.extras.line_start, start)
        };

        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                return Err(ParseError::UnrecognizedInput { text: lexer.slice().to_string(),
                                                           position });
            },
        }
    }

    Ok(tokens)
}

/// Returns the position just past the end of `source` when lexed from `start`.
#[must_use]
pub fn end_position(source: &str, start: Position) -> Position {
    string_start(source, source.len(), start)
}

/// Computes a position for a byte offset given the current line bookkeeping.
///
/// Columns on the first line are shifted by the column the source starts at.
const fn position_of(offset: usize, line: usize, line_start: usize, start: Position) -> Position {
    if line == start.line {
        Position::new(line, offset + start.column)
    } else {
        Position::new(line, offset.saturating_sub(line_start) + 1)
    }
}

/// Computes the position of `offset` by scanning the text before it.
fn string_start(source: &str, offset: usize, start: Position) -> Position {
    let before = &source[..offset];
    let newlines = before.matches('\n').count();
    match before.rfind('\n') {
        Some(last) => Position::new(start.line + newlines, offset - last),
        None => Position::new(start.line, offset + start.column),
    }
}
