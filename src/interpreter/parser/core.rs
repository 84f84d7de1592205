use std::iter::Peekable;

use crate::{
    ast::{Node, NodeKind, Position},
    error::ParseError,
    interpreter::{
        lexer::{Token, end_position, tokenize},
        parser::{
            binary::parse_logical_or,
            statement::{finish_property_assignment, parse_assignment},
            utils::expect,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// The source is tokenized, parsed as a statement sequence, and every token
/// must be consumed. An unexpected end of input is reported at the position
/// just past the last character.
///
/// # Errors
/// Returns a `ParseError` for any lexical or syntax error.
///
/// # Example
/// ```
/// use culebra::{ast::NodeKind, interpreter::parser::core::parse_program};
///
/// let program = parse_program("x = 1; x").unwrap();
/// let NodeKind::Statements(statements) = program.kind else { panic!() };
/// assert_eq!(statements.len(), 2);
/// ```
pub fn parse_program(source: &str) -> ParseResult<Node> {
    let start = Position::new(1, 1);
    let parse = || -> ParseResult<Node> {
        let tokens = tokenize(source)?;
        let mut iter = tokens.iter().peekable();
        let program = parse_statements(&mut iter, start)?;

        match iter.next() {
            None => Ok(program),
            Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    format!("{tok:?}"),
                                                                       position: *position, }),
        }
    };

    parse().map_err(|e| match e {
               ParseError::UnexpectedEndOfInput { .. } => {
                   ParseError::UnexpectedEndOfInput { position: end_position(source, start) }
               },
               e => e,
           })
}

/// Parses a sequence of expressions separated by `;` or newlines.
///
/// Parsing stops at a closing `}` or at the end of input; neither is
/// consumed. Empty statements are skipped.
///
/// Grammar: `statements := (expression ((";" | NL)+ expression)*)? (";" |
/// NL)*`
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `position`: Position reported for the sequence node.
///
/// # Errors
/// Returns a `ParseError` if a statement is malformed or two expressions are
/// not separated.
pub fn parse_statements<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut statements = Vec::new();

    loop {
        while let Some((Token::NewLine | Token::Semicolon, _)) = tokens.peek() {
            tokens.next();
        }

        match tokens.peek() {
            None | Some((Token::RBrace, _)) => break,
            Some(_) => statements.push(parse_expression(tokens)?),
        }

        match tokens.peek() {
            None | Some((Token::RBrace | Token::NewLine | Token::Semicolon, _)) => {},
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:    format!("expected ';' or newline, found {tok:?}"),
                                                         position: *position, });
            },
        }
    }

    Ok(Node::new(NodeKind::Statements(statements), position))
}

/// Parses a braced statement block `{ ... }`.
///
/// # Errors
/// Returns a `ParseError` if either brace is missing or a statement is
/// malformed.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let position = expect(tokens, &Token::LBrace, "'{'")?;
    let body = parse_statements(tokens, position)?;
    expect(tokens, &Token::RBrace, "'}'")?;
    Ok(body)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. Assignments are tried
/// first; otherwise parsing begins at the lowest-precedence level, logical
/// OR, and a trailing `=` turns a property access into a property
/// assignment.
///
/// Grammar: `expression := assignment | logical_or`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    if let Some(assignment) = parse_assignment(tokens)? {
        return Ok(assignment);
    }

    let expr = parse_logical_or(tokens)?;

    match tokens.peek() {
        Some((Token::Equals, _)) => finish_property_assignment(expr, tokens),
        _ => Ok(expr),
    }
}
