use std::iter::Peekable;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes any run of newline tokens.
///
/// Newlines only matter as statement separators; inside brackets, after
/// operators and after separators such as `,` they are skipped with this
/// helper.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, Position)>
{
    while let Some((Token::NewLine, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Returns the next token that is not a newline, without consuming anything.
pub(in crate::interpreter::parser) fn peek_past_newlines<'a, I>(tokens: &Peekable<I>)
                                                                -> Option<&'a Token>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    tokens.clone()
          .map(|(token, _)| token)
          .find(|token| **token != Token::NewLine)
}

/// Consumes the next token, which must equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The token that must come next.
/// - `what`: Human-readable description used in the error message.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if the next token differs or the input ends.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    what: &str)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((tok, position)) if tok == expected => Ok(*position),
        Some((tok, position)) => {
            Err(ParseError::UnexpectedToken { token:    format!("expected {what}, found {tok:?}"),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: Position::default() }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, object literals, argument lists
/// and parameter lists. Newlines around items are ignored and a trailing
/// comma before the closing token is accepted. An immediately encountered
/// closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)* ","?)? closing`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut items = Vec::new();
    loop {
        skip_newlines(tokens);
        if let Some((tok, _)) = tokens.peek()
           && tok == closing
        {
            tokens.next();
            return Ok(items);
        }

        items.push(parse_item(tokens)?);
        skip_newlines(tokens);

        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => return Ok(items),
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:    format!("expected ',' or {closing:?}, found {tok:?}"),
                                                         position: *position, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { position: Position::default() }),
        }
    }
}

/// Parses a plain identifier and returns its name and position.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Identifier(name), position)) => Ok((name.clone(), *position)),
        Some((tok, position)) => {
            Err(ParseError::UnexpectedToken { token:    format!("expected identifier, found {tok:?}"),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: Position::default() }),
    }
}
