use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Node, NodeKind, Parameter, Position},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_block, parse_expression},
            interpolation::parse_interpolated_string,
            utils::{
                expect, parse_comma_separated, parse_identifier, peek_past_newlines, skip_newlines,
            },
        },
    },
};

/// Parses a primary expression.
///
/// Handles literals, identifiers, strings, parenthesized expressions, and the
/// keyword-introduced constructs `while`, `if` and `fn`. In this position `{`
/// always starts an object literal.
///
/// # Errors
/// Returns a `ParseError` if no primary expression starts here.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let Some((token, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { position: Position::default() });
    };
    let position = *position;

    let kind = match token {
        Token::Number(text) => NodeKind::Number(text.clone()),
        Token::True => NodeKind::Boolean(true),
        Token::False => NodeKind::Boolean(false),
        Token::Undefined => NodeKind::Undefined,
        Token::Identifier(name) => NodeKind::Identifier(name.clone()),
        Token::Str(text) => NodeKind::Text(text.clone()),
        Token::InterpolatedStr(raw) => return parse_interpolated_string(raw, position),
        Token::LParen => {
            skip_newlines(tokens);
            let expr = parse_expression(tokens)?;
            skip_newlines(tokens);
            expect(tokens, &Token::RParen, "')'")?;
            return Ok(expr);
        },
        Token::While => parse_while(tokens)?,
        Token::If => parse_if(tokens)?,
        Token::Fn => parse_function(tokens)?,
        Token::LBrace => parse_object(tokens)?,
        Token::LBracket => {
            NodeKind::Array(parse_comma_separated(tokens, parse_expression, &Token::RBracket)?)
        },
        tok => {
            return Err(ParseError::UnexpectedToken { token: format!("expected expression, found {tok:?}"),
                                                     position });
        },
    };

    Ok(Node::new(kind, position))
}

/// Parses the rest of a `while` loop after the keyword.
///
/// Syntax: `while <condition> { <statements> }`
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<NodeKind>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    Ok(NodeKind::While { condition: Box::new(condition),
                         body:      Box::new(body), })
}

/// Parses the rest of an `if` chain after the keyword.
///
/// Syntax:
/// ```text
///     if <condition> { ... }
///     else if <condition> { ... }
///     else { ... }
/// ```
/// `else` may start on a following line.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<NodeKind>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut branches = Vec::new();
    let mut otherwise = None;

    loop {
        let condition = parse_expression(tokens)?;
        let branch = parse_block(tokens)?;
        branches.push((condition, branch));

        if peek_past_newlines(tokens) != Some(&Token::Else) {
            break;
        }
        skip_newlines(tokens);
        tokens.next();

        if let Some((Token::If, _)) = tokens.peek() {
            tokens.next();
            continue;
        }

        otherwise = Some(Box::new(parse_block(tokens)?));
        break;
    }

    Ok(NodeKind::If { branches, otherwise })
}

/// Parses a function literal after the `fn` keyword.
///
/// Syntax: `fn(<param>, mut <param>, ...) { <statements> }`
fn parse_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<NodeKind>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    expect(tokens, &Token::LParen, "'(' after 'fn'")?;
    let params = parse_comma_separated(tokens, parse_parameter, &Token::RParen)?;
    let body = parse_block(tokens)?;

    Ok(NodeKind::Function { params,
                            body: Rc::new(body) })
}

/// Parses one `mut? <identifier>` parameter.
fn parse_parameter<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Parameter>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mutable = if let Some((Token::Mut, _)) = tokens.peek() {
        tokens.next();
        true
    } else {
        false
    };
    let (name, _) = parse_identifier(tokens)?;

    Ok(Parameter { name, mutable })
}

/// Parses an object literal after its opening brace.
///
/// Syntax: `{ name: <expression>, ... }`
fn parse_object<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<NodeKind>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let properties = parse_comma_separated(tokens,
                                           |tokens| {
                                               let (name, _) = parse_identifier(tokens)?;
                                               expect(tokens, &Token::Colon, "':'")?;
                                               skip_newlines(tokens);
                                               Ok((name, parse_expression(tokens)?))
                                           },
                                           &Token::RBrace)?;

    Ok(NodeKind::Object(properties))
}
