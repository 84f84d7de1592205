use std::iter::Peekable;

use crate::{
    ast::{Node, NodeKind, Position, SuffixKind},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier, skip_newlines},
        },
    },
};

/// Parses a name assignment.
///
/// Two forms are recognized:
/// - `mut <identifier> = <expression>` declares (or reassigns) a mutable
///   binding,
/// - `<identifier> = <expression>` assigns, or declares an immutable binding
///   when the name is not yet defined.
///
/// If neither form is present, this function returns `Ok(None)` and does not
/// consume any input.
///
/// # Errors
/// Returns a `ParseError` if `mut` is not followed by `<identifier> =`, or the
/// right-hand side is malformed.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Node>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    if let Some((Token::Mut, position)) = tokens.peek() {
        let position = *position;
        tokens.next();

        let (name, _) = parse_identifier(tokens)?;
        expect(tokens, &Token::Equals, "'=' after mutable variable name")?;
        skip_newlines(tokens);
        let value = parse_expression(tokens)?;

        return Ok(Some(Node::new(NodeKind::Assignment { mutable: true,
                                                        name,
                                                        value: Box::new(value) },
                                 position)));
    }

    let mut lookahead = tokens.clone();
    if let Some((Token::Identifier(name), position)) = lookahead.next()
       && let Some((Token::Equals, _)) = lookahead.next()
    {
        tokens.next();
        tokens.next();
        skip_newlines(tokens);
        let value = parse_expression(tokens)?;

        return Ok(Some(Node::new(NodeKind::Assignment { mutable: false,
                                                        name:    name.clone(),
                                                        value:   Box::new(value), },
                                 *position)));
    }

    Ok(None)
}

/// Completes `object.name = value` once the `=` has been seen.
///
/// The already-parsed target must be a call chain ending in a property
/// suffix; the chain without that suffix becomes the receiver expression.
///
/// # Errors
/// Returns `ParseError::InvalidAssignmentTarget` for any other target.
pub fn finish_property_assignment<'a, I>(target: Node, tokens: &mut Peekable<I>)
                                         -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let position = target.position;
    let NodeKind::Call { callee, mut suffixes } = target.kind else {
        return Err(ParseError::InvalidAssignmentTarget { position });
    };
    let Some(last) = suffixes.pop() else {
        return Err(ParseError::InvalidAssignmentTarget { position });
    };
    let SuffixKind::Property(name) = last.kind else {
        return Err(ParseError::InvalidAssignmentTarget { position: last.position });
    };

    expect(tokens, &Token::Equals, "'='")?;
    skip_newlines(tokens);
    let value = parse_expression(tokens)?;

    let object = if suffixes.is_empty() {
        *callee
    } else {
        Node::new(NodeKind::Call { callee, suffixes }, position)
    };

    Ok(Node::new(NodeKind::PropertyAssignment { object: Box::new(object),
                                                name,
                                                value: Box::new(value) },
                 position))
}
