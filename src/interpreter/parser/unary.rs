use std::iter::Peekable;

use crate::{
    ast::{Node, NodeKind, Position, Suffix, SuffixKind, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_multiplicative,
            core::{ParseResult, parse_expression},
            primary::parse_primary,
            utils::{expect, parse_comma_separated, parse_identifier, skip_newlines},
        },
    },
};

/// Parses prefix operators.
///
/// A prefix operator applies to everything up to the next additive operator,
/// so `-2 * 3` is the negation of `2 * 3`.
///
/// The rule is: `unary := ("+" | "-" | "!") unary | multiplicative`
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        Some((Token::Minus, _)) => UnaryOperator::Minus,
        Some((Token::Bang, _)) => UnaryOperator::Not,
        _ => return parse_multiplicative(tokens),
    };

    let position = match tokens.next() {
        Some((_, position)) => *position,
        None => Position::default(),
    };
    let operand = parse_unary(tokens)?;

    Ok(Node::new(NodeKind::Unary { op,
                                   operand: Box::new(operand) },
                 position))
}

/// Parses a primary expression followed by any number of suffixes.
///
/// Suffixes are argument lists, index brackets and property accesses. A
/// suffix must start on the same line as the expression it applies to.
///
/// The rule is: `call := primary (arguments | index | "." identifier)*`
pub fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let callee = parse_primary(tokens)?;
    let mut suffixes = Vec::new();

    loop {
        let suffix = match tokens.peek() {
            Some((Token::LParen, position)) => {
                let position = *position;
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                Suffix { kind: SuffixKind::Arguments(arguments),
                         position }
            },
            Some((Token::LBracket, position)) => {
                let position = *position;
                tokens.next();
                skip_newlines(tokens);
                let index = parse_expression(tokens)?;
                skip_newlines(tokens);
                expect(tokens, &Token::RBracket, "']'")?;
                Suffix { kind: SuffixKind::Index(Box::new(index)),
                         position }
            },
            Some((Token::Dot, position)) => {
                let position = *position;
                tokens.next();
                let (name, _) = parse_identifier(tokens)?;
                Suffix { kind: SuffixKind::Property(name),
                         position }
            },
            _ => break,
        };
        suffixes.push(suffix);
    }

    if suffixes.is_empty() {
        return Ok(callee);
    }

    let position = callee.position;
    Ok(Node::new(NodeKind::Call { callee: Box::new(callee),
                                  suffixes },
                 position))
}
