use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Node, NodeKind, Position},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::{parse_call, parse_unary},
            utils::skip_newlines,
        },
    },
};

/// Parses logical OR expressions.
///
/// Operands are collected into one flat node so the evaluator can
/// short-circuit left to right. A single operand is returned unchanged.
///
/// The rule is: `logical_or := logical_and ("||" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let first = parse_logical_and(tokens)?;
    let position = first.position;
    let mut operands = vec![first];

    while let Some((Token::OrOr, _)) = tokens.peek() {
        tokens.next();
        skip_newlines(tokens);
        operands.push(parse_logical_and(tokens)?);
    }

    Ok(collapse(operands, position, NodeKind::LogicalOr))
}

/// Parses logical AND expressions.
///
/// The rule is: `logical_and := condition ("&&" condition)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let first = parse_condition(tokens)?;
    let position = first.position;
    let mut operands = vec![first];

    while let Some((Token::AndAnd, _)) = tokens.peek() {
        tokens.next();
        skip_newlines(tokens);
        operands.push(parse_condition(tokens)?);
    }

    Ok(collapse(operands, position, NodeKind::LogicalAnd))
}

/// Parses a single, non-associative comparison.
///
/// Handles `==`, `!=`, `<=`, `<`, `>=` and `>`.
///
/// The rule is: `condition := additive (comparison_operator additive)?`
pub fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let left = parse_additive(tokens)?;

    if let Some((token, _)) = tokens.peek()
       && let Some(op) = token_to_comparison_operator(token)
    {
        tokens.next();
        skip_newlines(tokens);
        let right = parse_additive(tokens)?;
        let position = left.position;
        return Ok(Node::new(NodeKind::Comparison { left: Box::new(left),
                                                   op,
                                                   right: Box::new(right) },
                            position));
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Operands are unary expressions; the result is one flat fold node that the
/// evaluator reduces left to right.
///
/// The rule is: `additive := unary (("+" | "-") unary)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_fold(tokens,
               parse_unary,
               |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub))
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := call (("*" | "/" | "%") call)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_fold(tokens,
               parse_call,
               |op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod))
}

/// Shared loop of the additive and multiplicative levels.
fn parse_fold<'a, I>(tokens: &mut Peekable<I>,
                     parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Node>,
                     accepts: impl Fn(BinaryOperator) -> bool)
                     -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let first = parse_operand(tokens)?;
    let mut rest = Vec::new();

    while let Some((token, _)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepts(op)
    {
        tokens.next();
        skip_newlines(tokens);
        rest.push((op, parse_operand(tokens)?));
    }

    if rest.is_empty() {
        return Ok(first);
    }

    let position = first.position;
    Ok(Node::new(NodeKind::Binary { first: Box::new(first),
                                    rest },
                 position))
}

/// Returns the only operand, or wraps several in the given node kind.
fn collapse(mut operands: Vec<Node>, position: Position, kind: fn(Vec<Node>) -> NodeKind) -> Node {
    if operands.len() == 1
       && let Some(only) = operands.pop()
    {
        return only;
    }
    Node::new(kind(operands), position)
}

/// Maps a token to the arithmetic operator it spells, if any.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}

/// Maps a token to the comparison operator it spells, if any.
const fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::EqualEqual => Some(ComparisonOperator::Equal),
        Token::BangEqual => Some(ComparisonOperator::NotEqual),
        Token::LessEqual => Some(ComparisonOperator::LessEqual),
        Token::Less => Some(ComparisonOperator::Less),
        Token::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        Token::Greater => Some(ComparisonOperator::Greater),
        _ => None,
    }
}
