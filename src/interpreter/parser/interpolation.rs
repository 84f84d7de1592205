use crate::{
    ast::{Node, NodeKind, Position},
    error::ParseError,
    interpreter::{
        lexer::{end_position, tokenize_at},
        parser::{
            core::{ParseResult, parse_expression},
            utils::skip_newlines,
        },
    },
};

/// Parses the body of a double-quoted string into text and expression parts.
///
/// Text segments become `NodeKind::Text` nodes with escapes (`\n`, `\t`, and
/// a backslash before any other character) decoded. Each `${ ... }` segment
/// is lexed and parsed as a full expression; its tokens report positions in
/// the enclosing source.
///
/// # Parameters
/// - `raw`: The string body without its quotes.
/// - `position`: Position of the opening quote.
///
/// # Errors
/// - `UnterminatedInterpolation` if a `${` has no matching `}`.
/// - Any error from lexing or parsing an embedded expression.
///
/// # Example
/// ```
/// use culebra::{
///     ast::{NodeKind, Position},
///     interpreter::parser::interpolation::parse_interpolated_string,
/// };
///
/// let node = parse_interpolated_string("${1 + 2} apples", Position::new(1, 1)).unwrap();
/// let NodeKind::InterpolatedString(parts) = node.kind else { panic!() };
/// assert_eq!(parts.len(), 2);
/// ```
pub fn parse_interpolated_string(raw: &str, position: Position) -> ParseResult<Node> {
    let body_start = Position::new(position.line, position.column + 1);
    let mut parts = Vec::new();
    let mut text = String::new();
    let mut text_start = body_start;
    let mut chars = raw.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, 'n')) => text.push('\n'),
                Some((_, 't')) => text.push('\t'),
                Some((_, escaped)) => text.push(escaped),
                None => text.push('\\'),
            },
            '$' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                if !text.is_empty() {
                    parts.push(Node::new(NodeKind::Text(std::mem::take(&mut text)), text_start));
                }

                let expr_start = offset + 2;
                let expr_end = matching_brace(raw, expr_start).ok_or(
                    ParseError::UnterminatedInterpolation { position: end_position(&raw[..offset],
                                                                                   body_start) },
                )?;
                let expr_position = end_position(&raw[..expr_start], body_start);
                parts.push(parse_embedded(&raw[expr_start..expr_end], expr_position)?);

                while chars.next_if(|(o, _)| *o <= expr_end).is_some() {}
                text_start = end_position(&raw[..=expr_end], body_start);
            },
            c => text.push(c),
        }
    }

    if !text.is_empty() {
        parts.push(Node::new(NodeKind::Text(text), text_start));
    }

    Ok(Node::new(NodeKind::InterpolatedString(parts), position))
}

/// Parses the text between `${` and `}` as exactly one expression.
fn parse_embedded(source: &str, start: Position) -> ParseResult<Node> {
    let tokens = tokenize_at(source, start)?;
    let mut iter = tokens.iter().peekable();

    skip_newlines(&mut iter);
    let expr = parse_expression(&mut iter).map_err(|e| match e {
                                                ParseError::UnexpectedEndOfInput { .. } => {
                                                    ParseError::UnexpectedEndOfInput { position: end_position(source, start) }
                                                },
                                                e => e,
                                            })?;
    skip_newlines(&mut iter);

    match iter.next() {
        None => Ok(expr),
        Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    format!("{tok:?}"),
                                                                   position: *position, }),
    }
}

/// Finds the byte offset of the `}` closing an interpolation that starts at
/// `start`, accounting for nested braces. Braces inside `'...'` strings are
/// text.
fn matching_brace(raw: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quoted = false;
    for (offset, c) in raw[start..].char_indices() {
        match c {
            '\'' => quoted = !quoted,
            _ if quoted => {},
            '{' => depth += 1,
            '}' if depth == 0 => return Some(start + offset),
            '}' => depth -= 1,
            _ => {},
        }
    }
    None
}

