/// Parser entry points and statement sequences.
///
/// Defines the `ParseResult` alias, the program entry point, statement lists,
/// blocks, and the top of the expression grammar.
pub mod core;

/// Assignment parsing.
///
/// Recognizes `mut name = value`, `name = value` and `object.name = value`.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the logical, comparison, additive and multiplicative levels.
pub mod binary;

/// Unary operators and call chains.
///
/// Handles prefix `+`, `-`, `!` and the `(...)`, `[...]`, `.name` suffixes.
pub mod unary;

/// Primary expressions.
///
/// Literals, identifiers, parenthesized expressions, functions, objects,
/// arrays, `while` and `if`.
pub mod primary;

/// Interpolated string parsing.
///
/// Splits the body of a double-quoted string into text and embedded
/// expressions.
pub mod interpolation;

/// Utility functions for the parser.
///
/// Provides helpers for expected tokens, identifiers, newline handling and
/// comma-separated lists.
pub mod utils;
