//! # culebra
//!
//! culebra is a small dynamically typed scripting language with a
//! tree-walking evaluator written in Rust. It supports integers, booleans,
//! strings with interpolation, arrays, objects, closures, methods with
//! `this`, and `while`/`if` control flow.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::Node,
    error::Error,
    interpreter::{
        environment::Environment, evaluator::core::Context, parser::core::parse_program,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` type and related types that represent the
/// syntactic structure of source code as a tree. The tree is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines a node kind for every language construct.
/// - Attaches source positions to nodes for error reporting and for the
///   call-site bindings of function calls.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and source
/// locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line and column numbers to every error.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, environments, evaluation, value
/// representations and built-ins to provide a complete runtime for source code
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `usize` without silent data loss.
pub mod util;

/// Parses `source` into a program tree.
///
/// `path` is only used to render syntax errors as `path:line:column: message`.
///
/// # Errors
/// Returns `Error::Syntax` if the source cannot be parsed.
///
/// # Examples
/// ```
/// use culebra::parse;
///
/// assert!(parse("<script>", "x = 1 + 2").is_ok());
///
/// let err = parse("demo.culebra", "x = (1").unwrap_err();
/// assert!(err.to_string().starts_with("demo.culebra:1:"));
/// ```
pub fn parse(path: &str, source: &str) -> Result<Node, Error> {
    parse_program(source).map_err(|error| Error::Syntax { path: path.to_string(),
                                                         error })
}

/// Parses and evaluates a program in `env` and returns its final value.
///
/// The value of a program is the value of its last statement. Bindings the
/// program declares at top level are left in `env`, so an embedder can read
/// them afterwards or run further programs in the same environment.
///
/// # Errors
/// Returns `Error::Syntax` if parsing fails, in which case nothing is
/// evaluated, or `Error::Runtime` for the first runtime error raised.
///
/// # Examples
/// ```
/// use culebra::{
///     evaluate_program,
///     interpreter::{environment::Environment, prelude, value::core::Value},
/// };
///
/// let env = Environment::new();
/// prelude::install(&env);
///
/// let result = evaluate_program("<script>", &env, "mut n = 2; n = n * 21").unwrap();
/// assert_eq!(result, Value::Integer(42));
///
/// // Undefined names are runtime errors.
/// assert!(evaluate_program("<script>", &env, "missing + 1").is_err());
/// ```
pub fn evaluate_program(path: &str, env: &Rc<Environment>, source: &str) -> Result<Value, Error> {
    evaluate_program_with(&mut Context::new(), path, env, source)
}

/// Like [`evaluate_program`], with a caller-supplied evaluation context.
///
/// # Errors
/// Same as [`evaluate_program`].
///
/// # Examples
/// ```
/// use culebra::{
///     error::{Error, RuntimeError},
///     evaluate_program_with,
///     interpreter::{environment::Environment, evaluator::core::Context},
/// };
///
/// let env = Environment::new();
/// let mut context = Context::with_max_call_depth(10);
/// let err = evaluate_program_with(&mut context, "<script>", &env, "f = fn() { self() }; f()")
///     .unwrap_err();
/// assert!(matches!(err, Error::Runtime(RuntimeError::CallDepthExceeded { limit: 10, .. })));
/// ```
pub fn evaluate_program_with(context: &mut Context,
                             path: &str,
                             env: &Rc<Environment>,
                             source: &str)
                             -> Result<Value, Error> {
    let program = parse(path, source)?;
    debug!(path, "parsed program");

    let value = context.evaluate(&program, env)?;
    debug!(path, result = value.type_name(), "evaluated program");

    Ok(value)
}
