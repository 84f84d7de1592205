/// The environment module defines scope frames.
///
/// A frame stores bindings with a mutability flag, an ordered list of outer
/// frames, and optionally the object a method call runs on. Closures capture
/// the frame they are created in, and every call creates a fresh frame.
///
/// # Responsibilities
/// - Declares, resolves and reassigns names.
/// - Enforces immutability of bindings declared without `mut`.
/// - Exposes an associated object's properties as bare names.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST and produces a value for every node:
/// statements, loops, conditionals, calls, assignments, operators and
/// literals. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Implements the calling convention for closures, methods and built-ins.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, strings, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Skips whitespace and comments.
/// - Reports lexical errors for invalid input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the node tree the evaluator walks, including the expressions embedded in
/// interpolated strings.
pub mod parser;
/// Built-in functions every program starts with.
pub mod prelude;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum, the `Function` representation
/// shared by closures, bound methods and built-ins, and the properties the
/// built-in types expose.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements type checks, truthiness, equality, ordering and display.
/// - Resolves `.name` property accesses.
pub mod value;
