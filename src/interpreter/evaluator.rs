/// Core evaluation logic and context management.
///
/// Contains the `Context` that carries evaluation settings, the exhaustive
/// dispatch over node kinds, and statement sequences and identifiers.
pub mod core;

/// Control flow evaluation.
///
/// `while` loops, `if` chains and the short-circuiting `||` and `&&`.
pub mod control;

/// Function literals and call chains.
///
/// Builds closures, applies argument, index and property suffixes, binds
/// methods to their receivers, and invokes functions of every kind.
pub mod call;

/// Binary operator evaluation.
///
/// Comparisons and the flat additive/multiplicative integer folds.
pub mod binary;

/// Unary operator evaluation.
///
/// Prefix plus, minus and logical NOT.
pub mod unary;

/// Literal evaluation.
///
/// Numbers, booleans, strings, interpolated strings, arrays and objects.
pub mod literal;

/// Assignment evaluation.
///
/// Name assignment doubling as declaration, and property assignment.
pub mod assignment;
