/// Function values.
///
/// Defines `Function`, its parameter list and the three kinds of body a
/// function can have: a closure over an AST body, a method bound to a
/// receiver, or a native built-in.
pub mod function;
/// Built-in properties.
///
/// Resolves `.name` accesses on objects, arrays and strings, including the
/// native methods arrays expose.
pub mod property;

/// The `Value` enum and its conversions, comparisons and display.
pub mod core;
