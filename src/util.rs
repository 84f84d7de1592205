/// Integer conversion helpers.
///
/// This module provides safe functions for converting between the `i64`
/// integers the language computes with and the `usize` lengths, indices and
/// source positions Rust uses, without silent truncation.
pub mod num;
