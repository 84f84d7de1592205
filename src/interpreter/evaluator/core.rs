use std::rc::Rc;

use crate::{
    ast::{Node, NodeKind},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on nested function calls.
pub const MAX_CALL_DEPTH: usize = 512;

/// Minimum stack space kept free before recursing into a child node.
const RED_ZONE: usize = 128 * 1024;
/// Stack space allocated each time the stack has to grow.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Stores the runtime evaluation context.
///
/// All program state lives in `Environment` frames and values; the context
/// only carries evaluation settings and the current call depth.
///
/// ## Usage
///
/// A `Context` is created once per program run and its [`Context::evaluate`]
/// method is called on the root node with the root environment.
#[derive(Debug, Clone)]
pub struct Context {
    /// Calls nested deeper than this fail with `CallDepthExceeded`.
    pub max_call_depth: usize,
    /// Number of calls currently executing.
    pub(crate) depth:   usize,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with the default call depth limit.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_call_depth(MAX_CALL_DEPTH)
    }

    /// Creates a context that allows at most `max_call_depth` nested calls.
    #[must_use]
    pub const fn with_max_call_depth(max_call_depth: usize) -> Self {
        Self { max_call_depth,
               depth: 0 }
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// on the node kind; every kind is handled here, so a new kind cannot be
    /// added without deciding how it evaluates.
    ///
    /// # Parameters
    /// - `node`: Node to evaluate.
    /// - `env`: Frame used for name resolution and declarations.
    ///
    /// # Errors
    /// Any `RuntimeError`; evaluation stops at the first one.
    ///
    /// # Example
    /// ```
    /// use culebra::interpreter::{
    ///     environment::Environment, evaluator::core::Context, parser::core::parse_program,
    ///     value::core::Value,
    /// };
    ///
    /// let program = parse_program("mut x = 2; x = x * 21").unwrap();
    /// let value = Context::new().evaluate(&program, &Environment::new()).unwrap();
    /// assert_eq!(value, Value::Integer(42));
    /// ```
    pub fn evaluate(&mut self, node: &Node, env: &Rc<Environment>) -> EvalResult<Value> {
        stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || self.dispatch(node, env))
    }

    fn dispatch(&mut self, node: &Node, env: &Rc<Environment>) -> EvalResult<Value> {
        let position = node.position;
        match &node.kind {
            NodeKind::Statements(statements) => self.eval_statements(statements, env),
            NodeKind::While { condition, body } => self.eval_while(condition, body, env),
            NodeKind::If { branches, otherwise } => {
                self.eval_if(branches, otherwise.as_deref(), env)
            },
            NodeKind::Function { params, body } => Ok(Self::eval_function(params, body, env)),
            NodeKind::Call { callee, suffixes } => self.eval_call(callee, suffixes, position, env),
            NodeKind::Assignment { mutable,
                                   name,
                                   value, } => {
                self.eval_assignment(*mutable, name, value, position, env)
            },
            NodeKind::PropertyAssignment { object, name, value } => {
                self.eval_property_assignment(object, name, value, env)
            },
            NodeKind::LogicalOr(operands) => self.eval_logical_or(operands, env),
            NodeKind::LogicalAnd(operands) => self.eval_logical_and(operands, env),
            NodeKind::Comparison { left, op, right } => {
                self.eval_comparison(left, *op, right, position, env)
            },
            NodeKind::Unary { op, operand } => self.eval_unary(*op, operand, position, env),
            NodeKind::Binary { first, rest } => self.eval_binary(first, rest, env),
            NodeKind::Identifier(name) => env.get(name, position),
            NodeKind::Object(properties) => self.eval_object(properties, env),
            NodeKind::Array(elements) => self.eval_array(elements, env),
            NodeKind::Number(text) => Self::eval_number(text, position),
            NodeKind::Boolean(b) => Ok(Value::Bool(*b)),
            NodeKind::Undefined => Ok(Value::Null),
            NodeKind::InterpolatedString(parts) => self.eval_interpolated_string(parts, env),
            NodeKind::Text(text) => Ok(Value::String(text.clone())),
        }
    }

    /// Evaluates statements in order; the value of the last one is the value
    /// of the sequence, and an empty sequence is `undefined`.
    fn eval_statements(&mut self, statements: &[Node], env: &Rc<Environment>) -> EvalResult<Value> {
        let mut result = Value::Null;
        for statement in statements {
            result = self.evaluate(statement, env)?;
        }
        Ok(result)
    }
}
