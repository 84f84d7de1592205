use std::rc::Rc;

use crate::{
    ast::{Node, Position, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a prefix operator applied to an operand node.
    pub(super) fn eval_unary(&mut self,
                             op: UnaryOperator,
                             operand: &Node,
                             position: Position,
                             env: &Rc<Environment>)
                             -> EvalResult<Value> {
        let value = self.evaluate(operand, env)?;
        Self::apply_unary(op, &value, position)
    }

    /// Applies a unary operator to a value.
    ///
    /// Supported operators:
    /// - `Plus`: identity, for any value.
    /// - `Minus`: integer negation; other types are a type error.
    /// - `Not`: inverts truthiness, for any value.
    ///
    /// # Example
    /// ```
    /// use culebra::{
    ///     ast::{Position, UnaryOperator},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let pos = Position::default();
    /// let v = Context::apply_unary(UnaryOperator::Minus, &Value::Integer(5), pos).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::apply_unary(UnaryOperator::Not, &Value::Null, pos).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn apply_unary(op: UnaryOperator, value: &Value, position: Position) -> EvalResult<Value> {
        match op {
            UnaryOperator::Plus => Ok(value.clone()),
            UnaryOperator::Minus => {
                let n = value.to_integer(position)?;
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { position })
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}
