use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Node, Position},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `left <op> right` for one of the six comparison operators.
    pub(super) fn eval_comparison(&mut self,
                                  left: &Node,
                                  op: ComparisonOperator,
                                  right: &Node,
                                  position: Position,
                                  env: &Rc<Environment>)
                                  -> EvalResult<Value> {
        let lhs = self.evaluate(left, env)?;
        let rhs = self.evaluate(right, env)?;
        Ok(Value::Bool(lhs.compare(op, &rhs, position)?))
    }

    /// Folds an additive or multiplicative sequence from left to right.
    ///
    /// Every operand must be an integer. Each operator reports errors at the
    /// position of the operand to its right.
    pub(super) fn eval_binary(&mut self,
                              first: &Node,
                              rest: &[(BinaryOperator, Node)],
                              env: &Rc<Environment>)
                              -> EvalResult<Value> {
        let mut result = self.evaluate(first, env)?.to_integer(first.position)?;

        for (op, operand) in rest {
            let rhs = self.evaluate(operand, env)?.to_integer(operand.position)?;
            result = Self::apply_arithmetic(*op, result, rhs, operand.position)?;
        }

        Ok(Value::Integer(result))
    }

    /// Applies one arithmetic operator to two integers.
    ///
    /// Division truncates toward zero and the remainder takes the sign of the
    /// dividend.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` or `%` with a zero divisor.
    /// - `Overflow` if the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use culebra::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let pos = Position::default();
    /// assert_eq!(Context::apply_arithmetic(BinaryOperator::Div, 7, 2, pos).unwrap(), 3);
    /// assert!(Context::apply_arithmetic(BinaryOperator::Mod, 7, 0, pos).is_err());
    /// ```
    pub fn apply_arithmetic(op: BinaryOperator,
                            lhs: i64,
                            rhs: i64,
                            position: Position)
                            -> EvalResult<i64> {
        if matches!(op, BinaryOperator::Div | BinaryOperator::Mod) && rhs == 0 {
            return Err(RuntimeError::DivisionByZero { position });
        }

        let result = match op {
            BinaryOperator::Add => lhs.checked_add(rhs),
            BinaryOperator::Sub => lhs.checked_sub(rhs),
            BinaryOperator::Mul => lhs.checked_mul(rhs),
            BinaryOperator::Div => lhs.checked_div(rhs),
            BinaryOperator::Mod => lhs.checked_rem(rhs),
        };

        result.ok_or(RuntimeError::Overflow { position })
    }
}
