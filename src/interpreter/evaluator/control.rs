use std::rc::Rc;

use crate::{
    ast::Node,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Runs a `while` loop.
    ///
    /// The condition is evaluated before every iteration; the body runs while
    /// it is truthy. The loop itself always evaluates to `undefined`.
    pub(super) fn eval_while(&mut self,
                             condition: &Node,
                             body: &Node,
                             env: &Rc<Environment>)
                             -> EvalResult<Value> {
        while self.evaluate(condition, env)?.is_truthy() {
            self.evaluate(body, env)?;
        }
        Ok(Value::Null)
    }

    /// Evaluates an `if` / `else if` / `else` chain.
    ///
    /// Conditions are tested in order and the first truthy one selects its
    /// branch. Without a match the trailing `else` runs, and without an
    /// `else` the result is `undefined`.
    pub(super) fn eval_if(&mut self,
                          branches: &[(Node, Node)],
                          otherwise: Option<&Node>,
                          env: &Rc<Environment>)
                          -> EvalResult<Value> {
        for (condition, branch) in branches {
            if self.evaluate(condition, env)?.is_truthy() {
                return self.evaluate(branch, env);
            }
        }

        match otherwise {
            Some(branch) => self.evaluate(branch, env),
            None => Ok(Value::Null),
        }
    }

    /// Evaluates `a || b || ...`.
    ///
    /// Returns the first truthy operand without evaluating the rest, or the
    /// last operand's value if none is truthy.
    pub(super) fn eval_logical_or(&mut self,
                                  operands: &[Node],
                                  env: &Rc<Environment>)
                                  -> EvalResult<Value> {
        let mut result = Value::Null;
        for operand in operands {
            result = self.evaluate(operand, env)?;
            if result.is_truthy() {
                break;
            }
        }
        Ok(result)
    }

    /// Evaluates `a && b && ...`.
    ///
    /// Returns the first falsy operand without evaluating the rest, or the
    /// last operand's value if all are truthy.
    pub(super) fn eval_logical_and(&mut self,
                                   operands: &[Node],
                                   env: &Rc<Environment>)
                                   -> EvalResult<Value> {
        let mut result = Value::Null;
        for operand in operands {
            result = self.evaluate(operand, env)?;
            if !result.is_truthy() {
                break;
            }
        }
        Ok(result)
    }
}
