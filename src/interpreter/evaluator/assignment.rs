use std::rc::Rc;

use tracing::trace;

use crate::{
    ast::{Node, Position},
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `mut? name = value`.
    ///
    /// If `name` already resolves from `env`, the existing binding is
    /// overwritten, which fails for bindings declared without `mut`.
    /// Otherwise `name` is declared in `env` itself with the mutability
    /// written at the assignment. The assigned value is the result.
    pub(super) fn eval_assignment(&mut self,
                                  mutable: bool,
                                  name: &str,
                                  value: &Node,
                                  position: Position,
                                  env: &Rc<Environment>)
                                  -> EvalResult<Value> {
        let value = self.evaluate(value, env)?;

        if env.has(name) {
            env.assign(name, value.clone(), position)?;
        } else {
            trace!(name, mutable, %position, "declaring variable");
            env.initialize(name, value.clone(), mutable);
        }

        Ok(value)
    }

    /// Evaluates `object.name = value`.
    ///
    /// The receiver must be an object; the property is inserted or
    /// overwritten and the assigned value is the result.
    pub(super) fn eval_property_assignment(&mut self,
                                           object: &Node,
                                           name: &str,
                                           value: &Node,
                                           env: &Rc<Environment>)
                                           -> EvalResult<Value> {
        let receiver = self.evaluate(object, env)?.to_object(object.position)?;
        let value = self.evaluate(value, env)?;

        receiver.borrow_mut().insert(name.to_string(), value.clone());
        Ok(value)
    }
}
