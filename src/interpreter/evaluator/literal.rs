use std::rc::Rc;

use indexmap::IndexMap;

use crate::{
    ast::{Node, Position},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Builds a fresh object from `name: value` pairs in source order.
    ///
    /// A repeated name overwrites the earlier value but keeps its original
    /// place in the property order.
    pub(super) fn eval_object(&mut self,
                              properties: &[(String, Node)],
                              env: &Rc<Environment>)
                              -> EvalResult<Value> {
        let mut object = IndexMap::with_capacity(properties.len());
        for (name, expr) in properties {
            let value = self.evaluate(expr, env)?;
            object.insert(name.clone(), value);
        }
        Ok(Value::from(object))
    }

    /// Builds a fresh array, evaluating elements in source order.
    pub(super) fn eval_array(&mut self, elements: &[Node], env: &Rc<Environment>) -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|element| self.evaluate(element, env))
                             .collect::<EvalResult<Vec<_>>>()?;
        Ok(Value::from(values))
    }

    /// Converts number literal text to an integer.
    ///
    /// # Errors
    /// Returns `LiteralTooLarge` if the literal does not fit in an `i64`.
    pub(super) fn eval_number(text: &str, position: Position) -> EvalResult<Value> {
        text.parse()
            .map(Value::Integer)
            .map_err(|_| RuntimeError::LiteralTooLarge { text: text.to_string(),
                                                         position })
    }

    /// Concatenates the display strings of every part of an interpolated
    /// string.
    pub(super) fn eval_interpolated_string(&mut self,
                                           parts: &[Node],
                                           env: &Rc<Environment>)
                                           -> EvalResult<Value> {
        let mut text = String::new();
        for part in parts {
            text.push_str(&self.evaluate(part, env)?.to_display_string());
        }
        Ok(Value::String(text))
    }
}
