use std::rc::Rc;

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        environment::{Environment, THIS},
        evaluator::core::EvalResult,
        value::{core::Value, function::Function},
    },
    util::num::usize_to_i64_checked,
};

impl Value {
    /// Resolves `self.name`.
    ///
    /// - Objects expose their own properties.
    /// - Arrays expose `size` and the `push` method.
    /// - Strings expose `size`, their length in characters.
    ///
    /// Anything else, or a missing name, is `UnknownProperty`. The caller is
    /// responsible for binding returned functions to `self`.
    ///
    /// # Example
    /// ```
    /// use culebra::{ast::Position, interpreter::value::core::Value};
    ///
    /// let array = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
    /// let size = array.get_property("size", Position::default()).unwrap();
    /// assert_eq!(size, Value::Integer(2));
    /// ```
    pub fn get_property(&self, name: &str, position: Position) -> EvalResult<Self> {
        let found = match (self, name) {
            (Self::Object(properties), _) => properties.borrow().get(name).cloned(),
            (Self::Array(values), "size") => {
                Some(Self::Integer(usize_to_i64_checked(values.borrow().len(), position)?))
            },
            (Self::Array(_), "push") => Some(Self::from(array_push())),
            (Self::String(s), "size") => {
                Some(Self::Integer(usize_to_i64_checked(s.chars().count(), position)?))
            },
            _ => None,
        };

        found.ok_or_else(|| RuntimeError::UnknownProperty { name: name.to_string(),
                                                            receiver: self.type_name(),
                                                            position })
    }
}

/// `array.push(value)`: appends to the receiver and returns it.
fn array_push() -> Function {
    Function::native(&[("value", false)], |env: &Rc<Environment>| {
        let position = env.call_site()?;
        let receiver = env.get(THIS, position)?;
        let value = env.get("value", position)?;

        receiver.to_array(position)?
                .try_borrow_mut()
                .map_err(|_| RuntimeError::Internal { details: "array is already borrowed".to_string() })?
                .push(value);

        Ok(receiver)
    })
}
