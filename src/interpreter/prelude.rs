use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        value::{core::Value, function::Function},
    },
};

/// Binds the built-ins into `env`, with `puts` writing to standard output.
///
/// # Example
/// ```
/// use culebra::interpreter::{environment::Environment, prelude};
///
/// let env = Environment::new();
/// prelude::install(&env);
/// assert!(env.has("puts"));
/// assert!(env.has("assert"));
/// ```
pub fn install(env: &Environment) {
    install_with_output(env, Rc::new(RefCell::new(io::stdout())));
}

/// Binds the built-ins into `env`, with `puts` writing to `output`.
///
/// Both built-ins are bound immutably.
pub fn install_with_output(env: &Environment, output: Rc<RefCell<dyn Write>>) {
    env.initialize("puts", Value::from(puts(output)), false);
    env.initialize("assert", Value::from(assert()), false);
}

/// `puts(value)`: writes the display form of `value` and a newline.
fn puts(output: Rc<RefCell<dyn Write>>) -> Function {
    Function::native(&[("value", false)], move |env: &Rc<Environment>| {
        let position = env.call_site()?;
        let value = env.get("value", position)?;

        let mut output =
            output.try_borrow_mut()
                  .map_err(|_| RuntimeError::Internal { details: "output is already borrowed".to_string() })?;
        writeln!(output, "{value}").map_err(|e| RuntimeError::Output { details: e.to_string() })?;

        Ok(Value::Null)
    })
}

/// `assert(condition)`: fails at the call site when `condition` is falsy.
fn assert() -> Function {
    Function::native(&[("condition", false)], |env: &Rc<Environment>| {
        let position = env.call_site()?;
        if env.get("condition", position)?.is_truthy() {
            Ok(Value::Null)
        } else {
            Err(RuntimeError::AssertionFailed { position })
        }
    })
}
