use std::{fmt, rc::Rc};

use crate::{
    ast::{Node, Parameter},
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::core::Value},
};

/// The signature of a built-in function.
///
/// A native function receives the fully seeded call environment (parameters,
/// `self`, `__LINE__`, `__COLUMN__` and, for methods, `this`) and reads its
/// arguments from it by name.
pub type NativeFn = Rc<dyn Fn(&Rc<Environment>) -> EvalResult<Value>>;

/// A callable value: a parameter list plus a body.
#[derive(Debug)]
pub struct Function {
    /// Declared parameters, bound in order at each call.
    pub params: Vec<Parameter>,
    /// What runs once the call environment has been seeded.
    pub body:   FunctionBody,
}

/// The three ways a function can execute.
pub enum FunctionBody {
    /// A function literal: its AST body plus the environment it was declared
    /// in. The captured environment becomes an outer frame of every call.
    Closure {
        /// The defining environment.
        env:  Rc<Environment>,
        /// The body evaluated in the call environment.
        body: Rc<Node>,
    },
    /// A function reached through `receiver.name`. Calling it binds `this` to
    /// the receiver, associates object receivers with the call frame, then
    /// runs `method` in the same frame.
    Bound {
        /// The value the method was accessed on.
        receiver: Value,
        /// The function stored under the accessed name.
        method:   Rc<Function>,
    },
    /// A built-in implemented in Rust.
    Native(NativeFn),
}

impl fmt::Debug for FunctionBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The captured environment can contain this very function.
        match self {
            Self::Closure { body, .. } => {
                f.debug_struct("Closure")
                 .field("body", body)
                 .finish_non_exhaustive()
            },
            Self::Bound { receiver, .. } => {
                f.debug_struct("Bound")
                 .field("receiver", &receiver.type_name())
                 .finish_non_exhaustive()
            },
            Self::Native(_) => f.write_str("Native"),
        }
    }
}

impl Function {
    /// Builds a closure over `env` for a function literal.
    #[must_use]
    pub const fn closure(params: Vec<Parameter>, env: Rc<Environment>, body: Rc<Node>) -> Self {
        Self { params,
               body: FunctionBody::Closure { env, body } }
    }

    /// Builds a built-in from `(name, mutable)` parameter pairs and a Rust
    /// closure.
    ///
    /// # Example
    /// ```
    /// use culebra::interpreter::value::{core::Value, function::Function};
    ///
    /// let double = Function::native(&[("n", false)], |env| {
    ///     let n = env.get("n", Default::default())?.to_integer(Default::default())?;
    ///     Ok(Value::Integer(n * 2))
    /// });
    /// assert_eq!(double.params.len(), 1);
    /// ```
    pub fn native(params: &[(&str, bool)],
                  f: impl Fn(&Rc<Environment>) -> EvalResult<Value> + 'static)
                  -> Self {
        let params = params.iter()
                           .map(|(name, mutable)| Parameter { name:    (*name).to_string(),
                                                              mutable: *mutable, })
                           .collect();
        Self { params,
               body: FunctionBody::Native(Rc::new(f)) }
    }

    /// Produces a method of `receiver` from this function.
    ///
    /// The result has the same parameters; invoking it supplies `receiver` as
    /// `this`.
    #[must_use]
    pub fn bind(self: &Rc<Self>, receiver: Value) -> Self {
        Self { params: self.params.clone(),
               body:   FunctionBody::Bound { receiver,
                                             method: Rc::clone(self) }, }
    }
}
