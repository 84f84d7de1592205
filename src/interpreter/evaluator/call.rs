use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{Node, Parameter, Position, Suffix, SuffixKind},
    error::RuntimeError,
    interpreter::{
        environment::{COLUMN, Environment, LINE, SELF, THIS},
        evaluator::core::{Context, EvalResult},
        value::{
            core::Value,
            function::{Function, FunctionBody},
        },
    },
    util::num::{i64_to_usize, usize_to_i64_checked},
};

impl Context {
    /// Builds a closure for a function literal.
    ///
    /// The current environment is captured by reference; the body is not
    /// evaluated until the function is called.
    pub(super) fn eval_function(params: &[Parameter],
                                body: &Rc<Node>,
                                env: &Rc<Environment>)
                                -> Value {
        Value::from(Function::closure(params.to_vec(), Rc::clone(env), Rc::clone(body)))
    }

    /// Evaluates a call chain.
    ///
    /// The base expression is evaluated first, then every suffix is applied
    /// to the running value from left to right.
    ///
    /// # Parameters
    /// - `callee`: The base expression.
    /// - `suffixes`: Argument lists, index brackets and property accesses.
    /// - `call_site`: Position of the whole chain, bound as `__LINE__` and
    ///   `__COLUMN__` in every call frame the chain creates.
    /// - `env`: Frame the base expression and all arguments are evaluated in.
    pub(super) fn eval_call(&mut self,
                            callee: &Node,
                            suffixes: &[Suffix],
                            call_site: Position,
                            env: &Rc<Environment>)
                            -> EvalResult<Value> {
        let mut value = self.evaluate(callee, env)?;

        for suffix in suffixes {
            value = match &suffix.kind {
                SuffixKind::Arguments(arguments) => {
                    self.eval_invocation(&value, arguments, call_site, suffix.position, env)?
                },
                SuffixKind::Index(index) => self.eval_index(value, index, suffix.position, env)?,
                SuffixKind::Property(name) => Self::eval_property(value, name, suffix.position)?,
            };
        }

        Ok(value)
    }

    /// Calls `callee` with argument expressions.
    ///
    /// A fresh frame is seeded with `self` (the callee), one binding per
    /// declared parameter, and the call site as `__LINE__`/`__COLUMN__`.
    /// Only as many arguments as there are parameters are evaluated; extra
    /// argument expressions are never run.
    ///
    /// # Errors
    /// - `TypeError` if `callee` is not a function.
    /// - `ArityError` if fewer arguments than parameters are supplied.
    /// - Anything raised by an argument or by the body.
    fn eval_invocation(&mut self,
                       callee: &Value,
                       arguments: &[Node],
                       call_site: Position,
                       position: Position,
                       env: &Rc<Environment>)
                       -> EvalResult<Value> {
        let function = callee.to_function(position)?;
        if arguments.len() < function.params.len() {
            return Err(RuntimeError::ArityError { expected: function.params.len(),
                                                  found: arguments.len(),
                                                  position });
        }

        let frame = Environment::new();
        frame.initialize(SELF, callee.clone(), false);

        for (param, argument) in function.params.iter().zip(arguments) {
            let value = self.evaluate(argument, env)?;
            frame.initialize(&param.name, value, param.mutable);
        }

        frame.initialize(LINE,
                         Value::Integer(usize_to_i64_checked(call_site.line, call_site)?),
                         false);
        frame.initialize(COLUMN,
                         Value::Integer(usize_to_i64_checked(call_site.column, call_site)?),
                         false);

        self.invoke(&function, &frame, call_site)
    }

    /// Runs `function` in an already seeded call frame.
    ///
    /// This is the part of a call shared by every function kind; it also
    /// enforces the call depth limit.
    ///
    /// # Errors
    /// - `CallDepthExceeded` if the call would nest deeper than
    ///   `max_call_depth`.
    /// - Anything raised by the body.
    pub fn invoke(&mut self,
                  function: &Function,
                  frame: &Rc<Environment>,
                  position: Position)
                  -> EvalResult<Value> {
        if self.depth >= self.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { limit: self.max_call_depth,
                                                         position });
        }

        self.depth += 1;
        debug!(params = function.params.len(), depth = self.depth, %position, "invoking function");
        let result = self.run_body(function, frame);
        self.depth -= 1;

        result
    }

    fn run_body(&mut self, function: &Function, frame: &Rc<Environment>) -> EvalResult<Value> {
        match &function.body {
            FunctionBody::Closure { env, body } => {
                frame.append_outer(Rc::clone(env));
                self.evaluate(body, frame)
            },
            FunctionBody::Bound { receiver, method } => {
                frame.initialize(THIS, receiver.clone(), false);
                if let Value::Object(object) = receiver {
                    frame.associate_object(Rc::clone(object));
                }
                self.run_body(method, frame)
            },
            FunctionBody::Native(native) => native(frame),
        }
    }

    /// Applies `[index]` to the running value.
    ///
    /// The running value must be an array and the index an integer. An index
    /// outside `0..length` leaves the running value unchanged instead of
    /// failing.
    fn eval_index(&mut self,
                  value: Value,
                  index: &Node,
                  position: Position,
                  env: &Rc<Environment>)
                  -> EvalResult<Value> {
        let array = value.to_array(position)?;
        let index = self.evaluate(index, env)?.to_integer(index.position)?;

        let element = i64_to_usize(index).and_then(|i| array.borrow().get(i).cloned());
        Ok(element.unwrap_or(value))
    }

    /// Applies `.name` to the running value.
    ///
    /// A function-valued property comes back as a method bound to the
    /// running value, so calling it supplies the receiver as `this`.
    fn eval_property(value: Value, name: &str, position: Position) -> EvalResult<Value> {
        match value.get_property(name, position)? {
            Value::Function(method) => Ok(Value::from(method.bind(value))),
            property => Ok(property),
        }
    }
}
