use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{ObjectRef, Value},
    },
    util::num::i64_to_usize,
};

/// Name of the binding that holds the function being called.
pub const SELF: &str = "self";
/// Name of the binding that holds the receiver of a method call.
pub const THIS: &str = "this";
/// Name of the binding that holds the call site's line.
pub const LINE: &str = "__LINE__";
/// Name of the binding that holds the call site's column.
pub const COLUMN: &str = "__COLUMN__";

/// A variable binding.
#[derive(Debug, Clone)]
struct Binding {
    /// The value.
    value:   Value,
    /// Whether this binding can be reassigned.
    mutable: bool,
}

/// Why an assignment did not happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AssignError {
    /// The owning binding was declared without `mut`.
    Immutable,
    /// No reachable frame binds the name.
    Undefined,
}

/// A scope frame.
///
/// A frame holds its own bindings, an ordered list of outer frames consulted
/// when a name is not bound locally, and optionally the object a method call
/// runs on. Frames are shared through `Rc`, so a closure keeps the frame it
/// was declared in alive for as long as the closure itself is reachable.
///
/// Lookup order is: own bindings, then the associated object's properties,
/// then each outer frame in the order it was appended, depth first.
#[derive(Default)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Binding>>,
    outers:   RefCell<Vec<Rc<Self>>>,
    object:   RefCell<Option<ObjectRef>>,
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Outer frames and values may refer back to this frame.
        let mut names: Vec<String> = self.bindings.borrow().keys().cloned().collect();
        names.sort();
        f.debug_struct("Environment")
         .field("names", &names)
         .field("outers", &self.outers.borrow().len())
         .field("has_object", &self.object.borrow().is_some())
         .finish()
    }
}

impl Environment {
    /// Creates an empty root frame with no outer frames.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Binds `name` in this frame only.
    ///
    /// An existing binding of the same name in this frame is replaced, along
    /// with its mutability.
    pub fn initialize(&self, name: &str, value: Value, mutable: bool) {
        self.bindings
            .borrow_mut()
            .insert(name.to_string(), Binding { value, mutable });
    }

    /// Returns `true` if `name` resolves in this frame, its associated object,
    /// or any outer frame.
    ///
    /// # Example
    /// ```
    /// use culebra::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let outer = Environment::new();
    /// outer.initialize("x", Value::Integer(1), false);
    ///
    /// let inner = Environment::new();
    /// inner.append_outer(outer);
    /// assert!(inner.has("x"));
    /// assert!(!inner.has("y"));
    /// ```
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Resolves `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if no reachable frame binds
    /// it.
    pub fn get(&self, name: &str, position: Position) -> EvalResult<Value> {
        self.lookup(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             position })
    }

    /// Overwrites the value of an existing binding.
    ///
    /// The binding is found with the same search order as [`Self::get`].
    /// When the name resolves to a property of an associated object, the
    /// property is written instead; object properties are always writable.
    ///
    /// # Errors
    /// - `RuntimeError::UndefinedVariable` if the name is not bound anywhere.
    /// - `RuntimeError::ImmutableBinding` if the owning binding was declared
    ///   without `mut`.
    pub fn assign(&self, name: &str, value: Value, position: Position) -> EvalResult<()> {
        self.try_assign(name, value).map_err(|e| match e {
                                        AssignError::Immutable => {
                                            RuntimeError::ImmutableBinding { name: name.to_string(),
                                                                             position }
                                        },
                                        AssignError::Undefined => {
                                            RuntimeError::UndefinedVariable { name: name.to_string(),
                                                                              position }
                                        },
                                    })
    }

    /// Adds `env` to the end of this frame's outer-frame list.
    pub fn append_outer(&self, env: Rc<Self>) {
        self.outers.borrow_mut().push(env);
    }

    /// Marks this frame as a method call on `object`.
    ///
    /// The object's properties then resolve as bare names inside the frame,
    /// and assignments to them write through to the object.
    pub fn associate_object(&self, object: ObjectRef) {
        *self.object.borrow_mut() = Some(object);
    }

    /// Returns the object this frame was associated with, if any.
    #[must_use]
    pub fn associated_object(&self) -> Option<ObjectRef> {
        self.object.borrow().clone()
    }

    /// Reads the call-site position a call frame was seeded with.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` outside a call frame.
    pub fn call_site(&self) -> EvalResult<Position> {
        let read = |name: &str| -> EvalResult<usize> {
            let value = self.get(name, Position::default())?;
            let n = value.to_integer(Position::default())?;
            i64_to_usize(n).ok_or(RuntimeError::Internal { details: format!("{name} is negative") })
        };
        Ok(Position::new(read(LINE)?, read(COLUMN)?))
    }

    fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(binding) = self.bindings.borrow().get(name) {
            return Some(binding.value.clone());
        }
        if let Some(object) = self.object.borrow().as_ref()
           && let Some(value) = object.borrow().get(name)
        {
            return Some(value.clone());
        }
        self.outers
            .borrow()
            .iter()
            .find_map(|outer| outer.lookup(name))
    }

    fn try_assign(&self, name: &str, value: Value) -> Result<(), AssignError> {
        if let Some(binding) = self.bindings.borrow_mut().get_mut(name) {
            if !binding.mutable {
                return Err(AssignError::Immutable);
            }
            binding.value = value;
            return Ok(());
        }
        if let Some(object) = self.object.borrow().as_ref()
           && let Some(property) = object.borrow_mut().get_mut(name)
        {
            *property = value;
            return Ok(());
        }
        for outer in self.outers.borrow().iter() {
            match outer.try_assign(name, value.clone()) {
                Err(AssignError::Undefined) => {},
                result => return result,
            }
        }
        Err(AssignError::Undefined)
    }
}
