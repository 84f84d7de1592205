use std::{cell::RefCell, cmp::Ordering, collections::HashSet, fmt, rc::Rc};

use indexmap::IndexMap;

use crate::{
    ast::{ComparisonOperator, Position},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::function::Function},
};

/// Shared, mutable array storage. Every alias sees every mutation.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;
/// Shared, mutable object storage, keeping properties in insertion order.
pub type ObjectRef = Rc<RefCell<IndexMap<String, Value>>>;

/// Represents a runtime value in the interpreter.
///
/// Scalars are copied; arrays, objects and functions are reference counted,
/// so copying a `Value` of those kinds creates an alias, not a copy.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absence of a value (`undefined`).
    #[default]
    Null,
    /// A 64-bit signed integer; all arithmetic happens on these.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// An owned string.
    String(String),
    /// An ordered, growable sequence of values.
    Array(ArrayRef),
    /// A string-keyed property map.
    Object(ObjectRef),
    /// A callable value.
    Function(Rc<Function>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl From<IndexMap<String, Self>> for Value {
    fn from(v: IndexMap<String, Self>) -> Self {
        Self::Object(Rc::new(RefCell::new(v)))
    }
}

impl From<Function> for Value {
    fn from(v: Function) -> Self {
        Self::Function(Rc::new(v))
    }
}

impl Value {
    /// Returns the name of this value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "undefined",
            Self::Integer(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }

    /// Coerces the value to a boolean for conditional contexts.
    ///
    /// Only `false` and `undefined` are falsy; every other value, including
    /// `0` and the empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use culebra::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }

    /// Converts the value to `i64`, or returns an error if not an integer.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    pub fn to_integer(&self, position: Position) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(self.type_error("integer", position)),
        }
    }

    /// Returns the function behind this value, or an error if it is not
    /// callable.
    pub fn to_function(&self, position: Position) -> EvalResult<Rc<Function>> {
        match self {
            Self::Function(f) => Ok(Rc::clone(f)),
            _ => Err(self.type_error("function", position)),
        }
    }

    /// Returns a new handle to the array storage, or an error if not an
    /// array.
    pub fn to_array(&self, position: Position) -> EvalResult<ArrayRef> {
        match self {
            Self::Array(a) => Ok(Rc::clone(a)),
            _ => Err(self.type_error("array", position)),
        }
    }

    /// Returns a new handle to the object storage, or an error if not an
    /// object.
    pub fn to_object(&self, position: Position) -> EvalResult<ObjectRef> {
        match self {
            Self::Object(o) => Ok(Rc::clone(o)),
            _ => Err(self.type_error("object", position)),
        }
    }

    /// Returns the text interpolated strings and `puts` use for this value.
    ///
    /// This is the same text as the `Display` implementation.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Applies one of the six comparison operators.
    ///
    /// Equality never fails: values of different types are simply unequal.
    /// Ordering is only defined between two integers, two strings or two
    /// booleans; anything else is a type error.
    ///
    /// # Example
    /// ```
    /// use culebra::{
    ///     ast::{ComparisonOperator, Position},
    ///     interpreter::value::core::Value,
    /// };
    ///
    /// let pos = Position::default();
    /// let one = Value::Integer(1);
    /// let two = Value::Integer(2);
    ///
    /// assert!(one.compare(ComparisonOperator::Less, &two, pos).unwrap());
    /// assert!(!one.compare(ComparisonOperator::Equal, &Value::from("1"), pos).unwrap());
    /// assert!(one.compare(ComparisonOperator::Less, &Value::from("1"), pos).is_err());
    /// ```
    pub fn compare(&self,
                   op: ComparisonOperator,
                   other: &Self,
                   position: Position)
                   -> EvalResult<bool> {
        use ComparisonOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        match op {
            Equal => Ok(self == other),
            NotEqual => Ok(self != other),
            Less => Ok(self.ordering(other, position)?.is_lt()),
            LessEqual => Ok(self.ordering(other, position)?.is_le()),
            Greater => Ok(self.ordering(other, position)?.is_gt()),
            GreaterEqual => Ok(self.ordering(other, position)?.is_ge()),
        }
    }

    /// Orders two values of the same scalar type.
    fn ordering(&self, other: &Self, position: Position) -> EvalResult<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Ok(a.cmp(b)),
            (Self::String(a), Self::String(b)) => Ok(a.cmp(b)),
            (Self::Bool(a), Self::Bool(b)) => Ok(a.cmp(b)),
            (Self::Integer(_) | Self::String(_) | Self::Bool(_), _) => {
                Err(other.type_error(self.type_name(), position))
            },
            _ => Err(self.type_error("integer, string or boolean", position)),
        }
    }

    /// Builds a type error saying `expected` was needed but `self` was found.
    pub(crate) fn type_error(&self, expected: &'static str, position: Position) -> RuntimeError {
        RuntimeError::TypeError { expected,
                                  found: self.type_name(),
                                  position }
    }
}

/// Structural equality.
///
/// Arrays and objects compare element by element, functions compare by
/// identity, and values of different types are never equal. A pair of
/// containers met again while it is still being compared counts as equal, so
/// self-referencing values compare without looping.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other, &mut HashSet::new())
    }
}

impl Value {
    fn equals(&self, other: &Self, comparing: &mut HashSet<(*const (), *const ())>) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => {
                let pair = (Rc::as_ptr(a).cast::<()>(), Rc::as_ptr(b).cast::<()>());
                if Rc::ptr_eq(a, b) || !comparing.insert(pair) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                let equal = a.len() == b.len()
                            && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y, comparing));
                comparing.remove(&pair);
                equal
            },
            (Self::Object(a), Self::Object(b)) => {
                let pair = (Rc::as_ptr(a).cast::<()>(), Rc::as_ptr(b).cast::<()>());
                if Rc::ptr_eq(a, b) || !comparing.insert(pair) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                let equal = a.len() == b.len()
                            && a.iter()
                                .all(|(name, x)| b.get(name).is_some_and(|y| x.equals(y, comparing)));
                comparing.remove(&pair);
                equal
            },
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Writes the display form. A container reached again inside itself is
    /// written as `[...]` or `{...}`.
    fn write_display(&self,
                     f: &mut fmt::Formatter<'_>,
                     open: &mut HashSet<*const ()>)
                     -> fmt::Result {
        match self {
            Self::Null => write!(f, "undefined"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(values) => {
                let id = Rc::as_ptr(values).cast::<()>();
                if !open.insert(id) {
                    return write!(f, "[...]");
                }
                write!(f, "[")?;
                for (i, value) in values.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    value.write_display(f, open)?;
                }
                open.remove(&id);
                write!(f, "]")
            },
            Self::Object(properties) => {
                let id = Rc::as_ptr(properties).cast::<()>();
                if !open.insert(id) {
                    return write!(f, "{{...}}");
                }
                write!(f, "{{")?;
                for (i, (name, value)) in properties.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: ")?;
                    value.write_display(f, open)?;
                }
                open.remove(&id);
                write!(f, "}}")
            },
            Self::Function(_) => write!(f, "[function]"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_display(f, &mut HashSet::new())
    }
}
