use std::rc::Rc;

/// A 1-based source location attached to every token and AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line number in the source code.
    pub line:   usize,
    /// Column number (in bytes) within the line.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and column pair.
    ///
    /// ## Example
    /// ```
    /// use culebra::ast::Position;
    ///
    /// let pos = Position::new(3, 7);
    /// assert_eq!(pos.to_string(), "3:7");
    /// ```
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An abstract syntax tree node.
///
/// The node kind decides how the evaluator treats it; the position is used
/// for diagnostics and for the `__LINE__`/`__COLUMN__` bindings of a call.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// What kind of construct this node is.
    pub kind:     NodeKind,
    /// Where the construct starts in the source.
    pub position: Position,
}

impl Node {
    /// Wraps a node kind together with its source position.
    #[must_use]
    pub const fn new(kind: NodeKind, position: Position) -> Self {
        Self { kind, position }
    }
}

/// Every construct the evaluator understands.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A sequence of statements; its value is the value of the last one.
    Statements(Vec<Node>),
    /// `while cond { body }`
    While {
        /// Loop condition, evaluated before every iteration.
        condition: Box<Node>,
        /// Loop body.
        body:      Box<Node>,
    },
    /// `if c1 { .. } else if c2 { .. } else { .. }`
    If {
        /// `(condition, branch)` pairs, tested in order.
        branches:  Vec<(Node, Node)>,
        /// The trailing unconditional branch, if any.
        otherwise: Option<Box<Node>>,
    },
    /// `fn(a, mut b) { body }`
    Function {
        /// Declared parameters in order.
        params: Vec<Parameter>,
        /// The body, shared with every Function value built from this node.
        body:   Rc<Node>,
    },
    /// A primary expression followed by call, index and property suffixes.
    Call {
        /// The base expression.
        callee:   Box<Node>,
        /// Suffixes applied left to right.
        suffixes: Vec<Suffix>,
    },
    /// `mut? name = value`
    Assignment {
        /// Whether a fresh declaration is mutable.
        mutable: bool,
        /// Target name.
        name:    String,
        /// Right-hand side.
        value:   Box<Node>,
    },
    /// `object.name = value`
    PropertyAssignment {
        /// Expression producing the receiver object.
        object: Box<Node>,
        /// Property name.
        name:   String,
        /// Right-hand side.
        value:  Box<Node>,
    },
    /// `a || b || ...`
    LogicalOr(Vec<Node>),
    /// `a && b && ...`
    LogicalAnd(Vec<Node>),
    /// `left <op> right` for one of the six comparison operators.
    Comparison {
        /// Left operand.
        left:  Box<Node>,
        /// The comparison operator.
        op:    ComparisonOperator,
        /// Right operand.
        right: Box<Node>,
    },
    /// A prefix operator applied to an operand.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Node>,
    },
    /// A flat, left-associative additive or multiplicative fold.
    Binary {
        /// The first operand.
        first: Box<Node>,
        /// The remaining `(operator, operand)` pairs.
        rest:  Vec<(BinaryOperator, Node)>,
    },
    /// A variable reference.
    Identifier(String),
    /// `{ name: value, ... }`
    Object(Vec<(String, Node)>),
    /// `[a, b, ...]`
    Array(Vec<Node>),
    /// An integer literal, kept as source text until evaluation.
    Number(String),
    /// `true` or `false`.
    Boolean(bool),
    /// `undefined`
    Undefined,
    /// `"text ${expr} text"`: alternating text and embedded expressions.
    InterpolatedString(Vec<Node>),
    /// A bare literal token; evaluates to a string of its text.
    Text(String),
}

/// A declared function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name.
    pub name:    String,
    /// Whether the binding created for it is mutable.
    pub mutable: bool,
}

/// One link in a call chain such as `a.b(1)[2]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Suffix {
    /// What the suffix does.
    pub kind:     SuffixKind,
    /// Where the suffix starts.
    pub position: Position,
}

/// The three call-chain suffixes.
#[derive(Debug, Clone, PartialEq)]
pub enum SuffixKind {
    /// `( args... )`
    Arguments(Vec<Node>),
    /// `[ index ]`
    Index(Box<Node>),
    /// `.name`
    Property(String),
}

/// Represents a comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Less than (`<`)
    Less,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Greater than (`>`)
    Greater,
}

/// Represents an arithmetic operator of the additive or multiplicative level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Integer division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Minus,
    /// Logical NOT (`!x`).
    Not,
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessEqual => "<=",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::Greater => ">",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}
