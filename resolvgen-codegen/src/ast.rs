//! Emission tree for generated Rust source.
//!
//! Generators build these nodes; [`crate::printer`] turns them into text.
//! Only the constructs the generated module needs are modelled. Anything
//! below expression level (paths, types, patterns) is kept as plain text.

/// A generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Comment lines printed above the module, without the `//` prefix.
    pub header: Vec<String>,
    /// Outer attributes on the module, without `#[...]`.
    pub attrs: Vec<String>,
    /// Module name.
    pub name: String,
    /// Items in emission order.
    pub items: Vec<Item>,
}

/// Module-level item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// `use path;` or `use path as alias;`.
    Use {
        /// Imported path.
        path: String,
        /// Local alias, if different from the last segment.
        alias: Option<String>,
    },
    /// `use path::{a, b};`.
    UseGroup {
        /// Common path prefix.
        path: String,
        /// Imported names.
        names: Vec<String>,
    },
    /// `pub trait Name { ... }` with required methods only.
    Trait {
        /// Trait name.
        name: String,
        /// Method signatures.
        methods: Vec<Signature>,
    },
    /// `pub static NAME: ty = value;`.
    Static {
        /// Static name.
        name: String,
        /// Static type.
        ty: String,
        /// Initializer.
        value: Expr,
    },
    /// `pub const NAME: ty = value;`.
    Const {
        /// Constant name.
        name: String,
        /// Constant type.
        ty: String,
        /// Initializer.
        value: Expr,
    },
    /// `pub fn ...`.
    Fn(Function),
}

/// Function or trait method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Function name.
    pub name: String,
    /// Generic parameter list without angle brackets.
    pub generics: Option<String>,
    /// Takes `&self` first.
    pub self_ref: bool,
    /// Value parameters.
    pub params: Vec<Param>,
    /// Return type.
    pub ret: String,
}

/// Function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: String,
}

impl Param {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Function with a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// Signature.
    pub sig: Signature,
    /// Body statements; a trailing [`Stmt::Tail`] is the return value.
    pub body: Vec<Stmt>,
}

/// Statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `let [mut] name = value;`.
    Let {
        /// Binding name.
        name: String,
        /// Declared mutable.
        mutable: bool,
        /// Initializer.
        value: Expr,
    },
    /// `target = value;`.
    Assign {
        /// Assigned place.
        target: String,
        /// New value.
        value: Expr,
    },
    /// `if let pattern = value { body }`.
    IfLet {
        /// Refutable pattern.
        pattern: String,
        /// Scrutinee.
        value: Expr,
        /// Statements run on a match.
        body: Vec<Stmt>,
    },
    /// `for binding in iter { body }`.
    For {
        /// Loop variable.
        binding: String,
        /// Iterated expression.
        iter: Expr,
        /// Loop body.
        body: Vec<Stmt>,
    },
    /// Expression statement.
    Expr(Expr),
    /// Trailing expression without a semicolon.
    Tail(Expr),
    /// `continue;`.
    Continue,
}

impl Stmt {
    /// Creates an immutable `let`.
    #[must_use]
    pub fn let_(name: impl Into<String>, value: Expr) -> Self {
        Self::Let {
            name: name.into(),
            mutable: false,
            value,
        }
    }

    /// Creates a mutable `let`.
    #[must_use]
    pub fn let_mut(name: impl Into<String>, value: Expr) -> Self {
        Self::Let {
            name: name.into(),
            mutable: true,
            value,
        }
    }
}

/// Match arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arm {
    /// Pattern text.
    pub pattern: String,
    /// Arm body.
    pub body: ArmBody,
}

impl Arm {
    /// Creates an arm with an expression body.
    #[must_use]
    pub fn expr(pattern: impl Into<String>, body: Expr) -> Self {
        Self {
            pattern: pattern.into(),
            body: ArmBody::Expr(body),
        }
    }

    /// Creates an arm with a block body.
    #[must_use]
    pub fn block(pattern: impl Into<String>, body: Vec<Stmt>) -> Self {
        Self {
            pattern: pattern.into(),
            body: ArmBody::Block(body),
        }
    }
}

/// Body of a match arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArmBody {
    /// `pattern => expr,`.
    Expr(Expr),
    /// `pattern => { ... }`.
    Block(Vec<Stmt>),
}

/// Expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Path, place or any verbatim expression text.
    Path(String),
    /// `&expr`.
    Ref(Box<Expr>),
    /// String literal, escaped on output.
    Str(String),
    /// Raw string literal, hashes chosen on output.
    RawStr(String),
    /// `&[a, b, ...]`.
    Slice(Vec<Expr>),
    /// `func(args...)`.
    Call {
        /// Callee expression text.
        func: String,
        /// Arguments.
        args: Vec<Expr>,
    },
    /// `receiver.method(args...)`.
    MethodCall {
        /// Receiver.
        receiver: Box<Expr>,
        /// Method name, turbofish included.
        method: String,
        /// Arguments.
        args: Vec<Expr>,
    },
    /// `match scrutinee { arms }`.
    Match {
        /// Scrutinee.
        scrutinee: Box<Expr>,
        /// Arms in order.
        arms: Vec<Arm>,
    },
    /// `name!(args...)`.
    Macro {
        /// Macro name without `!`.
        name: String,
        /// Arguments.
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Creates a path expression.
    #[must_use]
    pub fn path(text: impl Into<String>) -> Self {
        Self::Path(text.into())
    }

    /// Borrows an expression.
    #[must_use]
    pub fn borrow(inner: Expr) -> Self {
        Self::Ref(Box::new(inner))
    }

    /// Creates a function call.
    #[must_use]
    pub fn call(func: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Call {
            func: func.into(),
            args,
        }
    }

    /// Creates a method call.
    #[must_use]
    pub fn method(receiver: Expr, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::MethodCall {
            receiver: Box::new(receiver),
            method: method.into(),
            args,
        }
    }

    /// Creates a match expression.
    #[must_use]
    pub fn match_(scrutinee: Expr, arms: Vec<Arm>) -> Self {
        Self::Match {
            scrutinee: Box::new(scrutinee),
            arms,
        }
    }

    /// Returns true if the expression ends in a block and needs no `;`.
    #[must_use]
    pub const fn is_block_like(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}
