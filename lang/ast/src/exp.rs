use derivative::Derivative;
use interop_miette_util::codespan::Span;

use crate::ident::Ident;
use crate::traits::HasSpan;

/// A statement in a function body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt {
    /// An expression evaluated for its effect, e.g. a call.
    Exp(Exp),
}

impl HasSpan for Stmt {
    fn span(&self) -> Span {
        match self {
            Stmt::Exp(exp) => exp.span(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Exp {
    Variable(Variable),
    Literal(Literal),
    Call(Call),
}

impl HasSpan for Exp {
    fn span(&self) -> Span {
        match self {
            Exp::Variable(variable) => variable.span,
            Exp::Literal(literal) => literal.span,
            Exp::Call(call) => call.span,
        }
    }
}

/// A bound occurrence of a name in expression position.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Variable {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Span,
    pub name: Ident,
}

impl HasSpan for Variable {
    fn span(&self) -> Span {
        self.span
    }
}

impl From<Variable> for Exp {
    fn from(val: Variable) -> Self {
        Exp::Variable(val)
    }
}

/// A literal value.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Literal {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Span,
    /// The kind of literal with its concrete payload
    pub kind: LiteralKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Int(i64),
    Str { original: String, unescaped: String },
    Bool(bool),
}

impl HasSpan for Literal {
    fn span(&self) -> Span {
        self.span
    }
}

impl From<Literal> for Exp {
    fn from(val: Literal) -> Self {
        Exp::Literal(val)
    }
}

/// A call invokes a function by name.
/// Examples: `connect()`, `send(sock, "ping")`
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Call {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Span,
    /// The name of the call.
    /// The `f` in `f(e1...en)`
    pub name: Ident,
    /// The arguments to the call.
    /// The `(e1...en)` in `f(e1...en)`
    pub args: Vec<Arg>,
}

impl HasSpan for Call {
    fn span(&self) -> Span {
        self.span
    }
}

impl From<Call> for Exp {
    fn from(val: Call) -> Self {
        Exp::Call(val)
    }
}

/// One argument in a call. Arguments are either positional or labeled with
/// a parameter name, and a single call may mix both forms in any order.
/// Whether the labels and the arity match the callee's signature is checked
/// by later stages, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Arg {
    UnnamedArg { arg: Box<Exp> },
    NamedArg { name: Ident, arg: Box<Exp> },
}

impl Arg {
    pub fn exp(&self) -> &Exp {
        match self {
            Arg::UnnamedArg { arg } => arg,
            Arg::NamedArg { arg, .. } => arg,
        }
    }
}

impl HasSpan for Arg {
    fn span(&self) -> Span {
        match self {
            Arg::UnnamedArg { arg } => arg.span(),
            Arg::NamedArg { name, arg } => name.span.merge(arg.span()),
        }
    }
}
