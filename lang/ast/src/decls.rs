use derivative::Derivative;
use interop_miette_util::codespan::Span;
use url::Url;

use crate::exp::*;
use crate::ident::Ident;
use crate::traits::HasSpan;

/// A module: all declarations of one source file, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// The location of the source the module was parsed from
    pub uri: Url,
    pub decls: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Decl {
    Func(Func),
}

impl HasSpan for Decl {
    fn span(&self) -> Span {
        match self {
            Decl::Func(func) => func.span,
        }
    }
}

/// Function declaration
///
/// ```text
/// func f(...): t { ... }
///      ^  ^     ^    ^----- body
///      |  |     \---------- ret_typ
///      |  \---------------- params
///      \------------------- name
/// ```
/// The return type is optional.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Func {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Span,
    pub name: Ident,
    pub params: Vec<Param>,
    pub ret_typ: Option<Typ>,
    pub body: Vec<Stmt>,
}

impl HasSpan for Func {
    fn span(&self) -> Span {
        self.span
    }
}

impl From<Func> for Decl {
    fn from(func: Func) -> Self {
        Decl::Func(func)
    }
}

/// A parameter group within a function signature: one or more names which
/// share a declared type and, optionally, a default value.
///
/// ```text
/// func f(x, y: Int = 0) { ... }
///        ^^^^  ^^^   ^
///          |    |    \----- default
///          |    \---------- typ
///          \--------------- names
/// ```
/// The type and the default are stored once for the whole group, not
/// duplicated per name.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Param {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Span,
    /// The parameter names; never empty.
    pub names: Vec<Ident>,
    /// The type shared by all names in the group.
    pub typ: Typ,
    /// The default value shared by all names in the group.
    pub default: Option<Box<Exp>>,
}

impl HasSpan for Param {
    fn span(&self) -> Span {
        self.span
    }
}

/// A type referenced by name. There are no structural types.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Typ {
    /// Source code location
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Span,
    pub name: Ident,
}

impl HasSpan for Typ {
    fn span(&self) -> Span {
        self.span
    }
}
