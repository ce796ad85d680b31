use interop_miette_util::codespan::Span;
use url::Url;

use super::exp;
use super::ident::*;

#[derive(Debug, Clone)]
pub struct Module {
    /// The location of the source the module was parsed from
    pub uri: Url,
    pub decls: Vec<Decl>,
}

#[derive(Debug, Clone)]
pub enum Decl {
    Func(Func),
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
#[derive(Debug, Clone)]
pub struct Func {
    pub span: Span,
    pub name: Ident,
    pub params: Params,
    pub ret_typ: Option<Typ>,
    pub body: Vec<exp::Stmt>,
}

/// A parameter group: one or more names which share a declared type and an
/// optional default value.
///
/// ```text
/// func f(x, y: Int = 0) { ... }
///        ^^^^  ^^^   ^
///          |    |    \----- default
///          |    \---------- typ
///          \--------------- names
/// ```
#[derive(Debug, Clone)]
pub struct Param {
    pub span: Span,
    /// The parameter names. The grammar produces at least one.
    pub names: Vec<Ident>,
    /// The type shared by all names in the group.
    pub typ: Typ,
    /// The default value shared by all names in the group.
    pub default: Option<Box<exp::Exp>>,
}

pub type Params = Vec<Param>;

/// A type referenced by name.
#[derive(Debug, Clone)]
pub struct Typ {
    pub span: Span,
    pub name: Ident,
}
