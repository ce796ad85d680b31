use interop_miette_util::codespan::Span;

use super::ident::*;

/// A statement in a function body.
#[derive(Debug, Clone)]
pub enum Stmt {
    Exp(Box<Exp>),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Exp(exp) => exp.span(),
        }
    }
}

/// Arguments in an argument list can either be unnamed or named.
/// Example for named arguments: `f(x: 1, y: 2)`
/// Example for unnamed arguments: `f(1, 2)`
#[derive(Debug, Clone)]
pub enum Arg {
    UnnamedArg(Box<Exp>),
    NamedArg(Ident, Box<Exp>),
}

impl Arg {
    pub fn span(&self) -> Span {
        match self {
            Arg::UnnamedArg(exp) => exp.span(),
            Arg::NamedArg(name, exp) => name.span.merge(exp.span()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Exp {
    Call(Call),
    Var(Var),
    IntLit(IntLit),
    StrLit(StrLit),
    BoolLit(BoolLit),
}

impl Exp {
    pub fn span(&self) -> Span {
        match self {
            Exp::Call(call) => call.span,
            Exp::Var(var) => var.span,
            Exp::IntLit(int_lit) => int_lit.span,
            Exp::StrLit(str_lit) => str_lit.span,
            Exp::BoolLit(bool_lit) => bool_lit.span,
        }
    }
}

/// A call of the form `f(e1, ..., en)`.
#[derive(Debug, Clone)]
pub struct Call {
    pub span: Span,
    pub name: Ident,
    pub args: Vec<Arg>,
}

/// A bare name in expression position.
#[derive(Debug, Clone)]
pub struct Var {
    pub span: Span,
    pub name: Ident,
}

/// Literal for an integer
#[derive(Debug, Clone)]
pub struct IntLit {
    pub span: Span,
    pub val: i64,
}

/// Literal for a string. We keep both the text as written in the source and
/// the text with its escape sequences decoded.
#[derive(Debug, Clone)]
pub struct StrLit {
    pub span: Span,
    pub original: String,
    pub unescaped: String,
}

/// Literal for a boolean
#[derive(Debug, Clone)]
pub struct BoolLit {
    pub span: Span,
    pub val: bool,
}
