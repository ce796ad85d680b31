use std::fmt;

use derivative::Derivative;
use interop_miette_util::codespan::Span;

use crate::HasSpan;

/// An identifier: a function name, parameter name, type name or argument
/// label. Two identifiers are equal if they consist of the same text; the
/// source location is ignored for equality and hashing.
#[derive(Debug, Clone, Derivative)]
#[derivative(Eq, PartialEq, Hash)]
pub struct Ident {
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    pub span: Span,
    pub id: String,
}

impl Ident {
    pub fn from_string(id: &str) -> Self {
        Ident { span: Span::default(), id: id.to_owned() }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl HasSpan for Ident {
    fn span(&self) -> Span {
        self.span
    }
}
