use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use interop_miette_util::ToMiette;
use interop_miette_util::codespan::{Loc, Span};

use crate::lexer::{LexicalError, Token};

/// An error that occurs when the source text does not conform to the
/// grammar. The error always names the offending token and its position;
/// there is no error recovery.
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("Invalid token")]
    #[diagnostic(code("P-001"))]
    InvalidToken {
        #[label]
        span: SourceSpan,
    },
    #[error("Unexpected end of file")]
    #[diagnostic(code("P-002"))]
    UnrecognizedEof {
        #[label("expected one of: {expected}")]
        span: SourceSpan,
        expected: String,
    },
    #[error("Unexpected token {token}")]
    #[diagnostic(code("P-003"))]
    UnrecognizedToken {
        token: Token,
        #[label("expected one of: {expected}")]
        span: SourceSpan,
        expected: String,
    },
    #[error("Unexpected additional token {token}")]
    #[diagnostic(code("P-004"))]
    ExtraToken {
        token: Token,
        #[label]
        span: SourceSpan,
    },
}

impl From<lalrpop_util::ParseError<Loc, Token, LexicalError>> for ParseError {
    fn from(err: lalrpop_util::ParseError<Loc, Token, LexicalError>) -> Self {
        match err {
            lalrpop_util::ParseError::InvalidToken { location } => {
                ParseError::InvalidToken { span: SourceSpan::new(location.to_miette(), 0) }
            }
            lalrpop_util::ParseError::UnrecognizedEof { location, expected } => {
                ParseError::UnrecognizedEof {
                    span: SourceSpan::new(location.to_miette(), 0),
                    expected: expected.join(", "),
                }
            }
            lalrpop_util::ParseError::UnrecognizedToken { token: (l, token, r), expected } => {
                ParseError::UnrecognizedToken {
                    token,
                    span: Span::new(l, r).to_miette(),
                    expected: expected.join(", "),
                }
            }
            lalrpop_util::ParseError::ExtraToken { token: (l, token, r) } => {
                ParseError::ExtraToken { token, span: Span::new(l, r).to_miette() }
            }
            lalrpop_util::ParseError::User { error } => {
                ParseError::InvalidToken { span: error.span.to_miette() }
            }
        }
    }
}
