use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

pub type LoweringResult<T = ()> = Result<T, Box<LoweringError>>;

/// An error that occurs while lowering the CST to the typed syntax tree.
#[derive(Error, Diagnostic, Debug)]
pub enum LoweringError {
    #[error("An unexpected internal error occurred: {message}")]
    #[diagnostic(code("L-XXX"))]
    /// This error should not occur.
    /// Some internal invariant has been violated: the parser produced a tree
    /// shape the lowering stage does not recognize. It is never turned into
    /// a partial syntax tree.
    Impossible {
        message: String,
        #[label]
        span: Option<SourceSpan>,
    },
}
