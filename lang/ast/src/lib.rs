//! # Abstract syntax tree (AST)
//!
//! The typed tree produced by the lowering stage and consumed by all later
//! stages of the compiler pipeline. Unlike the concrete syntax tree, each
//! node owns strongly-typed children, and structural equality ignores source
//! locations.

mod decls;
mod exp;
mod ident;
mod traits;

pub use decls::*;
pub use exp::*;
pub use ident::*;
pub use traits::*;
