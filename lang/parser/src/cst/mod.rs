//! # Concrete syntax tree (CST)
//!
//! The output of the parser and the input of the lowering stage which
//! follows it in the compiler pipeline. The shape of the CST mirrors the
//! grammar of the surface syntax: one node type per grammar production,
//! each carrying the source span the production was derived from.

pub mod decls;
pub mod exp;
pub mod ident;

pub use ident::Ident;
