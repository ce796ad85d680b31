mod lower;
mod result;

use interop_parser::cst;

pub use lower::Lower;
pub use result::*;

/// Lower a module
///
/// Transforms the concrete syntax tree of one source file into the typed
/// syntax tree consumed by later stages. The transformation is a pure
/// function of its input: it never reorders or drops children, and a tree
/// shape it does not recognize is a fatal [LoweringError], never a partial
/// result.
pub fn lower_module(prg: &cst::decls::Module) -> LoweringResult<interop_ast::Module> {
    let decls = prg.decls.lower()?;

    Ok(interop_ast::Module { uri: prg.uri.clone(), decls })
}
