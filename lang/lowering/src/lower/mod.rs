use interop_ast::Ident;
use interop_parser::cst;

use crate::result::*;

mod decls;
mod exp;

/// Lowering takes a node of the concrete syntax tree to its typed
/// counterpart. Children are lowered before their parents, so the
/// transformation is a single post-order fold over the CST; no node is
/// modified after it has been constructed.
pub trait Lower {
    type Target;

    fn lower(&self) -> LoweringResult<Self::Target>;
}

impl<T: Lower> Lower for Option<T> {
    type Target = Option<T::Target>;

    fn lower(&self) -> LoweringResult<Self::Target> {
        self.as_ref().map(|x| x.lower()).transpose()
    }
}

impl<T: Lower> Lower for Vec<T> {
    type Target = Vec<T::Target>;

    fn lower(&self) -> LoweringResult<Self::Target> {
        self.iter().map(|x| x.lower()).collect()
    }
}

impl<T: Lower> Lower for Box<T> {
    type Target = Box<T::Target>;

    fn lower(&self) -> LoweringResult<Self::Target> {
        Ok(Box::new((**self).lower()?))
    }
}

impl Lower for cst::Ident {
    type Target = Ident;

    fn lower(&self) -> LoweringResult<Self::Target> {
        let cst::Ident { span, id } = self;

        Ok(Ident { span: *span, id: id.clone() })
    }
}
