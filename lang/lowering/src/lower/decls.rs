use interop_ast::{Decl, Func, Param, Typ};
use interop_miette_util::ToMiette;
use interop_parser::cst;

use super::Lower;
use crate::result::*;

impl Lower for cst::decls::Decl {
    type Target = Decl;

    fn lower(&self) -> LoweringResult<Self::Target> {
        let decl = match self {
            cst::decls::Decl::Func(func) => func.lower()?.into(),
        };
        Ok(decl)
    }
}

impl Lower for cst::decls::Func {
    type Target = Func;

    fn lower(&self) -> LoweringResult<Self::Target> {
        log::trace!("Lowering function declaration: {}", self.name.id);

        let cst::decls::Func { span, name, params, ret_typ, body } = self;

        Ok(Func {
            span: *span,
            name: name.lower()?,
            params: params.lower()?,
            ret_typ: ret_typ.lower()?,
            body: body.lower()?,
        })
    }
}

impl Lower for cst::decls::Param {
    type Target = Param;

    fn lower(&self) -> LoweringResult<Self::Target> {
        let cst::decls::Param { span, names, typ, default } = self;

        // The grammar produces at least one name per parameter group. An
        // empty group here means the grammar and the lowering stage have
        // drifted apart.
        if names.is_empty() {
            return Err(Box::new(LoweringError::Impossible {
                message: "Parameter group without names".to_owned(),
                span: Some(span.to_miette()),
            }));
        }

        Ok(Param {
            span: *span,
            names: names.lower()?,
            typ: typ.lower()?,
            default: default.lower()?,
        })
    }
}

impl Lower for cst::decls::Typ {
    type Target = Typ;

    fn lower(&self) -> LoweringResult<Self::Target> {
        let cst::decls::Typ { span, name } = self;

        Ok(Typ { span: *span, name: name.lower()? })
    }
}
