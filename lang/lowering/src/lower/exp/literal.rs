use interop_ast::{Literal, LiteralKind};
use interop_parser::cst;

use crate::lower::Lower;
use crate::result::*;

impl Lower for cst::exp::IntLit {
    type Target = Literal;

    fn lower(&self) -> LoweringResult<Self::Target> {
        let cst::exp::IntLit { span, val } = self;

        Ok(Literal { span: *span, kind: LiteralKind::Int(*val) })
    }
}

impl Lower for cst::exp::StrLit {
    type Target = Literal;

    fn lower(&self) -> LoweringResult<Self::Target> {
        let cst::exp::StrLit { span, original, unescaped } = self;

        Ok(Literal {
            span: *span,
            kind: LiteralKind::Str { original: original.clone(), unescaped: unescaped.clone() },
        })
    }
}

impl Lower for cst::exp::BoolLit {
    type Target = Literal;

    fn lower(&self) -> LoweringResult<Self::Target> {
        // Only the boolean value survives; the token text is discarded.
        let cst::exp::BoolLit { span, val } = self;

        Ok(Literal { span: *span, kind: LiteralKind::Bool(*val) })
    }
}
