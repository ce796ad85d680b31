use interop_ast::{Exp, Stmt, Variable};
use interop_parser::cst;

use super::Lower;
use crate::result::*;

mod call;
mod literal;

impl Lower for cst::exp::Exp {
    type Target = Exp;

    fn lower(&self) -> LoweringResult<Self::Target> {
        match self {
            cst::exp::Exp::Call(e) => Ok(e.lower()?.into()),
            cst::exp::Exp::Var(e) => Ok(e.lower()?.into()),
            cst::exp::Exp::IntLit(e) => Ok(e.lower()?.into()),
            cst::exp::Exp::StrLit(e) => Ok(e.lower()?.into()),
            cst::exp::Exp::BoolLit(e) => Ok(e.lower()?.into()),
        }
    }
}

impl Lower for cst::exp::Stmt {
    type Target = Stmt;

    fn lower(&self) -> LoweringResult<Self::Target> {
        match self {
            cst::exp::Stmt::Exp(exp) => Ok(Stmt::Exp((**exp).lower()?)),
        }
    }
}

impl Lower for cst::exp::Var {
    type Target = Variable;

    fn lower(&self) -> LoweringResult<Self::Target> {
        let cst::exp::Var { span, name } = self;

        Ok(Variable { span: *span, name: name.lower()? })
    }
}
