use interop_ast::{Arg, Call};
use interop_parser::cst;

use crate::lower::Lower;
use crate::result::*;

impl Lower for cst::exp::Call {
    type Target = Call;

    fn lower(&self) -> LoweringResult<Self::Target> {
        let cst::exp::Call { span, name, args } = self;

        Ok(Call { span: *span, name: name.lower()?, args: args.lower()? })
    }
}

/// Arguments are lowered in the order they were written. Matching argument
/// labels and arity against the callee's parameters is left to later
/// validation stages.
impl Lower for cst::exp::Arg {
    type Target = Arg;

    fn lower(&self) -> LoweringResult<Self::Target> {
        match self {
            cst::exp::Arg::UnnamedArg(exp) => Ok(Arg::UnnamedArg { arg: exp.lower()? }),
            cst::exp::Arg::NamedArg(name, exp) => {
                Ok(Arg::NamedArg { name: name.lower()?, arg: exp.lower()? })
            }
        }
    }
}
