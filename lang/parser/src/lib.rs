pub mod cst;
mod grammar;
pub mod lexer;
mod result;

use url::Url;

use grammar::cst::{DeclsParser, ExpParser};
use lexer::Lexer;
pub use result::*;

pub fn parse_exp(s: &str) -> Result<Box<cst::exp::Exp>, ParseError> {
    ExpParser::new().parse(Lexer::new(s)).map_err(From::from)
}

pub fn parse_module(uri: Url, s: &str) -> Result<cst::decls::Module, ParseError> {
    let decls = DeclsParser::new().parse(Lexer::new(s))?;
    Ok(cst::decls::Module { uri, decls })
}

#[cfg(test)]
mod parser_tests {
    use url::Url;

    use super::*;
    use crate::cst::exp;

    fn uri() -> Url {
        Url::parse("inmemory:///scratch.int").unwrap()
    }

    #[test]
    fn empty_module() {
        let module = parse_module(uri(), "").unwrap();
        assert!(module.decls.is_empty());
    }

    #[test]
    fn func_signature() {
        let src = "func add(x, y: Int = 0): Int { add(x, y: y) }";
        let module = parse_module(uri(), src).unwrap();
        assert_eq!(module.decls.len(), 1);

        let cst::decls::Decl::Func(func) = &module.decls[0];
        assert_eq!(func.name.id, "add");
        assert_eq!(func.span.start().offset.to_usize(), 0);
        assert_eq!(func.span.end().offset.to_usize(), src.len());

        // One parameter group with two names sharing a type and a default
        assert_eq!(func.params.len(), 1);
        let param = &func.params[0];
        let names: Vec<&str> = param.names.iter().map(|name| name.id.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
        assert_eq!(param.typ.name.id, "Int");
        assert!(matches!(param.default.as_deref(), Some(exp::Exp::IntLit(lit)) if lit.val == 0));

        assert_eq!(func.ret_typ.as_ref().unwrap().name.id, "Int");
        assert_eq!(func.body.len(), 1);
    }

    #[test]
    fn func_without_return_type() {
        let module = parse_module(uri(), "func main() { }").unwrap();
        let cst::decls::Decl::Func(func) = &module.decls[0];
        assert!(func.params.is_empty());
        assert!(func.ret_typ.is_none());
        assert!(func.body.is_empty());
    }

    #[test]
    fn trailing_commas() {
        let src = "func f(x: Int,): Int { f(1,) }";
        let module = parse_module(uri(), src).unwrap();
        let cst::decls::Decl::Func(func) = &module.decls[0];
        assert_eq!(func.params.len(), 1);
        let exp::Stmt::Exp(body) = &func.body[0];
        let exp::Exp::Call(call) = body.as_ref() else {
            panic!("expected a call statement");
        };
        assert_eq!(call.args.len(), 1);
    }

    #[test]
    fn mixed_call_args() {
        let exp = parse_exp("f(x, y: 2)").unwrap();
        let exp::Exp::Call(call) = exp.as_ref() else {
            panic!("expected a call");
        };
        assert_eq!(call.name.id, "f");
        assert_eq!(call.args.len(), 2);
        assert!(
            matches!(&call.args[0], exp::Arg::UnnamedArg(arg) if matches!(arg.as_ref(), exp::Exp::Var(var) if var.name.id == "x"))
        );
        assert!(
            matches!(&call.args[1], exp::Arg::NamedArg(name, arg) if name.id == "y" && matches!(arg.as_ref(), exp::Exp::IntLit(lit) if lit.val == 2))
        );
    }

    #[test]
    fn literals() {
        assert!(matches!(*parse_exp("42").unwrap(), exp::Exp::IntLit(lit) if lit.val == 42));
        assert!(matches!(*parse_exp("true").unwrap(), exp::Exp::BoolLit(lit) if lit.val));
        assert!(matches!(*parse_exp("false").unwrap(), exp::Exp::BoolLit(lit) if !lit.val));

        let exp = parse_exp(r#""a\nb""#).unwrap();
        let exp::Exp::StrLit(lit) = exp.as_ref() else {
            panic!("expected a string literal");
        };
        assert_eq!(lit.original, r"a\nb");
        assert_eq!(lit.unescaped, "a\nb");
    }

    #[test]
    fn error_carries_position() {
        let err = parse_module(uri(), "func f(: Int) { }").unwrap_err();
        let ParseError::UnrecognizedToken { span, .. } = err else {
            panic!("expected an unrecognized token error");
        };
        assert_eq!(span.offset(), 7);
    }

    #[test]
    fn error_unexpected_eof() {
        let err = parse_module(uri(), "func f(").unwrap_err();
        assert!(matches!(err, ParseError::UnrecognizedEof { .. }));
    }

    #[test]
    fn error_invalid_token() {
        let err = parse_module(uri(), "func f() { § }").unwrap_err();
        assert!(matches!(err, ParseError::InvalidToken { .. }));
    }
}
