use std::fmt;

use logos::{Logos, SpannedIter};

use interop_miette_util::codespan::{Loc, Span};

/// An input fragment the lexer does not recognize. This covers stray
/// characters, unterminated or multi-line string literals, unknown escape
/// sequences, and integer literals that do not fit into an `i64`.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct LexicalError {
    pub span: Span,
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid token at {}", self.span)
    }
}

#[derive(Logos, Clone, Debug, PartialEq)]
#[logos(skip r"\s+", skip r"//[^\n\r]*[\n\r]*", error = LexicalError)]
pub enum Token {
    // Keywords
    //
    //
    #[token("func")]
    Func,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // Parens and Braces
    //
    //
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Symbols
    //
    //
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,

    // Identifiers
    //
    //
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    // Literals
    //
    //
    // The callback rejects literals that overflow an `i64`.
    #[regex(r"0|[1-9][0-9]*", |lex| lex.slice().parse::<i64>().ok())]
    IntLit(i64),
    /// We do not allow multi line strings. Only a fixed set of escape
    /// sequences is accepted; decoding happens when the literal node of the
    /// syntax tree is built.
    #[regex(r###""([^"\\\n\r]|\\[\\"nrt0])*""###, |lex| {
        let slice = lex.slice();
        // Remove the surrounding quotation marks
        let inner = &slice[1..slice.len()-1];
        inner.to_string()
    })]
    StrLit(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub type Spanned<Tok, Loc, Error> = Result<(Loc, Tok, Loc), Error>;

pub struct Lexer<'input> {
    // instead of an iterator over characters, we have a token iterator
    token_stream: SpannedIter<'input, Token>,
    input: &'input str,
    cursor: Loc,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        // the Token::lexer() method is provided by the Logos trait
        Self { token_stream: Token::lexer(input).spanned(), input, cursor: Loc::default() }
    }

    /// Advance the cursor to the given byte offset, counting lines and
    /// columns on the way. Offsets must be visited in increasing order.
    fn loc_at(&mut self, offset: usize) -> Loc {
        let from = self.cursor.offset.to_usize();
        for ch in self.input[from..offset].chars() {
            self.cursor.advance(ch);
        }
        self.cursor
    }
}

impl Iterator for Lexer<'_> {
    type Item = Spanned<Token, Loc, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.token_stream.next().map(|(token, span)| {
            let start = self.loc_at(span.start);
            let end = self.loc_at(span.end);
            match token {
                Ok(token) => Ok((start, token, end)),
                Err(_) => Err(LexicalError { span: Span::new(start, end) }),
            }
        })
    }
}

#[cfg(test)]
mod lexer_tests {
    use super::{Lexer, Token};

    fn tokens(input: &str) -> Vec<Token> {
        Lexer::new(input).map(|tok| tok.unwrap().1).collect()
    }

    #[test]
    fn keyword_vs_ident() {
        assert_eq!(tokens("func"), vec![Token::Func]);
        assert_eq!(tokens("funcs"), vec![Token::Ident("funcs".to_string())]);
        assert_eq!(tokens("truey"), vec![Token::Ident("truey".to_string())]);
    }

    #[test]
    fn comment_skipped() {
        let str = "// a comment\nfoo";
        assert_eq!(tokens(str), vec![Token::Ident("foo".to_string())]);
    }

    #[test]
    fn string_lit_simple() {
        let str = r###""hi""###;
        let mut lexer = Lexer::new(str);
        assert_eq!(lexer.next().unwrap().unwrap().1, Token::StrLit("hi".to_string()))
    }

    #[test]
    fn string_lit_escaped_quote() {
        let str = r###""h\"i""###;
        let mut lexer = Lexer::new(str);
        assert_eq!(lexer.next().unwrap().unwrap().1, Token::StrLit("h\\\"i".to_string()))
    }

    #[test]
    fn string_lit_unterminated() {
        let str = r###""hi"###;
        let mut lexer = Lexer::new(str);
        assert!(lexer.next().unwrap().is_err())
    }

    #[test]
    fn string_lit_unknown_escape() {
        let str = r###""h\qi""###;
        let mut lexer = Lexer::new(str);
        assert!(lexer.next().unwrap().is_err())
    }

    #[test]
    fn int_lit_overflow() {
        // One more than i64::MAX
        let mut lexer = Lexer::new("9223372036854775808");
        assert!(lexer.next().unwrap().is_err())
    }

    #[test]
    fn positions() {
        let str = "func\n  foo";
        let mut lexer = Lexer::new(str);

        let (start, _, end) = lexer.next().unwrap().unwrap();
        assert_eq!((start.line.to_usize(), start.column.to_usize()), (0, 0));
        assert_eq!((end.line.to_usize(), end.column.to_usize()), (0, 4));

        let (start, _, end) = lexer.next().unwrap().unwrap();
        assert_eq!((start.line.to_usize(), start.column.to_usize()), (1, 2));
        assert_eq!((end.line.to_usize(), end.column.to_usize()), (1, 5));
        assert_eq!(end.offset.to_usize(), str.len());
    }
}
