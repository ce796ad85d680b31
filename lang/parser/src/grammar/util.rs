use interop_miette_util::codespan::{Loc, Span};

pub fn span(l: Loc, r: Loc) -> Span {
    Span::new(l, r)
}

/// Decode the escape sequences of a string literal.
///
/// The lexer only accepts the escape sequences handled here, so decoding
/// cannot fail.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            // `\"` and `\\` decode to the escaped character itself.
            Some(other) => out.push(other),
            None => (),
        }
    }
    out
}

#[cfg(test)]
mod unescape_tests {
    use super::unescape;

    #[test]
    fn plain() {
        assert_eq!(unescape("hello"), "hello");
    }

    #[test]
    fn escapes() {
        assert_eq!(unescape(r#"a\nb\t\"c\"\\"#), "a\nb\t\"c\"\\");
    }
}
