use logos::{Lexer, Logos};

/// Tokens of the duration pattern language.
///
/// Repeated specifier letters are lexed as one token carrying the number of repetitions.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub(crate) enum PatternToken<'a> {
    #[token("-")]
    Minus,

    #[token(".")]
    Dot,

    #[regex("D+", |lex| lex.slice().len())]
    TotalDays(usize),

    #[regex("H+", |lex| lex.slice().len())]
    TotalHours(usize),

    #[regex("M+", |lex| lex.slice().len())]
    TotalMinutes(usize),

    #[regex("S+", |lex| lex.slice().len())]
    TotalSeconds(usize),

    #[regex("h+", |lex| lex.slice().len())]
    Hours(usize),

    #[regex("m+", |lex| lex.slice().len())]
    Minutes(usize),

    #[regex("s+", |lex| lex.slice().len())]
    Seconds(usize),

    #[regex("f+", |lex| lex.slice().len())]
    FixedFraction(usize),

    #[regex("F+", |lex| lex.slice().len())]
    TrimmedFraction(usize),

    #[regex(r"'[^']*'", quoted)]
    Quoted(&'a str),

    #[regex(r"\\.", |lex| &lex.slice()[1..])]
    Escaped(&'a str),

    #[regex(r"[^A-Za-z'\\.+-]", |lex| lex.slice())]
    Literal(&'a str),

    #[error]
    Error,
}

#[inline]
fn quoted<'a>(lex: &mut Lexer<'a, PatternToken<'a>>) -> &'a str {
    let slice = lex.slice();
    &slice[1..slice.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<PatternToken<'_>> {
        PatternToken::lexer(source).collect()
    }

    #[test]
    fn json_roundtrip() {
        assert_eq!(
            tokens("-H:mm:ss.FFFFFFFFF"),
            vec![
                PatternToken::Minus,
                PatternToken::TotalHours(1),
                PatternToken::Literal(":"),
                PatternToken::Minutes(2),
                PatternToken::Literal(":"),
                PatternToken::Seconds(2),
                PatternToken::Dot,
                PatternToken::TrimmedFraction(9),
            ]
        );
    }

    #[test]
    fn literals() {
        assert_eq!(
            tokens("D'd 'h\\h"),
            vec![
                PatternToken::TotalDays(1),
                PatternToken::Quoted("d "),
                PatternToken::Hours(1),
                PatternToken::Escaped("h"),
            ]
        );
    }

    #[test]
    fn unsupported() {
        assert_eq!(tokens("+"), vec![PatternToken::Error]);
        assert_eq!(tokens("x"), vec![PatternToken::Error]);
        assert_eq!(tokens("'open")[0], PatternToken::Error);
    }
}
