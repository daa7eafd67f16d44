//! Property tests for the universal invariants the tokenizer is expected
//! to hold over arbitrary input, independent of any single worked example.

use std::collections::HashSet;

use proptest::prelude::*;

use pytok_lex::{keywords, Lexer, Token, TokenType};
use pytok_util::SliceSource;

fn keyword_set() -> HashSet<String> {
    keywords::PYTHON_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

fn lex(src: &str) -> Vec<Token> {
    let keywords = keyword_set();
    Lexer::new(SliceSource::new(src.as_bytes()), &keywords)
        .analyze()
        .expect("in-memory source never fails")
}

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,12}"
        .prop_filter("must not collide with a keyword", |s| {
            !keywords::PYTHON_KEYWORDS.contains(&s.as_str())
        })
}

proptest! {
    /// Any well-formed identifier that isn't a keyword lexes to exactly
    /// one `IDENTIFIER` token carrying it back verbatim.
    #[test]
    fn identifier_round_trips(id in ident_strategy()) {
        let tokens = lex(&id);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenType::Identifier);
        prop_assert_eq!(&tokens[0].value, &id);
    }

    /// Every keyword in the caller's set lexes to exactly one `KEYWORD`
    /// token.
    #[test]
    fn keyword_round_trips(idx in 0..keywords::PYTHON_KEYWORDS.len()) {
        let kw = keywords::PYTHON_KEYWORDS[idx];
        let tokens = lex(kw);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenType::Keyword);
        prop_assert_eq!(tokens[0].value.as_str(), kw);
    }

    /// Running the lexer twice on the same input is deterministic.
    #[test]
    fn idempotent_on_identical_input(src in "[ -~\n]{0,80}") {
        let first = lex(&src);
        let second = lex(&src);
        prop_assert_eq!(first, second);
    }

    /// Every token's line falls within the input's line count, and
    /// `token_start_line` ordering implied by emission order never goes
    /// backwards except across a triple-quoted string's internal newlines
    /// (which only ever advance `current_line`, never rewind it).
    #[test]
    fn line_numbers_are_in_range(src in "[ -~\n]{0,200}") {
        let total_lines = src.matches('\n').count() as u32 + 1;
        let tokens = lex(&src);
        for tok in &tokens {
            prop_assert!(tok.line <= total_lines);
        }
    }

    /// A plain decimal integer with no suffix lexes to a single
    /// `INTEGER_LITERAL` carrying exactly the digits given.
    #[test]
    fn plain_decimal_integer_round_trips(digits in "[1-9][0-9]{0,8}") {
        let tokens = lex(&digits);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenType::IntegerLiteral);
        prop_assert_eq!(&tokens[0].value, &digits);
    }
}
