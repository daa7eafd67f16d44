use pytok_util::{ByteSource, SourceError};

use super::core::Lexer;
use crate::classifier;
use crate::token::TokenType;

impl<'a, S: ByteSource> Lexer<'a, S> {
    /// Accumulates identifier-continue bytes, then classifies the
    /// finished lexeme against the caller's keyword set.
    pub(crate) fn lex_keyword_or_identifier(&mut self, first: u8) -> Result<(), SourceError> {
        let line = self.current_line;
        let mut lexeme = String::new();
        lexeme.push(first as char);
        loop {
            match self.next_byte()? {
                Some(b) if classifier::is_ident_continue(b as char) => lexeme.push(b as char),
                other => {
                    self.push_back_option(other);
                    break;
                }
            }
        }
        if self.keywords.contains(&lexeme) {
            self.emit(TokenType::Keyword, lexeme, line);
        } else {
            self.emit(TokenType::Identifier, lexeme, line);
        }
        Ok(())
    }

    /// A leading `u`/`U` might be a Python-style string prefix (`u'...'`,
    /// `u"..."`) rather than the start of an identifier. One character of
    /// lookahead settles it.
    pub(crate) fn lex_identifier_or_string_prefix(&mut self, prefix: u8) -> Result<(), SourceError> {
        match self.next_byte()? {
            Some(b'\'') => self.lex_single_or_triple_quoted(),
            Some(b'"') => self.lex_double_quoted(),
            other => {
                self.push_back_option(other);
                self.lex_keyword_or_identifier(prefix)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pytok_util::SliceSource;

    use crate::lexer::Lexer;
    use crate::token::TokenType;

    fn lex(src: &str, keywords: &HashSet<String>) -> Vec<crate::token::Token> {
        let lexer = Lexer::new(SliceSource::new(src.as_bytes()), keywords);
        lexer.analyze().expect("in-memory source never fails")
    }

    #[test]
    fn plain_identifier_round_trips() {
        let tokens = lex("foo_bar2", &HashSet::new());
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenType::Identifier);
        assert_eq!(tokens[0].value, "foo_bar2");
    }

    #[test]
    fn keyword_set_membership_drives_classification() {
        let keywords: HashSet<String> = ["if".to_string()].into_iter().collect();
        let tokens = lex("if", &keywords);
        assert_eq!(tokens[0].kind, TokenType::Keyword);

        let tokens = lex("iffy", &keywords);
        assert_eq!(tokens[0].kind, TokenType::Identifier);
    }

    #[test]
    fn u_prefix_before_quote_starts_a_string() {
        let tokens = lex("u'hi'", &HashSet::new());
        assert_eq!(tokens[0].kind, TokenType::StringLiteral);
        assert_eq!(tokens[0].value, "hi");
    }

    #[test]
    fn u_prefix_without_quote_is_an_identifier() {
        let tokens = lex("undefined", &HashSet::new());
        assert_eq!(tokens[0].kind, TokenType::Identifier);
        assert_eq!(tokens[0].value, "undefined");
    }
}
