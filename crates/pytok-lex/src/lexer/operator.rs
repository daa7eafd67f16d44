use pytok_util::{ByteSource, SourceError};

use super::core::Lexer;
use crate::token::{DfaState, OperatorState, TokenType};

impl<'a, S: ByteSource> Lexer<'a, S> {
    /// Dispatches the remaining single characters that the `INITIAL`
    /// dispatcher doesn't give a dedicated branch to: the terminal
    /// single-character delimiters (via [`OperatorState`]) and every
    /// operator that needs at least one character of lookahead to settle
    /// between its short and compound-assignment spellings.
    pub(crate) fn lex_operator_or_delimiter(&mut self, b: u8) -> Result<(), SourceError> {
        let line = self.current_line;
        if let Some(state) = OperatorState::from_char(b as char) {
            self.emit_fixed(state.token_type(), line);
            return Ok(());
        }
        match b {
            b'+' => self.finish_or_assign(line, "+", TokenType::Plus),
            b'%' => self.finish_or_assign(line, "%", TokenType::Percent),
            b'@' => self.finish_or_assign(line, "@", TokenType::At),
            b'&' => self.finish_or_assign(line, "&", TokenType::BitwiseAnd),
            b'|' => self.finish_or_assign(line, "|", TokenType::BitwiseOr),
            b'^' => self.finish_or_assign(line, "^", TokenType::BitwiseXor),
            b'=' => self.lex_assign(line),
            b':' => self.lex_colon(line),
            b'-' => self.lex_minus(line),
            b'*' => self.lex_asterisk(line),
            b'/' => self.lex_slash(line),
            b'<' => self.lex_less(line),
            b'>' => self.lex_greater(line),
            b'!' => self.lex_exclamation(line),
            b'.' => self.lex_dot(),
            _ => {
                self.error("Invalid symbol.", line);
                Ok(())
            }
        }
    }

    /// Shared tail for every operator that tests a trailing `=` to become
    /// the generic `ASSIGNMENT_OPERATOR`: `PLUS`, `PERCENT`, `AT`,
    /// `BITWISE_AND`, `BITWISE_OR`, `BITWISE_XOR`, and, composed with one
    /// extra character of lookahead first, `ASTERISK`/`POWER` and
    /// `SLASH`/`DOUBLE_SLASH`.
    fn finish_or_assign(&mut self, line: u32, base: &str, kind: TokenType) -> Result<(), SourceError> {
        match self.next_byte()? {
            Some(b'=') => {
                let mut lexeme = base.to_string();
                lexeme.push('=');
                self.emit(TokenType::AssignmentOperator, lexeme, line);
            }
            other => {
                self.push_back_option(other);
                self.emit_fixed(kind, line);
            }
        }
        Ok(())
    }

    fn lex_assign(&mut self, line: u32) -> Result<(), SourceError> {
        match self.next_byte()? {
            Some(b'=') => self.emit_fixed(TokenType::Equal, line),
            other => {
                self.push_back_option(other);
                self.emit_fixed(TokenType::Assign, line);
            }
        }
        Ok(())
    }

    /// `:=` is the walrus operator, a token type of its own rather than a
    /// generic `ASSIGNMENT_OPERATOR`.
    fn lex_colon(&mut self, line: u32) -> Result<(), SourceError> {
        match self.next_byte()? {
            Some(b'=') => self.emit(TokenType::ColonAssign, ":=", line),
            other => {
                self.push_back_option(other);
                self.emit_fixed(TokenType::Colon, line);
            }
        }
        Ok(())
    }

    fn lex_minus(&mut self, line: u32) -> Result<(), SourceError> {
        match self.next_byte()? {
            Some(b'=') => self.emit(TokenType::AssignmentOperator, "-=", line),
            Some(b'>') => self.emit_fixed(TokenType::Arrow, line),
            other => {
                self.push_back_option(other);
                self.emit_fixed(TokenType::Minus, line);
            }
        }
        Ok(())
    }

    fn lex_asterisk(&mut self, line: u32) -> Result<(), SourceError> {
        match self.next_byte()? {
            Some(b'*') => self.finish_or_assign(line, "**", TokenType::Power),
            other => {
                self.push_back_option(other);
                self.finish_or_assign(line, "*", TokenType::Asterisk)
            }
        }
    }

    fn lex_slash(&mut self, line: u32) -> Result<(), SourceError> {
        match self.next_byte()? {
            Some(b'/') => self.finish_or_assign(line, "//", TokenType::DoubleSlash),
            other => {
                self.push_back_option(other);
                self.finish_or_assign(line, "/", TokenType::Slash)
            }
        }
    }

    fn lex_less(&mut self, line: u32) -> Result<(), SourceError> {
        match self.next_byte()? {
            Some(b'<') => self.finish_or_assign(line, "<<", TokenType::LeftShift),
            Some(b'=') => {
                self.emit_fixed(TokenType::LessEqual, line);
                Ok(())
            }
            other => {
                self.push_back_option(other);
                self.emit_fixed(TokenType::Less, line);
                Ok(())
            }
        }
    }

    fn lex_greater(&mut self, line: u32) -> Result<(), SourceError> {
        match self.next_byte()? {
            Some(b'>') => self.finish_or_assign(line, ">>", TokenType::RightShift),
            Some(b'=') => {
                self.emit_fixed(TokenType::GreaterEqual, line);
                Ok(())
            }
            other => {
                self.push_back_option(other);
                self.emit_fixed(TokenType::Greater, line);
                Ok(())
            }
        }
    }

    /// `!` is legal only as `!=` or immediately before `(`, where it is
    /// kept as a standalone `EXCLAMATION_MARK` for the enclosing parser's
    /// benefit; anything else is an error.
    fn lex_exclamation(&mut self, line: u32) -> Result<(), SourceError> {
        match self.next_byte()? {
            Some(b'=') => self.emit_fixed(TokenType::NotEqual, line),
            Some(b'(') => {
                self.emit_fixed(TokenType::ExclamationMark, line);
                self.push_back(b'(');
            }
            other => {
                self.push_back_option(other);
                self.error("Error. '!=' operator expected.", line);
            }
        }
        Ok(())
    }

    /// `DOT`: a digit after `.` starts a leading-dot float; otherwise a
    /// plain `DOT` token.
    pub(crate) fn lex_dot(&mut self) -> Result<(), SourceError> {
        let line = self.current_line;
        match self.next_byte()? {
            Some(b) if b.is_ascii_digit() => {
                let mut lexeme = String::from('.');
                lexeme.push(b as char);
                self.lex_float_fraction(line, lexeme)
            }
            other => {
                self.push_back_option(other);
                self.emit_fixed(TokenType::Dot, line);
                Ok(())
            }
        }
    }

    /// Discards bytes until the line feed, then hands off to the same
    /// line-feed handler `INITIAL` uses.
    pub(crate) fn lex_comment(&mut self) -> Result<(), SourceError> {
        loop {
            match self.next_byte()? {
                Some(b'\n') => return self.handle_newline(),
                Some(_) => continue,
                None => return Ok(()),
            }
        }
    }

    /// A following newline is swallowed as a line continuation; anything
    /// else cancels it, with the character that cancelled it re-dispatched
    /// through `INITIAL` rather than discarded.
    pub(crate) fn step_backslash(&mut self, b: u8) -> Result<(), SourceError> {
        match b {
            b'\n' => {
                self.current_line += 1;
                self.state = DfaState::Initial;
                Ok(())
            }
            _ => {
                let line = self.current_line;
                self.error("Backslash does not continue a line.", line);
                self.state = DfaState::Initial;
                self.step_initial(b)
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

    fn lex(src: &str) -> Vec<crate::token::Token> {
        let keywords = HashSet::new();
        let lexer = Lexer::new(SliceSource::new(src.as_bytes()), &keywords);
        lexer.analyze().expect("in-memory source never fails")
    }

    #[test]
    fn compound_assignment_operators() {
        let tokens = lex("a += 1");
        assert_eq!(tokens[1].kind, TokenType::AssignmentOperator);
        assert_eq!(tokens[1].value, "+=");
    }

    #[test]
    fn two_way_operators_disambiguate() {
        let cases = [
            ("- >", TokenType::Minus),
            ("->", TokenType::Arrow),
            ("* x", TokenType::Asterisk),
            ("**", TokenType::Power),
            ("/ x", TokenType::Slash),
            ("//", TokenType::DoubleSlash),
            ("< x", TokenType::Less),
            ("<<", TokenType::LeftShift),
            ("> x", TokenType::Greater),
            (">>", TokenType::RightShift),
        ];
        for (src, expected) in cases {
            let tokens = lex(src);
            assert_eq!(tokens[0].kind, expected, "source: {src:?}");
        }
    }

    #[test]
    fn walrus_operator() {
        let tokens = lex("x := 1");
        assert_eq!(tokens[1].kind, TokenType::ColonAssign);
    }

    #[test]
    fn bang_before_paren_is_preserved() {
        let tokens = lex("!(x)");
        assert_eq!(tokens[0].kind, TokenType::ExclamationMark);
        assert_eq!(tokens[1].kind, TokenType::LeftParenthesis);
    }

    #[test]
    fn bang_equal_is_not_equal() {
        let tokens = lex("a != b");
        assert_eq!(tokens[1].kind, TokenType::NotEqual);
    }

    #[test]
    fn lone_bang_at_eof_is_an_error() {
        let tokens = lex("!");
        assert_eq!(tokens[0].kind, TokenType::Error);
    }

    #[test]
    fn backslash_newline_suppresses_newline_token() {
        let tokens = lex("x = \\\n  1\n");
        assert!(!tokens.iter().any(|t| t.kind == TokenType::Indent));
        assert_eq!(tokens.iter().filter(|t| t.kind == TokenType::Newline).count(), 1);
    }

    #[test]
    fn backslash_not_followed_by_newline_errors() {
        let tokens = lex("x = \\y\n");
        assert!(tokens.iter().any(|t| t.kind == TokenType::Error));
    }

    #[test]
    fn comment_is_not_emitted() {
        let tokens = lex("x = 1 # trailing comment\n");
        assert!(tokens.iter().all(|t| t.kind != TokenType::Error));
        assert_eq!(tokens.len(), 4); // IDENTIFIER, ASSIGN, INTEGER_LITERAL, NEWLINE
    }
}
