use pytok_util::{ByteSource, SourceError};

use super::core::Lexer;
use crate::classifier;
use crate::token::TokenType;

impl<'a, S: ByteSource> Lexer<'a, S> {
    /// A leading `0` forks into a radix prefix, a run of more zeros (or
    /// an ill-formed leading-zero integer), a leading-dot float, or an
    /// exponent/imaginary suffix on the bare `0` itself.
    pub(crate) fn lex_starting_with_zero(&mut self) -> Result<(), SourceError> {
        let line = self.current_line;
        self.mark();
        match self.next_byte()? {
            Some(b'b') | Some(b'B') => {
                self.lex_radix_integer(line, "0b", 2, TokenType::BinaryIntegerLiteral,
                    "Binary integer literal requires at least one binary digit.")
            }
            Some(b'o') | Some(b'O') => {
                self.lex_radix_integer(line, "0o", 8, TokenType::OctalIntegerLiteral,
                    "Octal integer literal requires at least one octal digit.")
            }
            Some(b'x') | Some(b'X') => {
                self.lex_radix_integer(line, "0x", 16, TokenType::HexIntegerLiteral,
                    "Hex integer literal requires at least one hex digit.")
            }
            Some(b) if b.is_ascii_digit() => self.lex_zero_prefixed_run(line, b),
            Some(b'.') => self.lex_float_fraction(line, "0.".to_string()),
            Some(b @ (b'e' | b'E')) => self.lex_exponent(line, "0".to_string(), b, TokenType::IntegerLiteral),
            Some(b @ (b'j' | b'J')) => {
                let mut lexeme = "0".to_string();
                lexeme.push(b as char);
                self.emit(TokenType::ImaginaryLiteral, lexeme, line);
                Ok(())
            }
            Some(b) if classifier::is_ident_start(b as char) => {
                let mut lexeme = "0".to_string();
                lexeme.push(b as char);
                self.consume_word_tail(&mut lexeme)?;
                self.error("Identifier cannot start with a digit.", line);
                Ok(())
            }
            other => {
                self.push_back_option(other);
                self.emit(TokenType::IntegerLiteral, "0", line);
                Ok(())
            }
        }
    }

    fn lex_zero_prefixed_run(&mut self, line: u32, first: u8) -> Result<(), SourceError> {
        let mut lexeme = "0".to_string();
        let mut saw_nonzero = first != b'0';
        lexeme.push(first as char);
        loop {
            match self.next_byte()? {
                Some(b) if b.is_ascii_digit() => {
                    saw_nonzero |= b != b'0';
                    lexeme.push(b as char);
                }
                Some(b) if classifier::is_ident_start(b as char) => {
                    lexeme.push(b as char);
                    self.consume_word_tail(&mut lexeme)?;
                    self.error("Identifier cannot start with a digit.", line);
                    return Ok(());
                }
                other => {
                    self.push_back_option(other);
                    break;
                }
            }
        }
        if saw_nonzero {
            self.error("Integer literal cannot start with 0", line);
        } else {
            self.emit(TokenType::IntegerLiteral, lexeme, line);
        }
        Ok(())
    }

    /// Radix-prefixed integers (`0b`, `0o`, `0x`): `prefix` is the two
    /// characters already consumed, `empty_message` is used verbatim when
    /// not even one valid digit follows the prefix.
    fn lex_radix_integer(
        &mut self,
        line: u32,
        prefix: &str,
        radix: u32,
        kind: TokenType,
        empty_message: &'static str,
    ) -> Result<(), SourceError> {
        let mut lexeme = prefix.to_string();
        let mut digits = 0u32;
        loop {
            match self.next_byte()? {
                Some(b) if classifier::is_radix_digit(b as char, radix) => {
                    lexeme.push(b as char);
                    digits += 1;
                }
                Some(b) if classifier::is_ident_continue(b as char) => {
                    lexeme.push(b as char);
                    self.consume_word_tail(&mut lexeme)?;
                    if digits == 0 {
                        self.error(empty_message, line);
                    } else {
                        self.error("Identifier cannot start with a digit.", line);
                    }
                    return Ok(());
                }
                other => {
                    self.push_back_option(other);
                    break;
                }
            }
        }
        if digits == 0 {
            self.error(empty_message, line);
        } else {
            self.emit(kind, lexeme, line);
        }
        Ok(())
    }

    /// A nonzero leading digit.
    pub(crate) fn lex_decimal_integer(&mut self, first: u8) -> Result<(), SourceError> {
        let line = self.current_line;
        let mut lexeme = String::new();
        lexeme.push(first as char);
        loop {
            self.mark();
            match self.next_byte()? {
                Some(b) if b.is_ascii_digit() => lexeme.push(b as char),
                Some(b'.') => {
                    lexeme.push('.');
                    return self.lex_float_fraction(line, lexeme);
                }
                Some(b @ (b'e' | b'E')) => return self.lex_exponent(line, lexeme, b, TokenType::IntegerLiteral),
                Some(b @ (b'j' | b'J')) => {
                    lexeme.push(b as char);
                    self.emit(TokenType::ImaginaryLiteral, lexeme, line);
                    return Ok(());
                }
                Some(b) if classifier::is_ident_start(b as char) => {
                    lexeme.push(b as char);
                    self.consume_word_tail(&mut lexeme)?;
                    self.error("Identifier cannot start with a digit.", line);
                    return Ok(());
                }
                other => {
                    self.push_back_option(other);
                    self.emit(TokenType::IntegerLiteral, lexeme, line);
                    return Ok(());
                }
            }
        }
    }

    /// Consumes the fractional digits after a decimal point, whether
    /// reached from a plain decimal integer, a leading zero, or a
    /// leading-dot float (`operator::lex_dot`).
    pub(crate) fn lex_float_fraction(&mut self, line: u32, mut lexeme: String) -> Result<(), SourceError> {
        loop {
            self.mark();
            match self.next_byte()? {
                Some(b) if b.is_ascii_digit() => lexeme.push(b as char),
                Some(b @ (b'e' | b'E')) => {
                    return self.lex_exponent(line, lexeme, b, TokenType::FloatingPointLiteral)
                }
                Some(b @ (b'j' | b'J')) => {
                    lexeme.push(b as char);
                    self.emit(TokenType::ImaginaryLiteral, lexeme, line);
                    return Ok(());
                }
                Some(b) if classifier::is_ident_start(b as char) => {
                    lexeme.push(b as char);
                    self.consume_word_tail(&mut lexeme)?;
                    self.error("Identifier cannot start with a digit.", line);
                    return Ok(());
                }
                other => {
                    self.push_back_option(other);
                    self.emit(TokenType::FloatingPointLiteral, lexeme, line);
                    return Ok(());
                }
            }
        }
    }

    /// `lexeme` is the literal text collected so far (without the
    /// `e`/`E`), `e` is the exponent marker already read. A mark was taken
    /// (by the caller, immediately before reading `e`) so that if no digit
    /// materializes, `reset` undoes the `e` read itself and the main loop
    /// re-reads it fresh — this is how `1e` becomes `INTEGER_LITERAL("1")`
    /// followed by `IDENTIFIER("e")`.
    fn lex_exponent(
        &mut self,
        line: u32,
        lexeme: String,
        e: u8,
        preceding_kind: TokenType,
    ) -> Result<(), SourceError> {
        let mut exp_lexeme = lexeme.clone();
        exp_lexeme.push(e as char);
        let sign = self.next_byte()?;
        let first_digit = match sign {
            Some(s @ (b'+' | b'-')) => {
                exp_lexeme.push(s as char);
                self.next_byte()?
            }
            other => other,
        };
        match first_digit {
            Some(d) if d.is_ascii_digit() => {
                exp_lexeme.push(d as char);
                loop {
                    match self.next_byte()? {
                        Some(d2) if d2.is_ascii_digit() => exp_lexeme.push(d2 as char),
                        Some(b @ (b'j' | b'J')) => {
                            exp_lexeme.push(b as char);
                            self.emit(TokenType::ImaginaryLiteral, exp_lexeme, line);
                            return Ok(());
                        }
                        other => {
                            self.push_back_option(other);
                            self.emit(TokenType::FloatingPointLiteral, exp_lexeme, line);
                            return Ok(());
                        }
                    }
                }
            }
            _ => {
                self.reset()?;
                self.emit(preceding_kind, lexeme, line);
                Ok(())
            }
        }
    }

    /// Consumes the remainder of a malformed numeric/identifier word up to
    /// the first whitespace, newline, `#`, or other non-continuing byte,
    /// so a single `ERROR` token covers the whole offending lexeme.
    pub(crate) fn consume_word_tail(&mut self, lexeme: &mut String) -> Result<(), SourceError> {
        loop {
            match self.next_byte()? {
                Some(b) if classifier::is_ident_continue(b as char) => lexeme.push(b as char),
                other => {
                    self.push_back_option(other);
                    return Ok(());
                }
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
    fn zero_zeros_and_triple_zero_are_plain_integers() {
        for src in ["0", "00", "000"] {
            let tokens = lex(src);
            assert_eq!(tokens[0].kind, TokenType::IntegerLiteral);
            assert_eq!(tokens[0].value, src);
        }
    }

    #[test]
    fn leading_zero_with_nonzero_digit_is_an_error() {
        let tokens = lex("0123");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenType::Error);
    }

    #[test]
    fn failed_exponent_rewinds_to_identifier() {
        let tokens = lex("1e");
        assert_eq!(tokens[0].kind, TokenType::IntegerLiteral);
        assert_eq!(tokens[0].value, "1");
        assert_eq!(tokens[1].kind, TokenType::Identifier);
        assert_eq!(tokens[1].value, "e");
    }

    #[test]
    fn hex_and_binary_and_octal_literals() {
        let tokens = lex("0x1F");
        assert_eq!(tokens[0].kind, TokenType::HexIntegerLiteral);
        assert_eq!(tokens[0].value, "0x1F");

        let tokens = lex("0b1010");
        assert_eq!(tokens[0].kind, TokenType::BinaryIntegerLiteral);

        let tokens = lex("0o17");
        assert_eq!(tokens[0].kind, TokenType::OctalIntegerLiteral);
    }

    #[test]
    fn empty_radix_prefix_is_an_error() {
        let tokens = lex("0x");
        assert_eq!(tokens[0].kind, TokenType::Error);
    }

    #[test]
    fn radix_literal_followed_by_non_digit_letter_is_identifier_error_not_empty_prefix() {
        let tokens = lex("0x1g");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenType::Error);
        assert_eq!(tokens[0].value, "Identifier cannot start with a digit.");
    }

    #[test]
    fn float_and_imaginary_suffix() {
        let tokens = lex("3.14e-2");
        assert_eq!(tokens[0].kind, TokenType::FloatingPointLiteral);
        assert_eq!(tokens[0].value, "3.14e-2");

        let tokens = lex("1j");
        assert_eq!(tokens[0].kind, TokenType::ImaginaryLiteral);
        assert_eq!(tokens[0].value, "1j");
    }
}
