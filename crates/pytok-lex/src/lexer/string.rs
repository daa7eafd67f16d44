use pytok_util::{ByteSource, SourceError};

use super::core::Lexer;
use crate::classifier;
use crate::token::TokenType;

impl<'a, S: ByteSource> Lexer<'a, S> {
    /// Entered right after the opening `'`. A second `'` is ambiguous
    /// between an empty string and the start of a triple-quoted one, so it
    /// gets its own disambiguation step; anything else is the first byte
    /// of an ordinary single-quoted body.
    pub(crate) fn lex_single_or_triple_quoted(&mut self) -> Result<(), SourceError> {
        let line = self.current_line;
        match self.next_byte()? {
            Some(b'\'') => self.lex_closed_single_or_opened_triple(line),
            Some(b'\\') => {
                let mut buf = Vec::new();
                self.lex_escape(&mut buf)?;
                self.lex_single_quoted_body(line, buf)
            }
            Some(b'\n') => {
                self.error("Missing closing single quote.", line);
                Ok(())
            }
            Some(b) => self.lex_single_quoted_body(line, vec![b]),
            None => {
                self.error("Missing closing single quote.", line);
                Ok(())
            }
        }
    }

    /// We've seen `''`; a third `'` commits to a triple-quoted string,
    /// anything else means the empty single-quoted string already closed.
    fn lex_closed_single_or_opened_triple(&mut self, line: u32) -> Result<(), SourceError> {
        match self.next_byte()? {
            Some(b'\'') => self.lex_triple_quoted_body(line, Vec::new()),
            other => {
                self.push_back_option(other);
                self.emit(TokenType::StringLiteral, "", line);
                Ok(())
            }
        }
    }

    fn lex_single_quoted_body(&mut self, line: u32, mut buf: Vec<u8>) -> Result<(), SourceError> {
        loop {
            match self.next_byte()? {
                Some(b'\'') => {
                    self.emit_string(buf, line);
                    return Ok(());
                }
                Some(b'\\') => self.lex_escape(&mut buf)?,
                Some(b'\n') => {
                    self.error("Missing closing single quote.", line);
                    return Ok(());
                }
                Some(b) => buf.push(b),
                None => {
                    self.error("Missing closing single quote.", line);
                    return Ok(());
                }
            }
        }
    }

    /// Double-quoted string body, symmetric with the single-quoted one.
    pub(crate) fn lex_double_quoted(&mut self) -> Result<(), SourceError> {
        let line = self.current_line;
        let mut buf = Vec::new();
        loop {
            match self.next_byte()? {
                Some(b'"') => {
                    self.emit_string(buf, line);
                    return Ok(());
                }
                Some(b'\\') => self.lex_escape(&mut buf)?,
                Some(b'\n') => {
                    self.error("Missing closing double quote.", line);
                    return Ok(());
                }
                Some(b) => buf.push(b),
                None => {
                    self.error("Missing closing double quote.", line);
                    return Ok(());
                }
            }
        }
    }

    /// Triple-quoted string body, with its two quote-counting lookahead
    /// steps folded in: only a run of exactly three `'` closes the string;
    /// one or two `'` followed by a non-quote are retained verbatim.
    /// Embedded newlines advance `current_line` but the token keeps its
    /// opening `line`. Escapes are processed the same way as the
    /// single/double-quoted bodies, so `\n` inside a triple-quoted string
    /// still becomes a real newline rather than two literal characters.
    pub(crate) fn lex_triple_quoted_body(&mut self, line: u32, mut buf: Vec<u8>) -> Result<(), SourceError> {
        loop {
            match self.next_byte()? {
                Some(b'\'') => match self.next_byte()? {
                    Some(b'\'') => match self.next_byte()? {
                        Some(b'\'') => {
                            self.emit_string(buf, line);
                            return Ok(());
                        }
                        other => {
                            buf.push(b'\'');
                            buf.push(b'\'');
                            self.push_back_option(other);
                        }
                    },
                    other => {
                        buf.push(b'\'');
                        self.push_back_option(other);
                    }
                },
                Some(b'\n') => {
                    buf.push(b'\n');
                    self.current_line += 1;
                }
                Some(b'\\') => self.lex_escape(&mut buf)?,
                Some(b) => buf.push(b),
                None => {
                    self.error("Missing closing triple quote.", line);
                    return Ok(());
                }
            }
        }
    }

    /// Translates a recognized escape, or falls back to the literal
    /// backslash and character for anything else.
    fn lex_escape(&mut self, buf: &mut Vec<u8>) -> Result<(), SourceError> {
        match self.next_byte()? {
            Some(b) => {
                if let Some(translated) = classifier::translate_escape(b as char) {
                    buf.push(translated as u8);
                } else {
                    buf.push(b'\\');
                    buf.push(b);
                }
                Ok(())
            }
            None => {
                buf.push(b'\\');
                Ok(())
            }
        }
    }

    fn emit_string(&mut self, buf: Vec<u8>, line: u32) {
        let value = String::from_utf8_lossy(&buf).into_owned();
        self.emit(TokenType::StringLiteral, value, line);
    }
}
