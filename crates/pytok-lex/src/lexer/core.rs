use std::collections::HashSet;

use pytok_util::{ByteSource, SourceError};

use crate::token::{DfaState, Token, TokenType};

/// Tab stops round up to the next multiple of this many columns.
pub(crate) const MAX_INDENT_LENGTH: u32 = 8;

/// Drives a [`ByteSource`] through the DFA described across this module's
/// siblings and collects the resulting token stream.
///
/// Identifier, numeric, string, and operator recognition are each fully
/// resolved within a single recursive-descent call (see `identifier.rs`,
/// `numeric.rs`, `string.rs`, `operator.rs`) rather than suspending across
/// loop iterations, so only the handful of states that must survive
/// between characters — indentation measurement and backslash
/// continuation — live in `self.state`.
pub struct Lexer<'a, S: ByteSource> {
    source: S,
    keywords: &'a HashSet<String>,
    pub(crate) tokens: Vec<Token>,
    pub(crate) state: DfaState,
    pub(crate) current_line: u32,
    pub(crate) blank_line: bool,
    pub(crate) current_indent: u32,
    pub(crate) indent_stack: Vec<u32>,
    lookahead: Option<u8>,
}

impl<'a, S: ByteSource> Lexer<'a, S> {
    pub fn new(source: S, keywords: &'a HashSet<String>) -> Self {
        Self {
            source,
            keywords,
            tokens: Vec::new(),
            state: DfaState::Initial,
            current_line: 0,
            blank_line: true,
            current_indent: 0,
            indent_stack: vec![0],
            lookahead: None,
        }
    }

    /// Runs the lexer to completion and returns the token stream. A
    /// lexer is single-use: this consumes `self`.
    pub fn analyze(mut self) -> Result<Vec<Token>, SourceError> {
        loop {
            match self.next_byte()? {
                Some(b) => self.dispatch(b)?,
                None => {
                    self.finish()?;
                    break;
                }
            }
        }
        Ok(self.tokens)
    }

    pub(crate) fn next_byte(&mut self) -> Result<Option<u8>, SourceError> {
        if let Some(b) = self.lookahead.take() {
            return Ok(Some(b));
        }
        self.source.read()
    }

    /// Un-reads a single byte so the next `next_byte` call returns it
    /// again. Every sub-automaton in this crate needs at most one byte of
    /// this; the exponent path (`numeric.rs`) uses the source's own
    /// `mark`/`reset` instead when it must undo more than one.
    pub(crate) fn push_back(&mut self, b: u8) {
        debug_assert!(
            self.lookahead.is_none(),
            "only one byte of lookahead is supported"
        );
        self.lookahead = Some(b);
    }

    pub(crate) fn push_back_option(&mut self, b: Option<u8>) {
        if let Some(byte) = b {
            self.push_back(byte);
        }
    }

    pub(crate) fn mark(&mut self) {
        self.source.mark();
    }

    pub(crate) fn reset(&mut self) -> Result<(), SourceError> {
        self.source.reset()
    }

    pub(crate) fn emit(&mut self, kind: TokenType, value: impl Into<String>, line: u32) {
        self.tokens.push(Token::new(kind, value, line));
    }

    pub(crate) fn emit_fixed(&mut self, kind: TokenType, line: u32) {
        self.tokens.push(Token::fixed(kind, line));
    }

    pub(crate) fn error(&mut self, message: impl Into<String>, line: u32) {
        self.tokens.push(Token::error(message, line));
    }

    fn dispatch(&mut self, b: u8) -> Result<(), SourceError> {
        match self.state {
            DfaState::Initial => self.step_initial(b),
            DfaState::Indent | DfaState::FirstIndent => self.step_indent(b),
            DfaState::Backslash => self.step_backslash(b),
        }
    }

    /// End-of-input is treated as if a newline followed, so any token in
    /// progress terminates normally. By the time `analyze`'s loop observes
    /// true end-of-input, every in-progress lexeme has already resolved
    /// itself against its own `None` case (identifiers, numbers, strings,
    /// and operators each do this directly — see
    /// `string::lex_triple_quoted_body` for the one case, an unterminated
    /// triple-quoted string, that needs an explicit error here), so only
    /// the persistent states need handling.
    fn finish(&mut self) -> Result<(), SourceError> {
        match self.state {
            DfaState::Initial => {
                if !self.blank_line {
                    self.emit_fixed(TokenType::Newline, self.current_line);
                }
            }
            DfaState::Indent | DfaState::FirstIndent => {}
            DfaState::Backslash => {
                let line = self.current_line;
                self.error("Backslash does not continue a line.", line);
            }
        }
        Ok(())
    }

    /// The top-level dispatcher: looks at the current byte and decides
    /// which recognizer takes over.
    pub(crate) fn step_initial(&mut self, b: u8) -> Result<(), SourceError> {
        match b {
            b'\n' => self.handle_newline(),
            b'\\' => {
                self.state = DfaState::Backslash;
                Ok(())
            }
            b'#' => self.lex_comment(),
            b' ' | b'\t' if self.blank_line => {
                self.current_indent = 0;
                self.state = DfaState::FirstIndent;
                self.step_indent(b)
            }
            b' ' | b'\t' => Ok(()),
            _ => {
                // Every remaining branch starts real content: mark the
                // line as no longer blank before dispatching it. This
                // matters on the very first physical line of a file,
                // which reaches `INITIAL` directly rather than via the
                // indentation tracker (every later line's first non-blank
                // byte passes through `step_indent`, which does the same).
                self.blank_line = false;
                match b {
                    b'u' | b'U' => self.lex_identifier_or_string_prefix(b),
                    b'0' => self.lex_starting_with_zero(),
                    b if b.is_ascii_digit() => self.lex_decimal_integer(b),
                    b if crate::classifier::is_ident_start(b as char) => {
                        self.lex_keyword_or_identifier(b)
                    }
                    b'\'' => self.lex_single_or_triple_quoted(),
                    b'"' => self.lex_double_quoted(),
                    _ => self.lex_operator_or_delimiter(b),
                }
            }
        }
    }

    /// The line-feed handler shared by `INITIAL`, the indentation
    /// tracker's own `\n` case, and the end of a comment.
    pub(crate) fn handle_newline(&mut self) -> Result<(), SourceError> {
        self.current_indent = 0;
        if self.blank_line {
            self.state = if self.tokens.is_empty() {
                DfaState::Initial
            } else {
                DfaState::Indent
            };
        } else {
            self.emit_fixed(TokenType::Newline, self.current_line);
            self.blank_line = true;
            self.state = DfaState::Indent;
        }
        self.current_line += 1;
        Ok(())
    }
}
