use pytok_util::{ByteSource, SourceError};

use super::core::{Lexer, MAX_INDENT_LENGTH};
use crate::token::{DfaState, TokenType};

impl<'a, S: ByteSource> Lexer<'a, S> {
    /// Leading-whitespace measurement for a logical line. Shared
    /// between `INDENT` (ordinary lines) and `FIRST_INDENT` (leading
    /// whitespace before any token has been emitted at all), which differ
    /// only in what happens once real content is reached: `FIRST_INDENT`
    /// has no indentation level to compare against yet, so any content
    /// there is itself the error.
    pub(crate) fn step_indent(&mut self, b: u8) -> Result<(), SourceError> {
        let first_indent = self.state == DfaState::FirstIndent;
        match b {
            b' ' => {
                self.current_indent += 1;
                Ok(())
            }
            b'\t' => {
                self.current_indent += MAX_INDENT_LENGTH - (self.current_indent % MAX_INDENT_LENGTH);
                Ok(())
            }
            b'\n' => {
                self.current_indent = 0;
                self.handle_newline()
            }
            b'#' => self.lex_comment(),
            b'\\' => {
                self.blank_line = false;
                self.state = DfaState::Initial;
                self.step_initial(b)
            }
            _ if first_indent => {
                let line = self.current_line;
                self.error("Unexpected indent.", line);
                self.blank_line = false;
                self.state = DfaState::Initial;
                self.step_initial(b)
            }
            _ => {
                self.apply_indent_comparison();
                self.blank_line = false;
                self.state = DfaState::Initial;
                self.step_initial(b)
            }
        }
    }

    fn apply_indent_comparison(&mut self) {
        let line = self.current_line;
        let top = *self.indent_stack.last().unwrap_or(&0);
        if self.current_indent > top {
            self.indent_stack.push(self.current_indent);
            self.emit_fixed(TokenType::Indent, line);
        } else if self.current_indent < top {
            if self.indent_stack.contains(&self.current_indent) {
                while *self.indent_stack.last().unwrap_or(&0) != self.current_indent {
                    self.indent_stack.pop();
                    self.emit_fixed(TokenType::Dedent, line);
                }
            } else {
                self.error("Dedent does not match to any indentation level.", line);
            }
        }
    }
}
