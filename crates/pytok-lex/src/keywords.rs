//! Convenience keyword list.
//!
//! The tokenizer itself has no compiled-in notion of which identifiers are
//! reserved — `Lexer::new` takes the keyword set as a parameter (see
//! [`crate::Lexer`]). This module is just a ready-made list callers can
//! build that set from; loading it from a config file or a parser's own
//! grammar table is the caller's business, not this crate's.

/// Python 3 reserved words, as of the 3.x soft-keyword-free core grammar.
/// Soft keywords (`match`, `case`, `_`, `type`) are deliberately excluded:
/// they are context-sensitive at the parser level, not lexically reserved.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn list_has_no_duplicates() {
        let set: HashSet<&str> = PYTHON_KEYWORDS.iter().copied().collect();
        assert_eq!(set.len(), PYTHON_KEYWORDS.len());
    }
}
