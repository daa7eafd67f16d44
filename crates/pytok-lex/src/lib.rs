//! pytok-lex - single-pass tokenizer for a Python-3-shaped surface syntax.
//!
//! The crate is a straight pipeline, leaves first:
//!
//! 1. [`classifier`] - pure character predicates, no state.
//! 2. [`pytok_util::ByteSource`] - the input cursor this crate is generic
//!    over (re-exported here for convenience).
//! 3. [`lexer::Lexer`] - the DFA engine and indentation tracker, split
//!    across the `lexer` submodules by recognizer phase.
//! 4. [`token`] - the `Token`/`TokenType` data this crate produces.
//!
//! [`keywords`] is a convenience list only; the tokenizer never consults
//! it directly (see [`Lexer::new`]).
//!
//! ```
//! use std::collections::HashSet;
//! use pytok_lex::{keywords, Lexer};
//! use pytok_util::SliceSource;
//!
//! let keywords: HashSet<String> = keywords::PYTHON_KEYWORDS
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let source = SliceSource::new(b"if ready:\n    go()\n");
//! let tokens = Lexer::new(source, &keywords).analyze().unwrap();
//! assert_eq!(tokens[0].kind, pytok_lex::TokenType::Keyword);
//! ```

pub mod classifier;
pub mod keywords;
mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{DfaState, OperatorState, Token, TokenType};

pub use pytok_util::{ByteSource, Sentinel, SliceSource, SourceError};
