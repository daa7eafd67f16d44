//! pytok-util - byte source adapter and error types for the pytok tokenizer.
//!
//! This crate is deliberately small: it holds the pieces of the tokenizer
//! that are generic over *where the bytes came from* rather than over the
//! lexical grammar itself. `pytok-lex` depends on it the same way a parser
//! crate would depend on a lexer crate's utility layer — one direction,
//! no cycle back.

mod error;
mod source;

pub use error::SourceError;
pub use source::{ByteSource, SliceSource, Sentinel, MARK_CAPACITY};
