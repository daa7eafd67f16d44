//! Token and token-type definitions.
//!
//! DFA states and token types are kept as disjoint enumerations rather
//! than coupled by shared naming: [`TokenType`] is what a [`Token`]
//! carries, [`OperatorState`] is the (small) subset of single-character
//! operator and delimiter dispatch states that resolve to a token type
//! with no further lookahead, and [`OperatorState::token_type`] is the
//! explicit lookup between them.

/// A single lexical token: its classification, the source text it was
/// built from, and the zero-based line on which it started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub value: String,
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenType, value: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
        }
    }

    /// Shorthand for fixed-form tokens whose value is the canonical
    /// spelling of their type (operators, delimiters, structural tokens).
    pub fn fixed(kind: TokenType, line: u32) -> Self {
        let value = kind.canonical_spelling().unwrap_or_default();
        Self::new(kind, value, line)
    }

    pub fn error(message: impl Into<String>, line: u32) -> Self {
        Self::new(TokenType::Error, message, line)
    }
}

/// The closed set of lexical categories a [`Token`] can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Arithmetic
    Plus,
    Minus,
    Asterisk,
    Power,
    Slash,
    DoubleSlash,
    Percent,
    At,

    // Bitwise
    LeftShift,
    RightShift,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseNot,

    // Comparison
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,

    // Walrus
    ColonAssign,

    // Compound assignment; value carries the full lexeme (`+=`, `//=`, ...)
    AssignmentOperator,

    // Delimiters
    LeftParenthesis,
    RightParenthesis,
    LeftSquareBracket,
    RightSquareBracket,
    LeftCurlyBracket,
    RightCurlyBracket,
    Comma,
    Colon,
    Dot,
    Semicolon,
    Assign,
    Arrow,
    ExclamationMark,

    // Literals
    IntegerLiteral,
    BinaryIntegerLiteral,
    OctalIntegerLiteral,
    HexIntegerLiteral,
    FloatingPointLiteral,
    ImaginaryLiteral,
    StringLiteral,

    // Structural
    Newline,
    Indent,
    Dedent,

    // Meta
    Identifier,
    Keyword,
    Error,
}

impl TokenType {
    /// The canonical spelling for token types that are entirely
    /// self-describing (every operator and delimiter except the
    /// multi-spelling `AssignmentOperator`). Returns `None` for types
    /// whose value is supplied by the lexer (literals, identifiers,
    /// keywords, errors) or that have no single spelling (`Dedent`,
    /// `Indent`, `Newline` carry no text either).
    pub fn canonical_spelling(self) -> Option<&'static str> {
        use TokenType::*;
        Some(match self {
            Plus => "+",
            Minus => "-",
            Asterisk => "*",
            Power => "**",
            Slash => "/",
            DoubleSlash => "//",
            Percent => "%",
            At => "@",
            LeftShift => "<<",
            RightShift => ">>",
            BitwiseAnd => "&",
            BitwiseOr => "|",
            BitwiseXor => "^",
            BitwiseNot => "~",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            ColonAssign => ":=",
            LeftParenthesis => "(",
            RightParenthesis => ")",
            LeftSquareBracket => "[",
            RightSquareBracket => "]",
            LeftCurlyBracket => "{",
            RightCurlyBracket => "}",
            Comma => ",",
            Colon => ":",
            Dot => ".",
            Semicolon => ";",
            Assign => "=",
            Arrow => "->",
            ExclamationMark => "!",
            _ => return None,
        })
    }
}

/// DFA states that dispatch directly to a fixed [`TokenType`] with no
/// further lookahead once entered. These are the "terminal operator
/// states" the module doc refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorState {
    LeftParenthesis,
    RightParenthesis,
    LeftSquareBracket,
    RightSquareBracket,
    LeftCurlyBracket,
    RightCurlyBracket,
    Comma,
    Semicolon,
    BitwiseNot,
}

impl OperatorState {
    /// The explicit state-to-token-type lookup (see module docs for why
    /// this is a function and not name-based reflection).
    pub fn token_type(self) -> TokenType {
        match self {
            OperatorState::LeftParenthesis => TokenType::LeftParenthesis,
            OperatorState::RightParenthesis => TokenType::RightParenthesis,
            OperatorState::LeftSquareBracket => TokenType::LeftSquareBracket,
            OperatorState::RightSquareBracket => TokenType::RightSquareBracket,
            OperatorState::LeftCurlyBracket => TokenType::LeftCurlyBracket,
            OperatorState::RightCurlyBracket => TokenType::RightCurlyBracket,
            OperatorState::Comma => TokenType::Comma,
            OperatorState::Semicolon => TokenType::Semicolon,
            OperatorState::BitwiseNot => TokenType::BitwiseNot,
        }
    }

    /// Looks up the state whose single-character spelling is `c`, if any.
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '(' => OperatorState::LeftParenthesis,
            ')' => OperatorState::RightParenthesis,
            '[' => OperatorState::LeftSquareBracket,
            ']' => OperatorState::RightSquareBracket,
            '{' => OperatorState::LeftCurlyBracket,
            '}' => OperatorState::RightCurlyBracket,
            ',' => OperatorState::Comma,
            ';' => OperatorState::Semicolon,
            '~' => OperatorState::BitwiseNot,
            _ => return None,
        })
    }
}

/// Persistent DFA states: the modes that survive across more than one
/// character and so must live in [`crate::Lexer`] as a field, rather than
/// being resolved entirely within one recursive-descent call. Identifier,
/// number, string, and operator recognition are each fully resolved in a
/// single call (see `lexer/identifier.rs`, `numeric.rs`, `string.rs`,
/// `operator.rs`) and never need to suspend mid-lexeme, so they have no
/// entry here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DfaState {
    /// Between tokens; the default resting state.
    Initial,
    /// Consuming leading whitespace at the start of a logical line to
    /// measure the new indentation width.
    Indent,
    /// Leading whitespace on the very first line of the file, which has
    /// no indentation context to compare against.
    FirstIndent,
    /// Just consumed a bare `\` at end-of-token-stream position; waiting
    /// to see whether a newline follows (continuation) or not (error).
    Backslash,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_token_uses_canonical_spelling() {
        let tok = Token::fixed(TokenType::Arrow, 3);
        assert_eq!(tok.value, "->");
        assert_eq!(tok.line, 3);
    }

    #[test]
    fn operator_state_round_trips_through_lookup() {
        let state = OperatorState::from_char('(').unwrap();
        assert_eq!(state.token_type(), TokenType::LeftParenthesis);
    }

    #[test]
    fn operator_state_rejects_multi_char_operators() {
        assert!(OperatorState::from_char('+').is_none());
        assert!(OperatorState::from_char('<').is_none());
    }
}
