//! Error types for the tokeniser and the parser.
//!
//! Every failure is reported once, at the point it is detected: the tokeniser
//! stops on the first character that drives its automaton into the dead state
//! and the parser stops on the first mismatch between its symbol stack and the
//! input. Parse errors keep the tokens consumed so far and the tokens left
//! over, so a caller can show where the fault sits.

use thiserror::Error;

use crate::model::{Token, display_tokens};

/// Why a character could not be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorReason {
    /// Outside the alphabet of the language.
    IllegalCharacter,
    /// A digit directly after letters, e.g. `ab1`.
    DigitInIdentifier,
    /// A letter directly after digits, e.g. `12x`.
    LetterInNumber,
}

impl LexErrorReason {
    fn describe(self) -> &'static str {
        match self {
            Self::IllegalCharacter => "illegal character",
            Self::DigitInIdentifier => "digit inside an identifier",
            Self::LetterInNumber => "letter inside a number",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} '{character}' at position {position}", .reason.describe())]
pub struct LexError {
    pub character: char,
    /// 0-based index of the character (not the byte) in the input.
    pub position: usize,
    pub reason: LexErrorReason,
}

/// Coarse category of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    UnmatchedParen,
    MissingClosingParen,
    WrongArity,
    MalformedArgument,
    EmptyExpression,
}

impl ParseErrorKind {
    pub fn category(self) -> &'static str {
        match self {
            Self::UnmatchedParen => "unmatched paren",
            Self::MissingClosingParen => "missing closing paren",
            Self::WrongArity => "wrong number of arguments",
            Self::MalformedArgument => "wrong argument format",
            Self::EmptyExpression => "empty expression",
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.category())
    }
}

/// The message after the category, left out when it only repeats it.
fn detail(kind: &ParseErrorKind, message: &str) -> String {
    if message == kind.category() {
        String::new()
    } else {
        format!(": {message}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}{}. Checked part: {}. Error in remaining: {}", detail(.kind, .message), display_tokens(.checked), display_tokens(.remaining))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    /// Tokens consumed before the fault was found.
    pub checked: Vec<Token>,
    /// The token the fault was found at, and everything after it.
    pub remaining: Vec<Token>,
}

impl ParseError {
    /// Build an error for a fault found with `cursor` tokens of `tokens` consumed.
    pub fn at(
        kind: ParseErrorKind,
        message: impl Into<String>,
        tokens: &[Token],
        cursor: usize,
    ) -> Self {
        let cursor = cursor.min(tokens.len());
        Self {
            kind,
            message: message.into(),
            checked: tokens[..cursor].to_vec(),
            remaining: tokens[cursor..].to_vec(),
        }
    }
}

/// Either stage of [`crate::parse`] failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),
    #[error("{0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Short category name, e.g. `unmatched paren` or `lexical error`.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Lex(_) => "lexical error",
            Self::Parse(err) => err.kind.category(),
        }
    }

    pub fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self {
            Self::Lex(_) => None,
            Self::Parse(err) => Some(err.kind),
        }
    }
}
