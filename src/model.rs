use std::fmt::{Display, Formatter};

/// A lexical unit. Only numbers and identifiers carry their spelling.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Number(String),
    Identifier(String),
    Plus,
    Minus,
    Mult,
    Equals,
    Conditional,
    Lambda,
    Let,
    LParen,
    RParen,
}

/// The tags from the Token tagged union, without payloads.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenKind {
    Number,
    Identifier,
    Plus,
    Minus,
    Mult,
    Equals,
    Conditional,
    Lambda,
    Let,
    LParen,
    RParen,
}

/// Tokens in source order, produced in one go by the tokeniser.
pub type TokenStream = Vec<Token>;

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Mult => TokenKind::Mult,
            Self::Equals => TokenKind::Equals,
            Self::Conditional => TokenKind::Conditional,
            Self::Lambda => TokenKind::Lambda,
            Self::Let => TokenKind::Let,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
        }
    }

    /// The fixed-symbol token spelled by `character`, if any.
    pub fn from_symbol(character: char) -> Option<Self> {
        Some(match character {
            '+' => Self::Plus,
            '−' => Self::Minus,
            '×' => Self::Mult,
            '=' => Self::Equals,
            '?' => Self::Conditional,
            'λ' => Self::Lambda,
            '≜' => Self::Let,
            '(' => Self::LParen,
            ')' => Self::RParen,
            _ => return None,
        })
    }
}

impl TokenKind {
    /// Canonical upper-case tag used in trees and diagnostics.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Number => "NUMBER",
            Self::Identifier => "IDENTIFIER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mult => "MULT",
            Self::Equals => "EQUALS",
            Self::Conditional => "CONDITIONAL",
            Self::Lambda => "LAMBDA",
            Self::Let => "LET",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
        }
    }

    /// Source spelling for the nine fixed symbols.
    pub fn symbol(self) -> Option<char> {
        match self {
            Self::Number | Self::Identifier => None,
            Self::Plus => Some('+'),
            Self::Minus => Some('−'),
            Self::Mult => Some('×'),
            Self::Equals => Some('='),
            Self::Conditional => Some('?'),
            Self::Lambda => Some('λ'),
            Self::Let => Some('≜'),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
        }
    }

    /// Inverse of [`TokenKind::tag`] for the reserved operator and keyword tags.
    pub fn from_keyword_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "PLUS" => Self::Plus,
            "MINUS" => Self::Minus,
            "MULT" => Self::Mult,
            "EQUALS" => Self::Equals,
            "CONDITIONAL" => Self::Conditional,
            "LAMBDA" => Self::Lambda,
            "LET" => Self::Let,
            _ => return None,
        })
    }

    /// Can a token of this kind begin an expression?
    pub fn starts_expression(self) -> bool {
        matches!(self, Self::Number | Self::Identifier | Self::LParen)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(digits) => write!(f, "{digits}"),
            Self::Identifier(name) => write!(f, "{name}"),
            other => write!(f, "{}", other.kind().tag()),
        }
    }
}

/// Render a token slice the way diagnostics show it, e.g. `[LPAREN, PLUS, 2]`.
pub fn display_tokens(tokens: &[Token]) -> String {
    let inner: Vec<String> = tokens.iter().map(Token::to_string).collect();
    format!("[{}]", inner.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_map_to_tokens() {
        assert_eq!(Token::from_symbol('≜'), Some(Token::Let));
        assert_eq!(Token::from_symbol('-'), None);
        assert_eq!(Token::from_symbol('x'), None);
    }

    #[test]
    fn symbol_spelling_round_trips() {
        for character in ['+', '−', '×', '=', '?', 'λ', '≜', '(', ')'] {
            let token = Token::from_symbol(character).unwrap();
            assert_eq!(token.kind().symbol(), Some(character));
        }
    }

    #[test]
    fn display_uses_payload_or_tag() {
        assert_eq!(
            display_tokens(&[
                Token::LParen,
                Token::Lambda,
                Token::Identifier("x".to_string()),
                Token::Number("007".to_string()),
                Token::RParen
            ]),
            "[LPAREN, LAMBDA, x, 007, RPAREN]"
        );
    }

    #[test]
    fn keyword_tags_exclude_parens_and_literals() {
        assert_eq!(TokenKind::from_keyword_tag("LET"), Some(TokenKind::Let));
        assert_eq!(TokenKind::from_keyword_tag("LPAREN"), None);
        assert_eq!(TokenKind::from_keyword_tag("NUMBER"), None);
    }
}
