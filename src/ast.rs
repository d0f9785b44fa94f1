use std::fmt::{Display, Formatter};

use num_bigint::BigUint;
use serde::de::{self, MapAccess, SeqAccess, Visitor, value::MapAccessDeserializer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ParseError, ParseErrorKind};
use crate::model::{Token, TokenKind};

// AST NODES

/// A node of the nested-list tree.
///
/// Serialises untagged: literals as numbers, symbols as strings, lists as
/// arrays, e.g. `["LAMBDA", "x", ["PLUS", "x", 1]]`. Literals are unbounded
/// and are written as JSON numbers of any width.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AstNode {
    IntLiteral(BigUint),
    /// An identifier, or the canonical tag of an operator or keyword.
    Symbol(String),
    List(Vec<AstNode>),
}

/// Convenience macro for creating an `AstNode::List` from nodes.
#[macro_export]
macro_rules! list {
    ($($node:expr),* $(,)?) => {
        $crate::ast::AstNode::List(vec![$($node),*])
    };
}

impl AstNode {
    pub fn int(value: u64) -> Self {
        Self::IntLiteral(BigUint::from(value))
    }

    pub fn sym(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// The reserved form this list is an instance of, if its head is a
    /// keyword tag and its shape is the one that keyword demands.
    fn keyword_form(items: &[AstNode]) -> Option<TokenKind> {
        let Some(AstNode::Symbol(head)) = items.first() else {
            return None;
        };
        let kind = TokenKind::from_keyword_tag(head)?;
        let binds_name = matches!(items.get(1), Some(AstNode::Symbol(_)));
        let fits = match kind {
            TokenKind::Plus | TokenKind::Minus | TokenKind::Mult | TokenKind::Equals => {
                items.len() == 3
            }
            TokenKind::Conditional => items.len() == 4,
            TokenKind::Lambda => items.len() == 3 && binds_name,
            TokenKind::Let => items.len() == 4 && binds_name,
            _ => false,
        };
        fits.then_some(kind)
    }
}

/// Prints source text that parses back to an equal tree.
impl Display for AstNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IntLiteral(value) => write!(f, "{value}"),
            Self::Symbol(name) => write!(f, "{name}"),
            Self::List(items) => {
                write!(f, "(")?;
                let keyword = Self::keyword_form(items).and_then(TokenKind::symbol);
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    match keyword {
                        Some(spelling) if index == 0 => write!(f, "{spelling}")?,
                        _ => write!(f, "{item}")?,
                    }
                }
                write!(f, ")")
            }
        }
    }
}

impl Serialize for AstNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::IntLiteral(value) => match u64::try_from(value) {
                Ok(small) => serializer.serialize_u64(small),
                Err(_) => value
                    .to_string()
                    .parse::<serde_json::Number>()
                    .map_err(serde::ser::Error::custom)?
                    .serialize(serializer),
            },
            Self::Symbol(name) => serializer.serialize_str(name),
            Self::List(items) => items.serialize(serializer),
        }
    }
}

struct AstNodeVisitor;

impl<'de> Visitor<'de> for AstNodeVisitor {
    type Value = AstNode;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a non-negative integer, a string or an array")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<AstNode, E> {
        Ok(AstNode::int(value))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<AstNode, E> {
        Ok(AstNode::IntLiteral(BigUint::from(value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<AstNode, E> {
        Ok(AstNode::sym(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<AstNode, E> {
        Ok(AstNode::Symbol(value))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<AstNode, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(AstNode::List(items))
    }

    // serde_json hands arbitrary-precision numbers over as a one-entry map.
    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<AstNode, A::Error> {
        let number = serde_json::Number::deserialize(MapAccessDeserializer::new(map))?;
        number
            .to_string()
            .parse::<BigUint>()
            .map(AstNode::IntLiteral)
            .map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for AstNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AstNodeVisitor)
    }
}

// TREE BUILDER

/// Base-10 value of a digit run. Leading zeros contribute nothing.
fn decimal_value(digits: &str) -> BigUint {
    digits
        .chars()
        .filter_map(|digit| digit.to_digit(10))
        .fold(BigUint::default(), |value, digit| value * 10u32 + digit)
}

/// Map one token to its leaf: numbers to integers, everything else to a symbol.
fn leaf(token: &Token) -> AstNode {
    match token {
        Token::Number(digits) => AstNode::IntLiteral(decimal_value(digits)),
        Token::Identifier(name) => AstNode::Symbol(name.clone()),
        other => AstNode::Symbol(other.kind().tag().to_string()),
    }
}

/// Fold an accepted token stream into a tree, one `List` per parenthesised group.
///
/// A stream that reduces to a single top-level element yields that element
/// rather than a singleton list.
pub fn build_tree(tokens: &[Token]) -> Result<AstNode, ParseError> {
    let mut open_lists: Vec<Vec<AstNode>> = vec![Vec::new()];

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => open_lists.push(Vec::new()),
            Token::RParen => {
                if open_lists.len() < 2 {
                    return Err(ParseError::at(
                        ParseErrorKind::UnmatchedParen,
                        "unmatched paren",
                        tokens,
                        index,
                    ));
                }
                let finished = AstNode::List(open_lists.pop().unwrap_or_default());
                if let Some(parent) = open_lists.last_mut() {
                    parent.push(finished);
                }
            }
            _ => {
                if let Some(current) = open_lists.last_mut() {
                    current.push(leaf(token));
                }
            }
        }
    }

    if open_lists.len() != 1 {
        return Err(ParseError::at(
            ParseErrorKind::MissingClosingParen,
            "missing closing paren",
            tokens,
            tokens.len(),
        ));
    }

    let top_level = open_lists.pop().unwrap_or_default();
    Ok(match <[AstNode; 1]>::try_from(top_level) {
        Ok([single]) => single,
        Err(top_level) => AstNode::List(top_level),
    })
}
