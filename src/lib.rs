//! Front end for a tiny λ-calculus s-expression language.
//!
//! Text goes through two stages: a finite-state [`tokeniser`] producing a
//! token stream, then a table-driven LL(1) [`parser`] that checks the stream
//! against the grammar with an explicit symbol stack and folds it into a
//! nested-list [`AstNode`].
//!
//! ```text
//! Program   → Expr
//! Expr      → Number | Identifier | '(' GroupBody ')'
//! GroupBody → '+' Expr Expr | '−' Expr Expr | '×' Expr Expr | '=' Expr Expr
//!           | '?' Expr Expr Expr | 'λ' Identifier Expr | '≜' Identifier Expr Expr
//!           | ExprList
//! ExprList  → Expr ExprTail
//! ExprTail  → Expr ExprTail | ε
//! ```

#[macro_use]
pub mod ast;
pub mod batch;
pub mod error;
pub mod model;
pub mod parser;
pub mod tokeniser;

pub use ast::{AstNode, build_tree};
pub use error::{Error, LexError, LexErrorReason, ParseError, ParseErrorKind};
pub use model::{Token, TokenKind, TokenStream};
pub use parser::parse_tokens;
pub use tokeniser::tokenise;

pub use num_bigint::BigUint;

/// Tokenise and parse `text` into a tree.
pub fn parse(text: &str) -> Result<AstNode, Error> {
    let tokens = tokenise(text)?;
    Ok(parse_tokens(tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reports_lexical_errors() {
        let err = parse("(+ 1 2.5)").unwrap_err();
        assert!(matches!(
            err,
            Error::Lex(LexError {
                character: '.',
                position: 6,
                ..
            })
        ));
        assert_eq!(err.category(), "lexical error");
    }

    #[test]
    fn parse_reports_parse_errors() {
        let err = parse("(+ 2 3 4)").unwrap_err();
        assert_eq!(err.parse_kind(), Some(ParseErrorKind::WrongArity));
        assert!(err.to_string().starts_with("wrong number of arguments"));
    }

    #[test]
    fn parse_composes_both_stages() {
        assert_eq!(
            parse("(λ x x)").unwrap(),
            list![AstNode::sym("LAMBDA"), AstNode::sym("x"), AstNode::sym("x")]
        );
    }
}
