use crate::error::ParseErrorKind;
use crate::model::TokenKind;
use std::{collections::HashMap, sync::LazyLock};

/// Terminal stack symbols are the token kinds themselves.
pub type Terminal = TokenKind;

/// Non-terminal stack symbols.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum NonTerminal {
    Program,
    Expr,
    GroupBody,
    ExprList,
    ExprTail,
}

/// A failure found while expanding a non-terminal, surfaced when it reaches
/// the top of the stack.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Fault {
    pub kind: ParseErrorKind,
    pub message: &'static str,
}

/// Parser stack symbols.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum StackSymbol {
    Terminal(Terminal),
    NonTerminal(NonTerminal),
    Fault(Fault),
}

/// Convenience macro for creating a terminal stack symbol by name.
macro_rules! term {
    ($terminal:ident) => {
        StackSymbol::Terminal(Terminal::$terminal)
    };
}

/// Convenience macro for creating a non-terminal stack symbol by name.
macro_rules! nonterm {
    ($nonterminal:ident) => {
        StackSymbol::NonTerminal(NonTerminal::$nonterminal)
    };
}

/// The LL(1) transition table, keyed by (lookahead, non-terminal).
///
/// Right-hand sides are written in source order; the parser pushes them
/// reversed. An empty right-hand side is an epsilon production.
pub static TRANSITION_TABLE: LazyLock<HashMap<(Terminal, NonTerminal), Vec<StackSymbol>>> =
    LazyLock::new(|| {
        let mut table = HashMap::from([
            // expr -> number
            ((Terminal::Number, NonTerminal::Expr), vec![term!(Number)]),
            // expr -> identifier
            (
                (Terminal::Identifier, NonTerminal::Expr),
                vec![term!(Identifier)],
            ),
            // expr -> ( group body )
            (
                (Terminal::LParen, NonTerminal::Expr),
                vec![term!(LParen), nonterm!(GroupBody), term!(RParen)],
            ),
            // group body -> plus
            (
                (Terminal::Plus, NonTerminal::GroupBody),
                vec![term!(Plus), nonterm!(Expr), nonterm!(Expr)],
            ),
            // group body -> minus
            (
                (Terminal::Minus, NonTerminal::GroupBody),
                vec![term!(Minus), nonterm!(Expr), nonterm!(Expr)],
            ),
            // group body -> mult
            (
                (Terminal::Mult, NonTerminal::GroupBody),
                vec![term!(Mult), nonterm!(Expr), nonterm!(Expr)],
            ),
            // group body -> equals
            (
                (Terminal::Equals, NonTerminal::GroupBody),
                vec![term!(Equals), nonterm!(Expr), nonterm!(Expr)],
            ),
            // group body -> conditional
            (
                (Terminal::Conditional, NonTerminal::GroupBody),
                vec![
                    term!(Conditional),
                    nonterm!(Expr),
                    nonterm!(Expr),
                    nonterm!(Expr),
                ],
            ),
            // group body -> lambda
            (
                (Terminal::Lambda, NonTerminal::GroupBody),
                vec![term!(Lambda), term!(Identifier), nonterm!(Expr)],
            ),
            // group body -> let
            (
                (Terminal::Let, NonTerminal::GroupBody),
                vec![
                    term!(Let),
                    term!(Identifier),
                    nonterm!(Expr),
                    nonterm!(Expr),
                ],
            ),
            // expr tail -> epsilon
            ((Terminal::RParen, NonTerminal::ExprTail), vec![]),
        ]);

        for lookahead in [Terminal::Number, Terminal::Identifier, Terminal::LParen] {
            // program -> expr
            table.insert((lookahead, NonTerminal::Program), vec![nonterm!(Expr)]);
            // group body -> expr list
            table.insert((lookahead, NonTerminal::GroupBody), vec![nonterm!(ExprList)]);
            // expr list -> expr expr tail
            table.insert(
                (lookahead, NonTerminal::ExprList),
                vec![nonterm!(Expr), nonterm!(ExprTail)],
            );
            // expr tail -> expr expr tail
            table.insert(
                (lookahead, NonTerminal::ExprTail),
                vec![nonterm!(Expr), nonterm!(ExprTail)],
            );
        }

        table
    });

/// The fault for a lookahead that has no production under `nonterminal`.
pub fn expansion_fault(nonterminal: NonTerminal, lookahead: Terminal) -> Fault {
    let (kind, message) = match (nonterminal, lookahead) {
        (NonTerminal::Program, Terminal::RParen) => (
            ParseErrorKind::UnmatchedParen,
            "should be left parenthesis, number, or identifier instead of closing parenthesis",
        ),
        (NonTerminal::Expr, Terminal::RParen) => {
            (ParseErrorKind::WrongArity, "wrong number of arguments")
        }
        (NonTerminal::GroupBody, Terminal::RParen) => (
            ParseErrorKind::WrongArity,
            "there is no argument between parentheses",
        ),
        _ => (ParseErrorKind::MalformedArgument, "wrong argument format"),
    };
    Fault { kind, message }
}
