use crate::ast::{AstNode, build_tree};
use crate::error::{ParseError, ParseErrorKind};
use crate::model::{Token, TokenStream};

#[macro_use]
mod symbols;

pub use symbols::{Fault, NonTerminal, StackSymbol};
use symbols::{TRANSITION_TABLE, Terminal, expansion_fault};

/// Tokens were left over after a complete expression.
fn excess_input(tokens: &[Token], cursor: usize) -> ParseError {
    let (kind, message) = match tokens[cursor].kind() {
        Terminal::LParen => (
            ParseErrorKind::WrongArity,
            "shouldn't have opening parenthesis for any argument",
        ),
        Terminal::RParen => (ParseErrorKind::UnmatchedParen, "unmatched paren"),
        _ => (ParseErrorKind::WrongArity, "wrong number of arguments"),
    };
    ParseError::at(kind, message, tokens, cursor)
}

/// The terminal on top of the stack is not the next input token.
fn mismatch(expected: Terminal, tokens: &[Token], cursor: usize) -> ParseError {
    let found = tokens[cursor].kind();
    // Anything that can start an expression where a `)` belongs is one argument too many.
    let surplus = expected == Terminal::RParen && found.starts_expression();
    let (kind, message) = match found {
        Terminal::LParen => (
            if surplus {
                ParseErrorKind::WrongArity
            } else {
                ParseErrorKind::MalformedArgument
            },
            "open another parenthesis instead of finishing old argument",
        ),
        Terminal::RParen => (ParseErrorKind::WrongArity, "wrong number of arguments"),
        _ if surplus => (ParseErrorKind::WrongArity, "wrong number of arguments"),
        _ => (ParseErrorKind::MalformedArgument, "wrong arguments format"),
    };
    ParseError::at(kind, message, tokens, cursor)
}

/// The input ran out with `top` still on the stack.
fn unfinished(top: &StackSymbol, symbols: &[StackSymbol], tokens: &[Token]) -> ParseError {
    let owes_close = symbols.contains(&term!(RParen));
    let (kind, message) = match top {
        StackSymbol::Fault(Fault { kind, message }) => (*kind, *message),
        StackSymbol::NonTerminal(NonTerminal::Program) => {
            (ParseErrorKind::EmptyExpression, "empty expression")
        }
        StackSymbol::NonTerminal(NonTerminal::Expr) => {
            (ParseErrorKind::MissingClosingParen, "wrong number of arguments")
        }
        StackSymbol::NonTerminal(NonTerminal::GroupBody) => (
            ParseErrorKind::MissingClosingParen,
            "incomplete argument, only an opening parenthesis for the last argument",
        ),
        StackSymbol::NonTerminal(NonTerminal::ExprList | NonTerminal::ExprTail) => (
            ParseErrorKind::MissingClosingParen,
            "missing closing parenthesis",
        ),
        StackSymbol::Terminal(Terminal::RParen) => {
            (ParseErrorKind::MissingClosingParen, "missing closing paren")
        }
        StackSymbol::Terminal(Terminal::LParen) => {
            (ParseErrorKind::UnmatchedParen, "unmatched paren")
        }
        StackSymbol::Terminal(_) if owes_close => {
            (ParseErrorKind::MissingClosingParen, "incomplete expression")
        }
        StackSymbol::Terminal(_) => (ParseErrorKind::MalformedArgument, "incomplete expression"),
    };
    ParseError::at(kind, message, tokens, tokens.len())
}

/// Run the pushdown automaton over `tokens`, stopping at the first fault.
///
/// Success means the cursor reached the end of the input with the symbol
/// stack empty at the same moment.
pub fn recognise(tokens: &[Token]) -> Result<(), ParseError> {
    let mut symbols = vec![nonterm!(Program)];
    let mut cursor = 0;

    while let Some(token) = tokens.get(cursor) {
        let lookahead = token.kind();
        let Some(symbol) = symbols.pop() else {
            return Err(excess_input(tokens, cursor));
        };

        match symbol {
            StackSymbol::Fault(Fault { kind, message }) => {
                return Err(ParseError::at(kind, message, tokens, cursor));
            }
            StackSymbol::NonTerminal(nonterm_symb) => {
                match TRANSITION_TABLE.get(&(lookahead, nonterm_symb)) {
                    Some(new_symbols) => symbols.extend(new_symbols.iter().cloned().rev()),
                    None => symbols.push(StackSymbol::Fault(expansion_fault(
                        nonterm_symb,
                        lookahead,
                    ))),
                }
            }
            StackSymbol::Terminal(term_symb) if term_symb == lookahead => cursor += 1,
            StackSymbol::Terminal(term_symb) => return Err(mismatch(term_symb, tokens, cursor)),
        }
    }

    match symbols.last() {
        None => Ok(()),
        Some(top) => Err(unfinished(top, &symbols, tokens)),
    }
}

/// Parse a token stream and return an AST.
pub fn parse_tokens(tokens: TokenStream) -> Result<AstNode, ParseError> {
    recognise(&tokens)?;
    build_tree(&tokens)
}
