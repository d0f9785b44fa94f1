use crate::error::{LexError, LexErrorReason};
use crate::model::{Token, TokenStream};

/// States of the tokeniser automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    AfterNumber,
    AfterParen,
    AfterIdentifier,
    AfterOperator,
    Separator,
    Dead,
}

/// Input alphabet, by character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Digit,
    Letter,
    Space,
    Operator,
    Paren,
    Other,
}

fn classify(character: char) -> CharClass {
    match character {
        '0'..='9' => CharClass::Digit,
        ' ' => CharClass::Space,
        '(' | ')' => CharClass::Paren,
        '+' | '−' | '×' | '=' | '?' | 'λ' | '≜' => CharClass::Operator,
        c if c.is_ascii_alphabetic() => CharClass::Letter,
        _ => CharClass::Other,
    }
}

impl State {
    /// May a number or identifier start here rather than extend the previous token?
    fn starts_token(self) -> bool {
        matches!(
            self,
            Self::Start | Self::Separator | Self::AfterParen | Self::AfterOperator
        )
    }

    fn step(self, class: CharClass) -> Self {
        match (self, class) {
            (Self::Dead, _) | (_, CharClass::Other) => Self::Dead,
            (_, CharClass::Space) => Self::Separator,
            (_, CharClass::Operator) => Self::AfterOperator,
            (_, CharClass::Paren) => Self::AfterParen,
            (Self::AfterIdentifier, CharClass::Digit) => Self::Dead,
            (Self::AfterNumber, CharClass::Letter) => Self::Dead,
            (_, CharClass::Digit) => Self::AfterNumber,
            (_, CharClass::Letter) => Self::AfterIdentifier,
        }
    }
}

/// A number or identifier still being read.
enum Lexeme {
    Number(String),
    Identifier(String),
}

impl Lexeme {
    fn freeze(self) -> Token {
        match self {
            Self::Number(digits) => Token::Number(digits),
            Self::Identifier(name) => Token::Identifier(name),
        }
    }
}

/// Move the pending lexeme, if any, onto the token list.
fn flush(pending: Option<Lexeme>, tokens: &mut TokenStream) {
    if let Some(lexeme) = pending {
        tokens.push(lexeme.freeze());
    }
}

/// Tokenise a program string.
///
/// Returns an empty stream for empty or all-space input. The first character
/// that sends the automaton to its dead state is reported, even when it is the
/// last character of the input.
pub fn tokenise(program_string: &str) -> Result<TokenStream, LexError> {
    let mut tokens = TokenStream::new();
    let mut pending: Option<Lexeme> = None;
    let mut state = State::Start;

    for (position, character) in program_string.chars().enumerate() {
        let class = classify(character);
        let next = state.step(class);

        if next == State::Dead {
            let reason = match class {
                CharClass::Digit => LexErrorReason::DigitInIdentifier,
                CharClass::Letter => LexErrorReason::LetterInNumber,
                _ => LexErrorReason::IllegalCharacter,
            };
            return Err(LexError {
                character,
                position,
                reason,
            });
        }

        pending = match (class, pending) {
            (CharClass::Digit, Some(Lexeme::Number(mut digits))) if !state.starts_token() => {
                digits.push(character);
                Some(Lexeme::Number(digits))
            }
            (CharClass::Letter, Some(Lexeme::Identifier(mut name))) if !state.starts_token() => {
                name.push(character);
                Some(Lexeme::Identifier(name))
            }
            (CharClass::Digit, previous) => {
                flush(previous, &mut tokens);
                Some(Lexeme::Number(character.to_string()))
            }
            (CharClass::Letter, previous) => {
                flush(previous, &mut tokens);
                Some(Lexeme::Identifier(character.to_string()))
            }
            (_, previous) => {
                flush(previous, &mut tokens);
                tokens.extend(Token::from_symbol(character));
                None
            }
        };

        state = next;
    }

    flush(pending, &mut tokens);

    Ok(tokens)
}
