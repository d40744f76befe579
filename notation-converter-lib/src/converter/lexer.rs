use crate::converter::error::{ConversionError, Result};
use crate::converter::notation::Notation;
use crate::converter::operator::BinaryOperator;
use crate::converter::token::Token;
use log::trace;

/// En dash, em dash and minus sign all read as `-`.
const DASH_VARIANTS: [char; 3] = ['\u{2013}', '\u{2014}', '\u{2212}'];

const QUOTES: [char; 2] = ['"', '\''];

/// Splits the given text into tokens, one per meaningful character.
///
/// Whitespace and quotes are skipped, dash look-alikes are read as `-`, and
/// a doubled `--` is read as `+`. Any other character that is not an operand,
/// operator or parenthesis is rejected.
///
/// # Examples
///
/// ```
/// # use notation_converter::converter::error::Result;
/// # fn main() -> Result<()> {
/// use notation_converter::converter::lexer::tokenize;
///
/// let tokens = tokenize("A -- B")?;
/// assert_eq!(tokens.len(), 3);
/// assert!(tokens[1].is_operator());
/// # Ok(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    tokenize_as(expression, Notation::Infix)
}

/// Like [`tokenize`], but aware of the notation being read.
///
/// Only infix input has its `--` read as `+`; in prefix and postfix two dashes
/// in a row are two subtractions.
pub fn tokenize_as(expression: &str, notation: Notation) -> Result<Vec<Token>> {
    let collapse_double_negation = match notation {
        Notation::Infix => true,
        Notation::Prefix | Notation::Postfix => false,
    };
    let minus = Token::Operator(BinaryOperator::Subtract);

    let mut tokens: Vec<Token> = Vec::with_capacity(expression.len());
    for (position, character) in expression.chars().enumerate() {
        let symbol = normalize_dash(character);
        if symbol.is_whitespace() || QUOTES.contains(&symbol) {
            continue;
        }

        let token = Token::from_char(symbol).ok_or(ConversionError::MalformedInput {
            character,
            position,
        })?;

        if collapse_double_negation && token == minus && tokens.last() == Some(&minus) {
            tokens.pop();
            tokens.push(Token::Operator(BinaryOperator::Add));
        } else {
            tokens.push(token);
        }
    }

    trace!("tokenized {:?} as {} into {:?}", expression, notation, tokens);
    Ok(tokens)
}

fn normalize_dash(character: char) -> char {
    if DASH_VARIANTS.contains(&character) {
        '-'
    } else {
        character
    }
}
