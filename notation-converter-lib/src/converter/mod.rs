pub mod error;
pub mod expression;
pub mod lexer;
pub mod notation;
pub mod operator;
mod parser;
pub mod stack;
pub mod token;
pub mod validator;

use crate::converter::error::{ConversionError, Result};
use crate::converter::expression::Expression;
use crate::converter::lexer::tokenize_as;
use crate::converter::notation::Notation;
use crate::converter::token::Token;
use crate::converter::validator::validate;
use itertools::Itertools;
use log::debug;

/// Converts an infix expression into postfix (reverse Polish) notation.
///
/// # Arguments
///
/// * `expression`: A text expression in infix notation.
///
/// returns: The postfix expression, without whitespace.
///
/// # Examples
///
/// ```
/// use notation_converter::converter::infix_to_postfix;
///
/// let postfix = infix_to_postfix("(A+B)*(C-D)").unwrap();
/// assert_eq!(postfix, "AB+CD-*");
/// ```
pub fn infix_to_postfix(expression: &str) -> Result<String> {
    let infix = Expression::parse(expression, Notation::Infix)?;
    let postfix_tokens = parser::infix_to_postfix(infix.tokens())?;
    let postfix = Expression::from_converted(postfix_tokens, Notation::Postfix)?;
    log_conversion(expression, Notation::Infix, &postfix.to_string(), Notation::Postfix);
    Ok(postfix.to_string())
}

/// Converts an infix expression into prefix (Polish) notation.
///
/// # Arguments
///
/// * `expression`: A text expression in infix notation.
///
/// returns: The prefix expression, without whitespace.
///
/// # Examples
///
/// ```
/// use notation_converter::converter::infix_to_prefix;
///
/// let prefix = infix_to_prefix("A^B^C").unwrap();
/// assert_eq!(prefix, "^A^BC");
/// ```
pub fn infix_to_prefix(expression: &str) -> Result<String> {
    let infix = Expression::parse(expression, Notation::Infix)?;
    let prefix_tokens = parser::infix_to_prefix(infix.tokens())?;
    let prefix = Expression::from_converted(prefix_tokens, Notation::Prefix)?;
    log_conversion(expression, Notation::Infix, &prefix.to_string(), Notation::Prefix);
    Ok(prefix.to_string())
}

/// Converts a prefix expression into fully parenthesized infix notation.
///
/// # Examples
///
/// ```
/// use notation_converter::converter::prefix_to_infix;
///
/// let infix = prefix_to_infix("-AB").unwrap();
/// assert_eq!(infix, "(A - B)");
/// ```
pub fn prefix_to_infix(expression: &str) -> Result<String> {
    let prefix = Expression::parse(expression, Notation::Prefix)?;
    let infix = checked_infix(parser::prefix_to_infix(prefix.tokens())?)?;
    log_conversion(expression, Notation::Prefix, &infix, Notation::Infix);
    Ok(infix)
}

/// Converts a postfix expression into fully parenthesized infix notation.
///
/// # Examples
///
/// ```
/// use notation_converter::converter::postfix_to_infix;
///
/// let infix = postfix_to_infix("AB+").unwrap();
/// assert_eq!(infix, "(A + B)");
/// ```
pub fn postfix_to_infix(expression: &str) -> Result<String> {
    let postfix = Expression::parse(expression, Notation::Postfix)?;
    let infix = checked_infix(parser::postfix_to_infix(postfix.tokens())?)?;
    log_conversion(expression, Notation::Postfix, &infix, Notation::Infix);
    Ok(infix)
}

/// Converts a prefix expression into postfix notation, by way of infix.
pub fn prefix_to_postfix(expression: &str) -> Result<String> {
    let infix = prefix_to_infix(expression)?;
    infix_to_postfix(&infix)
}

/// Converts a postfix expression into prefix notation, by way of infix.
pub fn postfix_to_prefix(expression: &str) -> Result<String> {
    let infix = postfix_to_infix(expression)?;
    infix_to_prefix(&infix)
}

/// Converts an expression between any two notations.
///
/// Converting into the notation the expression is already in validates it and
/// returns its canonical form: compact for prefix and postfix, fully
/// parenthesized for infix.
///
/// # Arguments
///
/// * `expression`: The text of the expression.
/// * `from`: The notation `expression` is written in.
/// * `to`: The notation to convert into.
///
/// returns: The converted expression.
///
/// # Examples
///
/// ```
/// use notation_converter::converter::convert;
/// use notation_converter::converter::notation::Notation;
///
/// let postfix = convert("+AB", Notation::Prefix, Notation::Postfix).unwrap();
/// assert_eq!(postfix, "AB+");
/// ```
pub fn convert(expression: &str, from: Notation, to: Notation) -> Result<String> {
    match (from, to) {
        (Notation::Infix, Notation::Prefix) => infix_to_prefix(expression),
        (Notation::Infix, Notation::Postfix) => infix_to_postfix(expression),
        (Notation::Prefix, Notation::Infix) => prefix_to_infix(expression),
        (Notation::Prefix, Notation::Postfix) => prefix_to_postfix(expression),
        (Notation::Postfix, Notation::Infix) => postfix_to_infix(expression),
        (Notation::Postfix, Notation::Prefix) => postfix_to_prefix(expression),
        (Notation::Infix, Notation::Infix) => postfix_to_infix(&infix_to_postfix(expression)?),
        (Notation::Prefix, Notation::Prefix) | (Notation::Postfix, Notation::Postfix) => {
            Expression::parse(expression, from).map(|parsed| parsed.to_string())
        }
    }
}

/// Checks whether the text is a well-formed expression in the given notation.
///
/// Text that cannot even be tokenized is not well-formed.
pub fn is_valid(expression: &str, notation: Notation) -> bool {
    match tokenize_as(expression, notation) {
        Ok(tokens) => validate(&tokens, notation),
        Err(_) => false,
    }
}

/// Joins tokens without any separating whitespace.
///
/// # Examples
///
/// ```
/// use notation_converter::converter::tokens_to_string;
/// use notation_converter::converter::lexer::tokenize;
///
/// let tokens = tokenize("A B +").unwrap();
/// assert_eq!(tokens_to_string(&tokens), "AB+");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join("")
}

fn checked_infix(infix: String) -> Result<String> {
    if is_valid(&infix, Notation::Infix) {
        Ok(infix)
    } else {
        Err(ConversionError::InternalInconsistency {
            notation: Notation::Infix,
            output: infix,
        })
    }
}

fn log_conversion(input: &str, from: Notation, output: &str, to: Notation) {
    debug!("converted {} {:?} into {} {:?}", from, input, to, output);
}
