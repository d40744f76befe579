use crate::converter::error::{ConversionError, Result};
use crate::converter::notation::Notation;
use crate::converter::operator::BinaryOperator;
use crate::converter::stack::Stack;
use crate::converter::token::Token;
use crate::converter::tokens_to_string;

/// Builds a fully parenthesized infix string from prefix tokens.
///
/// The tokens are read last to first, so the first operand popped for an
/// operator is its left-hand side.
pub(crate) fn prefix_to_infix(prefix_tokens: &[Token]) -> Result<String> {
    let mut operands: Stack<String> = Stack::with_capacity(prefix_tokens.len());

    for token in prefix_tokens.iter().rev() {
        match token {
            Token::Operand(symbol) => operands.push(symbol.to_string()),
            Token::Operator(operator) => {
                let left_operand = pop_operand(&mut operands, prefix_tokens, Notation::Prefix)?;
                let right_operand = pop_operand(&mut operands, prefix_tokens, Notation::Prefix)?;
                operands.push(parenthesize(&left_operand, operator, &right_operand));
            }
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(invalid(prefix_tokens, Notation::Prefix))
            }
        }
    }

    single_result(operands, prefix_tokens, Notation::Prefix)
}

/// Builds a fully parenthesized infix string from postfix tokens.
///
/// The tokens are read first to last, so the first operand popped for an
/// operator is its right-hand side.
pub(crate) fn postfix_to_infix(postfix_tokens: &[Token]) -> Result<String> {
    let mut operands: Stack<String> = Stack::with_capacity(postfix_tokens.len());

    for token in postfix_tokens {
        match token {
            Token::Operand(symbol) => operands.push(symbol.to_string()),
            Token::Operator(operator) => {
                let right_operand = pop_operand(&mut operands, postfix_tokens, Notation::Postfix)?;
                let left_operand = pop_operand(&mut operands, postfix_tokens, Notation::Postfix)?;
                operands.push(parenthesize(&left_operand, operator, &right_operand));
            }
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(invalid(postfix_tokens, Notation::Postfix))
            }
        }
    }

    single_result(operands, postfix_tokens, Notation::Postfix)
}

fn parenthesize(left_operand: &str, operator: &BinaryOperator, right_operand: &str) -> String {
    format!("({} {} {})", left_operand, operator, right_operand)
}

fn pop_operand(operands: &mut Stack<String>, tokens: &[Token], notation: Notation) -> Result<String> {
    operands.pop().ok_or_else(|| invalid(tokens, notation))
}

fn single_result(mut operands: Stack<String>, tokens: &[Token], notation: Notation) -> Result<String> {
    match operands.pop() {
        Some(result) if operands.is_empty() => Ok(result),
        _ => Err(invalid(tokens, notation)),
    }
}

fn invalid(tokens: &[Token], notation: Notation) -> ConversionError {
    ConversionError::InvalidNotation {
        notation,
        expression: tokens_to_string(tokens),
    }
}
