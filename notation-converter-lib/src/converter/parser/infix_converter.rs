use crate::converter::error::{ConversionError, Result};
use crate::converter::operator::{Associativity, BinaryOperator};
use crate::converter::stack::Stack;
use crate::converter::token::Token;

/// The direction in which the infix tokens are fed to the algorithm.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Reading {
    Forward,
    /// Tokens arrive last to first with their parentheses swapped.
    Backward,
}

impl Reading {
    fn associativity(self, operator: &BinaryOperator) -> Associativity {
        match self {
            Reading::Forward => operator.associativity(),
            Reading::Backward => operator.associativity().mirrored(),
        }
    }
}

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
pub(crate) fn infix_to_postfix(infix_tokens: &[Token]) -> Result<Vec<Token>> {
    shunting_yard(infix_tokens.iter().copied(), Reading::Forward)
}

/// Reorders infix tokens into prefix order.
///
/// The tokens are reversed with their parentheses swapped, run through the
/// shunting-yard algorithm with mirrored associativity, and the output is
/// reversed again.
pub(crate) fn infix_to_prefix(infix_tokens: &[Token]) -> Result<Vec<Token>> {
    let mirrored_tokens = infix_tokens.iter().rev().map(|token| token.mirrored());
    let mut prefix_tokens = shunting_yard(mirrored_tokens, Reading::Backward)?;
    prefix_tokens.reverse();
    Ok(prefix_tokens)
}

fn shunting_yard(tokens: impl Iterator<Item = Token>, reading: Reading) -> Result<Vec<Token>> {
    let mut operators: Stack<Token> = Stack::new();
    let mut output: Vec<Token> = vec![];
    for token in tokens {
        match token {
            Token::Operand(_) => output.push(token),
            Token::LeftParentheses => operators.push(token),
            Token::Operator(operator) => {
                let associativity = reading.associativity(&operator);
                parse_operator_token(&mut operators, &mut output, operator, associativity)
            }
            Token::RightParentheses => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(operators: &mut Stack<Token>, output: &mut Vec<Token>) -> Result<()> {
    while let Some(operator) = operators.pop() {
        match operator {
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(ConversionError::MismatchedParentheses);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Stack<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    loop {
        match operators.pop() {
            None => return Err(ConversionError::MismatchedParentheses),
            // Discard the open parenthesis.
            Some(Token::LeftParentheses) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Stack<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
    associativity: Associativity,
) {
    // Stops at an open parenthesis or an empty stack.
    while let Some(&Token::Operator(other_operator)) = operators.peek() {
        let binds_tighter = other_operator.precedence_gt(&operator)
            || (other_operator.precedence_eq(&operator) && associativity == Associativity::Left);
        if !binds_tighter {
            break;
        }

        operators.pop();
        output.push(Token::Operator(other_operator));
    }

    operators.push(Token::Operator(operator));
}
