//! Well-formedness checks for token sequences.
//!
//! Validators only answer yes or no. Turning a "no" into an error is up to the caller.

use crate::converter::notation::Notation;
use crate::converter::stack::Stack;
use crate::converter::token::Token;

/// Checks the tokens against the grammar of the given notation.
pub fn validate(tokens: &[Token], notation: Notation) -> bool {
    match notation {
        Notation::Infix => validate_infix(tokens),
        Notation::Prefix => validate_prefix(tokens),
        Notation::Postfix => validate_postfix(tokens),
    }
}

/// Checks that operands and operators alternate, starting and ending with an
/// operand, and that parentheses are balanced and only wrap complete operands.
pub fn validate_infix(tokens: &[Token]) -> bool {
    if !contains_operator(tokens) {
        return false;
    }

    let mut depth: usize = 0;
    // An operand or an opening parenthesis is expected, not an operator or closing parenthesis.
    let mut expecting_operand = true;

    for token in tokens {
        match token {
            Token::LeftParentheses => {
                if !expecting_operand {
                    return false;
                }
                depth += 1;
            }
            Token::RightParentheses => {
                if expecting_operand {
                    return false;
                }
                depth = match depth.checked_sub(1) {
                    Some(depth) => depth,
                    None => return false,
                };
                // A closed group is a complete operand.
                expecting_operand = false;
            }
            Token::Operand(_) => {
                if !expecting_operand {
                    return false;
                }
                expecting_operand = false;
            }
            Token::Operator(_) => {
                if expecting_operand {
                    return false;
                }
                expecting_operand = true;
            }
        }
    }

    !expecting_operand && depth == 0
}

/// Checks that the tokens form exactly one prefix expression.
///
/// Reading left to right, an expression is complete once it holds one operand
/// more than it holds operators. That must happen at the last token and no earlier.
pub fn validate_prefix(tokens: &[Token]) -> bool {
    if !matches!(tokens.first(), Some(Token::Operator(_))) {
        return false;
    }

    let mut operator_count: usize = 0;
    let mut operand_count: usize = 0;

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Operator(_) => operator_count += 1,
            Token::Operand(_) => operand_count += 1,
            Token::LeftParentheses | Token::RightParentheses => return false,
        }

        if operand_count > operator_count + 1 {
            return false;
        }
        let is_complete = operand_count == operator_count + 1;
        let is_last = index + 1 == tokens.len();
        if is_complete && !is_last {
            return false;
        }
    }

    operand_count == operator_count + 1
}

/// Checks the tokens by evaluating them on a stack with placeholder values.
pub fn validate_postfix(tokens: &[Token]) -> bool {
    if !contains_operator(tokens) {
        return false;
    }

    let mut values: Stack<()> = Stack::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Operand(_) => values.push(()),
            Token::Operator(_) => {
                if values.pop().is_none() || values.pop().is_none() {
                    return false;
                }
                values.push(());
            }
            Token::LeftParentheses | Token::RightParentheses => return false,
        }
    }

    values.pop().is_some() && values.is_empty()
}

fn contains_operator(tokens: &[Token]) -> bool {
    tokens.iter().any(Token::is_operator)
}
