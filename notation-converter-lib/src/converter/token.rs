use crate::converter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression. Every token is exactly one character of input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Operand(char),
    Operator(BinaryOperator),
    LeftParentheses,
    RightParentheses,
}

impl Token {
    /// Classifies a single, already normalized, character.
    pub fn from_char(symbol: char) -> Option<Token> {
        match symbol {
            '(' => Some(Token::LeftParentheses),
            ')' => Some(Token::RightParentheses),
            symbol if symbol.is_alphanumeric() => Some(Token::Operand(symbol)),
            symbol => BinaryOperator::from_symbol(symbol).map(Token::Operator),
        }
    }

    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Operand(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    /// The same token as seen in a mirror: parentheses face the other way.
    pub(crate) fn mirrored(self) -> Token {
        match self {
            Token::LeftParentheses => Token::RightParentheses,
            Token::RightParentheses => Token::LeftParentheses,
            token => token,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(symbol) => write!(f, "{}", symbol),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
        }
    }
}
