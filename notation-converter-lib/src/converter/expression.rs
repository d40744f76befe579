use crate::converter::error::{ConversionError, Result};
use crate::converter::lexer::tokenize_as;
use crate::converter::notation::Notation;
use crate::converter::token::Token;
use crate::converter::tokens_to_string;
use crate::converter::validator::validate;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A token sequence that is known to be well-formed in its notation.
///
/// The only ways to obtain one are [`Expression::parse`], which validates user
/// input, and the converters, which re-validate their own output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    notation: Notation,
    tokens: Vec<Token>,
}

impl Expression {
    /// Tokenizes and validates the given text as an expression in `notation`.
    ///
    /// # Examples
    ///
    /// ```
    /// use notation_converter::converter::expression::Expression;
    /// use notation_converter::converter::notation::Notation;
    ///
    /// let expression = Expression::parse("A B +", Notation::Postfix).unwrap();
    /// assert_eq!(expression.to_string(), "AB+");
    /// assert!(Expression::parse("A B", Notation::Postfix).is_err());
    /// ```
    pub fn parse(expression: &str, notation: Notation) -> Result<Expression> {
        let tokens = tokenize_as(expression, notation)?;
        if !validate(&tokens, notation) {
            return Err(ConversionError::InvalidNotation {
                notation,
                expression: expression.to_string(),
            });
        }
        Ok(Expression { notation, tokens })
    }

    /// Wraps the output of a converter, which must pass the same validation as user input.
    pub(crate) fn from_converted(tokens: Vec<Token>, notation: Notation) -> Result<Expression> {
        if !validate(&tokens, notation) {
            return Err(ConversionError::InternalInconsistency {
                notation,
                output: tokens_to_string(&tokens),
            });
        }
        Ok(Expression { notation, tokens })
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn operand_count(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_operand()).count()
    }

    pub fn operator_count(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_operator()).count()
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&tokens_to_string(&self.tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_input_reports_the_original_text() {
        let error = Expression::parse("(A + B", Notation::Infix).unwrap_err();

        assert_eq!(
            error,
            ConversionError::InvalidNotation {
                notation: Notation::Infix,
                expression: "(A + B".into(),
            }
        );
    }

    #[test]
    fn malformed_characters_are_reported_before_validation() {
        let error = Expression::parse("X @ Y", Notation::Prefix).unwrap_err();

        assert!(matches!(
            error,
            ConversionError::MalformedInput { character: '@', .. }
        ));
    }

    #[test]
    fn converter_output_that_fails_validation_is_an_inconsistency() {
        let tokens = vec![Token::Operand('A'), Token::Operand('B')];

        let error = Expression::from_converted(tokens, Notation::Postfix).unwrap_err();

        assert_eq!(
            error,
            ConversionError::InternalInconsistency {
                notation: Notation::Postfix,
                output: "AB".into(),
            }
        );
    }

    #[parameterized(
        expression = { "((A + (B * C)) - (D / E))", "-+A*BC/DE", "ABC*+DE/-" },
        notation = { Notation::Infix, Notation::Prefix, Notation::Postfix }
    )]
    fn operands_outnumber_operators_by_one(expression: &str, notation: Notation) {
        use pretty_assertions::assert_eq;
        let expression = Expression::parse(expression, notation).unwrap();

        assert_eq!(expression.operand_count(), 5);
        assert_eq!(expression.operator_count(), 4);
    }
}
