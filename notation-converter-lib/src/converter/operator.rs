use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl Associativity {
    /// The grouping direction seen when an expression is read back to front.
    pub(crate) fn mirrored(self) -> Associativity {
        match self {
            Associativity::Left => Associativity::Right,
            Associativity::Right => Associativity::Left,
        }
    }
}

impl BinaryOperator {
    /// Every supported operator. The set is fixed.
    pub const ALL: [BinaryOperator; 5] = [
        BinaryOperator::Add,
        BinaryOperator::Subtract,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
        BinaryOperator::Exponentiate,
    ];

    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            '^' => Some(BinaryOperator::Exponentiate),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Exponentiate => '^',
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide => Associativity::Left,
            BinaryOperator::Exponentiate => Associativity::Right,
        }
    }

    /// Higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 2,
            BinaryOperator::Multiply | BinaryOperator::Divide => 3,
            BinaryOperator::Exponentiate => 4,
        }
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn operator_equality_correspond_with_precedence() {
        let equal1 = BinaryOperator::Multiply;
        let equal2 = BinaryOperator::Divide;
        assert!(equal1.precedence_eq(&equal2))
    }

    #[test]
    fn operator_gt_correspond_with_precedence() {
        let greater = BinaryOperator::Exponentiate;
        let lesser = BinaryOperator::Multiply;
        assert!(greater.precedence_gt(&lesser));
        assert!(!lesser.precedence_gt(&greater));
    }

    #[test]
    fn only_exponentiation_is_right_associative() {
        let right_associative: Vec<_> = BinaryOperator::ALL
            .iter()
            .filter(|operator| operator.associativity() == Associativity::Right)
            .collect();
        assert_eq!(right_associative, [&BinaryOperator::Exponentiate]);
    }

    #[parameterized(symbol = { '+', '-', '*', '/', '^' })]
    fn symbol_survives_lookup(symbol: char) {
        let operator = BinaryOperator::from_symbol(symbol).unwrap();
        assert_eq!(operator.symbol(), symbol);
    }

    #[parameterized(symbol = { '&', '%', '(', 'A', '1' })]
    fn unknown_symbol_is_not_an_operator(symbol: char) {
        assert_eq!(BinaryOperator::from_symbol(symbol), None);
    }
}
