use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use thiserror::Error;

/// The arrangement of operators relative to their operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `A + B`
    Infix,
    /// `+ A B`
    Prefix,
    /// `A B +`
    Postfix,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown notation {0:?}, expected one of infix, prefix or postfix")]
pub struct UnknownNotation(pub String);

impl Notation {
    pub const ALL: [Notation; 3] = [Notation::Infix, Notation::Prefix, Notation::Postfix];

    pub fn name(&self) -> &'static str {
        match self {
            Notation::Infix => "infix",
            Notation::Prefix => "prefix",
            Notation::Postfix => "postfix",
        }
    }

    /// The two notations an expression in this notation can be converted into.
    pub fn others(self) -> [Notation; 2] {
        match self {
            Notation::Infix => [Notation::Prefix, Notation::Postfix],
            Notation::Prefix => [Notation::Infix, Notation::Postfix],
            Notation::Postfix => [Notation::Infix, Notation::Prefix],
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Notation {
    type Err = UnknownNotation;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Notation::ALL
            .into_iter()
            .find(|notation| notation.name().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| UnknownNotation(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("Infix".parse::<Notation>(), Ok(Notation::Infix));
        assert_eq!("PREFIX".parse::<Notation>(), Ok(Notation::Prefix));
        assert_eq!(" postfix ".parse::<Notation>(), Ok(Notation::Postfix));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let parsed: Result<Notation, _> = "polish".parse();
        assert_eq!(parsed, Err(UnknownNotation("polish".into())));
    }

    #[test]
    fn others_never_contains_self() {
        for notation in Notation::ALL {
            assert!(!notation.others().contains(&notation));
        }
    }
}
