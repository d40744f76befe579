//! Conversion between infix, prefix and postfix arithmetic expressions.

pub mod converter;
