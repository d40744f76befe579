mod infix_converter;
mod stack_converter;

pub(crate) use infix_converter::{infix_to_postfix, infix_to_prefix};
pub(crate) use stack_converter::{postfix_to_infix, prefix_to_infix};
