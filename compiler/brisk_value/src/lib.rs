//! Brisk Value - the data side of the brisk evaluator.
//!
//! This crate provides:
//! - `Value`: the six-variant tagged value flowing through the stack
//! - `TypeTag`: the discriminator used for operator matrix dispatch
//! - `Stack`: the bounded LIFO container every operator mutates
//! - `EvalError` / `EvalResult` and their factory functions
//!
//! Operators live in `brisk_eval`; nothing here interprets tokens.

mod errors;
mod stack;
mod value;

pub use errors::{
    division_by_zero, empty_collection, input_error, integer_overflow, invalid_character,
    invalid_exponent, parse_error, type_mismatch, unary_type_mismatch, EvalError, EvalResult,
};
pub use stack::{Stack, DEFAULT_CAPACITY};
pub use value::{Block, TypeTag, Value};
