//! Operator implementations.
//!
//! Every operator pops its operands itself: `x` first (the value entered
//! last), then `y`. Non-commutative results are `y OP x`. Dispatch is a
//! `match` over the `(y, x)` pair; every pair without a meaning is a
//! `TypeMismatch`, never a silent no-op.

mod arith;
mod bitwise;
mod convert;
mod modulo;
mod step;

pub use arith::{add, divide, expo, multiply, subtract};
pub use bitwise::{bit_and, bit_not, bit_or, bit_xor};
pub use convert::{to_character, to_integer, to_real, to_text};
pub use modulo::modulo;
pub use step::{decr, incr};

use brisk_value::{type_mismatch, EvalError, Value};

/// Both operands as reals, when both are numeric.
fn real_pair(y: &Value, x: &Value) -> Option<(f64, f64)> {
    Some((y.as_real()?, x.as_real()?))
}

#[cold]
fn mismatch(op: &'static str, y: &Value, x: &Value) -> EvalError {
    type_mismatch(op, y.tag(), x.tag())
}
