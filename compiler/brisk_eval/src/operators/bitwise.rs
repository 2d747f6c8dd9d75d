//! Bitwise operators: `&`, `|`, `^`, `~`.
//!
//! Operands are coerced through their integer view (reals truncate,
//! characters give their code point) and the result is always an Integer.
//! `~` doubles as array spread and block invocation.

use brisk_value::{unary_type_mismatch, EvalResult, Stack, Value};

use super::mismatch;
use crate::block::BlockExecutor;
use crate::environment::Environment;

/// `&`: bitwise and of `y` and `x`.
pub fn bit_and(stack: &mut Stack) -> EvalResult {
    bitwise(stack, "&", |a, b| a & b)
}

/// `|`: bitwise or of `y` and `x`.
pub fn bit_or(stack: &mut Stack) -> EvalResult {
    bitwise(stack, "|", |a, b| a | b)
}

/// `^`: bitwise xor of `y` and `x`.
pub fn bit_xor(stack: &mut Stack) -> EvalResult {
    bitwise(stack, "^", |a, b| a ^ b)
}

/// `~`: spread an Array, run a Block, or complement an integer.
pub fn bit_not(
    stack: &mut Stack,
    env: &mut Environment,
    exec: &mut dyn BlockExecutor,
) -> EvalResult {
    match stack.pop()? {
        Value::Array(items) => stack.push_all(items),
        Value::Block(block) => exec.execute_block(stack, &block, env),
        value => match value.as_integer() {
            Some(n) => stack.push_integer(!n),
            None => Err(unary_type_mismatch("~", value.tag())),
        },
    }
}

fn bitwise(stack: &mut Stack, op: &'static str, apply: fn(i64, i64) -> i64) -> EvalResult {
    let x = stack.pop()?;
    let y = stack.pop()?;
    match (y.as_integer(), x.as_integer()) {
        (Some(a), Some(b)) => stack.push_integer(apply(a, b)),
        _ => Err(mismatch(op, &y, &x)),
    }
}
