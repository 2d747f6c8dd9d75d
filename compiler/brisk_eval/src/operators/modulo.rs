//! `%`: integer remainder, or map a block over a collection.

use brisk_value::{division_by_zero, integer_overflow, EvalResult, Stack, Value};

use super::mismatch;
use crate::block::BlockExecutor;
use crate::environment::Environment;

/// `%`: `y mod x` for two Integers (sign follows `y`), or, when `x` is a
/// Block and `y` an Array or Text, the block applied elementwise.
pub fn modulo(
    stack: &mut Stack,
    env: &mut Environment,
    exec: &mut dyn BlockExecutor,
) -> EvalResult {
    let x = stack.pop()?;
    let y = stack.pop()?;
    match (y, x) {
        (Value::Array(items), Value::Block(block)) => {
            exec.execute_block_over_array(stack, &block, items, env)
        }
        (Value::Text(text), Value::Block(block)) => {
            exec.execute_block_over_text(stack, &block, &text, env)
        }
        (Value::Integer(_), Value::Integer(0)) => Err(division_by_zero()),
        (Value::Integer(a), Value::Integer(b)) => {
            let rem = a.checked_rem(b).ok_or_else(|| integer_overflow("remainder"))?;
            stack.push_integer(rem)
        }
        (y, x) => Err(mismatch("%", &y, &x)),
    }
}
