//! Operator tests, driven through the interpreter so operand order
//! matches what a program sees.

mod program_tests;

use brisk_value::{EvalError, Value};

use crate::environment::Environment;
use crate::interpreter::Interpreter;

/// Run `source` on a fresh stack and return the final stack, bottom first.
fn eval(source: &str) -> Result<Vec<Value>, EvalError> {
    let mut interp = Interpreter::default();
    let mut stack = interp.new_stack();
    let mut env = Environment::new();
    interp.run(&mut stack, &mut env, source)?;
    Ok(stack.into_values())
}

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Integer).collect()
}
