//! Dispatch-level behaviour: literals, variables, array brackets, limits.

use brisk_value::{EvalError, Value};
use pretty_assertions::assert_eq;

use super::{eval, ints};
use crate::config::EvalConfig;
use crate::environment::Environment;
use crate::interpreter::Interpreter;

#[test]
fn empty_program() {
    assert_eq!(eval(""), Ok(vec![]));
}

#[test]
fn missing_operands_underflow() {
    assert_eq!(eval("+"), Err(EvalError::StackUnderflow));
    assert_eq!(eval("1 -"), Err(EvalError::StackUnderflow));
}

#[test]
fn unknown_token_is_parse_error() {
    assert_eq!(
        eval("1 foo"),
        Err(EvalError::Parse {
            token: "foo".to_string()
        })
    );
}

#[test]
fn variables_load_copies() {
    assert_eq!(eval("A B +"), Ok(ints(&[21])));
    assert_eq!(eval("N"), Ok(vec![Value::text("\n")]));
    assert_eq!(eval("5 :X X +"), Ok(ints(&[10])));
}

#[test]
fn stored_array_is_not_aliased() {
    assert_eq!(
        eval("[ 1 2 ] :Q ) Q"),
        Ok(vec![
            Value::array(ints(&[1])),
            Value::Integer(2),
            Value::array(ints(&[1, 2])),
        ])
    );
}

#[test]
fn store_needs_a_value() {
    assert_eq!(eval(":Q"), Err(EvalError::StackUnderflow));
}

#[test]
fn array_brackets() {
    assert_eq!(
        eval("1 [ 2 3 ]"),
        Ok(vec![Value::Integer(1), Value::array(ints(&[2, 3]))])
    );
    assert_eq!(
        eval("[ 1 [ 2 ] ]"),
        Ok(vec![Value::array(vec![
            Value::Integer(1),
            Value::array(ints(&[2])),
        ])])
    );
    assert_eq!(eval("1 2 ]"), Ok(vec![Value::array(ints(&[1, 2]))]));
    // `+` consumes values from below the mark, so nothing is collected.
    assert_eq!(
        eval("1 2 [ + ]"),
        Ok(vec![Value::Integer(3), Value::array(vec![])])
    );
}

#[test]
fn capacity_is_enforced() {
    let mut interp = Interpreter::new(EvalConfig::default().with_stack_capacity(2));
    let mut stack = interp.new_stack();
    let mut env = Environment::new();
    assert_eq!(
        interp.run(&mut stack, &mut env, "1 2 3"),
        Err(EvalError::StackOverflow { capacity: 2 })
    );
    assert_eq!(stack.len(), 2);
}

#[test]
fn blocks_share_the_environment() {
    assert_eq!(eval("{ 7 :G } ~ G"), Ok(ints(&[7, 7])));
}
