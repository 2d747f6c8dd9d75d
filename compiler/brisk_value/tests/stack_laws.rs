//! Property-based tests for the evaluation stack.
//!
//! 1. LIFO: pushing N values then popping N returns them reversed.
//! 2. Capacity: a stack never holds more than its configured capacity.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use brisk_value::{EvalError, Stack, Value};
use proptest::prelude::*;

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Integer),
        (-1.0e9..1.0e9f64).prop_map(Value::Real),
        any::<char>().prop_map(Value::Character),
        "[a-z ]{0,8}".prop_map(Value::text),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(2, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::array)
    })
}

proptest! {
    #[test]
    fn pops_return_pushes_in_reverse(values in prop::collection::vec(value_strategy(), 0..32)) {
        let mut stack = Stack::new();
        for v in &values {
            stack.push(v.clone()).unwrap();
        }
        let mut popped = Vec::with_capacity(values.len());
        for _ in 0..values.len() {
            popped.push(stack.pop().unwrap());
        }
        popped.reverse();
        prop_assert_eq!(popped, values);
        prop_assert_eq!(stack.pop(), Err(EvalError::StackUnderflow));
    }

    #[test]
    fn never_exceeds_capacity(capacity in 0usize..16, pushes in 0usize..32) {
        let mut stack = Stack::with_capacity_limit(capacity);
        for i in 0..pushes {
            let result = stack.push_integer(i64::try_from(i).unwrap());
            prop_assert_eq!(result.is_ok(), i < capacity);
        }
        prop_assert!(stack.len() <= capacity);
    }
}
