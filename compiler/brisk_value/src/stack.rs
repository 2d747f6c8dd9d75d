//! The bounded evaluation stack.
//!
//! Slots own their values: `pop` moves the value out, `push` moves it in.
//! The capacity is fixed at construction; exceeding it is a
//! `StackOverflow` error, never a reallocation past the limit.

use crate::errors::{EvalError, EvalResult};
use crate::value::{Block, Value};

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// LIFO container of values with a fixed capacity.
#[derive(Clone, Debug, PartialEq)]
pub struct Stack {
    items: Vec<Value>,
    capacity: usize,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    /// Create an empty stack with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity_limit(DEFAULT_CAPACITY)
    }

    /// Create an empty stack holding at most `capacity` values.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of values on the stack (the stack pointer).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Push a value, taking ownership of it.
    pub fn push(&mut self, value: Value) -> EvalResult {
        if self.items.len() >= self.capacity {
            return Err(EvalError::StackOverflow {
                capacity: self.capacity,
            });
        }
        self.items.push(value);
        Ok(())
    }

    /// Pop the top value, moving ownership to the caller.
    pub fn pop(&mut self) -> EvalResult<Value> {
        self.items.pop().ok_or(EvalError::StackUnderflow)
    }

    /// Peek at the top value.
    pub fn top(&self) -> EvalResult<&Value> {
        self.items.last().ok_or(EvalError::StackUnderflow)
    }

    pub fn push_integer(&mut self, n: i64) -> EvalResult {
        self.push(Value::Integer(n))
    }

    pub fn push_real(&mut self, r: f64) -> EvalResult {
        self.push(Value::Real(r))
    }

    pub fn push_character(&mut self, c: char) -> EvalResult {
        self.push(Value::Character(c))
    }

    pub fn push_text(&mut self, s: impl Into<String>) -> EvalResult {
        self.push(Value::Text(s.into()))
    }

    pub fn push_array(&mut self, items: Vec<Value>) -> EvalResult {
        self.push(Value::Array(items))
    }

    pub fn push_block(&mut self, block: Block) -> EvalResult {
        self.push(Value::Block(block))
    }

    /// Push values in iteration order (the last one ends on top).
    pub fn push_all(&mut self, values: impl IntoIterator<Item = Value>) -> EvalResult {
        values.into_iter().try_for_each(|v| self.push(v))
    }

    /// Remove every value above `depth`, bottom to top.
    ///
    /// Fails with `StackUnderflow` when the stack is shallower than `depth`.
    pub fn split_off(&mut self, depth: usize) -> EvalResult<Vec<Value>> {
        if depth > self.items.len() {
            return Err(EvalError::StackUnderflow);
        }
        Ok(self.items.split_off(depth))
    }

    /// All values, bottom to top.
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.items
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn basic_push_pop() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());

        stack.push_integer(1).unwrap();
        stack.push_text("two").unwrap();
        assert_eq!(stack.len(), 2);

        assert_eq!(stack.pop().unwrap(), Value::text("two"));
        assert_eq!(stack.pop().unwrap(), Value::Integer(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn underflow() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop(), Err(EvalError::StackUnderflow));
        assert_eq!(stack.top(), Err(EvalError::StackUnderflow));
    }

    #[test]
    fn overflow_at_capacity() {
        let mut stack = Stack::with_capacity_limit(2);
        stack.push_integer(1).unwrap();
        stack.push_integer(2).unwrap();
        assert_eq!(
            stack.push_integer(3),
            Err(EvalError::StackOverflow { capacity: 2 })
        );
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut stack = Stack::with_capacity_limit(0);
        assert!(stack.push_character('a').is_err());
    }

    #[test]
    fn push_all_keeps_order() {
        let mut stack = Stack::new();
        stack
            .push_all(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)])
            .unwrap();
        assert_eq!(stack.top().unwrap(), &Value::Integer(3));
        assert_eq!(
            stack.as_slice(),
            &[Value::Integer(1), Value::Integer(2), Value::Integer(3)]
        );
    }

    #[test]
    fn split_off_returns_values_above_depth() {
        let mut stack = Stack::new();
        stack.push_all((1..=4).map(Value::Integer)).unwrap();
        let above = stack.split_off(1).unwrap();
        assert_eq!(
            above,
            vec![Value::Integer(2), Value::Integer(3), Value::Integer(4)]
        );
        assert_eq!(stack.as_slice(), &[Value::Integer(1)]);
        assert_eq!(stack.split_off(5), Err(EvalError::StackUnderflow));
    }

    #[test]
    fn popped_value_is_independent_of_slot() {
        let mut stack = Stack::new();
        stack.push_text("abc").unwrap();
        let mut moved = stack.pop().unwrap();
        if let Value::Text(s) = &mut moved {
            s.push('d');
        }
        stack.push_text("abc").unwrap();
        assert_eq!(stack.top().unwrap(), &Value::text("abc"));
        assert_eq!(moved, Value::text("abcd"));
    }
}
