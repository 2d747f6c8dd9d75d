//! The block-execution seam.
//!
//! Operators never interpret a block themselves. `~`, `*` (fold), `%`
//! (map) and `/` on texts go through a `BlockExecutor`, which may mutate
//! the same stack and environment it is handed.

use brisk_value::{empty_collection, Block, EvalResult, Stack, Value};

use crate::environment::Environment;

/// Executes blocks on behalf of the operators.
///
/// Only `execute_block` is required; the collection forms are defined in
/// terms of it.
pub trait BlockExecutor {
    /// Run `block` once against `stack`.
    fn execute_block(
        &mut self,
        stack: &mut Stack,
        block: &Block,
        env: &mut Environment,
    ) -> EvalResult;

    /// Map: run `block` on each element, collecting everything it leaves
    /// into a new Array.
    fn execute_block_over_array(
        &mut self,
        stack: &mut Stack,
        block: &Block,
        array: Vec<Value>,
        env: &mut Environment,
    ) -> EvalResult {
        let mut results = Vec::with_capacity(array.len());
        for item in array {
            results.extend(self.collect_block_results(stack, block, item, env)?);
        }
        stack.push_array(results)
    }

    /// Map over the characters of `text`; the collected results are
    /// rendered back into a new Text.
    fn execute_block_over_text(
        &mut self,
        stack: &mut Stack,
        block: &Block,
        text: &str,
        env: &mut Environment,
    ) -> EvalResult {
        let mut result = String::with_capacity(text.len());
        for c in text.chars() {
            for value in self.collect_block_results(stack, block, Value::Character(c), env)? {
                result.push_str(&value.to_string());
            }
        }
        stack.push_text(result)
    }

    /// Fold: push the first element, then push each further element and
    /// run `block`. The reduced value is left on the stack.
    fn fold_array(
        &mut self,
        stack: &mut Stack,
        block: &Block,
        array: Vec<Value>,
        env: &mut Environment,
    ) -> EvalResult {
        let mut items = array.into_iter();
        let first = items.next().ok_or_else(|| empty_collection("*"))?;
        stack.push(first)?;
        for item in items {
            stack.push(item)?;
            self.execute_block(stack, block, env)?;
        }
        Ok(())
    }

    /// Split `text` on every occurrence of `separator`, pushing an Array
    /// of the pieces. An empty separator splits into single characters.
    fn divide_text(&mut self, stack: &mut Stack, text: &str, separator: &str) -> EvalResult {
        let pieces = if separator.is_empty() {
            text.chars().map(|c| Value::text(c.to_string())).collect()
        } else {
            text.split(separator).map(Value::text).collect()
        };
        stack.push_array(pieces)
    }

    /// Push `item`, run `block`, and take back whatever it left above the
    /// starting depth.
    fn collect_block_results(
        &mut self,
        stack: &mut Stack,
        block: &Block,
        item: Value,
        env: &mut Environment,
    ) -> EvalResult<Vec<Value>> {
        let depth = stack.len();
        stack.push(item)?;
        self.execute_block(stack, block, env)?;
        stack.split_off(depth.min(stack.len()))
    }
}
