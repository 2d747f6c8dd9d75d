//! Token interpreter and concrete block executor.
//!
//! The interpreter owns nothing but evaluation state that outlives a
//! single token: the configuration, the input for `l`, the open `[` marks
//! and the current block nesting depth. The stack and environment are
//! passed in by the caller on every call.

use std::io::{self, BufRead};

use smallvec::SmallVec;

use brisk_stack::ensure_sufficient_stack;
use brisk_value::{input_error, Block, EvalError, EvalResult, Stack};

use crate::block::BlockExecutor;
use crate::config::EvalConfig;
use crate::dispatch::Op;
use crate::environment::Environment;
use crate::lexer::tokenize;
use crate::literal::push_literal;
use crate::operators;

/// Maps tokens to operators and runs blocks.
pub struct Interpreter {
    config: EvalConfig,
    input: Box<dyn BufRead>,
    marks: SmallVec<[usize; 4]>,
    block_depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(EvalConfig::default())
    }
}

impl Interpreter {
    /// Interpreter with no input available to `l`.
    pub fn new(config: EvalConfig) -> Self {
        Interpreter {
            config,
            input: Box::new(io::empty()),
            marks: SmallVec::new(),
            block_depth: 0,
        }
    }

    /// Use `input` as the line source for `l`.
    #[must_use]
    pub fn with_input(mut self, input: impl BufRead + 'static) -> Self {
        self.input = Box::new(input);
        self
    }

    /// An empty stack sized by the configured capacity.
    pub fn new_stack(&self) -> Stack {
        Stack::with_capacity_limit(self.config.stack_capacity)
    }

    /// Tokenize `source` and dispatch every token in order.
    pub fn run(&mut self, stack: &mut Stack, env: &mut Environment, source: &str) -> EvalResult {
        for token in tokenize(source)? {
            self.dispatch(stack, env, token)?;
        }
        Ok(())
    }

    /// Apply one token: an operator, a variable load or store, or a literal.
    pub fn dispatch(
        &mut self,
        stack: &mut Stack,
        env: &mut Environment,
        token: &str,
    ) -> EvalResult {
        tracing::trace!(token, depth = stack.len(), "dispatch");
        if let Some(op) = Op::from_token(token) {
            return self.apply(op, stack, env);
        }
        if let Some(name) = Environment::store_target(token) {
            let value = stack.top()?.clone();
            env.set(name, value);
            return Ok(());
        }
        if let Some(value) = env.lookup(token) {
            return stack.push(value.clone());
        }
        push_literal(stack, token)
    }

    fn apply(&mut self, op: Op, stack: &mut Stack, env: &mut Environment) -> EvalResult {
        match op {
            Op::Add => operators::add(stack),
            Op::Subtract => operators::subtract(stack),
            Op::Multiply => operators::multiply(stack, env, self),
            Op::Divide => operators::divide(stack, self),
            Op::Modulo => operators::modulo(stack, env, self),
            Op::Power => operators::expo(stack),
            Op::BitAnd => operators::bit_and(stack),
            Op::BitOr => operators::bit_or(stack),
            Op::BitXor => operators::bit_xor(stack),
            Op::BitNot => operators::bit_not(stack, env, self),
            Op::Decrement => operators::decr(stack),
            Op::Increment => operators::incr(stack),
            Op::ToInteger => operators::to_integer(stack),
            Op::ToReal => operators::to_real(stack),
            Op::ToCharacter => operators::to_character(stack),
            Op::ToText => operators::to_text(stack),
            Op::ReadLine => self.read_line(stack),
            Op::ArrayStart => {
                self.marks.push(stack.len());
                Ok(())
            }
            Op::ArrayEnd => self.close_array(stack),
        }
    }

    /// `]`: collect everything above the innermost `[` into an Array.
    ///
    /// Without an open `[` the whole stack is collected. A mark deeper
    /// than the stack (values consumed since `[`) collects from the top.
    fn close_array(&mut self, stack: &mut Stack) -> EvalResult {
        let mark = self.marks.pop().unwrap_or(0).min(stack.len());
        let items = stack.split_off(mark)?;
        tracing::debug!(len = items.len(), "collected array");
        stack.push_array(items)
    }

    /// `l`: push the next input line, newline included. Nothing is pushed
    /// at end of input; a failed read (including invalid UTF-8) is an
    /// `Input` error.
    fn read_line(&mut self, stack: &mut Stack) -> EvalResult {
        let mut line = String::new();
        match self.input.read_line(&mut line).map_err(input_error)? {
            0 => Ok(()),
            _ => stack.push_text(line),
        }
    }
}

impl BlockExecutor for Interpreter {
    #[tracing::instrument(level = "debug", skip_all, fields(body = block.body()))]
    fn execute_block(
        &mut self,
        stack: &mut Stack,
        block: &Block,
        env: &mut Environment,
    ) -> EvalResult {
        if self.block_depth >= self.config.max_block_depth {
            return Err(EvalError::StackOverflow {
                capacity: self.config.max_block_depth,
            });
        }
        let tokens = tokenize(block.body())?;
        self.block_depth += 1;
        let result = ensure_sufficient_stack(|| {
            tokens
                .iter()
                .try_for_each(|token| self.dispatch(stack, env, token))
        });
        self.block_depth -= 1;
        result
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use brisk_value::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn read_line_pushes_successive_lines() {
        let mut interp = Interpreter::default().with_input(io::Cursor::new("one\ntwo\n"));
        let mut stack = interp.new_stack();
        let mut env = Environment::new();
        interp.run(&mut stack, &mut env, "l l l").unwrap();
        assert_eq!(
            stack.as_slice(),
            &[Value::text("one\n"), Value::text("two\n")]
        );
    }

    #[test]
    fn read_line_reports_invalid_utf8() {
        let input = io::Cursor::new(b"\xff\xfe\n".to_vec());
        let mut interp = Interpreter::default().with_input(input);
        let mut stack = interp.new_stack();
        let mut env = Environment::new();
        let err = interp.run(&mut stack, &mut env, "1 l").unwrap_err();
        assert!(matches!(err, EvalError::Input { .. }));
        assert_eq!(stack.as_slice(), &[Value::Integer(1)]);
    }

    #[test]
    fn block_depth_limit_is_reported() {
        let mut interp = Interpreter::new(EvalConfig::default().with_max_block_depth(8));
        let mut stack = interp.new_stack();
        let mut env = Environment::new();
        // `B` holds a block that runs itself forever.
        let err = interp
            .run(&mut stack, &mut env, "{ B ~ } :B ~")
            .unwrap_err();
        assert_eq!(err, EvalError::StackOverflow { capacity: 8 });
    }

    #[test]
    fn stack_capacity_comes_from_config() {
        let interp = Interpreter::new(EvalConfig::default().with_stack_capacity(3));
        assert_eq!(interp.new_stack().capacity(), 3);
    }
}
