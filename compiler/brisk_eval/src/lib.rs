//! Brisk Eval - operator dispatch for the brisk stack language.
//!
//! # Architecture
//!
//! The engine uses:
//! - `operators`: one function per operator, each popping its operands and
//!   matching on the operand type pair
//! - `BlockExecutor`: the seam through which `~`, `*`, `%` and text `/`
//!   reach block execution and text division
//! - `Interpreter`: the concrete executor, mapping tokens to operators
//! - `Environment`: the single-letter variable slots
//! - `render_stack` / `OutputHandler`: printing the final stack
//!
//! Values and the stack come from `brisk_value` and are re-exported here.

mod block;
mod config;
mod dispatch;
mod environment;
mod interpreter;
mod lexer;
mod literal;
pub mod operators;
mod output;
mod render;

#[cfg(test)]
mod tests;

pub use brisk_value::{
    input_error, Block, EvalError, EvalResult, Stack, TypeTag, Value, DEFAULT_CAPACITY,
};

pub use block::BlockExecutor;
pub use config::{EvalConfig, CAPACITY_ENV_VAR};
pub use dispatch::Op;
pub use environment::Environment;
pub use interpreter::Interpreter;
pub use lexer::tokenize;
pub use literal::push_literal;
pub use output::{BufferOutputHandler, OutputHandler, StdoutOutputHandler};
pub use render::render_stack;
