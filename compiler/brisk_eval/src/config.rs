//! Evaluation limits.

use brisk_value::DEFAULT_CAPACITY;

/// Environment variable overriding the default stack capacity.
pub const CAPACITY_ENV_VAR: &str = "BRISK_STACK_CAPACITY";

/// Default limit on nested block executions.
const DEFAULT_MAX_BLOCK_DEPTH: usize = 10_000;

/// Limits applied to one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of values on the evaluation stack.
    pub stack_capacity: usize,
    /// Maximum nesting of block executions.
    pub max_block_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            stack_capacity: DEFAULT_CAPACITY,
            max_block_depth: DEFAULT_MAX_BLOCK_DEPTH,
        }
    }
}

impl EvalConfig {
    /// Defaults, with the stack capacity taken from `BRISK_STACK_CAPACITY`
    /// when it is set to a valid number.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(CAPACITY_ENV_VAR) {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(capacity) => config.with_stack_capacity(capacity),
                Err(e) => {
                    tracing::warn!("ignoring {CAPACITY_ENV_VAR}={raw:?}: {e}");
                    config
                }
            },
            Err(_) => config,
        }
    }

    #[must_use]
    pub fn with_stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_max_block_depth(mut self, depth: usize) -> Self {
        self.max_block_depth = depth;
        self
    }
}
