//! Evaluation errors.
//!
//! Operators report failures through the factory functions below rather
//! than building variants inline, so messages stay consistent.

use crate::value::TypeTag;

/// Result of an operator or stack primitive.
pub type EvalResult<T = ()> = Result<T, EvalError>;

/// Everything that can go wrong while evaluating a token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("stack underflow")]
    StackUnderflow,

    #[error("stack overflow (capacity {capacity})")]
    StackOverflow { capacity: usize },

    /// `left` is the first-entered operand, `right` the last-entered one.
    #[error("operator `{op}` cannot be applied to {}", describe_operands(*left, *right))]
    TypeMismatch {
        op: &'static str,
        left: TypeTag,
        right: Option<TypeTag>,
    },

    #[error("division by zero")]
    DivideByZero,

    #[error("operator `{op}` applied to an empty collection")]
    EmptyCollection { op: &'static str },

    #[error("negative integer exponent {exponent}")]
    InvalidExponent { exponent: i64 },

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    #[error("cannot parse `{token}`")]
    Parse { token: String },

    #[error("{code} is not a valid character code")]
    InvalidCharacter { code: i64 },

    /// Reading program text or an `l` line failed.
    #[error("failed to read input: {reason}")]
    Input { reason: String },
}

fn describe_operands(left: TypeTag, right: Option<TypeTag>) -> String {
    match right {
        Some(right) => format!("`{left}` and `{right}`"),
        None => format!("`{left}`"),
    }
}

#[cold]
pub fn type_mismatch(op: &'static str, left: TypeTag, right: TypeTag) -> EvalError {
    EvalError::TypeMismatch {
        op,
        left,
        right: Some(right),
    }
}

#[cold]
pub fn unary_type_mismatch(op: &'static str, operand: TypeTag) -> EvalError {
    EvalError::TypeMismatch {
        op,
        left: operand,
        right: None,
    }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivideByZero
}

#[cold]
pub fn empty_collection(op: &'static str) -> EvalError {
    EvalError::EmptyCollection { op }
}

#[cold]
pub fn invalid_exponent(exponent: i64) -> EvalError {
    EvalError::InvalidExponent { exponent }
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::IntegerOverflow { operation }
}

#[cold]
pub fn parse_error(token: impl Into<String>) -> EvalError {
    EvalError::Parse {
        token: token.into(),
    }
}

#[cold]
pub fn invalid_character(code: i64) -> EvalError {
    EvalError::InvalidCharacter { code }
}

#[cold]
pub fn input_error(reason: impl std::fmt::Display) -> EvalError {
    EvalError::Input {
        reason: reason.to_string(),
    }
}
