//! Runtime values for the brisk evaluator.
//!
//! Every payload is exclusively owned by the `Value` that holds it. There
//! is no reference counting: copying a value onto the stack (a variable
//! load, `:X` store) clones the payload, so no two stack slots ever share
//! a buffer.

use std::fmt;

/// Discriminator for operator matrix dispatch.
///
/// The declaration order is the total order over variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeTag {
    Integer,
    Real,
    Character,
    Text,
    Array,
    Block,
}

impl TypeTag {
    /// Single-character symbol for this tag.
    pub fn symbol(self) -> char {
        match self {
            TypeTag::Integer => 'I',
            TypeTag::Real => 'R',
            TypeTag::Character => 'C',
            TypeTag::Text => 'T',
            TypeTag::Array => 'A',
            TypeTag::Block => 'B',
        }
    }

    /// Human-readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Integer => "integer",
            TypeTag::Real => "real",
            TypeTag::Character => "character",
            TypeTag::Text => "text",
            TypeTag::Array => "array",
            TypeTag::Block => "block",
        }
    }

    /// Integer or Real.
    pub fn is_numeric(self) -> bool {
        matches!(self, TypeTag::Integer | TypeTag::Real)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A deferred-execution unit.
///
/// Holds the source text between the braces of a `{ ... }` literal. Only
/// the block executor gives it meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    body: String,
}

impl Block {
    pub fn new(body: impl Into<String>) -> Self {
        Block { body: body.into() }
    }

    /// Source text of the block, without the enclosing braces.
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.body)
    }
}

/// A tagged value on the brisk stack.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
    Character(char),
    Text(String),
    /// Heterogeneous owned sequence, independent of the evaluation stack.
    Array(Vec<Value>),
    Block(Block),
}

impl Value {
    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }

    #[inline]
    pub fn block(body: impl Into<String>) -> Self {
        Value::Block(Block::new(body))
    }

    /// The matrix discriminator for this value.
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Integer(_) => TypeTag::Integer,
            Value::Real(_) => TypeTag::Real,
            Value::Character(_) => TypeTag::Character,
            Value::Text(_) => TypeTag::Text,
            Value::Array(_) => TypeTag::Array,
            Value::Block(_) => TypeTag::Block,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.tag().is_numeric()
    }

    /// Integer view of a scalar payload.
    ///
    /// Reals truncate toward zero (saturating at the `i64` bounds) and
    /// characters yield their code point. Collections and blocks have none.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "truncation is the documented coercion for reals"
    )]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Real(r) => Some(*r as i64),
            Value::Character(c) => Some(i64::from(u32::from(*c))),
            Value::Text(_) | Value::Array(_) | Value::Block(_) => None,
        }
    }

    /// Real view of a numeric payload; integers are promoted.
    #[expect(
        clippy::cast_precision_loss,
        reason = "integer to real promotion is the operator semantics"
    )]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }
}

/// Rendering used by the stack printer and the `s` conversion.
///
/// Arrays render their elements back to back, recursively; reals use six
/// fractional digits.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Real(r) => write!(f, "{r:.6}"),
            Value::Character(c) => write!(f, "{c}"),
            Value::Text(s) => f.write_str(s),
            Value::Array(items) => items.iter().try_for_each(|item| write!(f, "{item}")),
            Value::Block(block) => write!(f, "{block}"),
        }
    }
}
