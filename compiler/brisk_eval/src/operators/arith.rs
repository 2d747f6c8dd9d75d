//! Arithmetic operators: `+`, `-`, `*`, `/`, `#`.
//!
//! Integer pairs stay Integer and use checked arithmetic; any Real operand
//! promotes the pair to Real. Collections and texts get their own rows of
//! the matrix (concatenation, repetition, substring search).

use brisk_value::{
    division_by_zero, integer_overflow, invalid_exponent, EvalResult, Stack, Value,
};

use super::{mismatch, real_pair};
use crate::block::BlockExecutor;
use crate::environment::Environment;

/// `+`: numeric sum, or concatenation.
///
/// | y         | x         | result                       |
/// |-----------|-----------|------------------------------|
/// | Integer   | Integer   | Integer sum                  |
/// | numeric   | numeric   | Real sum                     |
/// | Array     | Array     | elements of y then x         |
/// | Array     | scalar    | x appended                   |
/// | scalar    | Array     | y prepended                  |
/// | Text      | Text      | y then x                     |
/// | Text      | Character | character appended           |
/// | Character | Text      | character prepended          |
///
/// Scalars here are Integer, Real and Character.
pub fn add(stack: &mut Stack) -> EvalResult {
    let x = stack.pop()?;
    let y = stack.pop()?;
    let result = match (y, x) {
        (Value::Integer(a), Value::Integer(b)) => {
            Value::Integer(a.checked_add(b).ok_or_else(|| integer_overflow("addition"))?)
        }
        (Value::Array(mut a), Value::Array(b)) => {
            a.extend(b);
            Value::Array(a)
        }
        (Value::Array(mut a), x @ (Value::Integer(_) | Value::Real(_) | Value::Character(_))) => {
            a.push(x);
            Value::Array(a)
        }
        (y @ (Value::Integer(_) | Value::Real(_) | Value::Character(_)), Value::Array(b)) => {
            let mut items = Vec::with_capacity(b.len() + 1);
            items.push(y);
            items.extend(b);
            Value::Array(items)
        }
        (Value::Text(mut a), Value::Text(b)) => {
            a.push_str(&b);
            Value::Text(a)
        }
        (Value::Text(mut a), Value::Character(c)) => {
            a.push(c);
            Value::Text(a)
        }
        (Value::Character(c), Value::Text(b)) => {
            let mut s = String::with_capacity(b.len() + c.len_utf8());
            s.push(c);
            s.push_str(&b);
            Value::Text(s)
        }
        (y, x) => match real_pair(&y, &x) {
            Some((a, b)) => Value::Real(a + b),
            None => return Err(mismatch("+", &y, &x)),
        },
    };
    stack.push(result)
}

/// `-`: numeric difference `y - x`.
pub fn subtract(stack: &mut Stack) -> EvalResult {
    let x = stack.pop()?;
    let y = stack.pop()?;
    let result = match (&y, &x) {
        (Value::Integer(a), Value::Integer(b)) => {
            Value::Integer(a.checked_sub(*b).ok_or_else(|| integer_overflow("subtraction"))?)
        }
        _ => match real_pair(&y, &x) {
            Some((a, b)) => Value::Real(a - b),
            None => return Err(mismatch("-", &y, &x)),
        },
    };
    stack.push(result)
}

/// `*`: fold, repetition, or numeric product.
///
/// - x Block, y Array: fold `y` with the block as reducer
/// - y Array or Text, x numeric: `y` repeated `x` times (non-positive
///   counts give an empty result, reals truncate)
/// - numeric pair: product
pub fn multiply(
    stack: &mut Stack,
    env: &mut Environment,
    exec: &mut dyn BlockExecutor,
) -> EvalResult {
    let x = stack.pop()?;
    let y = stack.pop()?;
    let result = match (y, x) {
        (Value::Array(items), Value::Block(block)) => {
            return exec.fold_array(stack, &block, items, env);
        }
        (Value::Array(items), x) if x.is_numeric() => {
            Value::Array(repeat_array(&items, repeat_count(&x))?)
        }
        (Value::Text(s), x) if x.is_numeric() => Value::Text(repeat_text(&s, repeat_count(&x))?),
        (Value::Integer(a), Value::Integer(b)) => {
            Value::Integer(a.checked_mul(b).ok_or_else(|| integer_overflow("multiplication"))?)
        }
        (y, x) => match real_pair(&y, &x) {
            Some((a, b)) => Value::Real(a * b),
            None => return Err(mismatch("*", &y, &x)),
        },
    };
    stack.push(result)
}

/// `/`: quotient `y / x`, or text division.
///
/// Integer division truncates toward zero; a zero Integer divisor is
/// `DivideByZero`. Real division follows IEEE 754. Two texts go to the
/// executor's `divide_text`.
pub fn divide(stack: &mut Stack, exec: &mut dyn BlockExecutor) -> EvalResult {
    let x = stack.pop()?;
    let y = stack.pop()?;
    let result = match (&y, &x) {
        (Value::Integer(_), Value::Integer(0)) => return Err(division_by_zero()),
        (Value::Integer(a), Value::Integer(b)) => {
            Value::Integer(a.checked_div(*b).ok_or_else(|| integer_overflow("division"))?)
        }
        (Value::Text(a), Value::Text(b)) => return exec.divide_text(stack, a, b),
        _ => match real_pair(&y, &x) {
            Some((a, b)) => Value::Real(a / b),
            None => return Err(mismatch("/", &y, &x)),
        },
    };
    stack.push(result)
}

/// `#`: power, or substring search.
///
/// - Integer pair: `y` raised to `x`; a negative exponent is
///   `InvalidExponent`
/// - Text `y`, Text or Character `x`: character index of the first
///   occurrence of `x` in `y`, or -1
/// - other numeric pairs: Real power
pub fn expo(stack: &mut Stack) -> EvalResult {
    let x = stack.pop()?;
    let y = stack.pop()?;
    let result = match (&y, &x) {
        (Value::Integer(base), Value::Integer(exponent)) => integer_power(*base, *exponent)?,
        (Value::Text(haystack), Value::Text(needle)) => find_index(haystack, needle)?,
        (Value::Text(haystack), Value::Character(c)) => {
            let mut buf = [0u8; 4];
            find_index(haystack, c.encode_utf8(&mut buf))?
        }
        _ => match real_pair(&y, &x) {
            Some((a, b)) => Value::Real(a.powf(b)),
            None => return Err(mismatch("#", &y, &x)),
        },
    };
    stack.push(result)
}

/// Repetition count: the integer view of `x`, with negatives as zero.
fn repeat_count(x: &Value) -> usize {
    x.as_integer()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}

/// `items` repeated `count` times. The whole result is reserved up front,
/// so a length the allocator cannot satisfy is an error rather than an
/// abort.
fn repeat_array(items: &[Value], count: usize) -> EvalResult<Vec<Value>> {
    if items.is_empty() || count == 0 {
        return Ok(Vec::new());
    }
    let total = items
        .len()
        .checked_mul(count)
        .ok_or_else(|| integer_overflow("repetition"))?;
    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| integer_overflow("repetition"))?;
    for _ in 0..count {
        out.extend_from_slice(items);
    }
    Ok(out)
}

/// `s` repeated `count` times, reserved up front like `repeat_array`.
fn repeat_text(s: &str, count: usize) -> EvalResult<String> {
    if s.is_empty() || count == 0 {
        return Ok(String::new());
    }
    let total = s
        .len()
        .checked_mul(count)
        .ok_or_else(|| integer_overflow("repetition"))?;
    let mut out = String::new();
    out.try_reserve_exact(total)
        .map_err(|_| integer_overflow("repetition"))?;
    for _ in 0..count {
        out.push_str(s);
    }
    Ok(out)
}

fn integer_power(base: i64, exponent: i64) -> EvalResult<Value> {
    if exponent < 0 {
        return Err(invalid_exponent(exponent));
    }
    let power = match u32::try_from(exponent) {
        Ok(e) => base.checked_pow(e),
        // Exponents past u32 only stay in range for these bases.
        Err(_) => match base {
            0 | 1 => Some(base),
            -1 => Some(if exponent % 2 == 0 { 1 } else { -1 }),
            _ => None,
        },
    };
    power
        .map(Value::Integer)
        .ok_or_else(|| integer_overflow("exponentiation"))
}

/// Character index of `needle` in `haystack`, or -1.
fn find_index(haystack: &str, needle: &str) -> EvalResult<Value> {
    let index = match haystack.find(needle) {
        Some(byte_offset) => i64::try_from(haystack[..byte_offset].chars().count())
            .map_err(|_| integer_overflow("substring search"))?,
        None => -1,
    };
    Ok(Value::Integer(index))
}
