//! Conversion operators: `i`, `f`, `c`, `s`.

use brisk_value::{
    invalid_character, parse_error, unary_type_mismatch, EvalResult, Stack, Value,
};

/// `i`: to Integer. Reals truncate, characters give their code point,
/// texts are parsed.
pub fn to_integer(stack: &mut Stack) -> EvalResult {
    let value = stack.pop()?;
    let n = match &value {
        Value::Text(s) => s.trim().parse::<i64>().map_err(|_| parse_error(s.as_str()))?,
        other => other
            .as_integer()
            .ok_or_else(|| unary_type_mismatch("i", other.tag()))?,
    };
    stack.push_integer(n)
}

/// `f`: to Real. Characters give their code point, texts are parsed.
pub fn to_real(stack: &mut Stack) -> EvalResult {
    let value = stack.pop()?;
    let r = match &value {
        Value::Integer(_) | Value::Real(_) => value.as_real(),
        Value::Character(c) => Some(f64::from(u32::from(*c))),
        Value::Text(s) => Some(s.trim().parse::<f64>().map_err(|_| parse_error(s.as_str()))?),
        Value::Array(_) | Value::Block(_) => None,
    };
    match r {
        Some(r) => stack.push_real(r),
        None => Err(unary_type_mismatch("f", value.tag())),
    }
}

/// `c`: to Character, from an integer code point.
pub fn to_character(stack: &mut Stack) -> EvalResult {
    let value = stack.pop()?;
    let c = match value {
        Value::Character(c) => c,
        Value::Integer(_) | Value::Real(_) => {
            let code = value.as_integer().unwrap_or_default();
            u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| invalid_character(code))?
        }
        other => return Err(unary_type_mismatch("c", other.tag())),
    };
    stack.push_character(c)
}

/// `s`: to Text, using the stack rendering of the value.
pub fn to_text(stack: &mut Stack) -> EvalResult {
    match stack.pop()? {
        text @ Value::Text(_) => stack.push(text),
        other => stack.push_text(other.to_string()),
    }
}
