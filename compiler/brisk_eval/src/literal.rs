//! Literal tokens.

use brisk_value::{parse_error, Block, EvalResult, Stack};

/// Build the value a literal token denotes and push it.
///
/// - `"..."` is a Text (quotes stripped)
/// - `{...}` is a Block (braces stripped, body trimmed)
/// - a numeral with a `.` is a Real, without one an Integer
///
/// Anything else is a parse error.
pub fn push_literal(stack: &mut Stack, token: &str) -> EvalResult {
    if let Some(text) = token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        return stack.push_text(text);
    }
    if let Some(body) = token
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    {
        return stack.push_block(Block::new(body.trim()));
    }
    if token.contains('.') {
        let r = token.parse::<f64>().map_err(|_| parse_error(token))?;
        stack.push_real(r)
    } else {
        let n = token.parse::<i64>().map_err(|_| parse_error(token))?;
        stack.push_integer(n)
    }
}
