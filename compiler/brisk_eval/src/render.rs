//! Stack rendering.

use std::fmt::Write;

use brisk_value::Stack;

/// Render every slot left to right with no separators, then a newline.
///
/// Integers print in decimal, reals with six fractional digits,
/// characters and texts raw, arrays as their flattened elements and
/// blocks as `{body}`.
pub fn render_stack(stack: &Stack) -> String {
    let mut out = String::new();
    for value in stack.iter() {
        // Writing into a String cannot fail.
        let _ = write!(out, "{value}");
    }
    out.push('\n');
    out
}
