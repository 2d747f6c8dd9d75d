//! Step operators: `(` (decrement) and `)` (increment).
//!
//! On scalars these add or subtract one, keeping the tag. On collections
//! they detach an end element: `(` the first, `)` the last. The shortened
//! collection is pushed first, the detached element on top of it.

use brisk_value::{
    empty_collection, integer_overflow, unary_type_mismatch, EvalResult, Stack, TypeTag, Value,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Down,
    Up,
}

impl Direction {
    fn symbol(self) -> &'static str {
        match self {
            Direction::Down => "(",
            Direction::Up => ")",
        }
    }

    fn operation(self) -> &'static str {
        match self {
            Direction::Down => "decrement",
            Direction::Up => "increment",
        }
    }
}

/// `(`: minus one, or detach the first element.
pub fn decr(stack: &mut Stack) -> EvalResult {
    step(stack, Direction::Down)
}

/// `)`: plus one, or detach the last element.
pub fn incr(stack: &mut Stack) -> EvalResult {
    step(stack, Direction::Up)
}

fn step(stack: &mut Stack, direction: Direction) -> EvalResult {
    let op = direction.symbol();
    match stack.pop()? {
        Value::Integer(n) => {
            let stepped = match direction {
                Direction::Down => n.checked_sub(1),
                Direction::Up => n.checked_add(1),
            };
            stack.push_integer(stepped.ok_or_else(|| integer_overflow(direction.operation()))?)
        }
        Value::Real(r) => stack.push_real(match direction {
            Direction::Down => r - 1.0,
            Direction::Up => r + 1.0,
        }),
        Value::Character(c) => stack.push_character(step_char(c, direction)),
        Value::Array(mut items) => {
            if items.is_empty() {
                return Err(empty_collection(op));
            }
            let detached = match direction {
                Direction::Down => items.remove(0),
                Direction::Up => items.remove(items.len() - 1),
            };
            stack.push_array(items)?;
            stack.push(detached)
        }
        Value::Text(s) => {
            let (rest, detached) = split_text(&s, direction).ok_or_else(|| empty_collection(op))?;
            stack.push_text(rest)?;
            stack.push_character(detached)
        }
        Value::Block(_) => Err(unary_type_mismatch(op, TypeTag::Block)),
    }
}

/// Detach the first or last character into a freshly allocated remainder.
fn split_text(s: &str, direction: Direction) -> Option<(String, char)> {
    match direction {
        Direction::Down => {
            let mut chars = s.chars();
            let first = chars.next()?;
            Some((chars.as_str().to_owned(), first))
        }
        Direction::Up => {
            let last = s.chars().next_back()?;
            Some((s[..s.len() - last.len_utf8()].to_owned(), last))
        }
    }
}

/// Step a character by one code point.
///
/// Wraps at both ends of the Unicode scalar range (`'\0'` - 1 is
/// `char::MAX`) and jumps over the surrogate gap.
fn step_char(c: char, direction: Direction) -> char {
    let code = u32::from(c);
    let next = match direction {
        Direction::Up if c == char::MAX => 0,
        Direction::Up if code == 0xD7FF => 0xE000,
        Direction::Up => code + 1,
        Direction::Down if code == 0 => u32::from(char::MAX),
        Direction::Down if code == 0xE000 => 0xD7FF,
        Direction::Down => code - 1,
    };
    // Every branch above lands on a scalar value.
    char::from_u32(next).unwrap_or(c)
}
