//! Single-letter variable slots.
//!
//! Variables `A` through `Z` always exist. Loading one pushes a copy, and
//! `:X` stores a copy of the top of the stack, so a variable never shares
//! a payload with a stack slot.

use rustc_hash::FxHashMap;

use brisk_value::Value;

/// Variable environment shared by the top level and every block.
#[derive(Clone, Debug)]
pub struct Environment {
    vars: FxHashMap<char, Value>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Environment with the predefined values:
    /// `A`..`F` = 10..15, `N` = newline, `S` = space, `X`/`Y`/`Z` = 0/1/2.
    pub fn new() -> Self {
        let mut vars = FxHashMap::default();
        for (name, n) in ('A'..='F').zip(10..) {
            vars.insert(name, Value::Integer(n));
        }
        vars.insert('N', Value::text("\n"));
        vars.insert('S', Value::text(" "));
        vars.insert('X', Value::Integer(0));
        vars.insert('Y', Value::Integer(1));
        vars.insert('Z', Value::Integer(2));
        Environment { vars }
    }

    /// Value of variable `name`, if one has been set.
    pub fn get(&self, name: char) -> Option<&Value> {
        self.vars.get(&name)
    }

    /// Replace the value of variable `name`.
    pub fn set(&mut self, name: char, value: Value) {
        self.vars.insert(name, value);
    }

    /// Value named by a load token such as `A`.
    pub fn lookup(&self, token: &str) -> Option<&Value> {
        variable_name(token).and_then(|name| self.get(name))
    }

    /// Variable named by a store token such as `:A`.
    pub fn store_target(token: &str) -> Option<char> {
        token.strip_prefix(':').and_then(variable_name)
    }
}

fn variable_name(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Some(c),
        _ => None,
    }
}
