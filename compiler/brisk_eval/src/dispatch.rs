//! The fixed token-to-operator table.

/// An operator token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    Decrement,
    Increment,
    ToInteger,
    ToReal,
    ToCharacter,
    ToText,
    ReadLine,
    ArrayStart,
    ArrayEnd,
}

impl Op {
    /// Every operator, in table order.
    pub const ALL: [Op; 19] = [
        Op::Add,
        Op::Subtract,
        Op::Multiply,
        Op::Divide,
        Op::Modulo,
        Op::Power,
        Op::BitAnd,
        Op::BitOr,
        Op::BitXor,
        Op::BitNot,
        Op::Decrement,
        Op::Increment,
        Op::ToInteger,
        Op::ToReal,
        Op::ToCharacter,
        Op::ToText,
        Op::ReadLine,
        Op::ArrayStart,
        Op::ArrayEnd,
    ];

    /// The operator a token names, if any.
    pub fn from_token(token: &str) -> Option<Op> {
        let op = match token {
            "+" => Op::Add,
            "-" => Op::Subtract,
            "*" => Op::Multiply,
            "/" => Op::Divide,
            "%" => Op::Modulo,
            "#" => Op::Power,
            "&" => Op::BitAnd,
            "|" => Op::BitOr,
            "^" => Op::BitXor,
            "~" => Op::BitNot,
            "(" => Op::Decrement,
            ")" => Op::Increment,
            "i" => Op::ToInteger,
            "f" => Op::ToReal,
            "c" => Op::ToCharacter,
            "s" => Op::ToText,
            "l" => Op::ReadLine,
            "[" => Op::ArrayStart,
            "]" => Op::ArrayEnd,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Subtract => "-",
            Op::Multiply => "*",
            Op::Divide => "/",
            Op::Modulo => "%",
            Op::Power => "#",
            Op::BitAnd => "&",
            Op::BitOr => "|",
            Op::BitXor => "^",
            Op::BitNot => "~",
            Op::Decrement => "(",
            Op::Increment => ")",
            Op::ToInteger => "i",
            Op::ToReal => "f",
            Op::ToCharacter => "c",
            Op::ToText => "s",
            Op::ReadLine => "l",
            Op::ArrayStart => "[",
            Op::ArrayEnd => "]",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_through_table() {
        for op in Op::ALL {
            assert_eq!(Op::from_token(op.as_symbol()), Some(op));
        }
    }

    #[test]
    fn literals_are_not_operators() {
        assert_eq!(Op::from_token("-3"), None);
        assert_eq!(Op::from_token("++"), None);
        assert_eq!(Op::from_token("A"), None);
    }
}
