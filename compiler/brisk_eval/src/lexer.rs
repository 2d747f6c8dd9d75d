//! Splits a program line into tokens.
//!
//! Tokens are separated by whitespace, with two exceptions that may span
//! whitespace: a quoted text literal (`"a b"`) and a brace-delimited block
//! (`{ 1 + }`, nesting allowed, quotes inside are skipped). Both keep their
//! delimiters so `push_literal` can tell them apart.

use brisk_value::{parse_error, EvalResult};

/// Split `source` into tokens.
///
/// An unterminated quote or brace is a parse error naming the unfinished
/// token.
pub fn tokenize(source: &str) -> EvalResult<Vec<&str>> {
    let mut cursor = Cursor::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = cursor.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    fn remaining(&self) -> &'a [u8] {
        &self.source.as_bytes()[self.pos..]
    }

    fn next_token(&mut self) -> EvalResult<Option<&'a str>> {
        self.skip_whitespace();
        let start = self.pos;
        let end = match self.remaining().first() {
            None => return Ok(None),
            Some(b'"') => self.quoted_end(start)?,
            Some(b'{') => self.block_end(start)?,
            Some(_) => self.word_end(),
        };
        self.pos = end;
        Ok(Some(&self.source[start..end]))
    }

    fn skip_whitespace(&mut self) {
        let skipped = self
            .remaining()
            .iter()
            .take_while(|b| b.is_ascii_whitespace())
            .count();
        self.pos += skipped;
    }

    fn word_end(&self) -> usize {
        let len = self
            .remaining()
            .iter()
            .take_while(|b| !b.is_ascii_whitespace())
            .count();
        self.pos + len
    }

    /// End (exclusive) of the quoted literal opening at `start`.
    fn quoted_end(&self, start: usize) -> EvalResult<usize> {
        let body = &self.source.as_bytes()[start + 1..];
        match memchr::memchr(b'"', body) {
            Some(offset) => Ok(start + 1 + offset + 1),
            None => Err(parse_error(&self.source[start..])),
        }
    }

    /// End (exclusive) of the block opening at `start`.
    fn block_end(&self, start: usize) -> EvalResult<usize> {
        let bytes = self.source.as_bytes();
        let mut depth = 1usize;
        let mut pos = start + 1;
        while let Some(offset) = memchr::memchr3(b'{', b'}', b'"', &bytes[pos..]) {
            let at = pos + offset;
            match bytes[at] {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(at + 1);
                    }
                }
                _ => {
                    pos = self.quoted_end(at)?;
                    continue;
                }
            }
            pos = at + 1;
        }
        Err(parse_error(&self.source[start..]))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use brisk_value::EvalError;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokenize("  5 2\t-\n").unwrap(), vec!["5", "2", "-"]);
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn quoted_text_keeps_spaces() {
        assert_eq!(
            tokenize(r#""hello world" "ll" #"#).unwrap(),
            vec![r#""hello world""#, r#""ll""#, "#"]
        );
    }

    #[test]
    fn blocks_nest_and_skip_quotes() {
        assert_eq!(
            tokenize(r#"[ 1 2 ] { { 1 + } ~ "}" + } *"#).unwrap(),
            vec!["[", "1", "2", "]", r#"{ { 1 + } ~ "}" + }"#, "*"]
        );
    }

    #[test]
    fn unterminated_literals_are_errors() {
        assert_eq!(
            tokenize(r#"1 "abc"#),
            Err(EvalError::Parse {
                token: r#""abc"#.to_string()
            })
        );
        assert!(tokenize("{ 1 { 2 }").is_err());
    }
}
