use crate::error_handling::*;

/// Returned by `peek` for every position past the last token of a line.
pub const END: &str = "\u{3}";

pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

pub trait Scanner<'a> {
    fn peek_at(&self, offset: usize) -> &'a str;

    /// True while the cursor is on a real token of the line.
    fn is_valid(&self) -> bool;

    /// The only way to move the cursor. `expected` guards against the
    /// caller consuming something it never looked at.
    fn consume(&mut self, expected: &str) -> Result<()>;

    fn peek(&self) -> &'a str {
        self.peek_at(0)
    }
}

pub struct LineScanner<'a> {
    tokens: &'a [&'a str],
    index: usize,
}

impl<'a> LineScanner<'a> {
    pub fn new(tokens: &'a [&'a str]) -> Self {
        Self{tokens, index: 0}
    }
}

impl<'a> Scanner<'a> for LineScanner<'a> {
    fn peek_at(&self, offset: usize) -> &'a str {
        self.index.checked_add(offset)
            .and_then(|i| self.tokens.get(i))
            .copied()
            .unwrap_or(END)
    }

    fn is_valid(&self) -> bool {
        self.index < self.tokens.len()
    }

    fn consume(&mut self, expected: &str) -> Result<()> {
        if !self.is_valid() {
            return Err(CatError::unexpected_token(expected.into()));
        }
        let found = self.peek();
        if found != expected {
            return Err(CatError::token_mismatch {
                expected: expected.into(),
                found: found.into(),
            });
        }
        self.index += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_any_whitespace() {
        assert_eq!(tokenize("  x =\t2 - -2 \r\n"), vec!["x", "=", "2", "-", "-2"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn peek_past_the_end_returns_sentinel() {
        let tokens = ["print", "1"];
        let scanner = LineScanner::new(&tokens);
        assert_eq!(scanner.peek(), "print");
        assert_eq!(scanner.peek_at(1), "1");
        assert_eq!(scanner.peek_at(2), END);
        assert_eq!(scanner.peek_at(100), END);
    }

    #[test]
    fn consume_advances_on_match() {
        let tokens = ["(", ")"];
        let mut scanner = LineScanner::new(&tokens);
        scanner.consume("(").unwrap();
        assert_eq!(scanner.peek(), ")");
        scanner.consume(")").unwrap();
        assert!(!scanner.is_valid());
    }

    #[test]
    fn consume_reports_mismatch_without_moving() {
        let tokens = ["x", "+"];
        let mut scanner = LineScanner::new(&tokens);
        scanner.consume("x").unwrap();
        match scanner.consume("=") {
            Err(CatError::token_mismatch { expected, found }) => {
                assert_eq!(expected, "=");
                assert_eq!(found, "+");
            },
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(scanner.peek(), "+");
    }

    #[test]
    fn consume_at_end_is_unexpected() {
        let tokens: [&str; 0] = [];
        let mut scanner = LineScanner::new(&tokens);
        assert!(matches!(scanner.consume(")"), Err(CatError::unexpected_token(t)) if t == ")"));
    }

    #[test]
    fn sentinel_text_in_the_line_is_an_ordinary_token() {
        let tokens = [END, ")"];
        let mut scanner = LineScanner::new(&tokens);
        assert!(scanner.is_valid());
        scanner.consume(END).unwrap();
        assert!(scanner.is_valid());
        scanner.consume(")").unwrap();
        assert!(!scanner.is_valid());
        assert!(matches!(scanner.consume(END), Err(CatError::unexpected_token(_))));
    }

    #[test]
    fn huge_offsets_peek_the_sentinel() {
        let tokens = ["x", "=", "1"];
        let mut scanner = LineScanner::new(&tokens);
        scanner.consume("x").unwrap();
        assert_eq!(scanner.peek_at(usize::MAX), END);
        assert_eq!(scanner.peek_at(usize::MAX - 1), END);
    }
}
