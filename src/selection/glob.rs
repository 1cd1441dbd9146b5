//! Case-insensitive wildcard patterns
//!
//! `*` matches zero or more characters (path separators included), `?`
//! matches exactly one character, and everything else is literal. A pattern
//! must match the whole candidate string.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyOne,
    AnyMany,
}

/// A compiled wildcard pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    source: String,
    tokens: Vec<Token>,
}

impl WildcardPattern {
    pub fn new(pattern: &str) -> Self {
        let mut tokens = Vec::with_capacity(pattern.len());
        for c in pattern.to_lowercase().chars() {
            let token = match c {
                '*' => Token::AnyMany,
                '?' => Token::AnyOne,
                other => Token::Literal(other),
            };
            // Runs of `*` are equivalent to a single one
            if token == Token::AnyMany && tokens.last() == Some(&Token::AnyMany) {
                continue;
            }
            tokens.push(token);
        }

        Self {
            source: pattern.to_string(),
            tokens,
        }
    }

    /// Whether the entire `candidate` matches, ignoring case
    pub fn matches(&self, candidate: &str) -> bool {
        let text: Vec<char> = candidate.to_lowercase().chars().collect();
        let tokens = &self.tokens;

        let (mut p, mut t) = (0, 0);
        // Position of the last `*` and the text index it is currently absorbing up to
        let mut backtrack: Option<(usize, usize)> = None;

        while t < text.len() {
            match tokens.get(p) {
                Some(Token::AnyMany) => {
                    backtrack = Some((p, t));
                    p += 1;
                    continue;
                }
                Some(Token::AnyOne) => {
                    p += 1;
                    t += 1;
                    continue;
                }
                Some(Token::Literal(c)) if *c == text[t] => {
                    p += 1;
                    t += 1;
                    continue;
                }
                _ => {}
            }

            let Some((star, absorbed)) = backtrack else {
                return false;
            };
            p = star + 1;
            t = absorbed + 1;
            backtrack = Some((star, absorbed + 1));
        }

        tokens[p..].iter().all(|token| *token == Token::AnyMany)
    }
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
