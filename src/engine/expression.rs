//! Expression Parsing
//!
//! `king - man + woman` becomes an ordered list of signed word terms.

use std::fmt;

use super::token::normalize_token;

/// Sign applied to a term's vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sign {
    #[default]
    Plus,
    Minus,
}

impl Sign {
    /// Scalar multiplier for this sign
    pub fn factor(self) -> f64 {
        match self {
            Sign::Plus => 1.0,
            Sign::Minus => -1.0,
        }
    }

    fn from_operator(raw: &str) -> Option<Self> {
        match raw {
            "+" => Some(Sign::Plus),
            "-" => Some(Sign::Minus),
            _ => None,
        }
    }
}

/// A signed, normalized word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub sign: Sign,
    pub word: String,
}

/// Parsed arithmetic over word tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    terms: Vec<Term>,
}

impl Expression {
    /// Parse a whitespace-separated expression.
    ///
    /// A bare `+` or `-` sets the sign of the next word; with several
    /// operators in a row the last one wins. After a word the sign falls
    /// back to `+`. Tokens that normalize to nothing are dropped.
    pub fn parse(input: &str) -> Self {
        let mut terms = Vec::new();
        let mut sign = Sign::Plus;

        for raw in input.split_whitespace() {
            if let Some(op) = Sign::from_operator(raw) {
                sign = op;
                continue;
            }

            let word = normalize_token(raw);
            if word.is_empty() {
                continue;
            }
            terms.push(Term { sign, word });
            sign = Sign::Plus;
        }

        Self { terms }
    }

    /// Terms in input order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Normalized words of every term
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(|t| t.word.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            match (i, term.sign) {
                (0, Sign::Plus) => write!(f, "{}", term.word)?,
                (0, Sign::Minus) => write!(f, "-{}", term.word)?,
                (_, Sign::Plus) => write!(f, " + {}", term.word)?,
                (_, Sign::Minus) => write!(f, " - {}", term.word)?,
            }
        }
        Ok(())
    }
}
