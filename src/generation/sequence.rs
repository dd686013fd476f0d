//! Generated sequences.
//!
//! A generated sequence is the ordered result of one generation call:
//! words, characters, and optional numeric tokens. Sequences are secret
//! material, so `Debug` deliberately redacts the tokens and shows only
//! the length.

use std::fmt;

/// One symbol of a generated sequence.
#[derive(Clone, PartialEq, Eq)]
pub enum Token {
    /// A word drawn from a wordlist.
    Word(String),
    /// A number drawn from an inclusive range.
    Number(u64),
    /// A character drawn from a character set.
    Char(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(w) => f.write_str(w),
            Token::Number(n) => write!(f, "{n}"),
            Token::Char(c) => write!(f, "{c}"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Token::Word(_) => "Word",
            Token::Number(_) => "Number",
            Token::Char(_) => "Char",
        };
        f.debug_struct(kind).finish_non_exhaustive()
    }
}

/// The ordered output of one generation call.
///
/// Produced fresh on every call and never cached; reusing a sequence
/// across calls would defeat the security model.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedSequence {
    tokens: Vec<Token>,
}

impl GeneratedSequence {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Number of tokens in the sequence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the sequence holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens in generation order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consumes the sequence, yielding its tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Renders the sequence with the given separator between tokens.
    pub fn join(&self, separator: &str) -> String {
        let mut out = String::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(&token.to_string());
        }
        out
    }
}

impl fmt::Debug for GeneratedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedSequence")
            .field("len", &self.tokens.len())
            .finish_non_exhaustive()
    }
}
