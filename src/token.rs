//! Match tokens
//!
//! A token pairs a search pattern with the class name its matches
//! carry and a case-sensitivity flag. Tokens are immutable once
//! built; `TokenBuilder` holds the defaults applied at construction.

/// Class name given to matches when a token does not set its own
pub const DEFAULT_CLASS: &str = "highlight";

/// A search token: pattern, class tag, case sensitivity
///
/// Fields are private so a constructed token can be shared across
/// rewrites without risk of mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pattern: String,
    class: String,
    case_sensitive: bool,
}

impl Token {
    /// Create a token with the default class and case-insensitive
    /// matching
    pub fn new(pattern: &str) -> Self {
        TokenBuilder::new().build(pattern)
    }

    /// The stored pattern text
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The class name carried by this token's matches
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Whether this token matches case-sensitively
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

/// Factory for tokens sharing one set of options
#[derive(Debug, Clone)]
pub struct TokenBuilder {
    class: String,
    case_sensitive: bool,
}

impl TokenBuilder {
    /// Create a builder with the default options
    pub fn new() -> Self {
        Self {
            class: DEFAULT_CLASS.to_string(),
            case_sensitive: false,
        }
    }

    /// Builder: set the class name given to matches
    pub fn class(mut self, class: &str) -> Self {
        self.class = class.to_string();
        self
    }

    /// Builder: set case-sensitive matching
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Build a token from a pattern
    ///
    /// One trailing `|` is stripped, a leftover from patterns
    /// assembled by joining alternatives.
    pub fn build(&self, pattern: &str) -> Token {
        let pattern = pattern.strip_suffix('|').unwrap_or(pattern);
        Token {
            pattern: pattern.to_string(),
            class: self.class.clone(),
            case_sensitive: self.case_sensitive,
        }
    }

    /// Build one token per pattern, all sharing this builder's options
    pub fn build_all(&self, patterns: &[&str]) -> Vec<Token> {
        patterns.iter().map(|pattern| self.build(pattern)).collect()
    }
}

impl Default for TokenBuilder {
    fn default() -> Self {
        Self::new()
    }
}
