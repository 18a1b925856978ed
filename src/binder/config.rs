//! Binder configuration.

/// Configuration for string-query binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinderConfig {
    /// Allow a synthesized plain positional binding when the provider cannot
    /// resolve a position and the query has no named parameters.
    pub positional_fallback: bool,
    /// Escape character applied to `%` and `_` inside LIKE values (None = no escaping).
    pub like_escape: Option<char>,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            positional_fallback: true,
            like_escape: None,
        }
    }
}

impl BinderConfig {
    /// Creates a new binder configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the positional fallback is allowed.
    #[must_use]
    pub fn with_positional_fallback(mut self, enabled: bool) -> Self {
        self.positional_fallback = enabled;
        self
    }

    /// Sets the LIKE escape character.
    #[must_use]
    pub fn with_like_escape(mut self, escape: char) -> Self {
        self.like_escape = Some(escape);
        self
    }
}
