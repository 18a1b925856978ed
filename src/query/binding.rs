//! Placeholder bindings and LIKE pattern preparation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Value;

/// Wildcard placement for pattern-match placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PatternMode {
    /// Value is bound as given.
    #[default]
    None,
    /// `%value%`
    Contains,
    /// `value%`
    StartsWith,
    /// `%value`
    EndsWith,
}

impl PatternMode {
    /// Wraps `value` with the wildcards of this mode.
    ///
    /// Null passes through untouched. Non-string values are rendered to text
    /// before wrapping. When `escape` is set, `%`, `_` and the escape character
    /// already present in the value are escaped first.
    #[must_use]
    pub fn apply(self, value: Value, escape: Option<char>) -> Value {
        if self == PatternMode::None || value.is_null() {
            return value;
        }

        let text = match value {
            Value::String(s) => s,
            other => other.to_string(),
        };
        let text = match escape {
            Some(escape) => escape_wildcards(&text, escape),
            None => text,
        };

        let wrapped = match self {
            PatternMode::Contains => format!("%{text}%"),
            PatternMode::StartsWith => format!("{text}%"),
            PatternMode::EndsWith => format!("%{text}"),
            PatternMode::None => text,
        };
        Value::String(wrapped)
    }
}

fn escape_wildcards(text: &str, escape: char) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '%' || c == '_' || c == escape {
            out.push(escape);
        }
        out.push(c);
    }
    out
}

/// How a placeholder is addressed in the query text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BindingKey {
    /// 1-based ordinal placeholder (`?1`).
    Position(usize),
    /// Named placeholder (`:name`).
    Name(String),
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingKey::Position(p) => write!(f, "?{p}"),
            BindingKey::Name(n) => write!(f, ":{n}"),
        }
    }
}

/// Metadata for one substitutable slot in a query template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterBinding {
    /// Plain placeholder; the value is bound unchanged.
    Plain {
        key: BindingKey,
        expression: Option<String>,
    },
    /// Placeholder inside a LIKE clause.
    Like {
        key: BindingKey,
        expression: Option<String>,
        mode: PatternMode,
    },
}

impl ParameterBinding {
    /// Creates a plain positional binding.
    #[must_use]
    pub fn positional(position: usize) -> Self {
        ParameterBinding::Plain {
            key: BindingKey::Position(position),
            expression: None,
        }
    }

    /// Creates a plain named binding.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        ParameterBinding::Plain {
            key: BindingKey::Name(name.into()),
            expression: None,
        }
    }

    /// Creates a LIKE binding for the given key.
    #[must_use]
    pub fn like(key: BindingKey, mode: PatternMode) -> Self {
        ParameterBinding::Like {
            key,
            expression: None,
            mode,
        }
    }

    /// Marks this binding as computed from an expression.
    #[must_use]
    pub fn with_expression(mut self, source: impl Into<String>) -> Self {
        match &mut self {
            ParameterBinding::Plain { expression, .. }
            | ParameterBinding::Like { expression, .. } => *expression = Some(source.into()),
        }
        self
    }

    /// Returns the placeholder key.
    #[must_use]
    pub fn key(&self) -> &BindingKey {
        match self {
            ParameterBinding::Plain { key, .. } | ParameterBinding::Like { key, .. } => key,
        }
    }

    /// Returns the position if this binding is positional.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self.key() {
            BindingKey::Position(p) => Some(*p),
            BindingKey::Name(_) => None,
        }
    }

    /// Returns the name if this binding is named.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self.key() {
            BindingKey::Name(n) => Some(n.as_str()),
            BindingKey::Position(_) => None,
        }
    }

    /// Returns the expression source, if any.
    #[must_use]
    pub fn expression(&self) -> Option<&str> {
        match self {
            ParameterBinding::Plain { expression, .. }
            | ParameterBinding::Like { expression, .. } => expression.as_deref(),
        }
    }

    /// Returns true if the value is computed by expression evaluation.
    #[must_use]
    pub fn is_expression(&self) -> bool {
        self.expression().is_some()
    }

    /// Returns the pattern mode; plain bindings report [`PatternMode::None`].
    #[must_use]
    pub fn pattern_mode(&self) -> PatternMode {
        match self {
            ParameterBinding::Plain { .. } => PatternMode::None,
            ParameterBinding::Like { mode, .. } => *mode,
        }
    }

    /// Prepares `value` for binding to this placeholder.
    #[must_use]
    pub fn prepare(&self, value: Value) -> Value {
        self.prepare_escaped(value, None)
    }

    /// Like [`prepare`](Self::prepare), escaping wildcards with `escape`.
    #[must_use]
    pub fn prepare_escaped(&self, value: Value, escape: Option<char>) -> Value {
        self.pattern_mode().apply(value, escape)
    }
}
