//! Parsed query template with its placeholder bindings.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{BindError, Result};

use super::binding::{BindingKey, ParameterBinding};

/// A query string together with the bindings of its placeholders.
///
/// Bindings are kept in order of appearance in the query text. A
/// `StringQuery` is immutable once built and can be shared across
/// invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringQuery {
    query: String,
    bindings: Vec<ParameterBinding>,
}

impl StringQuery {
    /// Starts building a query for the given text.
    #[must_use]
    pub fn builder(query: impl Into<String>) -> StringQueryBuilder {
        StringQueryBuilder::new(query)
    }

    /// Returns the query text.
    #[must_use]
    pub fn query_string(&self) -> &str {
        &self.query
    }

    /// Returns all bindings in order of appearance.
    #[must_use]
    pub fn bindings(&self) -> &[ParameterBinding] {
        &self.bindings
    }

    /// Returns true if any placeholder bindings were declared.
    #[must_use]
    pub fn has_bindings(&self) -> bool {
        !self.bindings.is_empty()
    }

    /// Returns how many bindings are computed from expressions.
    #[must_use]
    pub fn expression_binding_count(&self) -> usize {
        self.bindings.iter().filter(|b| b.is_expression()).count()
    }

    /// Looks up the binding registered at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::NoBindingForPosition`] if nothing is registered there.
    pub fn binding_for_position(&self, position: usize) -> Result<&ParameterBinding> {
        self.bindings
            .iter()
            .find(|b| b.position() == Some(position))
            .ok_or(BindError::NoBindingForPosition(position))
    }

    /// Looks up the binding registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::NoBindingForName`] if nothing is registered under it.
    pub fn binding_for_name(&self, name: &str) -> Result<&ParameterBinding> {
        self.bindings
            .iter()
            .find(|b| b.name() == Some(name))
            .ok_or_else(|| BindError::NoBindingForName(name.to_string()))
    }
}

/// Assembles a [`StringQuery`] from already-parsed placeholder metadata.
#[derive(Debug)]
pub struct StringQueryBuilder {
    query: String,
    bindings: Vec<ParameterBinding>,
}

impl StringQueryBuilder {
    /// Creates a builder for the given query text.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        StringQueryBuilder {
            query: query.into(),
            bindings: Vec::new(),
        }
    }

    /// Appends the next binding in order of appearance.
    #[must_use]
    pub fn binding(mut self, binding: ParameterBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Validates and builds the query.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::InvalidPosition`] for position 0 and
    /// [`BindError::InvalidQuery`] for conflicting keys or empty names.
    pub fn build(self) -> Result<StringQuery> {
        let mut bindings: Vec<ParameterBinding> = Vec::with_capacity(self.bindings.len());
        let mut seen = HashSet::new();
        for binding in self.bindings {
            match binding.key() {
                BindingKey::Position(0) => return Err(BindError::InvalidPosition(0)),
                BindingKey::Name(name) if name.is_empty() => {
                    return Err(BindError::InvalidQuery(
                        "named binding with empty name".to_string(),
                    ));
                }
                _ => {}
            }

            // A placeholder may repeat in the query text, but only with the same binding.
            if !seen.insert(binding.key().clone()) {
                if bindings.contains(&binding) {
                    continue;
                }
                return Err(BindError::InvalidQuery(format!(
                    "conflicting bindings for {}",
                    binding.key()
                )));
            }
            bindings.push(binding);
        }

        Ok(StringQuery {
            query: self.query,
            bindings,
        })
    }
}
