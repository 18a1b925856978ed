//! In-memory provider query that records assignments.

use crate::error::{BindError, Result};
use crate::query::BindingKey;
use crate::types::Value;

use super::{PositionCheck, ProviderQuery, QueryParameter};

/// Provider query that keeps every assigned value in order.
///
/// Useful for embedding the binder in tooling that renders or logs queries,
/// and as a stand-in provider in tests. A native query accepts ordinal
/// assignments but cannot introspect its positions, so
/// [`check_position`](ProviderQuery::check_position) reports
/// [`PositionCheck::Unsupported`].
#[derive(Debug, Clone, Default)]
pub struct RecordingQuery {
    declared: Vec<QueryParameter>,
    native: bool,
    assignments: Vec<(BindingKey, Value)>,
}

impl RecordingQuery {
    /// Creates a query declaring ordinal parameters `1..=count`.
    #[must_use]
    pub fn positional(count: usize) -> Self {
        RecordingQuery {
            declared: (1..=count).map(QueryParameter::positional).collect(),
            ..Self::default()
        }
    }

    /// Creates a query declaring the given named parameters.
    #[must_use]
    pub fn named(names: &[&str]) -> Self {
        RecordingQuery {
            declared: names.iter().map(|n| QueryParameter::named(*n)).collect(),
            ..Self::default()
        }
    }

    /// Creates a native query with `count` ordinal parameters.
    #[must_use]
    pub fn native(count: usize) -> Self {
        RecordingQuery {
            native: true,
            ..Self::positional(count)
        }
    }

    /// Declares an additional parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: QueryParameter) -> Self {
        self.declared.push(parameter);
        self
    }

    /// Returns assignments in the order they were made.
    #[must_use]
    pub fn assignments(&self) -> &[(BindingKey, Value)] {
        &self.assignments
    }

    /// Returns the value last assigned to `position`.
    #[must_use]
    pub fn value_at(&self, position: usize) -> Option<&Value> {
        self.lookup(&BindingKey::Position(position))
    }

    /// Returns the value last assigned to `name`.
    #[must_use]
    pub fn value_for(&self, name: &str) -> Option<&Value> {
        self.lookup(&BindingKey::Name(name.to_string()))
    }

    fn lookup(&self, key: &BindingKey) -> Option<&Value> {
        self.assignments
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn declares_position(&self, position: usize) -> bool {
        self.declared.iter().any(|p| p.position == Some(position))
    }
}

impl ProviderQuery for RecordingQuery {
    fn check_position(&self, position: usize) -> PositionCheck {
        if self.native {
            PositionCheck::Unsupported
        } else if self.declares_position(position) {
            PositionCheck::Valid
        } else {
            PositionCheck::Invalid
        }
    }

    fn parameters(&self) -> Vec<QueryParameter> {
        self.declared.clone()
    }

    fn set_positional(&mut self, position: usize, value: Value) -> Result<()> {
        if !self.declares_position(position) {
            return Err(BindError::Provider(format!(
                "query has no parameter at position {position}"
            )));
        }
        self.assignments.push((BindingKey::Position(position), value));
        Ok(())
    }

    fn set_named(&mut self, name: &str, value: Value) -> Result<()> {
        if !self.declared.iter().any(|p| p.name.as_deref() == Some(name)) {
            return Err(BindError::Provider(format!(
                "query has no parameter named '{name}'"
            )));
        }
        self.assignments
            .push((BindingKey::Name(name.to_string()), value));
        Ok(())
    }
}
