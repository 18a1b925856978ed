//! Persistence-provider query handle.
//!
//! The binder never talks to a database directly. It pushes prepared values
//! into a [`ProviderQuery`], the provider's executable query object.

mod recording;

pub use recording::RecordingQuery;

use crate::error::Result;
use crate::types::Value;

/// Outcome of asking a provider whether a position can be bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionCheck {
    /// The query declares this position.
    Valid,
    /// The query does not declare this position.
    Invalid,
    /// The provider cannot answer for this query (e.g. native SQL).
    Unsupported,
}

/// Parameter declared by a provider query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameter {
    /// 1-based position, for ordinal parameters.
    pub position: Option<usize>,
    /// Name, for named parameters.
    pub name: Option<String>,
}

impl QueryParameter {
    /// Creates an ordinal parameter.
    #[must_use]
    pub fn positional(position: usize) -> Self {
        QueryParameter {
            position: Some(position),
            name: None,
        }
    }

    /// Creates a named parameter.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        QueryParameter {
            position: None,
            name: Some(name.into()),
        }
    }
}

/// Executable query object of a persistence provider.
pub trait ProviderQuery {
    /// Reports whether `position` is a legal bind target.
    fn check_position(&self, position: usize) -> PositionCheck;

    /// Returns the parameters the provider parsed out of the query.
    fn parameters(&self) -> Vec<QueryParameter>;

    /// Assigns `value` to the ordinal parameter at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BindError::Provider`] if the provider rejects the assignment.
    fn set_positional(&mut self, position: usize, value: Value) -> Result<()>;

    /// Assigns `value` to the named parameter `name`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BindError::Provider`] if the provider rejects the assignment.
    fn set_named(&mut self, name: &str, value: Value) -> Result<()>;
}

/// Returns true if the provider query declares at least one named parameter.
#[must_use]
pub fn has_named_parameter<Q: ProviderQuery + ?Sized>(query: &Q) -> bool {
    query.parameters().iter().any(|p| p.name.is_some())
}
