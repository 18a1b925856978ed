//! querybind - parameter binding for string-defined queries.
//!
//! Resolves method arguments to the placeholders of an already-parsed query
//! template and prepares their values (LIKE wildcards, expression deferral)
//! before handing them to a persistence provider's query object.

pub mod binder;
pub mod error;
pub mod parameters;
pub mod provider;
pub mod query;
pub mod types;

pub use binder::{BinderConfig, ParameterBinder, StringQueryStrategy};
pub use error::{BindError, Result};
pub use parameters::{MethodParameter, ParameterKind, Parameters};
pub use provider::{PositionCheck, ProviderQuery, RecordingQuery};
pub use query::{BindingKey, ParameterBinding, PatternMode, QueryCache, StringQuery};
pub use types::{DataType, Value};
