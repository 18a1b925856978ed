//! Query template model.
//!
//! A [`StringQuery`] holds the query text and the already-parsed metadata of
//! its placeholders:
//! - positional (`?1`) or named (`:name`) keys
//! - LIKE pattern modes that add wildcards to the bound value
//! - expression-backed placeholders that are evaluated later
//!
//! Parsing the query text itself happens elsewhere.

mod binding;
mod cache;
mod string_query;

pub use binding::{BindingKey, ParameterBinding, PatternMode};
pub use cache::QueryCache;
pub use string_query::{StringQuery, StringQueryBuilder};
