//! Parameter binding for query method invocations.
//!
//! The binder walks the declared method parameters and pushes each eligible
//! argument into a provider query:
//! - eligibility decides whether a parameter is bound now or deferred
//! - resolution prepares the value for its placeholder (e.g. LIKE wildcards)
//! - the base bind assigns it by name or by position
//!
//! Variants are composed from strategies rather than subclassed.

mod config;
mod evaluation;
mod parameter_binder;
mod string_query;

pub use config::BinderConfig;
pub use evaluation::{DefaultEvaluationContextProvider, EvaluationContext, EvaluationContextProvider};
pub use parameter_binder::{BindEligibility, BindingResolver, DefaultStrategy, ParameterBinder};
pub use string_query::StringQueryStrategy;
