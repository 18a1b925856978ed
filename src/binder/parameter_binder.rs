//! Base parameter binder and its strategy seams.

use std::sync::Arc;

use tracing::trace;

use crate::error::{BindError, Result};
use crate::parameters::{MethodParameter, Parameters};
use crate::provider::{has_named_parameter, ProviderQuery};
use crate::types::Value;

use super::evaluation::{EvaluationContext, EvaluationContextProvider};

/// Turns a raw argument into the value pushed into the provider query.
pub trait BindingResolver: Send + Sync {
    /// Prepares `value` for the parameter about to be bound at 1-based `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if no binding can be resolved for the parameter.
    fn prepare(
        &self,
        query: &dyn ProviderQuery,
        parameter: &MethodParameter,
        value: Value,
        position: usize,
    ) -> Result<Value>;
}

/// Decides whether a parameter is bound in this pass.
pub trait BindEligibility: Send + Sync {
    /// Returns the verdict for `parameter`; `default` is the base verdict.
    fn can_bind(&self, parameter: &MethodParameter, default: bool) -> bool;
}

/// Binds values unchanged and keeps the base eligibility verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrategy;

impl BindingResolver for DefaultStrategy {
    fn prepare(
        &self,
        _query: &dyn ProviderQuery,
        _parameter: &MethodParameter,
        value: Value,
        _position: usize,
    ) -> Result<Value> {
        Ok(value)
    }
}

impl BindEligibility for DefaultStrategy {
    fn can_bind(&self, _parameter: &MethodParameter, default: bool) -> bool {
        default
    }
}

/// Pushes the arguments of one method invocation into a provider query.
///
/// A binder is built per invocation. Variants differ only in the
/// [`BindingResolver`] and [`BindEligibility`] they are composed with.
pub struct ParameterBinder<'a> {
    parameters: &'a Parameters,
    values: Vec<Value>,
    evaluation: Arc<dyn EvaluationContextProvider>,
    resolver: Arc<dyn BindingResolver>,
    eligibility: Arc<dyn BindEligibility>,
}

impl<'a> ParameterBinder<'a> {
    /// Creates a binder with the default strategies.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::ArgumentCountMismatch`] if `values` does not
    /// supply exactly one argument per declared parameter.
    pub fn new(
        parameters: &'a Parameters,
        values: Vec<Value>,
        evaluation: Arc<dyn EvaluationContextProvider>,
    ) -> Result<Self> {
        if parameters.len() != values.len() {
            return Err(BindError::ArgumentCountMismatch {
                expected: parameters.len(),
                actual: values.len(),
            });
        }

        Ok(ParameterBinder {
            parameters,
            values,
            evaluation,
            resolver: Arc::new(DefaultStrategy),
            eligibility: Arc::new(DefaultStrategy),
        })
    }

    /// Replaces the binding-resolution strategy.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn BindingResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replaces the eligibility strategy.
    #[must_use]
    pub fn with_eligibility(mut self, eligibility: Arc<dyn BindEligibility>) -> Self {
        self.eligibility = eligibility;
        self
    }

    /// Returns the declared parameters.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        self.parameters
    }

    /// Returns the raw arguments.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Builds the context for bindings deferred to expression evaluation.
    #[must_use]
    pub fn evaluation_context(&self) -> EvaluationContext {
        self.evaluation
            .evaluation_context(self.parameters, &self.values)
    }

    /// Returns true if `parameter` should be bound in this pass.
    #[must_use]
    pub fn can_bind_parameter(&self, parameter: &MethodParameter) -> bool {
        self.eligibility
            .can_bind(parameter, parameter.is_bindable())
    }

    /// Binds every eligible argument and returns how many were bound.
    ///
    /// Query positions are assigned 1, 2, ... to bound parameters in
    /// declaration order.
    ///
    /// # Errors
    ///
    /// Fails on the first parameter that cannot be resolved or assigned.
    pub fn bind_all(&self, query: &mut dyn ProviderQuery) -> Result<usize> {
        let mut position = 1;

        for (parameter, value) in self.parameters.iter().zip(&self.values) {
            if !self.can_bind_parameter(parameter) {
                trace!(index = parameter.index, "skipping parameter");
                continue;
            }

            let prepared = self
                .resolver
                .prepare(&*query, parameter, value.clone(), position)?;
            bind(query, parameter, prepared, position)?;
            position += 1;
        }

        Ok(position - 1)
    }
}

/// Assigns by name when both the parameter and the query are named, else by position.
fn bind(
    query: &mut dyn ProviderQuery,
    parameter: &MethodParameter,
    value: Value,
    position: usize,
) -> Result<()> {
    match parameter.name() {
        Some(name) if has_named_parameter(&*query) => {
            trace!(name, ?value, "binding named parameter");
            query.set_named(name, value)
        }
        _ => {
            trace!(position, ?value, "binding positional parameter");
            query.set_positional(position, value)
        }
    }
}
