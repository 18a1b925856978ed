//! Binding strategy for string-defined queries.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::debug;

use crate::error::{BindError, Result};
use crate::parameters::{MethodParameter, Parameters};
use crate::provider::{has_named_parameter, PositionCheck, ProviderQuery};
use crate::query::{ParameterBinding, StringQuery};
use crate::types::Value;

use super::config::BinderConfig;
use super::evaluation::EvaluationContextProvider;
use super::parameter_binder::{BindEligibility, BindingResolver, ParameterBinder};

/// Applies the placeholder bindings of a [`StringQuery`] while binding.
///
/// Each value is prepared by the binding registered for its placeholder
/// (adding LIKE wildcards where declared). Parameters are held back entirely
/// when every declared binding is expression-backed.
#[derive(Debug, Clone)]
pub struct StringQueryStrategy {
    query: Arc<StringQuery>,
    config: BinderConfig,
}

impl StringQueryStrategy {
    /// Creates a strategy with the default configuration.
    #[must_use]
    pub fn new(query: Arc<StringQuery>) -> Self {
        Self::with_config(query, BinderConfig::default())
    }

    /// Creates a strategy with the given configuration.
    #[must_use]
    pub fn with_config(query: Arc<StringQuery>, config: BinderConfig) -> Self {
        StringQueryStrategy { query, config }
    }

    /// Builds a [`ParameterBinder`] composed with this strategy.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::ArgumentCountMismatch`] if `values` does not
    /// supply exactly one argument per declared parameter.
    pub fn binder<'a>(
        self,
        parameters: &'a Parameters,
        values: Vec<Value>,
        evaluation: Arc<dyn EvaluationContextProvider>,
    ) -> Result<ParameterBinder<'a>> {
        let strategy = Arc::new(self);
        Ok(ParameterBinder::new(parameters, values, evaluation)?
            .with_resolver(Arc::clone(&strategy) as Arc<dyn BindingResolver>)
            .with_eligibility(strategy))
    }

    /// Resolves the binding for the parameter bound at `position`.
    ///
    /// The provider is asked first whether `position` exists. If it does and
    /// the query registers a binding there, that binding is used. Otherwise
    /// a query with named parameters resolves by the parameter's name, and
    /// anything else gets a plain positional binding.
    ///
    /// # Errors
    ///
    /// Fails if name-based lookup is needed but the parameter is unnamed or
    /// no binding carries its name, and if the positional fallback is
    /// disabled while the query declares bindings.
    pub fn binding_for(
        &self,
        provider: &dyn ProviderQuery,
        position: usize,
        parameter: &MethodParameter,
    ) -> Result<Cow<'_, ParameterBinding>> {
        let check = probe_position(provider, position);

        if check == PositionCheck::Valid {
            if let Ok(binding) = self.query.binding_for_position(position) {
                return Ok(Cow::Borrowed(binding));
            }
        }

        if self.query.has_bindings() && has_named_parameter(provider) {
            let name = parameter
                .name()
                .ok_or(BindError::UnnamedParameter(parameter.index))?;
            return self.query.binding_for_name(name).map(Cow::Borrowed);
        }

        if self.query.has_bindings() && !self.config.positional_fallback {
            return Err(BindError::NoBindingForPosition(position));
        }

        debug!(
            position,
            ?check,
            query = self.query.query_string(),
            "using plain positional binding"
        );
        Ok(Cow::Owned(ParameterBinding::positional(position)))
    }
}

/// Asks the provider whether `position` can be bound.
///
/// Some providers cannot introspect positions of native queries and report
/// [`PositionCheck::Unsupported`]; callers treat that like an unknown position.
fn probe_position(provider: &dyn ProviderQuery, position: usize) -> PositionCheck {
    let check = provider.check_position(position);
    if check == PositionCheck::Unsupported {
        debug!(position, "provider cannot check parameter positions");
    }
    check
}

impl BindingResolver for StringQueryStrategy {
    fn prepare(
        &self,
        query: &dyn ProviderQuery,
        parameter: &MethodParameter,
        value: Value,
        position: usize,
    ) -> Result<Value> {
        let binding = self.binding_for(query, position, parameter)?;
        Ok(binding.prepare_escaped(value, self.config.like_escape))
    }
}

impl BindEligibility for StringQueryStrategy {
    fn can_bind(&self, parameter: &MethodParameter, default: bool) -> bool {
        let total = self.query.bindings().len();
        if total == 0 {
            return default;
        }

        // Expression bindings are bound after evaluation.
        if self.query.expression_binding_count() == total {
            debug!(
                index = parameter.index,
                "all bindings are expressions, deferring parameter"
            );
            return false;
        }

        default
    }
}
