//! Evaluation context handed to expression-backed bindings.
//!
//! Expressions themselves are evaluated by a downstream binder; this module
//! only defines how their variables are gathered.

use std::collections::HashMap;

use crate::parameters::Parameters;
use crate::types::Value;

/// Variables visible to expression evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationContext {
    variables: HashMap<String, Value>,
    arguments: Vec<Value>,
}

impl EvaluationContext {
    /// Creates a context over the raw method arguments.
    #[must_use]
    pub fn new(arguments: Vec<Value>) -> Self {
        EvaluationContext {
            variables: HashMap::new(),
            arguments,
        }
    }

    /// Registers a variable.
    pub fn set_variable(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Returns the argument at 0-based `index`.
    #[must_use]
    pub fn argument(&self, index: usize) -> Option<&Value> {
        self.arguments.get(index)
    }
}

/// Source of evaluation contexts for expression-backed bindings.
pub trait EvaluationContextProvider: Send + Sync {
    /// Builds the context for one invocation.
    fn evaluation_context(&self, parameters: &Parameters, values: &[Value]) -> EvaluationContext;
}

/// Exposes every named method parameter as a variable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEvaluationContextProvider;

impl EvaluationContextProvider for DefaultEvaluationContextProvider {
    fn evaluation_context(&self, parameters: &Parameters, values: &[Value]) -> EvaluationContext {
        let mut context = EvaluationContext::new(values.to_vec());
        for (parameter, value) in parameters.iter().zip(values) {
            if let Some(name) = parameter.name() {
                context.set_variable(name, value.clone());
            }
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::MethodParameter;
    use crate::types::DataType;

    #[test]
    fn test_named_parameters_become_variables() {
        let parameters = Parameters::new(vec![
            MethodParameter::named("name", 0, DataType::String),
            MethodParameter::unnamed(1, DataType::Int64),
        ]);
        let values = vec![Value::from("alice"), Value::Int64(3)];
        let context = DefaultEvaluationContextProvider.evaluation_context(&parameters, &values);

        assert_eq!(context.variable("name"), Some(&Value::from("alice")));
        assert_eq!(context.argument(1), Some(&Value::Int64(3)));
        assert_eq!(context.variable("arg1"), None);
    }
}
