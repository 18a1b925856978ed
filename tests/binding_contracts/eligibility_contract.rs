//! Contract tests for the eligibility predicate.
//!
//! These tests verify:
//! - An empty binding list passes the base verdict through
//! - All-expression binding lists defer every parameter
//! - Any non-expression binding passes the base verdict through

use std::sync::Arc;

use querybind::binder::{BindEligibility, DefaultEvaluationContextProvider};
use querybind::{
    DataType, MethodParameter, ParameterBinding, Parameters, RecordingQuery, StringQuery,
    StringQueryStrategy, Value,
};

fn parameters() -> Parameters {
    Parameters::new(vec![
        MethodParameter::named("name", 0, DataType::String),
        MethodParameter::named("page", 1, DataType::Page),
        MethodParameter::unnamed(2, DataType::Int64),
    ])
}

fn strategy(bindings: Vec<ParameterBinding>) -> StringQueryStrategy {
    let mut builder = StringQuery::builder("select u from User u where ...");
    for binding in bindings {
        builder = builder.binding(binding);
    }
    StringQueryStrategy::new(Arc::new(builder.build().unwrap()))
}

#[test]
fn test_empty_bindings_pass_through() {
    let strategy = strategy(vec![]);
    for parameter in &parameters() {
        assert_eq!(
            strategy.can_bind(parameter, parameter.is_bindable()),
            parameter.is_bindable()
        );
    }
}

#[test]
fn test_all_expressions_defer_everything() {
    let strategy = strategy(vec![
        ParameterBinding::positional(1).with_expression("#{[0]}"),
        ParameterBinding::named("n").with_expression("#{#name}"),
    ]);
    for parameter in &parameters() {
        assert!(!strategy.can_bind(parameter, true));
        assert!(!strategy.can_bind(parameter, false));
    }
}

#[test]
fn test_mixed_bindings_pass_through() {
    let strategy = strategy(vec![
        ParameterBinding::positional(1).with_expression("#{[0]}"),
        ParameterBinding::positional(2),
    ]);
    for parameter in &parameters() {
        assert_eq!(
            strategy.can_bind(parameter, parameter.is_bindable()),
            parameter.is_bindable()
        );
    }
}

#[test]
fn test_all_expression_query_binds_nothing() {
    let parameters = Parameters::new(vec![MethodParameter::named("id", 0, DataType::Int64)]);
    let binder = strategy(vec![ParameterBinding::positional(1).with_expression("#{#id}")])
        .binder(
            &parameters,
            vec![Value::Int64(1)],
            Arc::new(DefaultEvaluationContextProvider),
        )
        .unwrap();
    let mut query = RecordingQuery::positional(1);

    assert_eq!(binder.bind_all(&mut query).unwrap(), 0);
    assert!(query.assignments().is_empty());
    // Deferred values stay reachable for expression evaluation.
    assert_eq!(
        binder.evaluation_context().variable("id"),
        Some(&Value::Int64(1))
    );
}
