//! Contract tests for binding resolution.
//!
//! These tests verify how a parameter finds its placeholder binding:
//! - Valid positions use the binding registered at that position
//! - Rejected positions on named queries resolve by parameter name
//! - Anything else gets a plain positional binding

use std::borrow::Cow;
use std::sync::Arc;

use querybind::provider::QueryParameter;
use querybind::{
    BindError, BindingKey, DataType, MethodParameter, ParameterBinding, PatternMode,
    RecordingQuery, StringQuery, StringQueryStrategy, Value,
};

/// Creates a query with a LIKE binding at every position.
fn like_query(modes: &[PatternMode]) -> StringQuery {
    let mut builder = StringQuery::builder("select p from Product p where ...");
    for (i, mode) in modes.iter().enumerate() {
        builder = builder.binding(ParameterBinding::like(BindingKey::Position(i + 1), *mode));
    }
    builder.build().unwrap()
}

#[test]
fn test_valid_position_returns_registered_binding() {
    let modes = [
        PatternMode::Contains,
        PatternMode::StartsWith,
        PatternMode::EndsWith,
        PatternMode::None,
    ];
    let query = Arc::new(like_query(&modes));
    let strategy = StringQueryStrategy::new(Arc::clone(&query));
    let provider = RecordingQuery::positional(modes.len());

    for (i, mode) in modes.iter().enumerate() {
        let parameter = MethodParameter::unnamed(i, DataType::String);
        let binding = strategy.binding_for(&provider, i + 1, &parameter).unwrap();
        assert_eq!(&*binding, query.binding_for_position(i + 1).unwrap());
        assert_eq!(binding.pattern_mode(), *mode);
    }
}

#[test]
fn test_rejected_position_on_named_query_uses_name() {
    let query = StringQuery::builder("select u from User u where u.first like :first and u.last like :last")
        .binding(ParameterBinding::like(
            BindingKey::Name("first".into()),
            PatternMode::StartsWith,
        ))
        .binding(ParameterBinding::like(
            BindingKey::Name("last".into()),
            PatternMode::EndsWith,
        ))
        .build()
        .unwrap();
    let strategy = StringQueryStrategy::new(Arc::new(query));
    let provider = RecordingQuery::named(&["first", "last"]);

    let last = MethodParameter::named("last", 1, DataType::String);
    let binding = strategy.binding_for(&provider, 2, &last).unwrap();
    assert_eq!(binding.name(), Some("last"));
    assert_eq!(binding.prepare("son".into()), Value::from("%son"));
}

#[test]
fn test_rejected_position_without_names_synthesizes_plain_binding() {
    let strategy = StringQueryStrategy::new(Arc::new(like_query(&[PatternMode::Contains])));
    // Native query: the provider cannot introspect positions.
    let provider = RecordingQuery::native(1);
    let parameter = MethodParameter::unnamed(0, DataType::String);

    let binding = strategy.binding_for(&provider, 1, &parameter).unwrap();
    assert!(matches!(binding, Cow::Owned(_)));
    assert_eq!(binding.key(), &BindingKey::Position(1));
    assert_eq!(binding.prepare("abc".into()), Value::from("abc"));
}

#[test]
fn test_position_unknown_to_provider_synthesizes_plain_binding() {
    let strategy = StringQueryStrategy::new(Arc::new(like_query(&[PatternMode::Contains])));
    let provider = RecordingQuery::positional(1);
    let parameter = MethodParameter::unnamed(1, DataType::String);

    let binding = strategy.binding_for(&provider, 2, &parameter).unwrap();
    assert_eq!(binding.position(), Some(2));
    assert_eq!(binding.pattern_mode(), PatternMode::None);
}

#[test]
fn test_missing_named_binding_is_rejected() {
    let query = StringQuery::builder("select u from User u where u.name = :name")
        .binding(ParameterBinding::named("name"))
        .build()
        .unwrap();
    let strategy = StringQueryStrategy::new(Arc::new(query));
    let provider = RecordingQuery::named(&["name"]).with_parameter(QueryParameter::named("age"));
    let parameter = MethodParameter::named("age", 1, DataType::Int64);

    let result = strategy.binding_for(&provider, 2, &parameter);
    assert_eq!(result, Err(BindError::NoBindingForName("age".into())));
}

#[test]
fn test_like_preparation_contract() {
    let cases = [
        (PatternMode::Contains, "%abc%"),
        (PatternMode::StartsWith, "abc%"),
        (PatternMode::EndsWith, "%abc"),
        (PatternMode::None, "abc"),
    ];
    for (mode, expected) in cases {
        let binding = ParameterBinding::like(BindingKey::Position(1), mode);
        assert_eq!(
            binding.prepare("abc".into()),
            Value::from(expected),
            "mode {mode:?}"
        );
    }
}
