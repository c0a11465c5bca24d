//! Comprehensive model validation tests

use opsmodel_validation::types::*;
use opsmodel_validation::{
    validate, ErrorType, Rejection, Schema, ValidationError, ValueMap,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ============================================================================
// Fixtures
// ============================================================================

const MANDATORY_ATTRS: [&str; 9] = [
    "boolean",
    "integer",
    "string",
    "tuple_attr",
    "set_attr",
    "list_int",
    "list_str",
    "dict_str_int",
    "dict_int_str",
];

fn attr_type(attr: &str) -> TypeDescriptor {
    match attr {
        "boolean" => TypeDescriptor::Bool,
        "integer" => TypeDescriptor::Int,
        "string" => TypeDescriptor::Str,
        "tuple_attr" => TypeDescriptor::tuple(TypeDescriptor::Int),
        "set_attr" => TypeDescriptor::set(TypeDescriptor::Int),
        "list_int" => TypeDescriptor::list(TypeDescriptor::Int),
        "list_str" => TypeDescriptor::list(TypeDescriptor::Str),
        "dict_str_int" => TypeDescriptor::mapping(TypeDescriptor::Str, TypeDescriptor::Int),
        "dict_int_str" => TypeDescriptor::mapping(TypeDescriptor::Int, TypeDescriptor::Str),
        other => panic!("unknown attribute {other}"),
    }
}

fn attr_value(attr: &str) -> Value {
    let ints = |xs: &[i64]| xs.iter().copied().map(Value::Int).collect::<Vec<_>>();
    match attr {
        "boolean" => Value::Bool(false),
        "integer" => Value::Int(2),
        "string" => Value::from("1"),
        "tuple_attr" => Value::Tuple(ints(&[1, 2])),
        "set_attr" => Value::Set(ints(&[1, 2])),
        "list_int" => Value::List(ints(&[1, 2])),
        "list_str" => Value::List(vec![Value::from("1"), Value::from("2")]),
        "dict_str_int" => Value::Mapping(vec![
            (Value::from("1"), Value::Int(1)),
            (Value::from("2"), Value::Int(2)),
        ]),
        "dict_int_str" => Value::Mapping(vec![
            (Value::Int(1), Value::from("1")),
            (Value::Int(2), Value::from("2")),
        ]),
        other => panic!("unknown attribute {other}"),
    }
}

/// Every mandatory attribute plus an `opt_` optional twin
fn example_schema() -> Schema {
    let mut builder = Schema::builder();
    for attr in MANDATORY_ATTRS {
        builder = builder.field(attr, attr_type(attr));
    }
    for attr in MANDATORY_ATTRS {
        builder = builder.field(
            format!("opt_{attr}"),
            TypeDescriptor::optional(attr_type(attr)),
        );
    }
    builder.build().unwrap()
}

fn mandatory_input() -> Vec<(String, Value)> {
    MANDATORY_ATTRS
        .iter()
        .map(|attr| (attr.to_string(), attr_value(attr)))
        .collect()
}

fn log_level_schema() -> Schema {
    Schema::builder()
        .field("log_level", TypeDescriptor::Str)
        .validator("log_level", |v| match v.as_str() {
            Some("INFO") | Some("DEBUG") => Ok(v.clone()),
            _ => Err(Rejection::new("value must be INFO or DEBUG")),
        })
        .build()
        .unwrap()
}

fn assert_values(values: &ValueMap, input: &[(String, Value)]) {
    for (key, value) in input {
        assert_eq!(values.get(&key.replace('-', "_")), Some(value), "field {key}");
    }
}

// ============================================================================
// Success Paths
// ============================================================================

#[test]
fn test_all_fields_success() {
    let mut input = mandatory_input();
    input.extend(
        MANDATORY_ATTRS
            .iter()
            .map(|attr| (format!("opt_{attr}"), attr_value(attr))),
    );

    let values = validate(&example_schema(), input.clone()).unwrap();
    assert_eq!(values.len(), 18);
    assert_values(&values, &input);
}

#[test]
fn test_mandatory_only_success() {
    let input = mandatory_input();
    let values = validate(&example_schema(), input.clone()).unwrap();

    assert_values(&values, &input);
    for attr in MANDATORY_ATTRS {
        assert!(values.is_absent(&format!("opt_{attr}")));
    }
}

#[test]
fn test_mandatory_with_dash_success() {
    let input: Vec<(String, Value)> = mandatory_input()
        .into_iter()
        .map(|(k, v)| (k.replace('_', "-"), v))
        .collect();

    let values = validate(&example_schema(), input.clone()).unwrap();
    assert_values(&values, &input);
}

#[test]
fn test_output_in_declaration_order() {
    let mut input = mandatory_input();
    input.reverse();
    let values = validate(&example_schema(), input).unwrap();

    let names: Vec<&str> = values.names().take(MANDATORY_ATTRS.len()).collect();
    assert_eq!(names, MANDATORY_ATTRS.to_vec());
}

#[test]
fn test_missing_optional_attr() {
    let schema = Schema::builder()
        .field("optional", TypeDescriptor::optional(TypeDescriptor::Str))
        .build()
        .unwrap();

    let values = validate(&schema, Vec::<(String, Value)>::new()).unwrap();
    assert!(values.is_absent("optional"));
}

// ============================================================================
// Failure Paths
// ============================================================================

#[test]
fn test_wrong_types_all_reported() {
    // Feed each field a value that belongs to a different attribute
    for shift in 1..MANDATORY_ATTRS.len() {
        let input: Vec<(String, Value)> = MANDATORY_ATTRS
            .iter()
            .enumerate()
            .flat_map(|(i, attr)| {
                let donor = MANDATORY_ATTRS[(i + shift) % MANDATORY_ATTRS.len()];
                [
                    (attr.to_string(), attr_value(donor)),
                    (format!("opt_{attr}"), attr_value(donor)),
                ]
            })
            .collect();

        let err: ValidationError = validate(&example_schema(), input.clone()).unwrap_err();
        for (key, _) in &input {
            assert_eq!(
                err.get(key).map(|e| e.error_type),
                Some(ErrorType::InvalidType),
                "shift {shift}, field {key}"
            );
        }
        assert_eq!(err.len(), input.len());
    }
}

#[test]
fn test_missing_reports_every_required_field() {
    let err = validate(&example_schema(), Vec::<(String, Value)>::new()).unwrap_err();

    let fields: Vec<&str> = err.fields().collect();
    assert_eq!(fields, MANDATORY_ATTRS.to_vec());
    assert!(err.errors().iter().all(|e| e.error_type == ErrorType::Missing));
    assert!(err.errors().iter().all(|e| e.message == "Missing attribute"));
}

#[test]
fn test_bool_is_not_int() {
    let schema = Schema::builder()
        .field("integer", TypeDescriptor::Int)
        .field("opt_integer", TypeDescriptor::optional(TypeDescriptor::Int))
        .build()
        .unwrap();

    let err = validate(
        &schema,
        [("integer", Value::Bool(true)), ("opt_integer", Value::Bool(false))],
    )
    .unwrap_err();
    assert_eq!(err.reason("integer"), Some("Invalid type"));
    assert_eq!(err.reason("opt_integer"), Some("Invalid type"));
}

#[test]
fn test_string_is_not_int() {
    let schema = Schema::builder()
        .field("count", TypeDescriptor::Int)
        .build()
        .unwrap();

    let err = validate(&schema, [("count", Value::from("5"))]).unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.get("count").unwrap().error_type, ErrorType::InvalidType);
}

#[test]
fn test_mixed_list_elements() {
    let schema = Schema::builder()
        .field("tags", TypeDescriptor::list(TypeDescriptor::Str))
        .build()
        .unwrap();

    let err = validate(
        &schema,
        [("tags", Value::List(vec![Value::from("a"), Value::Int(2)]))],
    )
    .unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.reason("tags"), Some("Invalid type"));
}

#[test]
fn test_summary_message() {
    let err = validate(
        &example_schema(),
        [("integer", Value::Int(1)), ("string", Value::Int(1))],
    )
    .unwrap_err();
    assert!(err.message().starts_with("Errors found in: boolean, string, tuple_attr"));
}

// ============================================================================
// Custom Validators
// ============================================================================

#[test]
fn test_custom_validator_success() {
    let values = validate(&log_level_schema(), [("log_level", Value::from("INFO"))]).unwrap();
    assert_eq!(values.get_str("log_level"), Some("INFO"));
}

#[test]
fn test_custom_validator_exception() {
    let err = validate(&log_level_schema(), [("log_level", Value::from("WRONG"))]).unwrap_err();
    assert_eq!(err.reason("log_level"), Some("value must be INFO or DEBUG"));
    assert_eq!(
        err.get("log_level").unwrap().error_type,
        ErrorType::CustomRejected
    );
}

#[test]
fn test_custom_validator_transforms_value() {
    let schema = Schema::builder()
        .field("log_level", TypeDescriptor::Str)
        .validator("log_level", |v| {
            Ok(Value::from(v.as_str().unwrap_or_default().to_uppercase()))
        })
        .build()
        .unwrap();

    let values = validate(&schema, [("log-level", Value::from("debug"))]).unwrap();
    assert_eq!(values.get_str("log_level"), Some("DEBUG"));
}

#[test]
fn test_optional_absent_skips_custom_validator() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let schema = Schema::builder()
        .field("maybe", TypeDescriptor::optional(TypeDescriptor::Str))
        .validator("maybe", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(Rejection::new("should not run"))
        })
        .build()
        .unwrap();

    let values = validate(&schema, [("maybe", Value::Null)]).unwrap();
    assert!(values.is_absent("maybe"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_errors_collected_across_stages() {
    let schema = Schema::builder()
        .field("missing", TypeDescriptor::Str)
        .field("wrong", TypeDescriptor::Int)
        .field("log_level", TypeDescriptor::Str)
        .field("fine", TypeDescriptor::Bool)
        .validator("log_level", |_| Err(Rejection::new("nope")))
        .build()
        .unwrap();

    let err = validate(
        &schema,
        [
            ("wrong", Value::Float(1.0)),
            ("log_level", Value::from("x")),
            ("fine", Value::Bool(true)),
        ],
    )
    .unwrap_err();

    let kinds: Vec<(&str, ErrorType)> = err
        .errors()
        .iter()
        .map(|e| (e.field.as_str(), e.error_type))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("missing", ErrorType::Missing),
            ("wrong", ErrorType::InvalidType),
            ("log_level", ErrorType::CustomRejected),
        ]
    );
}

// ============================================================================
// Engine Properties
// ============================================================================

#[test]
fn test_idempotent() {
    let schema = example_schema();
    let good = mandatory_input();
    assert_eq!(
        validate(&schema, good.clone()).unwrap(),
        validate(&schema, good).unwrap()
    );

    let bad = [("integer", Value::from("x"))];
    assert_eq!(
        validate(&schema, bad.clone()).unwrap_err(),
        validate(&schema, bad).unwrap_err()
    );
}

#[test]
fn test_schema_shared_across_threads() {
    let schema = log_level_schema();
    let handles: Vec<_> = ["INFO", "DEBUG", "WRONG"]
        .into_iter()
        .map(|level| {
            let schema = schema.clone();
            std::thread::spawn(move || validate(&schema, [("log_level", Value::from(level))]).is_ok())
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, true, false]);
}
