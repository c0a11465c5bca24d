//! Error Handling Example
//!
//! This example validates a charm-style configuration and shows how the
//! aggregated ValidationError is inspected.
//!
//! Run with:
//! ```bash
//! cargo run -p opsmodel-validation --example error_handling
//! ```

use opsmodel_validation::{
    validate, validate_with_config, ErrorType, Model, MysqlModel, Rejection, Schema,
    TypeDescriptor, ValidationConfig, Value,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Error Handling Example");
    println!("======================\n");

    let schema = Schema::builder()
        .field("log_level", TypeDescriptor::Str)
        .field("port", TypeDescriptor::Int)
        .field("hosts", TypeDescriptor::list(TypeDescriptor::Str))
        .field("debug", TypeDescriptor::optional(TypeDescriptor::Bool))
        .validator("log_level", |v| match v.as_str() {
            Some("INFO") | Some("DEBUG") => Ok(v.clone()),
            _ => Err(Rejection::new("value must be INFO or DEBUG")),
        })
        .build()
        .expect("schema is well-formed");

    demonstrate_success(&schema);
    demonstrate_error_accumulation(&schema);
    demonstrate_extra_fields(&schema);
    demonstrate_model();
}

fn demonstrate_success(schema: &Schema) {
    println!("1. Valid input");
    println!("--------------");

    let input = [
        ("log-level", Value::from("INFO")),
        ("port", Value::Int(8080)),
        ("hosts", Value::List(vec![Value::from("a"), Value::from("b")])),
    ];
    match validate(schema, input) {
        Ok(values) => {
            for (name, value) in &values {
                println!("  {name} = {value:?}");
            }
        }
        Err(err) => println!("  Unexpected failure: {err}"),
    }
    println!();
}

fn demonstrate_error_accumulation(schema: &Schema) {
    println!("2. Every problem in one pass");
    println!("----------------------------");

    let input = [
        ("log_level", Value::from("TRACE")),
        ("port", Value::Bool(true)),
        ("hosts", Value::List(vec![Value::from("a"), Value::Int(2)])),
    ];
    if let Err(err) = validate(schema, input) {
        println!("  {}", err.message());
        for entry in err.errors() {
            let kind = match entry.error_type {
                ErrorType::Missing => "missing",
                ErrorType::InvalidType => "invalid type",
                ErrorType::Undefined => "undefined",
                ErrorType::CustomRejected => "rejected",
            };
            println!("    {:<10} {:<13} {}", entry.field, kind, entry.message);
        }
    }
    println!();
}

fn demonstrate_extra_fields(schema: &Schema) {
    println!("3. Forbidding unknown keys");
    println!("--------------------------");

    let input = [
        ("log_level", Value::from("DEBUG")),
        ("port", Value::Int(1)),
        ("hosts", Value::List(vec![])),
        ("colour", Value::from("blue")),
    ];
    let config = ValidationConfig::new().forbid_extra();
    if let Err(err) = validate_with_config(schema, input, &config) {
        print!("{err}");
    }
    println!();
}

fn demonstrate_model() {
    println!("4. Typed model");
    println!("--------------");

    match MysqlModel::construct([("mysql_uri", Value::from("mysql://user:pass@db:3306/app"))]) {
        Ok(model) => println!(
            "  host={:?} port={:?} database={:?}",
            model.host(),
            model.port(),
            model.database()
        ),
        Err(err) => println!("  {}", err.message()),
    }

    if let Err(err) = MysqlModel::construct([("mysql_uri", Value::from("not-a-uri"))]) {
        println!("  {}", err.message());
    }
}
