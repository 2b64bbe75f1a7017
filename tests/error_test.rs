use gauntlet::{val, Error, PathSegment, Schema, Validator, Value, ValueType};

#[test]
fn test_single_fault_surfaces_unwrapped() {
    let validator = Validator::new(val!(1));
    let error = validator.apply(&val!(2)).unwrap_err();
    assert!(matches!(error, Error::Invalid(_)));
    assert_eq!(error.len(), 1);
}

#[test]
fn test_concurrent_faults_aggregate_flat() {
    // Nested structure produces nested failures; the surfaced aggregate
    // is flat and never contains aggregates.
    let validator = Validator::new(
        Schema::mapping()
            .entry("outer", Schema::from(val!({ "a" => 1, "b" => 2 })))
            .entry("c", 3)
            .build(),
    );

    let error = validator
        .apply(&val!({ "outer" => { "a" => 2, "b" => 1 }, "c" => 4 }))
        .unwrap_err();

    match &error {
        Error::Multiple(errors) => {
            assert_eq!(errors.len(), 3);
            let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
            assert!(paths.contains(&"outer.a".to_string()));
            assert!(paths.contains(&"outer.b".to_string()));
            assert!(paths.contains(&"c".to_string()));
        }
        other => panic!("expected an aggregate, got: {}", other),
    }
}

#[test]
fn test_emitted_fields_are_always_populated() {
    let validator = Validator::new(
        Schema::mapping()
            .entry("name", ValueType::Str)
            .entry("age", ValueType::Int)
            .build(),
    );

    let error = validator.apply(&val!({ "lol" => 1 })).unwrap_err();
    for e in error.errors() {
        assert!(!e.message.is_empty());
        assert!(e.expected.is_some());
        assert!(e.provided.is_some());
        assert!(e.validator.is_some());
    }
}

#[test]
fn test_paths_hold_only_literals() {
    let validator = Validator::new(
        Schema::mapping()
            .entry("users", Schema::list([Schema::from(val!({ "age" => 18 }))]))
            .build(),
    );

    let error = validator
        .apply(&val!({ "users" => [{ "age" => 18 }, { "age" => 21 }] }))
        .unwrap_err();

    for e in error.errors() {
        for segment in e.path.segments() {
            match segment {
                PathSegment::Key(key) => assert!(matches!(
                    key,
                    Value::Str(_) | Value::Int(_) | Value::Bool(_)
                )),
                PathSegment::Index(_) => {}
            }
        }
    }
}

#[test]
fn test_error_report_round_trips_through_json() {
    let validator = Validator::new(Schema::from(val!({ "a" => 1, "b" => 2 })));
    let error = validator.apply(&val!({ "a" => 2, "b" => 1 })).unwrap_err();

    let text = serde_json::to_string(&error.to_json()).unwrap();
    let mut reports: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
    reports.sort_by_key(|r| r["path"][0].as_str().map(str::to_string));

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["message"], "Invalid value");
    assert_eq!(reports[0]["path"], serde_json::json!(["a"]));
    assert_eq!(reports[1]["message"], "Invalid value");
    assert_eq!(reports[1]["path"], serde_json::json!(["b"]));
}

#[test]
fn test_error_display_lists_every_fault() {
    let validator = Validator::new(Schema::from(val!({ "a" => 1, "b" => 2 })));
    let error = validator.apply(&val!({ "a" => 2, "b" => 1 })).unwrap_err();

    let display = error.to_string();
    assert!(display.contains("2 error(s)"));
    assert!(display.contains("a: Invalid value"));
    assert!(display.contains("b: Invalid value"));
}

#[test]
fn test_validator_reference_points_at_the_failed_schema() {
    let validator = Validator::new(val!(1));
    match validator.apply(&val!(2)).unwrap_err() {
        Error::Invalid(error) => {
            assert_eq!(error.validator, Some(Schema::Literal(Value::Int(1))));
        }
        other => panic!("expected a single error, got: {}", other),
    }
}

#[test]
fn test_non_string_keys_serialize_into_paths() {
    let validator = Validator::new(
        Schema::mapping()
            .entry(100, ValueType::Bool)
            .build(),
    );

    let error = validator.apply(&val!({ 100 => "no" })).unwrap_err();
    let json = error.to_json();
    assert_eq!(json[0]["path"], serde_json::json!([100]));
}
