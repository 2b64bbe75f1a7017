use gauntlet::{val, Error, Invalid, Marker, Path, Schema, Validator, Value, ValueType};

fn assert_valid(validator: &Validator, input: Value) {
    assert_eq!(validator.apply(&input).unwrap(), input);
}

fn single_error(validator: &Validator, input: Value) -> Invalid {
    match validator.apply(&input).unwrap_err() {
        Error::Invalid(error) => error,
        Error::Multiple(errors) => panic!("expected a single error, got: {}", errors),
    }
}

fn one_two_string() -> Schema {
    Schema::list([Schema::from(1), Schema::from(2), Schema::from(ValueType::Str)])
}

#[test]
fn test_alternatives_in_declaration_order() {
    let validator = Validator::new(one_two_string());

    assert_valid(&validator, val!([]));
    assert_valid(&validator, val!([1]));
    assert_valid(&validator, val!(["a"]));
    assert_valid(&validator, val!([1, 1, 2, "a", "b", "c"]));
}

#[test]
fn test_container_kind_is_checked_and_preserved() {
    let validator = Validator::new(one_two_string());

    let error = single_error(&validator, Value::tuple_of([]));
    assert_eq!(error.message, "Wrong value type");
    assert_eq!(error.expected.as_deref(), Some("List"));
    assert_eq!(error.provided.as_deref(), Some("Tuple"));
    assert_eq!(error.path, Path::root());

    // The declared kind decides both the accepted input and the output.
    let tuple_validator = Validator::new(Schema::tuple([
        Schema::from(1),
        Schema::from(2),
        Schema::from(ValueType::Str),
    ]));
    let cleaned = tuple_validator
        .apply(&Value::tuple_of([Value::Int(1), Value::Str("a".into())]))
        .unwrap();
    assert_eq!(cleaned, Value::tuple_of([Value::Int(1), Value::Str("a".into())]));

    let set_validator = Validator::new(Schema::set([Schema::from(1), Schema::from(2)]));
    let cleaned = set_validator
        .apply(&Value::set_of([Value::Int(1), Value::Int(2)]))
        .unwrap();
    assert_eq!(cleaned, Value::set_of([Value::Int(2), Value::Int(1)]));
}

#[test]
fn test_unmatched_element_reports_sequence_name() {
    let validator = Validator::new(one_two_string());

    let error = single_error(&validator, val!([true]));
    assert_eq!(error.message, "Invalid value");
    assert_eq!(error.expected.as_deref(), Some("List[1|2|String]"));
    assert_eq!(error.provided.as_deref(), Some("True"));
    assert_eq!(error.path, Path::root().push_index(0));

    let error = single_error(&validator, val!([1, 4]));
    assert_eq!(error.message, "Invalid value");
    assert_eq!(error.expected.as_deref(), Some("List[1|2|String]"));
    assert_eq!(error.provided.as_deref(), Some("4"));
    assert_eq!(error.path, Path::root().push_index(1));
}

#[test]
fn test_element_errors_accumulate() {
    let validator = Validator::new(Schema::list([Schema::from(1), Schema::from(2)]));

    let error = validator.apply(&val!([3, 1, 4])).unwrap_err();
    let errors = error.errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].path, Path::root().push_index(0));
    assert_eq!(errors[1].path, Path::root().push_index(2));
}

#[test]
fn test_remove_marker_drops_matching_elements() {
    let validator = Validator::new(Schema::list([
        Schema::from(ValueType::Str),
        Marker::remove(ValueType::Int).into(),
    ]));

    assert_valid(&validator, val!(["a", "b"]));
    assert_eq!(
        validator.apply(&val!(["a", "b", 1, 2])).unwrap(),
        val!(["a", "b"])
    );
}

#[test]
fn test_remove_applies_even_to_otherwise_invalid_positions() {
    // Removal is decided by the marker's own schema; the element never
    // reaches any other validation.
    let validator = Validator::new(Schema::list([
        Schema::from(1),
        Marker::remove(ValueType::Str).into(),
    ]));

    assert_eq!(validator.apply(&val!([1, "junk", 1])).unwrap(), val!([1, 1]));
}

#[test]
fn test_empty_template_accepts_only_empty_input() {
    let validator = Validator::new(Schema::list([]));

    assert_valid(&validator, val!([]));

    let error = single_error(&validator, val!([1]));
    assert_eq!(error.message, "Invalid value");
    assert_eq!(error.expected.as_deref(), Some("List[]"));
}

#[test]
fn test_single_alternative_propagates_member_errors() {
    let person = Schema::mapping().entry("age", ValueType::Int).build();
    let validator = Validator::new(Schema::list([person]));

    assert_valid(&validator, val!([]));
    assert_valid(&validator, val!([{ "age" => 10 }]));
    assert_valid(&validator, val!([{ "age" => 10 }, { "age" => 20 }]));

    let error = single_error(
        &validator,
        val!([{ "age" => 10 }, { "age" => 20 }, { "age" => null }]),
    );
    assert_eq!(error.message, "Wrong type");
    assert_eq!(error.expected.as_deref(), Some("Integer number"));
    assert_eq!(error.provided.as_deref(), Some("None"));
    assert_eq!(error.path, Path::root().push_index(2).push_key("age"));
}

#[test]
fn test_nested_callable_alternatives() {
    let intify = gauntlet::Callable::new("intify()", |v| match v {
        Value::Int(i) => Ok(Value::Int(i)),
        Value::Str(s) => s
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| gauntlet::CallableError::Message("not a number".to_string())),
        Value::Bytes(b) => std::str::from_utf8(&b)
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .map(Value::Int)
            .ok_or_else(|| gauntlet::CallableError::Message("not a number".to_string())),
        _ => Err(gauntlet::CallableError::Message("not a number".to_string())),
    });
    let validator = Validator::new(Schema::list([
        Schema::from(intify),
        Schema::from(ValueType::Str),
    ]));

    assert_valid(&validator, val!(["a"]));
    assert_valid(&validator, val!([1]));
    // The first matching alternative cleans: "1" is intified before the
    // string alternative gets a look.
    assert_eq!(validator.apply(&val!(["1", 1])).unwrap(), val!([1, 1]));

    let error = single_error(&validator, vec![Value::Bytes(b"abc".to_vec())].into());
    assert_eq!(error.message, "Invalid value");
    assert_eq!(error.expected.as_deref(), Some("List[intify()|String]"));
    assert_eq!(error.provided.as_deref(), Some("b'abc'"));
    assert_eq!(error.path, Path::root().push_index(0));
}
