use gauntlet::validators::{
    all_of, any_of, boolean, capitalize, check, clamp, coerce, exclusive, exclusive_optional,
    falsy, inclusive, length, lower, matches, maybe, msg, neither, not_empty, one_of, range,
    replace, title, truth, truthy, upper,
};
use gauntlet::{val, Callable, Error, Invalid, Marker, Path, Schema, Validator, Value, ValueType};

fn assert_valid(validator: &Validator, input: Value) {
    assert_eq!(validator.apply(&input).unwrap(), input);
}

fn assert_cleaned(validator: &Validator, input: Value, expected: Value) {
    assert_eq!(validator.apply(&input).unwrap(), expected);
}

fn single_error(validator: &Validator, input: Value) -> Invalid {
    match validator.apply(&input).unwrap_err() {
        Error::Invalid(error) => error,
        Error::Multiple(errors) => panic!("expected a single error, got: {}", errors),
    }
}

// ====== base ======

#[test]
fn test_msg_overrides_the_message_only() {
    let validator = Validator::new(msg(ValueType::Int, "Need a number"));

    assert_valid(&validator, val!(1));

    let error = single_error(&validator, val!("a"));
    assert_eq!(error.message, "Need a number");
    assert_eq!(error.expected.as_deref(), Some("Integer number"));
    assert_eq!(error.provided.as_deref(), Some("String"));
}

#[test]
fn test_msg_broadcasts_to_aggregates() {
    let validator = Validator::new(msg(Schema::from(val!({ "a" => 1, "b" => 2 })), "Wrong!"));

    assert_valid(&validator, val!({ "a" => 1, "b" => 2 }));

    let error = validator.apply(&val!({ "a" => 2, "b" => 1 })).unwrap_err();
    assert_eq!(error.len(), 2);
    for e in error.errors() {
        assert_eq!(e.message, "Wrong!");
    }
}

#[test]
fn test_check_passes_input_through() {
    let validator = Validator::new(check(
        |v| matches!(v, Value::Int(i) if *i < 15),
        "Must be <15",
        "<15",
    ));

    assert_valid(&validator, val!(1));

    let error = single_error(&validator, val!(15));
    assert_eq!(error.message, "Must be <15");
    assert_eq!(error.expected.as_deref(), Some("<15"));
    assert_eq!(error.provided.as_deref(), Some("15"));
}

#[test]
fn test_truth_reports_under_its_name() {
    let validator = Validator::new(truth("isOne()", |v| v == &val!(1), "Must be 1"));

    assert_valid(&validator, val!(1));

    let error = single_error(&validator, val!("1"));
    assert_eq!(error.message, "Must be 1");
    assert_eq!(error.expected.as_deref(), Some("isOne()"));
    assert_eq!(error.provided.as_deref(), Some("1"));
}

// ====== predicates ======

#[test]
fn test_any_of_takes_the_first_match() {
    let parenthesize = Callable::new("str", |v| match v {
        Value::Str(s) => Ok(Value::Str(format!("({})", s))),
        _ => Err(gauntlet::CallableError::Message("not a string".to_string())),
    });
    let any = any_of([ValueType::Int.into(), parenthesize.into()]);
    let validator = Validator::new(any);

    assert_eq!(validator.name(), "Any(Integer number|str)");
    assert_valid(&validator, val!(1));
    assert_cleaned(&validator, val!("1"), val!("(1)"));

    let error = single_error(&validator, val!(null));
    assert_eq!(error.message, "Invalid value");
    assert_eq!(error.expected.as_deref(), Some("Any(Integer number|str)"));
    assert_eq!(error.provided.as_deref(), Some("None"));
}

#[test]
fn test_all_of_chains_cleaning() {
    let percent = truth(
        "Range(0..100)",
        |v| matches!(v, Value::Int(i) if (0..=100).contains(i)),
        "Must be in range 0..100",
    );
    let validator = Validator::new(all_of([ValueType::Int.into(), percent.into()]));

    assert_valid(&validator, val!(90));

    let error = single_error(&validator, val!(190));
    assert_eq!(error.message, "Must be in range 0..100");
    assert_eq!(error.expected.as_deref(), Some("Range(0..100)"));
    assert_eq!(error.provided.as_deref(), Some("190"));
}

#[test]
fn test_neither_forbids_matches() {
    let validator = Validator::new(all_of([
        ValueType::Int.into(),
        neither([Schema::from(-1), Schema::from(0), Schema::from(1)]).into(),
    ]));

    assert_valid(&validator, val!(10));

    let error = single_error(&validator, val!(0));
    assert_eq!(error.message, "Value not allowed");
    assert_eq!(error.expected.as_deref(), Some("Not(0)"));
    assert_eq!(error.provided.as_deref(), Some("0"));
}

#[test]
fn test_maybe_tolerates_null() {
    let validator = Validator::new(maybe(ValueType::Str));

    assert_eq!(validator.name(), "String?");
    assert_valid(&validator, val!(null));
    assert_valid(&validator, val!("x"));
    assert!(validator.apply(&val!(1)).is_err());
}

#[test]
fn test_inclusive_key_group() {
    let validator = Validator::new(
        Schema::mapping()
            .entry("name", ValueType::Str)
            .entry(Marker::optional("width"), ValueType::Int)
            .entry(Marker::optional("height"), ValueType::Int)
            .entry(Marker::entire(), inclusive(["width", "height"]))
            .build(),
    );

    assert_valid(&validator, val!({ "name" => "monica.jpg" }));
    assert_valid(
        &validator,
        val!({ "name" => "monica.jpg", "width" => 800, "height" => 600 }),
    );

    let error = single_error(&validator, val!({ "name" => "monica.jpg", "width" => 800 }));
    assert_eq!(error.message, "Required key not provided");
    assert_eq!(error.expected.as_deref(), Some("height"));
    assert_eq!(error.provided.as_deref(), Some("-none-"));
    assert_eq!(error.path, Path::root().push_key("height"));
}

#[test]
fn test_exclusive_key_group() {
    let schema = |group: Callable| {
        Schema::mapping()
            .entry(Marker::optional("login"), ValueType::Str)
            .entry(Marker::optional("email"), ValueType::Str)
            .entry("password", ValueType::Str)
            .entry(Marker::entire(), group)
            .build()
    };

    let validator = Validator::new(schema(exclusive(["login", "email"])));

    assert_valid(&validator, val!({ "login" => "a", "password" => "b" }));
    assert_valid(&validator, val!({ "email" => "a", "password" => "b" }));

    let error = single_error(
        &validator,
        val!({ "login" => "a", "email" => "b", "password" => "c" }),
    );
    assert_eq!(error.message, "Choose one of the options, not multiple");
    assert_eq!(error.expected.as_deref(), Some("Exclusive(email,login)"));
    assert_eq!(error.provided.as_deref(), Some("email,login"));
    assert_eq!(error.path, Path::root());

    let error = single_error(&validator, val!({ "password" => "c" }));
    assert_eq!(error.message, "Choose one of the options");
    assert_eq!(error.provided.as_deref(), Some("-none-"));

    // The optional flavor lets the whole group stay absent.
    let validator = Validator::new(schema(exclusive_optional(["login", "email"])));
    assert_valid(&validator, val!({ "password" => "c" }));
}

// ====== types ======

#[test]
fn test_type_of_accepts_any_listed_type() {
    let validator = Validator::new(type_of_helper());

    assert_valid(&validator, val!("a"));
    assert_valid(&validator, Value::Bytes(b"a".to_vec()));

    let error = single_error(&validator, val!(1));
    assert_eq!(error.message, "Wrong type");
    assert_eq!(error.expected.as_deref(), Some("Binary String|String"));
    assert_eq!(error.provided.as_deref(), Some("Integer number"));
}

fn type_of_helper() -> Callable {
    gauntlet::validators::type_of([ValueType::Bytes, ValueType::Str])
}

#[test]
fn test_coerce_converts_where_sensible() {
    let validator = Validator::new(coerce(ValueType::Int));

    assert_valid(&validator, val!(1));
    assert_cleaned(&validator, val!(true), val!(1));
    assert_cleaned(&validator, val!("1"), val!(1));
    assert_cleaned(&validator, val!(" 2 "), val!(2));

    let error = single_error(&validator, val!("a"));
    assert_eq!(error.message, "Invalid value");
    assert_eq!(error.expected.as_deref(), Some("*Integer number"));
    assert_eq!(error.provided.as_deref(), Some("a"));

    let to_text = Validator::new(coerce(ValueType::Str));
    assert_cleaned(&to_text, val!(1), val!("1"));
}

// ====== values ======

#[test]
fn test_one_of_membership() {
    let validator = Validator::new(one_of([val!(1), val!(2), val!(3)]));

    assert_valid(&validator, val!(1));
    assert_valid(&validator, val!(2));

    // A string never equals an integer.
    let error = single_error(&validator, val!("1"));
    assert_eq!(error.message, "Unsupported value");
    assert_eq!(error.expected.as_deref(), Some("In(1,2,3)"));
    assert_eq!(error.provided.as_deref(), Some("1"));

    let error = single_error(&validator, val!(99));
    assert_eq!(error.provided.as_deref(), Some("99"));
}

#[test]
fn test_length_bounds() {
    let validator = Validator::new(length(1, 3));

    assert_valid(&validator, val!([1]));
    assert_valid(&validator, val!([1, 2, 3]));

    let error = single_error(&validator, val!([]));
    assert_eq!(error.message, "Too short (1 is the least)");
    assert_eq!(error.expected.as_deref(), Some("1"));
    assert_eq!(error.provided.as_deref(), Some("0"));

    let error = single_error(&validator, val!([1, 2, 3, 4]));
    assert_eq!(error.message, "Too long (3 is the most)");
    assert_eq!(error.expected.as_deref(), Some("3"));
    assert_eq!(error.provided.as_deref(), Some("4"));

    let error = single_error(&validator, val!(1));
    assert_eq!(error.message, "Input is not a collection");
    assert_eq!(error.expected.as_deref(), Some("Collection"));
    assert_eq!(error.provided.as_deref(), Some("Integer number"));

    // Open-ended bounds.
    assert_valid(&Validator::new(length(None, 3)), val!([]));
    assert_valid(&Validator::new(length(1, None)), val!([1, 2, 3, 4]));
}

#[test]
fn test_length_as_entire_validator_accumulates() {
    let validator = Validator::new(
        Schema::mapping()
            .entry(ValueType::Str, ValueType::Int)
            .entry(Marker::entire(), length(1, 3))
            .build(),
    );

    assert_valid(&validator, val!({ "a" => 1 }));
    assert_valid(&validator, val!({ "a" => 1, "b" => 2, "c" => 3 }));

    let error = validator.apply(&val!({})).unwrap_err();
    let mut messages: Vec<&str> = error.errors().iter().map(|e| e.message.as_str()).collect();
    messages.sort();
    assert_eq!(
        messages,
        vec!["Required key not provided", "Too short (1 is the least)"]
    );
}

// ====== numbers ======

#[test]
fn test_range_bounds() {
    let validator = Validator::new(range(1, 10));

    assert_valid(&validator, val!(1));
    assert_valid(&validator, val!(5));
    assert_valid(&validator, val!(10));

    let error = single_error(&validator, val!(0));
    assert_eq!(error.message, "Value must be at least 1");
    assert_eq!(error.expected.as_deref(), Some("1"));
    assert_eq!(error.provided.as_deref(), Some("0"));

    let error = single_error(&validator, val!(15));
    assert_eq!(error.message, "Value must be at most 10");
    assert_eq!(error.expected.as_deref(), Some("10"));
    assert_eq!(error.provided.as_deref(), Some("15"));

    let error = single_error(&validator, val!("x"));
    assert_eq!(error.message, "Value should be a number");
    assert_eq!(error.expected.as_deref(), Some("Number"));
    assert_eq!(error.provided.as_deref(), Some("String"));

    assert_valid(&Validator::new(gauntlet::validators::at_least(1)), val!(15));
    assert_valid(&Validator::new(gauntlet::validators::at_most(10)), val!(0));
}

#[test]
fn test_clamp_pulls_to_bounds() {
    let validator = Validator::new(clamp(1, 10));

    assert_valid(&validator, val!(5));
    assert_cleaned(&validator, val!(0), val!(1));
    assert_cleaned(&validator, val!(15), val!(10));

    let error = single_error(&validator, val!("x"));
    assert_eq!(error.message, "Value should be a number");
}

// ====== strings ======

#[test]
fn test_case_transforms() {
    assert_cleaned(&Validator::new(lower()), val!("ABC DEF"), val!("abc def"));
    assert_cleaned(&Validator::new(upper()), val!("abc def"), val!("ABC DEF"));
    assert_cleaned(
        &Validator::new(capitalize()),
        val!("abc def"),
        val!("Abc def"),
    );
    assert_cleaned(&Validator::new(title()), val!("abc def"), val!("Abc Def"));
}

#[test]
fn test_not_empty() {
    let validator = Validator::new(not_empty());

    assert_valid(&validator, val!("Hello, world"));
    assert_valid(&validator, val!(" "));

    let error = single_error(&validator, val!(""));
    assert_eq!(error.message, "Can't be empty");
    assert_eq!(error.expected.as_deref(), Some("not empty"));
    assert_eq!(error.provided.as_deref(), Some(""));

    let error = single_error(&validator, val!(123));
    assert_eq!(error.message, "Not a string");
    assert_eq!(error.expected.as_deref(), Some("String"));
    assert_eq!(error.provided.as_deref(), Some("Integer number"));
}

#[test]
fn test_matches_pattern() {
    let validator = Validator::new(matches(r"^0x[A-F0-9]+$", "hex number").unwrap());

    assert_valid(&validator, val!("0xDEADBEEF"));

    let error = single_error(&validator, val!("0x"));
    assert_eq!(error.message, "Wrong format");
    assert_eq!(error.expected.as_deref(), Some("hex number"));
    assert_eq!(error.provided.as_deref(), Some("0x"));

    let error = single_error(&validator, val!(123));
    assert_eq!(error.message, "Wrong value type");
    assert_eq!(error.expected.as_deref(), Some("String"));
    assert_eq!(error.provided.as_deref(), Some("Integer number"));
}

#[test]
fn test_replace_rewrites() {
    let validator = Validator::new(replace(r"^https?://([^/]+)/.*", "$1", "URL").unwrap());

    assert_cleaned(
        &validator,
        val!("http://example.com/a/b/c"),
        val!("example.com"),
    );

    let error = single_error(&validator, val!("user@example.com"));
    assert_eq!(error.message, "Wrong format");
    assert_eq!(error.expected.as_deref(), Some("URL"));
    assert_eq!(error.provided.as_deref(), Some("user@example.com"));
}

// ====== booleans ======

#[test]
fn test_truthy_and_falsy() {
    let validator = Validator::new(truthy());
    assert_valid(&validator, val!(1));
    assert_valid(&validator, val!("abc"));

    let error = single_error(&validator, val!([]));
    assert_eq!(error.message, "Empty value");
    assert_eq!(error.expected.as_deref(), Some("Truthy"));

    let validator = Validator::new(falsy());
    assert_valid(&validator, val!(0));
    assert_valid(&validator, val!([]));

    let error = single_error(&validator, val!([1, 2, 3]));
    assert_eq!(error.message, "Non-empty value");
    assert_eq!(error.expected.as_deref(), Some("Falsy"));
}

#[test]
fn test_boolean_coercion() {
    let validator = Validator::new(boolean());

    for input in [val!(true), val!(1), val!(-1), val!(100)] {
        assert_eq!(validator.apply(&input).unwrap(), val!(true), "{}", input);
    }
    for text in ["y", "Y", "yes", "Yes", "YES", "true", "True", "TRUE", "on", "On", "ON"] {
        assert_eq!(validator.apply(&val!(text)).unwrap(), val!(true), "{}", text);
    }
    for input in [val!(null), val!(false), val!(0)] {
        assert_eq!(validator.apply(&input).unwrap(), val!(false), "{}", input);
    }
    for text in ["n", "N", "no", "No", "NO", "false", "False", "FALSE", "off", "Off", "OFF"] {
        assert_eq!(validator.apply(&val!(text)).unwrap(), val!(false), "{}", text);
    }

    let error = single_error(&validator, val!(0.0));
    assert_eq!(error.message, "Wrong boolean value type");
    assert_eq!(error.expected.as_deref(), Some("Boolean"));
    assert_eq!(error.provided.as_deref(), Some("Fractional number"));

    let error = single_error(&validator, val!("okay"));
    assert_eq!(error.message, "Wrong boolean value");
    assert_eq!(error.provided.as_deref(), Some("okay"));
}
