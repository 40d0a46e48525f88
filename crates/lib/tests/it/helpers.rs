use pathmap::{
    PathMap,
    collection::{Mapping, Value},
};

// ==========================
// FIXTURES
// ==========================

/// The three-level fixture used across the collection tests.
///
/// ```text
/// one: "1"
/// two: "2"
/// three:
///   A-one: "31"
///   B-two: "32"
///   C-three:
///     string: "A string"
///     int: 10
///     bool: false
///     null: null
/// ```
pub fn sample_mapping() -> Mapping {
    Mapping::new().with("one", "1").with("two", "2").with(
        "three",
        Mapping::new()
            .with("A-one", "31")
            .with("B-two", "32")
            .with("C-three", c_three()),
    )
}

/// The innermost level of [`sample_mapping`].
pub fn c_three() -> Mapping {
    Mapping::new()
        .with("string", "A string")
        .with("int", 10)
        .with("bool", false)
        .with("null", Value::Null)
}

/// A container seeded with [`sample_mapping`].
pub fn sample_map() -> PathMap {
    PathMap::from(sample_mapping())
}

/// [`sample_mapping`] as compact JSON, keys in insertion order.
pub const SAMPLE_JSON: &str = r#"{"one":"1","two":"2","three":{"A-one":"31","B-two":"32","C-three":{"string":"A string","int":10,"bool":false,"null":null}}}"#;

// ==========================
// ASSERTIONS
// ==========================

/// Assert that every path resolves to the expected text value
pub fn assert_texts(map: &PathMap, expected: &[(&str, &str)]) {
    for (path, expected_value) in expected {
        match map.lookup(*path) {
            Some(Value::Text(actual)) => {
                assert_eq!(actual, expected_value, "Value mismatch at '{path}'");
            }
            Some(other) => panic!("Expected text at '{path}', got: {other:?}"),
            None => panic!("Path '{path}' not found"),
        }
    }
}
