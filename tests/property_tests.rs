#![allow(clippy::unwrap_used)]
#![allow(clippy::as_conversions)]
#![allow(clippy::panic)]

use proptest::{collection::vec, prelude::*};

use jini::test_utils::*;

// Strategy for generating benign JSON string content; raw control characters
// are invalid inside string literals, so only plain spaces appear here
fn json_string_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_\\-\\. ]{1,50}".prop_map(|s| s.replace('\\', "\\\\"))
}

// Strategy for generating arrays of numbers
fn number_array_strategy() -> impl Strategy<Value = Vec<f64>> {
    vec(-1000.0..1000.0f64, 0..10)
}

// Strategy for generating INI-safe identifiers
fn ini_word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_\\-\\.]{1,30}"
}

proptest! {
    // Basic Tests
    #[test]
    fn test_basic_json_roundtrip(s in json_string_strategy()) {
        let json_str = format!(
            r#"{{"string":"{}","number":42.5,"boolean":true,"array":[1,2,3]}}"#,
            s
        );

        let parsed = parse_json(&json_str).unwrap().unwrap();
        let reparsed = parse_json(&parsed.to_string()).unwrap().unwrap();

        prop_assert!(values_equal(&parsed, &reparsed));
    }

    // Nested Structure Tests
    #[test]
    fn test_nested_objects(
        key1 in json_string_strategy(),
        key2 in json_string_strategy(),
        n in -1000i32..1000i32
    ) {
        let json_str = format!(
            r#"{{
                "outer": {{
                    "inner1": {{
                        "key1": "{}",
                        "value": {}
                    }},
                    "inner2": {{
                        "key2": "{}"
                    }}
                }}
            }}"#,
            key1, n, key2
        );

        let parsed = parse_json(&json_str).unwrap().unwrap();
        let formatted = format_json(&parsed).unwrap();
        let reparsed = parse_json(&formatted).unwrap().unwrap();

        prop_assert!(values_equal(&parsed, &reparsed));
    }

    // Array Tests
    #[test]
    fn test_complex_arrays(
        numbers in number_array_strategy(),
        strings in vec(json_string_strategy(), 0..5)
    ) {
        let numbers_str = numbers.iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let strings_str = strings.iter()
            .map(|s| format!(r#""{}""#, s))
            .collect::<Vec<_>>()
            .join(",");

        let json_str = format!(r#"{{"numbers":[{}],"strings":[{}]}}"#, numbers_str, strings_str);

        let parsed = parse_json(&json_str).unwrap().unwrap();
        let reparsed = parse_json(&parsed.to_string()).unwrap().unwrap();

        prop_assert!(values_equal(&parsed, &reparsed));
    }

    // Dialect Tests
    #[test]
    fn test_trailing_comma_equivalence(numbers in vec(-1000i64..1000i64, 1..8)) {
        let items = numbers.iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let strict_str = format!("[{}]", items);
        let relaxed_str = format!("[{},]", items);

        let strict = parse_json(&strict_str).unwrap().unwrap();
        let relaxed = parse_json_with(
            &relaxed_str,
            Features::strict().with_trailing_comma(),
        ).unwrap().unwrap();

        prop_assert!(values_equal(&strict, &relaxed));
    }

    #[test]
    fn test_comments_do_not_change_value(key in json_string_strategy(), n in -1000i32..1000i32) {
        let plain_str = format!(r#"{{"{}":{}}}"#, key, n);
        let commented_str = format!(
            "// header\n{{\"{}\": /* inline */ {}}} // footer",
            key, n
        );

        let plain = parse_json(&plain_str).unwrap().unwrap();
        let commented = parse_json_with(
            &commented_str,
            Features::strict().with_comments(),
        ).unwrap().unwrap();

        prop_assert!(values_equal(&plain, &commented));
    }

    // Escape Tests
    #[test]
    fn test_escaped_strings_roundtrip(s in "[a-zA-Z0-9\"\\\\\n\t]{0,30}") {
        let value = Value::String(s.clone());
        let formatted = format_json(&value).unwrap();

        let reparsed = parse_json_with(
            &formatted,
            Features::strict().with_any_type(),
        ).unwrap().unwrap();

        prop_assert_eq!(reparsed.as_str(), Some(s.as_str()));
    }

    // INI Tests
    #[test]
    fn test_ini_roundtrip(
        section in ini_word_strategy(),
        keys in vec(ini_word_strategy(), 1..6),
        values in vec(ini_word_strategy(), 1..6)
    ) {
        let mut input = format!("[{}]\n", section);

        for (key, value) in keys.iter().zip(values.iter()) {
            input.push_str(&format!("{}={}\n", key, value));
        }

        let parsed = parse_ini(&input).unwrap().unwrap();
        let formatted = format_ini(&parsed).unwrap();
        let reparsed = parse_ini(&formatted).unwrap().unwrap();

        prop_assert!(values_equal(&parsed, &reparsed));
    }
}
