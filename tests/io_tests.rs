#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::fs;

use jini::test_utils::*;

#[test]
fn file_read_error() {
    // Reading a non-existent file through the utility surface is an error.
    let non_existent = "nonexistent_file.json";
    let result = parse_file(non_existent);
    assert!(
        result.is_err(),
        "Expected error when reading non-existent file"
    );

    let err = result.unwrap_err();
    match err.kind() {
        ParseErrorKind::Io(_) => { /* expected */ }
        other => panic!("Expected IO error, got {:?}", other),
    }
}

#[test]
fn missing_file_parses_as_empty_document() {
    // The parser-level surface treats a missing file as empty input instead.
    let mut parser = JsonParser::default();
    let result = parser.try_parse_file("nonexistent_file.json");
    assert!(matches!(result, Ok(None)));

    assert!(parser.parse_file("nonexistent_file.json").is_none());
}

#[test]
fn read_and_write_file() {
    // Use a unique file name for this test.
    let temp_path = tmp_file_path("rw_test.txt");
    let temp_path_str = temp_path.to_str().expect("valid path");

    let content = "Hello, jini!";
    // Write file using write_file utility.
    write_file(temp_path_str, content).expect("Failed to write file");

    // Read back file using read_file utility.
    let read_content = read_file(temp_path_str).expect("Failed to read file");
    assert_eq!(content, read_content);

    // Clean up the temporary file.
    let _ = fs::remove_file(temp_path);
}

#[test]
fn parse_and_format_json_file() {
    // Create a temporary JSON file.
    let temp_path = tmp_file_path("test.json");
    let temp_path_str = temp_path.to_str().expect("valid path");

    let json_content = r#"{
         "key": "value",
         "array": [1, 2, 3]
     }"#;

    fs::write(temp_path_str, json_content).expect("Failed to write JSON file");

    // Dispatch on the .json extension.
    let parsed = parse_file(temp_path_str)
        .expect("Failed to parse JSON file")
        .expect("File should hold a document");

    let formatted = format_json(&parsed).expect("Failed to format JSON");
    let reparsed = parse_json(&formatted)
        .expect("Failed to reparse formatted JSON")
        .expect("Formatted output should hold a document");

    assert!(values_equal(&parsed, &reparsed));

    let _ = fs::remove_file(temp_path);
}

#[test]
fn parse_and_format_ini_file() {
    let temp_path = tmp_file_path("test.ini");
    let temp_path_str = temp_path.to_str().expect("valid path");

    let ini_content = "[server]\nhost=localhost\nport=8080\n";

    fs::write(temp_path_str, ini_content).expect("Failed to write INI file");

    // Dispatch on the .ini extension.
    let parsed = parse_file(temp_path_str)
        .expect("Failed to parse INI file")
        .expect("File should hold a document");

    let formatted = format_ini(&parsed).expect("Failed to format INI");
    let reparsed = parse_ini(&formatted)
        .expect("Failed to reparse formatted INI")
        .expect("Formatted output should hold a document");

    assert!(values_equal(&parsed, &reparsed));

    let _ = fs::remove_file(temp_path);
}

#[test]
fn extension_dispatch_is_case_insensitive() {
    let temp_path = tmp_file_path("upper.JSON");
    let temp_path_str = temp_path.to_str().expect("valid path");

    fs::write(temp_path_str, r#"{"key": "value"}"#).expect("Failed to write JSON file");

    let parsed = parse_file(temp_path_str)
        .expect("Uppercase extension should parse")
        .expect("File should hold a document");
    assert!(parsed.is_object());

    let _ = fs::remove_file(temp_path);
}

#[test]
fn unknown_extension_is_rejected() {
    let temp_path = tmp_file_path("test.conf");
    let temp_path_str = temp_path.to_str().expect("valid path");

    fs::write(temp_path_str, "content").expect("Failed to write file");

    let result = parse_file(temp_path_str);
    assert!(matches!(
        result.unwrap_err().kind(),
        ParseErrorKind::Io(IoError::UnknownFormat(_))
    ));

    let _ = fs::remove_file(temp_path);
}

#[test]
fn empty_file_parses_as_empty_document() {
    let temp_path = tmp_file_path("empty.json");
    let temp_path_str = temp_path.to_str().expect("valid path");

    fs::write(temp_path_str, "").expect("Failed to write file");

    let result = parse_file(temp_path_str).expect("Empty file should not be an error");
    assert!(result.is_none());

    let _ = fs::remove_file(temp_path);
}
