use parameterized::parameterized;
use rdfkit_core::{
    compare, equals, new_blank, new_blob, new_boolean, new_curie, new_decimal, new_file_uri,
    new_integer, new_plain_literal, new_relative_uri, new_resolved_uri, new_string, new_typed_literal,
    new_uri, NodeType,
};
use std::cmp::Ordering;

#[test]
fn untyped_string() {
    let value = new_string("a string").unwrap();
    assert_eq!(value.type_of(), NodeType::Literal);
    assert!(value.datatype().is_none());
    assert!(value.language().is_none());
    assert_eq!(value.string(), "a string");
}

#[test]
fn plain_literal_with_language() {
    let value = new_plain_literal("a string", Some("en-US")).unwrap();
    assert!(value.datatype().is_none());
    assert_eq!(value.language().unwrap().string(), "en-US");
    assert_eq!(value.string(), "a string");
}

#[test]
fn plain_literal_with_invalid_language_fails() {
    assert!(new_plain_literal("a string", Some("not a tag!")).is_none());
}

#[test]
fn typed_as_string() {
    let datatype = new_uri("http://www.w3.org/2001/XMLSchema#string").unwrap();
    let value = new_typed_literal("a string", datatype).unwrap();
    assert_eq!(
        value.datatype().unwrap().string(),
        "http://www.w3.org/2001/XMLSchema#string"
    );
}

#[test]
fn typed_as_boolean() {
    let value = new_boolean(true).unwrap();
    assert_eq!(value.string(), "true");
    assert_eq!(
        value.datatype().unwrap().string(),
        "http://www.w3.org/2001/XMLSchema#boolean"
    );
}

#[parameterized(input = { -17, 0, 42, i64::MIN }, expected = { "-17", "0", "42", "-9223372036854775808" })]
fn typed_as_integer(input: i64, expected: &str) {
    let value = new_integer(input, None).unwrap();
    assert_eq!(value.string(), expected);
    assert_eq!(
        value.datatype().unwrap().string(),
        "http://www.w3.org/2001/XMLSchema#integer"
    );
}

#[parameterized(
    value = { 3.5, 1.0, -2.25, 0.999 },
    frac_digits = { 2, 4, 3, 2 },
    expected = { "3.5", "1.0", "-2.25", "1.0" }
)]
fn typed_as_decimal(value: f64, frac_digits: u32, expected: &str) {
    let value = new_decimal(value, frac_digits, None).unwrap();
    assert_eq!(value.string(), expected);
}

#[test]
fn non_finite_decimal_fails() {
    assert!(new_decimal(f64::NAN, 2, None).is_none());
    assert!(new_decimal(f64::INFINITY, 2, None).is_none());
}

#[test]
fn blob_round_trips_through_base64() {
    let value = new_blob(b"hello world", false, None).unwrap();
    assert_eq!(value.string(), "aGVsbG8gd29ybGQ=");
    assert_eq!(
        value.datatype().unwrap().string(),
        "http://www.w3.org/2001/XMLSchema#base64Binary"
    );
}

#[test]
fn blob_wraps_long_lines() {
    let bytes = vec![0u8; 100];
    let value = new_blob(&bytes, true, None).unwrap();
    assert!(value.string().contains('\n'));
}

#[test]
fn blank_and_curie_are_unadorned() {
    let blank = new_blank("b1").unwrap();
    assert_eq!(blank.type_of(), NodeType::Blank);
    assert_eq!(blank.string(), "b1");

    let curie = new_curie("rdf:type").unwrap();
    assert_eq!(curie.type_of(), NodeType::Curie);
    assert_eq!(curie.string(), "rdf:type");
}

#[test]
fn file_uri_from_plain_path() {
    let node = new_file_uri("/etc/hosts", None).unwrap();
    assert_eq!(node.string(), "file:///etc/hosts");
}

#[test]
fn resolved_uri_against_absolute_base() {
    let base = new_uri("http://example.org/a/b/c").unwrap();
    let node = new_resolved_uri("../x", &base).unwrap();
    assert_eq!(node.string(), "http://example.org/a/x");
}

#[test]
fn relative_uri_against_sibling_base() {
    let base = new_uri("http://example.org/a/b/c").unwrap();
    let node = new_relative_uri("http://example.org/a/b/d", &base, None).unwrap();
    assert_eq!(node.string(), "d");
}

#[test]
fn type_ordering_places_literals_after_uris() {
    let uri = new_uri("http://example.org/").unwrap();
    let literal = new_string("x").unwrap();
    assert_eq!(compare(Some(&uri), Some(&literal)), Ordering::Less);
}

#[test]
fn no_datatype_sorts_before_typed() {
    let plain = new_string("value-1").unwrap();
    let typed = new_integer(1, None).unwrap();
    assert!(!equals(Some(&plain), Some(&typed)));
}
