/*!
IRI strings for the [XSD](https://www.w3.org/TR/xmlschema-2/) datatype vocabulary.

Only the four datatypes the core's numeric and binary constructors default to are
exposed; the full XSD datatype hierarchy is out of scope for this crate.
 */

/// The namespace prefix conventionally used for this vocabulary.
pub const PREFIX: &str = "xsd";

/// The namespace URI for this vocabulary.
pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

/// The `xsd:boolean` datatype IRI, the default for `new_boolean`.
#[inline]
pub fn boolean() -> String {
    format!("{}boolean", NAMESPACE)
}

/// The `xsd:integer` datatype IRI, the default for `new_integer`.
#[inline]
pub fn integer() -> String {
    format!("{}integer", NAMESPACE)
}

/// The `xsd:decimal` datatype IRI, the default for `new_decimal`.
#[inline]
pub fn decimal() -> String {
    format!("{}decimal", NAMESPACE)
}

/// The `xsd:base64Binary` datatype IRI, the default for `new_blob`.
#[inline]
pub fn base64_binary() -> String {
    format!("{}base64Binary", NAMESPACE)
}
