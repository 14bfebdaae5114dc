/*!
IRI strings for the [RDF](https://www.w3.org/TR/rdf11-concepts/) namespace.

Only the identifier that the core node layer actually needs to compare against is
exposed here: the `rdf:langString` datatype, which `new_typed_literal` must reject.
 */

/// The namespace prefix conventionally used for this vocabulary.
pub const PREFIX: &str = "rdf";

/// The namespace URI for this vocabulary.
pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// The `rdf:langString` datatype IRI. A typed literal may never carry this as its
/// datatype; language-tagged literals use `has_language` instead.
#[inline]
pub fn lang_string() -> String {
    format!("{}langString", NAMESPACE)
}
