/*!
The tagged RDF term representation and its constructors.

This crate models the source's single contiguous header+payload+meta
allocation as a tagged variant over owned `String`/`Box<Node>` data (design
option (b)): `Node::Blank`/`Curie`/`Uri` carry their lexical form directly,
`Node::Literal` additionally carries flags and an optional meta child. See
the crate-level documentation for how equality and ordering are defined to
reproduce the byte-wise relation the source's contiguous layout induces.
*/

use crate::error::{self, Result};
use crate::flags::{self, NodeFlags};
use crate::numeric;
use std::cmp::Ordering;
use std::fmt;

/// The discriminant of a [`Node`]. There is no `Nothing` variant here: an
/// absent node is `Option<Node>::None`, not a fifth `NodeType`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeType {
    Blank,
    Curie,
    Uri,
    Literal,
}

/// The meta child of a literal: either a datatype (a `Uri`/`Curie` node) or
/// a language tag (a plain `Literal` node with no meta of its own).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Meta {
    Datatype(Box<Node>),
    Language(Box<Node>),
}

impl Meta {
    fn node(&self) -> &Node {
        match self {
            Meta::Datatype(n) | Meta::Language(n) => n,
        }
    }
}

impl PartialOrd for Meta {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Meta {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node().cmp(other.node())
    }
}

/// An RDF term: a blank-node label, a CURIE, a URI reference, or a literal
/// carrying an optional datatype or language-tag meta child.
///
/// Equality and ordering are structural: `type`, then the lexical body
/// bytes, then the meta child recursively — the same relation the source
/// expresses as "compare the padded byte ranges of the whole allocation",
/// since flags are fully determined by a node's type/body/meta and so never
/// distinguish otherwise-identical nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    Blank(String),
    Curie(String),
    Uri(String),
    Literal {
        lexical_form: String,
        flags: NodeFlags,
        meta: Option<Meta>,
    },
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.string())
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_of()
            .cmp(&other.type_of())
            .then_with(|| self.string().as_bytes().cmp(other.string().as_bytes()))
            .then_with(|| self.meta().map(Meta::node).cmp(&other.meta().map(Meta::node)))
    }
}

// ------------------------------------------------------------------------------------------------
// Accessors (§4.6)
// ------------------------------------------------------------------------------------------------

impl Node {
    /// `type(n)`.
    pub fn type_of(&self) -> NodeType {
        match self {
            Node::Blank(_) => NodeType::Blank,
            Node::Curie(_) => NodeType::Curie,
            Node::Uri(_) => NodeType::Uri,
            Node::Literal { .. } => NodeType::Literal,
        }
    }

    /// `length(n)`: the byte length of the primary lexical form.
    pub fn length(&self) -> usize {
        self.string().len()
    }

    /// `string(n)`: the primary lexical form.
    pub fn string(&self) -> &str {
        match self {
            Node::Blank(s) | Node::Curie(s) | Node::Uri(s) => s,
            Node::Literal { lexical_form, .. } => lexical_form,
        }
    }

    /// `flags(n)`. Always empty for non-literal nodes.
    pub fn flags(&self) -> NodeFlags {
        match self {
            Node::Literal { flags, .. } => *flags,
            _ => NodeFlags::empty(),
        }
    }

    fn meta(&self) -> Option<&Meta> {
        match self {
            Node::Literal { meta, .. } => meta.as_ref(),
            _ => None,
        }
    }

    /// `datatype(n)`: the meta child, only when `HAS_DATATYPE` is set.
    pub fn datatype(&self) -> Option<&Node> {
        match self.meta() {
            Some(Meta::Datatype(n)) => Some(n),
            _ => None,
        }
    }

    /// `language(n)`: the meta child, only when `HAS_LANGUAGE` is set.
    pub fn language(&self) -> Option<&Node> {
        match self.meta() {
            Some(Meta::Language(n)) => Some(n),
            _ => None,
        }
    }

    /// `copy(n)`: a deep copy into a fresh allocation. In this representation
    /// this is exactly [`Clone::clone`]; the free function exists so callers
    /// spelling out the operations in §4.6 have a direct match.
    pub fn copy(&self) -> Node {
        self.clone()
    }
}

/// `equals(a,b)`.
pub fn equals(a: Option<&Node>, b: Option<&Node>) -> bool {
    a == b
}

/// `compare(a,b)`: a total order; absent sorts before present.
pub fn compare(a: Option<&Node>, b: Option<&Node>) -> Ordering {
    a.cmp(&b)
}

/// `wildcard_compare(a,b)`: as [`compare`], except either side being absent
/// compares equal (used by triple-pattern matching).
pub fn wildcard_compare(a: Option<&Node>, b: Option<&Node>) -> Ordering {
    match (a, b) {
        (None, _) | (_, None) => Ordering::Equal,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

/// `set(dst, src)`.
pub fn set(dst: &mut Option<Node>, src: Option<&Node>) {
    *dst = src.cloned();
}

// ------------------------------------------------------------------------------------------------
// Constructors (§4.5)
// ------------------------------------------------------------------------------------------------

/// `new_string(s)`.
pub fn new_string<S: Into<String>>(s: S) -> Option<Node> {
    let lexical_form = s.into();
    let flags = flags::scan(&lexical_form);
    Some(Node::Literal {
        lexical_form,
        flags,
        meta: None,
    })
}

/// `new_plain_literal(s, lang)`.
pub fn new_plain_literal<S: Into<String>>(s: S, lang: Option<&str>) -> Option<Node> {
    try_new_plain_literal(s, lang).ok()
}

fn try_new_plain_literal<S: Into<String>>(s: S, lang: Option<&str>) -> Result<Node> {
    let lang = match lang {
        Some(l) if !l.is_empty() => l,
        _ => return Ok(new_string(s).expect("new_string never fails")),
    };
    let tag = language_tags::LanguageTag::parse(lang)
        .map_err(|_| error::invalid_language_tag_error(lang))?;

    let lexical_form = s.into();
    let flags = flags::scan(&lexical_form) | NodeFlags::HAS_LANGUAGE;
    let language_node = Node::Literal {
        lexical_form: tag.to_string(),
        flags: NodeFlags::empty(),
        meta: None,
    };
    Ok(Node::Literal {
        lexical_form,
        flags,
        meta: Some(Meta::Language(Box::new(language_node))),
    })
}

/// `new_typed_literal(s, dt)`.
pub fn new_typed_literal<S: Into<String>>(s: S, dt: Node) -> Option<Node> {
    try_new_typed_literal(s, dt).ok()
}

fn try_new_typed_literal<S: Into<String>>(s: S, dt: Node) -> Result<Node> {
    if !matches!(dt.type_of(), NodeType::Uri | NodeType::Curie) {
        return Err(error::invalid_datatype_error(dt.string()));
    }
    if dt.string() == rdfkit_names::rdf::lang_string() {
        return Err(error::lang_string_as_datatype_error());
    }

    let lexical_form = s.into();
    let flags = flags::scan(&lexical_form) | NodeFlags::HAS_DATATYPE;
    Ok(Node::Literal {
        lexical_form,
        flags,
        meta: Some(Meta::Datatype(Box::new(dt))),
    })
}

/// `new_blank(s)`.
pub fn new_blank<S: Into<String>>(s: S) -> Option<Node> {
    Some(Node::Blank(s.into()))
}

/// `new_curie(s)`.
pub fn new_curie<S: Into<String>>(s: S) -> Option<Node> {
    Some(Node::Curie(s.into()))
}

/// `new_uri(s)`.
pub fn new_uri<S: Into<String>>(s: S) -> Option<Node> {
    Some(Node::Uri(s.into()))
}

/// `new_file_uri(path, host)`.
pub fn new_file_uri(path: &str, host: Option<&str>) -> Option<Node> {
    Some(Node::Uri(rdfkit_iri::new_file_uri_string(path, host)))
}

/// `new_resolved_uri(s, base)`. `base` must be a `Uri` node; the result
/// fails (returns `None`) when the resolved URI lacks a scheme.
pub fn new_resolved_uri(s: &str, base: &Node) -> Option<Node> {
    try_new_resolved_uri(s, base).ok()
}

fn try_new_resolved_uri(s: &str, base: &Node) -> Result<Node> {
    let base_text = match base {
        Node::Uri(text) => text.as_str(),
        _ => return Err(error::invalid_datatype_error(base.string())),
    };
    let base_ref = rdfkit_iri::parse(base_text);
    let reference = rdfkit_iri::parse(s);
    let resolved = rdfkit_iri::resolve(&reference, &base_ref);
    if resolved.scheme.is_none() {
        return Err(error::not_absolute_error(rdfkit_iri::serialise(&resolved)));
    }
    Ok(Node::Uri(rdfkit_iri::serialise(&resolved)))
}

/// `new_relative_uri(s, base, root?)`.
pub fn new_relative_uri(s: &str, base: &Node, root: Option<&str>) -> Option<Node> {
    let base_text = match base {
        Node::Uri(text) => text.as_str(),
        _ => return None,
    };
    let base_ref = rdfkit_iri::parse(base_text);
    let reference = rdfkit_iri::parse(s);
    let resolved = rdfkit_iri::resolve(&reference, &base_ref);
    // Fully merge the path before relativising: `resolved` may still carry
    // an unmerged `path_base` when `s` was itself a relative reference.
    let absolute_text = rdfkit_iri::serialise(&resolved);
    let absolute_ref = rdfkit_iri::parse(&absolute_text);
    let relative_text = rdfkit_iri::relativise(&absolute_ref, &base_ref, root);
    Some(Node::Uri(relative_text))
}

/// `new_boolean(b)`.
pub fn new_boolean(b: bool) -> Option<Node> {
    let lexical = if b { "true" } else { "false" };
    new_typed_literal(lexical, Node::Uri(rdfkit_names::xsd::boolean()))
}

/// `new_integer(i, dt?)`.
pub fn new_integer(i: i64, dt: Option<Node>) -> Option<Node> {
    let datatype = dt.unwrap_or_else(|| Node::Uri(rdfkit_names::xsd::integer()));
    new_typed_literal(numeric::integer_to_string(i), datatype)
}

/// `new_decimal(d, frac_digits, dt?)`. Fails on non-finite input.
pub fn new_decimal(d: f64, frac_digits: u32, dt: Option<Node>) -> Option<Node> {
    try_new_decimal(d, frac_digits, dt).ok()
}

fn try_new_decimal(d: f64, frac_digits: u32, dt: Option<Node>) -> Result<Node> {
    if !d.is_finite() {
        return Err(error::non_finite_decimal_error());
    }
    let datatype = dt.unwrap_or_else(|| Node::Uri(rdfkit_names::xsd::decimal()));
    try_new_typed_literal(numeric::decimal_to_string(d, frac_digits), datatype)
}

/// `new_blob(bytes, wrap?, dt?)`.
pub fn new_blob(bytes: &[u8], wrap: bool, dt: Option<Node>) -> Option<Node> {
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    let encoded = STANDARD.encode(bytes);
    let (lexical, wrapped) = if wrap {
        wrap_base64(&encoded)
    } else {
        (encoded, false)
    };

    let datatype = dt.unwrap_or_else(|| Node::Uri(rdfkit_names::xsd::base64_binary()));
    let mut node = new_typed_literal(lexical, datatype)?;
    if wrapped {
        if let Node::Literal { flags, .. } = &mut node {
            *flags |= NodeFlags::HAS_NEWLINE;
        }
    }
    Some(node)
}

/// Inserts a newline every 76 characters (RFC 4648 §4's canonical wrap
/// column), returning whether any newline was actually inserted.
fn wrap_base64(encoded: &str) -> (String, bool) {
    const WRAP_COLUMN: usize = 76;
    if encoded.len() <= WRAP_COLUMN {
        return (encoded.to_string(), false);
    }
    let mut out = String::with_capacity(encoded.len() + encoded.len() / WRAP_COLUMN + 1);
    for (i, chunk) in encoded.as_bytes().chunks(WRAP_COLUMN).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(std::str::from_utf8(chunk).expect("base64 alphabet is ASCII"));
    }
    (out, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_1_copy_is_equal_and_distinct() {
        let n = new_uri("http://example.org/x").unwrap();
        let c = n.copy();
        assert!(equals(Some(&n), Some(&c)));
        assert_ne!(&n as *const _, &c as *const _);
    }

    #[test]
    fn property_2_equals_matches_compare() {
        let a = new_uri("http://x").unwrap();
        let b = new_uri("http://x").unwrap();
        let c = new_uri("http://y").unwrap();
        assert!(equals(Some(&a), Some(&b)));
        assert_eq!(compare(Some(&a), Some(&b)), Ordering::Equal);
        assert_ne!(compare(Some(&a), Some(&c)), Ordering::Equal);
    }

    #[test]
    fn property_5_datatype_and_language_are_mutually_exclusive() {
        let typed = new_integer(1, None).unwrap();
        assert!(typed.flags().contains(NodeFlags::HAS_DATATYPE));
        assert!(!typed.flags().contains(NodeFlags::HAS_LANGUAGE));

        let plain = new_plain_literal("hallo", Some("de")).unwrap();
        assert!(plain.flags().contains(NodeFlags::HAS_LANGUAGE));
        assert!(!plain.flags().contains(NodeFlags::HAS_DATATYPE));
    }

    #[test]
    fn s4_typed_integer() {
        let n = new_integer(42, None).unwrap();
        assert_eq!(n.string(), "42");
        assert!(n.flags().contains(NodeFlags::HAS_DATATYPE));
        assert_eq!(
            n.datatype().unwrap().string(),
            "http://www.w3.org/2001/XMLSchema#integer"
        );
    }

    #[test]
    fn s5_plain_literal_with_language() {
        let n = new_plain_literal("hallo", Some("de")).unwrap();
        assert_eq!(n.string(), "hallo");
        assert!(n.flags().contains(NodeFlags::HAS_LANGUAGE));
        assert_eq!(n.language().unwrap().string(), "de");
    }

    #[test]
    fn s6_flag_scan() {
        let n = new_string("hello\n\"world\"").unwrap();
        assert!(n.flags().contains(NodeFlags::HAS_NEWLINE));
        assert!(n.flags().contains(NodeFlags::HAS_QUOTE));
    }

    #[test]
    fn s8_equality_by_structure_not_pointer() {
        let a = new_uri("http://x").unwrap();
        let b = new_uri("http://x").unwrap();
        assert!(equals(Some(&a), Some(&b)));
        assert_eq!(compare(Some(&a), Some(&b)), Ordering::Equal);
    }

    #[test]
    fn lang_string_cannot_be_used_as_datatype() {
        let lang_string = new_uri(rdfkit_names::rdf::lang_string()).unwrap();
        assert!(new_typed_literal("x", lang_string).is_none());
    }

    #[test]
    fn datatype_must_be_uri_or_curie() {
        let blank = new_blank("b1").unwrap();
        assert!(new_typed_literal("x", blank).is_none());
    }

    #[test]
    fn resolved_uri_must_be_absolute() {
        // "rel" against a relative base can never gain a scheme.
        let base = new_uri("rel/base").unwrap();
        assert!(new_resolved_uri("x", &base).is_none());
    }

    #[test]
    fn s1_resolve_relative() {
        let base = new_uri("http://example.org/").unwrap();
        let n = new_resolved_uri("rel/uri", &base).unwrap();
        assert_eq!(n.string(), "http://example.org/rel/uri");
    }

    #[test]
    fn absent_sorts_before_present() {
        let n = new_uri("http://x").unwrap();
        assert_eq!(compare(None, Some(&n)), Ordering::Less);
        assert_eq!(compare(Some(&n), None), Ordering::Greater);
        assert_eq!(compare(None, None), Ordering::Equal);
    }

    #[test]
    fn wildcard_compare_treats_absent_as_equal() {
        let n = new_uri("http://x").unwrap();
        assert_eq!(wildcard_compare(None, Some(&n)), Ordering::Equal);
        assert_eq!(wildcard_compare(Some(&n), None), Ordering::Equal);
    }

    #[test]
    fn set_assigns_clone() {
        let mut dst: Option<Node> = None;
        let src = new_uri("http://x").unwrap();
        set(&mut dst, Some(&src));
        assert!(equals(dst.as_ref(), Some(&src)));
    }
}
