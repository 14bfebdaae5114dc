/*!
A tagged RDF term representation: nodes (URIs, CURIEs, blank nodes, and
literals), their constructors, and the canonical lexical forms used for
numeric and binary literal datatypes.

Nodes never live behind a graph or store in this crate; it covers only the
term layer, down to [`node::Node`] and its constructors.
*/

#![warn(
    unknown_lints,
    absolute_paths_not_starting_with_crate,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    macro_use_extern_crate,
    nonstandard_style,
    noop_method_call,
    rust_2018_idioms,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    future_incompatible,
    rust_2021_compatibility,
    missing_debug_implementations,
    unreachable_pub,
    unsafe_code,
    unused,
)]

pub mod error;
pub mod flags;
pub mod node;
pub mod numeric;

pub use error::{Error, Result};
pub use flags::NodeFlags;
pub use node::{
    compare, equals, new_blank, new_blob, new_boolean, new_curie, new_decimal, new_file_uri,
    new_integer, new_plain_literal, new_relative_uri, new_resolved_uri, new_string, new_typed_literal,
    new_uri, set, wildcard_compare, Meta, Node, NodeType,
};
