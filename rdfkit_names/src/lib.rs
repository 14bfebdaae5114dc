/*!
This crate provides the IRI strings for the small set of vocabularies the
`rdfkit_core` node layer references directly: RDF's `langString` sentinel
datatype and XSD's numeric/binary datatypes.

Unlike the wider RDFtk `names` crate this is intentionally not a general
vocabulary library: no `QName` type, no macro for defining new namespaces.
Each module exposes plain functions returning the IRI string, which is all
the node constructors in `rdfkit_core` need to compare against or embed.
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

pub mod rdf;
pub mod xsd;
