/*!
This crate provides an RFC 3986 URI value, parser, resolver, and serializer:
the lexical-slice view [`UriRef`], the state-machine parser in [`parse`],
the reference-resolution algorithm in [`resolve`], and the merging
serializer in [`serialise`], plus the `file:` URI builder in [`file_uri`].

Unlike the wider RDFtk `iri` crate this does not wrap `url::Url`; it models
the generic URI exactly as RFC 3986 describes it — six borrowed slices over
the input text — because the core node layer needs to represent relative
references and their unmerged base path (`path_base`) during resolution,
something an owned, already-normalized `Url` cannot express.

# Example

```rust
use rdfkit_iri::{parse, resolve, serialise};

let base = parse("http://example.org/a/b/c");
let reference = parse("../x");
let target = resolve(&reference, &base);
assert_eq!(serialise(&target), "http://example.org/a/x");
```
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

pub mod char_class;
pub mod file_uri;
pub mod relativise;
pub mod resolve;
pub mod serialise;
pub mod uri_ref;

pub use char_class::{is_alpha, is_digit, is_hex, is_uri_path_char};
pub use file_uri::new_file_uri_string;
pub use relativise::relativise;
pub use resolve::resolve;
pub use serialise::{serialise, string_length};
pub use uri_ref::{is_relative, parse, UriRef};
