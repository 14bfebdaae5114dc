/*!
The URI resolver: combines a relative reference against a base URI per
RFC 3986 §5.2.2, without performing dot-segment removal (that step is
deferred to the serializer, see [`crate::serialise`]).
*/

use crate::uri_ref::UriRef;

/// Resolve reference `r` against base `base`, returning a target `UriRef`
/// whose `path_base` (when set) records the base path the serializer must
/// merge `path` into.
pub fn resolve<'a>(r: &UriRef<'a>, base: &UriRef<'a>) -> UriRef<'a> {
    let base_uri_has_authority = base.authority.map(|a| !a.is_empty()).unwrap_or(false);

    let target = if r.scheme.is_some() {
        UriRef {
            scheme: r.scheme,
            authority: r.authority,
            path_base: None,
            path: r.path,
            query: r.query,
            fragment: r.fragment,
            base_uri_has_authority,
        }
    } else if r.authority.is_some() {
        UriRef {
            scheme: base.scheme,
            authority: r.authority,
            path_base: None,
            path: r.path,
            query: r.query,
            fragment: r.fragment,
            base_uri_has_authority,
        }
    } else if r.path.map(|p| p.is_empty()).unwrap_or(true) {
        UriRef {
            scheme: base.scheme,
            authority: base.authority,
            path_base: base.path,
            path: r.path,
            query: r.query.or(base.query),
            fragment: r.fragment,
            base_uri_has_authority,
        }
    } else if r.path.unwrap().starts_with('/') {
        UriRef {
            scheme: base.scheme,
            authority: base.authority,
            path_base: None,
            path: r.path,
            query: r.query,
            fragment: r.fragment,
            base_uri_has_authority,
        }
    } else {
        UriRef {
            scheme: base.scheme,
            authority: base.authority,
            path_base: base.path,
            path: r.path,
            query: r.query,
            fragment: r.fragment,
            base_uri_has_authority,
        }
    };

    tracing::trace!(?target, "resolved uri");
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uri_ref::parse;

    #[test]
    fn scheme_present_takes_reference_as_is() {
        let base = parse("http://example.org/a/b/c");
        let r = parse("ftp://other/x");
        let t = resolve(&r, &base);
        assert_eq!(t.scheme, Some("ftp"));
        assert_eq!(t.authority, Some("other"));
        assert_eq!(t.path, Some("/x"));
    }

    #[test]
    fn empty_path_inherits_base_path_as_path_base() {
        let base = parse("http://example.org/a/b/c");
        let r = parse("?q=1");
        let t = resolve(&r, &base);
        assert_eq!(t.path, None);
        assert_eq!(t.path_base, Some("/a/b/c"));
        assert_eq!(t.query, Some("q=1"));
    }

    #[test]
    fn absolute_path_replaces_base_path() {
        let base = parse("http://example.org/a/b/c");
        let r = parse("/x/y");
        let t = resolve(&r, &base);
        assert_eq!(t.path, Some("/x/y"));
        assert_eq!(t.path_base, None);
    }

    #[test]
    fn relative_path_merges_with_base_path() {
        let base = parse("http://example.org/a/b/c");
        let r = parse("../x");
        let t = resolve(&r, &base);
        assert_eq!(t.path, Some("../x"));
        assert_eq!(t.path_base, Some("/a/b/c"));
    }
}
