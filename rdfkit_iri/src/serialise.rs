/*!
The URI serializer: writes a (possibly resolved) [`UriRef`] back to text,
merging `path` against `path_base` and removing dot segments per
RFC 3986 §5.2.3 / §5.3.
*/

use crate::uri_ref::UriRef;

/// Serialize `u` to its canonical textual form.
///
/// When `u.path_base` is set (as produced by [`crate::resolve::resolve`] for
/// a relative reference with a relative path), the merged, dot-segment-free
/// path is computed and written instead of `u.path` verbatim.
pub fn serialise(u: &UriRef<'_>) -> String {
    let mut out = String::with_capacity(string_length(u));

    if let Some(scheme) = u.scheme {
        out.push_str(scheme);
        out.push(':');
    }
    if let Some(authority) = u.authority {
        out.push_str("//");
        out.push_str(authority);
    }

    write_path(&mut out, u);

    if let Some(query) = u.query {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = u.fragment {
        // `fragment` already carries its leading '#', see `uri_ref::parse`.
        out.push_str(fragment);
    }

    tracing::trace!(result = %out, "serialised uri");
    out
}

/// An upper bound on the serialised length of `u`, for callers sizing
/// buffers ahead of time: the sum of component lengths plus a fixed margin
/// for delimiters.
pub fn string_length(u: &UriRef<'_>) -> usize {
    const MARGIN: usize = 1 /* ':' */ + 2 /* "//" */ + 1 /* '?' */ + 1 /* leading '/' */;
    u.scheme.map_or(0, str::len)
        + u.authority.map_or(0, str::len)
        + u.path_base.map_or(0, str::len)
        + u.path.map_or(0, str::len)
        + u.query.map_or(0, str::len)
        + u.fragment.map_or(0, str::len)
        + MARGIN
}

fn write_path(out: &mut String, u: &UriRef<'_>) {
    let path_segment = match (u.path_base, u.path) {
        (None, Some(path)) => path.to_string(),
        (None, None) => String::new(),
        (Some(path_base), None) => path_base.to_string(),
        (Some(path_base), Some(path)) => {
            let (up, suffix_start) = strip_leading_dot_segments(path);
            let suffix = &path[suffix_start..];
            let prefix = merge_prefix(path_base, up);
            format!("{prefix}{suffix}")
        }
    };

    if u.base_uri_has_authority
        && u.path_base == Some("")
        && !path_segment.starts_with('/')
    {
        out.push('/');
    }
    out.push_str(&path_segment);
}

/// Strips leading dot segments from `path`, returning `(up, suffix_start)`:
/// `up` is the number of trailing path-base segments the merge must discard
/// (starting at 1, since the base's trailing filename is always removed),
/// and `suffix_start` is the byte offset in `path` where the remaining,
/// dot-segment-free suffix begins.
fn strip_leading_dot_segments(path: &str) -> (usize, usize) {
    let bytes = path.as_bytes();
    let mut up = 1usize;
    let mut i = 0usize;
    let len = bytes.len();

    loop {
        let rest = &bytes[i..];
        if rest.starts_with(b"./") {
            i += 2;
        } else if rest.starts_with(b"../") {
            i += 3;
            up += 1;
        } else if rest == b"." {
            i = len;
            break;
        } else if rest == b".." {
            up += 1;
            i = len;
            break;
        } else if rest.starts_with(b"//") {
            i += 1;
        } else {
            break;
        }
    }

    (up, i)
}

/// Walks `path_base` backwards, consuming one `/` per remaining `up`, and
/// returns the prefix of `path_base` up to and including the `up`-th slash
/// from the end. If `path_base` is exhausted before `up` reaches zero, the
/// empty prefix is returned.
fn merge_prefix(path_base: &str, mut up: usize) -> &str {
    let bytes = path_base.as_bytes();
    let mut i = bytes.len();
    while i > 0 {
        i -= 1;
        if bytes[i] == b'/' {
            up -= 1;
            if up == 0 {
                return &path_base[..=i];
            }
        }
    }
    ""
}
