/*!
Computes a relative reference for a target URI against a base, the inverse
of [`crate::resolve::resolve`] followed by [`crate::serialise::serialise`].

This is not present in the original C implementation this crate is modeled
on (its `serd_uri_serialise_relative` helper is declared but never defined
in the source retrieved for this port); the algorithm below is this crate's
own resolution of that gap, following the same segment-splitting approach
used elsewhere in this pack for path normalization.
*/

use crate::serialise::serialise;
use crate::uri_ref::UriRef;

/// Produce the lexical form of a reference that, when resolved against
/// `base`, yields `target` again. When `target` does not share `base`'s
/// scheme and authority it cannot be expressed relatively; the full
/// absolute serialisation of `target` is returned instead.
///
/// `root`, when given, is a path below which the relative form must not
/// traverse via `..` segments — it bounds how many directory levels may be
/// stripped from `base`'s path.
pub fn relativise(target: &UriRef<'_>, base: &UriRef<'_>, root: Option<&str>) -> String {
    if target.scheme != base.scheme || target.authority != base.authority {
        return serialise(target);
    }

    let mut out = relative_path(
        base.path.unwrap_or(""),
        target.path.unwrap_or(""),
        root,
    );

    if let Some(query) = target.query {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = target.fragment {
        out.push_str(fragment);
    }

    out
}

fn relative_path(base_path: &str, target_path: &str, root: Option<&str>) -> String {
    let base_segs: Vec<&str> = base_path.split('/').collect();
    let target_segs: Vec<&str> = target_path.split('/').collect();

    let base_dir = &base_segs[..base_segs.len().saturating_sub(1)];
    let target_dir = &target_segs[..target_segs.len().saturating_sub(1)];
    let target_file = target_segs.last().copied().unwrap_or("");

    let root_dir_len = root
        .map(|r| r.split('/').collect::<Vec<_>>().len().saturating_sub(1))
        .unwrap_or(0);

    let mut common = 0usize;
    while common < base_dir.len()
        && common < target_dir.len()
        && base_dir[common] == target_dir[common]
    {
        common += 1;
    }
    // Never strip below the root boundary.
    let min_common = root_dir_len.min(base_dir.len()).min(target_dir.len());
    if common < min_common {
        common = min_common;
    }

    let ups = base_dir.len() - common;
    let mut segments: Vec<&str> = Vec::with_capacity(ups + target_dir.len() - common + 1);
    for _ in 0..ups {
        segments.push("..");
    }
    segments.extend_from_slice(&target_dir[common..]);
    segments.push(target_file);

    let joined = segments.join("/");
    if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
