/*!
The `file:` URI constructor: assembles a `file://` URI from a local path and
an optional host, percent-encoding path bytes that may not appear literally.
*/

use crate::char_class::is_uri_path_char;
use std::fmt::Write as _;

/// Returns `true` if `path` looks like a Windows drive-letter path, e.g.
/// `C:\Users\x` or `C:/Users/x`.
fn is_windows_path(path: &str) -> bool {
    let b = path.as_bytes();
    b.len() >= 3 && b[0].is_ascii_alphabetic() && b[1] == b':' && matches!(b[2], b'\\' | b'/')
}

/// Build the lexical form of a `file:` URI for `path`, optionally qualified
/// with `host` (an authority, e.g. a hostname).
///
/// Each path byte is written as follows: `\` becomes `/` when `path` looks
/// like a Windows path; `%` is doubled to `%%`; bytes satisfying
/// [`is_uri_path_char`] pass through unchanged; every other byte is written
/// as an uppercase-hex `%XX` escape.
pub fn new_file_uri_string(path: &str, host: Option<&str>) -> String {
    let windows = is_windows_path(path);
    let mut out = String::with_capacity(path.len() + 8);
    out.push_str("file://");
    if let Some(host) = host {
        out.push_str(host);
    }
    if windows {
        out.push('/');
    }
    for b in path.bytes() {
        match b {
            b'\\' if windows => out.push('/'),
            b'%' => out.push_str("%%"),
            c if is_uri_path_char(c) => out.push(c as char),
            c => {
                let _ = write!(out, "%{:02X}", c);
            }
        }
    }
    out
}
