/*!
ASCII character-class predicates shared by the URI parser, resolver, and the
`file:` URI percent-encoding helper.
*/

/// `true` for `A-Z` and `a-z`.
#[inline]
pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// `true` for `0-9`.
#[inline]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// `true` for a hexadecimal digit, upper or lower case.
#[inline]
pub fn is_hex(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

/// `true` for a byte valid in a scheme after the first (alphabetic) character:
/// `ALPHA / DIGIT / "+" / "-" / "."`.
#[inline]
pub fn is_scheme_char(c: u8) -> bool {
    is_alpha(c) || is_digit(c) || c == b'+' || c == b'-' || c == b'.'
}

/// `true` for a byte that may appear unescaped in a URI path: the RFC 3986
/// unreserved set (`A-Z a-z 0-9 - . _ ~`), the `pchar` extras `:` and `@`, the
/// segment separator `/`, and the sub-delims `! $ & ' ( ) * + , ; =`.
///
/// Any byte for which this returns `false` must be percent-encoded when
/// forming a `file:` URI path.
#[inline]
pub fn is_uri_path_char(c: u8) -> bool {
    is_alpha(c)
        || is_digit(c)
        || matches!(
            c,
            b'-' | b'.'
                | b'_'
                | b'~'
                | b':'
                | b'@'
                | b'/'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
        )
}
