/*!
Canonical lexical-form conversions for integers and decimals. These avoid
`Display`/`sprintf`-style formatting of the underlying `f64`/`i64` because
the rounding and trailing-zero policy spelled out for `new_decimal` is
specific to RDF/XSD lexical forms, not Rust's own float formatting.
*/

/// Writes `i` as `-?(0|[1-9][0-9]*)`, the canonical `xsd:integer` form.
pub fn integer_to_string(i: i64) -> String {
    if i == 0 {
        return "0".to_string();
    }
    let negative = i < 0;
    let mut magnitude = i.unsigned_abs();
    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(b'0' + (magnitude % 10) as u8);
        magnitude /= 10;
    }
    if negative {
        digits.push(b'-');
    }
    digits.reverse();
    String::from_utf8(digits).expect("ASCII digits are valid UTF-8")
}

/// Writes `d` as a canonical `xsd:decimal` lexical form with up to
/// `frac_digits` fractional digits: sign?, integer part (via `trunc`,
/// written right-to-left), `.`, then the fractional part computed as
/// `round(frac * 10^frac_digits)`, right-trimmed so at least one fractional
/// digit remains. `d` must be finite; callers check this before calling.
pub fn decimal_to_string(d: f64, frac_digits: u32) -> String {
    debug_assert!(d.is_finite());
    let frac_digits = frac_digits.max(1);

    let negative = d.is_sign_negative() && d != 0.0;
    let abs = d.abs();
    let mut int_part = abs.trunc() as i64;
    let fraction = abs - abs.trunc();

    let scale = 10f64.powi(frac_digits as i32);
    let mut frac_part = (fraction * scale).round() as i64;
    if frac_part >= scale as i64 {
        // Rounding carried into the integer part, e.g. 0.999 at 2 digits.
        frac_part -= scale as i64;
        int_part += 1;
    }

    let mut frac_str = format!("{:0width$}", frac_part, width = frac_digits as usize);
    while frac_str.len() > 1 && frac_str.ends_with('0') {
        frac_str.pop();
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&integer_to_string(int_part));
    out.push('.');
    out.push_str(&frac_str);
    out
}
