// source/nan.rs

/// Non-finite literals a Python JSON encoder emits. `-Infinity` must be
/// tried before `Infinity`.
const NON_FINITE: [&str; 3] = ["NaN", "-Infinity", "Infinity"];

/// Replaces bare `NaN`, `Infinity` and `-Infinity` tokens with `null` so the
/// payload is valid JSON.
///
/// The listings API serialises missing numbers from a dataframe as `NaN`.
/// Occurrences inside string literals are left alone.
pub fn clean_nan_values(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = raw;

    while let Some(c) = rest.chars().next() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(token) = NON_FINITE.iter().find(|t| rest.starts_with(**t)) {
            out.push_str("null");
            rest = &rest[token.len()..];
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}
