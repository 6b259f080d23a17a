//! Numeric operands.
//!
//! Typist's notation writes hex without a prefix and allows `:` or `.` to group digits,
//! e.g. `00:1000` for a long address.  Binary uses `%` and decimal uses `&`.
//! The traditional format wants `$` in front of hex and nothing in front of decimal.

/// Legal digit group separators
const SEPARATORS: [char;2] = [':','.'];

/// Remove all digit group separators
pub fn remove_separators(s: &str) -> String {
    s.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// Convert an operand token from Typist's notation to the traditional format.
/// Tokens that are not recognizably numeric are returned as they are (after separator
/// removal), on the assumption that they are symbols.
/// Bare tokens that parse as hex are treated as numbers, so `dead` becomes `$dead`.
pub fn convert_number(token: &str) -> String {
    let s = remove_separators(token.trim());
    if s.starts_with('%') || s.starts_with('$') {
        return s;
    }
    if let Some(dec) = s.strip_prefix('&') {
        return dec.to_string();
    }
    // strip exactly one prefix, or `0x00` would lose its zeros
    if let Some(hex) = s.strip_prefix("0x") {
        return ["$",hex].concat();
    }
    // hex is limited to what fits in 32 signed bits
    match i32::from_str_radix(&s,16) {
        Ok(_) => ["$",s.as_str()].concat(),
        Err(_) => s
    }
}
