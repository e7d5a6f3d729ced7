//! Hex address helpers.

use sha3::{Digest, Keccak256};

/// Remove a leading `0x`/`0X`.
pub fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Prefix `value` with `0x` unless it already is. A leading minus sign is
/// kept in front of the prefix and an upper-case `0X` is normalized.
pub fn add_hex_prefix(value: &str) -> String {
    let (sign, body) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value),
    };
    if let Some(rest) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        return format!("{sign}0x{rest}");
    }
    format!("{sign}0x{body}")
}

/// `0x` followed by zero or more hex digits.
fn is_hex_string(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .is_some_and(|digits| digits.chars().all(|c| c.is_ascii_hexdigit()))
}

pub fn is_equal_case_insensitive(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// EIP-55 mixed-case encoding of a hex address.
///
/// Inputs that are not hex after prefixing are returned prefixed but otherwise
/// untouched; the empty string stays empty.
pub fn to_checksum_hex_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }
    let prefixed = add_hex_prefix(address);
    if !is_hex_string(&prefixed) {
        return prefixed;
    }
    let lower = strip_hex_prefix(&prefixed).to_ascii_lowercase();
    let hash = hex::encode(Keccak256::digest(lower.as_bytes()));
    let hash = hash.as_bytes();

    let mut checksummed = String::with_capacity(lower.len() + 2);
    checksummed.push_str("0x");
    for (index, c) in lower.chars().enumerate() {
        let nibble_high = hash.get(index).is_some_and(|&h| h >= b'8');
        if c.is_ascii_alphabetic() && nibble_high {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }
    checksummed
}

/// Last four characters of an address, for compact labels.
pub fn short_suffix(address: &str) -> &str {
    let start = address
        .char_indices()
        .rev()
        .nth(3)
        .map_or(0, |(index, _)| index);
    &address[start..]
}
