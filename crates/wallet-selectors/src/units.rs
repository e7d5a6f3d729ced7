//! Wei arithmetic on hex-encoded quantities.

use num_bigint::BigUint;

use crate::address::strip_hex_prefix;
use crate::error::{Result, SelectorError};

/// Ether unit a wei amount can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denomination {
    Wei,
    Gwei,
    Eth,
}

impl Denomination {
    /// Power of ten between this unit and wei.
    pub const fn exponent(self) -> u32 {
        match self {
            Self::Wei => 0,
            Self::Gwei => 9,
            Self::Eth => 18,
        }
    }
}

/// Parse a `0x`-prefixed (or bare) hex quantity. An empty quantity is zero.
pub fn parse_hex_quantity(value: &str) -> Result<BigUint> {
    let digits = strip_hex_prefix(value.trim());
    if digits.is_empty() {
        return Ok(BigUint::default());
    }
    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| SelectorError::InvalidHex {
        value: value.to_string(),
    })
}

/// Convert a hex quantity to its base-10 string.
pub fn hex_to_decimal(value: &str) -> Result<String> {
    Ok(parse_hex_quantity(value)?.to_str_radix(10))
}

/// Render a hex wei amount in `to`, rounded half-down to at most `decimals`
/// fractional digits. Trailing zeros are dropped, so one ether renders as `1`.
pub fn wei_hex_to_denomination(value: &str, to: Denomination, decimals: u32) -> Result<String> {
    let wei = parse_hex_quantity(value)?;
    Ok(format_units(&wei, to.exponent(), decimals))
}

/// Scale `amount` down by `10^exponent` and round to `decimals` places.
pub fn format_units(amount: &BigUint, exponent: u32, decimals: u32) -> String {
    if decimals >= exponent {
        return render_fixed(amount, exponent);
    }
    let divisor = BigUint::from(10u32).pow(exponent - decimals);
    let quotient = amount / &divisor;
    let remainder = amount % &divisor;
    // Half-down: an exact half is truncated.
    let scaled = if remainder * 2u32 > divisor {
        quotient + 1u32
    } else {
        quotient
    };
    render_fixed(&scaled, decimals)
}

/// Place a decimal point `fraction_digits` from the right and trim zeros.
fn render_fixed(scaled: &BigUint, fraction_digits: u32) -> String {
    let digits = scaled.to_str_radix(10);
    let fraction_digits = fraction_digits as usize;
    if fraction_digits == 0 {
        return digits;
    }
    let padded = if digits.len() <= fraction_digits {
        format!("{}{}", "0".repeat(fraction_digits + 1 - digits.len()), digits)
    } else {
        digits
    };
    let split = padded.len() - fraction_digits;
    let (whole, fraction) = padded.split_at(split);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    }
}
