use crate::types::{BASIS_POINTS, REFERENCE_PRECISION};

/// Convert a raw asset amount into the common unit of account.
///
/// Formula: scale(raw, precision → REFERENCE_PRECISION) × worth_bp / 10,000
///
/// Wider precision truncates via integer division, narrower precision
/// multiplies; both are exact power-of-ten scalings. The worth multiply
/// floors. Deterministic and side-effect-free.
///
/// Example:
/// - raw: 25 in a 6-decimal asset → scaled: 250 (reference is 7 decimals)
/// - worth_bp: 10,000 (parity) → normalized: 250
pub fn normalized_value(raw: i128, precision: u32, worth_bp: i128) -> Option<i128> {
    let scaled = if precision > REFERENCE_PRECISION {
        raw.checked_div(pow10(precision - REFERENCE_PRECISION)?)?
    } else {
        raw.checked_mul(pow10(REFERENCE_PRECISION - precision)?)?
    };

    scaled.checked_mul(worth_bp)?.checked_div(BASIS_POINTS)
}

/// floor(normalized_value / value_per_entry)
pub fn entry_count(normalized_value: i128, value_per_entry: i128) -> Option<i128> {
    normalized_value.checked_div(value_per_entry)
}

fn pow10(exp: u32) -> Option<i128> {
    10i128.checked_pow(exp)
}
