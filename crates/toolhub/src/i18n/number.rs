use crate::i18n::Language;

/// Formats a review count as a compact, parenthesised label.
///
/// Counts below one thousand are printed as-is. Larger counts are shown in
/// thousands with one decimal place, dropping a trailing `.0`. Arabic puts
/// the thousands word before the number.
///
/// # Examples
///
/// ```
/// use toolhub::{Language, format_number};
///
/// assert_eq!(format_number(999, Language::En), "(999)");
/// assert_eq!(format_number(1500, Language::En), "(1.5k)");
/// assert_eq!(format_number(2000, Language::En), "(2k)");
/// assert_eq!(format_number(1500, Language::Ar), "(ألف 1.5)");
/// ```
pub fn format_number(count: u64, language: Language) -> String {
    if count < 1000 {
        return format!("({count})");
    }
    let thousands = compact_thousands(count);
    match language {
        Language::En => format!("({thousands}k)"),
        Language::Ar => format!("(ألف {thousands})"),
    }
}

/// Renders `count / 1000` with at most one decimal.
///
/// The quotient is taken as an `f64` and rounded to the nearest tenth of its
/// exact binary value, with exact ties going up. So 1150 (stored just below
/// 1.15) gives `1.1` while 1250 gives `1.3`.
fn compact_thousands(count: u64) -> String {
    let tenths = nearest_tenths(count as f64 / 1000.0);
    let whole = tenths.div_euclid(10);
    match tenths.rem_euclid(10) {
        0 => whole.to_string(),
        fraction => format!("{whole}.{fraction}"),
    }
}

/// Returns `value * 10` rounded to the nearest integer, computed exactly from
/// the float's mantissa and exponent. `value` must be finite and at least 1.
fn nearest_tenths(value: f64) -> u128 {
    let bits = value.to_bits();
    let mantissa = u128::from((bits & ((1 << 52) - 1)) | (1 << 52));
    // value == mantissa * 2^exponent
    let exponent = ((bits >> 52) & 0x7ff) as i32 - 1075;
    let scaled = mantissa * 10;
    if exponent >= 0 {
        return scaled << exponent;
    }
    let shift = exponent.unsigned_abs();
    let half = 1u128 << (shift - 1);
    let remainder = scaled & ((1u128 << shift) - 1);
    (scaled >> shift) + u128::from(remainder >= half)
}
