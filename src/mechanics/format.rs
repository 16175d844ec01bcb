/// Display mechanics: short-scale suffix notation for pixel counts.
use crate::mechanics::decimal::Decimal;

/// Short-scale suffixes, one per power of 1000.
pub const SUFFIXES: [&str; 58] = [
    "", "K", "M", "B", "T", "Qa", "Qi", "Sx", "Sp", "Oc",
    "No", "Dc", "UDc", "DDc", "TDc", "QaDc", "QiDc", "SxDc", "SpDc", "ODc",
    "Nd", "Vg", "UVg", "DVg", "TVg", "QaVg", "QiVg", "SxVg", "SpVg", "OVg",
    "Tg", "UTg", "DTg", "TTg", "QaTg", "QiTg", "SxTg", "SpTg", "OTg", "Qd",
    "UQd", "DQd", "TQd", "QaQd", "QiQd", "SxQd", "SpQd", "OQd", "Qq", "UQq",
    "DQq", "TQq", "QaQq", "QiQq", "SxQq", "SpQq", "OQq", "Sg",
];

/// `1234567` → `1.23M`, `12.5` → `12.5`, beyond the last suffix → `1.5e+180`.
pub fn format_number(value: &Decimal) -> String {
    if *value < Decimal::from(1000u32) {
        return trim_fixed(value.to_fixed(2));
    }
    // value >= 1000 here, so the magnitude exists and is at least 3.
    let magnitude = value.order_of_magnitude().unwrap_or(0);
    let bucket = (magnitude / 3) as usize;
    if bucket >= SUFFIXES.len() {
        return exponential(value);
    }
    let index = bucket.min(SUFFIXES.len() - 1);
    let scaled = value.shift(-3 * index as i64);
    format!("{}{}", trim_fixed(scaled.to_fixed(2)), SUFFIXES[index])
}

/// Two-digit mantissa exponential form with trailing mantissa zeros dropped.
fn exponential(value: &Decimal) -> String {
    let mantissa_digits = value.round_significant(3);
    // Rounding can carry into a new power of ten (9.995e+200 → 1.00e+201).
    let exp = mantissa_digits.order_of_magnitude().unwrap_or(0);
    let mantissa = mantissa_digits.shift(-exp);
    let sign = if exp < 0 { "-" } else { "+" };
    format!("{}e{}{}", trim_fixed(mantissa.to_fixed(2)), sign, exp.abs())
}

/// Strip `\.?0+$` from fixed-point text.
fn trim_fixed(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
