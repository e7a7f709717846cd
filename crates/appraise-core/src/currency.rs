//! Currency formatting for the Indian market (INR, en-IN grouping).
//!
//! All functions are pure: the same input always renders the same string.

const RUPEE: char = '₹';
const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

/// Format a value as whole rupees with Indian digit grouping.
///
/// Rounds half away from zero and drops all fractional digits:
/// `8500000.0` → `₹85,00,000`, `5666.67` → `₹5,667`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return format!("{RUPEE}NaN");
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{RUPEE}∞");
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!("{sign}{RUPEE}{}", group_indian(&digits))
}

/// Axis tick in lakh: `₹{value / 1e5}L` with the shortest decimal form.
pub fn format_lakh_tick(value: f64) -> String {
    format!("{RUPEE}{}L", value / LAKH)
}

/// Coarse value in crore with two decimals: `₹1.25 Cr`.
pub fn format_crore(value: f64) -> String {
    format!("{RUPEE}{:.2} Cr", value / CRORE)
}

/// Value in lakh with one decimal: `₹85.0 Lac`.
pub fn format_lakh(value: f64) -> String {
    format!("{RUPEE}{:.1} Lac", value / LAKH)
}

/// Insert separators: last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
