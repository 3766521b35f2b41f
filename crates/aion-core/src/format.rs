//! Number formatting for on-page figures.

/// Format with comma thousands separators and at most three fraction
/// digits, trailing zeros dropped: `1400.0` → `"1,400"`, `99.9` → `"99.9"`.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    push_grouped(&mut out, int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Whole currency amount with thousands separators.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    push_grouped(&mut out, &digits);
    out
}

fn push_grouped(out: &mut String, digits: &str) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integers() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(24.0), "24");
        assert_eq!(group_thousands(1400.0), "1,400");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
    }

    #[test]
    fn keeps_short_fractions() {
        assert_eq!(group_thousands(99.9), "99.9");
        assert_eq!(group_thousands(4.8), "4.8");
        assert_eq!(group_thousands(0.2), "0.2");
        assert_eq!(group_thousands(1.23456), "1.235");
    }

    #[test]
    fn negative_values() {
        assert_eq!(group_thousands(-1500.5), "-1,500.5");
        assert_eq!(group_thousands(-0.0001), "0");
    }

    #[test]
    fn amounts() {
        assert_eq!(format_amount(850_000_000), "850,000,000");
        assert_eq!(format_amount(1_700_000_000), "1,700,000,000");
        assert_eq!(format_amount(999), "999");
    }
}
