//! Small display helpers shared by the page loaders

/// Signed P&L label: `+$12.50` for gains, `$-3.00` for losses
pub fn format_pnl(pnl: f64) -> String {
    let sign = if pnl >= 0.0 { "+" } else { "" };
    format!("{}${:.2}", sign, pnl)
}

/// Fractional price (0.0 - 1.0) as cents with one decimal, e.g. `62.0c`
pub fn format_cents(price: f64) -> String {
    format!("{:.1}c", price * 100.0)
}

/// Round to one decimal place
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Parse a user-typed amount; blank or non-finite input counts as missing
pub fn parse_amount(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    input.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whole-dollar amount with thousands separators, e.g. `1,234,567`
pub fn format_volume(value: f64) -> String {
    let whole = value.round().abs() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0.0 && whole > 0 {
        out.insert(0, '-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pnl() {
        assert_eq!(format_pnl(12.5), "+$12.50");
        assert_eq!(format_pnl(0.0), "+$0.00");
        assert_eq!(format_pnl(-3.0), "$-3.00");
    }

    #[test]
    fn test_cents_and_rounding() {
        assert_eq!(format_cents(0.62), "62.0c");
        assert_eq!(round_tenth(0.62 * 100.0), 62.0);
        assert_eq!(round_tenth(33.333), 33.3);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10"), Some(10.0));
        assert_eq!(parse_amount(" 2.5 "), Some(2.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_format_volume() {
        assert_eq!(format_volume(0.0), "0");
        assert_eq!(format_volume(999.4), "999");
        assert_eq!(format_volume(1234567.0), "1,234,567");
        assert_eq!(format_volume(-1500.0), "-1,500");
    }
}
