//! Number formatting for tables and chart labels.

/// `1234567.891` with 2 decimals becomes `1,234,567.89`.
pub fn with_separators(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // Rounding can turn a tiny negative into "0.00".
    let is_zero = formatted.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Dollar amount with separators, sign before the `$`.
pub fn currency(value: f64, decimals: usize) -> String {
    let body = with_separators(value, decimals);
    match body.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None if body == "N/A" => body,
        None => format!("${body}"),
    }
}

pub fn currency_or_na(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| currency(v, decimals))
}

pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Short axis label: `1.2M`, `350k`, `-40`.
pub fn compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.0}k", value / 1e3)
    } else {
        format!("{value:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        assert_eq!(with_separators(0.0, 0), "0");
        assert_eq!(with_separators(999.0, 0), "999");
        assert_eq!(with_separators(1000.0, 0), "1,000");
        assert_eq!(with_separators(1234567.891, 2), "1,234,567.89");
        assert_eq!(with_separators(-550_000_000.0, 0), "-550,000,000");
        assert_eq!(with_separators(-0.001, 2), "0.00");
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(250_000_000.0, 0), "$250,000,000");
        assert_eq!(currency(-1234.5, 2), "-$1,234.50");
        assert_eq!(currency(f64::NAN, 2), "N/A");
    }

    #[test]
    fn test_currency_or_na() {
        assert_eq!(currency_or_na(None, 2), "N/A");
        assert_eq!(currency_or_na(Some(500_000.0), 2), "$500,000.00");
    }

    #[test]
    fn test_percent_and_compact() {
        assert_eq!(percent(88.6123), "88.6%");
        assert_eq!(compact(6_000_000.0), "6.0M");
        assert_eq!(compact(-1000.0), "-1k");
        assert_eq!(compact(2.5e9), "2.5B");
        assert_eq!(compact(42.0), "42");
    }
}
