//! Amount parsing, rounding and formatting

/// Round half up, toward positive infinity
///
/// `-2.5` rounds to `-2`, unlike [`f64::round`] which rounds half away from zero.
pub fn js_round(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Parse a user-typed amount, treating anything unparseable as zero
pub fn parse_amount(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Rounded percentage of `part` over `whole`, zero when `whole` is not positive
pub fn percent_of(part: f64, whole: f64) -> i64 {
    if whole > 0.0 {
        js_round(part / whole * 100.0) as i64
    } else {
        0
    }
}

/// Format an amount with thousands separators and at most two decimals
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if negative && cents > 0 {
        out.push('-');
    }
    out.push('₹');
    out.push_str(&grouped);
    if frac > 0 {
        let frac = format!("{:02}", frac);
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}
