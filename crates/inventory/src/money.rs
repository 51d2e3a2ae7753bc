//! Currency helpers (Brazilian real, pt-BR formatting).

/// Value of a stock position.
pub fn total_value(price: f64, quantity: i64) -> f64 {
    price * quantity as f64
}

/// Format a value as pt-BR currency: `R$ 1.234,50`.
///
/// Thousands are grouped with `.`, cents separated by `,`, rounded half away
/// from zero to two decimals. Non-finite values render as `R$ -`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "R$ -".to_string();
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let units = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$ {grouped},{fraction:02}")
}

/// Parse a price typed by the user.
///
/// Everything except digits, `.` and `,` is dropped (so `R$ 29,90` works)
/// and the first `,` becomes the decimal point. Returns `None` when nothing
/// numeric is left or the remainder is not a number (e.g. `1.234,50`).
pub fn normalize_price(raw: &str) -> Option<f64> {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    if kept.is_empty() {
        return None;
    }

    kept.replacen(',', ".", 1).parse::<f64>().ok()
}
