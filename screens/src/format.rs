//! Display formatting for prices.

/// Formats a price with thousands separators, at most three fraction digits,
/// and the won suffix: `1500.0` becomes `"1,500원"`.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "-".to_string();
    }
    let rounded = (price * 1000.0).round() / 1000.0;
    let text = rounded.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut out = String::with_capacity(text.len() + digits.len() / 3 + 4);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out.push('원');
    out
}
