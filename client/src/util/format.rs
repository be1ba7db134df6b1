//! Display formatting for plot details and viewer chrome.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group the integer part in threes and keep up to two decimals, trimming zeros.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_owned();
    }
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let frac = frac_part.trim_end_matches('0');
    let sign = if rounded < 0.0 { "-" } else { "" };
    if frac.is_empty() { format!("{sign}{grouped}") } else { format!("{sign}{grouped}.{frac}") }
}

/// Price cell text; missing prices read "On request".
#[must_use]
pub fn format_price(price: Option<f64>) -> String {
    price.map_or_else(|| "On request".to_owned(), format_number)
}

/// Area cell text in square feet.
#[must_use]
pub fn format_area(area: Option<f64>) -> String {
    area.map_or_else(|| "—".to_owned(), |a| format!("{} sq ft", format_number(a)))
}

/// Camera zoom as a whole percentage, e.g. `1.5` → `150`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn zoom_percent(zoom: f64) -> u32 {
    if zoom.is_finite() && zoom > 0.0 { (zoom * 100.0).round() as u32 } else { 0 }
}
