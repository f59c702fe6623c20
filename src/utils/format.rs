//! Display formatting shared by the dashboard pages.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const DEFAULT_CURRENCY: &str = "PKR";

/// Formats an amount in Pakistani rupees, e.g. `150000.0` -> `"PKR 150,000"`.
pub fn format_currency(amount: f64) -> String {
    format_currency_in(amount, DEFAULT_CURRENCY)
}

/// Formats `amount` prefixed by `currency`, with comma thousands separators and
/// at most three fraction digits.
///
/// ```
/// use umrahflex_admin::utils::format::format_currency_in;
/// assert_eq!(format_currency_in(1000.0, "USD"), "USD 1,000");
/// ```
pub fn format_currency_in(amount: f64, currency: &str) -> String {
    format!("{} {}", currency, group_thousands(amount))
}

fn group_thousands(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let formatted = format!("{:.3}", value.abs());
    let (integer_part, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // -0.0004 rounds to zero and should not keep its sign
    let negative = value < 0.0 && (integer_part != "0" || !fraction.is_empty());
    let sign = if negative { "-" } else { "" };

    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}

/// Formats a date or timestamp as `DD Mon YYYY`, e.g. `"2024-03-05"` -> `"05 Mar 2024"`.
/// Returns `"Invalid Date"` when the input cannot be parsed.
pub fn format_date(input: &str) -> String {
    match parse_date(input.trim()) {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|dt| dt.date())
}
