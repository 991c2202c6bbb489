// Display formatting for currency and dates.

use chrono::NaiveDate;

/// `€850k`: value rounded to the nearest thousand.
pub fn euro_k(value: i64) -> String {
    euro_k_f64(value as f64)
}

pub fn euro_k_f64(value: f64) -> String {
    format!("€{}k", (value / 1000.0).round() as i64)
}

/// `€2,000,000`
pub fn euro_full(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-€{grouped}")
    } else {
        format!("€{grouped}")
    }
}

/// Medium date in the en-IE style, e.g. `15 Nov 2024`.
pub fn medium_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}
