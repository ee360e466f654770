//! Display formatting for amounts and timestamps.
//!
//! All values are purely derived; nothing here touches shared state.

use chrono::{DateTime, Local, NaiveDateTime};

/// Display date format ("Aug 07, 2026 18:30").
const DATE_FORMAT: &str = "%b %d, %Y %H:%M";

/// Formats an amount with two decimals and thousands grouping: `1,234.50`.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Formats an ISO-8601 timestamp for display as "MMM dd, yyyy HH:mm".
///
/// Unparseable or missing timestamps fall back to the current time, matching
/// the row presenter contract.
pub fn format_timestamp(created_at: Option<&str>) -> String {
    created_at
        .and_then(parse_iso8601)
        .unwrap_or_else(Local::now)
        .format(DATE_FORMAT)
        .to_string()
}

/// Parses the backend's ISO-8601 shapes (`2026-08-07T18:30:00.000000Z` and
/// offset variants) into local time.
fn parse_iso8601(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    // Fractional-seconds-without-offset shape
    NaiveDateTime::parse_from_str(raw.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().with_timezone(&Local))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Amounts render with two decimals and thousands grouping.
    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(50.0), "50.00");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(1_000_000.0), "1,000,000.00");
        assert_eq!(format_amount(999.999), "1,000.00");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_format_timestamp_parses_backend_shape() {
        let formatted = format_timestamp(Some("2026-08-07T18:30:00.000000Z"));
        assert!(formatted.contains("2026"));
        assert!(formatted.contains("Aug"));
    }

    /// Garbage timestamps fall back to "now" instead of failing the row.
    #[test]
    fn test_format_timestamp_fallback_to_now() {
        let garbage = format_timestamp(Some("not-a-date"));
        let missing = format_timestamp(None);
        let now_year = Local::now().format("%Y").to_string();
        assert!(garbage.contains(&now_year));
        assert!(missing.contains(&now_year));
    }
}
