#![forbid(unsafe_code)]

//! Display formatting for amounts and timestamps.
//!
//! Shared by the financial builders and the `Amount`/`Time` renderers so
//! both surfaces print the same strings. The currency policy is fixed:
//! symbol prefix, thousands grouping, zero fractional digits.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// A timestamp string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeParseError {
    pub input: String,
}

impl core::fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unparseable timestamp `{}`", self.input)
    }
}

impl std::error::Error for TimeParseError {}

/// Symbol for an ISO 4217 code, for the currencies the tools deal in.
#[must_use]
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "NGN" => Some("\u{20a6}"),
        "GHS" => Some("GH\u{20b5}"),
        "KES" => Some("KSh"),
        "USD" => Some("$"),
        "ZAR" => Some("R"),
        "EUR" => Some("\u{20ac}"),
        "GBP" => Some("\u{a3}"),
        _ => None,
    }
}

/// Format a monetary amount with its currency symbol and no fractional
/// digits: `150000.0` NGN becomes `₦150,000`.
///
/// Unknown codes fall back to `CODE 150,000`.
#[must_use]
pub fn format_currency(amount: f64, currency: &str) -> String {
    let grouped = format_amount_plain(amount);
    match currency_symbol(currency) {
        Some(symbol) => format!("{symbol}{grouped}"),
        None => format!("{currency} {grouped}"),
    }
}

/// Group an amount's digits without any currency marker, rounding away
/// the fractional part: `1234567.5` becomes `1,234,568`.
#[must_use]
pub fn format_amount_plain(amount: f64) -> String {
    let rounded = amount.abs().round();
    // Beyond integer-precise f64 range the grouping is meaningless anyway.
    let whole = if rounded >= 9.2e18 {
        i64::MAX
    } else {
        rounded as i64
    };
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0.0 && whole != 0 {
        out.push('-');
    }
    let bytes = digits.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

/// Parse an RFC 3339 datetime, a bare `YYYY-MM-DDTHH:MM:SS`, or a bare
/// `YYYY-MM-DD` date into UTC.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, TimeParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0).ok_or_else(|| TimeParseError {
            input: input.to_string(),
        })?;
        return Ok(Utc.from_utc_datetime(&naive));
    }
    Err(TimeParseError {
        input: input.to_string(),
    })
}

/// `Mar 5, 2026, 02:30 PM` — the full human-readable pattern.
pub fn format_date(input: &str) -> Result<String, TimeParseError> {
    let dt = parse_timestamp(input)?;
    Ok(dt.format("%b %-d, %Y, %I:%M %p").to_string())
}

/// `Mar 5, 2026` — date only.
pub fn format_date_short(input: &str) -> Result<String, TimeParseError> {
    let dt = parse_timestamp(input)?;
    Ok(dt.format("%b %-d, %Y").to_string())
}

/// `02:30 PM` — time of day only.
pub fn format_time_of_day(input: &str) -> Result<String, TimeParseError> {
    let dt = parse_timestamp(input)?;
    Ok(dt.format("%I:%M %p").to_string())
}

/// Coarse relative phrasing against `now`: `just now`, `5m ago`,
/// `3h ago`, `2d ago`, and the short date beyond a week. Future
/// timestamps read `in 5m` and so on.
pub fn format_relative(input: &str, now: DateTime<Utc>) -> Result<String, TimeParseError> {
    let dt = parse_timestamp(input)?;
    let (delta, past) = if dt <= now {
        (now - dt, true)
    } else {
        (dt - now, false)
    };
    let seconds = delta.num_seconds();
    let phrase = if seconds < 60 {
        return Ok(if past { "just now".into() } else { "in a moment".into() });
    } else if seconds < 3600 {
        format!("{}m", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h", seconds / 3600)
    } else if seconds < 7 * 86_400 {
        format!("{}d", seconds / 86_400)
    } else {
        return format_date_short(input);
    };
    Ok(if past {
        format!("{phrase} ago")
    } else {
        format!("in {phrase}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naira_grouping_no_fraction() {
        assert_eq!(format_currency(150_000.0, "NGN"), "\u{20a6}150,000");
        assert_eq!(format_currency(1_250_000.75, "NGN"), "\u{20a6}1,250,001");
    }

    #[test]
    fn other_symbols_and_fallback() {
        assert_eq!(format_currency(500.0, "USD"), "$500");
        assert_eq!(format_currency(500.0, "GHS"), "GH\u{20b5}500");
        assert_eq!(format_currency(500.0, "XXX"), "XXX 500");
    }

    #[test]
    fn plain_grouping() {
        assert_eq!(format_amount_plain(0.0), "0");
        assert_eq!(format_amount_plain(999.0), "999");
        assert_eq!(format_amount_plain(1_000.0), "1,000");
        assert_eq!(format_amount_plain(1_234_567.5), "1,234,568");
        assert_eq!(format_amount_plain(-42_000.0), "-42,000");
    }

    #[test]
    fn absolute_date_formats() {
        assert_eq!(
            format_date("2026-03-05T14:30:00Z").unwrap(),
            "Mar 5, 2026, 02:30 PM"
        );
        assert_eq!(format_date_short("2026-03-05").unwrap(), "Mar 5, 2026");
        assert_eq!(format_time_of_day("2026-03-05T09:05:00Z").unwrap(), "09:05 AM");
    }

    #[test]
    fn bad_timestamp_is_an_error() {
        let err = format_date("next tuesday").unwrap_err();
        assert_eq!(err.input, "next tuesday");
    }

    #[test]
    fn relative_buckets() {
        let now = parse_timestamp("2026-03-05T12:00:00Z").unwrap();
        assert_eq!(
            format_relative("2026-03-05T11:59:40Z", now).unwrap(),
            "just now"
        );
        assert_eq!(format_relative("2026-03-05T11:10:00Z", now).unwrap(), "50m ago");
        assert_eq!(format_relative("2026-03-05T06:00:00Z", now).unwrap(), "6h ago");
        assert_eq!(format_relative("2026-03-02T12:00:00Z", now).unwrap(), "3d ago");
        assert_eq!(format_relative("2026-03-05T13:30:00Z", now).unwrap(), "in 1h");
        assert_eq!(
            format_relative("2025-12-01T00:00:00Z", now).unwrap(),
            "Dec 1, 2025"
        );
    }
}
