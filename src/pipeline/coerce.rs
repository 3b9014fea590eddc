//! Cell-level value coercion. Every coercer degrades to an empty value
//! (zero for document counts) instead of failing, so the normalizer never
//! rejects a row over an unreadable cell.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static CQ_RE: Lazy<Regex> = Lazy::new(|| Regex::new("(?i)cq").unwrap());
static REVISAO_RE: Lazy<Regex> = Lazy::new(|| Regex::new("(?i)revis(ão|ao)?").unwrap());
static BARE_CLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}:\d{2}$").unwrap());
static CLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2}):(\d{2})$").unwrap());

/// Date spellings accepted for the `Data` column, day before month, so an
/// ambiguous `5/3/2024` reads as the 5th of March.
const DATE_FORMATS: [&str; 4] = ["%d/%m/%y", "%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"];

/// Runs `parse` on the trimmed input, falling back to `default` when the
/// text is empty or cannot be interpreted. All cell coercion goes through
/// here so the degrade-instead-of-fail policy stays in one place.
pub fn parse_or_default<T>(value: &str, default: T, parse: impl FnOnce(&str) -> Option<T>) -> T {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return default;
    }
    parse(trimmed).unwrap_or(default)
}

/// Rewrites the activity markers to their canonical casing: any spelling of
/// "cq" becomes `CQ` and any spelling of "revisão"/"revisao" becomes
/// `Revisão`. Both may apply within one value; other text passes through.
pub fn normalize_activity(value: &str) -> String {
    let trimmed = value.trim();
    let pass = CQ_RE.replace_all(trimmed, "CQ");
    REVISAO_RE.replace_all(&pass, "Revisão").into_owned()
}

/// Normalizes a calendar date to `DD/MM/YYYY`, empty when unparseable.
pub fn coerce_date(value: &str) -> String {
    parse_or_default(value, String::new(), |v| {
        parse_day_first(v).map(|d| d.format("%d/%m/%Y").to_string())
    })
}

fn parse_day_first(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            // Datetime cells surface from the workbook reader in ISO form
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Normalizes a time-of-day cell to `HH:MM:SS`, empty when unparseable.
///
/// Duration-style values carry a day offset: a `0 days ` marker means same
/// day and is stripped, a `1 days ` marker means the clock rolled past
/// midnight and is folded onto an overflowed `24:MM:SS` reading instead of
/// a date change. Bare `H:MM` values gain `:00` seconds before validation.
pub fn coerce_time(value: &str) -> String {
    parse_or_default(value, String::new(), |v| {
        if let Some(rest) = v.strip_prefix("1 days ") {
            let (_, minute, second) = split_clock(&pad_seconds(rest.trim()))?;
            return Some(format!("24:{:02}:{:02}", minute, second));
        }
        let bare = v.strip_prefix("0 days ").unwrap_or(v).trim();
        let (hour, minute, second) = split_clock(&pad_seconds(bare))?;
        Some(format!("{:02}:{:02}:{:02}", hour, minute, second))
    })
}

fn pad_seconds(value: &str) -> String {
    if BARE_CLOCK_RE.is_match(value) {
        format!("{}:00", value)
    } else {
        value.to_string()
    }
}

/// Splits a strict `HH:MM:SS` value. Hours up to 24 are accepted so
/// already-overflowed next-day times survive a second normalization pass.
fn split_clock(value: &str) -> Option<(u32, u32, u32)> {
    let caps = CLOCK_RE.captures(value)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let second: u32 = caps[3].parse().ok()?;
    (hour <= 24 && minute < 60 && second < 60).then_some((hour, minute, second))
}

/// Page count as a real number, empty when unparseable.
pub fn coerce_laudas(value: &str) -> Option<f64> {
    parse_or_default(value, None, |v| {
        v.parse::<f64>().ok().filter(|f| f.is_finite()).map(Some)
    })
}

/// Document count as a non-negative integer, zero when unparseable. Zero,
/// not empty: absent counts read as "no documents recorded".
pub fn coerce_num_docs(value: &str) -> u32 {
    parse_or_default(value, 0, |v| {
        v.parse::<u32>().ok().or_else(|| {
            v.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u32)
        })
    })
}
