//! Date/time helpers for reminder timestamps.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

pub fn now() -> DateTime<Local> {
    Local::now()
}

/// The default reminder timestamp: tomorrow at 9 am local time.
pub fn default_reminder() -> DateTime<Local> {
    let tomorrow = Local::now().date_naive() + chrono::Days::new(1);
    let at_nine = tomorrow.and_hms_opt(9, 0, 0).unwrap_or_default();
    resolve_local(at_nine).unwrap_or_else(Local::now)
}

/// Parse a reminder argument. Accepts "YYYY-MM-DD HH:MM",
/// "YYYY-MM-DDTHH:MM" or the literal "tomorrow" (tomorrow at 9 am).
pub fn parse_reminder(s: &str) -> Option<DateTime<Local>> {
    if s.eq_ignore_ascii_case("tomorrow") {
        return Some(default_reminder());
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()?;

    resolve_local(naive)
}

/// Epoch milliseconds → local timestamp. Returns None for 0 (no reminder).
pub fn from_millis(millis: i64) -> Option<DateTime<Local>> {
    if millis <= 0 {
        return None;
    }
    Local.timestamp_millis_opt(millis).single()
}

pub fn format_reminder(dt: &DateTime<Local>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

fn resolve_local(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    // DST gaps can make a wall-clock time ambiguous or nonexistent; take
    // the earliest valid instant.
    Local.from_local_datetime(&naive).earliest()
}
