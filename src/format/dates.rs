//! Date/time token replacement.
//!
//! Rewrites `T12(...)`, `T24(...)` and `D(...)` tokens carrying ISO-8601
//! timestamps into customer-friendly strings. Any token whose contents fail
//! validation or parsing is left in place unchanged; a malformed timestamp is
//! never an error.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Timelike};
use regex::Captures;

use crate::parser::patterns::{DATE_RE, OFFSET_RE, T12_RE, T24_RE};

/// Fixed English month abbreviations used for date rendering.
const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Layouts tried in order for timestamps with an explicit numeric offset.
const OFFSET_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%:z", "%Y-%m-%dT%H:%M%:z"];

/// Layouts tried in order for the wall-clock part of Zulu timestamps.
const ZULU_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Which clock face a time token renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clock {
    H12,
    H24,
}

/// A timestamp parsed from a token: the wall-clock fields exactly as written
/// plus the offset they were written in.
struct ParsedTime {
    wall: NaiveDateTime,
    offset: FixedOffset,
    zulu: bool,
}

/// Replace time tokens, then date tokens.
///
/// The three passes run in fixed order: `T12(...)`, `T24(...)`, `D(...)`.
/// `D(...)` is a superset-looking shape and must not consume content already
/// rewritten by the time passes; both a date token and a time token may
/// reference the same instant in the original text.
#[must_use]
pub fn replace_times_then_dates(text: &str) -> String {
    let text = T12_RE.replace_all(text, |caps: &Captures| format_time_token(caps, Clock::H12));
    let text = T24_RE.replace_all(&text, |caps: &Captures| format_time_token(caps, Clock::H24));
    DATE_RE
        .replace_all(&text, |caps: &Captures| format_date_token(caps))
        .into_owned()
}

/// Render one `T12(...)`/`T24(...)` match, or return it untouched.
fn format_time_token(caps: &Captures, clock: Clock) -> String {
    let token = &caps[0];
    let inner = normalize_minus(caps[1].trim());

    if !has_valid_offset(&inner) {
        return token.to_string();
    }
    let Some(parsed) = parse_timestamp(&inner) else {
        return token.to_string();
    };

    let offset_str = render_offset(&parsed);
    match clock {
        Clock::H12 => {
            let (is_pm, hour) = parsed.wall.hour12();
            let meridiem = if is_pm { "PM" } else { "AM" };
            format!("{hour:02}:{:02}{meridiem} {offset_str}", parsed.wall.minute())
        }
        Clock::H24 => format!(
            "{:02}:{:02} {offset_str}",
            parsed.wall.hour(),
            parsed.wall.minute()
        ),
    }
}

/// Render one `D(...)` match, or return it untouched.
///
/// Unlike the time tokens there is no separate offset-syntax check here; the
/// layout list itself is the gate, so a bare `YYYY-MM-DD` date still parses.
fn format_date_token(caps: &Captures) -> String {
    let token = &caps[0];
    let inner = normalize_minus(caps[1].trim());

    let Some(date) = parse_date(&inner) else {
        return token.to_string();
    };

    format!(
        "{:02} {} {}",
        date.day(),
        MONTH_ABBREV[date.month0() as usize],
        date.year()
    )
}

/// Source documents may use the typographic minus (U+2212) in negative
/// offsets; normalize it to the ASCII hyphen before validating or parsing.
fn normalize_minus(inner: &str) -> String {
    inner.replace('\u{2212}', "-")
}

/// Check the offset syntax of a time-token timestamp.
///
/// Acceptable forms are a trailing `Z`/`z` or a trailing `±HH:MM`. A `-`
/// at or before position 10 is a date separator inside `YYYY-MM-DD`, not an
/// offset sign.
fn has_valid_offset(inner: &str) -> bool {
    if inner.ends_with(['Z', 'z']) {
        return true;
    }
    let index = match inner.rfind('+') {
        Some(i) => i,
        None => match inner.rfind('-') {
            Some(i) if i > 10 => i,
            _ => return false,
        },
    };
    OFFSET_RE.is_match(&inner[index..])
}

/// Parse a date-time with explicit offset or Zulu suffix. The first layout
/// that parses wins.
fn parse_timestamp(inner: &str) -> Option<ParsedTime> {
    if let Some(wall_part) = inner.strip_suffix(['Z', 'z']) {
        for layout in ZULU_LAYOUTS {
            if let Ok(wall) = NaiveDateTime::parse_from_str(wall_part, layout) {
                return Some(ParsedTime {
                    wall,
                    offset: FixedOffset::east_opt(0)?,
                    zulu: true,
                });
            }
        }
        return None;
    }

    for layout in OFFSET_LAYOUTS {
        if let Ok(datetime) = DateTime::parse_from_str(inner, layout) {
            return Some(ParsedTime {
                wall: datetime.naive_local(),
                offset: *datetime.offset(),
                zulu: false,
            });
        }
    }
    None
}

/// Parse the timestamp of a `D(...)` token: any time-token form, or a bare
/// `YYYY-MM-DD` as the final fallback.
fn parse_date(inner: &str) -> Option<NaiveDate> {
    if let Some(parsed) = parse_timestamp(inner) {
        return Some(parsed.wall.date());
    }
    NaiveDate::parse_from_str(inner, "%Y-%m-%d").ok()
}

/// Render the display offset: `(+00:00)` for Zulu input, otherwise the
/// parsed numeric offset as `(±HH:MM)`.
fn render_offset(parsed: &ParsedTime) -> String {
    if parsed.zulu {
        return "(+00:00)".to_string();
    }
    let seconds = parsed.offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.abs();
    format!("({sign}{:02}:{:02})", seconds / 3600, (seconds % 3600) / 60)
}
