/// Regex patterns for itinerary token syntax
///
/// All patterns are compiled once at startup using `LazyLock`.
use std::sync::LazyLock;

use regex::Regex;

// ===== AIRPORT CODE TOKENS =====

// An airport token is an optional `*` (city-name query), one or two `#`
// characters, and an uppercase code. The right boundary must be whitespace,
// end of input, or common punctuation, so a code is never matched as a
// substring of a longer alphanumeric run. The delimiter is part of the match
// and is reattached after substitution.

/// ICAO-style token: `##ABCD` or `*##ABCD` (3-4 uppercase letters).
///
/// Must be applied before [`IATA_TOKEN_RE`] so a leading `##ABCD` is never
/// consumed as `#` + `#ABC` + stray `D`.
pub static ICAO_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\*?##[A-Z]{3,4})(?:\s|$|\.|,|;|!|\?|\)|"|')"#).unwrap());

/// IATA-style token: `#ABC` or `*#ABC` (exactly 3 uppercase letters).
pub static IATA_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\*?#[A-Z]{3})(?:\s|$|\.|,|;|!|\?|\)|"|')"#).unwrap());

// ===== DATE/TIME TOKENS =====

// The inner text is everything up to the first closing parenthesis; whether
// it is a parseable timestamp is decided by the date formatter, not here.

/// 12-hour time token: `T12(<iso8601>)`.
pub static T12_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"T12\(([^)]+)\)").unwrap());

/// 24-hour time token: `T24(<iso8601>)`.
pub static T24_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"T24\(([^)]+)\)").unwrap());

/// Date token: `D(<iso8601>)`. Applied after the time-token passes.
pub static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"D\(([^)]+)\)").unwrap());

/// Numeric UTC offset suffix: `±HH:MM` with hours 00-23 and minutes 00-59.
pub static OFFSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-](?:[01][0-9]|2[0-3]):[0-5][0-9]$").unwrap());

// ===== WHITESPACE =====

/// Run of interior spaces/tabs, collapsed to a single space when trimming.
pub static WS_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iata_token() {
        assert!(IATA_TOKEN_RE.is_match("#LHR "));
        assert!(IATA_TOKEN_RE.is_match("#LHR"));
        assert!(IATA_TOKEN_RE.is_match("*#LAX,"));
        assert!(IATA_TOKEN_RE.is_match("#JFK."));
        // Lowercase codes are not tokens
        assert!(!IATA_TOKEN_RE.is_match("#lhr "));
        // A fourth letter breaks the right boundary
        assert!(!IATA_TOKEN_RE.is_match("#LHRX"));
    }

    #[test]
    fn test_icao_token() {
        assert!(ICAO_TOKEN_RE.is_match("##EGLL "));
        assert!(ICAO_TOKEN_RE.is_match("*##KJFK"));
        assert!(ICAO_TOKEN_RE.is_match("##EGLL?"));
        // Three letters are allowed by the ICAO-style pattern
        assert!(ICAO_TOKEN_RE.is_match("##EGL "));
        // Five uppercase letters cannot satisfy the boundary
        assert!(!ICAO_TOKEN_RE.is_match("##EGLLX"));
    }

    #[test]
    fn test_icao_token_captures_code_without_delimiter() {
        let caps = ICAO_TOKEN_RE.captures("fly ##EGLL, then").unwrap();
        assert_eq!(&caps[1], "##EGLL");
        assert_eq!(&caps[0], "##EGLL,");
    }

    #[test]
    fn test_time_tokens() {
        assert!(T12_RE.is_match("T12(2007-04-05T10:00:00Z)"));
        assert!(T24_RE.is_match("T24(2007-04-05T10:00:00+02:00)"));
        assert!(!T12_RE.is_match("T12()"));
        // Inner capture stops at the first closing parenthesis
        let caps = T12_RE.captures("T12(abc)def)").unwrap();
        assert_eq!(&caps[1], "abc");
    }

    #[test]
    fn test_date_token() {
        assert!(DATE_RE.is_match("D(2007-04-05)"));
        assert!(DATE_RE.is_match("D(not-a-date)"));
        assert!(!DATE_RE.is_match("D()"));
    }

    #[test]
    fn test_offset_suffix() {
        assert!(OFFSET_RE.is_match("+02:00"));
        assert!(OFFSET_RE.is_match("-23:59"));
        assert!(OFFSET_RE.is_match("+00:00"));
        assert!(!OFFSET_RE.is_match("+24:00"));
        assert!(!OFFSET_RE.is_match("-02:60"));
        assert!(!OFFSET_RE.is_match("+2:00"));
        assert!(!OFFSET_RE.is_match("02:00"));
    }

    #[test]
    fn test_ws_run() {
        assert_eq!(WS_RUN_RE.replace_all("a  \t b", " "), "a b");
    }
}
