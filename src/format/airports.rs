//! Airport-code token replacement.
//!
//! Scans the text for `#IATA` / `##ICAO` tokens (with an optional `*` prefix
//! selecting the city-name query) and substitutes human-readable names from
//! the lookup table. Codes with no table entry are left exactly as written,
//! trailing delimiter included.

use regex::{Captures, Regex};

use crate::lookup::AirportLookup;
use crate::parser::patterns::{IATA_TOKEN_RE, ICAO_TOKEN_RE};

/// Punctuation that may terminate an airport token. Whitespace is stripped
/// alongside these when isolating the code from a match.
const DELIMITERS: &[char] = &['.', ',', ';', '!', '?', ')', '"', '\''];

/// Replace airport-code tokens with airport or city names.
///
/// The ICAO pattern runs across the whole text before the IATA pattern so a
/// leading `##ABCD` is never mis-split into `#` + `#ABC` + `D`.
#[must_use]
pub fn replace_airport_codes(text: &str, lookup: &AirportLookup) -> String {
    let text = substitute_codes(&ICAO_TOKEN_RE, text, lookup);
    substitute_codes(&IATA_TOKEN_RE, &text, lookup)
}

/// Run one token pattern over the text, resolving each match through the
/// lookup table.
fn substitute_codes(pattern: &Regex, text: &str, lookup: &AirportLookup) -> String {
    pattern
        .replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            // Isolate the code from the trailing delimiter character
            let code =
                matched.trim_end_matches(|c: char| c.is_whitespace() || DELIMITERS.contains(&c));

            let replacement = if code.starts_with('*') {
                lookup.city_name(code)
            } else {
                lookup.airport_name(code)
            };

            // A miss resolves to the code itself: leave the match verbatim
            if replacement == code {
                matched.to_string()
            } else {
                // Reattach the original trailing delimiter
                format!("{replacement}{}", &matched[code.len()..])
            }
        })
        .into_owned()
}
