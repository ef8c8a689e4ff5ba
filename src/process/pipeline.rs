//! The prettifying pipeline.
//!
//! Applies the whitespace, airport and date/time transforms to a whole
//! document in a fixed sequence. The ordering is load-bearing: airport
//! substitution runs before whitespace trimming so substituted multi-word
//! names are not mangled, and trimming runs last so it also normalizes
//! spacing introduced by substitutions.

use crate::format::{
    collapse_blank_lines, convert_control_chars, replace_airport_codes, replace_times_then_dates,
    trim_excess_whitespace,
};
use crate::lookup::AirportLookup;

/// Prettify a raw itinerary document.
///
/// Never fails; unresolvable tokens pass through verbatim. Pure function of
/// (text, lookup) with no shared mutable state across calls.
#[must_use]
pub fn prettify(text: &str, lookup: &AirportLookup) -> String {
    let text = convert_control_chars(text);
    let text = collapse_blank_lines(&text);
    let text = replace_airport_codes(&text, lookup);
    let text = replace_times_then_dates(&text);
    trim_excess_whitespace(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::AirportRecord;

    fn lookup() -> AirportLookup {
        AirportLookup::from_records(vec![AirportRecord {
            name: "Heathrow".to_string(),
            iso_country: "GB".to_string(),
            municipality: "London".to_string(),
            icao_code: "EGLL".to_string(),
            iata_code: "LHR".to_string(),
            coordinates: "51.47, -0.46".to_string(),
        }])
    }

    #[test]
    fn test_all_stages_applied() {
        let input = "Your flight to  #LHR\r\r\rdeparts D(2007-04-05T10:00:00+02:00) at T12(2007-04-05T10:00:00+02:00).";
        let result = prettify(input, &lookup());
        assert_eq!(
            result,
            "Your flight to Heathrow\n\ndeparts 05 Apr 2007 at 10:00AM (+02:00)."
        );
    }

    #[test]
    fn test_trimming_also_normalizes_substituted_text() {
        // Substitution runs before the trim stage, so spacing inside a
        // substituted name is normalized like any other text
        let record = AirportRecord {
            name: "Los  Angeles  International".to_string(),
            iso_country: "US".to_string(),
            municipality: "Los Angeles".to_string(),
            icao_code: "KLAX".to_string(),
            iata_code: "LAX".to_string(),
            coordinates: "33.94, -118.40".to_string(),
        };
        let lookup = AirportLookup::from_records(vec![record]);
        assert_eq!(prettify("to #LAX now", &lookup), "to Los Angeles International now");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(prettify("", &lookup()), "");
        assert_eq!(prettify("\n\n\n", &lookup()), "");
    }

    #[test]
    fn test_plain_text_untouched() {
        let input = "No tokens here, just words.";
        assert_eq!(prettify(input, &lookup()), input);
    }
}
