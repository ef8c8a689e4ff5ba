//! Airport data loaded from the lookup CSV.

/// One airport from the lookup CSV.
///
/// All fields are required non-blank at load time and immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportRecord {
    /// Full airport name (e.g. "Heathrow Airport")
    pub name: String,

    /// ISO 3166-1 country code
    pub iso_country: String,

    /// City the airport serves
    pub municipality: String,

    /// 4-letter ICAO code
    pub icao_code: String,

    /// 3-letter IATA code
    pub iata_code: String,

    /// Latitude/longitude pair as given in the CSV
    pub coordinates: String,
}
