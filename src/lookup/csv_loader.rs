//! CSV parsing for the airport lookup.
//!
//! Reads the lookup CSV into [`AirportRecord`]s. Header names are matched
//! case-insensitively after trimming; every required column must be present
//! and every required field non-blank, otherwise loading fails with a
//! loader-level error (the formatting core itself has no error outcomes).

use std::collections::HashMap;
use std::io;

use anyhow::{bail, Context};
use csv::{ReaderBuilder, StringRecord};

use crate::lookup::AirportRecord;
use crate::Result;

/// Columns every lookup CSV must provide.
const REQUIRED_COLUMNS: &[&str] = &[
    "name",
    "iso_country",
    "municipality",
    "icao_code",
    "iata_code",
    "coordinates",
];

/// Parse the airport lookup CSV from a reader.
///
/// Returns one record per data row. Fails if a required column is missing
/// from the header, a row is ragged, or a required field is blank.
pub fn parse_lookup_csv<R: io::Read>(reader: R) -> Result<Vec<AirportRecord>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .context("failed to read header")?
        .clone();
    let column_map = validate_headers(&headers)?;

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.context("error reading record")?;
        records.push(parse_record(&row, &column_map)?);
    }

    Ok(records)
}

/// Map required column names to their positions in the header row.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<&'static str, usize>> {
    let mut column_map = HashMap::new();
    for (index, header) in headers.iter().enumerate() {
        let clean = header.trim().to_lowercase();
        if let Some(&name) = REQUIRED_COLUMNS.iter().find(|&&name| name == clean) {
            column_map.insert(name, index);
        }
    }

    for &required in REQUIRED_COLUMNS {
        if !column_map.contains_key(required) {
            bail!("missing required column: {required}");
        }
    }

    Ok(column_map)
}

/// Build one record from a data row, rejecting blank required fields.
fn parse_record(row: &StringRecord, column_map: &HashMap<&'static str, usize>) -> Result<AirportRecord> {
    let field = |name: &'static str| -> Result<String> {
        let index = column_map[name];
        let value = row.get(index).map_or("", str::trim);
        if value.is_empty() {
            bail!("blank field in required column: {name}");
        }
        Ok(value.to_string())
    };

    Ok(AirportRecord {
        name: field("name")?,
        iso_country: field("iso_country")?,
        municipality: field("municipality")?,
        icao_code: field("icao_code")?,
        iata_code: field("iata_code")?,
        coordinates: field("coordinates")?,
    })
}
