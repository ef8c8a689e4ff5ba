//! Airport lookup table construction and queries.
//!
//! This module provides the lookup side of the rewriting pipeline:
//! - [`record`]: The [`AirportRecord`] loaded from one CSV data row
//! - [`table`]: The [`AirportLookup`] tagged-key table and its queries
//! - [`csv_loader`]: CSV parsing and validation producing records
//!
//! The table is built once at startup and never mutated afterward; the
//! formatting passes only read from it.

pub mod csv_loader;
pub mod record;
pub mod table;

pub use csv_loader::parse_lookup_csv;
pub use record::AirportRecord;
pub use table::AirportLookup;
