//! itinerary-prettifier - Customer-friendly rendering of raw itinerary text
//!
//! A text prettifier that normalizes whitespace, replaces airport-code tokens
//! with human-readable airport/city names, and reformats embedded date/time
//! tokens.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod error;
pub mod format;
pub mod lookup;
pub mod parser;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use error::Result;
pub use lookup::{parse_lookup_csv, AirportLookup, AirportRecord};
pub use process::prettify;
