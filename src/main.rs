//! itinerary - Customer-friendly rendering of raw itinerary text

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs::{self, File};
use std::io::BufReader;

use itinerary_prettifier::{parse_args, parse_lookup_csv, prettify, AirportLookup, Result};

fn main() -> Result<()> {
    let args = parse_args();

    // Read the raw itinerary. Input may not be clean UTF-8; decode lossily
    // rather than refusing the document.
    let input_text = match fs::read(&args.input) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => {
            println!("Input not found");
            return Ok(());
        }
    };

    let lookup_file = match File::open(&args.lookup) {
        Ok(file) => file,
        Err(_) => {
            println!("Airport lookup not found");
            return Ok(());
        }
    };
    let records = match parse_lookup_csv(BufReader::new(lookup_file)) {
        Ok(records) => records,
        Err(e) => {
            if args.debug {
                eprintln!("[DEBUG] lookup parse failed: {e}");
            }
            println!("Airport lookup malformed");
            return Ok(());
        }
    };
    let lookup = AirportLookup::from_records(records);
    if args.debug {
        eprintln!("[DEBUG] loaded {} tagged lookup keys", lookup.len());
    }

    let output_text = prettify(&input_text, &lookup);

    // Output is written only once the full transform has succeeded
    if fs::write(&args.output, output_text).is_err() {
        println!("Failed to write output");
        return Ok(());
    }

    if !args.silent {
        eprintln!(
            "Prettified {} -> {}",
            args.input.display(),
            args.output.display()
        );
    }

    Ok(())
}
