//! Command-line interface for itinerary-prettifier.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Itinerary text file to prettify
    pub input: PathBuf,

    /// File the prettified output is written to
    pub output: PathBuf,

    /// Airport lookup CSV path
    pub lookup: PathBuf,

    /// Silent mode (no status output)
    pub silent: bool,

    /// Enable debug output
    pub debug: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("itinerary")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Fred Jones")
        .about("Prettifies plain-text flight itineraries for customer display")
        .override_usage("itinerary ./input.txt ./output.txt ./airport-lookup.csv")
        .arg(
            Arg::new("input")
                .help("Itinerary text file to prettify")
                .value_name("INPUT")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .help("File the prettified output is written to")
                .value_name("OUTPUT")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("lookup")
                .help("Airport lookup CSV")
                .value_name("LOOKUP")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (suppress the status line)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Extract a CliArgs struct from parsed matches
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        input: matches
            .get_one::<PathBuf>("input")
            .expect("input is required")
            .clone(),
        output: matches
            .get_one::<PathBuf>("output")
            .expect("output is required")
            .clone(),
        lookup: matches
            .get_one::<PathBuf>("lookup")
            .expect("lookup is required")
            .clone(),
        silent: matches.get_flag("silent"),
        debug: matches.get_flag("debug"),
    }
}
