use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command};
use std::path::Path;

use nmea2gpx::prelude::{default_creator, HemispherePolicy};

pub struct Cli {
    /// arguments passed by user
    matches: ArgMatches,
}

impl Cli {
    pub fn new() -> Self {
        Self {
            matches: {
                Command::new("nmea2gpx")
                    .version(env!("CARGO_PKG_VERSION"))
                    .about("NMEA (RMC + GGA) to GPX converter")
                    .long_about("Reads NMEA sentences, correlates $GPRMC and $GPGGA sentences
by time of day and writes the resulting track as a GPX document.
Set RUST_LOG to obtain traces (on stderr).")
                    .color(ColorChoice::Always)
                    .next_help_heading("Input/Output")
                    .arg(
                        Arg::new("input")
                            .short('i')
                            .long("input")
                            .value_name("FILEPATH")
                            .action(ArgAction::Set)
                            .help("Input NMEA file. Reads from standard input when omitted.
Gzip compressed files (.gz) require the flate2 feature."),
                    )
                    .arg(
                        Arg::new("output")
                            .short('o')
                            .long("output")
                            .value_name("FILEPATH")
                            .action(ArgAction::Set)
                            .help("Output GPX file. Writes to standard output when omitted."),
                    )
                    .next_help_heading("GPX content")
                    .arg(
                        Arg::new("creator")
                            .long("creator")
                            .value_name("NAME")
                            .action(ArgAction::Set)
                            .help("Custom creator attribute"),
                    )
                    .arg(
                        Arg::new("signed")
                            .short('s')
                            .long("signed")
                            .action(ArgAction::SetTrue)
                            .help("Apply hemisphere indicators: South latitudes and West longitudes
become negative. Coordinates are unsigned magnitudes otherwise."),
                    )
                    .get_matches()
            },
        }
    }
    pub fn input_path(&self) -> Option<&Path> {
        self.matches
            .get_one::<String>("input")
            .map(|s| Path::new(s.as_str()))
    }
    pub fn output_path(&self) -> Option<&Path> {
        self.matches
            .get_one::<String>("output")
            .map(|s| Path::new(s.as_str()))
    }
    pub fn creator(&self) -> String {
        self.matches
            .get_one::<String>("creator")
            .cloned()
            .unwrap_or_else(default_creator)
    }
    pub fn hemisphere_policy(&self) -> HemispherePolicy {
        if self.matches.get_flag("signed") {
            HemispherePolicy::Apply
        } else {
            HemispherePolicy::Ignore
        }
    }
}
