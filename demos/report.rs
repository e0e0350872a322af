//! Prints today's solar events.
//!
//! ```text
//! cargo run --example report -- [LATITUDE LONGITUDE]
//! ```
//!
//! Longitude is east-positive.  Without arguments the built-in default
//! location is used.

use std::env;
use std::process::ExitCode;

use sunriseset::{Location, TwilightReport};

fn parse_location(args: &[String]) -> Result<Location, String> {
    match args {
        [] => Ok(Location::DEFAULT),
        [latitude, longitude] => {
            let latitude: f64 = latitude
                .parse()
                .map_err(|e| format!("bad latitude {latitude:?}: {e}"))?;
            let longitude: f64 = longitude
                .parse()
                .map_err(|e| format!("bad longitude {longitude:?}: {e}"))?;
            Location::new(latitude, longitude).map_err(|e| e.to_string())
        }
        _ => Err("usage: report [LATITUDE LONGITUDE]".to_string()),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let location = match parse_location(&args) {
        Ok(location) => location,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match TwilightReport::today(location) {
        Ok(report) => {
            println!(
                "{} at {:.4}°, {:.4}° (sunriseset {})",
                report.date(),
                location.latitude(),
                location.longitude(),
                sunriseset::VERSION
            );
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
