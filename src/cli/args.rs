//! CLI argument parsing and configuration.

use std::io;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
pub struct CliConfig {
    /// Override for the wall-clock hour used by the "right now" section
    pub hour: Option<i32>,
    /// Print only the recommendation for this genre
    pub genre: Option<String>,
    /// Emit the catalog as JSON instead of the formatted demo
    pub json: bool,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("inkmood - Color psychology theme advisor for writers");
    eprintln!();
    eprintln!("Usage: inkmood [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --hour <N>         Use hour N (0-23) instead of the current local time");
    eprintln!("  --genre <NAME>     Print only the recommendation for one writing genre");
    eprintln!("  --json             Emit themes, genre map, and time rules as JSON");
    eprintln!("  -h, --help         Show this help message");
    eprintln!("  -V, --version      Show version");
    eprintln!();
    eprintln!("Genres:");
    eprintln!("  Fiction, Non-Fiction, Romance, Mystery/Thriller, Science Fiction,");
    eprintln!("  Memoir/Biography, Academic/Technical, Poetry/Creative");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  inkmood                      # Full demo with the current time");
    eprintln!("  inkmood --hour 22            # See the night-writing recommendation");
    eprintln!("  inkmood --genre Romance      # One genre only");
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut hour: Option<i32> = None;
    let mut genre: Option<String> = None;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("inkmood {}", VERSION);
            std::process::exit(0);
        } else if arg == "--json" {
            json = true;
            i += 1;
        } else if arg == "--hour" {
            i += 1;
            if i >= args.len() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Missing value for --hour",
                ));
            }
            hour = Some(args[i].parse().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid hour value: {}", args[i]),
                )
            })?);
            i += 1;
        } else if arg == "--genre" {
            i += 1;
            if i >= args.len() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Missing value for --genre",
                ));
            }
            genre = Some(args[i].clone());
            i += 1;
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(CliConfig { hour, genre, json })
}
