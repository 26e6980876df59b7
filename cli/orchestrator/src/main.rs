//! SMD CLI
//!
//! This binary builds Service Mapping Descriptions from method signature
//! files and manages the descriptor cache they are stored in.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::env;
use std::path::Path;

use config::Config;
use smd_cli::{flag_value, run_build, run_clear, run_show, CliError};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") || args.len() < 2 {
        print_help();
        return;
    }

    let config = match Config::load_or_default(flag_value(&args, "--config").map(Path::new)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    logging::init(&config.logging.level, config.logging.file.as_deref());

    let result = match args[1].as_str() {
        "build" => run_build(&args, &config).map(|text| println!("{}", text)),
        "show" => run_show(&args, &config).map(|text| println!("{}", text)),
        "clear" => run_clear(&args, &config).map(|location| {
            println!("Deleted cached SMD at {}", location.display());
        }),
        other => Err(CliError::Usage(format!("Unknown subcommand '{}'", other))),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if matches!(e, CliError::Usage(_)) {
            eprintln!("Use 'smd --help' for usage information");
        }
        std::process::exit(1);
    }
}

fn print_help() {
    println!("smd");
    println!();
    println!("USAGE:");
    println!("    smd [SUBCOMMAND] [FLAGS]");
    println!();
    println!("SUBCOMMANDS:");
    println!("    build                         Build an SMD from method signatures and cache it");
    println!("    show                          Print the cached SMD");
    println!("    clear                         Delete the cached SMD");
    println!("FLAGS:");
    println!("    --input <file>                JSON array of method signatures (build) [REQUIRED]");
    println!("    --cache <path>                Cache location (defaults to [cache].location)");
    println!("    --namespace <ns>              Prefix service names with '<ns>.' (build)");
    println!("    --aliases <file>              Extra native-to-SMD type aliases as JSON (build)");
    println!("    --document                    Print the full SMD 2.0 document (build, show)");
    println!("    --config <file>               Config file (defaults to the user config dir)");
    println!("    --help, -h                    Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    smd build --input methods.json --namespace calc --cache /tmp/calc.smd.json");
    println!("    smd show --cache /tmp/calc.smd.json --document");
}
