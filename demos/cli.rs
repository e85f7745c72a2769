//! Command-line interface for colornamer
//!
//! Basic CLI tool for testing color naming functionality

use colornamer::{ColorNamer, NamedColor, NamingConfig};
use std::{env, path::PathBuf, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut hex_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                } else {
                    eprintln!("Error: --config requires a file path");
                    process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if hex_arg.is_none() {
                    hex_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple color arguments provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let hex = match hex_arg {
        Some(hex) => hex,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let namer = match config_path {
        Some(path) => match NamingConfig::from_json_file(&path) {
            Ok(config) => ColorNamer::with_thresholds(config.thresholds),
            Err(error) => {
                eprintln!("Failed to load config: {}", error);
                process::exit(1);
            }
        },
        None => ColorNamer::new(),
    };

    match namer.name_hex(&hex) {
        Ok(named) => print_result(&named),
        Err(error) => {
            eprintln!("Naming failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <hex_color>", program_name);
    eprintln!();
    eprintln!("Name a dominant color sample given as a hex string.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    Load naming thresholds from a JSON file");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} '#C2894E'", program_name);
    eprintln!("  {} --config naming.json ff0080", program_name);
}

fn print_result(named: &NamedColor) {
    // Print JSON to stdout for programmatic use
    match serde_json::to_string_pretty(named) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            println!("{{ \"hex\": \"{}\", \"label\": \"{}\" }}", named.hex, named.label);
        }
    }

    // Print summary to stderr for human reading
    eprintln!();
    eprintln!("Color Naming Summary:");
    eprintln!("  Hex Color: {}", named.hex);
    eprintln!("  Name: {}", named.label);
    eprintln!(
        "  HSV Values: h={:.0}, s={:.1}%, v={:.1}%",
        named.hsv.h, named.hsv.s, named.hsv.v
    );
}
