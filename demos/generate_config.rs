//! Generate a default naming configuration file
//!
//! Creates a JSON config with all default thresholds

use colornamer::NamingConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} naming.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error creating directory: {}", e);
                process::exit(1);
            }
        }
    }

    let config = NamingConfig::default();

    match config.to_json_file(output_path) {
        Ok(_) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!(
                "  Achromatic: s < {:.0}%, white v > {:.0}%, black v < {:.0}%",
                config.thresholds.achromatic_max_saturation,
                config.thresholds.white_min_value,
                config.thresholds.black_max_value
            );
            eprintln!(
                "  Modifiers: Light (v > {:.0}%, s < {:.0}%), Dark (v < {:.0}%)",
                config.thresholds.light_min_value,
                config.thresholds.light_max_saturation,
                config.thresholds.dark_max_value
            );
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
