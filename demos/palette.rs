//! Generate random palettes
//!
//! Uses the defaults, or a JSON config written with `--write-config`

use color_ops::{hex_to_pound, PaletteConfig};
use rand::{rngs::StdRng, SeedableRng};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut write_path = None;
    let mut seed = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "--write-config" | "--seed" if i + 1 >= args.len() => {
                eprintln!("Error: {} expects a value", args[i]);
                process::exit(1);
            }
            "--config" => {
                config_path = Some(args[i + 1].clone());
                i += 1;
            }
            "--write-config" => {
                write_path = Some(args[i + 1].clone());
                i += 1;
            }
            "--seed" => match args[i + 1].parse::<u64>() {
                Ok(value) => {
                    seed = Some(value);
                    i += 1;
                }
                Err(_) => {
                    eprintln!("Error: --seed expects an integer");
                    process::exit(1);
                }
            },
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    if let Some(path) = write_path {
        let output_path = Path::new(&path);
        match PaletteConfig::default().to_json_file(output_path) {
            Ok(()) => eprintln!("Configuration saved to {}", output_path.display()),
            Err(e) => {
                eprintln!("Error saving config: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let config = match config_path {
        Some(path) => match PaletteConfig::from_json_file(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                process::exit(1);
            }
        },
        None => PaletteConfig::default(),
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Balanced:");
    for _ in 0..config.golden_ratio.count {
        println!("  {}", hex_to_pound(&config.random(&mut rng)));
    }

    println!("HSL:");
    for _ in 0..config.golden_ratio.count {
        println!("  {}", hex_to_pound(&config.random_hsl(&mut rng)));
    }

    println!("Golden ratio:");
    for color in config.golden_ratio(&mut rng) {
        println!("  {}", hex_to_pound(&color));
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS]", program_name);
    eprintln!();
    eprintln!("Print balanced, HSL and golden ratio palettes.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE        Read palette settings from a JSON file");
    eprintln!("  --write-config FILE  Write the default settings and exit");
    eprintln!("  --seed N             Seed the generator for a repeatable palette");
    eprintln!("  --help, -h           Show this help message");
}
