//! Command-line color converter
//!
//! Reads one color in any supported notation and prints every representation

use color_ops::{darken, desaturate, hex_to_pound, lighten, saturate, Hsl, Rgb};
use serde::Serialize;
use std::{env, process};

#[derive(Serialize)]
struct Conversion {
    input: String,
    hex: String,
    pound: String,
    packed: u32,
    rgb: Rgb,
    hsl: Hsl,
    darker: String,
    lighter: String,
    saturated: Option<String>,
    desaturated: Option<String>,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut amount = 0.2;
    let mut color_arg = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--amount" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<f64>().ok()) {
                    Some(value) => amount = value,
                    None => {
                        eprintln!("Error: --amount expects a number");
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if color_arg.is_none() {
                    color_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple colors provided");
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

    let input = match color_arg {
        Some(color) => color,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let rgb: Rgb = match input.parse() {
        Ok(rgb) => rgb,
        Err(error) => {
            eprintln!("Conversion failed: {}", error);
            process::exit(1);
        }
    };

    let hex = rgb.to_hex();
    let packed = rgb.to_packed();
    let conversion = Conversion {
        pound: hex_to_pound(&hex),
        packed,
        rgb,
        hsl: rgb.to_hsl(),
        darker: Rgb::from_packed(darken(packed, amount)).to_hex(),
        lighter: Rgb::from_packed(lighten(packed, amount)).to_hex(),
        saturated: saturate(packed, Some(amount * 100.0)),
        desaturated: desaturate(packed, Some(amount * 100.0)),
        hex,
        input,
    };

    match serde_json::to_string_pretty(&conversion) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <color>", program_name);
    eprintln!();
    eprintln!("Convert a color between hex, RGB and HSL notations.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --amount N       Blend fraction for darker/lighter (default: 0.2)");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} '#ff8000'", program_name);
    eprintln!("  {} 0x336699", program_name);
    eprintln!("  {} --amount 0.5 'rgb(12, 34, 56)'", program_name);
}
