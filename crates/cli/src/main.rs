#![deny(unsafe_code)]
//! CLI binary for the hslkit conversion kernel.
//!
//! Subcommands:
//! - `rgb2hsl` / `hsl2rgb` — convert a single triple
//! - `list` — print available backends
//! - `bench` — wall-clock per-call timing of both directions

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use hslkit_backends::BackendKind;
use hslkit_core::{Converter, Hsl, Rgb};
use std::hint::black_box;
use std::process;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "hslkit", about = "RGB/HSL conversion kernel CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an RGB triple to HSL.
    #[command(allow_negative_numbers = true)]
    Rgb2hsl {
        /// Red channel in [0, 1] (or 0-255 with --bytes).
        #[arg(required_unless_present = "hex")]
        r: Option<f64>,

        /// Green channel in [0, 1] (or 0-255 with --bytes).
        #[arg(required_unless_present = "hex")]
        g: Option<f64>,

        /// Blue channel in [0, 1] (or 0-255 with --bytes).
        #[arg(required_unless_present = "hex")]
        b: Option<f64>,

        /// Interpret the channel values on the 0-255 byte scale.
        #[arg(long)]
        bytes: bool,

        /// Hex color string like "#19803c" instead of channel values.
        #[arg(long, conflicts_with_all = ["r", "g", "b", "bytes"])]
        hex: Option<String>,

        /// Conversion backend (sector, classic).
        #[arg(short = 'B', long, default_value = "sector")]
        backend: String,
    },
    /// Convert an HSL triple to RGB.
    #[command(allow_negative_numbers = true)]
    Hsl2rgb {
        /// Hue as a fraction of a full turn in [0, 1].
        h: f64,

        /// Saturation in [0, 1].
        s: f64,

        /// Lightness in [0, 1].
        l: f64,

        /// Conversion backend (sector, classic).
        #[arg(short = 'B', long, default_value = "sector")]
        backend: String,
    },
    /// List available backends.
    List,
    /// Measure per-call conversion time in both directions.
    Bench {
        /// Number of conversions per direction.
        #[arg(short = 'n', long, default_value_t = 1_000_000)]
        iterations: u64,

        /// Conversion backend (sector, classic).
        #[arg(short = 'B', long, default_value = "sector")]
        backend: String,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Rgb2hsl {
            r,
            g,
            b,
            bytes,
            hex,
            backend,
        } => {
            let input = match hex {
                Some(hex) => Rgb::from_hex(&hex).map_err(|e| CliError::Input(e.to_string()))?,
                None => {
                    let (Some(r), Some(g), Some(b)) = (r, g, b) else {
                        return Err(CliError::Input(
                            "expected three channel values or --hex".into(),
                        ));
                    };
                    if bytes {
                        Rgb {
                            r: r / 255.0,
                            g: g / 255.0,
                            b: b / 255.0,
                        }
                    } else {
                        Rgb { r, g, b }
                    }
                }
            };

            let converter = BackendKind::from_name(&backend)?;
            let out = converter.rgb_to_hsl(input)?;

            if cli.json {
                let info = serde_json::json!({
                    "backend": backend,
                    "rgb": { "r": input.r, "g": input.g, "b": input.b },
                    "hsl": { "h": out.h, "s": out.s, "l": out.l },
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("HSL: h={:.10} s={:.10} l={:.10}", out.h, out.s, out.l);
                println!(
                    "     ({:.4} deg, {:.4}%, {:.4}%)",
                    out.h * 360.0,
                    out.s * 100.0,
                    out.l * 100.0
                );
            }
        }
        Command::Hsl2rgb { h, s, l, backend } => {
            let input = Hsl { h, s, l };
            let converter = BackendKind::from_name(&backend)?;
            let out = converter.hsl_to_rgb(input)?;

            if cli.json {
                let info = serde_json::json!({
                    "backend": backend,
                    "hsl": { "h": input.h, "s": input.s, "l": input.l },
                    "rgb": { "r": out.r, "g": out.g, "b": out.b },
                    "hex": out.to_hex(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("RGB: r={:.10} g={:.10} b={:.10}", out.r, out.g, out.b);
                println!(
                    "     ({:.4}, {:.4}, {:.4}) on the 0-255 scale, {}",
                    out.r * 255.0,
                    out.g * 255.0,
                    out.b * 255.0,
                    out.to_hex()
                );
            }
        }
        Command::List => {
            let backends = BackendKind::list_backends();
            if cli.json {
                let info = serde_json::json!({ "backends": backends });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Backends:");
                for name in backends {
                    println!("  {name}");
                }
            }
        }
        Command::Bench {
            iterations,
            backend,
        } => {
            if iterations == 0 {
                return Err(CliError::Input("iterations must be at least 1".into()));
            }
            let converter = BackendKind::from_name(&backend)?;

            let rgb = Rgb {
                r: 25.0 / 255.0,
                g: 60.0 / 255.0,
                b: 128.0 / 255.0,
            };
            let hsl = converter.rgb_to_hsl(rgb)?;

            let start = Instant::now();
            for _ in 0..iterations {
                black_box(converter.rgb_to_hsl(black_box(rgb))?);
            }
            let forward = start.elapsed().as_secs_f64();

            let start = Instant::now();
            for _ in 0..iterations {
                black_box(converter.hsl_to_rgb(black_box(hsl))?);
            }
            let inverse = start.elapsed().as_secs_f64();

            let per_call_ns = |total: f64| total / iterations as f64 * 1e9;

            if cli.json {
                let info = serde_json::json!({
                    "backend": backend,
                    "iterations": iterations,
                    "rgb_to_hsl": {
                        "total_s": forward,
                        "per_call_ns": per_call_ns(forward),
                    },
                    "hsl_to_rgb": {
                        "total_s": inverse,
                        "per_call_ns": per_call_ns(inverse),
                    },
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "rgb_to_hsl: {iterations} calls in {forward:.5} s ({:.1} ns/call)",
                    per_call_ns(forward)
                );
                println!(
                    "hsl_to_rgb: {iterations} calls in {inverse:.5} s ({:.1} ns/call)",
                    per_call_ns(inverse)
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
