//! sketchpath - CLI for hand-drawn path generation
//!
//! Usage:
//!   sketchpath line X1 Y1 X2 Y2          Draw a sketchy line
//!   sketchpath polygon "x,y x,y ..."     Draw a closed polygon
//!   sketchpath rect X Y W H              Draw a rectangle
//!   sketchpath ellipse CX CY W H         Draw an ellipse
//!   sketchpath curve "x,y x,y ..."       Draw a smooth curve
//!   sketchpath fill <svg>                Hachure-fill the shapes of an SVG

use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod cli;
use cli::{CliError, Primitive, cmd_draw, cmd_fill};

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("sketchpath");

    let result = match args.get(1).map(String::as_str) {
        Some("fill") => cmd_fill(&args[2..]),
        Some("help" | "--help" | "-h") | None => {
            print_usage(program);
            return ExitCode::SUCCESS;
        }
        Some(name) => match Primitive::from_name(name) {
            Some(primitive) => cmd_draw(primitive, &args[2..]),
            None => Err(CliError::Usage(format!("Unknown command: {name}"))),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            if matches!(err, CliError::Usage(_)) {
                eprintln!("Run '{program} help' for usage.");
            }
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout stays clean for SVG/JSON. `RUST_LOG` overrides
/// the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <command> [args] [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  line X1 Y1 X2 Y2          Draw a sketchy line");
    eprintln!("  polygon \"x,y x,y ...\"     Draw a closed polygon");
    eprintln!("  rect X Y W H              Draw a rectangle");
    eprintln!("  ellipse CX CY W H         Draw an ellipse");
    eprintln!("  curve \"x,y x,y ...\"       Draw a smooth curve through the points");
    eprintln!("  fill <svg>                Hachure-fill and outline every shape in an SVG");
    eprintln!();
    eprintln!("Common options:");
    eprintln!("  --seed <n>                Random seed (default: random, logged)");
    eprintln!("  --config <file>           YAML or JSON drawing options");
    eprintln!("  --roughness <n>           Roughness (default: 1.0)");
    eprintln!("  --bowing <n>              Bowing (default: 1.0)");
    eprintln!("  -g, --gap <n>             Hachure gap (fill only)");
    eprintln!("  -a, --angle <deg>         Hachure angle (fill only)");
    eprintln!("  -f, --format svg|json     Output format (default: svg)");
    eprintln!("  -o, --output <file>       Output file (default: stdout)");
    eprintln!();
    eprintln!("Set RUST_LOG=info (or debug) for progress logging.");
}
