//! Fill command implementation.
//!
//! Hachure-fills every shape of an SVG document and outlines it.

use std::time::Instant;

use sketchpath::extract_polygons_from_svg;

use super::common::{CliError, CommonArgs, read_input, write_output};
use super::output::{StyledDrawable, extract_viewbox, render};

/// Execute the fill command.
pub fn cmd_fill(args: &[String]) -> Result<(), CliError> {
    let args = CommonArgs::parse(args)?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let svg_path = args
        .single("SVG file (use '-' for stdin)")
        .map_err(|err| CliError::Usage(format!("{err}\nUsage: sketchpath fill <input.svg> [options]")))?;
    let svg_content = read_input(svg_path)?;
    let polygons = extract_polygons_from_svg(&svg_content)?;
    tracing::info!(polygons = polygons.len(), "loaded shapes");

    let options = args.draw_options()?;
    let (seed, mut sketch) = args.builder();
    let fill_weight = options.resolved_fill_weight();

    let start = Instant::now();
    let mut drawables = Vec::with_capacity(polygons.len() * 2);
    for polygon in &polygons {
        let fill = sketch.hachure_fill_shape(polygon, &options);
        drawables.push(StyledDrawable::new(fill, fill_weight));

        if let Some(outline) = sketch.polygon(&polygon.outer, &options) {
            drawables.push(StyledDrawable::new(outline, options.stroke_width));
        }
    }

    let ops: usize = drawables.iter().map(|d| d.drawable.len()).sum();
    tracing::info!(
        shapes = polygons.len(),
        ops,
        elapsed = ?start.elapsed(),
        gap = options.resolved_hachure_gap(),
        "generated fills"
    );

    let output = render(args.format, seed, &drawables, extract_viewbox(&svg_content))?;
    write_output(args.output.as_ref(), &output)
}

fn print_usage() {
    eprintln!("Usage: sketchpath fill <input.svg> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <file>     Output file (default: stdout)");
    eprintln!("  -g, --gap <n>           Hachure line spacing (default: 4 x stroke width)");
    eprintln!("  -a, --angle <deg>       Hachure angle (default: -41)");
    eprintln!("  --fill-weight <n>       Hachure stroke width (default: stroke width / 2)");
    eprintln!("  --stroke-width <n>      Outline stroke width (default: 1.0)");
    eprintln!("  --roughness <n>         Roughness (default: 1.0)");
    eprintln!("  --bowing <n>            Bowing (default: 1.0)");
    eprintln!("  --seed <n>              Random seed (default: random, logged)");
    eprintln!("  --config <file>         YAML or JSON drawing options");
    eprintln!("  -f, --format <fmt>      Output format: svg or json (default: svg)");
    eprintln!();
    eprintln!("Use '-' as input to read from stdin");
}
