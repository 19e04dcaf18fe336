//! Single-primitive commands: `line`, `polygon`, `rect`, `ellipse`, `curve`.

use sketchpath::{Drawable, Point};

use super::common::{CliError, CommonArgs, parse_points, write_output};
use super::output::{StyledDrawable, render};

/// Which primitive a draw command produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Line,
    Polygon,
    Rect,
    Ellipse,
    Curve,
}

impl Primitive {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "line" => Some(Primitive::Line),
            "polygon" => Some(Primitive::Polygon),
            "rect" | "rectangle" => Some(Primitive::Rect),
            "ellipse" => Some(Primitive::Ellipse),
            "curve" => Some(Primitive::Curve),
            _ => None,
        }
    }

    fn usage(self) -> &'static str {
        match self {
            Primitive::Line => "sketchpath line X1 Y1 X2 Y2 [options]",
            Primitive::Polygon => "sketchpath polygon \"x,y x,y x,y ...\" [options]",
            Primitive::Rect => "sketchpath rect X Y WIDTH HEIGHT [options]",
            Primitive::Ellipse => "sketchpath ellipse CX CY WIDTH HEIGHT [options]",
            Primitive::Curve => "sketchpath curve \"x,y x,y x,y ...\" [options]",
        }
    }
}

/// Execute a primitive command.
pub fn cmd_draw(primitive: Primitive, args: &[String]) -> Result<(), CliError> {
    let args = CommonArgs::parse(args)?;
    if args.help {
        print_usage(primitive);
        return Ok(());
    }

    let options = args.draw_options()?;
    let (seed, mut sketch) = args.builder();

    let drawable = match primitive {
        Primitive::Line => {
            let [x1, y1, x2, y2] = args.numbers(["X1", "Y1", "X2", "Y2"])?;
            sketch.line(Point::new(x1, y1), Point::new(x2, y2), &options)
        }
        Primitive::Polygon => {
            let points = point_list(&args, primitive)?;
            sketch
                .polygon(&points, &options)
                .ok_or_else(|| CliError::Usage("a polygon needs at least 2 points".to_string()))?
        }
        Primitive::Rect => {
            let [x, y, w, h] = args.numbers(["X", "Y", "WIDTH", "HEIGHT"])?;
            sketch.rectangle(x, y, w, h, &options)
        }
        Primitive::Ellipse => {
            let [cx, cy, w, h] = args.numbers(["CX", "CY", "WIDTH", "HEIGHT"])?;
            sketch.ellipse(cx, cy, w, h, &options)
        }
        Primitive::Curve => {
            let points = point_list(&args, primitive)?;
            sketch.curve(&points, &options)
        }
    };

    report(primitive, &drawable);
    let styled = [StyledDrawable::new(drawable, options.stroke_width)];
    let output = render(args.format, seed, &styled, None)?;
    write_output(args.output.as_ref(), &output)
}

fn point_list(args: &CommonArgs, primitive: Primitive) -> Result<Vec<Point>, CliError> {
    let text = args.single("point list")?;
    let points = parse_points(text);
    if points.len() < 2 {
        return Err(CliError::Usage(format!(
            "need at least 2 points, got {}\nUsage: {}",
            points.len(),
            primitive.usage()
        )));
    }
    Ok(points)
}

fn report(primitive: Primitive, drawable: &Drawable) {
    tracing::info!(
        ?primitive,
        ops = drawable.len(),
        curves = drawable.curve_count(),
        "generated drawable"
    );
}

fn print_usage(primitive: Primitive) {
    eprintln!("Usage: {}", primitive.usage());
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --seed <n>              Random seed (default: random, logged)");
    eprintln!("  --config <file>         YAML or JSON drawing options");
    eprintln!("  --roughness <n>         Roughness (default: 1.0)");
    eprintln!("  --bowing <n>            Bowing (default: 1.0)");
    eprintln!("  --stroke-width <n>      Stroke width (default: 1.0)");
    eprintln!("  -f, --format <fmt>      Output format: svg or json (default: svg)");
    eprintln!("  -o, --output <file>     Output file (default: stdout)");
}
