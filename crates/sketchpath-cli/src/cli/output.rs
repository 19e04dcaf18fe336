//! Serializing drawables as SVG or JSON.

use std::fmt::Write as _;

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde::Serialize;
use sketchpath::{BoundingBox, Drawable, PathOp};

use super::common::{CliError, OutputFormat};

/// Space left around drawables when the view box is derived from them.
const VIEWBOX_MARGIN: f64 = 10.0;

/// A drawable plus the stroke width it should be rendered with.
#[derive(Debug, Clone)]
pub struct StyledDrawable {
    pub drawable: Drawable,
    pub stroke_width: f64,
}

impl StyledDrawable {
    pub fn new(drawable: Drawable, stroke_width: f64) -> Self {
        Self {
            drawable,
            stroke_width,
        }
    }
}

/// JSON output document.
#[derive(Serialize)]
struct JsonOutput<'a> {
    seed: u64,
    drawables: Vec<&'a Drawable>,
}

/// Render in the requested format.
///
/// `view_box` is only used for SVG output; when absent it is computed
/// from the drawables.
pub fn render(
    format: OutputFormat,
    seed: u64,
    drawables: &[StyledDrawable],
    view_box: Option<String>,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => to_json(seed, drawables),
        OutputFormat::Svg => {
            let view_box = view_box.unwrap_or_else(|| fitted_view_box(drawables));
            Ok(to_svg(seed, drawables, &view_box))
        }
    }
}

pub fn to_json(seed: u64, drawables: &[StyledDrawable]) -> Result<String, CliError> {
    let output = JsonOutput {
        seed,
        drawables: drawables.iter().map(|d| &d.drawable).collect(),
    };
    Ok(serde_json::to_string(&output)?)
}

/// One `<path>` per drawable.
pub fn to_svg(seed: u64, drawables: &[StyledDrawable], view_box: &str) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- sketchpath seed: {} -->
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}">
<g stroke="black" fill="none" stroke-linecap="round">
"#,
        seed, view_box
    ));

    for styled in drawables {
        if styled.drawable.is_empty() {
            continue;
        }
        svg.push_str(&format!(
            "  <path d=\"{}\" stroke-width=\"{}\"/>\n",
            path_data(&styled.drawable),
            styled.stroke_width
        ));
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

/// SVG path data for a drawable, using `M`, `C` and `L` commands.
pub fn path_data(drawable: &Drawable) -> String {
    let mut d = String::new();
    for op in &drawable.ops {
        if !d.is_empty() {
            d.push(' ');
        }
        // Writing into a String cannot fail
        let _ = match op {
            PathOp::Move { point } => write!(d, "M{:.2} {:.2}", point.x, point.y),
            PathOp::CurveTo {
                control1,
                control2,
                end,
            } => write!(
                d,
                "C{:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
                control1.x, control1.y, control2.x, control2.y, end.x, end.y
            ),
            PathOp::LineTo { point } => write!(d, "L{:.2} {:.2}", point.x, point.y),
        };
    }
    d
}

/// A view box enclosing every point of every op, with a margin.
fn fitted_view_box(drawables: &[StyledDrawable]) -> String {
    let points: Vec<_> = drawables
        .iter()
        .flat_map(|styled| &styled.drawable.ops)
        .flat_map(|op| match *op {
            PathOp::Move { point } | PathOp::LineTo { point } => vec![point],
            PathOp::CurveTo {
                control1,
                control2,
                end,
            } => vec![control1, control2, end],
        })
        .collect();

    match BoundingBox::of_points(&points) {
        Some(bounds) => {
            let bounds = bounds.inflate(VIEWBOX_MARGIN);
            format!(
                "{:.2} {:.2} {:.2} {:.2}",
                bounds.left,
                bounds.top,
                bounds.width(),
                bounds.height()
            )
        }
        None => "0 0 100 100".to_string(),
    }
}

/// The `viewBox` of the root `<svg>` element, if any.
///
/// Streams through the document with quick-xml and stops at the first
/// `<svg>` start tag.
pub fn extract_viewbox(svg: &str) -> Option<String> {
    let mut reader = Reader::from_str(svg);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.local_name().as_ref() == b"svg" => {
                let attr = e
                    .try_get_attribute("viewBox")
                    .ok()
                    .flatten()
                    .or_else(|| e.try_get_attribute("viewbox").ok().flatten())?;
                return attr.unescape_value().ok().map(|v| v.trim().to_string());
            }
            Ok(Event::Eof) | Err(_) => return None,
            _ => {}
        }
    }
}
