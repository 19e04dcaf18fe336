//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use sketchpath::{DrawOptions, Point, SketchPathBuilder, SvgError};
use thiserror::Error;

use super::config::{OptionsError, load_options};

/// Everything that can go wrong in a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("invalid number for {what}: '{value}'")]
    Number { what: &'static str, value: String },
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Svg(#[from] SvgError),
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format for generated drawables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "svg" => Some(OutputFormat::Svg),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Flags accepted by every drawing command, plus the positional arguments.
#[derive(Debug, Default)]
pub struct CommonArgs {
    pub positional: Vec<String>,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub roughness: Option<f64>,
    pub bowing: Option<f64>,
    pub gap: Option<f64>,
    pub angle: Option<f64>,
    pub stroke_width: Option<f64>,
    pub fill_weight: Option<f64>,
    pub help: bool,
}

impl CommonArgs {
    /// Parse flags and positionals.
    ///
    /// Negative numbers are positionals, so `line -5 0 5 0` works.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut parsed = CommonArgs::default();

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            match arg {
                "--seed" => parsed.seed = Some(parse_value(args, &mut i, "--seed")?),
                "--config" => parsed.config = Some(PathBuf::from(flag_value(args, &mut i, "--config")?)),
                "-o" | "--output" => parsed.output = Some(PathBuf::from(flag_value(args, &mut i, "--output")?)),
                "-f" | "--format" => {
                    let name = flag_value(args, &mut i, "--format")?;
                    parsed.format = OutputFormat::from_name(name).ok_or_else(|| {
                        CliError::Usage(format!("Unknown format: {name}. Use 'svg' or 'json'."))
                    })?;
                }
                "--json" => parsed.format = OutputFormat::Json,
                "--roughness" => parsed.roughness = Some(parse_value(args, &mut i, "--roughness")?),
                "--bowing" => parsed.bowing = Some(parse_value(args, &mut i, "--bowing")?),
                "-g" | "--gap" => parsed.gap = Some(parse_value(args, &mut i, "--gap")?),
                "-a" | "--angle" => parsed.angle = Some(parse_value(args, &mut i, "--angle")?),
                "--stroke-width" => {
                    parsed.stroke_width = Some(parse_value(args, &mut i, "--stroke-width")?)
                }
                "--fill-weight" => {
                    parsed.fill_weight = Some(parse_value(args, &mut i, "--fill-weight")?)
                }
                "-h" | "--help" => parsed.help = true,
                "-" => parsed.positional.push(arg.to_string()),
                other if !other.starts_with('-') || other.parse::<f64>().is_ok() => {
                    parsed.positional.push(other.to_string())
                }
                unknown => return Err(CliError::Usage(format!("Unknown option: {unknown}"))),
            }
            i += 1;
        }

        Ok(parsed)
    }

    /// Config file (if any) with flag overrides applied on top.
    pub fn draw_options(&self) -> Result<DrawOptions, CliError> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => DrawOptions::default(),
        };

        if let Some(roughness) = self.roughness {
            options.roughness = roughness;
        }
        if let Some(bowing) = self.bowing {
            options.bowing = bowing;
        }
        if let Some(gap) = self.gap {
            options.hachure_gap = Some(gap);
        }
        if let Some(angle) = self.angle {
            options.hachure_angle = angle;
        }
        if let Some(width) = self.stroke_width {
            options.stroke_width = width;
        }
        if let Some(weight) = self.fill_weight {
            options.fill_weight = Some(weight);
        }
        Ok(options)
    }

    /// The requested seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        match self.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                tracing::info!(seed, "no --seed given, drew a random seed");
                seed
            }
        }
    }

    pub fn builder(&self) -> (u64, SketchPathBuilder) {
        let seed = self.resolve_seed();
        (seed, SketchPathBuilder::seeded(seed))
    }

    /// Exactly `N` numeric positionals.
    pub fn numbers<const N: usize>(&self, names: [&'static str; N]) -> Result<[f64; N], CliError> {
        if self.positional.len() != N {
            return Err(CliError::Usage(format!(
                "expected {} numbers ({}), got {}",
                N,
                names.join(" "),
                self.positional.len()
            )));
        }

        let mut values = [0.0; N];
        for ((value, raw), name) in values.iter_mut().zip(&self.positional).zip(names) {
            *value = parse_number(raw, name)?;
        }
        Ok(values)
    }

    /// The single positional argument.
    pub fn single(&self, what: &str) -> Result<&str, CliError> {
        match self.positional.as_slice() {
            [one] => Ok(one),
            [] => Err(CliError::Usage(format!("missing {what}"))),
            _ => Err(CliError::Usage(format!("expected a single {what}"))),
        }
    }
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, CliError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("{flag} needs a value")))
}

fn parse_value<T: std::str::FromStr>(
    args: &[String],
    i: &mut usize,
    flag: &'static str,
) -> Result<T, CliError> {
    let raw = flag_value(args, i, flag)?;
    raw.parse().map_err(|_| CliError::Number {
        what: flag,
        value: raw.to_string(),
    })
}

fn parse_number(raw: &str, what: &'static str) -> Result<f64, CliError> {
    raw.parse().map_err(|_| CliError::Number {
        what,
        value: raw.to_string(),
    })
}

/// Parse an SVG `points` list such as `"10,10 30,10 30,15"`.
pub fn parse_points(text: &str) -> Vec<Point> {
    svgtypes::PointsParser::from(text)
        .map(|(x, y)| Point::new(x, y))
        .collect()
}

/// Read a file, or stdin when the path is `-`.
pub fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        tracing::info!("reading SVG from stdin");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Read {
                path: "<stdin>".to_string(),
                source,
            })?;
        Ok(buffer)
    } else {
        tracing::info!(path, "loading SVG");
        fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_string(),
            source,
        })
    }
}

/// Write to the output file, or stdout when none (or `-`) is given.
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<(), CliError> {
    match output {
        Some(path) if path.as_os_str() != "-" => {
            fs::write(path, content).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        _ => println!("{content}"),
    }
    Ok(())
}
