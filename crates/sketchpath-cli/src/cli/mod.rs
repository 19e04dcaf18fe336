//! CLI command implementations.
//!
//! - `line`, `polygon`, `rect`, `ellipse`, `curve` - draw one primitive
//! - `fill` - hachure-fill and outline every shape of an SVG file

pub mod common;
pub mod config;
pub mod draw;
pub mod fill;
pub mod output;

pub use common::CliError;
pub use draw::{Primitive, cmd_draw};
pub use fill::cmd_fill;
