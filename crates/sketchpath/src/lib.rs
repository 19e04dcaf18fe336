//! # sketchpath
//!
//! Hand-drawn ("sketchy") path generation.
//!
//! Exact geometric primitives go in, randomly perturbed cubic-curve paths
//! come out: doubled lines, polygons, rectangles, ellipses, smooth curves
//! and hachure (parallel-line) fills. All randomness flows through an
//! injectable [`RandomSource`], so a fixed seed reproduces a drawing.
//!
//! ## Rust Lesson #7: Modules
//!
//! Rust modules are like ES6 modules but more explicit:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! ```
//! use sketchpath::{DrawOptions, Point, Rng, SketchPathBuilder};
//!
//! let mut sketch = SketchPathBuilder::new(Rng::new(42));
//! let options = DrawOptions::default().with_roughness(1.5);
//! let wobbly = sketch.line(Point::new(0.0, 0.0), Point::new(100.0, 20.0), &options);
//! assert_eq!(wobbly.move_count(), 2);
//! ```

pub mod builder;
pub mod curve;
pub mod ellipse;
pub mod geometry;
pub mod hachure;
pub mod ops;
pub mod options;
pub mod relation;
pub mod rng;
pub mod segment;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use builder::SketchPathBuilder;
pub use geometry::{BoundingBox, GeometryError, Line, Point, Polygon};
pub use hachure::{HachureIterator, ScanBox, ScanLineGenerator, hachure_fill, hachure_fill_with};
pub use ops::{Drawable, DrawableKind, PathOp};
pub use options::DrawOptions;
pub use relation::{Relation, SegmentRelation, relate_segments};
pub use rng::{RandomSource, Rng, Sequence};
pub use svg::{SvgError, extract_polygons_from_svg};
