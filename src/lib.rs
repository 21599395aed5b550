//! Reconstructs a polygon's sides from a traced boundary.
//!
//! A boundary is an ordered list of [`Point`]s that may carry several
//! collinear points per side. [`merge_boundary`] collapses each run of
//! collinear points into one [`Line`], and [`extract_vertices`] turns those
//! lines back into the polygon's corners.

pub mod debug;
pub mod edges;
pub mod error;
pub mod line;
pub mod merger;
pub mod point;

pub use edges::{extract_vertices, outline_coords};
pub use error::{GeometryErr, Violation};
pub use line::{create_line, perpendicular_foot, Line, LineKind, Orientation};
pub use merger::{merge_boundary, BoundaryMerger};
pub use point::Point;
