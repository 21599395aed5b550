use itertools::Itertools;
use tracing::{debug, trace};

use crate::debug::COLOR_ORANGE;
use crate::error::{GeometryErr, Violation};
use crate::line::{create_line, Line};
use crate::point::Point;
use crate::{dbg_line, dbg_lines, dbg_points, emit_info, info_label};

/// The line currently accumulating collinear points. Once the merger moves
/// past it, it is handed back as a plain [`Line`].
struct OpenLine(Line);

impl OpenLine {
    #[inline]
    fn open(beginning: Point, ending: Point) -> Result<Self, GeometryErr> {
        create_line(beginning, ending).map(OpenLine)
    }

    #[inline]
    fn accepts(&self, point: &Point) -> bool {
        self.0.contains(point)
    }

    #[inline]
    fn extend(&mut self, point: Point) {
        self.0.extend_to(point)
    }

    #[inline]
    fn anchor(&self) -> Point {
        self.0.ending()
    }

    #[inline]
    fn close(self) -> Line {
        self.0
    }
}

/// Collapses a traced boundary into one line per physical edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundaryMerger {
    require_edges: bool,
}

impl BoundaryMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, a boundary too short to form a single line is an error
    /// instead of an empty result.
    pub fn require_edges(mut self, require: bool) -> Self {
        self.require_edges = require;
        self
    }

    /// Fails on the first pair of consecutive identical points.
    fn check_consecutive(points: &[Point]) -> Result<(), GeometryErr> {
        match points.iter().tuple_windows().find(|(a, b)| a == b) {
            Some((&a, &b)) => {
                Err(GeometryErr::invalid(Violation::DuplicatePoint, a, b))
            }
            None => Ok(()),
        }
    }

    /// Single left-to-right pass over `points`.
    ///
    /// A point on the open line moves that line's ending; any other point
    /// closes it and opens a new line from its ending. Either every line is
    /// returned or none are.
    pub fn merge(&self, points: &[Point]) -> Result<Vec<Line>, GeometryErr> {
        debug!(
            "{} {:?}",
            info_label!("merging boundary"),
            dbg_points!(points)
        );

        if points.len() < 2 {
            return if self.require_edges {
                Err(GeometryErr::NotEnoughPoints {
                    found: points.len(),
                })
            } else {
                Ok(Vec::new())
            };
        }
        Self::check_consecutive(points)?;

        let mut lines = Vec::new();
        let mut open = OpenLine::open(points[0], points[1])?;
        trace!("opened {:?}", dbg_line!(&open.0));

        for &point in &points[2..] {
            if open.accepts(&point) {
                trace!("extending {:?} to {}", dbg_line!(&open.0), point);
                open.extend(point);
            } else {
                let next = OpenLine::open(open.anchor(), point)?;
                let closed = std::mem::replace(&mut open, next).close();
                debug!(
                    "closed {:?}, opened {:?}",
                    dbg_line!(&closed),
                    dbg_line!(&open.0)
                );
                lines.push(closed);
            }
        }
        lines.push(open.close());

        emit_info!(sty:COLOR_ORANGE.bold(),
            fmt:"merged {} points into {} lines" | points.len(), lines.len()
        );
        debug!("{} {:?}", info_label!("lines"), dbg_lines!(&lines));
        Ok(lines)
    }
}

/// Merges with the default [`BoundaryMerger`]: fewer than 2 points give no
/// lines.
#[inline]
pub fn merge_boundary(points: &[Point]) -> Result<Vec<Line>, GeometryErr> {
    BoundaryMerger::new().merge(points)
}
