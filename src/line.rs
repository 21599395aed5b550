use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use crate::error::{GeometryErr, Violation};
use crate::point::Point;

/// Which way a line runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    Horizontal,
    Vertical,
    Slanted,
}

impl LineKind {
    pub const ALL: [LineKind; 3] =
        [LineKind::Horizontal, LineKind::Vertical, LineKind::Slanted];

    pub fn name(&self) -> &'static str {
        match self {
            LineKind::Horizontal => "horizontal",
            LineKind::Vertical => "vertical",
            LineKind::Slanted => "slanted",
        }
    }
}

impl Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineKind {
    type Err = GeometryErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        LineKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GeometryErr::UnsupportedLineKind {
                kind: s.to_string(),
            })
    }
}

/// The attribute each kind of line derives from its endpoints when it is
/// built. It is not recomputed when an endpoint moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Orientation {
    Horizontal { y: f64 },
    Vertical { x: f64 },
    Slanted { slope: f64 },
}

impl Orientation {
    #[inline]
    pub fn kind(&self) -> LineKind {
        match self {
            Orientation::Horizontal { .. } => LineKind::Horizontal,
            Orientation::Vertical { .. } => LineKind::Vertical,
            Orientation::Slanted { .. } => LineKind::Slanted,
        }
    }
}

/// An infinite line through `beginning` and `ending`.
///
/// The endpoints are reference points: they do not bound membership. The
/// `ending` is the anchor that slanted-line formulas are evaluated against.
#[derive(Clone, Copy, PartialEq)]
pub struct Line {
    beginning: Point,
    ending: Point,
    orientation: Orientation,
}

impl Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attr = match self.orientation {
            Orientation::Horizontal { y } => format!("y={}", y),
            Orientation::Vertical { x } => format!("x={}", x),
            Orientation::Slanted { slope } => format!("m={}", slope),
        };
        write!(
            f,
            "{}Line[{}]({}->{})",
            match self.kind() {
                LineKind::Horizontal => "H",
                LineKind::Vertical => "V",
                LineKind::Slanted => "S",
            },
            attr,
            self.beginning,
            self.ending
        )
    }
}

/// Checks that `beginning -> ending` satisfies the invariant of `kind`.
fn check(kind: LineKind, beginning: Point, ending: Point) -> Result<(), GeometryErr> {
    if beginning == ending {
        return Err(GeometryErr::invalid(
            Violation::DuplicatePoint,
            beginning,
            ending,
        ));
    }
    let violation = match kind {
        LineKind::Horizontal if !beginning.same_y(&ending) => {
            Some(Violation::NotHorizontal)
        }
        LineKind::Vertical if !beginning.same_x(&ending) => {
            Some(Violation::NotVertical)
        }
        LineKind::Slanted
            if beginning.same_x(&ending) || beginning.same_y(&ending) =>
        {
            Some(Violation::NotSlanted)
        }
        _ => None,
    };
    match violation {
        Some(violation) => {
            Err(GeometryErr::invalid(violation, beginning, ending))
        }
        None => Ok(()),
    }
}

impl Line {
    /// Picks the kind of line running from `beginning` to `ending`.
    ///
    /// The order of the checks matters when coordinates are noisy: equal x
    /// wins over equal y.
    pub fn classify(beginning: &Point, ending: &Point) -> LineKind {
        if beginning.same_x(ending) {
            LineKind::Vertical
        } else if beginning.same_y(ending) {
            LineKind::Horizontal
        } else {
            LineKind::Slanted
        }
    }

    /// Builds whichever kind of line runs through the two points.
    ///
    /// Fails with [`GeometryErr::InvalidGeometry`] if the points are
    /// identical.
    pub fn new(beginning: Point, ending: Point) -> Result<Self, GeometryErr> {
        Self::with_kind(Self::classify(&beginning, &ending), beginning, ending)
    }

    /// Builds a line of the claimed `kind`, failing if the endpoints don't
    /// satisfy its invariant.
    pub fn with_kind(
        kind: LineKind,
        beginning: Point,
        ending: Point,
    ) -> Result<Self, GeometryErr> {
        check(kind, beginning, ending)?;
        let orientation = match kind {
            LineKind::Horizontal => Orientation::Horizontal { y: beginning.y },
            LineKind::Vertical => Orientation::Vertical { x: beginning.x },
            LineKind::Slanted => Orientation::Slanted {
                slope: (ending.y - beginning.y) / (ending.x - beginning.x),
            },
        };
        Ok(Self {
            beginning,
            ending,
            orientation,
        })
    }

    #[inline]
    pub fn horizontal(beginning: Point, ending: Point) -> Result<Self, GeometryErr> {
        Self::with_kind(LineKind::Horizontal, beginning, ending)
    }

    #[inline]
    pub fn vertical(beginning: Point, ending: Point) -> Result<Self, GeometryErr> {
        Self::with_kind(LineKind::Vertical, beginning, ending)
    }

    #[inline]
    pub fn slanted(beginning: Point, ending: Point) -> Result<Self, GeometryErr> {
        Self::with_kind(LineKind::Slanted, beginning, ending)
    }

    #[inline]
    pub fn beginning(&self) -> Point {
        self.beginning
    }

    #[inline]
    pub fn ending(&self) -> Point {
        self.ending
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn kind(&self) -> LineKind {
        self.orientation.kind()
    }

    #[inline]
    pub fn slope(&self) -> Option<f64> {
        match self.orientation {
            Orientation::Slanted { slope } => Some(slope),
            _ => None,
        }
    }

    /// Moves the beginning, keeping the line's derived attribute.
    pub fn set_beginning(&mut self, beginning: Point) -> Result<(), GeometryErr> {
        check(self.kind(), beginning, self.ending)?;
        self.beginning = beginning;
        Ok(())
    }

    /// Moves the ending without re-checking the invariant. The merger only
    /// calls this with points the line already `contains`, which may bring
    /// the ending back onto the beginning.
    #[inline]
    pub(crate) fn extend_to(&mut self, ending: Point) {
        self.ending = ending;
    }

    /// Moves the ending (the anchor), keeping the line's derived attribute.
    pub fn set_ending(&mut self, ending: Point) -> Result<(), GeometryErr> {
        check(self.kind(), self.beginning, ending)?;
        self.ending = ending;
        Ok(())
    }

    /// Whether `point` lies on the infinite line.
    ///
    /// Slanted lines evaluate their equation anchored at `ending`, and never
    /// accept a point that shares the anchor's x coordinate (the anchor
    /// included).
    pub fn contains(&self, point: &Point) -> bool {
        match self.orientation {
            Orientation::Horizontal { y } => point.y == y,
            Orientation::Vertical { x } => point.x == x,
            Orientation::Slanted { slope } => {
                let anchor = self.ending;
                if point.x == anchor.x {
                    return false;
                }
                point.y == slope * (point.x - anchor.x) + anchor.y
            }
        }
    }

    /// The foot of the perpendicular dropped from `point` onto this line.
    pub fn perpendicular_foot(&self, point: &Point) -> Point {
        match self.orientation {
            Orientation::Horizontal { y } => Point::new(point.x, y),
            Orientation::Vertical { x } => Point::new(x, point.y),
            Orientation::Slanted { slope: m } => {
                // Intersection of y = m(x - a) + b with the line through
                // (c, d) of slope -1/m.
                let Point { x: a, y: b } = self.ending;
                let Point { x: c, y: d } = *point;
                let x = (-m * m * a + m * b - m * d - c) / (-1.0 - m * m);
                let y = m * x - m * a + b;
                Point::new(x, y)
            }
        }
    }
}

/// Free-function form of [`Line::new`].
#[inline]
pub fn create_line(beginning: Point, ending: Point) -> Result<Line, GeometryErr> {
    Line::new(beginning, ending)
}

/// Free-function form of [`Line::perpendicular_foot`].
#[inline]
pub fn perpendicular_foot(line: &Line, point: &Point) -> Point {
    line.perpendicular_foot(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn factory_picks_vertical() {
        let line = create_line(p(3.0, 0.0), p(3.0, 7.0)).unwrap();
        assert_eq!(line.orientation(), Orientation::Vertical { x: 3.0 });
    }

    #[test]
    fn factory_picks_horizontal() {
        let line = create_line(p(0.0, -2.0), p(5.0, -2.0)).unwrap();
        assert_eq!(line.orientation(), Orientation::Horizontal { y: -2.0 });
    }

    #[test]
    fn factory_picks_slanted() {
        let line = create_line(p(0.0, 0.0), p(4.0, 6.0)).unwrap();
        assert_eq!(line.kind(), LineKind::Slanted);
        assert_eq!(line.slope(), Some(1.5));
    }

    #[test]
    fn factory_rejects_identical_points() {
        let err = create_line(p(1.0, 1.0), p(1.0, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            GeometryErr::InvalidGeometry {
                violation: Violation::DuplicatePoint,
                ..
            }
        ));
    }

    #[test]
    fn claimed_kind_must_hold() {
        let err = Line::horizontal(p(0.0, 0.0), p(1.0, 2.0)).unwrap_err();
        assert!(matches!(
            err,
            GeometryErr::InvalidGeometry {
                violation: Violation::NotHorizontal,
                ..
            }
        ));
        assert!(Line::vertical(p(0.0, 0.0), p(1.0, 2.0)).is_err());
        assert!(Line::slanted(p(0.0, 0.0), p(0.0, 2.0)).is_err());
        assert!(Line::slanted(p(0.0, 2.0), p(5.0, 2.0)).is_err());
        assert!(Line::slanted(p(0.0, 0.0), p(1.0, 2.0)).is_ok());
    }

    #[test]
    fn membership_is_unbounded() {
        let h = create_line(p(0.0, 5.0), p(10.0, 5.0)).unwrap();
        assert!(h.contains(&p(1000.0, 5.0)));
        assert!(!h.contains(&p(3.0, 5.5)));

        let v = create_line(p(5.0, 0.0), p(5.0, 10.0)).unwrap();
        assert!(v.contains(&p(5.0, -40.0)));
        assert!(!v.contains(&p(4.0, 3.0)));

        let s = create_line(p(0.0, 0.0), p(1.0, 2.0)).unwrap();
        assert!(s.contains(&p(10.0, 20.0)));
        assert!(s.contains(&p(-3.0, -6.0)));
        assert!(!s.contains(&p(2.0, 5.0)));
    }

    #[test]
    fn slanted_rejects_points_at_anchor_x() {
        let s = create_line(p(0.0, 0.0), p(2.0, 2.0)).unwrap();
        assert!(!s.contains(&p(2.0, 2.0)));
        assert!(!s.contains(&p(2.0, 5.0)));
        // The beginning is still accepted.
        assert!(s.contains(&p(0.0, 0.0)));
    }

    #[test]
    fn setters_keep_invariant() {
        let mut h = create_line(p(0.0, 1.0), p(2.0, 1.0)).unwrap();
        h.set_ending(p(9.0, 1.0)).unwrap();
        assert_eq!(h.ending(), p(9.0, 1.0));
        h.set_beginning(p(-1.0, 1.0)).unwrap();
        assert_eq!(h.beginning(), p(-1.0, 1.0));

        assert!(h.set_ending(p(9.0, 2.0)).is_err());
        assert!(h.set_ending(p(-1.0, 1.0)).is_err());
        assert_eq!(h.ending(), p(9.0, 1.0));
    }

    #[test]
    fn slope_is_fixed_at_construction() {
        let mut s = create_line(p(0.0, 0.0), p(1.0, 1.0)).unwrap();
        s.set_ending(p(3.0, 7.0)).unwrap();
        assert_eq!(s.slope(), Some(1.0));
    }

    #[test]
    fn horizontal_foot() {
        let h = create_line(p(0.0, 5.0), p(10.0, 5.0)).unwrap();
        assert_eq!(perpendicular_foot(&h, &p(3.0, 99.0)), p(3.0, 5.0));
    }

    #[test]
    fn vertical_foot() {
        let v = create_line(p(5.0, 0.0), p(5.0, 10.0)).unwrap();
        assert_eq!(perpendicular_foot(&v, &p(99.0, 3.0)), p(5.0, 3.0));
    }

    #[test]
    fn slanted_foot_lies_on_line_and_is_perpendicular() {
        let s = create_line(p(0.0, 0.0), p(4.0, 6.0)).unwrap();
        let q = p(7.0, 4.0);
        let foot = s.perpendicular_foot(&q);

        assert!((foot.y - 1.5 * foot.x).abs() < 1e-9);
        let (dx, dy) = (q.x - foot.x, q.y - foot.y);
        assert!((dx * 1.0 + dy * 1.5).abs() < 1e-9);
        assert!((foot.x - 4.0).abs() < 1e-9 && (foot.y - 6.0).abs() < 1e-9);
    }

    #[test]
    fn slanted_foot_with_negative_slope() {
        let s = create_line(p(0.0, 4.0), p(4.0, 0.0)).unwrap();
        let foot = s.perpendicular_foot(&p(0.0, 0.0));
        assert!((foot.x - 2.0).abs() < 1e-9 && (foot.y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn kind_from_str() {
        assert_eq!("Vertical".parse::<LineKind>(), Ok(LineKind::Vertical));
        assert_eq!(" slanted ".parse::<LineKind>(), Ok(LineKind::Slanted));
        assert_eq!(
            "curved".parse::<LineKind>(),
            Err(GeometryErr::UnsupportedLineKind {
                kind: "curved".to_string()
            })
        );
        for kind in LineKind::ALL {
            assert_eq!(kind.to_string().parse::<LineKind>(), Ok(kind));
        }
    }

    #[test]
    fn debug_format() {
        let line = create_line(p(0.0, 0.0), p(0.0, 6.0)).unwrap();
        assert_eq!(format!("{:?}", line), "VLine[x=0]((0, 0)->(0, 6))");
    }
}
