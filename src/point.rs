use std::fmt::{self, Display};

/// A point on the plane.
///
/// Equality is exact on both coordinates: there is no tolerance, which keeps
/// it consistent with the membership tests in [`crate::line`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn same_x(&self, other: &Point) -> bool {
        self.x == other.x
    }

    #[inline]
    pub fn same_y(&self, other: &Point) -> bool {
        self.y == other.y
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.same_x(other) && self.same_y(other)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
