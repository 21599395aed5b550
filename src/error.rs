use std::fmt::{self, Display};

use thiserror::Error;

use crate::point::Point;

/// The orientation (or distinctness) invariant a pair of endpoints broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    NotHorizontal,
    NotVertical,
    NotSlanted,
    DuplicatePoint,
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Violation::NotHorizontal => "horizontal line must have the same y value",
            Violation::NotVertical => "vertical line must have the same x value",
            Violation::NotSlanted => "slanted line can't be horizontal or vertical",
            Violation::DuplicatePoint => "line endpoints must be distinct",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeometryErr {
    #[error("invalid geometry: {violation} (beginning {beginning}, ending {ending})")]
    InvalidGeometry {
        violation: Violation,
        beginning: Point,
        ending: Point,
    },

    /// Only raised when the caller asked for at least one line.
    #[error("invalid geometry: need at least 2 points to form a line, found {found}")]
    NotEnoughPoints { found: usize },

    #[error("unsupported line kind: {kind:?}")]
    UnsupportedLineKind { kind: String },
}

impl GeometryErr {
    #[inline]
    pub fn invalid(violation: Violation, beginning: Point, ending: Point) -> Self {
        GeometryErr::InvalidGeometry {
            violation,
            beginning,
            ending,
        }
    }

    /// Whether this is one of the invalid-geometry failures: a broken line
    /// invariant or a boundary too short to form a line (as opposed to an
    /// unsupported line kind).
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(
            self,
            GeometryErr::InvalidGeometry { .. } | GeometryErr::NotEnoughPoints { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_invariant_and_coordinates() {
        let err = GeometryErr::invalid(
            Violation::NotHorizontal,
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
        );
        let msg = err.to_string();
        assert!(msg.contains("same y value"), "{msg}");
        assert!(msg.contains("(0, 0)") && msg.contains("(1, 2)"), "{msg}");
        assert!(err.is_invalid_geometry());
    }

    #[test]
    fn too_few_points_is_invalid_geometry() {
        let err = GeometryErr::NotEnoughPoints { found: 1 };
        assert!(err.is_invalid_geometry());
        assert!(err.to_string().starts_with("invalid geometry:"));
    }

    #[test]
    fn unsupported_kind_is_not_invalid_geometry() {
        let err = GeometryErr::UnsupportedLineKind {
            kind: "curved".to_string(),
        };
        assert!(!err.is_invalid_geometry());
        assert_eq!(err.to_string(), "unsupported line kind: \"curved\"");
    }
}
