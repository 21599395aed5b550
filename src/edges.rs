use tracing::trace;

use crate::dbg_points;
use crate::line::Line;
use crate::point::Point;

/// Polygon vertices from a merged line list.
///
/// The first line contributes both endpoints and every later line its
/// ending, except that the last ending is dropped when it closes the
/// polygon (equals the first vertex).
pub fn extract_vertices(lines: &[Line]) -> Vec<Point> {
    let Some((first, rest)) = lines.split_first() else {
        return Vec::new();
    };

    let mut vertices = Vec::with_capacity(lines.len() + 1);
    vertices.push(first.beginning());
    vertices.push(first.ending());

    if let Some((last, interior)) = rest.split_last() {
        vertices.extend(interior.iter().map(Line::ending));
        if last.ending() != vertices[0] {
            vertices.push(last.ending());
        }
    }

    trace!("extracted vertices {:?}", dbg_points!(&vertices));
    vertices
}

/// Coordinate lists for plotting the outline, with the first vertex repeated
/// at the end to close it.
pub fn outline_coords(vertices: &[Point]) -> (Vec<f64>, Vec<f64>) {
    vertices
        .iter()
        .chain(vertices.first())
        .map(|p| (p.x, p.y))
        .unzip()
}
