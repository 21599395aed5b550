use std::process::ExitCode;

use boundary_lines::{
    extract_vertices, merge_boundary, outline_coords, GeometryErr, Point,
};
use tracing::{error, info, Level};

fn boundaries() -> Vec<(&'static str, Vec<Point>)> {
    [
        (
            "rectangle",
            vec![
                (0, 0),
                (0, 3),
                (0, 6),
                (4, 6),
                (8, 6),
                (8, 3),
                (8, 0),
                (4, 0),
                (0, 0),
            ],
        ),
        (
            "house",
            vec![
                (0, 0),
                (0, 4),
                (2, 7),
                (4, 10),
                (6, 7),
                (8, 4),
                (8, 2),
                (8, 0),
                (4, 0),
                (0, 0),
            ],
        ),
    ]
    .into_iter()
    .map(|(name, coords)| {
        let points = coords
            .into_iter()
            .map(|(x, y)| Point::new(x as f64, y as f64))
            .collect();
        (name, points)
    })
    .collect()
}

fn run() -> Result<(), GeometryErr> {
    for (name, points) in boundaries() {
        let lines = merge_boundary(&points)?;
        let vertices = extract_vertices(&lines);
        info!(
            "{}: {} points -> {} lines -> {} vertices",
            name,
            points.len(),
            lines.len(),
            vertices.len()
        );
        let (xs, ys) = outline_coords(&vertices);
        println!("{name}");
        println!("  vertices: {:?}", vertices);
        println!("  xs: {:?}", xs);
        println!("  ys: {:?}", ys);
    }
    Ok(())
}

pub fn main() -> ExitCode {
    let level = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(level)
        // sets this to be the default, global collector for this application.
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
