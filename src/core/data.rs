//! Data structures for a loaded point set and its precomputed hull
//!
//! Both sequences are built once by the parser and held immutably
//! through rendering. Nothing here computes or validates a hull.

use std::fmt::Write;

/// A 2D coordinate pair. No identity beyond its coordinates;
/// duplicates are allowed and preserved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Everything one input file describes: the full point set plus the
/// hull polygon vertices, both in file order.
///
/// Hull vertices are taken as-is. Orientation, convexity, and
/// membership in `points` are the producer's problem; a stray hull
/// vertex simply renders without a marker under it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub points: Vec<Point>,
    pub hull: Vec<Point>,
}

impl Scene {
    pub fn new(points: Vec<Point>, hull: Vec<Point>) -> Self {
        Self { points, hull }
    }

    /// All points as plot coordinates, in file order.
    pub fn scatter_coords(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|&p| p.into()).collect()
    }

    /// Hull polygon as a closed polyline: the M vertices in given order
    /// with the first vertex appended again, so a non-empty hull always
    /// yields M + 1 coordinates ending where it started. A single-vertex
    /// hull degenerates to a zero-length segment rather than an error.
    /// Empty hull yields an empty vec.
    pub fn closed_hull(&self) -> Vec<[f64; 2]> {
        let Some(&first) = self.hull.first() else {
            return Vec::new();
        };
        self.hull
            .iter()
            .map(|&p| p.into())
            .chain(std::iter::once(first.into()))
            .collect()
    }

    /// Serialize back into the input text format:
    /// point count, point lines, hull count, hull lines.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let mut section = |points: &[Point]| {
            let _ = writeln!(out, "{}", points.len());
            for p in points {
                let _ = writeln!(out, "{} {}", p.x, p.y);
            }
        };
        section(&self.points);
        section(&self.hull);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_closed_hull_appends_first_vertex() {
        let scene = Scene::new(square(), square());

        let closed = scene.closed_hull();
        assert_eq!(closed.len(), scene.hull.len() + 1);
        assert_eq!(closed.first(), Some(&[0.0, 0.0]));
        assert_eq!(closed.last(), Some(&[0.0, 0.0]));
        assert_eq!(closed[1..5], [[1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]);
    }

    #[test]
    fn test_closed_hull_single_vertex_degenerates() {
        let scene = Scene::new(square(), vec![Point::new(3.5, -2.0)]);

        let closed = scene.closed_hull();
        assert_eq!(closed, vec![[3.5, -2.0], [3.5, -2.0]]);
    }

    #[test]
    fn test_closed_hull_empty() {
        let scene = Scene::new(square(), vec![]);
        assert!(scene.closed_hull().is_empty());
    }

    #[test]
    fn test_scatter_coords_preserve_file_order() {
        let scene = Scene::new(square(), vec![]);
        assert_eq!(
            scene.scatter_coords(),
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
        );
    }

    #[test]
    fn test_to_text_format() {
        let scene = Scene::new(
            vec![Point::new(0.5, -1.25), Point::new(2.0, 3.0)],
            vec![Point::new(0.5, -1.25)],
        );
        assert_eq!(scene.to_text(), "2\n0.5 -1.25\n2 3\n1\n0.5 -1.25\n");
    }

    #[test]
    fn test_to_text_empty_scene() {
        assert_eq!(Scene::default().to_text(), "0\n0\n");
    }
}
