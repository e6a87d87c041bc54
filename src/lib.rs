//! hull-vis - viewer for a 2D point set and its precomputed convex hull
//!
//! Reads a flat text file (point count, points, hull count, hull vertices)
//! and displays a scatter plot of all points with the hull drawn as a
//! closed polygon. The hull is taken as given: nothing here computes,
//! validates, or reorders it.

pub mod app;
pub mod core;
pub mod theme;

pub use crate::core::{load_scene, parse_scene, FormatError, LoadError, Point, Scene};
