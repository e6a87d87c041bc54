//! Loader core: scene data model and the text-format parser

pub mod data;
pub mod parser;

pub use data::{Point, Scene};
pub use parser::{load_scene, parse_scene, FormatError, LoadError};
