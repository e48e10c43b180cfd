//! SVG renderer for the brand assets
//!
//! The symbol geometry lives in [`geometry`]; [`svg`] turns shapes into
//! markup with the options from [`SvgConfig`].

pub mod config;
pub mod geometry;
pub mod svg;

pub use config::SvgConfig;
pub use geometry::{Canvas, SymbolGeometry, Transform, EMBRACE};
pub use svg::{Length, SvgBuilder, TextStyle};
