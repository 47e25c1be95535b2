//! Icongen painting system - canvas and shape primitives
//!
//! This crate provides the raster layer the icon renderers draw onto:
//! - [`types::PixelFormat`], [`types::Point`], [`types::Rect`] - geometry and format types
//! - [`surface`] - square RGB/RGBA canvas
//! - [`shapes`] - filled rectangles, ellipses, polygons and 1px lines
//! - [`export`] - conversion to `image` buffers and PNG output
//! - [`constants`] - the hard-coded icon palette

pub mod constants;
pub mod error;
pub mod export;
pub mod shapes;
pub mod surface;
pub mod types;

pub use constants::*;
pub use error::*;
pub use surface::*;
pub use types::*;
