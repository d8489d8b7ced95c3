//! Buffer module: Core data structures for the pixel-grid canvas.
//!
//! This module contains:
//! - [`Rgb`]: 24-bit color value with `#rrggbb` interchange form
//! - [`GridSize`]: The allowed grid side lengths
//! - [`PixelBuffer`]: The square grid of optional pixel colors, with
//!   the flood-fill and usage-sampling algorithms

mod color;
mod grid;

pub use color::Rgb;
pub use grid::{GridSize, PixelBuffer};
