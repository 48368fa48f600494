//! Palette color lookup tables for single-channel images.
//!
//! Decodes explicit or segmented red/green/blue LUT data into a display
//! table of RGB triplets, and generates named gradient colormaps that can
//! serve as LUT sources.

pub mod colormap;
pub mod logger;
pub mod palette;
