//! Segmented LUT decoding module
//!
//! Segmented LUT data is a compact program of discrete runs and linear ramps.
//! Programs are parsed into [`Segment`] records and expanded into a flat
//! array of fixed-width entries.

mod decoder;
mod standard_decoder;
pub mod types;


pub use decoder::SegmentDecoder;
pub use standard_decoder::{SegmentedLutDecoder, parse_segments};
pub use types::{Segment, SegmentOpcode};
