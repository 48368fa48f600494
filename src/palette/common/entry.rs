//! Fixed-width LUT entry types
//!
//! A table stores its entries as either `u8` or `u16`, picked once from the
//! agreed bits-per-entry. Everything width-dependent (range checks, masking,
//! conversion to the 8-bit display table) goes through [`LutEntry`].

use std::fmt::Debug;

use num_traits::{NumCast, PrimInt, Unsigned};
use tracing::debug;

use crate::palette::common::rescale::rescale;

/// Number of entries in the display table produced from a 16-bit LUT.
pub const DISPLAY_ENTRIES: usize = 256;

/// Number of addressable entries in a full 16-bit LUT.
pub const FULL_RANGE_ENTRIES: usize = 65536;

pub trait LutEntry: PrimInt + Unsigned + Debug + Send + Sync + 'static {
    /// Width of one entry in bits.
    const BITS: u16;

    /// Converts a raw descriptor-width value, failing if it does not fit.
    fn from_raw(value: u16) -> Option<Self> {
        <Self as NumCast>::from(value)
    }

    /// Keeps only the low `BITS` bits of `value`.
    fn mask_raw(value: u16) -> Self {
        let mask = Self::max_value().to_u16().unwrap_or(u16::MAX);
        Self::from_raw(value & mask).unwrap_or_else(Self::max_value)
    }

    /// Converts an interpolated level, failing if it is out of range.
    fn from_level(level: f64) -> Option<Self> {
        <Self as NumCast>::from(level)
    }

    fn to_level(self) -> f64 {
        self.to_f64().unwrap_or_default()
    }

    /// Builds the 8-bit-per-channel display table from three equally long
    /// channel arrays.
    fn display_table(red: &[Self], green: &[Self], blue: &[Self]) -> Vec<[u8; 3]>;
}

impl LutEntry for u8 {
    const BITS: u16 = 8;

    fn display_table(red: &[u8], green: &[u8], blue: &[u8]) -> Vec<[u8; 3]> {
        red.iter()
            .zip(green)
            .zip(blue)
            .map(|((&r, &g), &b)| [r, g, b])
            .collect()
    }
}

impl LutEntry for u16 {
    const BITS: u16 = 16;

    /// 16-bit palettes are too large to display as-is: every 256th entry is
    /// sampled and scaled down to 8 bits, giving exactly 256 triplets.
    fn display_table(red: &[u16], green: &[u16], blue: &[u16]) -> Vec<[u8; 3]> {
        let len = red.len().min(green.len()).min(blue.len());
        if len == 0 {
            return Vec::new();
        }

        let steps = FULL_RANGE_ENTRIES / DISPLAY_ENTRIES;
        debug!(
            entries = len,
            steps, "Resampling 16-bit palette to {} display entries", DISPLAY_ENTRIES
        );

        (0..DISPLAY_ENTRIES)
            .map(|i| {
                // Shorter tables repeat their last entry.
                let j = (i * steps).min(len - 1);
                [
                    to_display_level(red[j]),
                    to_display_level(green[j]),
                    to_display_level(blue[j]),
                ]
            })
            .collect()
    }
}

fn to_display_level(value: u16) -> u8 {
    let scaled = rescale(
        <f64 as From<u16>>::from(value),
        0.0,
        <f64 as From<u16>>::from(u16::MAX),
        0.0,
        255.0,
    );
    scaled.round().clamp(0.0, 255.0) as u8
}
