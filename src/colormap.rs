//! Named gradient colormaps
//!
//! Each map is a short list of color stops sampled by linear interpolation
//! into the requested number of bins. The generated triplets can be used
//! directly or as the explicit channel data of a palette LUT.

mod gradients;


use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::palette::common::error::{LutError, Result};

/// Available colormaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMap {
    /// Perceptually uniform, dark blue to yellow
    Viridis,
    /// Black through red and orange to pale yellow
    Inferno,
    /// Black through purple and pink to pale yellow
    Magma,
    /// Black to white
    Gray,
    /// Diverging blue to white to red
    BlueRed,
    /// Cyclic hue map, traversed in reverse
    Phase,
    /// Blue through yellow to red
    Portland,
    /// Black through red and yellow to white
    Hot,
}

impl ColorMap {
    pub const ALL: [ColorMap; 8] = [
        ColorMap::Viridis,
        ColorMap::Inferno,
        ColorMap::Magma,
        ColorMap::Gray,
        ColorMap::BlueRed,
        ColorMap::Phase,
        ColorMap::Portland,
        ColorMap::Hot,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorMap::Viridis => "VIRIDIS",
            ColorMap::Inferno => "INFERNO",
            ColorMap::Magma => "MAGMA",
            ColorMap::Gray => "GRAY",
            ColorMap::BlueRed => "BLUE_RED",
            ColorMap::Phase => "PHASE",
            ColorMap::Portland => "PORTLAND",
            ColorMap::Hot => "HOT",
        }
    }

    fn stops(&self) -> &'static [[u8; 3]] {
        match self {
            ColorMap::Viridis => gradients::VIRIDIS,
            ColorMap::Inferno => gradients::INFERNO,
            ColorMap::Magma => gradients::MAGMA,
            ColorMap::Gray => gradients::GRAY,
            ColorMap::BlueRed => gradients::BLUE_RED,
            ColorMap::Phase => gradients::PHASE,
            ColorMap::Portland => gradients::PORTLAND,
            ColorMap::Hot => gradients::HOT,
        }
    }

    /// Whether the underlying gradient is emitted last stop first.
    pub fn is_reversed(&self) -> bool {
        matches!(self, ColorMap::Phase)
    }

    /// Samples the underlying gradient into `bins` colors, in stop order.
    pub fn gradient(&self, bins: usize) -> Result<Vec<[u8; 3]>> {
        if bins == 0 {
            return Err(LutError::InvalidBins(bins));
        }
        Ok(gradients::sample(self.stops(), bins))
    }

    /// Generates `bins` colors for this map.
    pub fn generate(&self, bins: usize) -> Result<Vec<[u8; 3]>> {
        let mut colors = self.gradient(bins)?;
        if self.is_reversed() {
            colors.reverse();
        }
        debug!(map = self.name(), bins, "Generated colormap");
        Ok(colors)
    }
}

impl fmt::Display for ColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMap {
    type Err = LutError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        ColorMap::ALL
            .into_iter()
            .find(|map| map.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| LutError::UnknownColorMap(name.to_string()))
    }
}

/// Generates `bins` colors for the colormap called `name`.
pub fn generate_color_map(name: &str, bins: usize) -> Result<Vec<[u8; 3]>> {
    name.parse::<ColorMap>()?.generate(bins)
}
