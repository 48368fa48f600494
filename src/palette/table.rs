//! Palette color lookup table module
//!
//! Validates red/green/blue descriptors and channel data, and materializes
//! the RGB display table on demand.

mod builder;
mod lookup_table;
pub mod types;

#[cfg(test)]
mod tests;

pub use builder::PaletteColorLutBuilder;
pub use lookup_table::PaletteColorLookupTable;
pub use types::{BitsPerEntry, ChannelDescriptor, ChannelSource, LutConfig, LutConfigBuilder};
