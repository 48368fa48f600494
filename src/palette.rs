//! Palette color lookup table module
//!
//! This module decodes explicit and segmented palette LUT data into RGB
//! display tables, with the segment decoder, table entity and shared
//! utilities in separate submodules.

pub mod common;
pub mod segmented;
pub mod table;

pub use common::{
    Channel,
    LutEntry,
    LutError,
    Result,
    generate_uid,
    rescale,
};

pub use segmented::{
    Segment,
    SegmentDecoder,
    SegmentOpcode,
    SegmentedLutDecoder,
    parse_segments,
};

pub use table::{
    BitsPerEntry,
    ChannelDescriptor,
    ChannelSource,
    LutConfig,
    LutConfigBuilder,
    PaletteColorLookupTable,
    PaletteColorLutBuilder,
};
