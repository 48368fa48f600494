use thiserror::Error;

use crate::palette::common::channel::Channel;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LutError {
    #[error("{field} differs between channels: red={red}, green={green}, blue={blue}")]
    DescriptorMismatch {
        field: &'static str,
        red: i64,
        green: i64,
        blue: i64,
    },

    #[error("No descriptor supplied for the {0} channel")]
    MissingDescriptor(Channel),

    #[error("Unsupported bits per entry: {0} (expected 8 or 16)")]
    UnsupportedBitsPerEntry(u16),

    #[error("Both explicit and segmented data supplied for the {0} channel")]
    DataConflict(Channel),

    #[error("No explicit or segmented data supplied for the {0} channel")]
    MissingData(Channel),

    #[error("{channel} channel holds {actual} entries, descriptor requires {expected}")]
    LengthMismatch {
        channel: Channel,
        expected: usize,
        actual: usize,
    },

    #[error("Channel lengths disagree: red={red}, green={green}, blue={blue}")]
    ChannelLengthMismatch {
        red: usize,
        green: usize,
        blue: usize,
    },

    #[error("Decoded channels hold {actual} entries, descriptor requires {expected}")]
    DecodedLengthMismatch { expected: usize, actual: usize },

    #[error("{channel} channel entry {value} does not fit in {bits} bits")]
    EntryOutOfRange {
        channel: Channel,
        value: u16,
        bits: u16,
    },

    #[error("Indirect segment at program offset {offset} is not supported")]
    UnsupportedSegment { offset: usize },

    #[error("Invalid segment type {opcode} at program offset {offset}")]
    InvalidSegment { opcode: u16, offset: usize },

    #[error("Segment at program offset {offset} is truncated")]
    TruncatedSegment { offset: usize },

    #[error("Linear segment at program offset {offset} has no preceding entry to start from")]
    LinearSegmentWithoutStart { offset: usize },

    #[error("Segment of length {length} at entry {offset} overruns table of {capacity} entries")]
    SegmentOutOfRange {
        offset: usize,
        length: usize,
        capacity: usize,
    },

    #[error("Segment value {value} does not fit in {bits} bits")]
    SegmentValueOutOfRange { value: u16, bits: u16 },

    #[error("Unknown colormap: {0}")]
    UnknownColorMap(String),

    #[error("Invalid colormap bin count: {0}")]
    InvalidBins(usize),
}

pub type Result<T> = std::result::Result<T, LutError>;
