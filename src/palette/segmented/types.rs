//! Segment records for segmented LUT programs

use crate::palette::common::error::{LutError, Result};

/// Segment type tokens as they appear in a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOpcode {
    /// Run of a single repeated value
    Discrete,
    /// Ramp from the previous entry to an endpoint
    Linear,
    /// Reference to segments elsewhere in the program (not supported)
    Indirect,
}

impl SegmentOpcode {
    /// Decodes an opcode token. `offset` is the token's position in the
    /// program and is only used for error reporting.
    pub fn from_token(token: u16, offset: usize) -> Result<Self> {
        match token {
            0 => Ok(SegmentOpcode::Discrete),
            1 => Ok(SegmentOpcode::Linear),
            2 => Ok(SegmentOpcode::Indirect),
            opcode => Err(LutError::InvalidSegment { opcode, offset }),
        }
    }
}

/// A decoded segment, ready to be expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Writes `value` into the next `length` entries.
    Discrete { length: u16, value: u16 },
    /// Interpolates over the next `length` entries, from the last written
    /// entry up to `endpoint`.
    Linear { length: u16, endpoint: u16 },
}

impl Segment {
    pub fn length(&self) -> usize {
        match *self {
            Segment::Discrete { length, .. } | Segment::Linear { length, .. } => usize::from(length),
        }
    }
}
