//! Palette LUT descriptor, channel data and configuration types

use crate::palette::common::channel::Channel;
use crate::palette::common::entry::FULL_RANGE_ENTRIES;
use crate::palette::common::error::{LutError, Result};
use crate::palette::common::uid::UUID_DERIVED_ROOT;

/// Per-channel LUT descriptor: entry count, first mapped value, bits per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelDescriptor {
    /// Number of entries; 0 stands for 65536
    pub number_of_entries: u16,
    /// Stored pixel value mapped to the first entry
    pub first_value_mapped: i32,
    /// Width of each entry, 8 or 16
    pub bits_per_entry: u16,
}

impl ChannelDescriptor {
    pub fn new(number_of_entries: u16, first_value_mapped: i32, bits_per_entry: u16) -> Self {
        Self {
            number_of_entries,
            first_value_mapped,
            bits_per_entry,
        }
    }

    /// Entry count with the 0 sentinel resolved.
    pub fn entry_count(&self) -> usize {
        match self.number_of_entries {
            0 => FULL_RANGE_ENTRIES,
            n => usize::from(n),
        }
    }
}

impl From<(u16, i32, u16)> for ChannelDescriptor {
    fn from((number_of_entries, first_value_mapped, bits_per_entry): (u16, i32, u16)) -> Self {
        Self::new(number_of_entries, first_value_mapped, bits_per_entry)
    }
}

/// Width of the entries stored in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitsPerEntry {
    Eight,
    Sixteen,
}

impl BitsPerEntry {
    pub fn bits(self) -> u16 {
        match self {
            BitsPerEntry::Eight => 8,
            BitsPerEntry::Sixteen => 16,
        }
    }
}

impl TryFrom<u16> for BitsPerEntry {
    type Error = LutError;

    fn try_from(bits: u16) -> Result<Self> {
        match bits {
            8 => Ok(BitsPerEntry::Eight),
            16 => Ok(BitsPerEntry::Sixteen),
            other => Err(LutError::UnsupportedBitsPerEntry(other)),
        }
    }
}

/// Where a channel's entries come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelSource {
    /// One value per entry
    Explicit(Vec<u16>),
    /// Segmented program that expands to the entries
    Segmented(Vec<u16>),
}

impl ChannelSource {
    /// Resolves the two optional data elements of a channel, exactly one of
    /// which must be present.
    pub fn from_parts(
        channel: Channel,
        explicit: Option<Vec<u16>>,
        segmented: Option<Vec<u16>>,
    ) -> Result<Self> {
        match (explicit, segmented) {
            (Some(_), Some(_)) => Err(LutError::DataConflict(channel)),
            (Some(data), None) => Ok(ChannelSource::Explicit(data)),
            (None, Some(program)) => Ok(ChannelSource::Segmented(program)),
            (None, None) => Err(LutError::MissingData(channel)),
        }
    }

    pub fn is_segmented(&self) -> bool {
        matches!(self, ChannelSource::Segmented(_))
    }
}

/// Configuration for palette LUT construction
#[derive(Debug, Clone)]
pub struct LutConfig {
    /// Reject explicit entries wider than bits-per-entry (true) or mask off
    /// their high bits when materializing (false)
    pub validate_entries: bool,
    /// Prefix for generated UIDs
    pub uid_root: String,
}

impl Default for LutConfig {
    fn default() -> Self {
        Self {
            validate_entries: true,
            uid_root: UUID_DERIVED_ROOT.to_string(),
        }
    }
}

impl LutConfig {
    pub fn builder() -> LutConfigBuilder {
        LutConfigBuilder::default()
    }
}

/// Builder for LutConfig
#[derive(Default)]
pub struct LutConfigBuilder {
    validate_entries: Option<bool>,
    uid_root: Option<String>,
}

impl LutConfigBuilder {
    pub fn validate_entries(mut self, validate: bool) -> Self {
        self.validate_entries = Some(validate);
        self
    }

    pub fn uid_root(mut self, root: impl Into<String>) -> Self {
        self.uid_root = Some(root.into());
        self
    }

    pub fn build(self) -> LutConfig {
        let default = LutConfig::default();
        LutConfig {
            validate_entries: self.validate_entries.unwrap_or(default.validate_entries),
            uid_root: self.uid_root.unwrap_or(default.uid_root),
        }
    }
}
