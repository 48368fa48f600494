use std::sync::OnceLock;

use tracing::{debug, info, instrument, warn};

use crate::colormap::ColorMap;
use crate::palette::common::{
    channel::Channel,
    entry::{DISPLAY_ENTRIES, FULL_RANGE_ENTRIES, LutEntry},
    error::{LutError, Result},
    uid::generate_uid,
};
use crate::palette::segmented::{SegmentDecoder, SegmentedLutDecoder};
use crate::palette::table::builder::PaletteColorLutBuilder;
use crate::palette::table::types::{BitsPerEntry, ChannelDescriptor, ChannelSource, LutConfig};

/// A validated red/green/blue palette LUT.
///
/// Inputs are checked on construction and never change afterwards. The RGB
/// display table is decoded on first access and cached for the lifetime of
/// the value.
#[derive(Debug, Clone)]
pub struct PaletteColorLookupTable<D: SegmentDecoder = SegmentedLutDecoder> {
    uid: String,
    number_of_entries: usize,
    first_value_mapped: i32,
    bits_per_entry: BitsPerEntry,
    sources: [ChannelSource; 3],
    decoder: D,
    table: OnceLock<Vec<[u8; 3]>>,
}

impl PaletteColorLookupTable<SegmentedLutDecoder> {
    pub fn builder() -> PaletteColorLutBuilder<SegmentedLutDecoder> {
        PaletteColorLutBuilder::default()
    }

    /// Creates a table from red, green and blue descriptors and sources, in
    /// that order. A UID is generated when `uid` is `None`.
    pub fn new(
        descriptors: [ChannelDescriptor; 3],
        sources: [ChannelSource; 3],
        uid: Option<String>,
    ) -> Result<Self> {
        Self::with_custom(
            descriptors,
            sources,
            uid,
            &LutConfig::default(),
            SegmentedLutDecoder,
        )
    }

    /// Creates an 8-bit table whose channels come from a generated colormap
    /// with `bins` entries.
    pub fn from_color_map(map: ColorMap, bins: usize, first_value_mapped: i32) -> Result<Self> {
        if bins > FULL_RANGE_ENTRIES {
            return Err(LutError::InvalidBins(bins));
        }
        let colors = map.generate(bins)?;

        // 65536 entries are written as the 0 sentinel.
        let number_of_entries = u16::try_from(bins).unwrap_or(0);
        let descriptor = ChannelDescriptor::new(number_of_entries, first_value_mapped, 8);
        let channel = |c: Channel| -> ChannelSource {
            ChannelSource::Explicit(colors.iter().map(|rgb| u16::from(rgb[c.index()])).collect())
        };

        Self::new(
            [descriptor; 3],
            [channel(Channel::Red), channel(Channel::Green), channel(Channel::Blue)],
            None,
        )
    }
}

impl<D: SegmentDecoder> PaletteColorLookupTable<D> {
    pub fn with_custom(
        descriptors: [ChannelDescriptor; 3],
        sources: [ChannelSource; 3],
        uid: Option<String>,
        config: &LutConfig,
        decoder: D,
    ) -> Result<Self> {
        let (number_of_entries, first_value_mapped, bits_per_entry) =
            agree_descriptors(&descriptors)?;

        for (channel, source) in Channel::ALL.into_iter().zip(&sources) {
            if let ChannelSource::Explicit(data) = source {
                validate_explicit(channel, data, number_of_entries, bits_per_entry, config)?;
            }
        }

        let uid = uid.unwrap_or_else(|| generate_uid(&config.uid_root));
        debug!(
            %uid,
            entries = number_of_entries,
            first_value_mapped,
            bits = bits_per_entry.bits(),
            segmented = sources.iter().filter(|s| s.is_segmented()).count(),
            "Created palette color lookup table"
        );

        Ok(Self {
            uid,
            number_of_entries,
            first_value_mapped,
            bits_per_entry,
            sources,
            decoder,
            table: OnceLock::new(),
        })
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn first_value_mapped(&self) -> i32 {
        self.first_value_mapped
    }

    /// Entry count with the 0 sentinel resolved.
    pub fn number_of_entries(&self) -> usize {
        self.number_of_entries
    }

    pub fn bits_per_entry(&self) -> BitsPerEntry {
        self.bits_per_entry
    }

    /// The descriptor shared by all three channels.
    pub fn descriptor(&self) -> ChannelDescriptor {
        ChannelDescriptor::new(
            u16::try_from(self.number_of_entries).unwrap_or(0),
            self.first_value_mapped,
            self.bits_per_entry.bits(),
        )
    }

    pub fn source(&self, channel: Channel) -> &ChannelSource {
        &self.sources[channel.index()]
    }

    /// Returns the RGB display table, materializing it on first call.
    ///
    /// 8-bit tables hold one triplet per entry; 16-bit tables are resampled
    /// to exactly 256 triplets.
    #[instrument(skip(self), fields(uid = %self.uid))]
    pub fn table(&self) -> Result<&[[u8; 3]]> {
        if let Some(table) = self.table.get() {
            return Ok(table);
        }

        let table = match self.bits_per_entry {
            BitsPerEntry::Eight => self.materialize::<u8>()?,
            BitsPerEntry::Sixteen => self.materialize::<u16>()?,
        };
        info!(
            entries = table.len(),
            bits = self.bits_per_entry.bits(),
            "Materialized palette table"
        );

        Ok(self.table.get_or_init(|| table))
    }

    /// Maps one stored pixel value to its display color. Values outside the
    /// table clamp to its first or last entry.
    ///
    /// 16-bit tables are addressed through the 256-entry display table, so a
    /// value resolves to the entry sampled for its 256-wide bucket. With 1000
    /// entries, values 768 through 999 all return the color of entry 768.
    pub fn lookup(&self, value: i64) -> Result<[u8; 3]> {
        let table = self.table()?;
        Ok(table[self.display_index(value, table.len())])
    }

    /// Maps a slice of stored pixel values to display colors.
    pub fn apply(&self, pixels: &[i64]) -> Result<Vec<[u8; 3]>> {
        let table = self.table()?;
        Ok(pixels
            .iter()
            .map(|&value| table[self.display_index(value, table.len())])
            .collect())
    }

    fn display_index(&self, value: i64, table_len: usize) -> usize {
        let last_entry = self.number_of_entries as i64 - 1;
        let entry = (value - i64::from(self.first_value_mapped)).clamp(0, last_entry) as usize;
        let index = match self.bits_per_entry {
            BitsPerEntry::Eight => entry,
            BitsPerEntry::Sixteen => entry / (FULL_RANGE_ENTRIES / DISPLAY_ENTRIES),
        };
        index.min(table_len.saturating_sub(1))
    }

    fn materialize<T: LutEntry>(&self) -> Result<Vec<[u8; 3]>> {
        let [red, green, blue] = &self.sources;
        let red = self.channel_entries::<T>(Channel::Red, red)?;
        let green = self.channel_entries::<T>(Channel::Green, green)?;
        let blue = self.channel_entries::<T>(Channel::Blue, blue)?;

        if red.len() != green.len() || red.len() != blue.len() {
            return Err(LutError::ChannelLengthMismatch {
                red: red.len(),
                green: green.len(),
                blue: blue.len(),
            });
        }
        if red.len() != self.number_of_entries {
            return Err(LutError::DecodedLengthMismatch {
                expected: self.number_of_entries,
                actual: red.len(),
            });
        }

        Ok(T::display_table(&red, &green, &blue))
    }

    fn channel_entries<T: LutEntry>(&self, channel: Channel, source: &ChannelSource) -> Result<Vec<T>> {
        match source {
            ChannelSource::Explicit(data) => Ok(data.iter().map(|&v| T::mask_raw(v)).collect()),
            ChannelSource::Segmented(program) => {
                debug!(%channel, words = program.len(), "Decoding segmented channel");
                self.decoder.expand::<T>(program, self.number_of_entries)
            }
        }
    }
}

/// Checks that the three descriptors agree and returns the shared entry
/// count, first mapped value and width.
pub(crate) fn agree_descriptors(
    descriptors: &[ChannelDescriptor; 3],
) -> Result<(usize, i32, BitsPerEntry)> {
    let [red, green, blue] = descriptors;

    if red.number_of_entries != green.number_of_entries
        || red.number_of_entries != blue.number_of_entries
    {
        return Err(LutError::DescriptorMismatch {
            field: "number of entries",
            red: red.number_of_entries.into(),
            green: green.number_of_entries.into(),
            blue: blue.number_of_entries.into(),
        });
    }
    if red.first_value_mapped != green.first_value_mapped
        || red.first_value_mapped != blue.first_value_mapped
    {
        return Err(LutError::DescriptorMismatch {
            field: "first value mapped",
            red: red.first_value_mapped.into(),
            green: green.first_value_mapped.into(),
            blue: blue.first_value_mapped.into(),
        });
    }
    if red.bits_per_entry != green.bits_per_entry || red.bits_per_entry != blue.bits_per_entry {
        return Err(LutError::DescriptorMismatch {
            field: "bits per entry",
            red: red.bits_per_entry.into(),
            green: green.bits_per_entry.into(),
            blue: blue.bits_per_entry.into(),
        });
    }

    let bits_per_entry = BitsPerEntry::try_from(red.bits_per_entry)?;
    Ok((red.entry_count(), red.first_value_mapped, bits_per_entry))
}

fn validate_explicit(
    channel: Channel,
    data: &[u16],
    number_of_entries: usize,
    bits_per_entry: BitsPerEntry,
    config: &LutConfig,
) -> Result<()> {
    if data.len() != number_of_entries {
        return Err(LutError::LengthMismatch {
            channel,
            expected: number_of_entries,
            actual: data.len(),
        });
    }

    if bits_per_entry == BitsPerEntry::Eight {
        if let Some(&value) = data.iter().find(|&&v| v > u16::from(u8::MAX)) {
            if config.validate_entries {
                return Err(LutError::EntryOutOfRange {
                    channel,
                    value,
                    bits: bits_per_entry.bits(),
                });
            }
            warn!(
                %channel,
                value,
                "Explicit entries exceed 8 bits, high bits will be masked"
            );
        }
    }

    Ok(())
}
