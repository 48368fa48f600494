use crate::palette::common::channel::Channel;
use crate::palette::common::error::{LutError, Result};
use crate::palette::segmented::SegmentDecoder;
use crate::palette::table::lookup_table::{PaletteColorLookupTable, agree_descriptors};
use crate::palette::table::types::{ChannelDescriptor, ChannelSource, LutConfig};

/// Builder for PaletteColorLookupTable
///
/// Collects each channel's descriptor and data elements as they are found,
/// then validates everything at once in [`build`](Self::build).
#[derive(Default)]
pub struct PaletteColorLutBuilder<D: SegmentDecoder> {
    descriptors: [Option<ChannelDescriptor>; 3],
    explicit: [Option<Vec<u16>>; 3],
    segmented: [Option<Vec<u16>>; 3],
    uid: Option<String>,
    config: Option<LutConfig>,
    decoder: D,
}

impl<D: SegmentDecoder> PaletteColorLutBuilder<D> {
    pub fn descriptor(mut self, channel: Channel, descriptor: impl Into<ChannelDescriptor>) -> Self {
        self.descriptors[channel.index()] = Some(descriptor.into());
        self
    }

    /// Sets the same descriptor on all three channels.
    pub fn shared_descriptor(self, descriptor: impl Into<ChannelDescriptor>) -> Self {
        let descriptor = descriptor.into();
        self.descriptor(Channel::Red, descriptor)
            .descriptor(Channel::Green, descriptor)
            .descriptor(Channel::Blue, descriptor)
    }

    pub fn data(mut self, channel: Channel, data: Vec<u16>) -> Self {
        self.explicit[channel.index()] = Some(data);
        self
    }

    pub fn segmented_data(mut self, channel: Channel, program: Vec<u16>) -> Self {
        self.segmented[channel.index()] = Some(program);
        self
    }

    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    pub fn config(mut self, config: LutConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn decoder<E: SegmentDecoder>(self, decoder: E) -> PaletteColorLutBuilder<E> {
        PaletteColorLutBuilder {
            descriptors: self.descriptors,
            explicit: self.explicit,
            segmented: self.segmented,
            uid: self.uid,
            config: self.config,
            decoder,
        }
    }

    pub fn build(self) -> Result<PaletteColorLookupTable<D>> {
        let [red, green, blue] = self.descriptors;
        let descriptors = [
            red.ok_or(LutError::MissingDescriptor(Channel::Red))?,
            green.ok_or(LutError::MissingDescriptor(Channel::Green))?,
            blue.ok_or(LutError::MissingDescriptor(Channel::Blue))?,
        ];
        agree_descriptors(&descriptors)?;

        let [red_data, green_data, blue_data] = self.explicit;
        let [red_program, green_program, blue_program] = self.segmented;
        let sources = [
            ChannelSource::from_parts(Channel::Red, red_data, red_program)?,
            ChannelSource::from_parts(Channel::Green, green_data, green_program)?,
            ChannelSource::from_parts(Channel::Blue, blue_data, blue_program)?,
        ];

        let config = self.config.unwrap_or_default();
        PaletteColorLookupTable::with_custom(descriptors, sources, self.uid, &config, self.decoder)
    }
}
