#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::colormap::ColorMap;
    use crate::palette::common::channel::Channel;
    use crate::palette::common::entry::LutEntry;
    use crate::palette::common::error::{LutError, Result};
    use crate::palette::segmented::SegmentDecoder;
    use crate::palette::table::lookup_table::PaletteColorLookupTable;
    use crate::palette::table::types::{
        BitsPerEntry, ChannelDescriptor, ChannelSource, LutConfig,
    };

    /// Returns one zero entry per program word and counts its calls.
    #[derive(Debug, Clone, Default)]
    struct MockDecoder {
        calls: Arc<AtomicUsize>,
    }

    impl SegmentDecoder for MockDecoder {
        fn expand<T: LutEntry>(&self, program: &[u16], _number_of_entries: usize) -> Result<Vec<T>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![T::zero(); program.len()])
        }
    }

    fn explicit_table(
        descriptor: (u16, i32, u16),
        red: Vec<u16>,
        green: Vec<u16>,
        blue: Vec<u16>,
    ) -> Result<PaletteColorLookupTable> {
        PaletteColorLookupTable::builder()
            .shared_descriptor(descriptor)
            .data(Channel::Red, red)
            .data(Channel::Green, green)
            .data(Channel::Blue, blue)
            .build()
    }

    #[test]
    fn test_config_builder() {
        let config = LutConfig::builder()
            .validate_entries(false)
            .uid_root("1.2.3.")
            .build();

        assert!(!config.validate_entries);
        assert_eq!(config.uid_root, "1.2.3.");

        let default = LutConfig::builder().build();
        assert!(default.validate_entries);
        assert_eq!(default.uid_root, "2.25.");
    }

    #[test]
    fn test_descriptor_from_tuple() {
        let descriptor = ChannelDescriptor::from((0, -10, 16));
        assert_eq!(descriptor.entry_count(), 65536);
        assert_eq!(descriptor.first_value_mapped, -10);
        assert_eq!(ChannelDescriptor::from((12, 0, 8)).entry_count(), 12);
    }

    #[test]
    fn test_bits_per_entry_conversion() {
        assert_eq!(BitsPerEntry::try_from(8), Ok(BitsPerEntry::Eight));
        assert_eq!(BitsPerEntry::try_from(16), Ok(BitsPerEntry::Sixteen));
        assert_eq!(
            BitsPerEntry::try_from(12),
            Err(LutError::UnsupportedBitsPerEntry(12))
        );
    }

    #[test]
    fn test_channel_source_from_parts() {
        assert_eq!(
            ChannelSource::from_parts(Channel::Red, Some(vec![1]), None),
            Ok(ChannelSource::Explicit(vec![1]))
        );
        assert_eq!(
            ChannelSource::from_parts(Channel::Green, None, Some(vec![0, 1, 1])),
            Ok(ChannelSource::Segmented(vec![0, 1, 1]))
        );
        assert_eq!(
            ChannelSource::from_parts(Channel::Blue, Some(vec![1]), Some(vec![0, 1, 1])),
            Err(LutError::DataConflict(Channel::Blue))
        );
        assert_eq!(
            ChannelSource::from_parts(Channel::Blue, None, None),
            Err(LutError::MissingData(Channel::Blue))
        );
    }

    #[test]
    fn test_eight_bit_explicit_table() {
        let lut = explicit_table(
            (3, 0, 8),
            vec![0, 128, 255],
            vec![10, 20, 30],
            vec![255, 0, 1],
        )
        .unwrap();

        assert_eq!(lut.number_of_entries(), 3);
        assert_eq!(lut.bits_per_entry(), BitsPerEntry::Eight);
        assert_eq!(
            lut.table().unwrap(),
            &[[0, 10, 255], [128, 20, 0], [255, 30, 1]]
        );
    }

    #[test]
    fn test_eight_bit_table_with_zero_sentinel() {
        let data: Vec<u16> = (0..65536u32).map(|i| (i % 256) as u16).collect();
        let lut = explicit_table((0, 0, 8), data.clone(), data.clone(), data).unwrap();

        let table = lut.table().unwrap();
        assert_eq!(table.len(), 65536);
        assert_eq!(table[257], [1, 1, 1]);
    }

    #[test]
    fn test_sixteen_bit_table_is_resampled() {
        let ramp: Vec<u16> = (0..=u16::MAX).collect();
        let lut = explicit_table(
            (0, 0, 16),
            ramp,
            vec![u16::MAX; 65536],
            vec![0; 65536],
        )
        .unwrap();

        let table = lut.table().unwrap();
        assert_eq!(table.len(), 256);
        assert_eq!(table[0], [0, 255, 0]);
        assert_eq!(table[1], [1, 255, 0]);
        assert_eq!(table[255], [254, 255, 0]);
    }

    #[test]
    fn test_sixteen_bit_table_length_is_independent_of_entries() {
        for entries in [1u16, 16, 300, 4096] {
            let data = vec![0x8000; usize::from(entries)];
            let lut = explicit_table((entries, 0, 16), data.clone(), data.clone(), data).unwrap();

            let table = lut.table().unwrap();
            assert_eq!(table.len(), 256, "entries = {entries}");
            assert!(table.iter().all(|rgb| *rgb == [128, 128, 128]));
        }
    }

    #[test]
    fn test_segmented_channels() {
        let lut = PaletteColorLookupTable::builder()
            .shared_descriptor((4, 0, 8))
            .segmented_data(Channel::Red, vec![0, 1, 10, 1, 3, 20])
            .segmented_data(Channel::Green, vec![0, 4, 255])
            .data(Channel::Blue, vec![4, 3, 2, 1])
            .build()
            .unwrap();

        assert_eq!(
            lut.table().unwrap(),
            &[[10, 255, 4], [13, 255, 3], [17, 255, 2], [20, 255, 1]]
        );
    }

    #[test]
    fn test_sixteen_bit_segmented_ramp() {
        let ramp = vec![0, 1, 0, 1, 65535, 65535];
        let lut = PaletteColorLookupTable::builder()
            .shared_descriptor((0, 0, 16))
            .segmented_data(Channel::Red, ramp.clone())
            .segmented_data(Channel::Green, ramp.clone())
            .segmented_data(Channel::Blue, ramp)
            .build()
            .unwrap();

        let table = lut.table().unwrap();
        assert_eq!(table.len(), 256);
        assert_eq!(table[0], [0, 0, 0]);
        assert_eq!(table[128], [128, 128, 128]);
        assert_eq!(table[255], [254, 254, 254]);
    }

    #[test]
    fn test_table_is_cached() {
        let decoder = MockDecoder::default();
        let calls = decoder.calls.clone();
        let lut = PaletteColorLookupTable::builder()
            .shared_descriptor((2, 0, 8))
            .segmented_data(Channel::Red, vec![0, 0])
            .segmented_data(Channel::Green, vec![0, 0])
            .segmented_data(Channel::Blue, vec![0, 0])
            .decoder(decoder)
            .build()
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        let first = lut.table().unwrap();
        let second = lut.table().unwrap();

        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_channel_length_mismatch() {
        let lut = PaletteColorLookupTable::builder()
            .shared_descriptor((3, 0, 8))
            .segmented_data(Channel::Red, vec![0, 0, 0])
            .segmented_data(Channel::Green, vec![0, 0])
            .data(Channel::Blue, vec![1, 2, 3])
            .decoder(MockDecoder::default())
            .build()
            .unwrap();

        assert_eq!(
            lut.table(),
            Err(LutError::ChannelLengthMismatch {
                red: 3,
                green: 2,
                blue: 3,
            })
        );
    }

    #[test]
    fn test_underfilled_segmented_channels() {
        let program = vec![0, 2, 9];
        let lut = PaletteColorLookupTable::builder()
            .shared_descriptor((4, 0, 8))
            .segmented_data(Channel::Red, program.clone())
            .segmented_data(Channel::Green, program.clone())
            .segmented_data(Channel::Blue, program)
            .build()
            .unwrap();

        assert_eq!(
            lut.table(),
            Err(LutError::DecodedLengthMismatch {
                expected: 4,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_decode_failure_is_reported_on_materialization() {
        let lut = PaletteColorLookupTable::builder()
            .shared_descriptor((4, 0, 8))
            .segmented_data(Channel::Red, vec![0, 2, 5, 2, 0, 0])
            .data(Channel::Green, vec![0; 4])
            .data(Channel::Blue, vec![0; 4])
            .build()
            .unwrap();

        assert_eq!(lut.table(), Err(LutError::UnsupportedSegment { offset: 3 }));
        assert_eq!(lut.table(), Err(LutError::UnsupportedSegment { offset: 3 }));
    }

    #[test]
    fn test_descriptor_mismatch_fails_construction() {
        let result = PaletteColorLookupTable::builder()
            .descriptor(Channel::Red, (4, 0, 8))
            .descriptor(Channel::Green, (4, 0, 16))
            .descriptor(Channel::Blue, (4, 0, 8))
            .data(Channel::Red, vec![0; 4])
            .data(Channel::Green, vec![0; 4])
            .data(Channel::Blue, vec![0; 4])
            .build();

        assert!(matches!(
            result.unwrap_err(),
            LutError::DescriptorMismatch {
                field: "bits per entry",
                red: 8,
                green: 16,
                blue: 8,
            }
        ));
    }

    #[test]
    fn test_entry_count_and_first_value_mismatch() {
        let descriptors = |a: (u16, i32, u16), b: (u16, i32, u16)| {
            [ChannelDescriptor::from(a), ChannelDescriptor::from(a), ChannelDescriptor::from(b)]
        };
        let sources = || {
            [
                ChannelSource::Explicit(vec![0; 4]),
                ChannelSource::Explicit(vec![0; 4]),
                ChannelSource::Explicit(vec![0; 4]),
            ]
        };

        let entries = PaletteColorLookupTable::new(descriptors((4, 0, 8), (5, 0, 8)), sources(), None);
        assert!(matches!(
            entries.unwrap_err(),
            LutError::DescriptorMismatch { field: "number of entries", .. }
        ));

        let first = PaletteColorLookupTable::new(descriptors((4, 0, 8), (4, 1, 8)), sources(), None);
        assert!(matches!(
            first.unwrap_err(),
            LutError::DescriptorMismatch { field: "first value mapped", .. }
        ));
    }

    #[test]
    fn test_unsupported_bits_per_entry() {
        let result = explicit_table((2, 0, 12), vec![0; 2], vec![0; 2], vec![0; 2]);
        assert_eq!(result.unwrap_err(), LutError::UnsupportedBitsPerEntry(12));
    }

    #[test]
    fn test_data_conflict() {
        let result = PaletteColorLookupTable::builder()
            .shared_descriptor((2, 0, 8))
            .data(Channel::Red, vec![1, 2])
            .data(Channel::Green, vec![1, 2])
            .data(Channel::Blue, vec![1, 2])
            .segmented_data(Channel::Blue, vec![0, 2, 7])
            .build();

        assert_eq!(result.unwrap_err(), LutError::DataConflict(Channel::Blue));
    }

    #[test]
    fn test_missing_data() {
        let result = PaletteColorLookupTable::builder()
            .shared_descriptor((2, 0, 8))
            .data(Channel::Red, vec![1, 2])
            .data(Channel::Blue, vec![1, 2])
            .build();

        assert_eq!(result.unwrap_err(), LutError::MissingData(Channel::Green));
    }

    #[test]
    fn test_missing_descriptor() {
        let result = PaletteColorLookupTable::builder()
            .descriptor(Channel::Red, (2, 0, 8))
            .descriptor(Channel::Green, (2, 0, 8))
            .data(Channel::Red, vec![1, 2])
            .data(Channel::Green, vec![1, 2])
            .data(Channel::Blue, vec![1, 2])
            .build();

        assert_eq!(result.unwrap_err(), LutError::MissingDescriptor(Channel::Blue));
    }

    #[test]
    fn test_explicit_length_mismatch() {
        let result = explicit_table((3, 0, 8), vec![0; 3], vec![0; 2], vec![0; 3]);
        assert_eq!(
            result.unwrap_err(),
            LutError::LengthMismatch {
                channel: Channel::Green,
                expected: 3,
                actual: 2,
            }
        );

        let sentinel = explicit_table((0, 0, 8), vec![0; 3], vec![0; 3], vec![0; 3]);
        assert!(matches!(
            sentinel.unwrap_err(),
            LutError::LengthMismatch { expected: 65536, actual: 3, .. }
        ));
    }

    #[test]
    fn test_wide_entries_rejected_by_default() {
        let result = explicit_table((2, 0, 8), vec![0, 0x1ff], vec![0; 2], vec![0; 2]);
        assert_eq!(
            result.unwrap_err(),
            LutError::EntryOutOfRange {
                channel: Channel::Red,
                value: 0x1ff,
                bits: 8,
            }
        );
    }

    #[test]
    fn test_wide_entries_masked_when_validation_disabled() {
        let lut = PaletteColorLookupTable::builder()
            .shared_descriptor((2, 0, 8))
            .data(Channel::Red, vec![0x1ff, 0x100])
            .data(Channel::Green, vec![1, 2])
            .data(Channel::Blue, vec![3, 4])
            .config(LutConfig::builder().validate_entries(false).build())
            .build()
            .unwrap();

        assert_eq!(lut.table().unwrap(), &[[0xff, 1, 3], [0x00, 2, 4]]);
    }

    #[test]
    fn test_uid_supplied_and_generated() {
        let supplied = PaletteColorLookupTable::builder()
            .shared_descriptor((1, 0, 8))
            .data(Channel::Red, vec![0])
            .data(Channel::Green, vec![0])
            .data(Channel::Blue, vec![0])
            .uid("1.2.840.10008.1")
            .build()
            .unwrap();
        assert_eq!(supplied.uid(), "1.2.840.10008.1");

        let generated = explicit_table((1, 0, 8), vec![0], vec![0], vec![0]).unwrap();
        assert!(generated.uid().starts_with("2.25."));

        let rooted = PaletteColorLookupTable::builder()
            .shared_descriptor((1, 0, 8))
            .data(Channel::Red, vec![0])
            .data(Channel::Green, vec![0])
            .data(Channel::Blue, vec![0])
            .config(LutConfig::builder().uid_root("1.3.6.1.4.1.9590.").build())
            .build()
            .unwrap();
        assert!(rooted.uid().starts_with("1.3.6.1.4.1.9590."));
    }

    #[test]
    fn test_accessors() {
        let lut = explicit_table((2, -100, 8), vec![1, 2], vec![3, 4], vec![5, 6]).unwrap();

        assert_eq!(lut.first_value_mapped(), -100);
        assert_eq!(lut.descriptor(), ChannelDescriptor::new(2, -100, 8));
        assert_eq!(lut.source(Channel::Green), &ChannelSource::Explicit(vec![3, 4]));
    }

    #[test]
    fn test_lookup_clamps_to_table() {
        let lut = explicit_table(
            (4, 100, 8),
            vec![10, 20, 30, 40],
            vec![0; 4],
            vec![0; 4],
        )
        .unwrap();

        assert_eq!(lut.lookup(99).unwrap(), [10, 0, 0]);
        assert_eq!(lut.lookup(102).unwrap(), [30, 0, 0]);
        assert_eq!(lut.lookup(1000).unwrap(), [40, 0, 0]);
        assert_eq!(
            lut.apply(&[100, 101, 103]).unwrap(),
            vec![[10, 0, 0], [20, 0, 0], [40, 0, 0]]
        );
    }

    #[test]
    fn test_sixteen_bit_lookup_uses_display_table() {
        let ramp: Vec<u16> = (0..=u16::MAX).collect();
        let lut = explicit_table((0, 0, 16), ramp.clone(), ramp.clone(), ramp).unwrap();

        assert_eq!(lut.lookup(0).unwrap(), [0, 0, 0]);
        assert_eq!(lut.lookup(512).unwrap(), [2, 2, 2]);
        assert_eq!(lut.lookup(65535).unwrap(), [254, 254, 254]);
    }

    #[test]
    fn test_short_sixteen_bit_lookup_resolves_to_bucket_sample() {
        let red: Vec<u16> = (0..1000u16).map(|i| i * 65).collect();
        let zeros = vec![0u16; 1000];
        let lut = explicit_table((1000, 0, 16), red, zeros.clone(), zeros).unwrap();

        // entry 768 -> 49920 / 257 = 194.2
        assert_eq!(lut.lookup(768).unwrap(), [194, 0, 0]);
        assert_eq!(lut.lookup(999).unwrap(), [194, 0, 0]);
        // entry 512 -> 33280 / 257 = 129.4
        assert_eq!(lut.lookup(767).unwrap(), [129, 0, 0]);
        // values past the last entry clamp into the same bucket
        assert_eq!(lut.lookup(5000).unwrap(), [194, 0, 0]);
    }

    #[test]
    fn test_from_color_map() {
        let lut = PaletteColorLookupTable::from_color_map(ColorMap::Viridis, 256, 0).unwrap();
        let expected = ColorMap::Viridis.generate(256).unwrap();

        assert_eq!(lut.bits_per_entry(), BitsPerEntry::Eight);
        assert_eq!(lut.table().unwrap(), expected.as_slice());

        let full = PaletteColorLookupTable::from_color_map(ColorMap::Gray, 65536, 0).unwrap();
        assert_eq!(full.descriptor().number_of_entries, 0);
        assert_eq!(full.table().unwrap().len(), 65536);

        assert_eq!(
            PaletteColorLookupTable::from_color_map(ColorMap::Hot, 65537, 0).unwrap_err(),
            LutError::InvalidBins(65537)
        );
    }

    #[test]
    fn test_table_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PaletteColorLookupTable>();

        let lut = Arc::new(PaletteColorLookupTable::from_color_map(ColorMap::Magma, 64, 0).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let lut = Arc::clone(&lut);
                std::thread::spawn(move || lut.table().map(|t| t.to_vec()))
            })
            .collect();

        let expected = lut.table().unwrap().to_vec();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    }
}
