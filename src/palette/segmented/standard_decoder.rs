//! Segmented LUT decoder
//!
//! Each segment is an opcode token followed by two operands:
//!
//! | opcode | segment  | operands             |
//! |--------|----------|----------------------|
//! | 0      | discrete | `length`, `value`    |
//! | 1      | linear   | `length`, `endpoint` |
//! | 2      | indirect | not supported        |

use tracing::{debug, trace};

use crate::palette::common::entry::LutEntry;
use crate::palette::common::error::{LutError, Result};
use crate::palette::segmented::decoder::SegmentDecoder;
use crate::palette::segmented::types::{Segment, SegmentOpcode};

/// Opcode token plus two operands.
const SEGMENT_WORDS: usize = 3;

/// Decoder for discrete and linear segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentedLutDecoder;

/// Parses a whole program into segments.
///
/// Fails on the first indirect segment, unknown opcode or truncated segment.
pub fn parse_segments(program: &[u16]) -> Result<Vec<Segment>> {
    let mut segments = Vec::with_capacity(program.len() / SEGMENT_WORDS);
    let mut cursor = 0;

    while cursor < program.len() {
        let opcode = SegmentOpcode::from_token(program[cursor], cursor)?;
        if opcode == SegmentOpcode::Indirect {
            return Err(LutError::UnsupportedSegment { offset: cursor });
        }

        let (length, operand) = match program.get(cursor + 1..cursor + SEGMENT_WORDS) {
            Some(&[length, operand]) => (length, operand),
            _ => return Err(LutError::TruncatedSegment { offset: cursor }),
        };

        let segment = match opcode {
            SegmentOpcode::Discrete => Segment::Discrete {
                length,
                value: operand,
            },
            _ => Segment::Linear {
                length,
                endpoint: operand,
            },
        };
        trace!(offset = cursor, ?segment, "Parsed segment");

        segments.push(segment);
        cursor += SEGMENT_WORDS;
    }

    Ok(segments)
}

impl SegmentDecoder for SegmentedLutDecoder {
    fn expand<T: LutEntry>(&self, program: &[u16], number_of_entries: usize) -> Result<Vec<T>> {
        let segments = parse_segments(program)?;
        let mut output: Vec<T> = Vec::with_capacity(number_of_entries);

        for (index, segment) in segments.iter().enumerate() {
            let offset = output.len();
            let length = segment.length();
            if offset + length > number_of_entries {
                return Err(LutError::SegmentOutOfRange {
                    offset,
                    length,
                    capacity: number_of_entries,
                });
            }

            match *segment {
                Segment::Discrete { value, .. } => {
                    let value = entry_value::<T>(value)?;
                    output.resize(offset + length, value);
                }
                Segment::Linear { endpoint, .. } => {
                    let start = match output.last() {
                        Some(start) => *start,
                        None => {
                            return Err(LutError::LinearSegmentWithoutStart {
                                offset: index * SEGMENT_WORDS,
                            });
                        }
                    };
                    let endpoint = entry_value::<T>(endpoint)?;
                    interpolate(&mut output, start, endpoint, length);
                }
            }
        }

        debug!(
            segments = segments.len(),
            entries = output.len(),
            capacity = number_of_entries,
            bits = T::BITS,
            "Expanded segmented LUT"
        );
        Ok(output)
    }
}

fn entry_value<T: LutEntry>(value: u16) -> Result<T> {
    T::from_raw(value).ok_or(LutError::SegmentValueOutOfRange {
        value,
        bits: T::BITS,
    })
}

/// Appends `length` entries ramping from `start` to `endpoint`.
///
/// The level is accumulated one step at a time and each entry is the
/// accumulated level rounded to the nearest integer.
fn interpolate<T: LutEntry>(output: &mut Vec<T>, start: T, endpoint: T, length: usize) {
    if length == 0 {
        return;
    }

    let max = T::max_value().to_level();
    let step = (endpoint.to_level() - start.to_level()) / length as f64;
    let mut level = start.to_level();

    for _ in 0..length {
        level += step;
        let rounded = level.round().clamp(0.0, max);
        output.push(T::from_level(rounded).unwrap_or(endpoint));
    }
}
