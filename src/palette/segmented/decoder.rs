use crate::palette::common::entry::LutEntry;
use crate::palette::common::error::Result;

pub trait SegmentDecoder {
    /// Expands `program` into at most `number_of_entries` entries.
    ///
    /// Only the entries actually written are returned, so an under-filled
    /// program shows up as a short output.
    fn expand<T: LutEntry>(&self, program: &[u16], number_of_entries: usize) -> Result<Vec<T>>;
}
