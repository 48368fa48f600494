//! Common utilities module
//!
//! Shared error type, channel naming, entry widths and the small numeric
//! helpers used across the palette module.

pub mod channel;
pub mod entry;
pub mod error;
pub mod rescale;
pub mod uid;

pub use channel::Channel;
pub use entry::LutEntry;
pub use error::{LutError, Result};
pub use rescale::rescale;
pub use uid::generate_uid;
