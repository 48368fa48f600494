use anyhow::Context;
use palette_lut::colormap::ColorMap;
use palette_lut::logger;
use palette_lut::palette::{Channel, PaletteColorLookupTable};

use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init();

    let map: ColorMap = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("VIRIDIS")
        .parse()
        .context("parsing colormap name")?;

    info!("Building 8-bit palette from {}", map);
    let lut = PaletteColorLookupTable::from_color_map(map, 256, 0)?;
    let table = lut.table()?;
    info!(uid = lut.uid(), entries = table.len(), "Colormap palette ready");
    for value in [0, 64, 128, 192, 255] {
        info!("  {:>5} -> {:?}", value, lut.lookup(value)?);
    }

    // Full-range 16-bit ramps: red rises, green falls, blue holds mid-level.
    let lut = PaletteColorLookupTable::builder()
        .shared_descriptor((0, 0, 16))
        .segmented_data(Channel::Red, vec![0, 1, 0, 1, 65535, 65535])
        .segmented_data(Channel::Green, vec![0, 1, 65535, 1, 65535, 0])
        .data(Channel::Blue, vec![0x8000; 65536])
        .build()?;
    let table = lut.table()?;
    info!(entries = table.len(), "Segmented palette ready");
    for value in [0, 16384, 32768, 49152, 65535] {
        info!("  {:>5} -> {:?}", value, lut.lookup(value)?);
    }

    Ok(())
}
