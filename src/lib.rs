//! Generators for the deck icon assets: arrow and symbol glyphs rendered
//! from fonts, and Harvey ball pie icons, all exported as auto-cropped
//! transparent PNGs. Each binary under `src/bin/` holds one fixed input
//! list and runs a single render/export/crop pass over it.

pub mod ball;
pub mod crop;
pub mod glyph;
pub mod wedge;

/// Directory the generators write into, relative to the working directory.
pub const OUTPUT_DIR: &str = "assets";
