//! Renders the eight directional arrow glyphs to transparent PNGs.

use deckicons::glyph::{GlyphRenderer, GlyphSpec};
use deckicons::OUTPUT_DIR;
use std::error::Error;
use std::fs;
use std::path::Path;

const NOTO_SYMBOLS_FONT: &str = "assets/fonts/NotoSansSymbols2-Regular.ttf";

const ARROWS: [GlyphSpec; 8] = [
    GlyphSpec { character: "\u{1F878}", name: "ArrowW", font: Some(NOTO_SYMBOLS_FONT) },
    GlyphSpec { character: "\u{1F87A}", name: "ArrowE", font: Some(NOTO_SYMBOLS_FONT) },
    GlyphSpec { character: "\u{1F879}", name: "ArrowN", font: Some(NOTO_SYMBOLS_FONT) },
    GlyphSpec { character: "\u{1F87B}", name: "ArrowS", font: Some(NOTO_SYMBOLS_FONT) },
    GlyphSpec { character: "\u{1F87C}", name: "ArrowNW", font: Some(NOTO_SYMBOLS_FONT) },
    GlyphSpec { character: "\u{1F87D}", name: "ArrowNE", font: Some(NOTO_SYMBOLS_FONT) },
    GlyphSpec { character: "\u{1F87E}", name: "ArrowSE", font: Some(NOTO_SYMBOLS_FONT) },
    GlyphSpec { character: "\u{1F87F}", name: "ArrowSW", font: Some(NOTO_SYMBOLS_FONT) },
];

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out_dir)?;

    let renderer = GlyphRenderer::new();
    for spec in &ARROWS {
        let path = renderer.render_to_file(spec, out_dir)?;
        println!("Generated {}", path.display());
    }
    Ok(())
}
