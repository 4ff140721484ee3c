//! Renders the general icon glyphs (check, cross, question, plus, minus,
//! ellipsis) to transparent PNGs. Two of them need a specific font; the
//! rest use the system default.

use deckicons::glyph::{GlyphRenderer, GlyphSpec};
use deckicons::OUTPUT_DIR;
use std::error::Error;
use std::fs;
use std::path::Path;

const ARIAL_BLACK_FONT: &str = "assets/fonts/ariblk.ttf";
const NOTO_SYMBOLS_FONT: &str = "assets/fonts/NotoSansSymbols2-Regular.ttf";

const ICONS: [GlyphSpec; 6] = [
    GlyphSpec { character: "✔", name: "IconCheck", font: None },
    GlyphSpec { character: "✘", name: "IconCross", font: None },
    GlyphSpec { character: "?", name: "IconQuestion", font: Some(ARIAL_BLACK_FONT) },
    GlyphSpec { character: "✚", name: "IconPlus", font: None },
    GlyphSpec { character: "⚊", name: "IconMinus", font: Some(NOTO_SYMBOLS_FONT) },
    GlyphSpec { character: "⋯", name: "IconEllipsis", font: None },
];

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out_dir)?;

    let renderer = GlyphRenderer::new();
    for spec in &ICONS {
        let path = renderer.render_to_file(spec, out_dir)?;
        println!("Generated {}", path.display());
    }
    Ok(())
}
