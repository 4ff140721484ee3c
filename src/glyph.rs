//! Renders single characters to transparent PNGs.
//!
//! Each character is wrapped in a minimal SVG document and rasterized with
//! resvg, which handles font resolution and text-to-path conversion. The
//! final tight bounding box comes from the auto-crop step, so the canvas
//! only needs to be big enough to contain the glyph ink.

use crate::crop;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tiny_skia::{Pixmap, Transform};
use usvg::fontdb;

/// Square canvas edge, in pixels, before cropping.
const CANVAS_SIZE: u32 = 1024;
/// Font size used for every glyph; large enough to fill the canvas.
const FONT_SIZE: f32 = 640.0;

/// One glyph to render: the character, the output file stem, and an
/// optional font file that overrides the system default.
#[derive(Clone, Copy, Debug)]
pub struct GlyphSpec {
    pub character: &'static str,
    pub name: &'static str,
    pub font: Option<&'static str>,
}

/// Renders glyphs to transparent PNGs.
///
/// The system font database is loaded once and shared across renders;
/// per-glyph font overrides get their own single-font database so no
/// fallback substitution can kick in.
pub struct GlyphRenderer {
    system_fonts: Arc<fontdb::Database>,
}

impl GlyphRenderer {
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self {
            system_fonts: Arc::new(db),
        }
    }

    /// Renders a single character onto a transparent square canvas.
    ///
    /// With `font_path` given, exactly that file is used; a missing or
    /// unreadable font file is an error. Without it, the character resolves
    /// against the system sans-serif font.
    pub fn render(
        &self,
        character: &str,
        font_path: Option<&Path>,
    ) -> Result<Pixmap, Box<dyn Error>> {
        let (db, family) = match font_path {
            Some(path) => {
                let mut db = fontdb::Database::new();
                db.load_font_file(path)
                    .map_err(|e| format!("Failed to load font {}: {}", path.display(), e))?;
                let family = db
                    .faces()
                    .next()
                    .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
                    .ok_or_else(|| format!("No usable font face in {}", path.display()))?;
                (Arc::new(db), family)
            }
            None => (Arc::clone(&self.system_fonts), "sans-serif".to_string()),
        };

        let svg = svg_markup(CANVAS_SIZE, FONT_SIZE, &family, character);
        let mut options = usvg::Options::default();
        options.fontdb = db;
        let tree = usvg::Tree::from_str(&svg, &options)?;

        let mut pixmap = Pixmap::new(CANVAS_SIZE, CANVAS_SIZE)
            .ok_or("Failed to allocate glyph canvas")?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
        Ok(pixmap)
    }

    /// Renders a glyph spec, writes `<name>.png` into `out_dir`, and crops
    /// the file in place. Returns the output path.
    pub fn render_to_file(
        &self,
        spec: &GlyphSpec,
        out_dir: &Path,
    ) -> Result<PathBuf, Box<dyn Error>> {
        let pixmap = self.render(spec.character, spec.font.map(Path::new))?;
        let out_path = out_dir.join(format!("{}.png", spec.name));
        pixmap
            .save_png(&out_path)
            .map_err(|e| format!("Failed to save {}: {}", out_path.display(), e))?;
        crop::autocrop(&out_path, None)?;
        Ok(out_path)
    }
}

impl Default for GlyphRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// The SVG document for one centered character on a transparent canvas.
fn svg_markup(canvas: u32, font_size: f32, family: &str, character: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}" viewBox="0 0 {s} {s}"><text x="{c}" y="{c}" font-family="{family}" font-size="{fs}" text-anchor="middle" dominant-baseline="central" fill="#000000">{ch}</text></svg>"##,
        s = canvas,
        c = canvas / 2,
        family = xml_escape(family),
        fs = font_size,
        ch = xml_escape(character),
    )
}

fn xml_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
