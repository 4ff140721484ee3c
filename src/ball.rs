//! Harvey ball icons: a solid wedge for the filled fraction plus a thin
//! outline ring over the remainder, both in one color.

use crate::crop;
use crate::wedge::{cut_wedge, polygon_path, Wedge};
use std::error::Error;
use std::path::{Path, PathBuf};
use tiny_skia::{Color, FillRule, Paint, Pixmap, Transform};

/// Square canvas edge, in pixels, before cropping.
const CANVAS_SIZE: u32 = 150;
/// Disc radius as a fraction of the canvas edge.
const RADIUS_RATIO: f32 = 0.48;
/// Retention ratio for the remainder ring: keep the outer 5% of the radius.
const CUT_RETAIN: f32 = 0.95;

/// The percentage fragment used in Harvey ball filenames: the proportion
/// formatted to two decimals with the separator stripped, so 0.5 becomes
/// "050" and 1.0 becomes "100".
///
/// Rounding is `format!("{:.2}")`'s round-to-nearest (ties to even), which
/// turns 1/3 into "033".
pub fn percent_fragment(proportion: f64) -> String {
    format!("{:.2}", proportion).replace('.', "")
}

/// Output filename for a proportion and color, e.g. `050-black.png`.
pub fn ball_filename(proportion: f64, color_name: &str) -> String {
    format!("{}-{}.png", percent_fragment(proportion), color_name)
}

/// Draws the ball for `proportion` in [0, 1] onto a transparent square
/// canvas. The filled slice starts at 12 o'clock and sweeps clockwise; the
/// remainder slice is cut into a ring so only the circle outline remains
/// over the empty fraction.
///
/// Both degenerate ends are valid: `proportion == 0.0` renders just the
/// outline circle, `proportion == 1.0` a solid disc.
pub fn render_ball(proportion: f64, color: Color) -> Result<Pixmap, Box<dyn Error>> {
    let mut pixmap =
        Pixmap::new(CANVAS_SIZE, CANVAS_SIZE).ok_or("Failed to allocate ball canvas")?;
    let center = CANVAS_SIZE as f32 / 2.0;
    let radius = CANVAS_SIZE as f32 * RADIUS_RATIO;

    let filled_sweep = (proportion * 360.0) as f32;
    let filled = Wedge {
        radius,
        start_angle: 0.0,
        sweep: filled_sweep,
    };
    let remainder = Wedge {
        radius,
        start_angle: filled_sweep,
        sweep: 360.0 - filled_sweep,
    };

    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;

    if let Some(path) = polygon_path(&filled.solid_vertices(), center, center) {
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
    let ring = cut_wedge(&remainder.arc_vertices(), CUT_RETAIN);
    if let Some(path) = polygon_path(&ring, center, center) {
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    Ok(pixmap)
}

/// Renders one ball, writes it into `out_dir` under its proportion-encoded
/// filename, and crops the file in place. Returns the output path.
pub fn render_ball_to_file(
    proportion: f64,
    color: Color,
    color_name: &str,
    out_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let pixmap = render_ball(proportion, color)?;
    let out_path = out_dir.join(ball_filename(proportion, color_name));
    pixmap
        .save_png(&out_path)
        .map_err(|e| format!("Failed to save {}: {}", out_path.display(), e))?;
    crop::autocrop(&out_path, None)?;
    Ok(out_path)
}
