//! Renders the Harvey ball icon set: one monochrome ball per canonical
//! proportion, named by its zero-padded percentage.

use deckicons::ball;
use deckicons::OUTPUT_DIR;
use std::error::Error;
use std::fs;
use std::path::Path;
use tiny_skia::Color;

const COLOR_NAME: &str = "black";

const PROPORTIONS: [f64; 6] = [0.0, 0.25, 0.5, 0.75, 1.0, 1.0 / 3.0];

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out_dir)?;

    let color = Color::from_rgba8(0, 0, 0, 255);
    for &proportion in &PROPORTIONS {
        let path = ball::render_ball_to_file(proportion, color, COLOR_NAME, out_dir)?;
        println!("Generated {}", path.display());
    }
    Ok(())
}
