use image::imageops;
use image::RgbaImage;
use std::error::Error;
use std::path::Path;

/// Smallest axis-aligned box `(x, y, width, height)` enclosing every pixel
/// with non-zero alpha, or `None` if the image is fully transparent.
pub fn alpha_bbox(image: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[3] != 0 {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    if found {
        Some((min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    } else {
        None
    }
}

/// Crops `path_in` to the bounding box of its non-transparent pixels and
/// saves the result, overwriting the source unless `path_out` is given.
///
/// The image is normalized to RGBA first so the alpha channel always exists
/// and survives the crop. A fully transparent image is left untouched, and
/// an in-place crop that would not change anything skips the rewrite, so the
/// operation is idempotent.
pub fn autocrop(path_in: &Path, path_out: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let image = image::open(path_in)
        .map_err(|e| format!("Failed to open {}: {}", path_in.display(), e))?
        .to_rgba8();

    let (x, y, w, h) = match alpha_bbox(&image) {
        Some(bbox) => bbox,
        None => return Ok(()),
    };

    if path_out.is_none() && (x, y, w, h) == (0, 0, image.width(), image.height()) {
        return Ok(());
    }

    let cropped = imageops::crop_imm(&image, x, y, w, h).to_image();
    let dest = path_out.unwrap_or(path_in);
    cropped
        .save(dest)
        .map_err(|e| format!("Failed to save {}: {}", dest.display(), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("deckicons-crop-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir.join(name)
    }

    #[test]
    fn test_bbox_of_fully_transparent_image_is_none() {
        let image = RgbaImage::new(8, 8);
        assert_eq!(alpha_bbox(&image), None);
    }

    #[test]
    fn test_bbox_of_single_pixel() {
        let mut image = RgbaImage::new(8, 8);
        image.put_pixel(3, 5, Rgba([0, 0, 0, 255]));
        assert_eq!(alpha_bbox(&image), Some((3, 5, 1, 1)));
    }

    #[test]
    fn test_bbox_spans_all_opaque_pixels() {
        let mut image = RgbaImage::new(10, 10);
        image.put_pixel(2, 1, Rgba([255, 0, 0, 128]));
        image.put_pixel(7, 6, Rgba([0, 255, 0, 1]));
        assert_eq!(alpha_bbox(&image), Some((2, 1, 6, 6)));
    }

    #[test]
    fn test_autocrop_trims_to_opaque_region() {
        let path = temp_path("trim.png");
        let mut image = RgbaImage::new(10, 10);
        image.put_pixel(3, 4, Rgba([0, 0, 0, 255]));
        image.put_pixel(4, 5, Rgba([0, 0, 0, 255]));
        image.save(&path).expect("save fixture");

        autocrop(&path, None).expect("autocrop");

        let cropped = image::open(&path).expect("reopen").to_rgba8();
        assert_eq!((cropped.width(), cropped.height()), (2, 2));
        assert_eq!(cropped.get_pixel(0, 0).0[3], 255);
    }

    #[test]
    fn test_autocrop_is_idempotent() {
        let path = temp_path("idem.png");
        let mut image = RgbaImage::new(10, 10);
        image.put_pixel(1, 1, Rgba([10, 20, 30, 200]));
        image.put_pixel(6, 8, Rgba([40, 50, 60, 255]));
        image.save(&path).expect("save fixture");

        autocrop(&path, None).expect("first crop");
        let first = fs::read(&path).expect("read first");
        autocrop(&path, None).expect("second crop");
        let second = fs::read(&path).expect("read second");
        assert_eq!(first, second);
    }

    #[test]
    fn test_autocrop_leaves_fully_transparent_image_alone() {
        let path = temp_path("empty.png");
        let image = RgbaImage::new(6, 6);
        image.save(&path).expect("save fixture");
        let before = fs::read(&path).expect("read before");

        autocrop(&path, None).expect("autocrop");

        let after = fs::read(&path).expect("read after");
        assert_eq!(before, after);
    }

    #[test]
    fn test_autocrop_to_separate_output_keeps_source() {
        let src = temp_path("src.png");
        let dst = temp_path("dst.png");
        let mut image = RgbaImage::new(10, 10);
        image.put_pixel(5, 5, Rgba([0, 0, 0, 255]));
        image.save(&src).expect("save fixture");

        autocrop(&src, Some(&dst)).expect("autocrop");

        let source = image::open(&src).expect("reopen source").to_rgba8();
        assert_eq!((source.width(), source.height()), (10, 10));
        let cropped = image::open(&dst).expect("open output").to_rgba8();
        assert_eq!((cropped.width(), cropped.height()), (1, 1));
    }
}
