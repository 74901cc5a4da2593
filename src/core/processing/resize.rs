use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::debug;

use crate::core::processing::grayscale::GrayImage8;
use crate::core::processing::padding::pad_to_size;
use crate::error::{Error, Result};
use crate::types::ResizeMode;

/// Largest size with the source aspect ratio that fits inside the target box.
/// Each side is at least one pixel.
pub fn calculate_fit_dimensions(
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> (usize, usize) {
    let scale_x = target_cols as f64 / original_cols as f64;
    let scale_y = target_rows as f64 / original_rows as f64;

    if scale_x <= scale_y {
        let new_rows = (original_rows as f64 * scale_x).round() as usize;
        (target_cols, new_rows.clamp(1, target_rows))
    } else {
        let new_cols = (original_cols as f64 * scale_y).round() as usize;
        (new_cols.clamp(1, target_cols), target_rows)
    }
}

pub fn resize_u8_image(
    data: &[u8],
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> Result<Vec<u8>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols as u32,
        original_rows as u32,
        data.to_vec(),
        PixelType::U8,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, PixelType::U8);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    Ok(dst_image.into_vec())
}

/// Brings a grayscale image to exactly `target_cols x target_rows`.
pub fn resize_gray_image(
    image: &GrayImage8,
    target_cols: usize,
    target_rows: usize,
    mode: ResizeMode,
) -> Result<GrayImage8> {
    if image.cols == 0 || image.rows == 0 {
        return Err(Error::Resize(format!(
            "empty source image {}x{}",
            image.cols, image.rows
        )));
    }

    let (fit_cols, fit_rows) = match mode {
        ResizeMode::Stretch => (target_cols, target_rows),
        ResizeMode::Letterbox => {
            calculate_fit_dimensions(image.cols, image.rows, target_cols, target_rows)
        }
    };

    debug!(
        "Original size: {}x{}, New size: {}x{} ({})",
        image.cols, image.rows, fit_cols, fit_rows, mode
    );

    // Already at the requested size: skip resampling
    let resized = if (fit_cols, fit_rows) == (image.cols, image.rows) {
        image.data.clone()
    } else {
        resize_u8_image(&image.data, image.cols, image.rows, fit_cols, fit_rows)?
    };

    let data = if (fit_cols, fit_rows) == (target_cols, target_rows) {
        resized
    } else {
        pad_to_size(&resized, fit_cols, fit_rows, target_cols, target_rows)?
    };

    Ok(GrayImage8 {
        cols: target_cols,
        rows: target_rows,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(cols: usize, rows: usize) -> GrayImage8 {
        let data = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| ((r * 7 + c * 3) % 256) as u8))
            .collect();
        GrayImage8 { cols, rows, data }
    }

    #[test]
    fn test_fit_dimensions() {
        assert_eq!(calculate_fit_dimensions(800, 600, 512, 512), (512, 384));
        assert_eq!(calculate_fit_dimensions(600, 800, 512, 512), (384, 512));
        assert_eq!(calculate_fit_dimensions(100, 100, 512, 256), (256, 256));
        assert_eq!(calculate_fit_dimensions(10_000, 1, 64, 64), (64, 1));
    }

    #[test]
    fn test_stretch_produces_exact_target() {
        let img = gradient(80, 60);
        let out = resize_gray_image(&img, 32, 32, ResizeMode::Stretch).unwrap();
        assert_eq!((out.cols, out.rows), (32, 32));
        assert_eq!(out.data.len(), 32 * 32);
    }

    #[test]
    fn test_letterbox_pads_short_side() {
        let img = GrayImage8 {
            cols: 80,
            rows: 40,
            data: vec![200; 80 * 40],
        };
        let out = resize_gray_image(&img, 32, 32, ResizeMode::Letterbox).unwrap();
        assert_eq!((out.cols, out.rows), (32, 32));
        // 32x16 content centered vertically: 8 padding rows above and below
        assert!(out.data[..8 * 32].iter().all(|&v| v == 0));
        assert!(out.data[24 * 32..].iter().all(|&v| v == 0));
        assert!(out.data[8 * 32..24 * 32].iter().all(|&v| v > 150));
    }

    #[test]
    fn test_same_size_is_unchanged() {
        let img = gradient(16, 16);
        let out = resize_gray_image(&img, 16, 16, ResizeMode::Stretch).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_resize_is_deterministic() {
        let img = gradient(123, 77);
        let a = resize_gray_image(&img, 50, 50, ResizeMode::Stretch).unwrap();
        let b = resize_gray_image(&img, 50, 50, ResizeMode::Stretch).unwrap();
        assert_eq!(a, b);
    }
}
