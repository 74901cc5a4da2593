use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::processing::grayscale::GrayImage8;
use crate::error::{Error, Result};
use crate::io::writers::{encode_gray_jpeg, encode_gray_png};
use crate::types::ImageFormat;

/// Encodes by the output file's extension and writes the bytes in one go.
pub fn save_gray_image(image: &GrayImage8, output: &Path, jpeg_quality: u8) -> Result<()> {
    let format = ImageFormat::from_path(output).ok_or_else(|| Error::InvalidArgument {
        arg: "output",
        value: output.display().to_string(),
    })?;

    let bytes = match format {
        ImageFormat::Png => encode_gray_png(image.cols, image.rows, &image.data)?,
        ImageFormat::Jpeg => encode_gray_jpeg(image.cols, image.rows, &image.data, jpeg_quality)?,
    };

    fs::write(output, &bytes)?;
    debug!("save_gray_image: {} {}x{} saved to {:?}", format, image.cols, image.rows, output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GrayImage8 {
        GrayImage8 {
            cols: 16,
            rows: 8,
            data: (0..128).map(|v| (v * 2) as u8).collect(),
        }
    }

    #[test]
    fn test_png_round_trips_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.png");
        save_gray_image(&sample(), &path, 75).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.color(), image::ColorType::L8);
        assert_eq!(decoded.into_luma8().into_raw(), sample().data);
    }

    #[test]
    fn test_jpeg_is_single_channel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.JPEG");
        save_gray_image(&sample(), &path, 90).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.color(), image::ColorType::L8);
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.bmp");
        assert!(save_gray_image(&sample(), &path, 75).is_err());
        assert!(!path.exists());
    }
}
