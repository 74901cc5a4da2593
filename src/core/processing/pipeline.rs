use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::core::params::PreprocessParams;
use crate::core::processing::grayscale::{GrayImage8, to_luma8};
use crate::core::processing::resize::resize_gray_image;
use crate::error::Result;

/// Decodes an image, trusting the file content over its extension.
pub fn decode_image(input: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(input)?.with_guessed_format()?.decode()?;
    debug!(
        "Decoded {:?}: {}x{} {:?}",
        input,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

/// Grayscale conversion followed by the resize to the configured target size.
pub fn process_image_pipeline(img: DynamicImage, params: &PreprocessParams) -> Result<GrayImage8> {
    let gray = to_luma8(img);
    resize_gray_image(
        &gray,
        params.width as usize,
        params.height as usize,
        params.resize_mode,
    )
}
