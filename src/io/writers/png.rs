use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::Result;

pub fn encode_gray_png(cols: usize, rows: usize, data: &[u8]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(data, cols as u32, rows as u32, ExtendedColorType::L8)?;
    Ok(buf)
}
