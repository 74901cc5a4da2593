use jpeg_encoder::{ColorType, Encoder};

use crate::error::{Error, Result};

pub fn encode_gray_jpeg(cols: usize, rows: usize, data: &[u8], quality: u8) -> Result<Vec<u8>> {
    let width = u16::try_from(cols).map_err(Error::encode)?;
    let height = u16::try_from(rows).map_err(Error::encode)?;

    let mut buf = Vec::new();
    let encoder = Encoder::new(&mut buf, quality);
    encoder
        .encode(data, width, height, ColorType::Luma)
        .map_err(Error::encode)?;
    Ok(buf)
}
