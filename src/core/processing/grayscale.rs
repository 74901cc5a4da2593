use image::DynamicImage;

// ITU-R 601-2 luma weights in 16.16 fixed point; they sum to 1 << 16.
const WEIGHT_R: u32 = 19595;
const WEIGHT_G: u32 = 38470;
const WEIGHT_B: u32 = 7471;

/// Single-channel 8-bit image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage8 {
    pub cols: usize,
    pub rows: usize,
    pub data: Vec<u8>,
}

#[inline]
pub fn luma_601(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * WEIGHT_R + g as u32 * WEIGHT_G + b as u32 * WEIGHT_B + 0x8000) >> 16) as u8
}

#[inline]
fn scale_u16_to_u8(v: u16) -> u8 {
    ((v as u32 * 255 + 32767) / 65535) as u8
}

/// Converts any decoded image to 8-bit luma. Alpha is dropped, 16-bit
/// gray is rescaled, and colour goes through the 601-2 weights.
pub fn to_luma8(img: DynamicImage) -> GrayImage8 {
    let cols = img.width() as usize;
    let rows = img.height() as usize;

    let data = match img {
        DynamicImage::ImageLuma8(buf) => buf.into_raw(),
        DynamicImage::ImageLumaA8(buf) => buf.into_raw().chunks_exact(2).map(|p| p[0]).collect(),
        DynamicImage::ImageLuma16(buf) => buf.into_raw().into_iter().map(scale_u16_to_u8).collect(),
        DynamicImage::ImageLumaA16(buf) => buf
            .into_raw()
            .chunks_exact(2)
            .map(|p| scale_u16_to_u8(p[0]))
            .collect(),
        other => {
            let rgb = other.to_rgb8();
            let mut out = Vec::with_capacity(cols * rows);
            for px in rgb.as_raw().chunks_exact(3) {
                out.push(luma_601(px[0], px[1], px[2]));
            }
            out
        }
    };

    GrayImage8 { cols, rows, data }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, LumaA, Rgb, Rgba};

    #[test]
    fn test_primary_colours() {
        assert_eq!(luma_601(255, 0, 0), 76);
        assert_eq!(luma_601(0, 255, 0), 150);
        assert_eq!(luma_601(0, 0, 255), 29);
        assert_eq!(luma_601(255, 255, 255), 255);
        assert_eq!(luma_601(0, 0, 0), 0);
    }

    #[test]
    fn test_rgb_image_to_luma() {
        let img = ImageBuffer::from_fn(4, 3, |x, _| {
            if x % 2 == 0 { Rgb([255u8, 0, 0]) } else { Rgb([0u8, 255, 0]) }
        });
        let gray = to_luma8(DynamicImage::ImageRgb8(img));
        assert_eq!((gray.cols, gray.rows), (4, 3));
        assert_eq!(&gray.data[..4], &[76, 150, 76, 150]);
    }

    #[test]
    fn test_alpha_is_ignored() {
        let img = ImageBuffer::from_pixel(2, 2, Rgba([0u8, 0, 255, 0]));
        let gray = to_luma8(DynamicImage::ImageRgba8(img));
        assert!(gray.data.iter().all(|&v| v == 29));

        let img = ImageBuffer::from_pixel(2, 2, LumaA([200u8, 10]));
        let gray = to_luma8(DynamicImage::ImageLumaA8(img));
        assert_eq!(gray.data, vec![200; 4]);
    }

    #[test]
    fn test_luma_passthrough_and_16bit_scaling() {
        let img = ImageBuffer::from_fn(3, 1, |x, _| Luma([x as u8 * 10]));
        let gray = to_luma8(DynamicImage::ImageLuma8(img));
        assert_eq!(gray.data, vec![0, 10, 20]);

        let img = ImageBuffer::from_fn(3, 1, |x, _| Luma([[0u16, 32896, 65535][x as usize]]));
        let gray = to_luma8(DynamicImage::ImageLuma16(img));
        assert_eq!(gray.data, vec![0, 128, 255]);
    }
}
