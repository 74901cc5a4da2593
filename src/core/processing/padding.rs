use tracing::debug;

use crate::error::{Error, Result};

/// Centers a `cols x rows` U8 image on a zero-filled `target_cols x target_rows` canvas.
pub fn pad_to_size(
    data: &[u8],
    cols: usize,
    rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> Result<Vec<u8>> {
    if cols > target_cols || rows > target_rows {
        return Err(Error::InvalidArgument {
            arg: "padding",
            value: format!("{}x{} does not fit in {}x{}", cols, rows, target_cols, target_rows),
        });
    }
    if data.len() != cols * rows {
        return Err(Error::InvalidArgument {
            arg: "padding",
            value: format!("buffer of {} bytes for {}x{}", data.len(), cols, rows),
        });
    }

    let pad_cols = (target_cols - cols) / 2;
    let pad_rows = (target_rows - rows) / 2;

    debug!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );

    let mut padded = vec![0u8; target_cols * target_rows];
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..rows {
        let src_offset = row * cols;
        let dst_offset = (row + pad_rows) * target_cols + pad_cols;
        padded[dst_offset..dst_offset + cols].copy_from_slice(&data[src_offset..src_offset + cols]);
    }
    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_centers_content() {
        let padded = pad_to_size(&[1, 2, 3, 4], 2, 2, 4, 4).unwrap();
        #[rustfmt::skip]
        let expected = vec![
            0, 0, 0, 0,
            0, 1, 2, 0,
            0, 3, 4, 0,
            0, 0, 0, 0,
        ];
        assert_eq!(padded, expected);
    }

    #[test]
    fn test_odd_padding_goes_after() {
        let padded = pad_to_size(&[9, 9], 2, 1, 3, 2).unwrap();
        assert_eq!(padded, vec![9, 9, 0, 0, 0, 0]);
    }

    #[test]
    fn test_oversized_input_is_rejected() {
        assert!(pad_to_size(&[0; 6], 3, 2, 2, 2).is_err());
        assert!(pad_to_size(&[0; 5], 3, 2, 4, 4).is_err());
    }
}
