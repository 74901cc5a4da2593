//! Output encoders: grayscale JPEG (`jpeg-encoder`), grayscale PNG (`image`)
//! and indented JSON documents.
pub mod jpeg;
pub mod json;
pub mod png;

pub use jpeg::encode_gray_jpeg;
pub use json::write_pretty_json;
pub use png::encode_gray_png;
