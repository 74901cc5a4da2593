//! I/O layer: directory discovery for image and result files, and
//! `writers` for grayscale PNG/JPEG outputs and JSON documents.
pub mod discovery;
pub use discovery::{scan_images_flat, scan_images_recursive, scan_json_recursive};

pub mod writers;
