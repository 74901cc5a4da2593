//! Shared types and enums used across xrayprep.
//! Includes the supported `ImageFormat`s and the `ResizeMode` applied when
//! fitting radiographs to the model's input size.
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Image encodings accepted as input and produced as output.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Case-insensitive match on `png`, `jpg` and `jpeg`. Anything else is unsupported.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("png") {
            Some(ImageFormat::Png)
        } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
            Some(ImageFormat::Jpeg)
        } else {
            None
        }
    }

    pub fn is_supported(path: &Path) -> bool {
        Self::from_path(path).is_some()
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Png => write!(f, "PNG"),
            ImageFormat::Jpeg => write!(f, "JPEG"),
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Resize straight to the target size, ignoring aspect ratio
    #[default]
    Stretch,
    /// Keep aspect ratio, then zero-pad to the target size (centered)
    Letterbox,
}

impl std::fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResizeMode::Stretch => write!(f, "Stretch"),
            ResizeMode::Letterbox => write!(f, "Letterbox"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert_eq!(ImageFormat::from_path(Path::new("a.PNG")), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_path(Path::new("dir/b.Jpg")), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_path(Path::new("c.jpeg")), Some(ImageFormat::Jpeg));
    }

    #[test]
    fn test_unsupported_extensions() {
        assert!(!ImageFormat::is_supported(Path::new("notes.txt")));
        assert!(!ImageFormat::is_supported(Path::new("scan.tiff")));
        assert!(!ImageFormat::is_supported(Path::new("png")));
        assert!(!ImageFormat::is_supported(Path::new("a.png.json")));
    }
}
