use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ResizeMode;

pub const DEFAULT_RAW_DIR: &str = "data/raw/Dental OPG (Classification)";
pub const DEFAULT_PREPROCESSED_DIR: &str = "data/preprocessed";
pub const DEFAULT_RESULTS_DIR: &str = "data/results";
pub const DEFAULT_ANNOTATIONS_FILE: &str = "data/annotations.json";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/predict";
pub const DEFAULT_TARGET_SIZE: u32 = 512;
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Preprocessing parameters suitable for config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessParams {
    /// Root of the raw image tree, walked recursively
    pub input_dir: PathBuf,
    /// Flat output directory
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub resize_mode: ResizeMode,
    /// Only used for `.jpg`/`.jpeg` outputs
    pub jpeg_quality: u8,
}

impl Default for PreprocessParams {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_RAW_DIR),
            output_dir: PathBuf::from(DEFAULT_PREPROCESSED_DIR),
            width: DEFAULT_TARGET_SIZE,
            height: DEFAULT_TARGET_SIZE,
            resize_mode: ResizeMode::Stretch,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl PreprocessParams {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::ZeroSize {
                width: self.width,
                height: self.height,
            });
        }
        if u16::try_from(self.width).is_err() || u16::try_from(self.height).is_err() {
            return Err(Error::InvalidArgument {
                arg: "size",
                value: format!("{}x{}", self.width, self.height),
            });
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::InvalidArgument {
                arg: "jpeg_quality",
                value: self.jpeg_quality.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceParams {
    /// Flat directory of preprocessed images
    pub input_dir: PathBuf,
    /// Receives one `<image name>.json` per accepted image
    pub output_dir: PathBuf,
    pub endpoint: String,
}

impl Default for InferenceParams {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_PREPROCESSED_DIR),
            output_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl InferenceParams {
    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(Error::InvalidArgument {
                arg: "endpoint",
                value: self.endpoint.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectParams {
    /// Results tree, walked recursively for `*.json`
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
}

impl Default for CollectParams {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            output_file: PathBuf::from(DEFAULT_ANNOTATIONS_FILE),
        }
    }
}

/// All pipeline settings, as read from an optional JSON config file.
/// Missing sections and fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preprocess: PreprocessParams,
    pub inference: InferenceParams,
    pub collect: CollectParams,
}

impl Config {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}
