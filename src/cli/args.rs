use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use xrayprep::ResizeMode;

#[derive(Parser)]
#[command(name = "xrayprep", version, about = "Radiograph preprocessing and inference batch runner")]
pub struct CliArgs {
    /// JSON config file; flags given on the command line take precedence
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    /// Hide progress bars
    #[arg(long, global = true, default_value_t = false)]
    pub no_progress: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Grayscale and resize a raw image tree into a flat directory
    Preprocess(PreprocessArgs),
    /// Send preprocessed images to the inference endpoint
    Infer(InferArgs),
    /// Merge per-image results into a single annotations file
    Collect(CollectArgs),
}

#[derive(Args)]
pub struct PreprocessArgs {
    /// Raw image root, walked recursively
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Flat output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Target size. Options:
    /// - Square: a single positive integer (e.g., 512)
    /// - Explicit: WIDTHxHEIGHT (e.g., 640x480)
    #[arg(long, conflicts_with_all = ["width", "height"])]
    pub size: Option<String>,

    /// Target width in pixels; the height keeps its configured value unless given
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Target height in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// How to fit images to the target size (stretch or letterbox)
    #[arg(long, value_enum)]
    pub resize_mode: Option<ResizeMode>,

    /// Quality for JPEG outputs (1-100)
    #[arg(long)]
    pub jpeg_quality: Option<u8>,
}

#[derive(Args)]
pub struct InferArgs {
    /// Directory of preprocessed images (not walked recursively)
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving `<image>.json` results
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Inference endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,
}

#[derive(Args)]
pub struct CollectArgs {
    /// Results directory, walked recursively for `*.json`
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Merged annotations file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
