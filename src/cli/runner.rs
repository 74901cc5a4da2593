use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use xrayprep::{
    CollectParams, Config, InferenceParams, PreprocessParams, collect_annotations,
    infer_directory, preprocess_directory,
};

use super::args::{CliArgs, CollectArgs, Command, InferArgs, PreprocessArgs};
use super::errors::AppError;

/// Parses `512` as 512x512 and `640x480` as width x height.
pub fn parse_size(size: &str) -> Result<(u32, u32), AppError> {
    let invalid = || AppError::InvalidSize {
        size: size.to_string(),
    };

    let (width, height) = match size.split_once(['x', 'X']) {
        Some((w, h)) => (
            w.trim().parse::<u32>().map_err(|_| invalid())?,
            h.trim().parse::<u32>().map_err(|_| invalid())?,
        ),
        None => {
            let side = size.trim().parse::<u32>().map_err(|_| invalid())?;
            (side, side)
        }
    };

    if width == 0 || height == 0 {
        return Err(AppError::ZeroSize {
            size: size.to_string(),
        });
    }
    Ok((width, height))
}

/// `RUST_LOG` directives when set and valid, `info` otherwise; `--log` raises
/// the default level to `debug` on top of them.
fn env_filter(debug: bool, rust_log: Option<&str>) -> EnvFilter {
    let filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    if debug {
        filter.add_directive(tracing::Level::DEBUG.into())
    } else {
        filter
    }
}

fn init_logging(debug: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug, rust_log.as_deref()))
        .with_target(false)
        .init();
}

fn progress_bar(hidden: bool, message: &'static str) -> Result<ProgressBar, AppError> {
    if hidden {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {msg} {bar:40.cyan/blue} {pos}/{len}")?
            .progress_chars("=>-"),
    );
    pb.set_message(message);
    Ok(pb)
}

fn apply_preprocess_args(
    mut params: PreprocessParams,
    args: PreprocessArgs,
) -> Result<PreprocessParams, AppError> {
    if let Some(dir) = args.input_dir {
        params.input_dir = dir;
    }
    if let Some(dir) = args.output_dir {
        params.output_dir = dir;
    }
    if let Some(size) = args.size.as_deref() {
        let (width, height) = parse_size(size)?;
        params.width = width;
        params.height = height;
    }
    if let Some(width) = args.width {
        params.width = width;
    }
    if let Some(height) = args.height {
        params.height = height;
    }
    if let Some(mode) = args.resize_mode {
        params.resize_mode = mode;
    }
    if let Some(quality) = args.jpeg_quality {
        params.jpeg_quality = quality;
    }
    Ok(params)
}

fn apply_infer_args(mut params: InferenceParams, args: InferArgs) -> InferenceParams {
    if let Some(dir) = args.input_dir {
        params.input_dir = dir;
    }
    if let Some(dir) = args.output_dir {
        params.output_dir = dir;
    }
    if let Some(endpoint) = args.endpoint {
        params.endpoint = endpoint;
    }
    params
}

fn apply_collect_args(mut params: CollectParams, args: CollectArgs) -> CollectParams {
    if let Some(dir) = args.input_dir {
        params.input_dir = dir;
    }
    if let Some(output) = args.output {
        params.output_file = output;
    }
    params
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let config = match args.config.as_deref() {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Config::from_json_file(path).map_err(AppError::from)?
        }
        None => Config::default(),
    };

    match args.command {
        Command::Preprocess(cmd) => {
            let params = apply_preprocess_args(config.preprocess, cmd)?;
            let pb = progress_bar(args.no_progress, "Preprocessing")?;
            preprocess_directory(&params, &pb).map_err(AppError::from)?;
        }
        Command::Infer(cmd) => {
            let params = apply_infer_args(config.inference, cmd);
            let pb = progress_bar(args.no_progress, "Running inference")?;
            infer_directory(&params, &pb).map_err(AppError::from)?;
        }
        Command::Collect(cmd) => {
            let params = apply_collect_args(config.collect, cmd);
            collect_annotations(&params).map_err(AppError::from)?;
        }
    }

    Ok(())
}
