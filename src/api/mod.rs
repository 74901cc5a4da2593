//! High-level, ergonomic library API: preprocess a radiograph tree into a flat
//! directory, run every preprocessed image through the inference endpoint, and
//! merge the per-image results into one annotation index. Prefer these
//! entrypoints over the low-level processing modules when integrating xrayprep.
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::params::{CollectParams, InferenceParams, PreprocessParams};
use crate::core::processing::pipeline::{decode_image, process_image_pipeline};
use crate::core::processing::save::save_gray_image;
use crate::error::{Error, Result};
use crate::inference::{InferenceClient, Prediction};
use crate::io::discovery::{scan_images_flat, scan_images_recursive, scan_json_recursive};
use crate::io::writers::write_pretty_json;

/// One file that did not produce an output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Batch processing report
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    /// Outputs replaced by a later file with the same name in the same run
    pub overwritten: usize,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    fn record_failure(&mut self, path: &Path, reason: String) {
        self.failures.push(FileFailure {
            path: path.to_path_buf(),
            reason,
        });
    }
}

/// Result of sending one file to the endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceOutcome {
    Saved(PathBuf),
    Rejected(StatusCode),
}

fn file_name_of(path: &Path) -> Result<&std::ffi::OsStr> {
    path.file_name().ok_or_else(|| Error::InvalidArgument {
        arg: "path",
        value: path.display().to_string(),
    })
}

/// Decode, grayscale, resize and save a single image to `output`.
pub fn preprocess_image_file(input: &Path, output: &Path, params: &PreprocessParams) -> Result<()> {
    let img = decode_image(input)?;
    let processed = process_image_pipeline(img, params)?;
    save_gray_image(&processed, output, params.jpeg_quality)
}

/// Preprocess every supported image below `params.input_dir` into the flat
/// `params.output_dir`, keeping the original file names. A failing file is
/// logged and recorded in the report; the batch carries on.
pub fn preprocess_directory(params: &PreprocessParams, progress: &ProgressBar) -> Result<BatchReport> {
    params.validate()?;
    fs::create_dir_all(&params.output_dir)?;

    info!("Starting preprocessing from directory: {:?}", params.input_dir);
    info!("Output directory: {:?}", params.output_dir);
    info!(
        "Target size: {}x{} ({})",
        params.width, params.height, params.resize_mode
    );

    let mut images = scan_images_recursive(&params.input_dir)?;
    // An output directory nested below the source root must not feed back into
    // the batch; an in-place run (same directory) converts every file.
    if params.output_dir != params.input_dir {
        images.retain(|p| !p.starts_with(&params.output_dir));
    }
    info!("Found {} images", images.len());
    progress.set_length(images.len() as u64);

    let mut report = BatchReport::default();
    let mut written = HashSet::new();

    for path in &images {
        let name = file_name_of(path)?;
        let output_path = params.output_dir.join(name);

        if !written.insert(name.to_os_string()) {
            warn!(
                "Duplicate file name {:?}: {:?} overwrites an earlier output",
                name, path
            );
            report.overwritten += 1;
        }

        debug!("Processing: {:?} -> {:?}", path, output_path);
        match preprocess_image_file(path, &output_path, params) {
            Ok(()) => report.processed += 1,
            Err(e) => {
                warn!("Failed {:?}: {}", path, e);
                report.errors += 1;
                report.record_failure(path, e.to_string());
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    info!("Preprocessing complete!");
    info!("Processed: {}", report.processed);
    info!("Errors: {}", report.errors);
    if report.overwritten > 0 {
        info!("Overwritten: {}", report.overwritten);
    }

    Ok(report)
}

/// Send one image to the endpoint; on HTTP 200 write `<output_dir>/<file name>.json`.
pub fn infer_image_file(
    client: &InferenceClient,
    input: &Path,
    output_dir: &Path,
) -> Result<InferenceOutcome> {
    let name = file_name_of(input)?;
    let bytes = fs::read(input)?;

    match client.predict(&bytes)? {
        Prediction::Accepted(value) => {
            let mut out_name = name.to_os_string();
            out_name.push(".json");
            let output_path = output_dir.join(out_name);
            write_pretty_json(&output_path, &value)?;
            Ok(InferenceOutcome::Saved(output_path))
        }
        Prediction::Rejected(status) => Ok(InferenceOutcome::Rejected(status)),
    }
}

/// Run every supported image directly inside `params.input_dir` through the
/// endpoint. Non-200 responses are logged and skipped; transport errors and
/// malformed success bodies abort the run.
pub fn infer_directory(params: &InferenceParams, progress: &ProgressBar) -> Result<BatchReport> {
    params.validate()?;
    fs::create_dir_all(&params.output_dir)?;

    let client = InferenceClient::new(&params.endpoint)?;
    let images = scan_images_flat(&params.input_dir)?;

    info!(
        "Running inference on {} images against {}",
        images.len(),
        client.endpoint()
    );
    progress.set_length(images.len() as u64);

    let mut report = BatchReport::default();
    for path in &images {
        match infer_image_file(&client, path, &params.output_dir)? {
            InferenceOutcome::Saved(output_path) => {
                debug!("Saved {:?}", output_path);
                report.processed += 1;
            }
            InferenceOutcome::Rejected(status) => {
                let name = path.file_name().unwrap_or_default().to_string_lossy();
                warn!("Skipped {}: HTTP {}", name, status.as_u16());
                report.skipped += 1;
                report.record_failure(path, format!("HTTP {}", status.as_u16()));
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    info!("Saved: {}, skipped: {}", report.processed, report.skipped);
    info!(
        "Inference complete. Results written under: {}",
        params.output_dir.display()
    );

    Ok(report)
}

/// Key for a result file: its path relative to the results root, `/`-separated,
/// without the trailing `.json`.
pub fn annotation_key(root: &Path, path: &Path) -> Result<String> {
    let rel = path.strip_prefix(root).map_err(|_| Error::InvalidArgument {
        arg: "path",
        value: path.display().to_string(),
    })?;
    let joined = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    Ok(joined
        .strip_suffix(".json")
        .map(str::to_string)
        .unwrap_or(joined))
}

/// Merge every `*.json` result below `params.input_dir` into one object and
/// write it to `params.output_file`. Returns the number of entries.
pub fn collect_annotations(params: &CollectParams) -> Result<usize> {
    let files = scan_json_recursive(&params.input_dir)?;

    let mut annotations: BTreeMap<String, Value> = BTreeMap::new();
    for path in &files {
        if path == &params.output_file {
            continue;
        }
        let text = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text).map_err(|source| Error::InvalidJson {
            path: path.clone(),
            source,
        })?;
        annotations.insert(annotation_key(&params.input_dir, path)?, value);
    }

    write_pretty_json(&params.output_file, &annotations)?;
    info!(
        "Wrote {} annotations to {}",
        annotations.len(),
        params.output_file.display()
    );
    Ok(annotations.len())
}
