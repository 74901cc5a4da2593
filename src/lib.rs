#![doc = r#"
xrayprep — batch tooling that feeds dental radiographs to an inference service.

Three stages share nothing but a directory layout:

1. **Preprocess**: walk a raw image tree, convert every PNG/JPEG to 8-bit
   grayscale, resize it to the model's input size, and write it to a flat
   directory under its original file name.
2. **Infer**: POST each preprocessed image as `{"image": "<base64>"}` to an
   HTTP endpoint and store every HTTP 200 JSON answer as `<file name>.json`.
3. **Collect**: merge all per-image JSON results into a single index keyed by
   relative image path.

Quick start
-----------
```rust,no_run
use indicatif::ProgressBar;
use xrayprep::{Config, collect_annotations, infer_directory, preprocess_directory};

fn main() -> xrayprep::Result<()> {
    let config = Config::default();

    let report = preprocess_directory(&config.preprocess, &ProgressBar::hidden())?;
    println!("preprocessed={} errors={}", report.processed, report.errors);

    let report = infer_directory(&config.inference, &ProgressBar::hidden())?;
    println!("saved={} skipped={}", report.processed, report.skipped);

    let count = collect_annotations(&config.collect)?;
    println!("annotations={count}");
    Ok(())
}
```

Error handling
--------------
Per-file failures during preprocessing and non-200 answers during inference
are logged and recorded in the returned [`BatchReport`]. Anything else
(unreadable directories, refused connections, a 200 body that is not JSON)
is returned as an [`Error`] and ends the run.

Useful modules
--------------
- [`api`] — high-level batch entry points.
- [`core`] — parameters, grayscale conversion, resize/padding, save helpers.
- [`inference`] — the HTTP client for the endpoint.
- [`io`] — file discovery and output writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod inference;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{CollectParams, Config, InferenceParams, PreprocessParams};
pub use error::{Error, Result};
pub use types::{ImageFormat, ResizeMode};

// Client
pub use inference::{InferenceClient, Prediction};

// High-level API re-exports
pub use api::{
    BatchReport, FileFailure, InferenceOutcome, collect_annotations, infer_directory,
    infer_image_file, preprocess_directory, preprocess_image_file,
};
