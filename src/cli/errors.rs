use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid size parameter: {size}. Must be a positive integer or WIDTHxHEIGHT")]
    InvalidSize { size: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: String },

    #[error(transparent)]
    Library(#[from] xrayprep::Error),

    #[error("Progress bar template error: {0}")]
    Template(#[from] indicatif::style::TemplateError),
}
