//! Command Line Interface (CLI) layer for xrayprep.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the preprocess, infer and
//! collect subcommands. Defaults come from the library's parameter types,
//! an optional JSON config file overrides them, and flags override both.
//!
//! If you are embedding xrayprep into another application, prefer using
//! the high-level `xrayprep::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
