//! Core processing building blocks: grayscale conversion, resize/padding,
//! the per-image pipeline, and save helpers. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
