//! Inference endpoint integration: request encoding and the HTTP client.
pub mod client;

pub use client::{InferenceClient, PredictRequest, Prediction};
