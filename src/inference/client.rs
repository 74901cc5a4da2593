//! Blocking HTTP client for the image inference endpoint.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Request body sent to the endpoint
#[derive(Debug, Serialize)]
pub struct PredictRequest {
    /// Standard, padded base64 of the raw file bytes
    pub image: String,
}

impl PredictRequest {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            image: STANDARD.encode(bytes),
        }
    }
}

/// Outcome of one request that reached the server
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    /// HTTP 200 with a JSON body
    Accepted(Value),
    /// Any other status; the body is discarded
    Rejected(StatusCode),
}

#[derive(Debug, Clone)]
pub struct InferenceClient {
    endpoint: String,
    client: Client,
}

impl InferenceClient {
    /// Uses the HTTP client's default timeout; no retries are configured.
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one image. Transport failures and a 200 whose body is not JSON
    /// are errors; every other status is a `Rejected` prediction.
    pub fn predict(&self, image_bytes: &[u8]) -> Result<Prediction> {
        let body = serde_json::to_vec(&PredictRequest::from_bytes(image_bytes))?;
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        let status = response.status();
        debug!("POST {} -> {}", self.endpoint, status);
        if status != StatusCode::OK {
            return Ok(Prediction::Rejected(status));
        }

        let body = response.bytes()?;
        let value: Value = serde_json::from_slice(&body)?;
        Ok(Prediction::Accepted(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let req = PredictRequest::from_bytes(b"\x89PNG");
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"image":"iVBORw=="}"#);
    }

    #[test]
    fn test_empty_payload_encodes_to_empty_string() {
        assert_eq!(PredictRequest::from_bytes(&[]).image, "");
    }
}
