//! HTTP client for the steganography service.
//!
//! This module provides:
//!
//! - `StegoClient`: HTTP client wrapper bound to a service base URL
//! - `encode` / `decode`: one multipart round trip per call
//! - Error normalization that turns failed responses into one readable string
//!
//! Wire contract:
//!
//! | Operation | Request                                        | Success body          |
//! |-----------|------------------------------------------------|-----------------------|
//! | Encode    | `POST /encode/{method}`, parts `image`, `message` | raw image bytes     |
//! | Decode    | `POST /decode/{method}`, part `image`          | `{"message"}` or `{"text"}` |
//!
//! Failed responses may carry `{"detail": ...}`. There are no retries and no
//! timeouts; a request lives until the service answers.

use std::time::Instant;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::image_file::ImageFile;
use crate::method::StegoMethod;

/// Service endpoint used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the configured base URL
pub const BASE_URL_ENV: &str = "STEGO_API_URL";

/// User agent for API requests
const USER_AGENT: &str = concat!("stego-toolkit/", env!("CARGO_PKG_VERSION"));

/// Errors surfaced by the transfer layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-success status
    #[error("{0}")]
    Service(String),

    #[error("Could not reach the steganography service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response from the steganography service: {0}")]
    InvalidResponse(String),
}

/// The two operations the service exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encode,
    Decode,
}

impl Operation {
    /// First path segment of the endpoint
    pub fn path(&self) -> &'static str {
        match self {
            Operation::Encode => "encode",
            Operation::Decode => "decode",
        }
    }

    /// Error text when the failure body is missing or not JSON
    fn unreadable_failure(&self) -> &'static str {
        match self {
            Operation::Encode => "Encoding failed",
            Operation::Decode => "Decoding failed",
        }
    }

    /// Error text when the failure body is JSON without a usable `detail`
    fn missing_detail(&self) -> &'static str {
        match self {
            Operation::Encode => "Failed to encode image",
            Operation::Decode => "Failed to decode image",
        }
    }
}

/// Image payload returned by a successful encode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    /// `Content-Type` reported by the service, if any
    pub content_type: Option<String>,
}

impl EncodedImage {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
struct FailureBody {
    #[serde(default)]
    detail: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct DecodeBody {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    text: Option<Value>,
}

/// Steganography service client
#[derive(Debug, Clone)]
pub struct StegoClient {
    client: reqwest::Client,
    base_url: String,
}

impl StegoClient {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&base_url.into()),
        })
    }

    /// Base URL with trailing slashes removed
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full endpoint URL for an operation and method
    pub fn endpoint(&self, operation: Operation, method: StegoMethod) -> String {
        format!("{}/{}/{}", self.base_url, operation.path(), method.token())
    }

    /// Interactive API documentation page served by the service
    pub fn docs_url(&self) -> String {
        format!("{}/docs", self.base_url)
    }

    /// Hide `message` inside `image` using `method`.
    ///
    /// The message is sent exactly as given; callers validate it first.
    pub async fn encode(
        &self,
        image: &ImageFile,
        message: &str,
        method: StegoMethod,
    ) -> Result<EncodedImage, ApiError> {
        let start = Instant::now();
        let url = self.endpoint(Operation::Encode, method);
        let form = Form::new()
            .part("image", image_part(image)?)
            .text("message", message.to_string());

        tracing::info!(
            "Encoding {} ({} bytes, {} chars) via {}",
            image.upload_name(),
            image.len(),
            message.chars().count(),
            url
        );

        let response = self.client.post(&url).multipart(form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.bytes().await.unwrap_or_default();
            let message = failure_message(Operation::Encode, &body);
            tracing::warn!("Encode failed with {}: {}", status, message);
            return Err(ApiError::Service(message));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?.to_vec();

        tracing::info!(
            "Encoded image received: {} bytes in {:.1}s",
            bytes.len(),
            start.elapsed().as_secs_f32()
        );

        Ok(EncodedImage {
            bytes,
            content_type,
        })
    }

    /// Extract the hidden message from `image` using `method`
    pub async fn decode(&self, image: &ImageFile, method: StegoMethod) -> Result<String, ApiError> {
        let start = Instant::now();
        let url = self.endpoint(Operation::Decode, method);
        let form = Form::new().part("image", image_part(image)?);

        tracing::info!(
            "Decoding {} ({} bytes) via {}",
            image.upload_name(),
            image.len(),
            url
        );

        let response = self.client.post(&url).multipart(form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.bytes().await.unwrap_or_default();
            let message = failure_message(Operation::Decode, &body);
            tracing::warn!("Decode failed with {}: {}", status, message);
            return Err(ApiError::Service(message));
        }

        let body = response.bytes().await?;
        let message = decoded_message(&body)?;

        tracing::info!(
            "Decoded {} chars in {:.1}s",
            message.chars().count(),
            start.elapsed().as_secs_f32()
        );

        Ok(message)
    }
}

fn image_part(image: &ImageFile) -> Result<Part, ApiError> {
    let part = Part::bytes(image.bytes().to_vec())
        .file_name(image.upload_name())
        .mime_str(image.mime())?;
    Ok(part)
}

/// Strip whitespace and trailing slashes so paths join cleanly
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Turn a failed response body into the error text shown to the user
pub fn failure_message(operation: Operation, body: &[u8]) -> String {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return operation.unreadable_failure().to_string();
    };
    let parsed: FailureBody = object_fields(value);

    parsed
        .detail
        .as_ref()
        .and_then(detail_text)
        .unwrap_or_else(|| operation.missing_detail().to_string())
}

fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        // FastAPI validation errors: [{"loc": [...], "msg": "...", "type": "..."}]
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if msgs.is_empty() {
                Some(detail.to_string())
            } else {
                Some(msgs.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}

/// Pull the hidden message out of a successful decode body.
///
/// `message` wins over `text`; neither present yields an empty string.
pub fn decoded_message(body: &[u8]) -> Result<String, ApiError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
    let parsed: DecodeBody = object_fields(value);

    Ok(text_field(parsed.message.as_ref())
        .or_else(|| text_field(parsed.text.as_ref()))
        .unwrap_or_default())
}

/// Read named fields from a JSON object; any other JSON shape has none
fn object_fields<T: serde::de::DeserializeOwned + Default>(value: Value) -> T {
    if value.is_object() {
        serde_json::from_value(value).unwrap_or_default()
    } else {
        T::default()
    }
}

/// A field counts only when truthy: null, false, 0 and "" fall through
fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
