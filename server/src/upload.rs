//! Upload worker client.
//!
//! Thin HTTP wrapper for the external worker's `POST {endpoint}/upload`:
//! a multipart form with an `image` file part and a `client` text part,
//! answered with `{ "key", "url" }`. Pure parsing in `parse_upload_response`
//! for testability.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx status, transport failure, or malformed body is an
//! [`UploadError`]; callers never see a partially filled result.

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::UploadConfig;

const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The image part could not be assembled (bad content type).
    #[error("invalid image part: {0}")]
    InvalidPart(String),

    /// The request to the worker failed before a response arrived.
    #[error("upload request failed: {0}")]
    Request(String),

    /// The worker answered with a non-success status.
    #[error("upload rejected: status {status}")]
    Rejected { status: u16, body: String },

    /// A success response did not carry a usable `{key, url}` body.
    #[error("upload response parse failed: {0}")]
    Parse(String),
}

/// Stored image location returned by the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub key: String,
    pub url: String,
}

/// One image to relay.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: Option<String>,
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct UploadClient {
    http: reqwest::Client,
    upload_url: String,
    default_client: String,
}

impl UploadClient {
    /// # Errors
    ///
    /// Returns [`UploadError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &UploadConfig) -> Result<Self, UploadError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| UploadError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, upload_url: upload_url(&config.endpoint), default_client: config.client.clone() })
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    pub fn default_client(&self) -> &str {
        &self.default_client
    }

    /// Send `image` to the worker tagged with `client`.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError`] for any outcome other than a 2xx response with
    /// a complete `{key, url}` body.
    pub async fn upload(&self, image: ImageUpload, client: &str) -> Result<UploadedImage, UploadError> {
        let mut part = reqwest::multipart::Part::bytes(image.bytes).file_name(image.file_name);
        if let Some(content_type) = image.content_type.as_deref() {
            part = part.mime_str(content_type).map_err(|e| UploadError::InvalidPart(e.to_string()))?;
        }
        let form = reqwest::multipart::Form::new().part("image", part).text("client", client.to_owned());

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| UploadError::Request(e.to_string()))?;

        parse_upload_response(status, &text)
    }
}

fn upload_url(endpoint: &str) -> String {
    format!("{}/upload", endpoint.trim_end_matches('/'))
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_upload_response(status: u16, body: &str) -> Result<UploadedImage, UploadError> {
    if !(200..300).contains(&status) {
        return Err(UploadError::Rejected { status, body: body.to_owned() });
    }
    let image: UploadedImage = serde_json::from_str(body).map_err(|e| UploadError::Parse(e.to_string()))?;
    if image.key.is_empty() || image.url.is_empty() {
        return Err(UploadError::Parse("empty key or url".to_owned()));
    }
    Ok(image)
}
