//! `POST /api/upload`: relay a browser image upload to the upload worker.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use serde_json::json;

use crate::state::AppState;
use crate::upload::{ImageUpload, UploadedImage};

const DEFAULT_FILE_NAME: &str = "upload";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FormError {
    Malformed(String),
    MissingImage,
    EmptyImage,
}

impl FormError {
    fn message(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "malformed multipart body",
            Self::MissingImage => "missing image",
            Self::EmptyImage => "empty image",
        }
    }
}

/// Pull the `image` file part and optional `client` text part out of the
/// form. Unknown fields are ignored.
pub(crate) async fn read_upload_form(mut multipart: Multipart) -> Result<(ImageUpload, Option<String>), FormError> {
    let mut image = None;
    let mut client = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| FormError::Malformed(e.to_string()))? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("image") => {
                let file_name = field
                    .file_name()
                    .filter(|n| !n.is_empty())
                    .unwrap_or(DEFAULT_FILE_NAME)
                    .to_owned();
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field.bytes().await.map_err(|e| FormError::Malformed(e.to_string()))?;
                image = Some(ImageUpload { bytes: bytes.to_vec(), file_name, content_type });
            }
            Some("client") => {
                let value = field.text().await.map_err(|e| FormError::Malformed(e.to_string()))?;
                let value = value.trim();
                if !value.is_empty() {
                    client = Some(value.to_owned());
                }
            }
            _ => {}
        }
    }

    let image = image.ok_or(FormError::MissingImage)?;
    if image.bytes.is_empty() {
        return Err(FormError::EmptyImage);
    }
    Ok((image, client))
}

/// Relay the image. Worker failures of any kind surface as a generic 502.
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadedImage>, (StatusCode, Json<serde_json::Value>)> {
    let (image, client) = read_upload_form(multipart).await.map_err(|e| {
        if let FormError::Malformed(detail) = &e {
            tracing::debug!(%detail, "malformed upload form");
        }
        (StatusCode::BAD_REQUEST, Json(json!({ "error": e.message() })))
    })?;
    let client = client.unwrap_or_else(|| state.uploads.default_client().to_owned());
    let size = image.bytes.len();

    match state.uploads.upload(image, &client).await {
        Ok(uploaded) => {
            tracing::info!(%client, size, key = %uploaded.key, "image uploaded");
            Ok(Json(uploaded))
        }
        Err(e) => {
            tracing::warn!(%client, size, error = %e, "image upload failed");
            Err((StatusCode::BAD_GATEWAY, Json(json!({ "error": "upload failed" }))))
        }
    }
}
