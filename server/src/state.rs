//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only shared resource is the upload worker client; it is immutable, so an
//! `Arc` is enough and no locking is involved.

use std::sync::Arc;

use crate::upload::UploadClient;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub uploads: Arc<UploadClient>,
}

impl AppState {
    #[must_use]
    pub fn new(uploads: UploadClient) -> Self {
        Self { uploads: Arc::new(uploads) }
    }
}
